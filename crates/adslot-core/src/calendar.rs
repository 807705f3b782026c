// ── Calendar grid model ──
//
// Pure derivation of a month view: for a reference month and the
// bookings fetched for it, produce the ordered cell sequence a
// week-aligned grid renders. Weeks start on Sunday; leading blanks
// align day 1 under its weekday column.
//
// Overlap volumes are a few dozen bookings per month, so every day is
// tested against every booking directly. No pre-indexing.

use chrono::{Datelike, Days, Months, NaiveDate};
use serde::Serialize;

use crate::model::CalendarBooking;

/// One displayed month, with prev/next navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthGrid {
    pub year: i32,
    /// 1-based month number.
    pub month: u32,
}

impl MonthGrid {
    /// A grid for the given year/month. Returns `None` for an invalid
    /// month number.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|_| Self { year, month })
    }

    /// The grid containing the given date.
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// First calendar day of the month (refetch range start).
    pub fn first_day(self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .expect("MonthGrid is only constructed from valid months")
    }

    /// Last calendar day of the month (refetch range end).
    pub fn last_day(self) -> NaiveDate {
        let next = self.first_day() + Months::new(1);
        next - Days::new(1)
    }

    /// Number of days in this month, per Gregorian rules.
    pub fn days_in_month(self) -> u32 {
        self.last_day().day()
    }

    /// Weekday column of day 1, Sunday = 0.
    pub fn leading_blanks(self) -> usize {
        self.first_day().weekday().num_days_from_sunday() as usize
    }

    /// The previous month.
    pub fn prev(self) -> Self {
        Self::containing(self.first_day() - Months::new(1))
    }

    /// The next month.
    pub fn next(self) -> Self {
        Self::containing(self.first_day() + Months::new(1))
    }

    /// "March 2025"-style heading.
    pub fn title(self) -> String {
        self.first_day().format("%B %Y").to_string()
    }

    /// Build the ordered cell sequence for this month.
    ///
    /// `selection` is the user's in-progress (start, end) range; it only
    /// marks cells when both ends are present. `today` is passed in so
    /// the derivation stays a pure function.
    pub fn cells(
        self,
        bookings: &[CalendarBooking],
        selection: Option<(NaiveDate, NaiveDate)>,
        today: NaiveDate,
    ) -> Vec<Cell> {
        let mut cells = Vec::with_capacity(self.leading_blanks() + self.days_in_month() as usize);
        cells.extend(std::iter::repeat_n(Cell::Blank, self.leading_blanks()));

        for day in 1..=self.days_in_month() {
            let date = NaiveDate::from_ymd_opt(self.year, self.month, day)
                .expect("day is within days_in_month");

            let overlapping: Vec<CalendarBooking> = bookings
                .iter()
                .filter(|b| b.covers(date))
                .cloned()
                .collect();

            let overflow_count = (overlapping.len() > MAX_VISIBLE_BOOKINGS)
                .then(|| overlapping.len() - MAX_VISIBLE_BOOKINGS);

            let in_selection = selection
                .is_some_and(|(start, end)| date >= start && date <= end);

            cells.push(Cell::Day(DayCell {
                day,
                date,
                bookings: overlapping,
                is_today: date == today,
                in_selection,
                overflow_count,
            }));
        }

        cells
    }
}

/// At most this many bookings are listed inside a cell; the rest are
/// collapsed into an overflow count.
pub const MAX_VISIBLE_BOOKINGS: usize = 2;

/// One slot of the rendered grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Cell {
    /// Padding before day 1 so weekday columns line up.
    Blank,
    Day(DayCell),
}

/// Everything a renderer needs for one day of the month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayCell {
    /// 1-based day number.
    pub day: u32,
    pub date: NaiveDate,
    /// Bookings whose inclusive range covers this date.
    pub bookings: Vec<CalendarBooking>,
    pub is_today: bool,
    /// Inside the user's pending selection range.
    pub in_selection: bool,
    /// `len - 2` when more than two bookings overlap, else `None`.
    pub overflow_count: Option<usize>,
}

impl DayCell {
    /// The bookings shown inline (first two, matching the overflow
    /// contract).
    pub fn visible_bookings(&self) -> &[CalendarBooking] {
        let visible = self.bookings.len().min(MAX_VISIBLE_BOOKINGS);
        &self.bookings[..visible]
    }
}

/// Weekday column labels, Sunday first.
pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Weekday of an arbitrary date, for alignment checks.
pub fn weekday_index(date: NaiveDate) -> u32 {
    date.weekday().num_days_from_sunday()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::model::BookingStatus;

    use super::*;

    fn d(s: &str) -> NaiveDate {
        s.parse().expect("date")
    }

    fn booking(id: i64, start: &str, end: &str) -> CalendarBooking {
        CalendarBooking {
            id,
            ad_title: Some(format!("Ad {id}")),
            placement_name: Some("Homepage Banner".into()),
            start_date: d(start),
            end_date: d(end),
            status: BookingStatus::Confirmed,
        }
    }

    fn day_cells(cells: &[Cell]) -> Vec<&DayCell> {
        cells
            .iter()
            .filter_map(|c| match c {
                Cell::Day(day) => Some(day),
                Cell::Blank => None,
            })
            .collect()
    }

    #[test]
    fn march_2025_shape() {
        // 2025-03-01 is a Saturday.
        let grid = MonthGrid::new(2025, 3).expect("month");
        assert_eq!(grid.days_in_month(), 31);
        assert_eq!(grid.leading_blanks(), 6);

        let cells = grid.cells(&[], None, d("2025-03-15"));
        assert_eq!(cells.len(), 6 + 31);
        assert!(matches!(cells[5], Cell::Blank));
        match &cells[6] {
            Cell::Day(day) => assert_eq!(day.day, 1),
            Cell::Blank => panic!("expected day 1 after the blanks"),
        }
    }

    #[test]
    fn leap_february_has_29_days() {
        let grid = MonthGrid::new(2024, 2).expect("month");
        assert_eq!(grid.days_in_month(), 29);
        // 2024-02-01 is a Thursday.
        assert_eq!(grid.leading_blanks(), 4);
        assert_eq!(grid.cells(&[], None, d("2024-02-15")).len(), 4 + 29);
    }

    #[test]
    fn non_leap_february_has_28_days() {
        let grid = MonthGrid::new(2025, 2).expect("month");
        assert_eq!(grid.days_in_month(), 28);
    }

    #[test]
    fn century_leap_rule() {
        assert_eq!(MonthGrid::new(2000, 2).expect("month").days_in_month(), 29);
        assert_eq!(MonthGrid::new(1900, 2).expect("month").days_in_month(), 28);
    }

    #[test]
    fn invalid_month_rejected() {
        assert!(MonthGrid::new(2025, 13).is_none());
        assert!(MonthGrid::new(2025, 0).is_none());
    }

    #[test]
    fn overlap_marks_exactly_the_inclusive_range() {
        let grid = MonthGrid::new(2025, 3).expect("month");
        let bookings = vec![booking(1, "2025-03-10", "2025-03-12")];
        let cells = grid.cells(&bookings, None, d("2025-03-01"));
        let days = day_cells(&cells);

        for day in &days {
            let expected = (10..=12).contains(&day.day);
            assert_eq!(
                !day.bookings.is_empty(),
                expected,
                "day {} overlap mismatch",
                day.day
            );
        }
    }

    #[test]
    fn booking_spilling_in_from_previous_month_still_marks_days() {
        let grid = MonthGrid::new(2025, 3).expect("month");
        let bookings = vec![booking(1, "2025-02-20", "2025-03-02")];
        let cells = grid.cells(&bookings, None, d("2025-03-01"));
        let days = day_cells(&cells);

        assert_eq!(days[0].bookings.len(), 1);
        assert_eq!(days[1].bookings.len(), 1);
        assert!(days[2].bookings.is_empty());
    }

    #[test]
    fn overflow_count_appears_past_two_bookings() {
        let grid = MonthGrid::new(2025, 3).expect("month");
        let bookings = vec![
            booking(1, "2025-03-10", "2025-03-10"),
            booking(2, "2025-03-10", "2025-03-10"),
            booking(3, "2025-03-10", "2025-03-10"),
            booking(4, "2025-03-10", "2025-03-10"),
        ];
        let cells = grid.cells(&bookings, None, d("2025-03-01"));
        let days = day_cells(&cells);

        let crowded = days.iter().find(|c| c.day == 10).expect("day 10");
        assert_eq!(crowded.overflow_count, Some(2));
        assert_eq!(crowded.visible_bookings().len(), 2);

        let two = days.iter().find(|c| c.day == 9).expect("day 9");
        assert_eq!(two.overflow_count, None);
    }

    #[test]
    fn exactly_two_bookings_no_overflow() {
        let grid = MonthGrid::new(2025, 3).expect("month");
        let bookings = vec![
            booking(1, "2025-03-10", "2025-03-10"),
            booking(2, "2025-03-10", "2025-03-10"),
        ];
        let cells = grid.cells(&bookings, None, d("2025-03-01"));
        let crowded = day_cells(&cells)
            .into_iter()
            .find(|c| c.day == 10)
            .expect("day 10");
        assert_eq!(crowded.overflow_count, None);
        assert_eq!(crowded.visible_bookings().len(), 2);
    }

    #[test]
    fn selection_marks_inclusive_range_only_when_complete() {
        let grid = MonthGrid::new(2025, 3).expect("month");
        let cells = grid.cells(&[], Some((d("2025-03-05"), d("2025-03-07"))), d("2025-03-01"));
        let days = day_cells(&cells);

        for day in &days {
            assert_eq!(day.in_selection, (5..=7).contains(&day.day), "day {}", day.day);
        }

        // No selection → no marks.
        let cells = grid.cells(&[], None, d("2025-03-01"));
        assert!(day_cells(&cells).iter().all(|c| !c.in_selection));
    }

    #[test]
    fn today_marked_only_inside_displayed_month() {
        let grid = MonthGrid::new(2025, 3).expect("month");
        let cells = grid.cells(&[], None, d("2025-03-15"));
        let marked: Vec<u32> = day_cells(&cells)
            .iter()
            .filter(|c| c.is_today)
            .map(|c| c.day)
            .collect();
        assert_eq!(marked, vec![15]);

        // Today outside the month marks nothing.
        let cells = grid.cells(&[], None, d("2025-04-15"));
        assert!(day_cells(&cells).iter().all(|c| !c.is_today));
    }

    #[test]
    fn navigation_and_refetch_range() {
        let grid = MonthGrid::new(2025, 1).expect("month");
        assert_eq!(grid.prev(), MonthGrid::new(2024, 12).expect("month"));
        assert_eq!(grid.next(), MonthGrid::new(2025, 2).expect("month"));
        assert_eq!(grid.first_day(), d("2025-01-01"));
        assert_eq!(grid.last_day(), d("2025-01-31"));
        assert_eq!(grid.next().last_day(), d("2025-02-28"));
        assert_eq!(grid.title(), "January 2025");
    }

    #[test]
    fn every_month_of_2025_has_consistent_cell_count() {
        for month in 1..=12 {
            let grid = MonthGrid::new(2025, month).expect("month");
            let cells = grid.cells(&[], None, d("2025-06-15"));
            assert_eq!(
                cells.len(),
                grid.leading_blanks() + grid.days_in_month() as usize,
                "month {month}"
            );
            assert_eq!(
                weekday_index(grid.first_day()) as usize,
                grid.leading_blanks(),
                "month {month}"
            );
        }
    }
}

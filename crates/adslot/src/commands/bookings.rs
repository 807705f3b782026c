//! Booking command handlers, including the month calendar view.

use chrono::{NaiveDate, Utc};
use owo_colors::OwoColorize;
use tabled::Tabled;

use adslot_core::calendar::{Cell, MonthGrid, WEEKDAY_LABELS};
use adslot_core::model::CalendarBooking;
use adslot_core::pricing::BookingForm;
use adslot_core::{Booking, BookingStatus, Portal};

use crate::cli::{BookingStatusFilter, BookingsArgs, BookingsCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

// ── Table rows ──────────────────────────────────────────────────────

#[derive(Tabled)]
struct BookingRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Ad")]
    ad: String,
    #[tabled(rename = "Placement")]
    placement: String,
    #[tabled(rename = "From")]
    from: String,
    #[tabled(rename = "To")]
    to: String,
    #[tabled(rename = "Days")]
    days: i64,
    #[tabled(rename = "Total")]
    total: String,
    #[tabled(rename = "Status")]
    status: String,
}

impl From<&Booking> for BookingRow {
    fn from(b: &Booking) -> Self {
        Self {
            id: b.id,
            ad: b.ad_title.clone().unwrap_or_else(|| b.ad_id.to_string()),
            placement: b
                .placement_name
                .clone()
                .unwrap_or_else(|| b.placement_id.to_string()),
            from: b.start_date.to_string(),
            to: b.end_date.to_string(),
            days: b.total_days,
            total: format!("${}", b.total_price),
            status: b.status.to_string(),
        }
    }
}

fn booking_detail(b: &Booking) -> String {
    let mut lines = vec![
        format!("Ad:        {}", b.ad_title.clone().unwrap_or_else(|| b.ad_id.to_string())),
        format!(
            "Placement: {}",
            b.placement_name.clone().unwrap_or_else(|| b.placement_id.to_string())
        ),
        format!("Period:    {} to {} ({} days)", b.start_date, b.end_date, b.total_days),
        format!("Price:     ${}/day, ${} total", b.price_per_day, b.total_price),
        format!("Status:    {}", b.status),
    ];
    if let Some(ref reason) = b.cancellation_reason {
        lines.push(format!("Cancelled: {reason}"));
    }
    lines.join("\n")
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    portal: &Portal,
    args: BookingsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        BookingsCommand::List { status } => {
            let bookings = portal
                .list_bookings(status.map(BookingStatus::from))
                .await?;
            let out = output::render_list(
                &global.output,
                &bookings,
                |r| BookingRow::from(r),
                |b| b.id.to_string(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        BookingsCommand::Get { id } => {
            let booking = portal.get_booking(id).await?;
            let out = output::render_single(&global.output, &booking, booking_detail, |b| {
                b.id.to_string()
            });
            output::print_output(&out, global.quiet);
            Ok(())
        }

        BookingsCommand::Create {
            ad,
            placement,
            start,
            end,
        } => create_booking(portal, ad, placement, start, end, global).await,

        BookingsCommand::Cancel { id, reason } => {
            let booking = portal.get_booking(id).await?;
            if !booking.is_cancellable() {
                return Err(CliError::ApiError {
                    message: format!(
                        "booking {id} is {} and can no longer be cancelled",
                        booking.status
                    ),
                });
            }
            portal.cancel_booking(id, &reason).await?;
            if !global.quiet {
                eprintln!("Booking {id} cancelled");
            }
            Ok(())
        }

        BookingsCommand::Calendar {
            month,
            placement,
            start,
            end,
        } => show_calendar(portal, month, placement, start.zip(end), global).await,

        BookingsCommand::Stats => {
            let stats = portal.my_booking_statistics().await?;
            let out = output::render_single(
                &global.output,
                &stats,
                |s| {
                    format!(
                        "Bookings:  {} total, {} active, {} completed\nRevenue:   ${}",
                        s.total_bookings, s.active_bookings, s.completed_bookings, s.total_revenue
                    )
                },
                |s| s.total_bookings.to_string(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }
    }
}

/// Quote, advisory availability check, then confirm.
async fn create_booking(
    portal: &Portal,
    ad: i64,
    placement_id: i64,
    start: NaiveDate,
    end: NaiveDate,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let placement = portal.get_placement(placement_id).await?;

    let mut form = BookingForm::new();
    form.ad_id = Some(ad);
    form.set_placement(placement);
    form.set_start_date(start);
    form.set_end_date(end);

    let quote = form.quote();
    if !global.quiet {
        eprintln!(
            "{} days at ${}/day = ${}",
            quote.total_days,
            form.placement.as_ref().map(|p| p.price_per_day).unwrap_or_default(),
            quote.total_price
        );
    }

    let conflicts = portal.refresh_availability(&mut form).await?;
    if !form.can_confirm() {
        for conflict in &conflicts {
            eprintln!(
                "conflict: {} ({} to {})",
                conflict.label(),
                conflict.start_date,
                conflict.end_date
            );
        }
        return Err(CliError::FieldValidation {
            rendered: form.availability.message().to_owned(),
        });
    }

    let booking = portal.create_booking(&form).await?;
    if !global.quiet {
        eprintln!("Booking {} created (pending until payment is confirmed)", booking.id);
    }
    let out = output::render_single(&global.output, &booking, booking_detail, |b| {
        b.id.to_string()
    });
    output::print_output(&out, global.quiet);
    Ok(())
}

/// Fetch the month's bookings and render the grid.
async fn show_calendar(
    portal: &Portal,
    month: Option<String>,
    placement: Option<i64>,
    selection: Option<(NaiveDate, NaiveDate)>,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let today = Utc::now().date_naive();
    let grid = match month {
        Some(ref spec) => parse_month(spec)?,
        None => MonthGrid::containing(today),
    };

    let bookings = portal.month_bookings(grid, placement).await?;

    match global.output {
        crate::cli::OutputFormat::Table | crate::cli::OutputFormat::Plain => {
            let colored = output::should_color(&global.color);
            let rendered = render_month(grid, &bookings, selection, today, colored);
            output::print_output(&rendered, global.quiet);
        }
        _ => {
            // Structured output gets the raw cells.
            let cells = grid.cells(&bookings, selection, today);
            let out = output::render_single(
                &global.output,
                &cells,
                |_| String::new(),
                |_| String::new(),
            );
            output::print_output(&out, global.quiet);
        }
    }
    Ok(())
}

/// Parse a `YYYY-MM` month spec.
fn parse_month(spec: &str) -> Result<MonthGrid, CliError> {
    let invalid = || CliError::Validation {
        field: "month".into(),
        reason: format!("expected YYYY-MM, got '{spec}'"),
    };

    let (year_str, month_str) = spec.split_once('-').ok_or_else(invalid)?;
    let year: i32 = year_str.parse().map_err(|_| invalid())?;
    let month: u32 = month_str.parse().map_err(|_| invalid())?;
    MonthGrid::new(year, month).ok_or_else(invalid)
}

const CELL_WIDTH: usize = 9;

/// Render the month grid as fixed-width text.
///
/// Per day cell: the day number, one dot per visible booking, and a
/// `+N` overflow marker past two. Today is bracketed, the prospective
/// selection range is marked with `#`.
fn render_month(
    grid: MonthGrid,
    bookings: &[CalendarBooking],
    selection: Option<(NaiveDate, NaiveDate)>,
    today: NaiveDate,
    colored: bool,
) -> String {
    let mut lines = Vec::new();

    // Centered heading.
    let title = grid.title();
    let width = CELL_WIDTH * 7;
    lines.push(format!("{title:^width$}"));

    let cell_width = CELL_WIDTH;
    lines.push(
        WEEKDAY_LABELS
            .iter()
            .map(|label| format!("{label:^cell_width$}"))
            .collect::<String>(),
    );

    let cells = grid.cells(bookings, selection, today);
    for week in cells.chunks(7) {
        let mut row = String::new();
        for cell in week {
            row.push_str(&format_cell(cell, colored));
        }
        lines.push(row);
    }

    // Legend + inline booking summary.
    lines.push(String::new());
    lines.push("[d] today   #d selected   . booked   +N more".to_owned());
    if !bookings.is_empty() {
        lines.push(String::new());
        for booking in bookings {
            lines.push(format!(
                "  {} ({} to {}, {})",
                booking.label(),
                booking.start_date,
                booking.end_date,
                booking.status
            ));
        }
    }

    lines.join("\n")
}

fn format_cell(cell: &Cell, colored: bool) -> String {
    let Cell::Day(day) = cell else {
        return " ".repeat(CELL_WIDTH);
    };

    let number = if day.is_today {
        format!("[{}]", day.day)
    } else if day.in_selection {
        format!("#{}", day.day)
    } else {
        day.day.to_string()
    };

    let dots = ".".repeat(day.visible_bookings().len());
    let overflow = day
        .overflow_count
        .map(|n| format!("+{n}"))
        .unwrap_or_default();

    let text = format!("{number}{dots}{overflow}");
    let cell_width = CELL_WIDTH;
    let padded = format!("{text:^cell_width$}");

    if colored {
        if day.is_today {
            return padded.cyan().bold().to_string();
        }
        if day.in_selection {
            return padded.green().to_string();
        }
        if !day.bookings.is_empty() {
            return padded.red().to_string();
        }
    }
    padded
}

// ── Arg enum conversion ─────────────────────────────────────────────

impl From<BookingStatusFilter> for BookingStatus {
    fn from(f: BookingStatusFilter) -> Self {
        match f {
            BookingStatusFilter::Pending => Self::Pending,
            BookingStatusFilter::Confirmed => Self::Confirmed,
            BookingStatusFilter::Active => Self::Active,
            BookingStatusFilter::Completed => Self::Completed,
            BookingStatusFilter::Cancelled => Self::Cancelled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn booking(start: &str, end: &str) -> CalendarBooking {
        CalendarBooking {
            id: 1,
            ad_title: Some("Spring Sale".into()),
            placement_name: Some("Homepage Banner".into()),
            start_date: start.parse().expect("start"),
            end_date: end.parse().expect("end"),
            status: BookingStatus::Active,
        }
    }

    #[test]
    fn month_spec_parses() {
        let grid = parse_month("2025-03").expect("valid spec");
        assert_eq!((grid.year, grid.month), (2025, 3));
        assert!(parse_month("2025").is_err());
        assert!(parse_month("2025-13").is_err());
        assert!(parse_month("march").is_err());
    }

    #[test]
    fn rendered_month_has_title_labels_and_weeks() {
        let grid = MonthGrid::new(2025, 3).expect("month");
        let today = "2025-03-15".parse().expect("date");
        let rendered = render_month(grid, &[], None, today, false);

        assert!(rendered.contains("March 2025"));
        assert!(rendered.contains("Sun"));
        assert!(rendered.contains("[15]"));

        // 6 leading blanks + 31 days = 37 cells → 6 week rows.
        let week_rows = rendered
            .lines()
            .filter(|l| l.contains('[') || l.trim_start().starts_with(|c: char| c.is_ascii_digit()))
            .count();
        assert!(week_rows >= 5, "expected at least 5 week rows:\n{rendered}");
    }

    #[test]
    fn booked_days_show_dots_and_overflow() {
        let grid = MonthGrid::new(2025, 3).expect("month");
        let today = "2025-01-01".parse().expect("date");
        let bookings = vec![
            booking("2025-03-10", "2025-03-10"),
            booking("2025-03-10", "2025-03-10"),
            booking("2025-03-10", "2025-03-10"),
        ];
        let rendered = render_month(grid, &bookings, None, today, false);
        assert!(rendered.contains("10..+1"), "cell marker missing:\n{rendered}");
        assert!(rendered.contains("Spring Sale"));
    }

    #[test]
    fn selection_markers_rendered() {
        let grid = MonthGrid::new(2025, 3).expect("month");
        let today = "2025-01-01".parse().expect("date");
        let selection = Some((
            "2025-03-05".parse().expect("date"),
            "2025-03-06".parse().expect("date"),
        ));
        let rendered = render_month(grid, &[], selection, today, false);
        assert!(rendered.contains("#5"));
        assert!(rendered.contains("#6"));
        assert!(!rendered.contains("#7"));
    }
}

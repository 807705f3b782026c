//! Placement command handlers.

use chrono::NaiveDate;
use tabled::Tabled;

use adslot_core::pricing::quote;
use adslot_core::{Placement, Portal};

use crate::cli::{GlobalOpts, PlacementsArgs, PlacementsCommand};
use crate::error::CliError;
use crate::output;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct PlacementRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Rate/day")]
    rate: String,
    #[tabled(rename = "Dimensions")]
    dimensions: String,
    #[tabled(rename = "Premium")]
    premium: String,
}

impl From<&Placement> for PlacementRow {
    fn from(p: &Placement) -> Self {
        Self {
            id: p.id,
            name: p.name.clone(),
            rate: format!("${}", p.price_per_day),
            dimensions: p.dimensions.clone().unwrap_or_default(),
            premium: if p.is_premium { "yes" } else { "" }.into(),
        }
    }
}

fn placement_detail(p: &Placement) -> String {
    let mut lines = vec![
        format!("Name:       {}", p.name),
        format!("Code:       {}", p.code),
        format!("Rate:       ${}/day", p.price_per_day),
    ];
    if let Some(ref dims) = p.dimensions {
        lines.push(format!("Dimensions: {dims}"));
    }
    if let Some(ref desc) = p.description {
        lines.push(format!("About:      {desc}"));
    }
    lines.join("\n")
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    portal: &Portal,
    args: PlacementsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        PlacementsCommand::List => {
            let placements = portal.list_placements().await?;
            let out = output::render_list(
                &global.output,
                &placements,
                |r| PlacementRow::from(r),
                |p| p.id.to_string(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        PlacementsCommand::Get { id } => {
            let placement = portal.get_placement(id).await?;
            let out = output::render_single(&global.output, &placement, placement_detail, |p| {
                p.id.to_string()
            });
            output::print_output(&out, global.quiet);
            Ok(())
        }

        PlacementsCommand::Availability { id, start, end } => {
            check_availability(portal, id, start, end, global).await
        }
    }
}

async fn check_availability(
    portal: &Portal,
    id: i64,
    start: NaiveDate,
    end: NaiveDate,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    if end < start {
        return Err(CliError::Validation {
            field: "end".into(),
            reason: "end date must not be before the start date".into(),
        });
    }

    let placement = portal.get_placement(id).await?;

    let mut form = adslot_core::pricing::BookingForm::new();
    form.set_placement(placement.clone());
    form.set_start_date(start);
    form.set_end_date(end);
    let conflicts = portal.refresh_availability(&mut form).await?;

    let q = quote(Some(start), Some(end), Some(&placement));

    if !global.quiet {
        eprintln!("{}", form.availability.message());
        eprintln!(
            "{} days at ${}/day = ${}",
            q.total_days, placement.price_per_day, q.total_price
        );
        for conflict in &conflicts {
            eprintln!(
                "conflict: {} ({} to {})",
                conflict.label(),
                conflict.start_date,
                conflict.end_date
            );
        }
    }
    Ok(())
}

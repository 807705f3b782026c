//! Payment command handlers.

use tabled::Tabled;

use adslot_core::{Payment, Portal};

use crate::cli::{GlobalOpts, PaymentsArgs, PaymentsCommand};
use crate::error::CliError;
use crate::output;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct PaymentRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Booking")]
    booking: i64,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Method")]
    method: String,
    #[tabled(rename = "Status")]
    status: String,
}

impl From<&Payment> for PaymentRow {
    fn from(p: &Payment) -> Self {
        Self {
            id: p.id,
            booking: p.booking_id,
            amount: format!("${}", p.amount),
            method: p.method.clone().unwrap_or_default(),
            status: p.status.to_string(),
        }
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    portal: &Portal,
    args: PaymentsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        PaymentsCommand::List { status } => {
            let payments = portal.list_payments(status.as_deref()).await?;
            let out = output::render_list(
                &global.output,
                &payments,
                |r| PaymentRow::from(r),
                |p| p.id.to_string(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        PaymentsCommand::Create {
            booking,
            amount,
            method,
        } => {
            let payment = portal.create_payment(booking, amount, method).await?;
            if !global.quiet {
                eprintln!("Payment {} recorded (${})", payment.id, payment.amount);
            }
            Ok(())
        }

        PaymentsCommand::Stats => {
            let stats = portal.my_payment_statistics().await?;
            let out = output::render_single(
                &global.output,
                &stats,
                |s| {
                    format!(
                        "Payments: {}\nTotal:    ${}",
                        s.total_payments, s.total_paid
                    )
                },
                |s| s.total_payments.to_string(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }
    }
}

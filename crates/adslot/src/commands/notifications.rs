//! Notification command handlers.

use tabled::Tabled;

use adslot_core::{Notification, Portal};

use crate::cli::{GlobalOpts, NotificationsArgs, NotificationsCommand};
use crate::error::CliError;
use crate::output;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct NotificationRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "")]
    unread: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Message")]
    message: String,
}

impl From<&Notification> for NotificationRow {
    fn from(n: &Notification) -> Self {
        Self {
            id: n.id,
            unread: if n.is_read { "" } else { "*" }.into(),
            title: n.title.clone(),
            message: n.message.clone(),
        }
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    portal: &Portal,
    args: NotificationsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        NotificationsCommand::List => {
            let notifications = portal.list_notifications().await?;
            let out = output::render_list(
                &global.output,
                &notifications,
                |r| NotificationRow::from(r),
                |n| n.id.to_string(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        NotificationsCommand::Read { id } => {
            portal.mark_notification_read(id).await?;
            if !global.quiet {
                eprintln!("Notification {id} marked as read");
            }
            Ok(())
        }

        NotificationsCommand::ReadAll => {
            portal.mark_all_notifications_read().await?;
            if !global.quiet {
                eprintln!("All notifications marked as read");
            }
            Ok(())
        }
    }
}

//! Command dispatch: bridges CLI args -> portal operations -> output
//! formatting.

pub mod ads;
pub mod auth;
pub mod bookings;
pub mod config_cmd;
pub mod files;
pub mod notifications;
pub mod payments;
pub mod placements;
pub mod util;

use adslot_core::Portal;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Dispatch a session-bound command to the appropriate handler.
pub async fn dispatch(cmd: Command, portal: &Portal, global: &GlobalOpts) -> Result<(), CliError> {
    match cmd {
        Command::Whoami => auth::whoami(portal, global),
        Command::ChangePassword => auth::change_password(portal).await,
        Command::Ads(args) => ads::handle(portal, args, global).await,
        Command::Bookings(args) => bookings::handle(portal, args, global).await,
        Command::Placements(args) => placements::handle(portal, args, global).await,
        Command::Files(args) => files::handle(portal, args, global).await,
        Command::Payments(args) => payments::handle(portal, args, global).await,
        Command::Notifications(args) => notifications::handle(portal, args, global).await,
        // Login/Logout/Register/Config/Completions are handled before dispatch
        Command::Login(_)
        | Command::Logout
        | Command::Register(_)
        | Command::Config(_)
        | Command::Completions(_) => unreachable!(),
    }
}

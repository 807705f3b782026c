// ── Canonical domain model ──
//
// Every type in this module is the canonical representation of an
// Adslot entity. Wire shapes from `adslot-api` are converted here (see
// `crate::convert`) so consumers never touch raw DTOs.

pub mod ad;
pub mod booking;
pub mod file;
pub mod notification;
pub mod payment;
pub mod placement;
pub mod stats;
pub mod user;

// ── Re-exports ──────────────────────────────────────────────────────
// Flat access: `use adslot_core::model::*` gives you everything.

pub use ad::{Ad, AdCategory, AdStatus, PlacementKind};
pub use booking::{Booking, BookingStatus, CalendarBooking};
pub use file::{ScanStatus, UploadedFile};
pub use notification::Notification;
pub use payment::{Payment, PaymentStatus};
pub use placement::Placement;
pub use stats::{AdStatistics, BookingStatistics, MyAdStatistics, PaymentStatistics};
pub use user::User;

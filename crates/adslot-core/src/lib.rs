// adslot-core: Domain layer between adslot-api and consumers (CLI, embeddings).

pub mod batch;
pub mod calendar;
pub mod convert;
pub mod error;
pub mod form;
pub mod model;
pub mod portal;
pub mod pricing;
pub mod session;

// ── Primary re-exports ──────────────────────────────────────────────
pub use batch::{BatchOutcome, BatchReport};
pub use calendar::{Cell, DayCell, MAX_VISIBLE_BOOKINGS, MonthGrid, WEEKDAY_LABELS};
pub use error::CoreError;
pub use form::{AdDraft, FieldErrors, FullFormatDraft, MediaLedDraft, SubmitIntent};
pub use portal::{AdSubmission, FileUpload, Portal, STATISTICS_TIMEOUT};
pub use pricing::{Availability, BookingForm, BookingQuote, quote};
pub use session::{MemoryTokenStore, Session, TOKEN_RETENTION_DAYS, TokenPair, TokenStore};

// Re-export model types at the crate root for ergonomics.
pub use model::{
    // Core entities
    Ad, AdCategory, AdStatus, Booking, BookingStatus, CalendarBooking, Placement, PlacementKind,
    UploadedFile, User,
    // Supporting types
    Notification, Payment, PaymentStatus, ScanStatus,
    // Statistics
    AdStatistics, BookingStatistics, MyAdStatistics, PaymentStatistics,
};

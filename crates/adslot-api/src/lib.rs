// adslot-api: Async Rust client for the Adslot advertising platform REST API

pub mod client;
pub mod error;
pub mod transport;
pub mod types;

mod accounts;
mod ads;
mod bookings;
mod files;
mod notifications;
mod payments;
mod placements;

pub use client::ApiClient;
pub use error::{Error, FieldErrorMap};
pub use transport::{TlsMode, TransportConfig};

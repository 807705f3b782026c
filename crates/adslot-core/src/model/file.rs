// ── Uploaded file domain types ──

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Virus-scan verdict assigned by the backend at upload time.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ScanStatus {
    Pending,
    Clean,
    Infected,
    Failed,
    Unknown,
}

impl ScanStatus {
    pub(crate) fn from_wire(raw: &str) -> Self {
        raw.parse().unwrap_or(Self::Unknown)
    }
}

/// An image/logo/PDF owned by the advertiser.
///
/// Exists independently of any ad; `ad_id` is set once linked.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadedFile {
    pub id: i64,
    pub original_filename: String,
    pub file_path: Option<String>,
    pub file_type: Option<String>,
    pub file_size_kb: Option<i64>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub scan_status: ScanStatus,
    pub ad_id: Option<i64>,
}

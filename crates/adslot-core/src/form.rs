// ── Ad-creation form state machine ──
//
// The two ad categories have different mandatory-field sets, and the
// set tightens when the user submits for review instead of saving a
// draft. Each category is its own draft type behind the `AdDraft` tag
// so the validation rules are selected by pattern match rather than
// optional-field branching. Changing category constructs a fresh draft
// and discards unsaved fields.

use std::fmt;

use adslot_api::types::AdPayload;
use serde::Serialize;
use url::Url;

use crate::model::Ad;
use crate::model::ad::{AdCategory, PlacementKind};

pub const TITLE_MAX: usize = 200;
pub const SHORT_DESCRIPTION_MAX: usize = 250;
pub const FULL_DESCRIPTION_MAX: usize = 2000;

/// What the user is trying to do with the draft. Submit-for-review
/// applies the full mandatory-field set; saving a draft applies only
/// the light rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitIntent {
    SaveDraft,
    SubmitForReview,
}

impl SubmitIntent {
    /// The lifecycle status sent in the create payload.
    pub fn status(self) -> &'static str {
        match self {
            Self::SaveDraft => "draft",
            Self::SubmitForReview => "pending_review",
        }
    }
}

/// Ordered field → message pairs from a failed validation.
///
/// Ordering follows the form layout so the first error is the one the
/// user should fix first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldErrors {
    entries: Vec<(String, String)>,
}

impl FieldErrors {
    pub fn push(&mut self, field: &str, message: impl Into<String>) {
        self.entries.push((field.to_owned(), message.into()));
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    /// The first message recorded for a field, if any.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(f, _)| f == field)
            .map(|(_, m)| m.as_str())
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined: Vec<String> = self
            .entries
            .iter()
            .map(|(field, message)| format!("{field}: {message}"))
            .collect();
        write!(f, "{}", joined.join("; "))
    }
}

/// An image-first ad: at least one uploaded file and a working website
/// link are mandatory before review, along with the targeting fields.
#[derive(Debug, Clone, Default)]
pub struct MediaLedDraft {
    pub title: String,
    pub short_description: String,
    pub call_to_action: String,
    pub website_url: String,
    pub placement_kind: Option<PlacementKind>,
    pub region: String,
    /// Ids of files that finished uploading successfully.
    pub uploaded_file_ids: Vec<i64>,
}

/// A self-contained text creative: only the title is mandatory, even
/// for review. Links are optional but must be well-formed when given.
#[derive(Debug, Clone, Default)]
pub struct FullFormatDraft {
    pub title: String,
    pub short_description: String,
    pub full_description: String,
    pub call_to_action: String,
    pub website_url: String,
    pub catalog_url: String,
    pub terms_conditions: String,
}

/// The in-progress ad, tagged by category.
#[derive(Debug, Clone)]
pub enum AdDraft {
    MediaLed(MediaLedDraft),
    FullFormat(FullFormatDraft),
}

impl AdDraft {
    pub fn media_led() -> Self {
        Self::MediaLed(MediaLedDraft::default())
    }

    pub fn full_format() -> Self {
        Self::FullFormat(FullFormatDraft::default())
    }

    /// Rebuild a draft from a stored ad, for re-validating an existing
    /// record before a status transition. Ads without a category tag
    /// are treated as full-format (title-only rules).
    pub fn from_ad(ad: &Ad, linked_file_ids: Vec<i64>) -> Self {
        match ad.category {
            Some(AdCategory::MediaLed) => Self::MediaLed(MediaLedDraft {
                title: ad.title.clone(),
                short_description: ad.short_description.clone().unwrap_or_default(),
                call_to_action: ad.call_to_action.clone().unwrap_or_default(),
                website_url: ad.website_url.clone().unwrap_or_default(),
                placement_kind: ad.placement_kind,
                region: ad.region.clone().unwrap_or_default(),
                uploaded_file_ids: linked_file_ids,
            }),
            Some(AdCategory::FullFormat) | None => Self::FullFormat(FullFormatDraft {
                title: ad.title.clone(),
                short_description: ad.short_description.clone().unwrap_or_default(),
                full_description: ad.full_description.clone().unwrap_or_default(),
                call_to_action: ad.call_to_action.clone().unwrap_or_default(),
                website_url: ad.website_url.clone().unwrap_or_default(),
                catalog_url: ad.catalog_url.clone().unwrap_or_default(),
                terms_conditions: ad.terms_conditions.clone().unwrap_or_default(),
            }),
        }
    }

    /// The wire name of the draft's category.
    pub fn category_name(&self) -> &'static str {
        match self {
            Self::MediaLed(_) => "media_led",
            Self::FullFormat(_) => "full_format",
        }
    }

    /// Validate for the given intent. Empty error set means the draft
    /// may proceed to the API.
    pub fn validate(&self, intent: SubmitIntent) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::default();
        match self {
            Self::MediaLed(draft) => draft.collect_errors(intent, &mut errors),
            Self::FullFormat(draft) => draft.collect_errors(intent, &mut errors),
        }
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    /// Build the create-ad payload. Callers must validate first; the
    /// payload itself performs no checks.
    pub fn payload(&self, intent: SubmitIntent) -> AdPayload {
        match self {
            Self::MediaLed(draft) => AdPayload {
                title: Some(draft.title.clone()),
                short_description: non_empty(&draft.short_description),
                call_to_action: non_empty(&draft.call_to_action),
                website_url: non_empty(&draft.website_url),
                category: Some(self.category_name().to_owned()),
                placement_kind: draft.placement_kind.map(|k| k.to_string()),
                region: non_empty(&draft.region),
                status: Some(intent.status().to_owned()),
                ..AdPayload::default()
            },
            Self::FullFormat(draft) => AdPayload {
                title: Some(draft.title.clone()),
                short_description: non_empty(&draft.short_description),
                full_description: non_empty(&draft.full_description),
                call_to_action: non_empty(&draft.call_to_action),
                website_url: non_empty(&draft.website_url),
                catalog_url: non_empty(&draft.catalog_url),
                terms_conditions: non_empty(&draft.terms_conditions),
                category: Some(self.category_name().to_owned()),
                status: Some(intent.status().to_owned()),
                ..AdPayload::default()
            },
        }
    }

    /// File ids to link after the ad is created.
    pub fn uploaded_file_ids(&self) -> &[i64] {
        match self {
            Self::MediaLed(draft) => &draft.uploaded_file_ids,
            Self::FullFormat(_) => &[],
        }
    }
}

impl MediaLedDraft {
    fn collect_errors(&self, intent: SubmitIntent, errors: &mut FieldErrors) {
        length_checks(&self.title, &self.short_description, "", errors);

        if intent == SubmitIntent::SubmitForReview {
            if self.uploaded_file_ids.is_empty() {
                errors.push("files", "Please upload at least one image or logo");
            }
            if self.website_url.trim().is_empty() {
                errors.push("website_url", "Website URL is required");
            } else if !is_valid_url(&self.website_url) {
                errors.push("website_url", "Please enter a valid URL");
            }
            if self.placement_kind.is_none() {
                errors.push("placement_kind", "Please choose a placement type");
            }
            if self.region.trim().is_empty() {
                errors.push("region", "Region or city is required");
            }
        } else if !self.website_url.trim().is_empty() && !is_valid_url(&self.website_url) {
            // Light check: a malformed URL is an error even in a draft.
            errors.push("website_url", "Please enter a valid URL");
        }
    }
}

impl FullFormatDraft {
    fn collect_errors(&self, intent: SubmitIntent, errors: &mut FieldErrors) {
        // Title is mandatory for drafts and review alike.
        if self.title.trim().is_empty() {
            errors.push("title", "Title is required");
        }
        length_checks(
            &self.title,
            &self.short_description,
            &self.full_description,
            errors,
        );

        // URL shape only blocks review, never a draft save.
        if intent == SubmitIntent::SubmitForReview {
            for (field, value) in [
                ("website_url", &self.website_url),
                ("catalog_url", &self.catalog_url),
            ] {
                if !value.trim().is_empty() && !is_valid_url(value) {
                    errors.push(field, "Please enter a valid URL");
                }
            }
        }
    }
}

/// Length caps shared by both categories.
fn length_checks(title: &str, short: &str, full: &str, errors: &mut FieldErrors) {
    if title.chars().count() > TITLE_MAX {
        errors.push("title", format!("Title must be at most {TITLE_MAX} characters"));
    }
    if short.chars().count() > SHORT_DESCRIPTION_MAX {
        errors.push(
            "short_description",
            format!("Short description must be at most {SHORT_DESCRIPTION_MAX} characters"),
        );
    }
    if full.chars().count() > FULL_DESCRIPTION_MAX {
        errors.push(
            "full_description",
            format!("Full description must be at most {FULL_DESCRIPTION_MAX} characters"),
        );
    }
}

/// Absolute URL with a scheme and host. Relative and malformed strings
/// are rejected.
pub fn is_valid_url(raw: &str) -> bool {
    match Url::parse(raw.trim()) {
        Ok(url) => url.has_host(),
        Err(_) => false,
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn review_ready_media_led() -> MediaLedDraft {
        MediaLedDraft {
            title: "Spring Sale".into(),
            website_url: "https://acme.example.com/sale".into(),
            placement_kind: Some(PlacementKind::Main),
            region: "Springfield".into(),
            uploaded_file_ids: vec![101],
            ..MediaLedDraft::default()
        }
    }

    #[test]
    fn media_led_draft_save_needs_nothing() {
        let draft = AdDraft::MediaLed(MediaLedDraft::default());
        assert!(draft.validate(SubmitIntent::SaveDraft).is_ok());
    }

    #[test]
    fn media_led_review_requires_files() {
        let mut inner = review_ready_media_led();
        inner.uploaded_file_ids.clear();
        let draft = AdDraft::MediaLed(inner);

        let errors = draft
            .validate(SubmitIntent::SubmitForReview)
            .expect_err("must fail without files");
        assert_eq!(
            errors.get("files"),
            Some("Please upload at least one image or logo")
        );
    }

    #[test]
    fn media_led_review_requires_every_mandatory_field() {
        let draft = AdDraft::MediaLed(MediaLedDraft::default());
        let errors = draft
            .validate(SubmitIntent::SubmitForReview)
            .expect_err("empty draft cannot go to review");
        for field in ["files", "website_url", "placement_kind", "region"] {
            assert!(errors.get(field).is_some(), "missing error for {field}");
        }
    }

    #[test]
    fn media_led_review_passes_when_complete() {
        let draft = AdDraft::MediaLed(review_ready_media_led());
        assert!(draft.validate(SubmitIntent::SubmitForReview).is_ok());
    }

    #[test]
    fn media_led_rejects_malformed_website() {
        let mut inner = review_ready_media_led();
        inner.website_url = "not-a-url".into();
        let draft = AdDraft::MediaLed(inner);
        let errors = draft
            .validate(SubmitIntent::SubmitForReview)
            .expect_err("bad URL must fail");
        assert_eq!(errors.get("website_url"), Some("Please enter a valid URL"));
    }

    #[test]
    fn full_format_draft_needs_title() {
        let draft = AdDraft::FullFormat(FullFormatDraft::default());
        let errors = draft
            .validate(SubmitIntent::SaveDraft)
            .expect_err("empty title must fail");
        assert_eq!(errors.get("title"), Some("Title is required"));
    }

    #[test]
    fn full_format_title_alone_saves_as_draft() {
        let draft = AdDraft::FullFormat(FullFormatDraft {
            title: "Autumn Classics".into(),
            ..FullFormatDraft::default()
        });
        assert!(draft.validate(SubmitIntent::SaveDraft).is_ok());

        let payload = draft.payload(SubmitIntent::SaveDraft);
        assert_eq!(payload.status.as_deref(), Some("draft"));
        assert_eq!(payload.title.as_deref(), Some("Autumn Classics"));
        assert_eq!(payload.website_url, None);
    }

    #[test]
    fn full_format_title_cap_enforced() {
        let draft = AdDraft::FullFormat(FullFormatDraft {
            title: "x".repeat(TITLE_MAX + 1),
            ..FullFormatDraft::default()
        });
        let errors = draft
            .validate(SubmitIntent::SubmitForReview)
            .expect_err("over-long title must fail");
        assert!(errors.get("title").expect("title error").contains("200"));
    }

    #[test]
    fn full_format_optional_urls_must_be_absolute() {
        let draft = AdDraft::FullFormat(FullFormatDraft {
            title: "Autumn Classics".into(),
            catalog_url: "/catalog.pdf".into(),
            ..FullFormatDraft::default()
        });
        let errors = draft
            .validate(SubmitIntent::SubmitForReview)
            .expect_err("relative URL must fail");
        assert_eq!(errors.get("catalog_url"), Some("Please enter a valid URL"));
        assert!(errors.get("title").is_none());
    }

    #[test]
    fn full_format_draft_save_ignores_url_shape() {
        let draft = AdDraft::FullFormat(FullFormatDraft {
            title: "Autumn Classics".into(),
            catalog_url: "/catalog.pdf".into(),
            ..FullFormatDraft::default()
        });
        assert!(draft.validate(SubmitIntent::SaveDraft).is_ok());
    }

    #[test]
    fn review_payload_carries_pending_review_status() {
        let draft = AdDraft::MediaLed(review_ready_media_led());
        let payload = draft.payload(SubmitIntent::SubmitForReview);
        assert_eq!(payload.status.as_deref(), Some("pending_review"));
        assert_eq!(payload.category.as_deref(), Some("media_led"));
        assert_eq!(payload.placement_kind.as_deref(), Some("main"));
        assert_eq!(payload.region.as_deref(), Some("Springfield"));
    }

    #[test]
    fn url_validity_rules() {
        assert!(is_valid_url("https://example.com"));
        assert!(is_valid_url("http://example.com/path?q=1"));
        assert!(is_valid_url(" https://example.com ")); // tolerated whitespace
        assert!(!is_valid_url("example.com"));
        assert!(!is_valid_url("/relative/path"));
        assert!(!is_valid_url("notaurl"));
        assert!(!is_valid_url(""));
        // Parses as a URL but has no host.
        assert!(!is_valid_url("mailto:ads@example.com"));
    }

    #[test]
    fn changing_category_discards_fields() {
        let mut draft = AdDraft::full_format();
        if let AdDraft::FullFormat(ref mut inner) = draft {
            inner.title = "Autumn Classics".into();
        }
        // "Change type" resets to a fresh draft of the other category.
        draft = AdDraft::media_led();
        match draft {
            AdDraft::MediaLed(ref inner) => assert!(inner.title.is_empty()),
            AdDraft::FullFormat(_) => panic!("expected media-led draft"),
        }
    }

    #[test]
    fn field_errors_preserve_order_and_display() {
        let mut errors = FieldErrors::default();
        errors.push("files", "Please upload at least one image or logo");
        errors.push("region", "Region or city is required");
        assert_eq!(errors.entries()[0].0, "files");
        let rendered = errors.to_string();
        assert!(rendered.starts_with("files: "));
        assert!(rendered.contains("; region: "));
    }
}

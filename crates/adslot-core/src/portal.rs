// ── Portal: domain operations facade ──
//
// The main entry point for consumers. Wraps the session and exposes
// every application operation on domain types, hiding wire DTOs and
// orchestrating the multi-step flows: ad submission with its two-phase
// file commit, booking creation with the advisory availability check,
// and the statistics fetch with its graceful-degradation deadline.
//
// Lists are always refetched after mutating calls rather than patched
// locally; the server is the single source of truth.

use std::sync::Arc;
use std::time::Duration;

use futures_util::future::join_all;
use tracing::{debug, warn};

use adslot_api::ApiClient;
use adslot_api::types::{BookingPayload, PaymentPayload};

use crate::batch::BatchReport;
use crate::calendar::MonthGrid;
use crate::error::CoreError;
use crate::form::{AdDraft, FieldErrors, SubmitIntent};
use crate::model::{
    Ad, AdStatistics, AdStatus, Booking, BookingStatistics, BookingStatus, CalendarBooking,
    MyAdStatistics, Notification, Payment, PaymentStatistics, Placement, UploadedFile,
};
use crate::pricing::{Availability, BookingForm};
use crate::session::Session;

/// The statistics upstream is optional; give it this long before
/// falling back to zeroed counters.
pub const STATISTICS_TIMEOUT: Duration = Duration::from_secs(5);

/// One file queued for upload.
#[derive(Debug, Clone)]
pub struct FileUpload {
    pub filename: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Result of submitting an ad: the created record plus the per-file
/// outcome of the link fan-out.
#[derive(Debug)]
pub struct AdSubmission {
    pub ad: Ad,
    pub link_report: BatchReport<UploadedFile>,
}

/// High-level client facade over an authenticated [`Session`].
pub struct Portal {
    session: Session,
    api: Arc<ApiClient>,
}

impl Portal {
    pub fn new(session: Session) -> Self {
        let api = Arc::clone(session.api());
        Self { session, api }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    // ── Ads ──────────────────────────────────────────────────────────

    pub async fn list_ads(&self, status: Option<AdStatus>) -> Result<Vec<Ad>, CoreError> {
        let filter = status.map(|s| s.to_string());
        let ads = self.api.list_ads(filter.as_deref()).await?;
        Ok(ads.into_iter().map(Ad::from).collect())
    }

    pub async fn get_ad(&self, id: i64) -> Result<Ad, CoreError> {
        Ok(Ad::from(self.api.get_ad(id).await?))
    }

    pub async fn delete_ad(&self, id: i64) -> Result<(), CoreError> {
        self.api.delete_ad(id).await?;
        Ok(())
    }

    /// Partially update an ad. Only the payload's `Some` fields are
    /// sent; the server ignores the rest.
    pub async fn update_ad(
        &self,
        id: i64,
        payload: &adslot_api::types::AdPayload,
    ) -> Result<Ad, CoreError> {
        Ok(Ad::from(self.api.update_ad(id, payload).await?))
    }

    /// Move an existing draft ad into review.
    ///
    /// Rebuilds the category's draft shape from the stored ad and its
    /// linked files, re-runs the submit rule set client-side, and only
    /// then patches the status. An ad can never transition into
    /// `pending_review` with an unsatisfied mandatory-field set.
    pub async fn submit_ad_for_review(&self, id: i64) -> Result<Ad, CoreError> {
        let ad = self.get_ad(id).await?;
        let linked_files: Vec<i64> = self
            .list_files()
            .await?
            .into_iter()
            .filter(|f| f.ad_id == Some(id))
            .map(|f| f.id)
            .collect();

        let draft = AdDraft::from_ad(&ad, linked_files);
        draft
            .validate(SubmitIntent::SubmitForReview)
            .map_err(|errors| CoreError::ValidationFailed { errors })?;

        let payload = adslot_api::types::AdPayload {
            status: Some(SubmitIntent::SubmitForReview.status().to_owned()),
            ..Default::default()
        };
        Ok(Ad::from(self.api.update_ad(id, &payload).await?))
    }

    /// Create an ad from a draft: validate, create, then link the
    /// already-uploaded files in a concurrent fan-out.
    ///
    /// A failed link is recorded in the report and logged; it neither
    /// aborts the remaining links nor fails the submission — the ad
    /// itself was created.
    pub async fn create_ad(
        &self,
        draft: &AdDraft,
        intent: SubmitIntent,
    ) -> Result<AdSubmission, CoreError> {
        draft
            .validate(intent)
            .map_err(|errors| CoreError::ValidationFailed { errors })?;

        let ad = Ad::from(self.api.create_ad(&draft.payload(intent)).await?);
        debug!(ad_id = ad.id, status = %ad.status, "ad created");

        let link_report = self.link_files(ad.id, draft.uploaded_file_ids()).await;
        Ok(AdSubmission { ad, link_report })
    }

    /// Link uploaded files to an ad, one PATCH per file, concurrently.
    pub async fn link_files(&self, ad_id: i64, file_ids: &[i64]) -> BatchReport<UploadedFile> {
        let futures = file_ids.iter().map(|&file_id| {
            let api = Arc::clone(&self.api);
            async move {
                let result = api
                    .link_file(file_id, ad_id)
                    .await
                    .map(UploadedFile::from)
                    .map_err(CoreError::from);
                (file_id.to_string(), result)
            }
        });

        let report: BatchReport<UploadedFile> = join_all(futures).await.into_iter().collect();
        for (label, error) in report.failed() {
            warn!(file_id = label, error = %error, "file link failed (non-fatal)");
        }
        report
    }

    /// Upload a batch of files concurrently.
    ///
    /// Each file keeps its own success/error status; one rejected
    /// upload (e.g. failed virus scan) leaves the others intact.
    pub async fn upload_files(&self, files: Vec<FileUpload>) -> BatchReport<UploadedFile> {
        let futures = files.into_iter().map(|file| {
            let api = Arc::clone(&self.api);
            async move {
                let result = api
                    .upload_file(&file.filename, &file.content_type, file.bytes)
                    .await
                    .map(UploadedFile::from)
                    .map_err(CoreError::from);
                (file.filename, result)
            }
        });

        let report: BatchReport<UploadedFile> = join_all(futures).await.into_iter().collect();
        for (label, error) in report.failed() {
            warn!(file = label, error = %error, "upload failed");
        }
        report
    }

    // ── Statistics ───────────────────────────────────────────────────

    /// Per-ad statistics with graceful degradation.
    ///
    /// The analytics upstream is optional and sometimes slow; after
    /// [`STATISTICS_TIMEOUT`] (or on any error) zeroed statistics are
    /// returned instead of failing the view.
    pub async fn ad_statistics(&self, id: i64) -> AdStatistics {
        match tokio::time::timeout(STATISTICS_TIMEOUT, self.api.ad_statistics(id)).await {
            Ok(Ok(stats)) => AdStatistics::from(stats),
            Ok(Err(e)) => {
                warn!(ad_id = id, error = %e, "statistics unavailable, showing zeros");
                AdStatistics::zeroed()
            }
            Err(_) => {
                warn!(
                    ad_id = id,
                    timeout_secs = STATISTICS_TIMEOUT.as_secs(),
                    "statistics timed out, showing zeros"
                );
                AdStatistics::zeroed()
            }
        }
    }

    pub async fn my_ad_statistics(&self) -> Result<MyAdStatistics, CoreError> {
        Ok(MyAdStatistics::from(self.api.my_ad_statistics().await?))
    }

    pub async fn my_booking_statistics(&self) -> Result<BookingStatistics, CoreError> {
        Ok(BookingStatistics::from(
            self.api.my_booking_statistics().await?,
        ))
    }

    pub async fn my_payment_statistics(&self) -> Result<PaymentStatistics, CoreError> {
        Ok(PaymentStatistics::from(
            self.api.my_payment_statistics().await?,
        ))
    }

    // ── Placements ───────────────────────────────────────────────────

    pub async fn list_placements(&self) -> Result<Vec<Placement>, CoreError> {
        let placements = self.api.list_placements().await?;
        Ok(placements.into_iter().map(Placement::from).collect())
    }

    pub async fn get_placement(&self, id: i64) -> Result<Placement, CoreError> {
        Ok(Placement::from(self.api.get_placement(id).await?))
    }

    // ── Bookings ─────────────────────────────────────────────────────

    pub async fn list_bookings(
        &self,
        status: Option<BookingStatus>,
    ) -> Result<Vec<Booking>, CoreError> {
        let filter = status.map(|s| s.to_string());
        let bookings = self.api.list_bookings(filter.as_deref()).await?;
        Ok(bookings.into_iter().map(Booking::from).collect())
    }

    pub async fn get_booking(&self, id: i64) -> Result<Booking, CoreError> {
        Ok(Booking::from(self.api.get_booking(id).await?))
    }

    /// Run the advisory availability check for the form's current
    /// inputs and record the verdict on the form.
    ///
    /// Returns the conflicting bookings for display. No-op while the
    /// form is missing placement or dates.
    pub async fn refresh_availability(
        &self,
        form: &mut BookingForm,
    ) -> Result<Vec<CalendarBooking>, CoreError> {
        if !form.ready_for_availability_check() {
            return Ok(Vec::new());
        }
        let placement_id = form.placement.as_ref().map(|p| p.id).unwrap_or_default();
        let (start, end) = (
            form.start_date().expect("checked by ready_for_availability_check"),
            form.end_date().expect("checked by ready_for_availability_check"),
        );

        let dto = self.api.check_availability(placement_id, start, end).await?;
        form.availability = Availability::from_server(dto.is_available);
        Ok(dto
            .conflicting_bookings
            .into_iter()
            .map(CalendarBooking::from)
            .collect())
    }

    /// Create the booking described by the form.
    ///
    /// Refuses client-side while required fields are missing or the
    /// last availability verdict was a conflict; the server re-checks
    /// regardless.
    pub async fn create_booking(&self, form: &BookingForm) -> Result<Booking, CoreError> {
        if !form.can_confirm() {
            return Err(CoreError::ValidationFailed {
                errors: booking_form_errors(form),
            });
        }

        let payload = BookingPayload {
            ad_id: form.ad_id.expect("checked by can_confirm"),
            placement_id: form
                .placement
                .as_ref()
                .map(|p| p.id)
                .expect("checked by can_confirm"),
            start_date: form.start_date().expect("checked by can_confirm"),
            end_date: form.end_date().expect("checked by can_confirm"),
        };

        Ok(Booking::from(self.api.create_booking(&payload).await?))
    }

    pub async fn cancel_booking(&self, id: i64, reason: &str) -> Result<(), CoreError> {
        self.api.cancel_booking(id, reason).await?;
        Ok(())
    }

    /// Bookings overlapping the displayed month, for the calendar grid.
    pub async fn month_bookings(
        &self,
        grid: MonthGrid,
        placement_id: Option<i64>,
    ) -> Result<Vec<CalendarBooking>, CoreError> {
        let bookings = self
            .api
            .calendar_bookings(placement_id, grid.first_day(), grid.last_day())
            .await?;
        Ok(bookings.into_iter().map(CalendarBooking::from).collect())
    }

    // ── Files ────────────────────────────────────────────────────────

    pub async fn list_files(&self) -> Result<Vec<UploadedFile>, CoreError> {
        let files = self.api.list_files().await?;
        Ok(files.into_iter().map(UploadedFile::from).collect())
    }

    pub async fn delete_file(&self, id: i64) -> Result<(), CoreError> {
        self.api.delete_file(id).await?;
        Ok(())
    }

    // ── Payments ─────────────────────────────────────────────────────

    pub async fn list_payments(&self, status: Option<&str>) -> Result<Vec<Payment>, CoreError> {
        let payments = self.api.list_payments(status).await?;
        Ok(payments.into_iter().map(Payment::from).collect())
    }

    pub async fn create_payment(
        &self,
        booking_id: i64,
        amount: rust_decimal::Decimal,
        method: Option<String>,
    ) -> Result<Payment, CoreError> {
        let payload = PaymentPayload {
            booking_id,
            amount,
            payment_method: method,
        };
        Ok(Payment::from(self.api.create_payment(&payload).await?))
    }

    // ── Notifications ────────────────────────────────────────────────

    pub async fn list_notifications(&self) -> Result<Vec<Notification>, CoreError> {
        let notifications = self.api.list_notifications().await?;
        Ok(notifications.into_iter().map(Notification::from).collect())
    }

    pub async fn mark_notification_read(&self, id: i64) -> Result<(), CoreError> {
        self.api.mark_notification_read(id).await?;
        Ok(())
    }

    pub async fn mark_all_notifications_read(&self) -> Result<(), CoreError> {
        self.api.mark_all_notifications_read().await?;
        Ok(())
    }
}

/// Field-level explanation of why the booking form cannot be confirmed.
fn booking_form_errors(form: &BookingForm) -> FieldErrors {
    let mut errors = FieldErrors::default();
    if form.ad_id.is_none() {
        errors.push("ad", "Select an ad");
    }
    if form.placement.is_none() {
        errors.push("placement", "Select a placement");
    }
    if form.start_date().is_none() {
        errors.push("start_date", "Select a start date");
    }
    if form.end_date().is_none() {
        errors.push("end_date", "Select an end date");
    }
    if form.availability == Availability::Conflict {
        errors.push("availability", Availability::Conflict.message());
    }
    errors
}

// ── API-to-domain type conversions ──
//
// Bridges raw `adslot_api` response types into canonical
// `adslot_core::model` domain types. Each `From` impl normalizes field
// names, parses status strings into strong enums, and fills sensible
// defaults for missing optional data.

use adslot_api::types as wire;

use crate::model::{
    Ad, AdStatistics, AdStatus, Booking, BookingStatistics, BookingStatus, CalendarBooking,
    MyAdStatistics, Notification, Payment, PaymentStatistics, PaymentStatus, Placement,
    ScanStatus, UploadedFile, User,
    ad::{AdCategory, PlacementKind},
};

impl From<wire::UserDto> for User {
    fn from(u: wire::UserDto) -> Self {
        Self {
            id: u.id,
            username: u.username,
            email: u.email,
            first_name: u.first_name,
            last_name: u.last_name,
        }
    }
}

impl From<wire::AdDto> for Ad {
    fn from(a: wire::AdDto) -> Self {
        Self {
            id: a.id,
            title: a.title,
            short_description: a.short_description,
            full_description: a.full_description,
            call_to_action: a.call_to_action,
            website_url: a.website_url,
            catalog_url: a.catalog_url,
            terms_conditions: a.terms_conditions,
            category: a.category.as_deref().and_then(|c| c.parse::<AdCategory>().ok()),
            placement_kind: a
                .placement_kind
                .as_deref()
                .and_then(|k| k.parse::<PlacementKind>().ok()),
            region: a.region,
            status: AdStatus::from_wire(&a.status),
            rejection_reason: a.rejection_reason,
            total_impressions: a.total_impressions,
            total_clicks: a.total_clicks,
            created_at: a.created_at,
        }
    }
}

impl From<wire::PlacementDto> for Placement {
    fn from(p: wire::PlacementDto) -> Self {
        Self {
            id: p.id,
            name: p.placement_name,
            code: p.placement_code,
            price_per_day: p.base_price_per_day,
            description: p.description,
            dimensions: p.dimensions,
            is_premium: p.is_premium,
        }
    }
}

impl From<wire::BookingDto> for Booking {
    fn from(b: wire::BookingDto) -> Self {
        Self {
            id: b.id,
            ad_id: b.ad,
            ad_title: b.ad_title,
            placement_id: b.placement,
            placement_name: b.placement_name,
            start_date: b.start_date,
            end_date: b.end_date,
            total_days: b.total_days,
            price_per_day: b.price_per_day,
            total_price: b.total_price,
            status: BookingStatus::from_wire(&b.status),
            cancellation_reason: b.cancellation_reason,
        }
    }
}

impl From<wire::CalendarBookingDto> for CalendarBooking {
    fn from(b: wire::CalendarBookingDto) -> Self {
        Self {
            id: b.id,
            ad_title: b.ad_title,
            placement_name: b.placement_name,
            start_date: b.start_date,
            end_date: b.end_date,
            status: BookingStatus::from_wire(&b.status),
        }
    }
}

impl From<wire::FileDto> for UploadedFile {
    fn from(f: wire::FileDto) -> Self {
        Self {
            id: f.id,
            original_filename: f.original_filename,
            file_path: f.file_path,
            file_type: f.file_type,
            file_size_kb: f.file_size_kb,
            width: f.width,
            height: f.height,
            scan_status: f
                .virus_scan_status
                .as_deref()
                .map_or(ScanStatus::Unknown, ScanStatus::from_wire),
            ad_id: f.ad,
        }
    }
}

impl From<wire::PaymentDto> for Payment {
    fn from(p: wire::PaymentDto) -> Self {
        Self {
            id: p.id,
            booking_id: p.booking,
            amount: p.amount,
            status: PaymentStatus::from_wire(&p.status),
            method: p.payment_method,
            created_at: p.created_at,
        }
    }
}

impl From<wire::NotificationDto> for Notification {
    fn from(n: wire::NotificationDto) -> Self {
        Self {
            id: n.id,
            title: n.title,
            message: n.message,
            kind: n.notification_type,
            is_read: n.is_read,
            created_at: n.created_at,
        }
    }
}

impl From<wire::AdStatisticsDto> for AdStatistics {
    fn from(s: wire::AdStatisticsDto) -> Self {
        Self {
            total_impressions: s.total_impressions,
            total_clicks: s.total_clicks,
            click_through_rate: s.click_through_rate,
        }
    }
}

impl From<wire::MyAdStatisticsDto> for MyAdStatistics {
    fn from(s: wire::MyAdStatisticsDto) -> Self {
        Self {
            total_ads: s.total_ads,
            live_ads: s.live_ads,
            total_impressions: s.total_impressions,
            total_clicks: s.total_clicks,
        }
    }
}

impl From<wire::BookingStatisticsDto> for BookingStatistics {
    fn from(s: wire::BookingStatisticsDto) -> Self {
        Self {
            total_bookings: s.total_bookings,
            active_bookings: s.active_bookings,
            completed_bookings: s.completed_bookings,
            total_revenue: s.total_revenue,
        }
    }
}

impl From<wire::PaymentStatisticsDto> for PaymentStatistics {
    fn from(s: wire::PaymentStatisticsDto) -> Self {
        Self {
            total_payments: s.total_payments,
            total_paid: s.total_paid,
        }
    }
}

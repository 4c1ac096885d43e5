//! API Request and Response Types
//!
//! This module defines the row payloads for every entity table the console
//! manages, plus the pagination metadata and the small mutation bodies the
//! action endpoints accept. Field names follow the API's camelCase wire form.

use chrono::NaiveDate;
use rialto_core::{
    AccountStatus, BookingStatus, BroadcastStatus, ContentStatus, ModerationStatus, RecordId,
    Timestamp, TransactionStatus,
};
use serde::{Deserialize, Serialize};

// ============================================================================
// PAGINATION METADATA
// ============================================================================

/// Pagination metadata as emitted by the newer list endpoints.
///
/// Older endpoints put `total`/`pages` at the top level of the envelope, or
/// omit them entirely; both fields are therefore optional here and the
/// console falls back to deriving counts from the item list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PageMeta {
    pub total: Option<u64>,
    pub pages: Option<u32>,
}

// ============================================================================
// MUTATION BODIES
// ============================================================================

/// Optional body for action endpoints that accept an operator note
/// (reject reasons, revision requests).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ActionRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl ActionRequest {
    pub fn with_note(note: impl Into<String>) -> Self {
        Self {
            note: Some(note.into()),
        }
    }
}

// ============================================================================
// USER TYPES
// ============================================================================

/// A marketplace user account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub status: AccountStatus,
    pub created_at: Timestamp,
    /// Number of bookings the user has made, denormalized by the API.
    #[serde(default)]
    pub bookings_count: u32,
}

// ============================================================================
// BOOKING TYPES
// ============================================================================

/// A booking between a user and a service provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRecord {
    pub id: RecordId,
    pub user_id: RecordId,
    pub provider_id: RecordId,
    pub service: String,
    pub status: BookingStatus,
    pub amount: f64,
    pub created_at: Timestamp,
    pub scheduled_for: Option<Timestamp>,
}

// ============================================================================
// TRANSACTION TYPES
// ============================================================================

/// A payment transaction attached to a booking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRecord {
    pub id: RecordId,
    pub booking_id: RecordId,
    pub amount: f64,
    pub currency: String,
    pub status: TransactionStatus,
    pub created_at: Timestamp,
}

// ============================================================================
// REVIEW TYPES
// ============================================================================

/// A user review awaiting or past moderation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewRecord {
    pub id: RecordId,
    pub product_id: RecordId,
    pub author_id: RecordId,
    pub rating: u8,
    pub comment: String,
    pub status: ModerationStatus,
    pub created_at: Timestamp,
}

// ============================================================================
// ANNOUNCEMENT TYPES
// ============================================================================

/// A platform announcement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnouncementRecord {
    pub id: RecordId,
    pub title: String,
    pub body: String,
    pub status: ContentStatus,
    pub published_date: Option<Timestamp>,
    pub created_at: Timestamp,
}

// ============================================================================
// ARTICLE TYPES
// ============================================================================

/// A help-center / content article.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleRecord {
    pub id: RecordId,
    pub title: String,
    pub slug: String,
    pub author: String,
    pub status: ContentStatus,
    #[serde(default)]
    pub is_featured: bool,
    pub published_date: Option<Timestamp>,
    pub created_at: Timestamp,
}

// ============================================================================
// PRODUCT TYPES
// ============================================================================

/// A provider's product/service listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    pub id: RecordId,
    pub name: String,
    pub provider_id: RecordId,
    pub category: String,
    pub status: ModerationStatus,
    #[serde(default)]
    pub is_featured: bool,
    pub price: f64,
    pub created_at: Timestamp,
}

// ============================================================================
// SETTLEMENT TYPES
// ============================================================================

/// A provider payout settlement request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettlementRecord {
    pub id: RecordId,
    pub provider_id: RecordId,
    pub amount: f64,
    pub currency: String,
    /// Settlement period, first day of the month being settled.
    pub period: NaiveDate,
    pub status: ModerationStatus,
    pub requested_at: Timestamp,
}

// ============================================================================
// KYC TYPES
// ============================================================================

/// A know-your-customer document submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KycRecord {
    pub id: RecordId,
    pub user_id: RecordId,
    pub document_type: String,
    pub status: ModerationStatus,
    pub requested_at: Timestamp,
    pub reviewed_at: Option<Timestamp>,
}

// ============================================================================
// BROADCAST TYPES
// ============================================================================

/// A support broadcast to a user segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BroadcastRecord {
    pub id: RecordId,
    pub title: String,
    pub channel: String,
    pub segment: String,
    pub status: BroadcastStatus,
    pub scheduled_for: Option<Timestamp>,
    pub sent_at: Option<Timestamp>,
    pub created_at: Timestamp,
}

// ============================================================================
// ADMIN TYPES
// ============================================================================

/// A back-office administrator account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminRecord {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub role: String,
    pub status: AccountStatus,
    pub created_at: Timestamp,
    pub last_login_at: Option<Timestamp>,
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_decode_camel_case() {
        let json = r#"{
            "id": "0191e4a0-5d4e-7cc0-b7e1-3f2a5c000001",
            "userId": "0191e4a0-5d4e-7cc0-b7e1-3f2a5c000002",
            "documentType": "passport",
            "status": "PENDING",
            "requestedAt": "2025-06-01T09:30:00Z",
            "reviewedAt": null
        }"#;
        let record: KycRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.document_type, "passport");
        assert_eq!(record.status, rialto_core::ModerationStatus::Pending);
        assert!(record.reviewed_at.is_none());
    }

    #[test]
    fn missing_optional_counters_default() {
        let json = r#"{
            "id": "0191e4a0-5d4e-7cc0-b7e1-3f2a5c000003",
            "name": "Ada",
            "email": "ada@example.com",
            "status": "ACTIVE",
            "createdAt": "2025-05-20T12:00:00Z"
        }"#;
        let user: UserRecord = serde_json::from_str(json).unwrap();
        assert_eq!(user.bookings_count, 0);
    }

    #[test]
    fn page_meta_tolerates_absent_fields() {
        let meta: PageMeta = serde_json::from_str("{}").unwrap();
        assert!(meta.total.is_none());
        assert!(meta.pages.is_none());

        let meta: PageMeta = serde_json::from_str(r#"{"total": 95, "pages": 10}"#).unwrap();
        assert_eq!(meta.total, Some(95));
        assert_eq!(meta.pages, Some(10));
    }

    #[test]
    fn action_request_omits_empty_note() {
        let body = serde_json::to_string(&ActionRequest::default()).unwrap();
        assert_eq!(body, "{}");

        let body = serde_json::to_string(&ActionRequest::with_note("blurry scan")).unwrap();
        assert_eq!(body, r#"{"note":"blurry scan"}"#);
    }
}

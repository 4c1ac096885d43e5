//! Rialto Core - Domain Types
//!
//! Pure data structures shared by the admin console crates. This crate
//! contains only data types and the status transition tables - no I/O and
//! no business logic beyond what the types themselves encode.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

// ============================================================================
// IDENTITY TYPES
// ============================================================================

/// Timestamp type using UTC timezone.
pub type Timestamp = DateTime<Utc>;

/// Identifier of a single row/entity in a domain table.
///
/// UUIDv7 on the wire, so ids sort by creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(Uuid);

impl RecordId {
    pub fn new(id: Uuid) -> Self {
        Self(id)
    }

    /// Generate a fresh timestamp-sortable id.
    pub fn now_v7() -> Self {
        Self(Uuid::now_v7())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RecordId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim())
            .map(Self)
            .map_err(|_| CoreError::InvalidRecordId {
                value: s.to_string(),
            })
    }
}

// ============================================================================
// ENTITY KINDS
// ============================================================================

/// Discriminator for the domain tables the console manages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    User,
    Booking,
    Transaction,
    Review,
    Announcement,
    Article,
    Product,
    Settlement,
    KycSubmission,
    Broadcast,
    Admin,
}

impl EntityKind {
    /// URL path segment for the entity collection, e.g. `/api/<segment>`.
    pub fn endpoint_segment(&self) -> &'static str {
        match self {
            EntityKind::User => "users",
            EntityKind::Booking => "bookings",
            EntityKind::Transaction => "transactions",
            EntityKind::Review => "reviews",
            EntityKind::Announcement => "announcements",
            EntityKind::Article => "articles",
            EntityKind::Product => "products",
            EntityKind::Settlement => "settlements",
            EntityKind::KycSubmission => "kyc-submissions",
            EntityKind::Broadcast => "broadcasts",
            EntityKind::Admin => "admins",
        }
    }

    pub fn all() -> &'static [EntityKind] {
        &[
            EntityKind::User,
            EntityKind::Booking,
            EntityKind::Transaction,
            EntityKind::Review,
            EntityKind::Announcement,
            EntityKind::Article,
            EntityKind::Product,
            EntityKind::Settlement,
            EntityKind::KycSubmission,
            EntityKind::Broadcast,
            EntityKind::Admin,
        ]
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.endpoint_segment())
    }
}

impl FromStr for EntityKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "user" | "users" => Ok(EntityKind::User),
            "booking" | "bookings" => Ok(EntityKind::Booking),
            "transaction" | "transactions" => Ok(EntityKind::Transaction),
            "review" | "reviews" => Ok(EntityKind::Review),
            "announcement" | "announcements" => Ok(EntityKind::Announcement),
            "article" | "articles" => Ok(EntityKind::Article),
            "product" | "products" => Ok(EntityKind::Product),
            "settlement" | "settlements" => Ok(EntityKind::Settlement),
            "kyc" | "kyc-submission" | "kyc-submissions" => Ok(EntityKind::KycSubmission),
            "broadcast" | "broadcasts" => Ok(EntityKind::Broadcast),
            "admin" | "admins" => Ok(EntityKind::Admin),
            _ => Err(CoreError::InvalidEntityKind {
                value: s.to_string(),
            }),
        }
    }
}

// ============================================================================
// STATUS ENUMS
// ============================================================================

/// Lifecycle of published content (announcements, articles, product listings).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContentStatus {
    Draft,
    Published,
    Archived,
}

impl ContentStatus {
    pub fn as_wire_str(&self) -> &'static str {
        match self {
            ContentStatus::Draft => "DRAFT",
            ContentStatus::Published => "PUBLISHED",
            ContentStatus::Archived => "ARCHIVED",
        }
    }

    /// Whether the server would accept a transition to `next`.
    ///
    /// The server remains authoritative; the console uses this table only to
    /// decide which actions to offer for a row.
    pub fn can_transition(&self, next: ContentStatus) -> bool {
        matches!(
            (self, next),
            (ContentStatus::Draft, ContentStatus::Published)
                | (ContentStatus::Published, ContentStatus::Archived)
                | (ContentStatus::Archived, ContentStatus::Published)
        )
    }
}

impl fmt::Display for ContentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_wire_str())
    }
}

impl FromStr for ContentStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "DRAFT" => Ok(ContentStatus::Draft),
            "PUBLISHED" => Ok(ContentStatus::Published),
            "ARCHIVED" => Ok(ContentStatus::Archived),
            _ => Err(CoreError::InvalidStatus {
                value: s.to_string(),
            }),
        }
    }
}

/// Review outcome for moderated submissions (KYC, products, settlements,
/// marketplace reviews).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ModerationStatus {
    Pending,
    Approved,
    Rejected,
    RevisionRequested,
}

impl ModerationStatus {
    pub fn as_wire_str(&self) -> &'static str {
        match self {
            ModerationStatus::Pending => "PENDING",
            ModerationStatus::Approved => "APPROVED",
            ModerationStatus::Rejected => "REJECTED",
            ModerationStatus::RevisionRequested => "REVISION_REQUESTED",
        }
    }

    /// Whether the server would accept a transition to `next`.
    pub fn can_transition(&self, next: ModerationStatus) -> bool {
        matches!(
            (self, next),
            (ModerationStatus::Pending, ModerationStatus::Approved)
                | (ModerationStatus::Pending, ModerationStatus::Rejected)
                | (ModerationStatus::Pending, ModerationStatus::RevisionRequested)
                | (ModerationStatus::RevisionRequested, ModerationStatus::Pending)
        )
    }

    /// Terminal states accept no further moderation actions.
    pub fn is_terminal(&self) -> bool {
        matches!(self, ModerationStatus::Approved | ModerationStatus::Rejected)
    }
}

impl fmt::Display for ModerationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_wire_str())
    }
}

impl FromStr for ModerationStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "PENDING" => Ok(ModerationStatus::Pending),
            "APPROVED" => Ok(ModerationStatus::Approved),
            "REJECTED" => Ok(ModerationStatus::Rejected),
            "REVISION_REQUESTED" => Ok(ModerationStatus::RevisionRequested),
            _ => Err(CoreError::InvalidStatus {
                value: s.to_string(),
            }),
        }
    }
}

/// Lifecycle of a support broadcast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BroadcastStatus {
    Draft,
    Scheduled,
    Sending,
    Sent,
    Failed,
    Cancelled,
}

impl BroadcastStatus {
    pub fn as_wire_str(&self) -> &'static str {
        match self {
            BroadcastStatus::Draft => "DRAFT",
            BroadcastStatus::Scheduled => "SCHEDULED",
            BroadcastStatus::Sending => "SENDING",
            BroadcastStatus::Sent => "SENT",
            BroadcastStatus::Failed => "FAILED",
            BroadcastStatus::Cancelled => "CANCELLED",
        }
    }

    /// Whether the server would accept a transition to `next`.
    ///
    /// Scheduled broadcasts can also be cancelled directly, before the
    /// sender ever picks them up.
    pub fn can_transition(&self, next: BroadcastStatus) -> bool {
        matches!(
            (self, next),
            (BroadcastStatus::Draft, BroadcastStatus::Scheduled)
                | (BroadcastStatus::Scheduled, BroadcastStatus::Sending)
                | (BroadcastStatus::Scheduled, BroadcastStatus::Cancelled)
                | (BroadcastStatus::Sending, BroadcastStatus::Sent)
                | (BroadcastStatus::Sending, BroadcastStatus::Failed)
                | (BroadcastStatus::Sending, BroadcastStatus::Cancelled)
        )
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            BroadcastStatus::Sent | BroadcastStatus::Failed | BroadcastStatus::Cancelled
        )
    }
}

impl fmt::Display for BroadcastStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_wire_str())
    }
}

impl FromStr for BroadcastStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "DRAFT" => Ok(BroadcastStatus::Draft),
            "SCHEDULED" => Ok(BroadcastStatus::Scheduled),
            "SENDING" => Ok(BroadcastStatus::Sending),
            "SENT" => Ok(BroadcastStatus::Sent),
            "FAILED" => Ok(BroadcastStatus::Failed),
            "CANCELLED" => Ok(BroadcastStatus::Cancelled),
            _ => Err(CoreError::InvalidStatus {
                value: s.to_string(),
            }),
        }
    }
}

/// Account standing for users and admins. No client-side transition table:
/// suspension and reactivation rules live entirely on the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountStatus {
    Active,
    Suspended,
    Deactivated,
}

impl AccountStatus {
    pub fn as_wire_str(&self) -> &'static str {
        match self {
            AccountStatus::Active => "ACTIVE",
            AccountStatus::Suspended => "SUSPENDED",
            AccountStatus::Deactivated => "DEACTIVATED",
        }
    }
}

impl fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_wire_str())
    }
}

impl FromStr for AccountStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ACTIVE" => Ok(AccountStatus::Active),
            "SUSPENDED" => Ok(AccountStatus::Suspended),
            "DEACTIVATED" => Ok(AccountStatus::Deactivated),
            _ => Err(CoreError::InvalidStatus {
                value: s.to_string(),
            }),
        }
    }
}

/// Booking lifecycle as reported by the marketplace backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

impl BookingStatus {
    pub fn as_wire_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "PENDING",
            BookingStatus::Confirmed => "CONFIRMED",
            BookingStatus::Completed => "COMPLETED",
            BookingStatus::Cancelled => "CANCELLED",
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_wire_str())
    }
}

impl FromStr for BookingStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "PENDING" => Ok(BookingStatus::Pending),
            "CONFIRMED" => Ok(BookingStatus::Confirmed),
            "COMPLETED" => Ok(BookingStatus::Completed),
            "CANCELLED" => Ok(BookingStatus::Cancelled),
            _ => Err(CoreError::InvalidStatus {
                value: s.to_string(),
            }),
        }
    }
}

/// Settlement/payment transaction state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionStatus {
    Pending,
    Succeeded,
    Failed,
    Refunded,
}

impl TransactionStatus {
    pub fn as_wire_str(&self) -> &'static str {
        match self {
            TransactionStatus::Pending => "PENDING",
            TransactionStatus::Succeeded => "SUCCEEDED",
            TransactionStatus::Failed => "FAILED",
            TransactionStatus::Refunded => "REFUNDED",
        }
    }
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_wire_str())
    }
}

impl FromStr for TransactionStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "PENDING" => Ok(TransactionStatus::Pending),
            "SUCCEEDED" => Ok(TransactionStatus::Succeeded),
            "FAILED" => Ok(TransactionStatus::Failed),
            "REFUNDED" => Ok(TransactionStatus::Refunded),
            _ => Err(CoreError::InvalidStatus {
                value: s.to_string(),
            }),
        }
    }
}

// ============================================================================
// ROW ACTIONS
// ============================================================================

/// State-transition request the console can issue against one or more rows.
///
/// Every action maps to `POST /api/<entity>/<id>/<segment>` except `Delete`,
/// which uses the DELETE method on the row itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RowAction {
    Publish,
    Unpublish,
    Archive,
    Approve,
    Reject,
    Delete,
    Feature,
    Unfeature,
    RequestRevision,
    Cancel,
}

impl RowAction {
    /// URL path segment for the action endpoint.
    pub fn path_segment(&self) -> &'static str {
        match self {
            RowAction::Publish => "publish",
            RowAction::Unpublish => "unpublish",
            RowAction::Archive => "archive",
            RowAction::Approve => "approve",
            RowAction::Reject => "reject",
            RowAction::Delete => "delete",
            RowAction::Feature => "feature",
            RowAction::Unfeature => "unfeature",
            RowAction::RequestRevision => "request-revision",
            RowAction::Cancel => "cancel",
        }
    }

    /// Delete is the one action issued as an HTTP DELETE on the row,
    /// not a POST to an action endpoint.
    pub fn uses_delete_method(&self) -> bool {
        matches!(self, RowAction::Delete)
    }
}

impl fmt::Display for RowAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path_segment())
    }
}

impl FromStr for RowAction {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "publish" => Ok(RowAction::Publish),
            "unpublish" => Ok(RowAction::Unpublish),
            "archive" => Ok(RowAction::Archive),
            "approve" => Ok(RowAction::Approve),
            "reject" => Ok(RowAction::Reject),
            "delete" => Ok(RowAction::Delete),
            "feature" => Ok(RowAction::Feature),
            "unfeature" => Ok(RowAction::Unfeature),
            "request-revision" | "request_revision" => Ok(RowAction::RequestRevision),
            "cancel" => Ok(RowAction::Cancel),
            _ => Err(CoreError::InvalidAction {
                value: s.to_string(),
            }),
        }
    }
}

// ============================================================================
// ERRORS
// ============================================================================

/// Errors produced when parsing domain values off the wire.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("Invalid record id: {value}")]
    InvalidRecordId { value: String },
    #[error("Invalid entity kind: {value}")]
    InvalidEntityKind { value: String },
    #[error("Invalid status: {value}")]
    InvalidStatus { value: String },
    #[error("Invalid action: {value}")]
    InvalidAction { value: String },
}

// ============================================================================
// TESTS
// ============================================================================


// ============================================================================
// PROPERTY-BASED TESTS
// ============================================================================

#[cfg(test)]
mod prop_tests {
    use super::*;
    use proptest::prelude::*;

    fn arb_content_status() -> impl Strategy<Value = ContentStatus> {
        prop_oneof![
            Just(ContentStatus::Draft),
            Just(ContentStatus::Published),
            Just(ContentStatus::Archived),
        ]
    }

    fn arb_moderation_status() -> impl Strategy<Value = ModerationStatus> {
        prop_oneof![
            Just(ModerationStatus::Pending),
            Just(ModerationStatus::Approved),
            Just(ModerationStatus::Rejected),
            Just(ModerationStatus::RevisionRequested),
        ]
    }

    fn arb_broadcast_status() -> impl Strategy<Value = BroadcastStatus> {
        prop_oneof![
            Just(BroadcastStatus::Draft),
            Just(BroadcastStatus::Scheduled),
            Just(BroadcastStatus::Sending),
            Just(BroadcastStatus::Sent),
            Just(BroadcastStatus::Failed),
            Just(BroadcastStatus::Cancelled),
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Display and FromStr are inverses for every status family.
        #[test]
        fn prop_content_status_round_trips(status in arb_content_status()) {
            let parsed: ContentStatus = status.to_string().parse().unwrap();
            prop_assert_eq!(parsed, status);
        }

        #[test]
        fn prop_moderation_status_round_trips(status in arb_moderation_status()) {
            let parsed: ModerationStatus = status.to_string().parse().unwrap();
            prop_assert_eq!(parsed, status);
        }

        #[test]
        fn prop_broadcast_status_round_trips(status in arb_broadcast_status()) {
            let parsed: BroadcastStatus = status.to_string().parse().unwrap();
            prop_assert_eq!(parsed, status);
        }

        /// Serde wire form equals Display wire form for statuses.
        #[test]
        fn prop_status_serde_matches_display(status in arb_moderation_status()) {
            let json = serde_json::to_string(&status).unwrap();
            prop_assert_eq!(json, format!("\"{}\"", status));
        }

        /// No status transitions to itself in any family's table.
        #[test]
        fn prop_no_self_transitions(status in arb_broadcast_status()) {
            prop_assert!(!status.can_transition(status));
        }

        /// Terminal broadcast states accept no transition at all.
        #[test]
        fn prop_broadcast_terminals_are_dead_ends(
            from in arb_broadcast_status(),
            to in arb_broadcast_status(),
        ) {
            if from.is_terminal() {
                prop_assert!(!from.can_transition(to));
            }
        }

        /// RecordId survives a Display/FromStr round trip for any uuid.
        #[test]
        fn prop_record_id_round_trips(bytes in any::<[u8; 16]>()) {
            let id = RecordId::new(Uuid::from_bytes(bytes));
            let parsed: RecordId = id.to_string().parse().unwrap();
            prop_assert_eq!(parsed, id);
        }
    }
}

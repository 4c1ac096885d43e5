//! Rialto Test Utilities
//!
//! Centralized test infrastructure for the Rialto workspace:
//! - Proptest generators for domain types and records
//! - Record fixtures for common scenarios
//! - Envelope builders covering every list-response shape the API emits
//! - A scripted in-memory transport for controller/dispatcher tests

// Re-export core types for convenience
pub use rialto_core::{
    AccountStatus, BookingStatus, BroadcastStatus, ContentStatus, EntityKind, ModerationStatus,
    RecordId, RowAction, Timestamp, TransactionStatus,
};

use chrono::Utc;
use proptest::prelude::*;
use rialto_api::{
    ActionRequest, AnnouncementRecord, BookingRecord, KycRecord, ProductRecord, UserRecord,
};
use rialto_console::api_client::ApiClientError;
use rialto_console::table::TableTransport;
use serde_json::{json, Value};
use std::collections::{HashSet, VecDeque};
use std::sync::Mutex;
use uuid::Uuid;

// ============================================================================
// PROPTEST GENERATORS
// ============================================================================

pub fn arb_record_id() -> impl Strategy<Value = RecordId> {
    any::<[u8; 16]>().prop_map(|bytes| RecordId::new(Uuid::from_bytes(bytes)))
}

pub fn arb_content_status() -> impl Strategy<Value = ContentStatus> {
    prop_oneof![
        Just(ContentStatus::Draft),
        Just(ContentStatus::Published),
        Just(ContentStatus::Archived),
    ]
}

pub fn arb_moderation_status() -> impl Strategy<Value = ModerationStatus> {
    prop_oneof![
        Just(ModerationStatus::Pending),
        Just(ModerationStatus::Approved),
        Just(ModerationStatus::Rejected),
        Just(ModerationStatus::RevisionRequested),
    ]
}

pub fn arb_announcement() -> impl Strategy<Value = AnnouncementRecord> {
    (arb_record_id(), "[a-zA-Z0-9 ]{1,40}", arb_content_status()).prop_map(
        |(id, title, status)| AnnouncementRecord {
            id,
            title,
            body: "generated".to_string(),
            status,
            published_date: None,
            created_at: Utc::now(),
        },
    )
}

pub fn arb_announcement_page() -> impl Strategy<Value = Vec<AnnouncementRecord>> {
    prop::collection::vec(arb_announcement(), 0..25)
}

// ============================================================================
// RECORD FIXTURES
// ============================================================================

pub fn sample_user(name: &str) -> UserRecord {
    UserRecord {
        id: RecordId::now_v7(),
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
        status: AccountStatus::Active,
        created_at: Utc::now(),
        bookings_count: 0,
    }
}

pub fn sample_booking(service: &str) -> BookingRecord {
    BookingRecord {
        id: RecordId::now_v7(),
        user_id: RecordId::now_v7(),
        provider_id: RecordId::now_v7(),
        service: service.to_string(),
        status: BookingStatus::Confirmed,
        amount: 120.0,
        created_at: Utc::now(),
        scheduled_for: None,
    }
}

pub fn sample_announcement(title: &str, status: ContentStatus) -> AnnouncementRecord {
    AnnouncementRecord {
        id: RecordId::now_v7(),
        title: title.to_string(),
        body: "fixture body".to_string(),
        status,
        published_date: None,
        created_at: Utc::now(),
    }
}

pub fn sample_product(name: &str, status: ModerationStatus) -> ProductRecord {
    ProductRecord {
        id: RecordId::now_v7(),
        name: name.to_string(),
        provider_id: RecordId::now_v7(),
        category: "services".to_string(),
        status,
        is_featured: false,
        price: 49.5,
        created_at: Utc::now(),
    }
}

pub fn sample_kyc(document_type: &str) -> KycRecord {
    KycRecord {
        id: RecordId::now_v7(),
        user_id: RecordId::now_v7(),
        document_type: document_type.to_string(),
        status: ModerationStatus::Pending,
        requested_at: Utc::now(),
        reviewed_at: None,
    }
}

// ============================================================================
// ENVELOPE BUILDERS
// ============================================================================

/// `{ "<field>": [...], "meta": { "total", "pages" } }`
pub fn named_envelope<T: serde::Serialize>(
    field: &str,
    rows: &[T],
    total: u64,
    pages: u32,
) -> Value {
    let mut envelope = serde_json::Map::new();
    envelope.insert(field.to_string(), json!(rows));
    envelope.insert("meta".to_string(), json!({ "total": total, "pages": pages }));
    Value::Object(envelope)
}

/// `{ "data": [...], "total": N }`
pub fn data_envelope<T: serde::Serialize>(rows: &[T], total: u64) -> Value {
    json!({ "data": rows, "total": total })
}

/// `{ "items": [...], "total": N, "pages": N }`
pub fn items_envelope<T: serde::Serialize>(rows: &[T], total: u64, pages: u32) -> Value {
    json!({ "items": rows, "total": total, "pages": pages })
}

/// The response body is the bare array itself.
pub fn bare_array<T: serde::Serialize>(rows: &[T]) -> Value {
    json!(rows)
}

// ============================================================================
// SCRIPTED TRANSPORT
// ============================================================================

/// One call observed by [`FakeTransport`], in arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportCall {
    List {
        endpoint: String,
        query: Vec<(String, String)>,
    },
    Action {
        endpoint: String,
        id: RecordId,
        action: RowAction,
        note: Option<String>,
    },
}

/// In-memory [`TableTransport`] with scripted responses.
///
/// List fetches pop queued responses in FIFO order; actions succeed unless
/// the id was marked as failing. Every call is recorded for assertions.
#[derive(Default)]
pub struct FakeTransport {
    list_responses: Mutex<VecDeque<Result<Value, ApiClientError>>>,
    failing_ids: Mutex<HashSet<RecordId>>,
    calls: Mutex<Vec<TransportCall>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_list_response(&self, body: Value) {
        self.list_responses
            .lock()
            .expect("transport lock")
            .push_back(Ok(body));
    }

    pub fn push_list_error(&self, error: ApiClientError) {
        self.list_responses
            .lock()
            .expect("transport lock")
            .push_back(Err(error));
    }

    /// Make `apply_action` fail for this id with a scripted message.
    pub fn fail_action_for(&self, id: RecordId) {
        self.failing_ids.lock().expect("transport lock").insert(id);
    }

    pub fn calls(&self) -> Vec<TransportCall> {
        self.calls.lock().expect("transport lock").clone()
    }

    pub fn list_call_count(&self) -> usize {
        self.calls()
            .iter()
            .filter(|call| matches!(call, TransportCall::List { .. }))
            .count()
    }
}

#[async_trait::async_trait]
impl TableTransport for FakeTransport {
    async fn fetch_list(
        &self,
        endpoint: &str,
        query: &[(String, String)],
    ) -> Result<Value, ApiClientError> {
        self.calls
            .lock()
            .expect("transport lock")
            .push(TransportCall::List {
                endpoint: endpoint.to_string(),
                query: query.to_vec(),
            });
        self.list_responses
            .lock()
            .expect("transport lock")
            .pop_front()
            .unwrap_or_else(|| {
                Err(ApiClientError::InvalidResponse(
                    "no scripted list response".to_string(),
                ))
            })
    }

    async fn apply_action(
        &self,
        endpoint: &str,
        id: RecordId,
        action: RowAction,
        body: Option<&ActionRequest>,
    ) -> Result<(), ApiClientError> {
        self.calls
            .lock()
            .expect("transport lock")
            .push(TransportCall::Action {
                endpoint: endpoint.to_string(),
                id,
                action,
                note: body.and_then(|b| b.note.clone()),
            });
        if self.failing_ids.lock().expect("transport lock").contains(&id) {
            Err(ApiClientError::Api(format!("scripted failure for {}", id)))
        } else {
            Ok(())
        }
    }
}

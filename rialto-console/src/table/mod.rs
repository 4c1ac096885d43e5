//! The generic data-table engine.
//!
//! One controller implements the whole fetch/filter/paginate/select/act/export
//! cycle; each entity table supplies only an [`EntityConfig`] and a row type
//! implementing [`TableRecord`]. Control flow: a filter change recomputes the
//! query, a refetch repopulates the page and pagination, selection resets when
//! the visible id set changes, and actions or exports may trigger another
//! refetch.

pub mod actions;
pub mod controller;
pub mod export;
pub mod fetch;
pub mod filter;
pub mod pagination;
pub mod query;
pub mod selection;

pub use actions::{ActionResult, BulkOutcome};
pub use controller::{EntityConfig, FetchOutcome, PendingFetch, TableController};
pub use export::{ExportError, ExportSink, FieldOption, EXPORT_FETCH_LIMIT};
pub use fetch::{FetchController, FetchPhase, FetchToken, Page};
pub use filter::{DateRange, FilterSet};
pub use pagination::PaginationModel;
pub use selection::SelectionModel;

use crate::api_client::ApiClientError;
use async_trait::async_trait;
use rialto_api::ActionRequest;
use rialto_core::{RecordId, RowAction};

/// A row the engine can manage: decodable from the wire and identifiable.
pub trait TableRecord: serde::de::DeserializeOwned + serde::Serialize + Clone + Send {
    fn record_id(&self) -> RecordId;
}

/// Transport seam between the engine and the HTTP layer.
///
/// `RestClient` is the production implementation; tests script an in-memory
/// fake instead of standing up a server.
#[async_trait]
pub trait TableTransport: Send + Sync {
    /// Fetch a list endpoint, returning the raw JSON envelope.
    async fn fetch_list(
        &self,
        endpoint: &str,
        query: &[(String, String)],
    ) -> Result<serde_json::Value, ApiClientError>;

    /// Request a state transition (or deletion) for a single row.
    async fn apply_action(
        &self,
        endpoint: &str,
        id: RecordId,
        action: RowAction,
        body: Option<&ActionRequest>,
    ) -> Result<(), ApiClientError>;
}

//! Fetch lifecycle and response normalization.
//!
//! The API's list envelopes are inconsistently shaped across endpoint
//! generations, so normalization probes a fixed sequence of shapes. Each
//! fetch also carries a monotonically increasing token; a response whose
//! token is no longer current is discarded instead of overwriting newer data.

use super::pagination;
use crate::api_client::ApiClientError;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// The result of one list fetch: a bounded page of rows plus count metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_count: u64,
    pub page_count: u32,
}

/// Fetch lifecycle: `Idle → Loading → (Loaded | Failed)`.
///
/// While `Loading`, rows are blanked (the UI shows a skeleton); on `Failed`
/// the row list stays empty and the error is shown with a retry affordance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchPhase {
    Idle,
    Loading,
    Loaded,
    Failed(String),
}

/// Identifies one issued fetch; stale tokens lose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchToken(u64);

/// Tracks the in-flight fetch and which completion is allowed to apply.
#[derive(Debug, Clone)]
pub struct FetchController {
    phase: FetchPhase,
    issued: u64,
}

impl FetchController {
    pub fn new() -> Self {
        Self {
            phase: FetchPhase::Idle,
            issued: 0,
        }
    }

    /// Start a new fetch, invalidating any still-unresolved earlier one.
    pub fn begin(&mut self) -> FetchToken {
        self.issued += 1;
        self.phase = FetchPhase::Loading;
        FetchToken(self.issued)
    }

    pub fn is_current(&self, token: FetchToken) -> bool {
        token.0 == self.issued
    }

    /// Record a successful completion. Returns false (and changes nothing)
    /// if a newer fetch has been issued since `token` was handed out.
    pub fn complete_ok(&mut self, token: FetchToken) -> bool {
        if !self.is_current(token) {
            tracing::warn!(target: "rialto::table", token = token.0, "discarding stale fetch result");
            return false;
        }
        self.phase = FetchPhase::Loaded;
        true
    }

    /// Record a failed completion, unless the token is stale.
    pub fn complete_err(&mut self, token: FetchToken, message: impl Into<String>) -> bool {
        if !self.is_current(token) {
            tracing::warn!(target: "rialto::table", token = token.0, "discarding stale fetch error");
            return false;
        }
        self.phase = FetchPhase::Failed(message.into());
        true
    }

    pub fn phase(&self) -> &FetchPhase {
        &self.phase
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, FetchPhase::Loading)
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.phase {
            FetchPhase::Failed(message) => Some(message),
            _ => None,
        }
    }
}

impl Default for FetchController {
    fn default() -> Self {
        Self::new()
    }
}

/// Normalize a list envelope into a [`Page`].
///
/// The item array is located by probing, in order: the entity's named field,
/// a generic `data` field (array, or envelope containing an array), the body
/// itself being an array, and finally the first array-valued property found
/// by introspection. Counts come from `meta.total`/`total` when present and
/// are otherwise derived from the item list.
pub fn normalize_page<T: DeserializeOwned>(
    body: &Value,
    named_field: Option<&str>,
    page_size: u32,
) -> Result<Page<T>, ApiClientError> {
    let items_value = locate_items(body, named_field).ok_or_else(|| {
        ApiClientError::InvalidResponse("list envelope contains no item array".to_string())
    })?;

    let items: Vec<T> = serde_json::from_value(items_value.clone())?;

    let total_count = locate_total(body).unwrap_or(items.len() as u64);
    let page_count =
        locate_pages(body).unwrap_or_else(|| pagination::page_count(total_count, page_size));

    Ok(Page {
        items,
        total_count,
        page_count,
    })
}

fn locate_items<'a>(body: &'a Value, named_field: Option<&str>) -> Option<&'a Value> {
    if let Some(field) = named_field {
        if let Some(value) = body.get(field) {
            if value.is_array() {
                return Some(value);
            }
        }
    }
    if let Some(data) = body.get("data") {
        if data.is_array() {
            return Some(data);
        }
        // Some endpoints nest the real envelope one level down.
        if data.is_object() {
            if let Some(inner) = first_array_property(data) {
                return Some(inner);
            }
        }
    }
    if body.is_array() {
        return Some(body);
    }
    first_array_property(body)
}

fn first_array_property(value: &Value) -> Option<&Value> {
    value
        .as_object()?
        .values()
        .find(|candidate| candidate.is_array())
}

fn locate_total(body: &Value) -> Option<u64> {
    body.get("meta")
        .and_then(|meta| meta.get("total"))
        .and_then(Value::as_u64)
        .or_else(|| body.get("total").and_then(Value::as_u64))
}

fn locate_pages(body: &Value) -> Option<u32> {
    body.get("meta")
        .and_then(|meta| meta.get("pages"))
        .and_then(Value::as_u64)
        .or_else(|| body.get("pages").and_then(Value::as_u64))
        .map(|pages| pages as u32)
}

//! Export coordination.
//!
//! The coordinator gathers the row set - reusing loaded rows when they are
//! already complete, otherwise refetching unpaginated - and hands it to an
//! external sink together with the caller-declared field mapping. File
//! serialization is the sink's concern, not the engine's.

use super::fetch::normalize_page;
use super::filter::FilterSet;
use super::query::build_query;
use super::{TableRecord, TableTransport};
use crate::api_client::ApiClientError;

/// Page-size override for the unpaginated export fetch.
pub const EXPORT_FETCH_LIMIT: u32 = 10_000;

/// One exportable column: human label plus the record field it reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldOption {
    pub label: String,
    pub value: String,
}

impl FieldOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error(transparent)]
    Api(#[from] ApiClientError),
    #[error("Export sink failed: {0}")]
    Sink(String),
}

/// External collaborator that turns a row set into a download.
pub trait ExportSink<R> {
    fn deliver(
        &mut self,
        rows: Vec<R>,
        fields: &[FieldOption],
        filters: &FilterSet,
    ) -> Result<(), ExportError>;
}

/// Fetch the full filtered row set, ignoring the table's pagination.
///
/// The active filters (status, search, categories, date range) still apply;
/// only the page size is overridden with [`EXPORT_FETCH_LIMIT`].
pub async fn fetch_all_for_export<R, T>(
    transport: &T,
    endpoint: &str,
    list_field: Option<&str>,
    filters: &FilterSet,
) -> Result<Vec<R>, ApiClientError>
where
    R: TableRecord,
    T: TableTransport + ?Sized,
{
    let query = build_query(filters, 1, EXPORT_FETCH_LIMIT);
    let body = transport.fetch_list(endpoint, &query).await?;
    let page = normalize_page::<R>(&body, list_field, EXPORT_FETCH_LIMIT)?;
    Ok(page.items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::query::to_query_string;
    use chrono::NaiveDate;

    #[test]
    fn export_query_uses_large_limit_and_keeps_filters() {
        let mut filters = FilterSet::new();
        filters.set_date_from(NaiveDate::from_ymd_opt(2025, 1, 1));
        filters.set_date_to(NaiveDate::from_ymd_opt(2025, 1, 31));

        let query = build_query(&filters, 1, EXPORT_FETCH_LIMIT);
        assert_eq!(
            to_query_string(&query),
            "fromDate=2025-01-01T00:00:00Z&toDate=2025-01-31T23:59:59Z&page=1&limit=10000"
        );
    }

    #[test]
    fn field_options_keep_label_value_pairs() {
        let field = FieldOption::new("Created", "createdAt");
        assert_eq!(field.label, "Created");
        assert_eq!(field.value, "createdAt");
    }
}

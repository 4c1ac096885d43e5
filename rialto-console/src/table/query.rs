//! Query construction from filter state.
//!
//! Pure functions: the same filter set, page, and page size always produce
//! the same parameter list, in the same order, with no side effects. Inactive
//! dimensions emit no key at all.

use super::filter::FilterSet;
use chrono::{NaiveDate, NaiveTime, SecondsFormat, TimeZone, Utc};

/// Build the outgoing query parameters for a list fetch.
///
/// Emission order is fixed (filter dimensions, then `page`, then `limit`) so
/// built queries compare byte-for-byte in logs and tests.
pub fn build_query(filters: &FilterSet, page: u32, page_size: u32) -> Vec<(String, String)> {
    let mut params = Vec::new();

    if let Some(status) = filters.status() {
        params.push(("status".to_string(), status.to_string()));
    }
    if filters.search_active() {
        params.push(("search".to_string(), filters.search().trim().to_string()));
    }
    if !filters.categories().is_empty() {
        params.push(("category".to_string(), filters.categories().join(",")));
    }
    let range = filters.date_range();
    if let Some(from) = range.from {
        params.push(("fromDate".to_string(), start_of_day(from)));
    }
    if let Some(to) = range.to {
        params.push(("toDate".to_string(), end_of_day(to)));
    }
    if let Some(sort) = filters.sort() {
        params.push(("sort".to_string(), sort.to_string()));
    }

    params.push(("page".to_string(), page.to_string()));
    params.push(("limit".to_string(), page_size.to_string()));
    params
}

/// Render parameters as a query string, for logs and assertions.
/// Percent-encoding is left to the HTTP client.
pub fn to_query_string(params: &[(String, String)]) -> String {
    params
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join("&")
}

/// A range lower bound covers its whole day from midnight.
fn start_of_day(date: NaiveDate) -> String {
    let instant = Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN));
    instant.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// A range upper bound is inclusive through the last second of its day.
fn end_of_day(date: NaiveDate) -> String {
    let instant =
        Utc.from_utc_datetime(&(date.and_time(NaiveTime::MIN) + chrono::Duration::seconds(86_399)));
    instant.to_rfc3339_opts(SecondsFormat::Secs, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rialto_core::ContentStatus;

    #[test]
    fn inactive_filters_emit_only_page_and_limit() {
        let filters = FilterSet::new();
        let params = build_query(&filters, 1, 10);
        assert_eq!(to_query_string(&params), "page=1&limit=10");
    }

    #[test]
    fn published_status_emits_exact_query() {
        let mut filters = FilterSet::new();
        filters.set_status(Some(ContentStatus::Published));
        filters.set_search("");
        let params = build_query(&filters, 1, 10);
        assert_eq!(to_query_string(&params), "status=PUBLISHED&page=1&limit=10");
    }

    #[test]
    fn date_bounds_normalize_to_day_edges() {
        let mut filters = FilterSet::new();
        filters.set_date_from(chrono::NaiveDate::from_ymd_opt(2025, 1, 1));
        filters.set_date_to(chrono::NaiveDate::from_ymd_opt(2025, 1, 31));
        let params = build_query(&filters, 2, 25);
        assert_eq!(
            to_query_string(&params),
            "fromDate=2025-01-01T00:00:00Z&toDate=2025-01-31T23:59:59Z&page=2&limit=25"
        );
    }

    #[test]
    fn categories_join_with_commas() {
        let mut filters = FilterSet::new();
        filters.set_categories(vec!["plumbing".to_string(), "cleaning".to_string()]);
        let params = build_query(&filters, 1, 10);
        assert_eq!(
            to_query_string(&params),
            "category=plumbing,cleaning&page=1&limit=10"
        );
    }

    #[test]
    fn search_is_trimmed_on_emission() {
        let mut filters = FilterSet::new();
        filters.set_search("  maria  ");
        let params = build_query(&filters, 1, 10);
        assert_eq!(to_query_string(&params), "search=maria&page=1&limit=10");
    }

    #[test]
    fn sort_key_is_emitted_before_pagination() {
        let mut filters = FilterSet::new();
        filters.set_sort(Some("createdAt:desc"));
        let params = build_query(&filters, 1, 10);
        assert_eq!(
            to_query_string(&params),
            "sort=createdAt:desc&page=1&limit=10"
        );
    }

    #[test]
    fn build_query_is_deterministic() {
        let mut filters = FilterSet::new();
        filters.set_status(Some(ContentStatus::Draft));
        filters.set_search("report");
        let first = build_query(&filters, 3, 50);
        let second = build_query(&filters, 3, 50);
        assert_eq!(first, second);
    }
}

//! Filter dimensions feeding the query builder.
//!
//! Every dimension is independent: none implies or excludes another. An
//! inactive dimension contributes nothing to the outgoing query, so an empty
//! `FilterSet` means "show all". The status dimension is a single-select
//! tagged value; the per-entity layer passes the typed status in and only its
//! wire token is stored here.

use chrono::NaiveDate;
use std::fmt;

/// Inclusive date range bounds, day granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        Self { from, to }
    }

    pub fn is_active(&self) -> bool {
        self.from.is_some() || self.to.is_some()
    }

    pub fn clear(&mut self) {
        self.from = None;
        self.to = None;
    }
}

/// The current combination of active filters for one table.
///
/// The sort key rides along with the filters because it feeds the same query
/// builder, but it is not a filter: `clear` and `is_any_active` ignore it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterSet {
    status: Option<String>,
    search: String,
    date_range: DateRange,
    categories: Vec<String>,
    sort: Option<String>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set or clear the single-select status filter.
    ///
    /// Accepts any status family via its `Display` wire form, so the engine
    /// stays independent of which family an entity uses.
    pub fn set_status<S: fmt::Display>(&mut self, status: Option<S>) {
        self.status = status.map(|s| s.to_string());
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Free-text search, resolved server-side. Stored verbatim; emission
    /// trims surrounding whitespace.
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn search_active(&self) -> bool {
        !self.search.trim().is_empty()
    }

    pub fn set_date_range(&mut self, range: DateRange) {
        self.date_range = range;
    }

    pub fn set_date_from(&mut self, from: Option<NaiveDate>) {
        self.date_range.from = from;
    }

    pub fn set_date_to(&mut self, to: Option<NaiveDate>) {
        self.date_range.to = to;
    }

    pub fn date_range(&self) -> DateRange {
        self.date_range
    }

    /// Replace the category filter. Multiple categories are allowed and are
    /// comma-joined on the wire.
    pub fn set_categories(&mut self, categories: Vec<String>) {
        self.categories = categories;
    }

    pub fn toggle_category(&mut self, category: &str) {
        if let Some(pos) = self.categories.iter().position(|c| c == category) {
            self.categories.remove(pos);
        } else {
            self.categories.push(category.to_string());
        }
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Set or clear the sort key, e.g. `createdAt:desc`.
    pub fn set_sort<S: fmt::Display>(&mut self, sort: Option<S>) {
        self.sort = sort.map(|s| s.to_string());
    }

    pub fn sort(&self) -> Option<&str> {
        self.sort.as_deref()
    }

    pub fn clear(&mut self) {
        self.status = None;
        self.search.clear();
        self.date_range.clear();
        self.categories.clear();
    }

    pub fn is_any_active(&self) -> bool {
        self.status.is_some()
            || self.search_active()
            || self.date_range.is_active()
            || !self.categories.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rialto_core::ContentStatus;

    #[test]
    fn new_filter_set_is_inactive() {
        let filters = FilterSet::new();
        assert!(!filters.is_any_active());
        assert!(filters.status().is_none());
        assert!(!filters.search_active());
    }

    #[test]
    fn status_stores_wire_token() {
        let mut filters = FilterSet::new();
        filters.set_status(Some(ContentStatus::Published));
        assert_eq!(filters.status(), Some("PUBLISHED"));

        filters.set_status::<ContentStatus>(None);
        assert!(filters.status().is_none());
    }

    #[test]
    fn whitespace_search_is_inactive() {
        let mut filters = FilterSet::new();
        filters.set_search("   ");
        assert!(!filters.search_active());
        filters.set_search("alice");
        assert!(filters.search_active());
    }

    #[test]
    fn toggle_category_adds_and_removes() {
        let mut filters = FilterSet::new();
        filters.toggle_category("plumbing");
        filters.toggle_category("cleaning");
        assert_eq!(filters.categories(), ["plumbing", "cleaning"]);

        filters.toggle_category("plumbing");
        assert_eq!(filters.categories(), ["cleaning"]);
    }

    #[test]
    fn clear_resets_every_dimension() {
        let mut filters = FilterSet::new();
        filters.set_status(Some(ContentStatus::Draft));
        filters.set_search("query");
        filters.set_date_from(NaiveDate::from_ymd_opt(2025, 1, 1));
        filters.toggle_category("tools");
        assert!(filters.is_any_active());

        filters.clear();
        assert!(!filters.is_any_active());
    }
}

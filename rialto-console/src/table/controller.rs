//! The generic table controller.
//!
//! Owns the Page/FilterSet/SelectionSet triple for one entity table and
//! sequences the full cycle: filter change -> query rebuild -> fetch ->
//! pagination/selection update -> action dispatch or export -> refetch.
//! Entities supply an [`EntityConfig`]; no entity adds control flow.

use super::actions::{self, BulkOutcome};
use super::export::{fetch_all_for_export, ExportError, ExportSink, FieldOption};
use super::fetch::{normalize_page, FetchController, FetchPhase, FetchToken};
use super::filter::{DateRange, FilterSet};
use super::pagination::PaginationModel;
use super::query::build_query;
use super::selection::SelectionModel;
use super::{TableRecord, TableTransport};
use crate::api_client::ApiClientError;
use crate::notifications::Notification;
use rialto_api::ActionRequest;
use rialto_core::{EntityKind, RecordId, RowAction};
use std::fmt;

/// Per-entity configuration: everything that differs between tables.
#[derive(Debug, Clone)]
pub struct EntityConfig {
    pub kind: EntityKind,
    /// Collection endpoint, e.g. `/api/announcements`.
    pub endpoint: String,
    /// Named array field in this endpoint's list envelope, when it has one.
    pub list_field: Option<&'static str>,
    /// Actions this table offers; the dispatcher itself is action-agnostic.
    pub actions: Vec<RowAction>,
    /// Columns offered by the export dialog.
    pub export_fields: Vec<FieldOption>,
}

impl EntityConfig {
    pub fn new(
        kind: EntityKind,
        list_field: Option<&'static str>,
        actions: Vec<RowAction>,
        export_fields: Vec<FieldOption>,
    ) -> Self {
        Self {
            kind,
            endpoint: format!("/api/{}", kind.endpoint_segment()),
            list_field,
            actions,
            export_fields,
        }
    }

    pub fn offers(&self, action: RowAction) -> bool {
        self.actions.contains(&action)
    }
}

/// A fetch that has been started but not yet resolved.
#[derive(Debug, Clone)]
pub struct PendingFetch {
    pub token: FetchToken,
    pub query: Vec<(String, String)>,
}

/// What happened when a fetch resolution was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The page was installed.
    Applied,
    /// A newer fetch had been issued; this resolution was discarded.
    Stale,
    /// The session is gone; the shell must redirect to login.
    AuthExpired,
    /// The fetch failed; rows are cleared and the error is displayed.
    Failed,
}

/// Generic data-table controller, parametrized by the row type.
pub struct TableController<R> {
    config: EntityConfig,
    filters: FilterSet,
    pagination: PaginationModel,
    selection: SelectionModel,
    fetch: FetchController,
    rows: Vec<R>,
    auth_expired: bool,
}

impl<R: TableRecord> TableController<R> {
    pub fn new(config: EntityConfig, page_size: u32) -> Self {
        Self {
            config,
            filters: FilterSet::new(),
            pagination: PaginationModel::new(page_size),
            selection: SelectionModel::new(),
            fetch: FetchController::new(),
            rows: Vec::new(),
            auth_expired: false,
        }
    }

    // ------------------------------------------------------------------------
    // Read access
    // ------------------------------------------------------------------------

    pub fn config(&self) -> &EntityConfig {
        &self.config
    }

    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    pub fn filters(&self) -> &FilterSet {
        &self.filters
    }

    pub fn pagination(&self) -> &PaginationModel {
        &self.pagination
    }

    pub fn selection(&self) -> &SelectionModel {
        &self.selection
    }

    pub fn phase(&self) -> &FetchPhase {
        self.fetch.phase()
    }

    pub fn error(&self) -> Option<&str> {
        self.fetch.error_message()
    }

    /// Redirect signal: true after a 401 until the next successful fetch.
    pub fn auth_expired(&self) -> bool {
        self.auth_expired
    }

    pub fn offered_actions(&self) -> &[RowAction] {
        &self.config.actions
    }

    pub fn bulk_actions_visible(&self) -> bool {
        self.selection.bulk_actions_visible()
    }

    /// Fetch errors shown as a toast always carry a retry affordance.
    pub fn error_notification(&self) -> Option<Notification> {
        self.fetch.error_message().map(Notification::fetch_error)
    }

    // ------------------------------------------------------------------------
    // Filters (every change resets to the first page)
    // ------------------------------------------------------------------------

    pub fn set_status_filter<S: fmt::Display>(&mut self, status: Option<S>) {
        self.filters.set_status(status);
        self.after_filter_change();
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.filters.set_search(search);
        self.after_filter_change();
    }

    pub fn set_date_range(&mut self, range: DateRange) {
        self.filters.set_date_range(range);
        self.after_filter_change();
    }

    pub fn set_categories(&mut self, categories: Vec<String>) {
        self.filters.set_categories(categories);
        self.after_filter_change();
    }

    /// Reordering restarts from page 1, same as any filter change.
    pub fn set_sort<S: fmt::Display>(&mut self, sort: Option<S>) {
        self.filters.set_sort(sort);
        self.after_filter_change();
    }

    pub fn clear_filters(&mut self) {
        self.filters.clear();
        self.after_filter_change();
    }

    /// Changing the page size also restarts from page 1.
    pub fn set_page_size(&mut self, page_size: u32) {
        self.pagination.set_page_size(page_size);
        self.selection.clear();
    }

    fn after_filter_change(&mut self) {
        self.pagination.reset_to_first();
        self.selection.clear();
    }

    // ------------------------------------------------------------------------
    // Selection
    // ------------------------------------------------------------------------

    /// Check or uncheck every row on the current page.
    pub fn select_all(&mut self, checked: bool) {
        self.selection.select_all(checked);
    }

    /// Check or uncheck one row; ids not on the current page are ignored.
    pub fn select_one(&mut self, id: RecordId, checked: bool) {
        self.selection.select_one(id, checked);
    }

    // ------------------------------------------------------------------------
    // Fetch cycle
    // ------------------------------------------------------------------------

    /// Start a fetch: blanks the rows (skeleton state) and returns the token
    /// plus the query to issue. Event-loop embeddings use this directly so
    /// the request can run off-thread; `refresh` wraps it for inline awaits.
    pub fn begin_refresh(&mut self) -> PendingFetch {
        self.rows.clear();
        let token = self.fetch.begin();
        let query = build_query(
            &self.filters,
            self.pagination.current_page(),
            self.pagination.page_size(),
        );
        PendingFetch { token, query }
    }

    /// Apply a fetch resolution. Resolutions carrying a stale token are
    /// discarded wholesale; a newer fetch owns the table now.
    pub fn apply_fetch(
        &mut self,
        token: FetchToken,
        result: Result<serde_json::Value, ApiClientError>,
    ) -> FetchOutcome {
        if !self.fetch.is_current(token) {
            tracing::warn!(
                target: "rialto::table",
                entity = %self.config.kind,
                "ignoring response from superseded fetch"
            );
            return FetchOutcome::Stale;
        }

        match result {
            Ok(body) => {
                match normalize_page::<R>(&body, self.config.list_field, self.pagination.page_size())
                {
                    Ok(page) => {
                        self.fetch.complete_ok(token);
                        self.pagination.set_total_count(page.total_count);
                        let ids: Vec<RecordId> =
                            page.items.iter().map(|row| row.record_id()).collect();
                        self.selection.sync_page(&ids);
                        self.rows = page.items;
                        self.auth_expired = false;
                        FetchOutcome::Applied
                    }
                    Err(err) => {
                        self.fail_fetch(token, err.to_string());
                        FetchOutcome::Failed
                    }
                }
            }
            Err(ApiClientError::Auth) => {
                self.auth_expired = true;
                self.fail_fetch(token, ApiClientError::Auth.to_string());
                FetchOutcome::AuthExpired
            }
            Err(err) => {
                self.fail_fetch(token, err.to_string());
                FetchOutcome::Failed
            }
        }
    }

    fn fail_fetch(&mut self, token: FetchToken, message: String) {
        self.fetch.complete_err(token, message);
        self.rows.clear();
        self.selection.clear();
    }

    /// Fetch the current page inline.
    pub async fn refresh<T>(&mut self, transport: &T) -> FetchOutcome
    where
        T: TableTransport + ?Sized,
    {
        let pending = self.begin_refresh();
        let result = transport
            .fetch_list(&self.config.endpoint, &pending.query)
            .await;
        self.apply_fetch(pending.token, result)
    }

    // ------------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------------

    /// Bounds-checked navigation; out-of-range targets issue no request.
    pub async fn go_to_page<T>(&mut self, transport: &T, page: u32) -> bool
    where
        T: TableTransport + ?Sized,
    {
        if !self.pagination.go_to_page(page) {
            return false;
        }
        self.selection.clear();
        self.refresh(transport).await;
        true
    }

    /// Free-form page input: clamped silently into range, then fetched.
    pub async fn go_to_page_input<T>(&mut self, transport: &T, input: i64) -> bool
    where
        T: TableTransport + ?Sized,
    {
        if !self.pagination.go_to_clamped(input) {
            return false;
        }
        self.selection.clear();
        self.refresh(transport).await;
        true
    }

    // ------------------------------------------------------------------------
    // Actions
    // ------------------------------------------------------------------------

    /// Dispatch an action over explicit ids, then refetch to observe the
    /// server's resulting state.
    pub async fn dispatch<T>(
        &mut self,
        transport: &T,
        action: RowAction,
        ids: &[RecordId],
        note: Option<&ActionRequest>,
    ) -> BulkOutcome
    where
        T: TableTransport + ?Sized,
    {
        if ids.is_empty() {
            return BulkOutcome::default();
        }
        let outcome =
            actions::dispatch(transport, &self.config.endpoint, action, ids, note).await;
        self.refresh(transport).await;
        outcome
    }

    /// Dispatch an action over the current selection.
    pub async fn dispatch_selected<T>(
        &mut self,
        transport: &T,
        action: RowAction,
        note: Option<&ActionRequest>,
    ) -> BulkOutcome
    where
        T: TableTransport + ?Sized,
    {
        let ids = self.selection.selected_ids();
        self.dispatch(transport, action, &ids, note).await
    }

    // ------------------------------------------------------------------------
    // Export
    // ------------------------------------------------------------------------

    /// Hand the filtered row set to the export sink.
    ///
    /// Reuses the loaded rows when they already cover the full filtered set;
    /// otherwise issues the unpaginated export fetch. Returns the number of
    /// rows delivered.
    pub async fn export<T, S>(&self, transport: &T, sink: &mut S) -> Result<usize, ExportError>
    where
        T: TableTransport + ?Sized,
        S: ExportSink<R>,
    {
        let loaded_is_complete = matches!(self.fetch.phase(), FetchPhase::Loaded)
            && self.rows.len() as u64 >= self.pagination.total_count();
        let rows = if loaded_is_complete {
            self.rows.clone()
        } else {
            fetch_all_for_export::<R, T>(
                transport,
                &self.config.endpoint,
                self.config.list_field,
                &self.filters,
            )
            .await?
        };
        let delivered = rows.len();
        sink.deliver(rows, &self.config.export_fields, &self.filters)?;
        Ok(delivered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rialto_core::ContentStatus;
    use serde::{Deserialize, Serialize};
    use serde_json::json;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct MiniRecord {
        id: RecordId,
        title: String,
    }

    impl TableRecord for MiniRecord {
        fn record_id(&self) -> RecordId {
            self.id
        }
    }

    fn controller() -> TableController<MiniRecord> {
        let config = EntityConfig::new(
            EntityKind::Announcement,
            Some("announcements"),
            vec![RowAction::Publish, RowAction::Delete],
            vec![FieldOption::new("ID", "id"), FieldOption::new("Title", "title")],
        );
        TableController::new(config, 10)
    }

    fn page_body(ids: &[RecordId], total: u64) -> serde_json::Value {
        let items: Vec<_> = ids
            .iter()
            .map(|id| json!({ "id": id.to_string(), "title": "row" }))
            .collect();
        json!({ "announcements": items, "meta": { "total": total } })
    }

    #[test]
    fn applied_fetch_installs_page_and_counts() {
        let mut table = controller();
        let ids: Vec<RecordId> = (0..3).map(|_| RecordId::now_v7()).collect();

        let pending = table.begin_refresh();
        assert!(table.rows().is_empty());
        assert!(matches!(table.phase(), FetchPhase::Loading));

        let outcome = table.apply_fetch(pending.token, Ok(page_body(&ids, 95)));
        assert_eq!(outcome, FetchOutcome::Applied);
        assert_eq!(table.rows().len(), 3);
        assert_eq!(table.pagination().total_count(), 95);
        assert_eq!(table.pagination().page_count(), 10);
        assert!(matches!(table.phase(), FetchPhase::Loaded));
    }

    #[test]
    fn stale_response_cannot_overwrite_newer_fetch() {
        let mut table = controller();
        let old_ids: Vec<RecordId> = (0..2).map(|_| RecordId::now_v7()).collect();
        let new_ids: Vec<RecordId> = (0..1).map(|_| RecordId::now_v7()).collect();

        let slow = table.begin_refresh();
        let fast = table.begin_refresh();

        let outcome = table.apply_fetch(fast.token, Ok(page_body(&new_ids, 1)));
        assert_eq!(outcome, FetchOutcome::Applied);

        // The slow response arrives last; it must be discarded.
        let outcome = table.apply_fetch(slow.token, Ok(page_body(&old_ids, 2)));
        assert_eq!(outcome, FetchOutcome::Stale);
        assert_eq!(table.rows().len(), 1);
        assert_eq!(table.rows()[0].id, new_ids[0]);
    }

    #[test]
    fn failed_fetch_clears_rows_and_keeps_error() {
        let mut table = controller();
        let ids: Vec<RecordId> = (0..2).map(|_| RecordId::now_v7()).collect();

        let pending = table.begin_refresh();
        table.apply_fetch(pending.token, Ok(page_body(&ids, 2)));
        assert_eq!(table.rows().len(), 2);

        let pending = table.begin_refresh();
        let outcome = table.apply_fetch(
            pending.token,
            Err(ApiClientError::InvalidResponse("HTTP 500: boom".to_string())),
        );
        assert_eq!(outcome, FetchOutcome::Failed);
        assert!(table.rows().is_empty());
        assert_eq!(table.error(), Some("HTTP 500: boom"));

        let toast = table.error_notification().unwrap();
        assert_eq!(
            toast.action,
            Some(crate::notifications::NotificationAction::Retry)
        );
    }

    #[test]
    fn auth_error_signals_redirect_and_renders_nothing() {
        let mut table = controller();
        let ids: Vec<RecordId> = (0..2).map(|_| RecordId::now_v7()).collect();

        let pending = table.begin_refresh();
        table.apply_fetch(pending.token, Ok(page_body(&ids, 2)));

        let pending = table.begin_refresh();
        let outcome = table.apply_fetch(pending.token, Err(ApiClientError::Auth));
        assert_eq!(outcome, FetchOutcome::AuthExpired);
        assert!(table.auth_expired());
        assert!(table.rows().is_empty());
    }

    #[test]
    fn filter_change_resets_page_and_selection() {
        let mut table = controller();
        let ids: Vec<RecordId> = (0..10).map(|_| RecordId::now_v7()).collect();

        let pending = table.begin_refresh();
        table.apply_fetch(pending.token, Ok(page_body(&ids, 95)));
        table.pagination.go_to_page(5);
        table.selection.select_all(true);
        assert_eq!(table.selection().len(), 10);

        table.set_status_filter(Some(ContentStatus::Published));
        assert_eq!(table.pagination().current_page(), 1);
        assert_eq!(table.selection().len(), 0);
        assert_eq!(table.filters().status(), Some("PUBLISHED"));
    }

    #[test]
    fn successful_fetch_with_new_ids_resets_selection() {
        let mut table = controller();
        let first: Vec<RecordId> = (0..3).map(|_| RecordId::now_v7()).collect();
        let second: Vec<RecordId> = (0..3).map(|_| RecordId::now_v7()).collect();

        let pending = table.begin_refresh();
        table.apply_fetch(pending.token, Ok(page_body(&first, 3)));
        table.selection.select_all(true);
        assert!(table.bulk_actions_visible());

        let pending = table.begin_refresh();
        table.apply_fetch(pending.token, Ok(page_body(&second, 3)));
        assert_eq!(table.selection().len(), 0);
        assert!(!table.bulk_actions_visible());
    }

    #[test]
    fn offered_actions_come_from_config() {
        let table = controller();
        assert!(table.config().offers(RowAction::Publish));
        assert!(!table.config().offers(RowAction::Approve));
    }
}

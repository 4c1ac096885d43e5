//! Action dispatch against one or many rows.
//!
//! Transitions are server-authoritative: the console requests them and then
//! refetches to observe the result. Nothing is mutated locally, and bulk
//! dispatch is best-effort - every id is attempted concurrently and every
//! outcome is reported, so a failure in the middle never strands the rest.

use super::TableTransport;
use futures_util::future::join_all;
use rialto_api::ActionRequest;
use rialto_core::{RecordId, RowAction};

/// Outcome of one action request against one row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionResult {
    pub id: RecordId,
    pub success: bool,
    pub error: Option<String>,
}

/// Per-id outcomes of a dispatch, in the order the ids were given.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BulkOutcome {
    pub results: Vec<ActionResult>,
}

impl BulkOutcome {
    pub fn succeeded(&self) -> Vec<RecordId> {
        self.results
            .iter()
            .filter(|r| r.success)
            .map(|r| r.id)
            .collect()
    }

    pub fn failed(&self) -> Vec<(RecordId, String)> {
        self.results
            .iter()
            .filter(|r| !r.success)
            .map(|r| (r.id, r.error.clone().unwrap_or_default()))
            .collect()
    }

    pub fn all_succeeded(&self) -> bool {
        self.results.iter().all(|r| r.success)
    }

    pub fn any_failed(&self) -> bool {
        !self.all_succeeded()
    }

    /// One-line summary for the notification toast.
    pub fn summary(&self, action: RowAction) -> String {
        let ok = self.results.iter().filter(|r| r.success).count();
        let failed = self.results.len() - ok;
        if failed == 0 {
            format!("{}: {} row(s) updated", action, ok)
        } else {
            format!("{}: {} row(s) updated, {} failed", action, ok, failed)
        }
    }
}

/// Fan an action out over `ids`, concurrently and best-effort.
///
/// All requests are attempted regardless of individual failures; the
/// outcome lists every id exactly once, preserving input order.
pub async fn dispatch<T: TableTransport + ?Sized>(
    transport: &T,
    endpoint: &str,
    action: RowAction,
    ids: &[RecordId],
    note: Option<&ActionRequest>,
) -> BulkOutcome {
    let requests = ids.iter().map(|id| async move {
        match transport.apply_action(endpoint, *id, action, note).await {
            Ok(()) => ActionResult {
                id: *id,
                success: true,
                error: None,
            },
            Err(err) => ActionResult {
                id: *id,
                success: false,
                error: Some(err.to_string()),
            },
        }
    });

    let outcome = BulkOutcome {
        results: join_all(requests).await,
    };
    if outcome.any_failed() {
        tracing::warn!(
            target: "rialto::table",
            %action,
            failed = outcome.failed().len(),
            total = outcome.results.len(),
            "bulk dispatch completed with failures"
        );
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(id: RecordId, success: bool) -> ActionResult {
        ActionResult {
            id,
            success,
            error: if success {
                None
            } else {
                Some("boom".to_string())
            },
        }
    }

    #[test]
    fn outcome_partitions_by_success() {
        let ids: Vec<RecordId> = (0..3).map(|_| RecordId::now_v7()).collect();
        let outcome = BulkOutcome {
            results: vec![
                result(ids[0], true),
                result(ids[1], false),
                result(ids[2], true),
            ],
        };

        assert_eq!(outcome.succeeded(), vec![ids[0], ids[2]]);
        assert_eq!(outcome.failed(), vec![(ids[1], "boom".to_string())]);
        assert!(outcome.any_failed());
        assert!(!outcome.all_succeeded());
    }

    #[test]
    fn empty_outcome_counts_as_success() {
        let outcome = BulkOutcome::default();
        assert!(outcome.all_succeeded());
        assert!(!outcome.any_failed());
    }

    #[test]
    fn summary_reports_partial_failure() {
        let ids: Vec<RecordId> = (0..2).map(|_| RecordId::now_v7()).collect();
        let outcome = BulkOutcome {
            results: vec![result(ids[0], true), result(ids[1], false)],
        };
        assert_eq!(
            outcome.summary(RowAction::Approve),
            "approve: 1 row(s) updated, 1 failed"
        );
    }
}

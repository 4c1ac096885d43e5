//! Notification system for the console shell.
//!
//! The engine never renders; it hands the shell ready-made notifications for
//! the two failure surfaces it owns: list fetches and action dispatches.

use crate::table::BulkOutcome;
use chrono::{DateTime, Utc};
use rialto_core::RowAction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Warning,
    Error,
    Success,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationAction {
    Retry,
    Dismiss,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
    pub action: Option<NotificationAction>,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn new(level: NotificationLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            action: None,
            created_at: Utc::now(),
        }
    }

    pub fn with_action(mut self, action: NotificationAction) -> Self {
        self.action = Some(action);
        self
    }

    /// List-fetch failures always carry a retry affordance.
    pub fn fetch_error(message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Error, message).with_action(NotificationAction::Retry)
    }

    /// Toast for a finished dispatch: full success reads as success, a
    /// partial failure is a warning that names the failed count.
    pub fn bulk_result(action: RowAction, outcome: &BulkOutcome) -> Self {
        let level = if outcome.any_failed() {
            NotificationLevel::Warning
        } else {
            NotificationLevel::Success
        };
        Self::new(level, outcome.summary(action))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::ActionResult;
    use rialto_core::RecordId;

    #[test]
    fn fetch_error_offers_retry() {
        let n = Notification::fetch_error("Failed to load bookings");
        assert_eq!(n.level, NotificationLevel::Error);
        assert_eq!(n.action, Some(NotificationAction::Retry));
    }

    #[test]
    fn clean_bulk_result_is_a_success_toast() {
        let outcome = BulkOutcome {
            results: vec![ActionResult {
                id: RecordId::now_v7(),
                success: true,
                error: None,
            }],
        };
        let n = Notification::bulk_result(RowAction::Publish, &outcome);
        assert_eq!(n.level, NotificationLevel::Success);
        assert_eq!(n.message, "publish: 1 row(s) updated");
    }

    #[test]
    fn partial_bulk_result_warns() {
        let outcome = BulkOutcome {
            results: vec![
                ActionResult {
                    id: RecordId::now_v7(),
                    success: true,
                    error: None,
                },
                ActionResult {
                    id: RecordId::now_v7(),
                    success: false,
                    error: Some("conflict".to_string()),
                },
            ],
        };
        let n = Notification::bulk_result(RowAction::Approve, &outcome);
        assert_eq!(n.level, NotificationLevel::Warning);
        assert!(n.message.contains("1 failed"));
    }
}

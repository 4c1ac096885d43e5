//! KYC submission table configuration.

use crate::table::{EntityConfig, FieldOption, TableController, TableRecord};
use rialto_api::KycRecord;
use rialto_core::{EntityKind, RecordId, RowAction};

pub type KycTable = TableController<KycRecord>;

impl TableRecord for KycRecord {
    fn record_id(&self) -> RecordId {
        self.id
    }
}

pub fn config() -> EntityConfig {
    EntityConfig::new(
        EntityKind::KycSubmission,
        None,
        vec![
            RowAction::Approve,
            RowAction::Reject,
            RowAction::RequestRevision,
        ],
        vec![
            FieldOption::new("ID", "id"),
            FieldOption::new("User", "userId"),
            FieldOption::new("Document", "documentType"),
            FieldOption::new("Status", "status"),
            FieldOption::new("Requested", "requestedAt"),
            FieldOption::new("Reviewed", "reviewedAt"),
        ],
    )
}

pub fn table(page_size: u32) -> KycTable {
    TableController::new(config(), page_size)
}

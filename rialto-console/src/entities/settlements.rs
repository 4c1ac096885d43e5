//! Settlement table configuration.

use crate::table::{EntityConfig, FieldOption, TableController, TableRecord};
use rialto_api::SettlementRecord;
use rialto_core::{EntityKind, RecordId, RowAction};

pub type SettlementTable = TableController<SettlementRecord>;

impl TableRecord for SettlementRecord {
    fn record_id(&self) -> RecordId {
        self.id
    }
}

pub fn config() -> EntityConfig {
    EntityConfig::new(
        EntityKind::Settlement,
        None,
        vec![RowAction::Approve, RowAction::Reject],
        vec![
            FieldOption::new("ID", "id"),
            FieldOption::new("Provider", "providerId"),
            FieldOption::new("Amount", "amount"),
            FieldOption::new("Currency", "currency"),
            FieldOption::new("Period", "period"),
            FieldOption::new("Status", "status"),
            FieldOption::new("Requested", "requestedAt"),
        ],
    )
}

pub fn table(page_size: u32) -> SettlementTable {
    TableController::new(config(), page_size)
}

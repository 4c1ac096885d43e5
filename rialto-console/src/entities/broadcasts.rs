//! Support broadcast table configuration.

use crate::table::{EntityConfig, FieldOption, TableController, TableRecord};
use rialto_api::BroadcastRecord;
use rialto_core::{EntityKind, RecordId, RowAction};

pub type BroadcastTable = TableController<BroadcastRecord>;

impl TableRecord for BroadcastRecord {
    fn record_id(&self) -> RecordId {
        self.id
    }
}

pub fn config() -> EntityConfig {
    EntityConfig::new(
        EntityKind::Broadcast,
        Some("broadcasts"),
        vec![RowAction::Cancel, RowAction::Delete],
        vec![
            FieldOption::new("ID", "id"),
            FieldOption::new("Title", "title"),
            FieldOption::new("Channel", "channel"),
            FieldOption::new("Segment", "segment"),
            FieldOption::new("Status", "status"),
            FieldOption::new("Scheduled", "scheduledFor"),
            FieldOption::new("Sent", "sentAt"),
        ],
    )
}

pub fn table(page_size: u32) -> BroadcastTable {
    TableController::new(config(), page_size)
}

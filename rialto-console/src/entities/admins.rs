//! Admin account table configuration.

use crate::table::{EntityConfig, FieldOption, TableController, TableRecord};
use rialto_api::AdminRecord;
use rialto_core::{EntityKind, RecordId, RowAction};

pub type AdminTable = TableController<AdminRecord>;

impl TableRecord for AdminRecord {
    fn record_id(&self) -> RecordId {
        self.id
    }
}

pub fn config() -> EntityConfig {
    EntityConfig::new(
        EntityKind::Admin,
        None,
        vec![RowAction::Delete],
        vec![
            FieldOption::new("ID", "id"),
            FieldOption::new("Name", "name"),
            FieldOption::new("Email", "email"),
            FieldOption::new("Role", "role"),
            FieldOption::new("Status", "status"),
            FieldOption::new("Last login", "lastLoginAt"),
        ],
    )
}

pub fn table(page_size: u32) -> AdminTable {
    TableController::new(config(), page_size)
}

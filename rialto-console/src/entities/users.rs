//! User table configuration.

use crate::table::{EntityConfig, FieldOption, TableController, TableRecord};
use rialto_api::UserRecord;
use rialto_core::{EntityKind, RecordId, RowAction};

pub type UserTable = TableController<UserRecord>;

impl TableRecord for UserRecord {
    fn record_id(&self) -> RecordId {
        self.id
    }
}

pub fn config() -> EntityConfig {
    EntityConfig::new(
        EntityKind::User,
        None,
        vec![RowAction::Delete],
        vec![
            FieldOption::new("ID", "id"),
            FieldOption::new("Name", "name"),
            FieldOption::new("Email", "email"),
            FieldOption::new("Status", "status"),
            FieldOption::new("Joined", "createdAt"),
            FieldOption::new("Bookings", "bookingsCount"),
        ],
    )
}

pub fn table(page_size: u32) -> UserTable {
    TableController::new(config(), page_size)
}

//! Booking table configuration.

use crate::table::{EntityConfig, FieldOption, TableController, TableRecord};
use rialto_api::BookingRecord;
use rialto_core::{EntityKind, RecordId, RowAction};

pub type BookingTable = TableController<BookingRecord>;

impl TableRecord for BookingRecord {
    fn record_id(&self) -> RecordId {
        self.id
    }
}

pub fn config() -> EntityConfig {
    EntityConfig::new(
        EntityKind::Booking,
        None,
        vec![RowAction::Cancel, RowAction::Delete],
        vec![
            FieldOption::new("ID", "id"),
            FieldOption::new("User", "userId"),
            FieldOption::new("Provider", "providerId"),
            FieldOption::new("Service", "service"),
            FieldOption::new("Status", "status"),
            FieldOption::new("Amount", "amount"),
            FieldOption::new("Created", "createdAt"),
        ],
    )
}

pub fn table(page_size: u32) -> BookingTable {
    TableController::new(config(), page_size)
}

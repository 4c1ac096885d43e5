//! Transaction table configuration.
//!
//! Transactions are read-only in the console: the table exists for filtering
//! and export, and offers no row actions.

use crate::table::{EntityConfig, FieldOption, TableController, TableRecord};
use rialto_api::TransactionRecord;
use rialto_core::{EntityKind, RecordId};

pub type TransactionTable = TableController<TransactionRecord>;

impl TableRecord for TransactionRecord {
    fn record_id(&self) -> RecordId {
        self.id
    }
}

pub fn config() -> EntityConfig {
    EntityConfig::new(
        EntityKind::Transaction,
        None,
        Vec::new(),
        vec![
            FieldOption::new("ID", "id"),
            FieldOption::new("Booking", "bookingId"),
            FieldOption::new("Amount", "amount"),
            FieldOption::new("Currency", "currency"),
            FieldOption::new("Status", "status"),
            FieldOption::new("Created", "createdAt"),
        ],
    )
}

pub fn table(page_size: u32) -> TransactionTable {
    TableController::new(config(), page_size)
}

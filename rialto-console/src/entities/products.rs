//! Product listing table configuration.
//!
//! Feature/unfeature goes through the same dispatch-then-refetch cycle as
//! every other transition; the row is never flipped locally while the
//! request is in flight.

use crate::table::{EntityConfig, FieldOption, TableController, TableRecord};
use rialto_api::ProductRecord;
use rialto_core::{EntityKind, RecordId, RowAction};

pub type ProductTable = TableController<ProductRecord>;

impl TableRecord for ProductRecord {
    fn record_id(&self) -> RecordId {
        self.id
    }
}

pub fn config() -> EntityConfig {
    EntityConfig::new(
        EntityKind::Product,
        None,
        vec![
            RowAction::Approve,
            RowAction::Reject,
            RowAction::RequestRevision,
            RowAction::Feature,
            RowAction::Unfeature,
            RowAction::Delete,
        ],
        vec![
            FieldOption::new("ID", "id"),
            FieldOption::new("Name", "name"),
            FieldOption::new("Provider", "providerId"),
            FieldOption::new("Category", "category"),
            FieldOption::new("Status", "status"),
            FieldOption::new("Featured", "isFeatured"),
            FieldOption::new("Price", "price"),
        ],
    )
}

pub fn table(page_size: u32) -> ProductTable {
    TableController::new(config(), page_size)
}

//! Review moderation table configuration.

use crate::table::{EntityConfig, FieldOption, TableController, TableRecord};
use rialto_api::ReviewRecord;
use rialto_core::{EntityKind, RecordId, RowAction};

pub type ReviewTable = TableController<ReviewRecord>;

impl TableRecord for ReviewRecord {
    fn record_id(&self) -> RecordId {
        self.id
    }
}

pub fn config() -> EntityConfig {
    EntityConfig::new(
        EntityKind::Review,
        // This endpoint's envelope names its array after the entity.
        Some("reviews"),
        vec![RowAction::Approve, RowAction::Reject, RowAction::Delete],
        vec![
            FieldOption::new("ID", "id"),
            FieldOption::new("Product", "productId"),
            FieldOption::new("Author", "authorId"),
            FieldOption::new("Rating", "rating"),
            FieldOption::new("Comment", "comment"),
            FieldOption::new("Status", "status"),
            FieldOption::new("Created", "createdAt"),
        ],
    )
}

pub fn table(page_size: u32) -> ReviewTable {
    TableController::new(config(), page_size)
}

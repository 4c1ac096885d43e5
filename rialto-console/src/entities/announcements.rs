//! Announcement table configuration.

use crate::table::{EntityConfig, FieldOption, TableController, TableRecord};
use rialto_api::AnnouncementRecord;
use rialto_core::{EntityKind, RecordId, RowAction};

pub type AnnouncementTable = TableController<AnnouncementRecord>;

impl TableRecord for AnnouncementRecord {
    fn record_id(&self) -> RecordId {
        self.id
    }
}

pub fn config() -> EntityConfig {
    EntityConfig::new(
        EntityKind::Announcement,
        Some("announcements"),
        vec![
            RowAction::Publish,
            RowAction::Unpublish,
            RowAction::Archive,
            RowAction::Delete,
        ],
        vec![
            FieldOption::new("ID", "id"),
            FieldOption::new("Title", "title"),
            FieldOption::new("Status", "status"),
            FieldOption::new("Published", "publishedDate"),
            FieldOption::new("Created", "createdAt"),
        ],
    )
}

pub fn table(page_size: u32) -> AnnouncementTable {
    TableController::new(config(), page_size)
}

//! Article table configuration.

use crate::table::{EntityConfig, FieldOption, TableController, TableRecord};
use rialto_api::ArticleRecord;
use rialto_core::{EntityKind, RecordId, RowAction};

pub type ArticleTable = TableController<ArticleRecord>;

impl TableRecord for ArticleRecord {
    fn record_id(&self) -> RecordId {
        self.id
    }
}

pub fn config() -> EntityConfig {
    EntityConfig::new(
        EntityKind::Article,
        None,
        vec![
            RowAction::Publish,
            RowAction::Unpublish,
            RowAction::Archive,
            RowAction::Feature,
            RowAction::Unfeature,
            RowAction::Delete,
        ],
        vec![
            FieldOption::new("ID", "id"),
            FieldOption::new("Title", "title"),
            FieldOption::new("Slug", "slug"),
            FieldOption::new("Author", "author"),
            FieldOption::new("Status", "status"),
            FieldOption::new("Featured", "isFeatured"),
            FieldOption::new("Published", "publishedDate"),
        ],
    )
}

pub fn table(page_size: u32) -> ArticleTable {
    TableController::new(config(), page_size)
}

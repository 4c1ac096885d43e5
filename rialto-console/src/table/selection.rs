//! Bulk-selection state, scoped to the currently loaded page.

use rialto_core::RecordId;
use std::collections::HashSet;

/// Set of checked row ids, always a subset of the visible page's ids.
///
/// Navigating to a different page, or any fetch that produces a different id
/// set, silently clears the selection.
#[derive(Debug, Clone, Default)]
pub struct SelectionModel {
    page_ids: Vec<RecordId>,
    selected: HashSet<RecordId>,
}

impl SelectionModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the id set of a freshly fetched page. A changed id set clears
    /// the selection; refetching the identical page preserves it.
    pub fn sync_page(&mut self, ids: &[RecordId]) {
        if self.page_ids != ids {
            self.selected.clear();
            self.page_ids = ids.to_vec();
        }
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    pub fn select_all(&mut self, checked: bool) {
        if checked {
            self.selected = self.page_ids.iter().copied().collect();
        } else {
            self.selected.clear();
        }
    }

    /// Toggle one row. Ids not on the current page are ignored.
    pub fn select_one(&mut self, id: RecordId, checked: bool) {
        if !self.page_ids.contains(&id) {
            return;
        }
        if checked {
            self.selected.insert(id);
        } else {
            self.selected.remove(&id);
        }
    }

    pub fn is_selected(&self, id: RecordId) -> bool {
        self.selected.contains(&id)
    }

    /// True iff every visible row is selected and the page is non-empty.
    pub fn is_all_selected(&self) -> bool {
        !self.page_ids.is_empty() && self.selected.len() == self.page_ids.len()
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Selected ids in page order.
    pub fn selected_ids(&self) -> Vec<RecordId> {
        self.page_ids
            .iter()
            .filter(|id| self.selected.contains(id))
            .copied()
            .collect()
    }

    /// Bulk affordances are shown only while something is selected.
    pub fn bulk_actions_visible(&self) -> bool {
        !self.selected.is_empty()
    }
}

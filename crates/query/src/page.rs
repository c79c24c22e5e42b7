//! Paged fetch results.

use serde::{Deserialize, Serialize};

/// One page of a list result, replaced wholesale on every fetch; the
/// client never patches items incrementally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PagedResult<T> {
    pub items: Vec<T>,
    pub current_page: u32,
    pub total_pages: u32,
    pub total_items: u64,
}

impl<T> PagedResult<T> {
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            current_page: 1,
            total_pages: 1,
            total_items: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> Default for PagedResult<T> {
    fn default() -> Self {
        Self::empty()
    }
}

use serde::Serialize;

/// Number of ids requested per page.
pub const PAGE_SIZE: u32 = 50;

/// Params of the `get_ids` action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageRequest {
    pub offset: u32,
    pub limit: u32,
}

/// Offset into the id listing, moved one page at a time.
///
/// The offset never goes below zero: stepping back from the first page is refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    offset: u32,
    page_size: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(PAGE_SIZE)
    }
}

impl Pagination {
    pub fn new(page_size: u32) -> Self {
        Self {
            offset: 0,
            page_size,
        }
    }

    pub fn offset(&self) -> u32 {
        self.offset
    }

    pub fn current(&self) -> PageRequest {
        PageRequest {
            offset: self.offset,
            limit: self.page_size,
        }
    }

    pub fn next(&mut self) -> PageRequest {
        self.offset = self.offset.saturating_add(self.page_size);
        self.current()
    }

    /// `None` when already on the first page.
    pub fn prev(&mut self) -> Option<PageRequest> {
        if self.offset == 0 {
            return None;
        }
        self.offset = self.offset.saturating_sub(self.page_size);
        Some(self.current())
    }

    pub fn prev_enabled(&self) -> bool {
        self.offset != 0
    }
}

use crate::types::{PAGE_SIZE, PageIndex, TABLE_MAX_PAGES, error::DatabaseError};

pub type PageBuffer = Box<[u8; PAGE_SIZE]>;

/// In-memory page store of capacity `TABLE_MAX_PAGES`. Pages are opaque
/// zero-filled byte buffers, allocated on first mutable access and resident
/// until the pager is dropped. No eviction, no backing file.
pub struct Pager {
    pages: Vec<Option<PageBuffer>>,
}

impl Pager {
    pub fn new() -> Self {
        Self {
            pages: (0..TABLE_MAX_PAGES).map(|_| None).collect(),
        }
    }

    /// Mutable access to a page, allocating it if not yet materialized.
    pub fn page_mut(&mut self, index: PageIndex) -> Result<&mut [u8; PAGE_SIZE], DatabaseError> {
        if index >= TABLE_MAX_PAGES {
            return Err(DatabaseError::PageOutOfBounds {
                index,
                max: TABLE_MAX_PAGES,
            });
        }
        let page = self.pages[index].get_or_insert_with(|| Box::new([0u8; PAGE_SIZE]));
        Ok(page)
    }

    /// Read access without allocating. `None` means the page was never
    /// touched, which in turn means no row has been written to it.
    pub fn page(&self, index: PageIndex) -> Option<&[u8; PAGE_SIZE]> {
        self.pages.get(index)?.as_deref()
    }

    pub fn allocated_pages(&self) -> usize {
        self.pages.iter().filter(|p| p.is_some()).count()
    }
}

impl Default for Pager {
    fn default() -> Self {
        Self::new()
    }
}

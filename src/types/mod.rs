pub mod error;
pub mod row;

// Common type aliases
pub type PageIndex = usize;
pub type RowIndex = usize;

// Fixed single-table schema: (id, username, email)
pub const COLUMN_USERNAME_SIZE: usize = 32;
pub const COLUMN_EMAIL_SIZE: usize = 255;

// Serialized row layout: fields are fixed-width and packed in order
pub const ID_SIZE: usize = size_of::<i32>();
pub const ID_OFFSET: usize = 0;
pub const USERNAME_OFFSET: usize = ID_OFFSET + ID_SIZE;
pub const EMAIL_OFFSET: usize = USERNAME_OFFSET + COLUMN_USERNAME_SIZE;
pub const ROW_SIZE: usize = ID_SIZE + COLUMN_USERNAME_SIZE + COLUMN_EMAIL_SIZE;

// Paged memory layout. Rows never straddle a page boundary, so the
// trailing PAGE_SIZE % ROW_SIZE bytes of every page stay unused.
pub const PAGE_SIZE: usize = 4096;
pub const TABLE_MAX_PAGES: usize = 100;
pub const ROWS_PER_PAGE: usize = PAGE_SIZE / ROW_SIZE;
pub const TABLE_MAX_ROWS: usize = ROWS_PER_PAGE * TABLE_MAX_PAGES;

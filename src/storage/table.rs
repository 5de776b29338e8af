use crate::{
    storage::pager::Pager,
    types::{
        PageIndex, ROW_SIZE, ROWS_PER_PAGE, RowIndex, TABLE_MAX_ROWS, error::DatabaseError,
        row::Row,
    },
};

/// Append-only sequence of rows over a [`Pager`]. Row positions map to page
/// slots by pure arithmetic: no holes, no reuse, no deletion.
pub struct Table {
    pager: Pager,
    row_count: usize,
}

impl Table {
    pub fn new() -> Self {
        Self {
            pager: Pager::new(),
            row_count: 0,
        }
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn is_full(&self) -> bool {
        self.row_count >= TABLE_MAX_ROWS
    }

    /// Slot address of a row position: `(page_index, byte_offset)`.
    pub fn row_slot(row_index: RowIndex) -> (PageIndex, usize) {
        (
            row_index / ROWS_PER_PAGE,
            (row_index % ROWS_PER_PAGE) * ROW_SIZE,
        )
    }

    /// Append `row` at position `row_count`. All-or-nothing: on
    /// `TableFull` the table is unchanged and further inserts keep failing
    /// identically.
    pub fn insert(&mut self, row: &Row) -> Result<(), DatabaseError> {
        if self.is_full() {
            return Err(DatabaseError::TableFull);
        }
        let (page_index, offset) = Self::row_slot(self.row_count);
        let page = self.pager.page_mut(page_index)?;
        row.write_to(&mut page[offset..offset + ROW_SIZE]);
        self.row_count += 1;
        Ok(())
    }

    /// Lazy scan over all rows in insertion order. Restartable: each call
    /// yields a fresh iterator starting at position 0.
    pub fn scan(&self) -> TableScan<'_> {
        TableScan {
            table: self,
            cursor: 0,
        }
    }
}

impl Default for Table {
    fn default() -> Self {
        Self::new()
    }
}

pub struct TableScan<'a> {
    table: &'a Table,
    cursor: RowIndex,
}

impl TableScan<'_> {
    fn decode(&self, row_index: RowIndex) -> Result<Row, DatabaseError> {
        let (page_index, offset) = Table::row_slot(row_index);
        // Rows below row_count always live on an allocated page.
        let page = self
            .table
            .pager
            .page(page_index)
            .ok_or_else(|| DatabaseError::Serialization {
                details: format!("row {} points at unallocated page {}", row_index, page_index),
            })?;
        Row::read_from(&page[offset..offset + ROW_SIZE])
    }
}

impl Iterator for TableScan<'_> {
    type Item = Result<Row, DatabaseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor >= self.table.row_count {
            return None;
        }
        let row = self.decode(self.cursor);
        self.cursor += 1;
        Some(row)
    }
}

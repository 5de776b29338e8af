use crate::{storage::table::Table, types::{error::DatabaseError, row::Row}};

/// Append one pre-validated row. `TableFull` propagates to the shell and
/// leaves the table unchanged.
pub fn run(table: &mut Table, row: &Row) -> Result<(), DatabaseError> {
    table.insert(row)
}

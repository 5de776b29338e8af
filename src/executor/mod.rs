pub mod insert;
pub mod select;

use std::io::Write;

use crate::{compiler::Statement, storage::table::Table, types::error::DatabaseError};

/// Apply a compiled statement to the table, writing plain result lines to
/// `out`. Every successful statement ends with an `Executed.` line.
pub fn execute<W: Write>(
    statement: Statement,
    table: &mut Table,
    out: &mut W,
) -> Result<(), DatabaseError> {
    match statement {
        Statement::Insert(row) => insert::run(table, &row)?,
        Statement::Select => select::run(table, out)?,
    }
    writeln!(out, "Executed.")?;
    Ok(())
}

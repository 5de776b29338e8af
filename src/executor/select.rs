use std::io::Write;

use crate::{storage::table::Table, types::error::DatabaseError};

/// Full scan: one `(id, username, email)` line per row, in insertion order.
/// An empty table writes no row lines; the dispatcher still appends the
/// trailing `Executed.`.
pub fn run<W: Write>(table: &Table, out: &mut W) -> Result<(), DatabaseError> {
    for row in table.scan() {
        writeln!(out, "{}", row?)?;
    }
    Ok(())
}

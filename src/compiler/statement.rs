use crate::types::row::Row;

/// A fully validated statement. By the time one of these exists, every
/// field-level check has already passed; the executor only deals with
/// storage outcomes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    Insert(Row),
    Select,
}

use std::str::SplitWhitespace;

use crate::{
    compiler::{error::CompileError, statement::Statement},
    types::{COLUMN_EMAIL_SIZE, COLUMN_USERNAME_SIZE, row::Row},
};

/// Compile one input line into a [`Statement`], running every validation up
/// front. Keywords are case-sensitive exact matches at the start of the
/// line.
pub fn compile(line: &str) -> Result<Statement, CompileError> {
    let mut tokens = line.split_whitespace();
    match tokens.next() {
        Some("insert") => compile_insert(tokens),
        Some("select") => Ok(Statement::Select),
        _ => Err(CompileError::Unrecognized(line.trim().to_string())),
    }
}

// insert <id> <username> <email> — exactly four tokens. The id check runs
// before the length checks; the order is deterministic but the checks are
// independent of each other and of table state.
fn compile_insert(mut tokens: SplitWhitespace<'_>) -> Result<Statement, CompileError> {
    let id_token = tokens.next().ok_or(CompileError::Syntax)?;
    let username = tokens.next().ok_or(CompileError::Syntax)?;
    let email = tokens.next().ok_or(CompileError::Syntax)?;
    if tokens.next().is_some() {
        return Err(CompileError::Syntax);
    }

    let id: i32 = id_token.parse().map_err(|_| CompileError::Syntax)?;
    if id <= 0 {
        return Err(CompileError::IdMustBePositive);
    }
    if username.len() > COLUMN_USERNAME_SIZE || email.len() > COLUMN_EMAIL_SIZE {
        return Err(CompileError::StringTooLong);
    }

    Ok(Statement::Insert(Row::new(id, username, email)))
}

/// Compile-time failures. `Display` strings are the exact lines the shell
/// prints, so variants double as the user-facing protocol.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum CompileError {
    #[error("Syntax error. Could not parse statement.")]
    Syntax,
    #[error("ID must be positive.")]
    IdMustBePositive,
    #[error("String is too long.")]
    StringTooLong,
    #[error("Unrecognized keyword at start of '{0}'.")]
    Unrecognized(String),
}

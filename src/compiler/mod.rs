pub mod error;
pub mod parser;
pub mod statement;

pub use error::CompileError;
pub use parser::compile;
pub use statement::Statement;

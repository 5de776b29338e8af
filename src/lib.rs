pub mod compiler;
pub mod executor;
pub mod repl;
pub mod storage;
pub mod types;

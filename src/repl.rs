use std::io::{BufRead, Write};

use crate::{
    compiler,
    executor,
    storage::table::Table,
    types::error::DatabaseError,
};

pub const PROMPT: &str = "db > ";

/// Whether the session keeps reading after a line has been handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Exit,
}

// Non-statement commands like `.exit` are meta-commands; every line that
// starts with a dot is routed here.
enum MetaCommand {
    Exit,
    Unrecognized,
}

impl MetaCommand {
    fn parse(line: &str) -> Option<MetaCommand> {
        match line {
            ".exit" => Some(MetaCommand::Exit),
            _ if line.starts_with('.') => Some(MetaCommand::Unrecognized),
            _ => None,
        }
    }
}

/// Handle one input line against the session table, writing plain result
/// lines (no prompt) to `out`. Compile and execution errors print their
/// message and keep the session alive; only I/O failures propagate.
pub fn dispatch<W: Write>(
    line: &str,
    table: &mut Table,
    out: &mut W,
) -> std::io::Result<Control> {
    if let Some(meta) = MetaCommand::parse(line) {
        match meta {
            MetaCommand::Exit => {
                writeln!(out, "Bye~")?;
                return Ok(Control::Exit);
            }
            MetaCommand::Unrecognized => {
                writeln!(out, "Unrecognized command '{}'.", line)?;
                return Ok(Control::Continue);
            }
        }
    }

    match compiler::compile(line) {
        Ok(statement) => match executor::execute(statement, table, out) {
            Ok(()) => {}
            Err(DatabaseError::Io(e)) => return Err(e),
            Err(e) => writeln!(out, "{}", e)?,
        },
        Err(e) => writeln!(out, "{}", e)?,
    }
    Ok(Control::Continue)
}

/// Non-interactive session loop: prompt, read, dispatch, until `.exit` or
/// EOF. Used when stdin is not a terminal, so scripted runs produce
/// byte-exact output.
pub fn run<R: BufRead, W: Write>(mut input: R, mut out: W) -> std::io::Result<()> {
    let mut table = Table::new();
    let mut line = String::new();
    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            // EOF without `.exit`: end the session quietly.
            return Ok(());
        }
        if dispatch(line.trim_end(), &mut table, &mut out)? == Control::Exit {
            return Ok(());
        }
    }
}

use std::io::{self, IsTerminal, Write};

use lembar::{
    repl::{self, Control},
    storage::table::Table,
};
use rustyline::{DefaultEditor, error::ReadlineError};

fn run_interactive() -> rustyline::Result<()> {
    let mut rl = DefaultEditor::new()?;
    let mut table = Table::new();
    let mut stdout = io::stdout();

    loop {
        match rl.readline(repl::PROMPT) {
            Ok(line) => {
                let command = line.trim_end();
                if !command.is_empty() {
                    rl.add_history_entry(command)?;
                }
                if repl::dispatch(command, &mut table, &mut stdout)? == Control::Exit {
                    break;
                }
                stdout.flush()?;
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err),
        }
    }

    Ok(())
}

fn main() -> rustyline::Result<()> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        run_interactive()
    } else {
        // Piped input: plain line reads keep scripted output byte-exact.
        repl::run(stdin.lock(), io::stdout())?;
        Ok(())
    }
}

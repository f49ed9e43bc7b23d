//! Interactive prompt used when `usagi` runs without a subcommand

use anyhow::Result;
use chrono::NaiveDate;
use std::io::{BufRead, Write};
use tracing::debug;

use crate::command::{parse, Command, Session};

const GREETING: &str = "Hello! I'm Usagi, your personal task manager!\nWhat can I do for you?";
const DIVIDER: &str = "____________________________________________________________";

/// Read commands line by line until `bye` or end of input.
///
/// Command errors are reported inline and never end the loop; only I/O
/// failures on the streams themselves are returned.
pub fn run<R: BufRead, W: Write>(
    session: &mut Session,
    input: R,
    output: &mut W,
    today: impl Fn() -> NaiveDate,
) -> Result<()> {
    print_block(output, GREETING)?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let outcome = parse(&line).and_then(|command| {
            let message = session.execute(&command, today())?;
            Ok((command, message))
        });

        match outcome {
            Ok((Command::Exit, message)) => {
                print_block(output, &message)?;
                return Ok(());
            }
            Ok((_, message)) => print_block(output, &message)?,
            Err(e) => {
                debug!("Command {:?} failed: {}", line, e);
                print_block(output, &format!("Ura? ({})", e))?;
            }
        }
    }

    Ok(())
}

fn print_block<W: Write>(output: &mut W, message: &str) -> Result<()> {
    writeln!(output, "{}", DIVIDER)?;
    writeln!(output, "{}", message)?;
    writeln!(output, "{}", DIVIDER)?;
    output.flush()?;
    Ok(())
}

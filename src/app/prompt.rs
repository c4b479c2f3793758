//! Reading tokens and menu selections from standard input

use std::io::{BufRead, Write};

use crate::error::{MoodError, Result};
use crate::models::{parse_lenient_int, Command};

/// Read the next whitespace-delimited token, skipping blank lines.
///
/// The remainder of the line after the token is discarded.
pub fn read_token<R: BufRead>(input: &mut R) -> Result<String> {
    let mut line = String::new();
    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(MoodError::InputClosed);
        }
        if let Some(token) = line.split_whitespace().next() {
            return Ok(token.to_string());
        }
    }
}

/// Prompt once for a menu number.
///
/// Returns `None` when nothing usable was selected (0, out of range, or not
/// a number); the caller prompts again.
pub fn read_menu_selection<R, W>(input: &mut R, output: &mut W) -> Result<Option<Command>>
where
    R: BufRead,
    W: Write,
{
    write!(output, "> ")?;
    output.flush()?;

    let token = read_token(input)?;
    match Command::from_menu_number(parse_lenient_int(&token)) {
        Ok(selection) => Ok(selection),
        Err(n) => {
            log::debug!("rejected menu selection {}", n);
            writeln!(
                output,
                "* Invalid option selected, please select a number between 1-3"
            )?;
            Ok(None)
        }
    }
}

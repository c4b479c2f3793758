//! Interactive first-use setup

use std::io::{BufRead, Write};

use crate::app::prompt::read_token;
use crate::display;
use crate::error::{MoodError, Result};
use crate::models::Username;
use crate::profile::ProfileStore;

/// Answer to the confirmation question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Confirmation {
    Yes,
    No,
}

impl Confirmation {
    /// `y`/`Y` confirm; anything else asks again
    fn parse(token: &str) -> Self {
        if token.eq_ignore_ascii_case("y") {
            Confirmation::Yes
        } else {
            if !token.eq_ignore_ascii_case("n") {
                log::debug!("unrecognized confirmation {:?}, asking again", token);
            }
            Confirmation::No
        }
    }
}

/// Ask for a username until one is confirmed, then persist it.
///
/// A failed write is reported as a warning and the confirmed name is still
/// returned for the current session.
pub fn run_setup_interactive<R, W>(
    store: &ProfileStore,
    input: &mut R,
    output: &mut W,
) -> Result<Username>
where
    R: BufRead,
    W: Write,
{
    let username = loop {
        write!(output, "- Enter a username: ")?;
        output.flush()?;
        let candidate = Username::new(&read_token(input)?, store.max_len());

        write!(
            output,
            "\n- Please confirm your username: {} [y/n]",
            candidate
        )?;
        output.flush()?;

        match Confirmation::parse(&read_token(input)?) {
            Confirmation::Yes => break candidate,
            Confirmation::No => writeln!(output)?,
        }
    };
    writeln!(output)?;

    match store.save(&username) {
        Ok(()) => display::info(output, &format!("Profile saved for {}", username))?,
        Err(e @ MoodError::ProfileWrite { .. }) => {
            log::warn!("{}", e);
            display::warning(output, &e.to_string())?;
        }
        Err(e) => return Err(e),
    }

    Ok(username)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn run(store: &ProfileStore, script: &str) -> (Result<Username>, String) {
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut output: Vec<u8> = Vec::new();
        let result = run_setup_interactive(store, &mut input, &mut output);
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_confirmed_username_is_saved() {
        let temp = TempDir::new().unwrap();
        let store = ProfileStore::new(temp.path().join("usr.conf"), 31);

        let (result, output) = run(&store, "alice\ny\n");

        assert_eq!(result.unwrap().as_str(), "alice");
        assert!(output.contains("- Enter a username: "));
        assert!(output.contains("- Please confirm your username: alice [y/n]"));
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "alice");
    }

    #[test]
    fn test_uppercase_confirmation() {
        let temp = TempDir::new().unwrap();
        let store = ProfileStore::new(temp.path().join("usr.conf"), 31);

        let (result, _) = run(&store, "alice\nY\n");
        assert_eq!(result.unwrap().as_str(), "alice");
    }

    #[test]
    fn test_rejection_asks_again() {
        let temp = TempDir::new().unwrap();
        let store = ProfileStore::new(temp.path().join("usr.conf"), 31);

        let (result, output) = run(&store, "alice\nn\nbob\ny\n");

        assert_eq!(result.unwrap().as_str(), "bob");
        assert_eq!(output.matches("- Enter a username: ").count(), 2);
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "bob");
    }

    #[test]
    fn test_unrecognized_confirmation_asks_again() {
        let temp = TempDir::new().unwrap();
        let store = ProfileStore::new(temp.path().join("usr.conf"), 31);

        let (result, output) = run(&store, "alice\nmaybe\ncarol\nN\ndave\ny\n");

        assert_eq!(result.unwrap().as_str(), "dave");
        assert_eq!(output.matches("- Enter a username: ").count(), 3);
    }

    #[test]
    fn test_input_closed_during_setup() {
        let temp = TempDir::new().unwrap();
        let store = ProfileStore::new(temp.path().join("usr.conf"), 31);

        let (result, _) = run(&store, "alice\n");

        assert!(matches!(result, Err(MoodError::InputClosed)));
        assert!(!store.exists());
    }

    #[test]
    fn test_write_failure_is_reported_not_fatal() {
        let temp = TempDir::new().unwrap();
        let store = ProfileStore::new(temp.path(), 31);

        let (result, output) = run(&store, "alice\ny\n");

        assert_eq!(result.unwrap().as_str(), "alice");
        assert!(output.contains("[WARNING] Could not save username"));
    }
}

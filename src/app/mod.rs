//! Application loop
//!
//! Startup (first use or profile load), direct `-m` dispatch, and the
//! interactive menu prompt. Exactly one resolved command is dispatched per
//! run.

mod dispatch;
pub mod prompt;

use std::io::{BufRead, Write};

use crate::display::{self, ScreenClearer};
use crate::error::{MoodError, Result};
use crate::models::{parse_lenient_int, Command, Username};
use crate::profile::ProfileStore;

/// Value of the `-m` flag as seen on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectFlag {
    Absent,
    MissingValue,
    Value(String),
}

impl From<Option<Option<String>>> for DirectFlag {
    fn from(flag: Option<Option<String>>) -> Self {
        match flag {
            None => DirectFlag::Absent,
            Some(None) => DirectFlag::MissingValue,
            Some(Some(value)) => DirectFlag::Value(value),
        }
    }
}

/// Session state shared by every command
#[derive(Debug)]
pub struct AppState {
    pub username: Option<Username>,
    pub store: ProfileStore,
}

/// One interactive run of the journal over a given input and output
pub struct App<R, W> {
    state: AppState,
    input: R,
    output: W,
    clearer: Box<dyn ScreenClearer>,
    rich: bool,
}

impl<R: BufRead, W: Write> App<R, W> {
    pub fn new(
        store: ProfileStore,
        input: R,
        output: W,
        clearer: Box<dyn ScreenClearer>,
        rich: bool,
    ) -> Self {
        Self {
            state: AppState {
                username: None,
                store,
            },
            input,
            output,
            clearer,
            rich,
        }
    }

    /// Run startup, resolve a command and dispatch it once
    pub fn run(&mut self, flag: DirectFlag) -> Result<()> {
        self.start()?;

        let command = match self.resolve_direct(flag)? {
            Some(command) => command,
            None => self.prompt_until_selected()?,
        };

        self.dispatch(command)
    }

    /// Load the saved profile, or run setup on first use
    fn start(&mut self) -> Result<()> {
        if !self.state.store.exists() {
            log::info!(
                "no profile at {}, starting first-use setup",
                self.state.store.path().display()
            );
            return self.dispatch(Command::Setup);
        }

        match self.state.store.load() {
            Ok(username) => {
                self.state.username = Some(username);
                Ok(())
            }
            Err(e) => {
                display::warning(&mut self.output, "Failed to load saved data, aborting...")?;
                self.output.flush()?;
                Err(e)
            }
        }
    }

    /// Command given with `-m`, if it names one
    fn resolve_direct(&mut self, flag: DirectFlag) -> Result<Option<Command>> {
        let value = match flag {
            DirectFlag::Absent => return Ok(None),
            DirectFlag::MissingValue => {
                display::warning(&mut self.output, &MoodError::MissingFlagValue.to_string())?;
                return Ok(None);
            }
            DirectFlag::Value(value) => value,
        };

        let number = parse_lenient_int(&value);
        writeln!(self.output, "You have selected option: {}!", number)?;

        match Command::from_menu_number(number) {
            Ok(selection) => Ok(selection),
            Err(n) => {
                let err = MoodError::InvalidSelection(n);
                log::debug!("{}", err);
                display::warning(&mut self.output, &err.to_string())?;
                Ok(None)
            }
        }
    }

    /// Show the home view, then ask until a command is chosen
    fn prompt_until_selected(&mut self) -> Result<Command> {
        self.dispatch(Command::ViewHome)?;
        loop {
            if let Some(command) = prompt::read_menu_selection(&mut self.input, &mut self.output)? {
                return Ok(command);
            }
        }
    }

    #[cfg(test)]
    fn into_output(self) -> W {
        self.output
    }
}

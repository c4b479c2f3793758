use std::io::{BufRead, Write};

use super::App;
use crate::clock;
use crate::display;
use crate::error::Result;
use crate::models::Command;
use crate::profile::setup;

impl<R: BufRead, W: Write> App<R, W> {
    /// Clear the screen, then execute one command
    pub fn dispatch(&mut self, command: Command) -> Result<()> {
        log::debug!("dispatching {} ({})", command, command.ordinal());

        if let Err(e) = self.clearer.clear(&mut self.output) {
            log::warn!("screen clear failed: {}", e);
            display::warning(&mut self.output, "Could not clear the screen")?;
        }

        match command {
            Command::AddEntry => {
                writeln!(self.output, "* Log entry: {}", clock::now_string())?;
            }
            Command::Setup => {
                write!(self.output, "{}", display::setup_banner(self.rich))?;
                let username = setup::run_setup_interactive(
                    &self.state.store,
                    &mut self.input,
                    &mut self.output,
                )?;
                self.state.username = Some(username);
            }
            Command::ViewHome => {
                let name = self
                    .state
                    .username
                    .as_ref()
                    .map(|u| u.as_str())
                    .unwrap_or_default();
                write!(self.output, "{}", display::home_banner(name, self.rich))?;
            }
            Command::Stats | Command::Customize => {
                writeln!(self.output, "Not implemented yet!")?;
            }
        }

        self.output.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::{app_with, output_of};
    use crate::display::ScreenClearer;
    use crate::models::{Command, Username};
    use std::cell::Cell;
    use std::io;
    use std::rc::Rc;

    struct FailingClearer;

    impl ScreenClearer for FailingClearer {
        fn clear(&self, _out: &mut dyn io::Write) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::NotFound, "no terminal"))
        }
    }

    struct CountingClearer(Rc<Cell<usize>>);

    impl ScreenClearer for CountingClearer {
        fn clear(&self, _out: &mut dyn io::Write) -> io::Result<()> {
            self.0.set(self.0.get() + 1);
            Ok(())
        }
    }

    #[test]
    fn test_add_entry_prints_timestamp() {
        let temp = tempfile::TempDir::new().unwrap();
        let mut app = app_with(&temp, "");
        app.dispatch(Command::AddEntry).unwrap();

        let output = output_of(app);
        assert!(output.starts_with("* Log entry: "));
        assert!(output.ends_with("\n\n"));
    }

    #[test]
    fn test_placeholders_not_implemented() {
        for command in [Command::Stats, Command::Customize] {
            let temp = tempfile::TempDir::new().unwrap();
            let mut app = app_with(&temp, "");
            app.dispatch(command).unwrap();
            assert_eq!(output_of(app), "Not implemented yet!\n");
        }
    }

    #[test]
    fn test_view_home_is_repeatable() {
        let temp = tempfile::TempDir::new().unwrap();
        let mut app = app_with(&temp, "");
        app.state.username = Some(Username::new("bob", 31));

        app.dispatch(Command::ViewHome).unwrap();
        let first = app.output.len();
        app.dispatch(Command::ViewHome).unwrap();

        let output = output_of(app);
        assert_eq!(&output[..first], &output[first..]);
        assert!(output.contains("* Welcome bob, please select a option:"));
    }

    #[test]
    fn test_setup_records_username() {
        let temp = tempfile::TempDir::new().unwrap();
        let mut app = app_with(&temp, "alice\ny\n");

        app.dispatch(Command::Setup).unwrap();

        assert_eq!(app.state.username, Some(Username::new("alice", 31)));
        let output = output_of(app);
        assert!(output.contains("* Hello and welcome to Mood-Tracker!"));
    }

    #[test]
    fn test_clear_failure_still_dispatches() {
        let temp = tempfile::TempDir::new().unwrap();
        let mut app = app_with(&temp, "");
        app.clearer = Box::new(FailingClearer);

        app.dispatch(Command::Stats).unwrap();

        assert_eq!(
            output_of(app),
            "[WARNING] Could not clear the screen\nNot implemented yet!\n"
        );
    }

    #[test]
    fn test_every_dispatch_clears_once() {
        let temp = tempfile::TempDir::new().unwrap();
        let count = Rc::new(Cell::new(0));
        let mut app = app_with(&temp, "");
        app.clearer = Box::new(CountingClearer(Rc::clone(&count)));

        app.dispatch(Command::Stats).unwrap();
        app.dispatch(Command::AddEntry).unwrap();

        assert_eq!(count.get(), 2);
    }
}

//! TTY detection, color support and screen clearing

use std::io::{self, IsTerminal, Write};

use termimad::crossterm::cursor::MoveTo;
use termimad::crossterm::terminal::{Clear, ClearType};
use termimad::crossterm::QueueableCommand;

use crate::config::Display;

/// Determine if colors should be used based on environment and TTY status
pub fn should_use_colors() -> bool {
    // NO_COLOR takes precedence (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    if let Ok(val) = std::env::var("CLICOLOR_FORCE") {
        if val != "0" {
            return true;
        }
    }

    if let Ok(val) = std::env::var("CLICOLOR") {
        if val == "0" {
            return false;
        }
    }

    io::stdout().is_terminal()
}

/// Something able to wipe the terminal before a command renders
pub trait ScreenClearer {
    fn clear(&self, out: &mut dyn Write) -> io::Result<()>;
}

/// Clears with ANSI/console commands written to the output stream
pub struct TerminalClearer;

impl ScreenClearer for TerminalClearer {
    fn clear(&self, out: &mut dyn Write) -> io::Result<()> {
        out.queue(Clear(ClearType::All))?.queue(MoveTo(0, 0))?;
        out.flush()
    }
}

/// Leaves the screen untouched (piped output, or clearing disabled)
pub struct NoopClearer;

impl ScreenClearer for NoopClearer {
    fn clear(&self, _out: &mut dyn Write) -> io::Result<()> {
        Ok(())
    }
}

/// Choose the clearer for this run
pub fn clearer_for(display: &Display) -> Box<dyn ScreenClearer> {
    if display.clear_screen && io::stdout().is_terminal() {
        Box::new(TerminalClearer)
    } else {
        Box::new(NoopClearer)
    }
}

//! Menu banners and categorized messages

use std::io::{self, Write};

use termimad::MadSkin;

const WARNING_PREFIX: &str = "[WARNING]";
const INFO_PREFIX: &str = "[INFO]";

const RULE_LONG: &str = "*------------------------------------------------";
const RULE_SHORT: &str = "*---------------------------------";

const HOME_OPTIONS: [&str; 5] = [
    RULE_LONG,
    "* 1 - Add log entry",
    "* 2 - Overview",
    "* 3 - Customize entry options",
    RULE_LONG,
];

const SETUP_LINES: [&str; 4] = [
    "* Hello and welcome to Mood-Tracker!",
    RULE_SHORT,
    "* Looks like this is your first use,",
    "please provide the information below:",
];

/// Colors the fixed banner text and the username separately.
///
/// Text is wrapped in escape sequences only; nothing is parsed as markdown,
/// so a username is always printed as typed.
struct Painter {
    skin: Option<MadSkin>,
}

impl Painter {
    fn new(rich: bool) -> Self {
        let skin = rich.then(|| {
            let mut skin = MadSkin::default();
            customize_skin(&mut skin);
            skin
        });
        Self { skin }
    }

    fn frame(&self, text: &str) -> String {
        match &self.skin {
            Some(skin) => skin.bold.apply_to(text).to_string(),
            None => text.to_string(),
        }
    }

    fn name(&self, text: &str) -> String {
        match &self.skin {
            Some(skin) => skin.inline_code.apply_to(text).to_string(),
            None => text.to_string(),
        }
    }

    fn lines(&self, lines: &[&str]) -> String {
        lines
            .iter()
            .map(|line| format!("{}\n", self.frame(line)))
            .collect()
    }
}

fn customize_skin(skin: &mut MadSkin) {
    use termimad::crossterm::style::{Attribute, Color::*};

    skin.bold.add_attr(Attribute::Bold);
    skin.bold.set_fg(Cyan);
    skin.inline_code.set_fg(Yellow);
}

/// Main menu shown on the home view
pub fn home_banner(username: &str, rich: bool) -> String {
    let painter = Painter::new(rich);
    format!(
        "{}{}{}\n{}",
        painter.frame("* Welcome "),
        painter.name(username),
        painter.frame(", please select a option:"),
        painter.lines(&HOME_OPTIONS)
    )
}

/// Greeting printed before the first-use setup questions
pub fn setup_banner(rich: bool) -> String {
    Painter::new(rich).lines(&SETUP_LINES)
}

/// Write a `[WARNING]` line
pub fn warning(out: &mut dyn Write, msg: &str) -> io::Result<()> {
    writeln!(out, "{} {}", WARNING_PREFIX, msg)
}

/// Write an `[INFO]` line
pub fn info(out: &mut dyn Write, msg: &str) -> io::Result<()> {
    writeln!(out, "{} {}", INFO_PREFIX, msg)
}

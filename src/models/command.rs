use std::fmt;

/// An action the dispatcher can execute.
///
/// "Nothing selected yet" is expressed as `Option<Command>::None`, never as a
/// variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    AddEntry,
    Stats,
    Customize,
    Setup,
    ViewHome,
}

impl Command {
    /// Numeric code of the command (1-based, as shown in the menu)
    pub fn ordinal(self) -> u8 {
        match self {
            Command::AddEntry => 1,
            Command::Stats => 2,
            Command::Customize => 3,
            Command::Setup => 4,
            Command::ViewHome => 5,
        }
    }

    /// Map a user supplied number to a command.
    ///
    /// `0` means no selection and yields `Ok(None)`. Only the menu range
    /// `[0, 3]` is accepted; `Setup` and `ViewHome` are reached by the
    /// startup sequence alone. A rejected number is handed back as the error.
    pub fn from_menu_number(n: i64) -> Result<Option<Command>, i64> {
        match n {
            0 => Ok(None),
            1 => Ok(Some(Command::AddEntry)),
            2 => Ok(Some(Command::Stats)),
            3 => Ok(Some(Command::Customize)),
            _ => Err(n),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Command::AddEntry => "add entry",
            Command::Stats => "overview",
            Command::Customize => "customize",
            Command::Setup => "setup",
            Command::ViewHome => "home",
        };
        write!(f, "{}", name)
    }
}

/// Best-effort integer parse: leading whitespace, an optional sign, then as
/// many digits as are present. Anything unparseable is 0.
pub fn parse_lenient_int(token: &str) -> i64 {
    let trimmed = token.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let mut value: i64 = 0;
    for digit in rest.bytes().take_while(u8::is_ascii_digit) {
        value = value
            .saturating_mul(10)
            .saturating_add(i64::from(digit - b'0'));
    }

    if negative {
        -value
    } else {
        value
    }
}

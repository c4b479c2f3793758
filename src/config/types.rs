use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Moodtracker configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// File holding the persisted username
    pub profile_file: PathBuf,

    /// Maximum number of characters kept from a username
    pub username_max_len: usize,

    /// Display settings
    pub display: Display,
}

/// Display configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Display {
    /// Clear the terminal before each command (only when stdout is a TTY)
    pub clear_screen: bool,

    /// Style banners with terminal colors when the terminal supports it
    pub colors: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            profile_file: PathBuf::from("usr.conf"),
            username_max_len: 31,
            display: Display::default(),
        }
    }
}

impl Default for Display {
    fn default() -> Self {
        Self {
            clear_screen: true,
            colors: true,
        }
    }
}

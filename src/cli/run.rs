use std::io;
use std::path::PathBuf;

use crate::app::{App, DirectFlag};
use crate::config;
use crate::display;
use crate::error::Result;
use crate::profile::ProfileStore;

/// Run the interactive journal on the process's stdin/stdout
pub fn run(config_path: Option<PathBuf>, flag: DirectFlag) -> Result<()> {
    let config = config::resolve(config_path.as_deref())?;

    let store = ProfileStore::new(&config.profile_file, config.username_max_len);
    let clearer = display::clearer_for(&config.display);
    let rich = config.display.colors && display::should_use_colors();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut app = App::new(store, stdin.lock(), stdout.lock(), clearer, rich);
    app.run(flag)
}

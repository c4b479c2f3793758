//! Profile persistence module
//!
//! Stores the single local username as plain text (no delimiter, no trailing
//! newline). First use is detected by the file being absent. Concurrent
//! instances sharing one profile file are not supported.

pub mod setup;

use std::fs::{self, File};
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::error::{MoodError, Result};
use crate::models::Username;

/// Reads and writes the persisted username file
#[derive(Debug, Clone)]
pub struct ProfileStore {
    path: PathBuf,
    max_len: usize,
}

impl ProfileStore {
    pub fn new(path: impl Into<PathBuf>, max_len: usize) -> Self {
        Self {
            path: path.into(),
            max_len,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn max_len(&self) -> usize {
        self.max_len
    }

    /// True once a profile has been saved
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load the username from the first line of the profile file.
    ///
    /// Bytes that are not valid UTF-8 are replaced rather than rejected.
    pub fn load(&self) -> Result<Username> {
        // Enough bytes for `max_len` four-byte characters plus a line break
        let limit = (self.max_len as u64 + 1) * 4;
        let read = || -> std::io::Result<Vec<u8>> {
            let mut bytes = Vec::new();
            File::open(&self.path)?.take(limit).read_to_end(&mut bytes)?;
            Ok(bytes)
        };

        let bytes = read().map_err(|source| MoodError::ProfileNotReadable {
            path: self.path.clone(),
            source,
        })?;

        let content = String::from_utf8_lossy(&bytes);
        let first_line = content.lines().next().unwrap_or_default();
        log::debug!("loaded profile from {}", self.path.display());
        Ok(Username::new(first_line, self.max_len))
    }

    /// Write the username verbatim, replacing any previous profile
    pub fn save(&self, username: &Username) -> Result<()> {
        let write = || -> std::io::Result<()> {
            if let Some(parent) = self.path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)?;
                }
            }
            fs::write(&self.path, username.as_str())
        };

        write().map_err(|source| MoodError::ProfileWrite {
            path: self.path.clone(),
            source,
        })?;
        log::info!("saved profile to {}", self.path.display());
        Ok(())
    }
}

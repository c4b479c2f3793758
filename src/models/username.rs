use std::fmt;

/// Display name of the single local user, capped at a maximum length
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Username(String);

impl Username {
    /// Build a username from raw text, trimming surrounding whitespace and
    /// keeping at most `max_len` characters.
    pub fn new(raw: &str, max_len: usize) -> Self {
        Self(raw.trim().chars().take(max_len).collect())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

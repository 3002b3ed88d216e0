use std::{fmt, str::FromStr};

use thiserror::Error;

/// Returned when a handle is empty after trimming.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Handle cannot be empty")]
pub struct EmptyHandle;

/// A GitHub login as typed by the user, trimmed and guaranteed non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Handle(String);

impl Handle {
    /// The handle as typed, without surrounding whitespace.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Handle {
    type Err = EmptyHandle;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(EmptyHandle);
        }
        Ok(Self(trimmed.to_string()))
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

//! Sub-library name value object.
//!
//! # Design
//!
//! `LibName` is a pure value type — equality-by-value, no identity. A name
//! doubles as the sub-library's display name *and* its path segment, so the
//! constructor enforces path safety once and every other layer can treat
//! the name as trusted.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::domain::error::DomainError;

/// A validated sub-library identifier.
///
/// Invariants, enforced at construction:
/// - non-empty
/// - first character is a lowercase letter or digit
/// - remaining characters are `a-z`, `0-9`, `-`, `_` or `.`
/// - never contains a path separator or a `..` sequence
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct LibName(String);

impl LibName {
    /// Validate and wrap a raw name.
    pub fn new(raw: impl Into<String>) -> Result<Self, DomainError> {
        let raw = raw.into();

        if raw.is_empty() {
            return Err(Self::invalid(&raw, "name is empty"));
        }

        let mut chars = raw.chars();
        let first = chars.next().unwrap();
        if !first.is_ascii_lowercase() && !first.is_ascii_digit() {
            return Err(Self::invalid(
                &raw,
                "must start with a lowercase letter or digit",
            ));
        }

        if let Some(bad) = raw
            .chars()
            .find(|&c| !c.is_ascii_lowercase() && !c.is_ascii_digit() && !matches!(c, '-' | '_' | '.'))
        {
            return Err(Self::invalid(&raw, &format!("character '{bad}' not allowed")));
        }

        if raw.contains("..") {
            return Err(Self::invalid(&raw, "'..' sequences not allowed"));
        }

        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn invalid(name: &str, reason: &str) -> DomainError {
        DomainError::InvalidName {
            name: name.to_string(),
            reason: reason.to_string(),
        }
    }
}

impl fmt::Display for LibName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for LibName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for LibName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

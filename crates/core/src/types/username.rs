//! Public profile handle.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Username`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum UsernameError {
    /// Fewer than [`Username::MIN_LENGTH`] characters.
    #[error("username must be at least {min} characters")]
    TooShort {
        /// Minimum allowed length.
        min: usize,
    },
    /// More than [`Username::MAX_LENGTH`] characters.
    #[error("username must be at most {max} characters")]
    TooLong {
        /// Maximum allowed length.
        max: usize,
    },
    /// Contains a character outside `[a-z0-9_.]`.
    #[error("username may only contain lowercase letters, digits, '_' and '.'")]
    InvalidCharacter,
}

/// The handle that forms a public profile URL (`/<username>`).
///
/// Input is trimmed and lowercased before validation.
///
/// ```
/// use linkpage_core::Username;
///
/// assert_eq!(Username::parse(" Jane.Doe ").unwrap().as_str(), "jane.doe");
/// assert!(Username::parse("no spaces").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Username(String);

impl Username {
    /// Minimum handle length.
    pub const MIN_LENGTH: usize = 3;
    /// Maximum handle length.
    pub const MAX_LENGTH: usize = 30;

    /// Parse a `Username` from user input.
    ///
    /// # Errors
    ///
    /// Returns an error if the normalized handle is too short, too long, or
    /// contains characters outside `[a-z0-9_.]`.
    pub fn parse(s: &str) -> Result<Self, UsernameError> {
        let normalized = s.trim().to_lowercase();
        let len = normalized.chars().count();
        if len < Self::MIN_LENGTH {
            return Err(UsernameError::TooShort {
                min: Self::MIN_LENGTH,
            });
        }
        if len > Self::MAX_LENGTH {
            return Err(UsernameError::TooLong {
                max: Self::MAX_LENGTH,
            });
        }
        if !normalized
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '.')
        {
            return Err(UsernameError::InvalidCharacter);
        }
        Ok(Self(normalized))
    }

    /// Returns the handle as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `Username` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for Username {
    type Err = UsernameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_normalizes() {
        assert_eq!(Username::parse("  Jane_Doe ").unwrap().as_str(), "jane_doe");
    }

    #[test]
    fn test_parse_length_bounds() {
        assert_eq!(
            Username::parse("ab"),
            Err(UsernameError::TooShort { min: 3 })
        );
        assert_eq!(
            Username::parse(&"a".repeat(31)),
            Err(UsernameError::TooLong { max: 30 })
        );
        assert!(Username::parse(&"a".repeat(30)).is_ok());
    }

    #[test]
    fn test_parse_invalid_characters() {
        assert_eq!(
            Username::parse("jane-doe"),
            Err(UsernameError::InvalidCharacter)
        );
        assert_eq!(
            Username::parse("jané"),
            Err(UsernameError::InvalidCharacter)
        );
    }
}

//! Password ID and seed selection types
//!
//! The password ID names the credential entry gnu-pw-mgr derives from. It is
//! handed to the tool as one argv element and is never rendered by `Debug`
//! or `Display`, so it cannot leak into logs or error messages.

use crate::error::RetrievalError;
use std::fmt;
use std::str::FromStr;

/// A user-supplied password ID
#[derive(Clone, PartialEq, Eq)]
pub struct Identifier(String);

impl Identifier {
    /// Validate and wrap a password ID
    ///
    /// Surrounding whitespace is trimmed. Empty values and values containing
    /// a NUL byte or a line break are rejected.
    pub fn new(raw: &str) -> Result<Self, RetrievalError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(RetrievalError::EmptyIdentifier);
        }
        if trimmed.contains('\0') {
            return Err(RetrievalError::InvalidIdentifier("a NUL byte"));
        }
        if trimmed.contains(['\n', '\r']) {
            return Err(RetrievalError::InvalidIdentifier("a line break"));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// The raw value, for building the tool's argument vector only
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Identifier(<redacted>)")
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<redacted>")
    }
}

/// Which seed's password to use
///
/// `0` selects the most recent seed; `n` selects the n-th line (1-indexed)
/// of the tool's password listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct SeedSelector(u32);

impl SeedSelector {
    pub const MOST_RECENT: SeedSelector = SeedSelector(0);

    pub fn new(index: u32) -> Self {
        Self(index)
    }

    pub fn index(self) -> u32 {
        self.0
    }

    pub fn is_most_recent(self) -> bool {
        self.0 == 0
    }
}

impl From<u32> for SeedSelector {
    fn from(index: u32) -> Self {
        Self(index)
    }
}

impl FromStr for SeedSelector {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u32>().map(Self)
    }
}

impl fmt::Display for SeedSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_most_recent() {
            f.write_str("most recent")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifier_is_trimmed() {
        let id = Identifier::new("  example.com \n").unwrap();
        assert_eq!(id.expose(), "example.com");
    }

    #[test]
    fn identifier_rejects_blank() {
        assert!(matches!(
            Identifier::new("   "),
            Err(RetrievalError::EmptyIdentifier)
        ));
        assert!(matches!(
            Identifier::new(""),
            Err(RetrievalError::EmptyIdentifier)
        ));
    }

    #[test]
    fn identifier_rejects_embedded_newline_and_nul() {
        assert!(matches!(
            Identifier::new("a\nb"),
            Err(RetrievalError::InvalidIdentifier(_))
        ));
        assert!(matches!(
            Identifier::new("a\0b"),
            Err(RetrievalError::InvalidIdentifier(_))
        ));
    }

    #[test]
    fn identifier_keeps_shell_metacharacters() {
        let id = Identifier::new("site\"; rm -rf ~ #").unwrap();
        assert_eq!(id.expose(), "site\"; rm -rf ~ #");
    }

    #[test]
    fn identifier_is_redacted_in_debug_and_display() {
        let id = Identifier::new("bank.example.com").unwrap();
        assert!(!format!("{id:?}").contains("bank"));
        assert!(!format!("{id}").contains("bank"));
    }

    #[test]
    fn seed_selector_parsing() {
        assert_eq!("0".parse::<SeedSelector>().unwrap(), SeedSelector::MOST_RECENT);
        assert_eq!(" 3 ".parse::<SeedSelector>().unwrap().index(), 3);
        assert!("-1".parse::<SeedSelector>().is_err());
        assert!("two".parse::<SeedSelector>().is_err());
    }

    #[test]
    fn seed_selector_display() {
        assert_eq!(SeedSelector::MOST_RECENT.to_string(), "most recent");
        assert_eq!(SeedSelector::new(2).to_string(), "2");
    }
}

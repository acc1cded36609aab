//! Brightness-ordered character gradients.

use std::fmt;
use std::str::FromStr;

use crate::error::{AsciifyError, Result};

/// Built-in 58-level gradient, darkest (space) to brightest (@).
pub const DEFAULT_GRADIENT: &str =
    " `.-':_,^=;><+!rc*/z?sLTv)J731tl2EwqP6h9d4pOGUAKXg0MNWQ%&@";

/// An ordered, non-empty sequence of characters, index 0 darkest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gradient {
    chars: Vec<char>,
}

impl Gradient {
    /// Build a gradient from a string, one level per `char`.
    pub fn parse(s: &str) -> Result<Self> {
        let chars: Vec<char> = s.chars().collect();
        if chars.is_empty() {
            return Err(AsciifyError::EmptyGradient);
        }
        Ok(Self { chars })
    }

    /// Number of brightness levels.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Never true for a constructed gradient.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Character at `index`, clamped to the brightest level.
    #[inline]
    pub fn get(&self, index: usize) -> char {
        self.chars[index.min(self.chars.len() - 1)]
    }

    pub fn darkest(&self) -> char {
        self.chars[0]
    }

    pub fn brightest(&self) -> char {
        self.chars[self.chars.len() - 1]
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }
}

impl Default for Gradient {
    fn default() -> Self {
        Self {
            chars: DEFAULT_GRADIENT.chars().collect(),
        }
    }
}

impl FromStr for Gradient {
    type Err = AsciifyError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Gradient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.chars.iter().try_for_each(|c| write!(f, "{}", c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_58_levels() {
        let g = Gradient::default();
        assert_eq!(g.len(), 58);
        assert_eq!(g.darkest(), ' ');
        assert_eq!(g.brightest(), '@');
    }

    #[test]
    fn test_parse_empty_fails() {
        assert!(matches!(Gradient::parse(""), Err(AsciifyError::EmptyGradient)));
    }

    #[test]
    fn test_parse_counts_chars_not_bytes() {
        let g = Gradient::parse(" ░▒▓█").unwrap();
        assert_eq!(g.len(), 5);
        assert_eq!(g.brightest(), '█');
    }

    #[test]
    fn test_get_clamps() {
        let g = Gradient::parse("ab").unwrap();
        assert_eq!(g.get(0), 'a');
        assert_eq!(g.get(1), 'b');
        assert_eq!(g.get(99), 'b');
    }

    #[test]
    fn test_display_round_trips() {
        assert_eq!(Gradient::default().to_string(), DEFAULT_GRADIENT);
    }
}

//! PascalCase identifier derivation.
//!
//! A component's `name` (`custom-card`) is the directory name; the derived
//! [`Identifier`] (`CustomCard`) is what every generated artifact refers to.

use std::fmt;

use serde::Serialize;

use super::error::DomainError;

/// Character separating words in a component name.
pub const WORD_SEPARATOR: char = '-';

/// The capitalized, separator-stripped form of a component name.
///
/// Invariant: non-empty, ASCII alphanumeric or `_`, never starts with a digit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Identifier(String);

impl Identifier {
    /// Derive an identifier from a kebab-case name.
    ///
    /// Each `-`-delimited segment has its first letter uppercased and the
    /// segments are concatenated in order. Empty segments (`a--b`, `-a`)
    /// contribute nothing.
    ///
    /// # Errors
    ///
    /// [`DomainError::InvalidIdentifier`] when the name is empty, consists
    /// only of separators, contains characters other than ASCII
    /// alphanumerics, `_` and `-`, or would produce an identifier starting
    /// with a digit.
    pub fn derive(name: &str) -> Result<Self, DomainError> {
        let invalid = |reason: &str| DomainError::InvalidIdentifier {
            name: name.to_owned(),
            reason: reason.to_owned(),
        };

        if name.is_empty() {
            return Err(invalid("name is empty"));
        }

        let mut derived = String::with_capacity(name.len());
        for segment in name.split(WORD_SEPARATOR) {
            if let Some(bad) = segment
                .chars()
                .find(|c| !(c.is_ascii_alphanumeric() || *c == '_'))
            {
                return Err(invalid(&format!("unexpected character '{bad}'")));
            }

            let mut chars = segment.chars();
            if let Some(first) = chars.next() {
                derived.push(first.to_ascii_uppercase());
                derived.push_str(chars.as_str());
            }
        }

        if derived.is_empty() {
            return Err(invalid("name contains only separators"));
        }
        if derived.starts_with(|c: char| c.is_ascii_digit()) {
            return Err(invalid("identifier cannot start with a digit"));
        }

        Ok(Self(derived))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Name of the generated props interface, e.g. `CustomCardProps`.
    pub fn props_type(&self) -> String {
        format!("{}Props", self.0)
    }

    /// Name of the exported story, e.g. `CustomCardStory`.
    pub fn story_name(&self) -> String {
        format!("{}Story", self.0)
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn derive(name: &str) -> String {
        Identifier::derive(name).unwrap().to_string()
    }

    #[test]
    fn kebab_case_becomes_pascal_case() {
        assert_eq!(derive("custom-card"), "CustomCard");
        assert_eq!(derive("a-b-c"), "ABC");
        assert_eq!(derive("nav-bar-item-link"), "NavBarItemLink");
    }

    #[test]
    fn single_segment_is_capitalized() {
        assert_eq!(derive("button"), "Button");
        assert_eq!(derive("Button"), "Button");
    }

    #[test]
    fn rest_of_segment_is_preserved() {
        assert_eq!(derive("my-HTML-block"), "MyHTMLBlock");
        assert_eq!(derive("user_profile-card"), "User_profileCard");
    }

    #[test]
    fn no_separator_remains() {
        for name in ["a-b", "x--y", "-lead", "trail-", "one-two-three"] {
            let id = derive(name);
            assert!(!id.contains(WORD_SEPARATOR), "{name} -> {id}");
        }
    }

    #[test]
    fn empty_segments_are_skipped() {
        assert_eq!(derive("x--y"), "XY");
        assert_eq!(derive("-card-"), "Card");
    }

    #[test]
    fn digits_allowed_after_first_position() {
        assert_eq!(derive("card-2"), "Card2");
        assert_eq!(derive("h1-title"), "H1Title");
    }

    #[test]
    fn empty_name_is_rejected() {
        let err = Identifier::derive("").unwrap_err();
        assert!(matches!(err, DomainError::InvalidIdentifier { .. }));
    }

    #[test]
    fn separator_only_name_is_rejected() {
        assert!(Identifier::derive("-").is_err());
        assert!(Identifier::derive("---").is_err());
    }

    #[test]
    fn leading_digit_is_rejected() {
        assert!(Identifier::derive("2-column").is_err());
    }

    #[test]
    fn path_like_names_are_rejected() {
        assert!(Identifier::derive("../card").is_err());
        assert!(Identifier::derive("a/b").is_err());
        assert!(Identifier::derive("my card").is_err());
        assert!(Identifier::derive("card.tsx").is_err());
    }

    #[test]
    fn derived_names() {
        let id = Identifier::derive("custom-card").unwrap();
        assert_eq!(id.props_type(), "CustomCardProps");
        assert_eq!(id.story_name(), "CustomCardStory");
    }
}

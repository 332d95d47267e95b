//! Class-name composition for styled primitives.
//!
//! # Design
//! - Fragments may hold several whitespace-separated tokens.
//! - A token is emitted once, at its first position; later duplicates are dropped.
//! - Empty and disabled fragments contribute nothing.

use std::fmt;

/// Ordered, de-duplicated list of CSS class tokens.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClassList {
    tokens: Vec<String>,
}

impl ClassList {
    /// Create an empty class list.
    #[must_use]
    pub const fn new() -> Self {
        Self { tokens: Vec::new() }
    }

    /// Append every token of `fragment`.
    #[must_use]
    pub fn with(mut self, fragment: &str) -> Self {
        self.push(fragment);
        self
    }

    /// Append every token of `fragment` only when `enabled` holds.
    #[must_use]
    pub fn with_if(mut self, enabled: bool, fragment: &str) -> Self {
        if enabled {
            self.push(fragment);
        }
        self
    }

    /// Append an optional fragment.
    #[must_use]
    pub fn with_opt(mut self, fragment: Option<&str>) -> Self {
        if let Some(fragment) = fragment {
            self.push(fragment);
        }
        self
    }

    /// Append every token of `fragment` in place.
    pub fn push(&mut self, fragment: &str) {
        for token in fragment.split_whitespace() {
            if !self.tokens.iter().any(|existing| existing == token) {
                self.tokens.push(token.to_string());
            }
        }
    }

    /// Whether `token` is present.
    #[must_use]
    pub fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|existing| existing == token)
    }

    /// Iterate over the tokens in emission order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    /// Number of distinct tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether no tokens were collected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tokens.join(" "))
    }
}

impl From<ClassList> for String {
    fn from(value: ClassList) -> Self {
        value.to_string()
    }
}

/// Merge optional fragments into a single class string.
#[must_use]
pub fn compose<'a>(fragments: impl IntoIterator<Item = Option<&'a str>>) -> String {
    fragments
        .into_iter()
        .fold(ClassList::new(), ClassList::with_opt)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::{ClassList, compose};

    #[test]
    fn compose_skips_disabled_fragments() {
        let merged = compose([Some("flex h-10"), None, Some("w-full"), Some("")]);
        assert_eq!(merged, "flex h-10 w-full");
    }

    #[test]
    fn duplicate_tokens_keep_first_position() {
        let list = ClassList::new()
            .with("rounded-md px-3")
            .with("h-9 rounded-md")
            .with("  px-3   text-sm ");
        assert_eq!(list.to_string(), "rounded-md px-3 h-9 text-sm");
        assert_eq!(list.len(), 4);
    }

    #[test]
    fn conditional_fragments_follow_flags() {
        let open = ClassList::new().with("border").with_if(true, "ring-2");
        let closed = ClassList::new().with("border").with_if(false, "ring-2");
        assert!(open.contains("ring-2"));
        assert!(!closed.contains("ring-2"));
        assert!(ClassList::new().is_empty());
    }
}

//! Selector matching
//!
//! Simple selectors only: tag, `.class`, `#id`, `*`. Widgets identify their
//! pages and buttons with these; combinators are out of scope.

use crate::ElementData;

/// Simple selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    Tag(String),
    Class(String),
    Id(String),
    Universal,
}

impl Selector {
    /// Parse a simple selector string
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.is_empty() {
            return None;
        }

        if s == "*" {
            Some(Self::Universal)
        } else if let Some(id) = s.strip_prefix('#') {
            Some(Self::Id(id.to_string()))
        } else if let Some(class) = s.strip_prefix('.') {
            Some(Self::Class(class.to_string()))
        } else {
            Some(Self::Tag(s.to_ascii_lowercase()))
        }
    }

    /// Check whether an element matches this selector
    pub fn matches(&self, element: &ElementData) -> bool {
        match self {
            Self::Universal => true,
            Self::Tag(tag) => element.tag.eq_ignore_ascii_case(tag),
            Self::Class(class) => element.classes.has(class),
            Self::Id(id) => element.attr("id") == Some(id),
        }
    }
}

//! Locale-aware name ordering for the final alphabetical tie-break.
//!
//! Three levels, in the usual collation sense:
//! 1. base letters (case and accents folded), so "Élysée" sorts with "Elysee"
//!    rather than after "Z";
//! 2. accents, unaccented first;
//! 3. case, lowercase first.
//!
//! Strings equal on all three levels fall back to code-point order so the
//! comparison stays a total order.

use std::cmp::Ordering;

use crate::normalize::{fold, strip_marks};

pub fn collate(a: &str, b: &str) -> Ordering {
    fold(a)
        .cmp(&fold(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| case_level(a, b))
        .then_with(|| a.cmp(b))
}

fn case_level(a: &str, b: &str) -> Ordering {
    let a = strip_marks(a);
    let b = strip_marks(b);
    for (x, y) in a.chars().zip(b.chars()) {
        match (x.is_uppercase(), y.is_uppercase()) {
            (false, true) => return Ordering::Less,
            (true, false) => return Ordering::Greater,
            _ => {}
        }
    }
    Ordering::Equal
}

/// Sort key form of [`collate`], for callers that sort many names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollationKey {
    primary: String,
    secondary: String,
    original: String,
}

impl CollationKey {
    pub fn new(text: &str) -> Self {
        Self {
            primary: fold(text),
            secondary: text.to_lowercase(),
            original: text.to_string(),
        }
    }
}

impl Ord for CollationKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.primary
            .cmp(&other.primary)
            .then_with(|| self.secondary.cmp(&other.secondary))
            .then_with(|| case_level(&self.original, &other.original))
            .then_with(|| self.original.cmp(&other.original))
    }
}

impl PartialOrd for CollationKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

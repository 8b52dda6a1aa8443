//! # Recording Reporter
//!
//! [`Transcript`] implements [`Reporter`] by storing every call in memory instead of
//! printing it. Tests hand one to the showcase (or straight to a creator) and then
//! assert on exactly what was reported, in order.
//!
//! It lives in the library rather than behind `#[cfg(test)]` so integration tests under
//! `tests/` can use it too.
//!
//! ```rust
//! use creational_recipe::boundary::{Entry, Transcript};
//! use creational_recipe::factory_method::{BeefRestaurant, Restaurant};
//!
//! let mut transcript = Transcript::new();
//! BeefRestaurant.order_hamburger(&mut transcript);
//!
//! assert_eq!(transcript.lines(), vec!["Preparing BEEF hamburger"]);
//! assert!(matches!(transcript.entries()[0], Entry::Line { .. }));
//! ```

use super::reporter::{Reporter, Tone};
use crate::builder::Phone;

/// One recorded reporter call.
#[derive(Debug, Clone, PartialEq)]
pub enum Entry {
    Heading { title: String, tone: Tone },
    Phone(Phone),
    Line { text: String, tone: Tone },
}

/// In-memory [`Reporter`] used as a test double.
#[derive(Debug, Default)]
pub struct Transcript {
    entries: Vec<Entry>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Text of every `line` call, in order.
    pub fn lines(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter_map(|entry| match entry {
                Entry::Line { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Titles of every `heading` call, in order.
    pub fn headings(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter_map(|entry| match entry {
                Entry::Heading { title, .. } => Some(title.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Every phone that was reported, in order.
    pub fn phones(&self) -> Vec<&Phone> {
        self.entries
            .iter()
            .filter_map(|entry| match entry {
                Entry::Phone(phone) => Some(phone),
                _ => None,
            })
            .collect()
    }
}

impl Reporter for Transcript {
    fn heading(&mut self, title: &str, tone: Tone) {
        self.entries.push(Entry::Heading {
            title: title.to_string(),
            tone,
        });
    }

    fn phone(&mut self, phone: &Phone) {
        self.entries.push(Entry::Phone(phone.clone()));
    }

    fn line(&mut self, text: &str, tone: Tone) {
        self.entries.push(Entry::Line {
            text: text.to_string(),
            tone,
        });
    }
}

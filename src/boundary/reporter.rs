//! # Reporter
//!
//! Renders headings, finished phones and variant output as text. The core only ever
//! writes to a reporter. It never reads one back to make a decision.

use crate::builder::Phone;
use console::{style, StyledObject};

/// Color hint attached to a heading or line.
///
/// Reporters are free to ignore it; [`Transcript`](super::Transcript) keeps it
/// so tests can assert on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Plain,
    Red,
    Green,
    Yellow,
    Pink,
    Orange,
    Blue,
}

/// Output sink for everything the showcase produces.
pub trait Reporter {
    /// A section title, e.g. "Basic Phone".
    fn heading(&mut self, title: &str, tone: Tone);

    /// A fully built phone.
    fn phone(&mut self, phone: &Phone);

    /// A single line emitted by a product variant.
    fn line(&mut self, text: &str, tone: Tone);
}

/// Prints to stdout with terminal colors.
///
/// Styling is dropped automatically when stdout is not a terminal or `NO_COLOR` is
/// set; [`ConsoleReporter::plain`] forces it off.
#[derive(Debug, Default)]
pub struct ConsoleReporter {
    plain: bool,
}

impl ConsoleReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// A reporter that never emits color codes.
    pub fn plain() -> Self {
        Self { plain: true }
    }

    fn paint<'a>(&self, text: &'a str, tone: Tone) -> StyledObject<&'a str> {
        let styled = style(text);
        if self.plain {
            return styled.force_styling(false);
        }
        match tone {
            Tone::Plain => styled,
            Tone::Red => styled.red().bold(),
            Tone::Green => styled.green().bold(),
            Tone::Yellow => styled.yellow(),
            Tone::Pink => styled.color256(213),
            Tone::Orange => styled.color256(208),
            Tone::Blue => styled.blue(),
        }
    }
}

impl Reporter for ConsoleReporter {
    fn heading(&mut self, title: &str, tone: Tone) {
        println!("{}", self.paint(title, tone));
    }

    fn phone(&mut self, phone: &Phone) {
        println!("{phone}");
    }

    fn line(&mut self, text: &str, tone: Tone) {
        println!("{}", self.paint(text, tone));
    }
}

//! # User Choice Providers
//!
//! Where selection keys come from. The core asks for a key once per construction
//! sequence; what it does with a missing key is the caller's business (the selectors
//! reject it).

use dialoguer::Input;
use std::io::BufRead;
use tracing::{debug, warn};

/// Source of a single selection key.
pub trait UserChoiceProvider {
    /// Ask for a key. `None` means nothing usable was provided.
    fn choose(&mut self, prompt: &str) -> Option<String>;
}

/// Asks the person at the terminal.
///
/// Uses an interactive `dialoguer` prompt when someone is attending the terminal, and
/// falls back to reading one line from stdin otherwise (pipes, CI).
#[derive(Debug, Default)]
pub struct PromptChoice;

impl UserChoiceProvider for PromptChoice {
    fn choose(&mut self, prompt: &str) -> Option<String> {
        let answer = if console::user_attended() {
            Input::<String>::new()
                .with_prompt(prompt)
                .allow_empty(true)
                .interact_text()
                .map_err(|e| warn!(error = %e, "Prompt failed"))
                .ok()
        } else {
            let mut line = String::new();
            match std::io::stdin().lock().read_line(&mut line) {
                Ok(0) => None,
                Ok(_) => Some(line),
                Err(e) => {
                    warn!(error = %e, "Reading stdin failed");
                    None
                }
            }
        };

        let answer = answer
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        debug!(?answer, "Choice received");
        answer
    }
}

/// Hands out a preset key, once.
///
/// Used for `--kind`/`--family` flags and as scripted input in tests. A second call
/// returns `None`.
#[derive(Debug, Clone, Default)]
pub struct FixedChoice {
    key: Option<String>,
}

impl FixedChoice {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
        }
    }

    /// A provider with nothing to give.
    pub fn none() -> Self {
        Self { key: None }
    }
}

impl UserChoiceProvider for FixedChoice {
    fn choose(&mut self, _prompt: &str) -> Option<String> {
        self.key.take()
    }
}

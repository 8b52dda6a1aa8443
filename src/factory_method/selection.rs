//! Turning a selection key into a creator.
//!
//! The set of keys is closed. [`BurgerKind`] parsing is the only step that can fail.
//! Once a kind exists, [`BurgerKind::restaurant`] is an exhaustive `match`, so adding
//! a variant without a creator does not compile.

use super::restaurant::{BeanRestaurant, BeefRestaurant, ChickenRestaurant, Restaurant};
use crate::boundary::UserChoiceProvider;
use crate::error::SelectionError;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::str::FromStr;
use tracing::{info, warn};

/// Prompt shown when asking for a hamburger.
pub const PROMPT: &str = "Which hamburger do you want (chicken/beef/bean)?";

/// The hamburger variants a restaurant can be bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BurgerKind {
    Chicken,
    Beef,
    Bean,
}

impl BurgerKind {
    pub const ALL: [BurgerKind; 3] = [BurgerKind::Chicken, BurgerKind::Beef, BurgerKind::Bean];

    /// Every accepted selection key, in menu order.
    pub const KEYS: &'static [&'static str] = &["chicken", "beef", "bean"];

    pub fn key(self) -> &'static str {
        match self {
            BurgerKind::Chicken => "chicken",
            BurgerKind::Beef => "beef",
            BurgerKind::Bean => "bean",
        }
    }

    /// Upper-case name used in kitchen output, e.g. `BEEF`.
    pub fn shout(self) -> String {
        self.key().to_uppercase()
    }

    /// The creator bound to this kind.
    pub fn restaurant(self) -> Box<dyn Restaurant> {
        match self {
            BurgerKind::Chicken => Box::new(ChickenRestaurant),
            BurgerKind::Beef => Box::new(BeefRestaurant),
            BurgerKind::Bean => Box::new(BeanRestaurant),
        }
    }
}

impl Display for BurgerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for BurgerKind {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        BurgerKind::ALL
            .into_iter()
            .find(|kind| kind.key() == key)
            .ok_or_else(|| SelectionError::unknown(Some(s), BurgerKind::KEYS))
    }
}

/// Picks the restaurant for `key`.
///
/// A missing or unknown key is an error. Nothing is constructed in that case.
pub fn select_restaurant(key: Option<&str>) -> Result<Box<dyn Restaurant>, SelectionError> {
    let Some(key) = key else {
        warn!("No hamburger selected");
        return Err(SelectionError::unknown(None, BurgerKind::KEYS));
    };
    let kind = key.parse::<BurgerKind>().inspect_err(|e| {
        warn!(error = %e, "Unknown hamburger");
    })?;
    info!(%kind, "Restaurant selected");
    Ok(kind.restaurant())
}

/// Asks `provider` for a key, then picks the restaurant for it.
pub fn choose_restaurant(
    provider: &mut dyn UserChoiceProvider,
) -> Result<Box<dyn Restaurant>, SelectionError> {
    let key = provider.choose(PROMPT);
    select_restaurant(key.as_deref())
}

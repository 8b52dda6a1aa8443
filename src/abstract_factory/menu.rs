//! Runtime selection of a family.
//!
//! [`RestaurantFactory`] has associated types, so it cannot be boxed directly. [`Menu`]
//! is its object-safe face: every factory is a menu, and a key picks which one.

use super::factory::{
    serve_menu, FastFoodRestaurantFactory, HealthyFoodRestaurantFactory, RestaurantFactory,
};
use super::family::{Family, FamilyMarker};
use crate::boundary::{Reporter, UserChoiceProvider};
use crate::error::SelectionError;
use tracing::{info, warn};

/// Prompt shown when asking for a family.
pub const PROMPT: &str = "Which menu do you want (fast-food/healthy)?";

/// A factory whose concrete type has been erased.
pub trait Menu: Send + Sync {
    fn family(&self) -> Family;

    /// Runs [`serve_menu`] with the underlying factory.
    fn serve(&self, reporter: &mut dyn Reporter);
}

impl<F: RestaurantFactory> Menu for F {
    fn family(&self) -> Family {
        <F::Family as FamilyMarker>::FAMILY
    }

    fn serve(&self, reporter: &mut dyn Reporter) {
        serve_menu(self, reporter);
    }
}

impl Family {
    /// The factory for this family.
    pub fn menu(self) -> Box<dyn Menu> {
        match self {
            Family::FastFood => Box::new(FastFoodRestaurantFactory),
            Family::Healthy => Box::new(HealthyFoodRestaurantFactory),
        }
    }
}

/// Picks the factory for `key`.
///
/// A missing or unknown key is an error. Nothing is constructed in that case.
pub fn select_menu(key: Option<&str>) -> Result<Box<dyn Menu>, SelectionError> {
    let Some(key) = key else {
        warn!("No menu selected");
        return Err(SelectionError::unknown(None, Family::KEYS));
    };
    let family = key.parse::<Family>().inspect_err(|e| {
        warn!(error = %e, "Unknown menu");
    })?;
    info!(%family, "Menu selected");
    Ok(family.menu())
}

/// Asks `provider` for a key, then picks the factory for it.
pub fn choose_menu(provider: &mut dyn UserChoiceProvider) -> Result<Box<dyn Menu>, SelectionError> {
    let key = provider.choose(PROMPT);
    select_menu(key.as_deref())
}

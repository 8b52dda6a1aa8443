//! Creators: one restaurant per hamburger variant.

use super::hamburger::{BeanHamburger, BeefHamburger, ChickenHamburger, Hamburger};
use crate::boundary::Reporter;
use tracing::{debug, info};

/// Runs the fixed ordering algorithm against any creation step.
///
/// This is the whole of [`Restaurant::order_hamburger`], pulled out so it can also be
/// driven by a plain closure instead of a trait impl:
///
/// ```rust
/// use creational_recipe::boundary::Transcript;
/// use creational_recipe::factory_method::{order_with, BeanHamburger};
///
/// let mut transcript = Transcript::new();
/// order_with(|| Box::new(BeanHamburger), &mut transcript);
/// assert_eq!(transcript.lines(), vec!["Preparing BEAN hamburger"]);
/// ```
pub fn order_with<H, F>(create: F, reporter: &mut dyn Reporter)
where
    H: Hamburger + ?Sized,
    F: FnOnce() -> Box<H>,
{
    let hamburger = create();
    info!(kind = %hamburger.kind(), "Order placed");
    hamburger.prepare(reporter);
}

/// A creator bound to exactly one hamburger variant.
///
/// Implementors supply [`create_hamburger`](Self::create_hamburger) and nothing else.
/// Clients only call [`order_hamburger`](Self::order_hamburger), usually through a
/// `Box<dyn Restaurant>` whose concrete type they never see.
pub trait Restaurant: Send + Sync {
    /// The creation step. Each call returns a fresh variant.
    fn create_hamburger(&self) -> Box<dyn Hamburger>;

    /// Creates a hamburger and prepares it.
    fn order_hamburger(&self, reporter: &mut dyn Reporter) {
        order_with(|| self.create_hamburger(), reporter);
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ChickenRestaurant;

impl Restaurant for ChickenRestaurant {
    fn create_hamburger(&self) -> Box<dyn Hamburger> {
        debug!("Creating chicken hamburger");
        Box::new(ChickenHamburger)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BeefRestaurant;

impl Restaurant for BeefRestaurant {
    fn create_hamburger(&self) -> Box<dyn Hamburger> {
        debug!("Creating beef hamburger");
        Box::new(BeefHamburger)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BeanRestaurant;

impl Restaurant for BeanRestaurant {
    fn create_hamburger(&self) -> Box<dyn Hamburger> {
        debug!("Creating bean hamburger");
        Box::new(BeanHamburger)
    }
}

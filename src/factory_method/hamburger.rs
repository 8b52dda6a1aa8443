//! Hamburger variants produced by the factory method creators.

use super::selection::BurgerKind;
use crate::boundary::{Reporter, Tone};

/// The capability every hamburger variant provides.
pub trait Hamburger: Send + Sync {
    /// Which variant this is.
    fn kind(&self) -> BurgerKind;

    /// Reports that the hamburger is being prepared.
    fn prepare(&self, reporter: &mut dyn Reporter) {
        reporter.line(
            &format!("Preparing {} hamburger", self.kind().shout()),
            Tone::Plain,
        );
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChickenHamburger;

impl Hamburger for ChickenHamburger {
    fn kind(&self) -> BurgerKind {
        BurgerKind::Chicken
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BeefHamburger;

impl Hamburger for BeefHamburger {
    fn kind(&self) -> BurgerKind {
        BurgerKind::Beef
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BeanHamburger;

impl Hamburger for BeanHamburger {
    fn kind(&self) -> BurgerKind {
        BurgerKind::Bean
    }
}

//! Menu items: one hamburger and one drink per family.

use super::family::{FastFood, Family, FamilyMarker, Healthy};
use crate::boundary::{Reporter, Tone};

/// Main item of a menu.
pub trait Hamburger: Send + Sync {
    type Family: FamilyMarker;

    fn prepare(&self, reporter: &mut dyn Reporter);

    /// Runtime tag of [`Self::Family`].
    fn family(&self) -> Family {
        <Self::Family as FamilyMarker>::FAMILY
    }
}

/// Side item of a menu.
pub trait Drink: Send + Sync {
    type Family: FamilyMarker;

    fn pour(&self, reporter: &mut dyn Reporter);

    /// Runtime tag of [`Self::Family`].
    fn family(&self) -> Family {
        <Self::Family as FamilyMarker>::FAMILY
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TropicalHamburger;

impl Hamburger for TropicalHamburger {
    type Family = FastFood;

    fn prepare(&self, reporter: &mut dyn Reporter) {
        reporter.line("Preparing tropical hamburger", Tone::Yellow);
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VeganHamburger;

impl Hamburger for VeganHamburger {
    type Family = Healthy;

    fn prepare(&self, reporter: &mut dyn Reporter) {
        reporter.line("Preparing vegan hamburger", Tone::Pink);
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JuiceDrink;

impl Drink for JuiceDrink {
    type Family = FastFood;

    fn pour(&self, reporter: &mut dyn Reporter) {
        reporter.line("Preparing juice drink", Tone::Orange);
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WaterDrink;

impl Drink for WaterDrink {
    type Family = Healthy;

    fn pour(&self, reporter: &mut dyn Reporter) {
        reporter.line("Preparing water drink", Tone::Blue);
    }
}

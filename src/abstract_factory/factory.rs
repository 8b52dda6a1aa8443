//! Factories that produce a whole menu family.

use super::family::{FastFood, Family, FamilyMarker, Healthy};
use super::items::{Drink, Hamburger, JuiceDrink, TropicalHamburger, VeganHamburger, WaterDrink};
use crate::boundary::Reporter;
use tracing::{debug, info};

/// Produces one item per menu role, all from the same family.
///
/// The associated type bounds are what keep families apart. A factory that tried to
/// pair a `VeganHamburger` with a `JuiceDrink` would need
/// `Healthy == FastFood` and is rejected by the compiler:
///
/// ```rust,compile_fail
/// use creational_recipe::abstract_factory::*;
///
/// struct Confused;
///
/// impl RestaurantFactory for Confused {
///     type Family = Healthy;
///     type Hamburger = VeganHamburger;
///     type Drink = JuiceDrink;
///
///     fn create_hamburger(&self) -> VeganHamburger { VeganHamburger }
///     fn create_drink(&self) -> JuiceDrink { JuiceDrink }
/// }
/// ```
pub trait RestaurantFactory: Send + Sync {
    type Family: FamilyMarker;
    type Hamburger: Hamburger<Family = Self::Family>;
    type Drink: Drink<Family = Self::Family>;

    fn create_hamburger(&self) -> Self::Hamburger;

    fn create_drink(&self) -> Self::Drink;
}

/// Tropical hamburger with a juice.
#[derive(Debug, Clone, Copy, Default)]
pub struct FastFoodRestaurantFactory;

impl RestaurantFactory for FastFoodRestaurantFactory {
    type Family = FastFood;
    type Hamburger = TropicalHamburger;
    type Drink = JuiceDrink;

    fn create_hamburger(&self) -> TropicalHamburger {
        TropicalHamburger
    }

    fn create_drink(&self) -> JuiceDrink {
        JuiceDrink
    }
}

/// Vegan hamburger with water.
#[derive(Debug, Clone, Copy, Default)]
pub struct HealthyFoodRestaurantFactory;

impl RestaurantFactory for HealthyFoodRestaurantFactory {
    type Family = Healthy;
    type Hamburger = VeganHamburger;
    type Drink = WaterDrink;

    fn create_hamburger(&self) -> VeganHamburger {
        VeganHamburger
    }

    fn create_drink(&self) -> WaterDrink {
        WaterDrink
    }
}

/// Client orchestration, written once for every family: prepare the main item, then
/// pour the side item.
pub fn serve_menu<F: RestaurantFactory + ?Sized>(factory: &F, reporter: &mut dyn Reporter) {
    let family: Family = <F::Family as FamilyMarker>::FAMILY;
    let hamburger = factory.create_hamburger();
    let drink = factory.create_drink();
    debug!(%family, "Menu items created");

    hamburger.prepare(reporter);
    drink.pour(reporter);
    info!(%family, "Menu served");
}

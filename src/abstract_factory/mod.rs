//! # Abstract Factory
//!
//! A [`RestaurantFactory`] makes a whole menu: a [`Hamburger`] and a [`Drink`] that
//! belong together. Client code ([`serve_menu`]) is generic over the factory and never
//! names a concrete item.
//!
//! ## Families
//!
//! | Family | Factory | Hamburger | Drink |
//! |--------|---------|-----------|-------|
//! | `fast-food` | [`FastFoodRestaurantFactory`] | [`TropicalHamburger`] | [`JuiceDrink`] |
//! | `healthy` | [`HealthyFoodRestaurantFactory`] | [`VeganHamburger`] | [`WaterDrink`] |
//!
//! ## Keeping families apart
//!
//! Every item names its family as an associated type ([`FamilyMarker`]), and a
//! factory's item types must share the factory's family. A mixed menu is a type
//! error, so there is no runtime check and no code path that could need one. The
//! [`Family`] tag is only there for reporting and tests.
//!
//! ## Usage
//!
//! ```rust
//! use creational_recipe::abstract_factory::{serve_menu, HealthyFoodRestaurantFactory};
//! use creational_recipe::boundary::Transcript;
//!
//! let mut transcript = Transcript::new();
//! serve_menu(&HealthyFoodRestaurantFactory, &mut transcript);
//!
//! assert_eq!(
//!     transcript.lines(),
//!     vec!["Preparing vegan hamburger", "Preparing water drink"]
//! );
//! ```

pub mod factory;
pub mod family;
pub mod items;
pub mod menu;

pub use factory::*;
pub use family::*;
pub use items::*;
pub use menu::*;

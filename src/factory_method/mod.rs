//! # Factory Method
//!
//! Each [`Restaurant`] knows how to make exactly one kind of [`Hamburger`]. The ordering
//! algorithm ([`Restaurant::order_hamburger`]) is written once. A creator only
//! overrides the creation step it calls.
//!
//! ## Structure
//!
//! - [`hamburger`] - the [`Hamburger`] capability and its three variants
//! - [`restaurant`] - the [`Restaurant`] creators and [`order_with`]
//! - [`selection`] - [`BurgerKind`] and the key-to-creator mapping
//!
//! ## Usage
//!
//! ```rust
//! use creational_recipe::boundary::Transcript;
//! use creational_recipe::error::SelectionError;
//! use creational_recipe::factory_method::select_restaurant;
//!
//! let mut transcript = Transcript::new();
//! let restaurant = select_restaurant(Some("beef"))?;
//! restaurant.order_hamburger(&mut transcript);
//! assert_eq!(transcript.lines(), vec!["Preparing BEEF hamburger"]);
//!
//! assert!(matches!(
//!     select_restaurant(Some("tofu")),
//!     Err(SelectionError::UnknownSelection { .. })
//! ));
//! # Ok::<(), SelectionError>(())
//! ```

pub mod hamburger;
pub mod restaurant;
pub mod selection;

pub use hamburger::*;
pub use restaurant::*;
pub use selection::*;

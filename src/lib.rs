#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # Creational Recipe
//!
//! > **Three ways to let client code create objects without naming their concrete types.**
//!
//! ## 🏗️ Design Philosophy
//!
//! Every strategy here moves the decision about *which* concrete type to build away
//! from the code that *uses* the result:
//!
//! - **Staged Builder** ([`builder`]): configuration is accumulated step by step, and the
//!   finished product only exists after `build()`.
//! - **Factory Method** ([`factory_method`]): one ordering algorithm, many creators, each
//!   bound to a single product variant.
//! - **Abstract Factory** ([`abstract_factory`]): one factory per *family* of products,
//!   so items from different families can never end up on the same menu.
//!
//! ## 🚀 Core Concepts
//!
//! ### Selection is the only thing that fails
//! Setters accept any text and creation steps always succeed. The single error,
//! [`SelectionError::UnknownSelection`](error::SelectionError::UnknownSelection), comes from turning an
//! external key into a creator or factory. It is raised before anything is constructed.
//!
//! ### Closed sets, exhaustive matches
//! Keys parse into enums ([`BurgerKind`](factory_method::BurgerKind), [`Family`](abstract_factory::Family)).
//! Mapping an enum to its creator is a `match`, so a missing arm is a compile error.
//!
//! ### The type system keeps families apart
//! Abstract factory items carry their family as an associated type. A factory whose
//! hamburger and drink disagree on family does not compile.
//!
//! ## 🗺️ Module Tour
//!
//! - [`builder`] - [`PhoneBuilder`](builder::PhoneBuilder) and the [`Phone`](builder::Phone) it produces
//! - [`factory_method`] - [`Restaurant`](factory_method::Restaurant) creators and hamburger variants
//! - [`abstract_factory`] - [`RestaurantFactory`](abstract_factory::RestaurantFactory) families
//! - [`boundary`] - the external collaborators: choice providers and reporters
//! - [`lifecycle`] - [`Showcase`](lifecycle::Showcase) orchestration and tracing setup
//! - [`error`] - [`SelectionError`](error::SelectionError)
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Prompt for a hamburger and prepare it
//! cargo run
//!
//! # Each demonstration on its own
//! cargo run -- builder
//! cargo run -- factory-method --kind beef
//! RUST_LOG=debug cargo run -- abstract-factory --family healthy
//! ```
//!
//! ### Running Tests
//!
//! ```bash
//! cargo test
//! ```

pub mod abstract_factory;
pub mod boundary;
pub mod builder;
pub mod error;
pub mod factory_method;
pub mod lifecycle;

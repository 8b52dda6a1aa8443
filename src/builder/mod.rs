//! # Staged Builder
//!
//! Builds a [`Phone`] through a fluent chain of setters that ends in
//! [`PhoneBuilder::build`].
//!
//! The builder keeps the *sequence* of configuration steps apart from the *shape* of
//! the finished object. The basic and the advanced phone come out of the same code
//! path. Only the arguments differ.
//!
//! ```rust
//! use creational_recipe::builder::PhoneBuilder;
//!
//! let basic = PhoneBuilder::basic().build();
//! let custom = PhoneBuilder::new().set_storage("1 TB").set_cpu("Snapdragon").build();
//!
//! assert_eq!(basic.cpu(), Some("Mediatek"));
//! assert_eq!(custom.storage(), Some("1 TB"));
//! assert_eq!(custom.ram(), None);
//! ```

pub mod phone;
pub mod phone_builder;

pub use phone::*;
pub use phone_builder::*;

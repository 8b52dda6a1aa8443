//! # Showcase Lifecycle & Orchestration
//!
//! Wires the external collaborators to the construction strategies and runs them.
//!
//! The strategies themselves are small and know nothing about terminals. This module
//! is where a [`UserChoiceProvider`](crate::boundary::UserChoiceProvider) and a
//! [`Reporter`](crate::boundary::Reporter) meet the builder, the creators and the
//! factories.
//!
//! - [`Showcase`] - runs the builder, factory method and abstract factory demonstrations
//! - [`setup_tracing`] - initializes logging for the binary
//!
//! ## Wiring
//!
//! ```rust,ignore
//! setup_tracing(true);
//!
//! let mut showcase = Showcase::new(ConsoleReporter::new());
//! showcase.build_phones();
//! showcase.order_hamburger(&mut PromptChoice)?;
//! showcase.serve_menus(None)?;
//! ```
//!
//! Tests swap in a [`Transcript`](crate::boundary::Transcript) and a
//! [`FixedChoice`](crate::boundary::FixedChoice) and assert on what was recorded.

pub mod showcase;
pub mod tracing;

pub use self::showcase::*;
pub use self::tracing::*;

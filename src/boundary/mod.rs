//! # External Boundary
//!
//! The two collaborators the construction strategies talk to:
//!
//! - [`UserChoiceProvider`] - where a selection key comes from ([`PromptChoice`], [`FixedChoice`]).
//! - [`Reporter`] - where results are rendered ([`ConsoleReporter`], [`Transcript`]).
//!
//! Neither one influences which product gets built. A key only becomes a decision
//! after it passes through a selector like
//! [`select_restaurant`](crate::factory_method::select_restaurant).

pub mod choice;
pub mod reporter;
pub mod transcript;

pub use choice::*;
pub use reporter::*;
pub use transcript::*;

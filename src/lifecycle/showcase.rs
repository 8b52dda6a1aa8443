//! # Showcase
//!
//! The client side of all three construction strategies. [`Showcase`] holds the
//! [`Reporter`] and runs one demonstration per call:
//!
//! - [`build_phones`](Showcase::build_phones) - basic and advanced phone from the same builder
//! - [`order_hamburger`](Showcase::order_hamburger) - one factory method dispatch
//! - [`serve_menus`](Showcase::serve_menus) - one or every abstract factory family
//!
//! Selection errors propagate out unchanged. A failed call reports nothing.

use crate::abstract_factory::{select_menu, Family};
use crate::boundary::{Reporter, Tone, UserChoiceProvider};
use crate::builder::{Phone, PhoneBuilder};
use crate::error::SelectionError;
use crate::factory_method::choose_restaurant;
use tracing::{info, info_span};

/// Runs the three construction strategies against one [`Reporter`].
///
/// `Showcase` is the client side of every strategy. It picks a builder preset, a
/// creator or a factory, calls its public contract, and routes the output to the
/// reporter. It never names a concrete hamburger or drink.
///
/// Each run is independent. Nothing is carried over between calls except what was
/// written to the reporter.
///
/// # Example
///
/// ```rust
/// use creational_recipe::boundary::{FixedChoice, Transcript};
/// use creational_recipe::lifecycle::Showcase;
///
/// let mut showcase = Showcase::new(Transcript::new());
/// showcase.order_hamburger(&mut FixedChoice::new("chicken"))?;
///
/// let transcript = showcase.into_reporter();
/// assert_eq!(transcript.lines(), vec!["Preparing CHICKEN hamburger"]);
/// # Ok::<(), creational_recipe::error::SelectionError>(())
/// ```
pub struct Showcase<R: Reporter> {
    reporter: R,
}

impl<R: Reporter> Showcase<R> {
    pub fn new(reporter: R) -> Self {
        Self { reporter }
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    pub fn into_reporter(self) -> R {
        self.reporter
    }

    /// Builds the basic and the advanced phone through the same builder code path
    /// and reports each under its own heading.
    pub fn build_phones(&mut self) -> Vec<Phone> {
        let _span = info_span!("builder").entered();

        let presets = [
            ("Basic Phone", Tone::Red, PhoneBuilder::basic()),
            ("Advanced Phone", Tone::Green, PhoneBuilder::advanced()),
        ];

        presets
            .into_iter()
            .map(|(title, tone, builder)| {
                let phone = builder.build();
                self.reporter.heading(title, tone);
                self.reporter.phone(&phone);
                info!(title, "Phone reported");
                phone
            })
            .collect()
    }

    /// Asks `choices` for a hamburger and orders it from the matching restaurant.
    ///
    /// # Errors
    ///
    /// [`SelectionError::UnknownSelection`] when the key is missing or unknown. Nothing
    /// is reported in that case.
    pub fn order_hamburger(
        &mut self,
        choices: &mut dyn UserChoiceProvider,
    ) -> Result<(), SelectionError> {
        let _span = info_span!("factory_method").entered();

        let restaurant = choose_restaurant(choices)?;
        restaurant.order_hamburger(&mut self.reporter);
        Ok(())
    }

    /// Serves the menu of the family named by `key`, or every family in turn when
    /// `key` is `None`. Returns the families served, in order.
    ///
    /// # Errors
    ///
    /// [`SelectionError::UnknownSelection`] when `key` names no family. Nothing is
    /// reported in that case.
    pub fn serve_menus(&mut self, key: Option<&str>) -> Result<Vec<Family>, SelectionError> {
        let _span = info_span!("abstract_factory").entered();

        let menus = match key {
            Some(key) => vec![select_menu(Some(key))?],
            None => Family::ALL.into_iter().map(Family::menu).collect(),
        };

        Ok(menus
            .into_iter()
            .map(|menu| {
                let family = menu.family();
                let tone = match family {
                    Family::FastFood => Tone::Red,
                    Family::Healthy => Tone::Green,
                };
                self.reporter.heading(family.title(), tone);
                menu.serve(&mut self.reporter);
                family
            })
            .collect())
    }
}

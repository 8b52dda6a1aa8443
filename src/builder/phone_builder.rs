//! The staged builder for [`Phone`].

use super::phone::{Component, Phone};
use tracing::debug;

/// Assembles a [`Phone`] one slot at a time.
///
/// Each setter takes the builder by value and hands it back, so calls chain. Each one
/// writes only its own slot, so call order does not matter. Setting the same slot
/// twice keeps the last value. [`build`](Self::build) consumes the builder. That
/// makes "use after build" a compile error rather than a runtime question.
///
/// ```rust
/// use creational_recipe::builder::PhoneBuilder;
///
/// let phone = PhoneBuilder::new().set_cpu("A18").set_ram("8 GB").build();
///
/// assert_eq!(phone.cpu(), Some("A18"));
/// assert_eq!(phone.ram(), Some("8 GB"));
/// assert_eq!(phone.camera(), None);
/// assert_eq!(phone.display(creational_recipe::builder::Component::Storage), "Storage - not defined");
/// ```
#[derive(Debug, Default)]
#[must_use = "a builder does nothing until `build` is called"]
pub struct PhoneBuilder {
    phone: Phone,
}

impl PhoneBuilder {
    /// Starts from a phone with every slot unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Entry-level configuration: Mediatek, 4 GB, 8 MP, 16 GB.
    pub fn basic() -> Self {
        Self::new()
            .set_cpu("Mediatek")
            .set_ram("4 GB")
            .set_camera("8 MP")
            .set_storage("16 GB")
    }

    /// Flagship configuration: A18, 8 GB, 48 MP, 256 GB.
    pub fn advanced() -> Self {
        Self::new()
            .set_cpu("A18")
            .set_ram("8 GB")
            .set_camera("48 MP")
            .set_storage("256 GB")
    }

    /// Writes any slot. Values are free-form and never validated.
    pub fn set(mut self, component: Component, value: impl Into<String>) -> Self {
        let value = value.into();
        debug!(slot = component.label(), %value, "Slot set");
        *self.phone.slot_mut(component) = Some(value);
        self
    }

    pub fn set_cpu(self, cpu: impl Into<String>) -> Self {
        self.set(Component::Cpu, cpu)
    }

    pub fn set_ram(self, ram: impl Into<String>) -> Self {
        self.set(Component::Ram, ram)
    }

    pub fn set_camera(self, camera: impl Into<String>) -> Self {
        self.set(Component::Camera, camera)
    }

    pub fn set_storage(self, storage: impl Into<String>) -> Self {
        self.set(Component::Storage, storage)
    }

    /// Hands over the finished phone.
    pub fn build(self) -> Phone {
        debug!(phone = ?self.phone, "Phone built");
        self.phone
    }
}

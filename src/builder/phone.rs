//! The [`Phone`] product and its configuration slots.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// Text that stands in for an unset slot.
pub const NOT_DEFINED: &str = "not defined";

/// The configuration slots of a [`Phone`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Component {
    Cpu,
    Ram,
    Camera,
    Storage,
}

impl Component {
    pub const ALL: [Component; 4] = [
        Component::Cpu,
        Component::Ram,
        Component::Camera,
        Component::Storage,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Component::Cpu => "CPU",
            Component::Ram => "RAM",
            Component::Camera => "Camera",
            Component::Storage => "Storage",
        }
    }

    /// What an unset slot of this kind renders as, e.g. `"CPU - not defined"`.
    pub fn placeholder(self) -> String {
        format!("{} - {}", self.label(), NOT_DEFINED)
    }
}

impl Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A phone assembled by [`PhoneBuilder`](super::PhoneBuilder).
///
/// Every slot starts out unset. Unset slots render as `"<Slot> - not defined"`. They
/// are stored as `None`, so they never collide with a real descriptor, even one
/// that spells out the placeholder text.
///
/// There are no setters. Once [`build`](super::PhoneBuilder::build) hands a phone
/// over, it can only be read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phone {
    cpu: Option<String>,
    ram: Option<String>,
    camera: Option<String>,
    storage: Option<String>,
}

impl Phone {
    /// The raw value of a slot, `None` if it was never set.
    pub fn get(&self, component: Component) -> Option<&str> {
        match component {
            Component::Cpu => self.cpu.as_deref(),
            Component::Ram => self.ram.as_deref(),
            Component::Camera => self.camera.as_deref(),
            Component::Storage => self.storage.as_deref(),
        }
    }

    /// The value of a slot, or its placeholder if unset.
    pub fn display(&self, component: Component) -> String {
        self.get(component)
            .map(str::to_owned)
            .unwrap_or_else(|| component.placeholder())
    }

    pub fn is_defined(&self, component: Component) -> bool {
        self.get(component).is_some()
    }

    pub fn cpu(&self) -> Option<&str> {
        self.get(Component::Cpu)
    }

    pub fn ram(&self) -> Option<&str> {
        self.get(Component::Ram)
    }

    pub fn camera(&self) -> Option<&str> {
        self.get(Component::Camera)
    }

    pub fn storage(&self) -> Option<&str> {
        self.get(Component::Storage)
    }

    // Only the builder writes slots.
    pub(super) fn slot_mut(&mut self, component: Component) -> &mut Option<String> {
        match component {
            Component::Cpu => &mut self.cpu,
            Component::Ram => &mut self.ram,
            Component::Camera => &mut self.camera,
            Component::Storage => &mut self.storage,
        }
    }
}

impl Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Phone configuration")?;
        for component in Component::ALL {
            writeln!(f, "    {}: {}", component, self.display(component))?;
        }
        Ok(())
    }
}

//! Product families and their type-level markers.

use crate::error::SelectionError;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::str::FromStr;

/// Runtime tag naming a product family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Family {
    FastFood,
    Healthy,
}

impl Family {
    pub const ALL: [Family; 2] = [Family::FastFood, Family::Healthy];

    /// Every accepted selection key, in menu order.
    pub const KEYS: &'static [&'static str] = &["fast-food", "healthy"];

    pub fn key(self) -> &'static str {
        match self {
            Family::FastFood => "fast-food",
            Family::Healthy => "healthy",
        }
    }

    /// Heading printed above this family's menu.
    pub fn title(self) -> &'static str {
        match self {
            Family::FastFood => "Common menu",
            Family::Healthy => "Healthy menu",
        }
    }
}

impl Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Family {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        Family::ALL
            .into_iter()
            .find(|family| family.key() == key)
            .ok_or_else(|| SelectionError::unknown(Some(s), Family::KEYS))
    }
}

/// Type-level family marker.
///
/// Items and factories name their family through an associated type bounded by this
/// trait. Two items can only meet in one factory when their markers are the same
/// type.
pub trait FamilyMarker: Send + Sync + 'static {
    const FAMILY: Family;
}

/// Marker for the fast food family.
#[derive(Debug, Clone, Copy, Default)]
pub struct FastFood;

impl FamilyMarker for FastFood {
    const FAMILY: Family = Family::FastFood;
}

/// Marker for the healthy family.
#[derive(Debug, Clone, Copy, Default)]
pub struct Healthy;

impl FamilyMarker for Healthy {
    const FAMILY: Family = Family::Healthy;
}

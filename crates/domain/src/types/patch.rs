//! Tri-state field update

use serde::{Deserialize, Deserializer};

/// A single field of a partial update.
///
/// Deserializes from a missing field as `Absent` (requires
/// `#[serde(default)]` on the field), `null` as `Clear` and any value as
/// `Set`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Patch<T> {
    /// Leave the stored value unchanged
    #[default]
    Absent,
    /// Replace the stored value
    Set(T),
    /// Remove the stored value
    Clear,
}

impl<T> Patch<T> {
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Apply to an optional field.
    pub fn apply_to(self, target: &mut Option<T>) {
        match self {
            Self::Absent => {}
            Self::Set(value) => *target = Some(value),
            Self::Clear => *target = None,
        }
    }
}

impl<T> From<Option<T>> for Patch<T> {
    /// `None` maps to `Absent`, mirroring "null means unchanged" callers.
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Absent, Self::Set)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Patch<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(|value| value.map_or(Self::Clear, Self::Set))
    }
}

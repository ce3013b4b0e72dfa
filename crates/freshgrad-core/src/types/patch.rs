//! Three-state field patches for partial updates.
//!
//! A JSON update body needs to distinguish "field absent, leave it alone"
//! from "field explicitly null, clear it". Plain `Option<T>` collapses the
//! two, so nullable entity fields in update DTOs use [`Patch<T>`] instead:
//!
//! - key missing        → `Patch::Missing`
//! - key present, null  → `Patch::Null`
//! - key present, value → `Patch::Value(v)`
//!
//! Fields must be tagged `#[serde(default)]` for the missing case to work.

use serde::{Deserialize, Deserializer};

/// A partially-specified field in an update request.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Patch<T> {
    /// The field was not present in the request; keep the stored value.
    #[default]
    Missing,
    /// The field was explicitly null; clear the stored value.
    Null,
    /// The field carries a new value.
    Value(T),
}

impl<T> Patch<T> {
    /// Whether the field was absent from the request.
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    /// Apply this patch to an optional stored value.
    pub fn apply_to(self, target: &mut Option<T>) {
        match self {
            Self::Missing => {}
            Self::Null => *target = None,
            Self::Value(v) => *target = Some(v),
        }
    }

    /// Return the new value, if one was provided.
    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Value(v) => Some(v),
            _ => None,
        }
    }
}

impl<'de, T> Deserialize<'de> for Patch<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Only reached when the key is present; serde's field default
        // produces `Missing` otherwise.
        Ok(match Option::<T>::deserialize(deserializer)? {
            Some(v) => Self::Value(v),
            None => Self::Null,
        })
    }
}

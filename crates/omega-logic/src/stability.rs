//! Bounded stability value.
//!
//! Stability models an object's operational integrity as a percentage in
//! `(0, 100]`. The only way to change it is [`Stability::set`], which clamps
//! anything above [`STABILITY_MAX`] and refuses any write at or below zero.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Upper bound of every stability value; also the value objects start at.
pub const STABILITY_MAX: f64 = 100.0;

/// A write that would have taken stability to zero or below.
///
/// Carries no owner; [`crate::object::InventoryObject`] turns it into a
/// [`crate::error::CollapseFault`] naming itself.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("stability {attempted} is at or below zero")]
pub struct Breach {
    pub attempted: f64,
}

/// Serialized as a bare number. Deserializing goes through [`Stability::set`],
/// so stored data gets the same clamp and the same rejection as a live write.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Stability {
    value: f64,
}

impl Stability {
    pub fn new() -> Self {
        Self {
            value: STABILITY_MAX,
        }
    }

    /// Current stored value; always in `(0, 100]`.
    pub fn get(&self) -> f64 {
        self.value
    }

    /// Write a new value.
    ///
    /// Values above 100 are stored as exactly 100. Values at or below zero
    /// (and NaN, which has no place on the scale) are rejected: the stored
    /// value is left untouched and a [`Breach`] is returned. Returns the
    /// value actually stored on success.
    pub fn set(&mut self, new_value: f64) -> Result<f64, Breach> {
        let stored = if new_value > STABILITY_MAX {
            STABILITY_MAX
        } else {
            new_value
        };

        if stored.is_nan() || stored <= 0.0 {
            return Err(Breach {
                attempted: new_value,
            });
        }

        self.value = stored;
        Ok(stored)
    }
}

impl TryFrom<f64> for Stability {
    type Error = Breach;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        let mut stability = Self::new();
        stability.set(value)?;
        Ok(stability)
    }
}

impl From<Stability> for f64 {
    fn from(stability: Stability) -> Self {
        stability.value
    }
}

impl Default for Stability {
    fn default() -> Self {
        Self::new()
    }
}

//! Pure vault logic for Omega Sector.
//!
//! This crate holds everything about the simulation that is independent of
//! the console: the stability value and its collapse threshold, the three
//! inventory object variants, the cooldown capability, and the inventory
//! store. Nothing here reads input or prints; operations return messages and
//! typed errors, so the whole state machine is unit-testable.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | Session configuration (id format, random seed) |
//! | [`cooldown`] | Emergency cooldown capability handle |
//! | [`error`] | Collapse fault and recoverable command errors |
//! | [`object`] | Object variants, per-variant specs, status text |
//! | [`random`] | Random source seam and its `rand`-backed implementation |
//! | [`stability`] | Bounded stability value with collapse detection |
//! | [`store`] | Ordered inventory store with first-match lookup |

pub mod config;
pub mod cooldown;
pub mod error;
pub mod object;
pub mod random;
pub mod stability;
pub mod store;

/// Commonly used types for convenient importing
pub mod prelude {
    pub use crate::config::SessionConfig;
    pub use crate::cooldown::Coolable;
    pub use crate::error::{CollapseFault, CommandError};
    pub use crate::object::{InventoryObject, ObjectKind};
    pub use crate::random::{FixedRandom, RandomSource, RngSource};
    pub use crate::stability::Stability;
    pub use crate::store::InventoryStore;
}

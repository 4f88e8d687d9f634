//! Error taxonomy for the vault.
//!
//! [`CollapseFault`] is the only fatal error: it travels up from a stability
//! write through `analyze`/`emergency_cooldown` to the session controller,
//! which is the sole place allowed to handle it. Everything in
//! [`CommandError`] is recoverable and handled where it is detected.

use thiserror::Error;

/// Raised the instant an object's stability would drop to zero or below.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("CRITICAL FAILURE! Object {id} collapsed the stability field!")]
pub struct CollapseFault {
    /// Id of the object whose stability collapsed.
    pub id: String,
    /// The rejected value that triggered the collapse.
    pub attempted: f64,
}

impl CollapseFault {
    pub fn new(id: impl Into<String>, attempted: f64) -> Self {
        Self {
            id: id.into(),
            attempted,
        }
    }
}

/// Recoverable faults reported to the user; the session keeps running.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("No object with id '{0}' was found.")]
    NotFound(String),
    #[error("ERROR: This object cannot be cooled! (plain data packet)")]
    NotCoolable(String),
    #[error("Invalid operation '{0}', try again.")]
    InvalidCommand(String),
    #[error("Malformed input: {0}")]
    MalformedInput(String),
}

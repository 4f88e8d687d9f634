//! Omega Sector vault terminal.
//!
//! Wraps the pure logic in `omega-logic` with the interactive parts: the
//! numbered control-panel menu, command parsing, a line-based command source,
//! and the [`session::SessionController`] that runs the loop and is the only
//! place a collapse is handled.

pub mod command;
pub mod session;
pub mod source;

pub use command::Command;
pub use session::{DispatchError, SessionController, SessionOutcome, SessionState};
pub use source::{CommandSource, ConsoleSource, ScriptedSource};

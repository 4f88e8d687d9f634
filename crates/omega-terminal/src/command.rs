//! Control-panel commands and the text the terminal shows around them.

use omega_logic::error::CommandError;

pub const WELCOME: &str = "--- OMEGA SECTOR SECURITY TERMINAL ---";

pub const MENU: &str = "\n=== QUANTUM VAULT CONTROL PANEL ===
1. Add New Object
2. List Full Inventory
3. Analyze Object
4. Emergency Cooldown
5. Exit";

pub const CHOICE_PROMPT: &str = "Your choice: ";
pub const ANALYZE_PROMPT: &str = "ID to analyze: ";
pub const COOLDOWN_PROMPT: &str = "ID to cool down: ";

pub const FAREWELL: &str = "Shift over. See you next time, chief.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Add,
    List,
    Analyze,
    Cooldown,
    Quit,
}

impl Command {
    /// Parse a menu choice. Surrounding whitespace is ignored.
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        match line.trim() {
            "1" => Ok(Self::Add),
            "2" => Ok(Self::List),
            "3" => Ok(Self::Analyze),
            "4" => Ok(Self::Cooldown),
            "5" => Ok(Self::Quit),
            other => Err(CommandError::InvalidCommand(other.to_string())),
        }
    }

    pub fn all() -> &'static [Command] {
        &[
            Self::Add,
            Self::List,
            Self::Analyze,
            Self::Cooldown,
            Self::Quit,
        ]
    }
}

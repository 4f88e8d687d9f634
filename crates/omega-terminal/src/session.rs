//! Session controller — the command loop.
//!
//! One command is read, dispatched, and fully reported before the next one
//! is read. Recoverable [`CommandError`]s are printed and the loop goes on.
//! A [`CollapseFault`] is never caught below this module: it ends the
//! session with the evacuation banner.

use std::io::{self, Write};

use omega_logic::config::{ConfigError, SessionConfig};
use omega_logic::error::{CollapseFault, CommandError};
use omega_logic::object::InventoryObject;
use omega_logic::random::{generate_id, RandomSource};
use omega_logic::store::InventoryStore;
use thiserror::Error;

use crate::command::{
    Command, ANALYZE_PROMPT, CHOICE_PROMPT, COOLDOWN_PROMPT, FAREWELL, MENU, WELCOME,
};
use crate::source::CommandSource;

const BANNER_RULE: &str = "**************************************";

/// Everything a single dispatch can fail with.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error(transparent)]
    Collapse(#[from] CollapseFault),
    #[error(transparent)]
    Command(#[from] CommandError),
    #[error("console I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// How a finished session ended.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionOutcome {
    /// The user chose exit.
    Quit,
    /// The command source ran dry.
    InputClosed,
    /// An object's stability collapsed.
    Collapsed(CollapseFault),
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    Running,
    Terminated(SessionOutcome),
}

/// Result of a successful dispatch.
enum Flow {
    Continue,
    Quit,
    InputClosed,
}

pub struct SessionController<S, R, W> {
    store: InventoryStore,
    config: SessionConfig,
    source: S,
    random: R,
    out: W,
    state: SessionState,
    commands_handled: u64,
}

impl<S, R, W> SessionController<S, R, W>
where
    S: CommandSource,
    R: RandomSource,
    W: Write,
{
    pub fn new(config: SessionConfig, source: S, random: R, out: W) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            store: InventoryStore::new(),
            config,
            source,
            random,
            out,
            state: SessionState::Running,
            commands_handled: 0,
        })
    }

    pub fn store(&self) -> &InventoryStore {
        &self.store
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == SessionState::Running
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    /// Number of commands read so far, valid or not.
    pub fn commands_handled(&self) -> u64 {
        self.commands_handled
    }

    /// Print the welcome line and run until quit, end of input, or collapse.
    ///
    /// Only console I/O failures surface as `Err`.
    pub fn run(&mut self) -> io::Result<SessionOutcome> {
        writeln!(self.out, "{}", WELCOME)?;
        loop {
            if let Some(outcome) = self.step()? {
                return Ok(outcome);
            }
        }
    }

    /// Handle exactly one command. Returns the outcome once the session has
    /// ended; further calls keep returning it without reading input.
    pub fn step(&mut self) -> io::Result<Option<SessionOutcome>> {
        if let SessionState::Terminated(outcome) = &self.state {
            return Ok(Some(outcome.clone()));
        }

        writeln!(self.out, "{}", MENU)?;
        let Some(line) = self.prompt(CHOICE_PROMPT)? else {
            return Ok(Some(self.finish(SessionOutcome::InputClosed)));
        };
        self.commands_handled += 1;

        let result = Command::parse(&line)
            .map_err(DispatchError::from)
            .and_then(|command| {
                log::info!("Dispatching {:?}", command);
                self.dispatch(command)
            });

        match result {
            Ok(Flow::Continue) => Ok(None),
            Ok(Flow::Quit) => {
                writeln!(self.out, "{}", FAREWELL)?;
                Ok(Some(self.finish(SessionOutcome::Quit)))
            }
            Ok(Flow::InputClosed) => Ok(Some(self.finish(SessionOutcome::InputClosed))),
            Err(DispatchError::Command(e)) => {
                log::debug!("Command rejected: {:?}", e);
                writeln!(self.out, "{}", e)?;
                Ok(None)
            }
            Err(DispatchError::Collapse(fault)) => {
                writeln!(self.out, "\n{}", BANNER_RULE)?;
                writeln!(self.out, "SYSTEM COLLAPSE! EVACUATION INITIATED...")?;
                writeln!(self.out, "CAUSE: {}", fault)?;
                writeln!(self.out, "SESSION TERMINATED.")?;
                writeln!(self.out, "{}", BANNER_RULE)?;
                Ok(Some(self.finish(SessionOutcome::Collapsed(fault))))
            }
            Err(DispatchError::Io(e)) => Err(e),
        }
    }

    fn finish(&mut self, outcome: SessionOutcome) -> SessionOutcome {
        log::info!(
            "Session ended after {} commands: {:?}",
            self.commands_handled,
            outcome
        );
        self.state = SessionState::Terminated(outcome.clone());
        outcome
    }

    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.out, "{}", text)?;
        self.out.flush()?;
        self.source.next_line()
    }

    /// Prompt for an object id. `Ok(None)` if input ended instead.
    fn read_id(&mut self, text: &str) -> Result<Option<String>, DispatchError> {
        let Some(line) = self.prompt(text)? else {
            return Ok(None);
        };
        let id = line.trim();
        if id.is_empty() {
            return Err(CommandError::MalformedInput("an object id is required".into()).into());
        }
        Ok(Some(id.to_string()))
    }

    fn dispatch(&mut self, command: Command) -> Result<Flow, DispatchError> {
        match command {
            Command::Add => {
                let kind = self.random.pick_kind();
                let id = generate_id(&self.config, &mut self.random);
                self.store.add(InventoryObject::new(id.clone(), kind));
                writeln!(self.out, "{} admitted to the vault.", id)?;
            }
            Command::List => {
                writeln!(self.out, "\n--- INVENTORY STATUS ---")?;
                match self.store.list_all() {
                    Some(objects) => {
                        for object in objects {
                            writeln!(self.out, "{}", object.status_text())?;
                        }
                    }
                    None => writeln!(self.out, "The vault is empty.")?,
                }
            }
            Command::Analyze => {
                let Some(id) = self.read_id(ANALYZE_PROMPT)? else {
                    return Ok(Flow::InputClosed);
                };
                let object = self
                    .store
                    .find_by_id_mut(&id)
                    .ok_or(CommandError::NotFound(id))?;
                let report = object.analyze()?;
                writeln!(self.out, "{}", report)?;
                writeln!(self.out, "Current stability: {:.2}", object.stability())?;
            }
            Command::Cooldown => {
                let Some(id) = self.read_id(COOLDOWN_PROMPT)? else {
                    return Ok(Flow::InputClosed);
                };
                let object = self
                    .store
                    .find_by_id_mut(&id)
                    .ok_or_else(|| CommandError::NotFound(id.clone()))?;
                let coolable = object.coolable().ok_or(CommandError::NotCoolable(id))?;
                let report = coolable.emergency_cooldown()?;
                writeln!(self.out, "{}", report)?;
            }
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }
}

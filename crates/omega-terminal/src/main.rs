//! Omega Sector interactive vault terminal.
//!
//! Usage:
//!   cargo run -p omega-terminal
//!   RUST_LOG=omega_logic=debug cargo run -p omega-terminal
//!
//! Diagnostics go to stderr; the control panel owns stdout.

use std::io;

use omega_logic::config::SessionConfig;
use omega_logic::random::RngSource;
use omega_terminal::{ConsoleSource, SessionController, SessionOutcome};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = SessionConfig::default();
    let random = RngSource::from_config(&config);
    let mut session =
        match SessionController::new(config, ConsoleSource::stdin(), random, io::stdout()) {
            Ok(s) => s,
            Err(e) => {
                error!("Invalid session config: {}", e);
                std::process::exit(1);
            }
        };

    match session.run() {
        Ok(SessionOutcome::Collapsed(fault)) => {
            // Banner already on stdout
            info!("Session collapsed: {}", fault);
            std::process::exit(1);
        }
        Ok(outcome) => info!("Session finished: {:?}", outcome),
        Err(e) => {
            error!("Console I/O failed: {}", e);
            std::process::exit(1);
        }
    }
}

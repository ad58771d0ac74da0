//! Session orchestration for the portfolio terminal.
//!
//! A session is the caller side of the terminal core: it parses each input,
//! sends commands to the dispatcher and messages to the responder, and turns
//! handler failures into text the visitor can read.

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tracing::{debug, error, warn};

use crate::config::Config;
use crate::responder::Responder;
use crate::terminal::{parse_input, Dispatcher, ParsedInput};

/// Reply shown when the responder fails.
pub const RESPONDER_FAILURE_MESSAGE: &str = "Sorry, I couldn't answer that right now.";

/// Result of handling one line of input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "lowercase")]
pub enum InputResult {
    /// No action needed (empty input).
    None,
    /// Text to display.
    Output(String),
    /// A command or message failed; text to display as an error.
    Failure(String),
    /// The visitor asked to leave.
    Exit,
}

/// Per-session settings.
#[derive(Debug, Clone, Default)]
pub struct SessionOptions {
    /// Deadline for a single command. `None` waits as long as the handler takes.
    pub command_timeout: Option<Duration>,
}

impl SessionOptions {
    /// Extracts session settings from the config.
    pub fn from_config(config: &Config) -> Self {
        Self {
            command_timeout: config.terminal.command_timeout(),
        }
    }
}

/// One visitor's conversation with the terminal.
pub struct Session {
    dispatcher: Arc<Dispatcher>,
    responder: Arc<dyn Responder>,
    options: SessionOptions,
}

impl Session {
    /// Creates a session over a fully configured dispatcher.
    pub fn new(
        dispatcher: Arc<Dispatcher>,
        responder: Arc<dyn Responder>,
        options: SessionOptions,
    ) -> Self {
        Self {
            dispatcher,
            responder,
            options,
        }
    }

    /// Handles one line of raw input.
    pub async fn handle_input(&self, input: &str) -> InputResult {
        match parse_input(input) {
            ParsedInput::Message { raw } if raw.is_empty() => InputResult::None,
            ParsedInput::Message { raw } => self.handle_message(&raw).await,
            ParsedInput::Command { command, .. } if command == "exit" || command == "quit" => {
                InputResult::Exit
            }
            ParsedInput::Command { command, args, .. } => {
                self.handle_command(&command, &args).await
            }
        }
    }

    /// Runs a command through the dispatcher, applying the session deadline.
    async fn handle_command(&self, command: &str, args: &[String]) -> InputResult {
        let execution = self.dispatcher.execute(command, args);

        let outcome = match self.options.command_timeout {
            Some(limit) => match tokio::time::timeout(limit, execution).await {
                Ok(outcome) => outcome,
                Err(_) => {
                    warn!(command = %command, ?limit, "Command timed out");
                    return InputResult::Failure(format!("Command /{command} timed out."));
                }
            },
            None => execution.await,
        };

        match outcome {
            Ok(text) => InputResult::Output(text),
            Err(e) => {
                error!(command = %command, category = e.category(), "Command failed: {e}");
                InputResult::Failure(format!("Command /{command} failed. Please try again."))
            }
        }
    }

    async fn handle_message(&self, message: &str) -> InputResult {
        debug!(len = message.len(), "Routing message to responder");
        match self.responder.respond(message).await {
            Ok(reply) => InputResult::Output(reply),
            Err(e) => {
                error!(category = e.category(), "Responder failed: {e}");
                InputResult::Failure(RESPONDER_FAILURE_MESSAGE.to_string())
            }
        }
    }
}

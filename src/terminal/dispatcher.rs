//! Command registry and routing.
//!
//! The dispatcher maps command names to handlers and turns a parsed command
//! into display text. It re-validates every command name itself instead of
//! trusting that callers went through the parser.
//!
//! There is no timeout, retry, or cancellation here: `execute` completes when
//! the handler does. Callers that need a deadline wrap the call themselves.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, OnceLock};

use async_trait::async_trait;
use regex::Regex;
use tracing::{debug, trace};

use crate::error::Result;

/// Maximum length of a command name.
pub const MAX_COMMAND_LENGTH: usize = 32;

/// Reply for names that fail validation.
pub const INVALID_COMMAND_MESSAGE: &str = "Invalid command. Type /help for available commands.";

fn command_name_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[a-z0-9-]+$").expect("valid command name pattern"))
}

/// Returns true if `name` is non-empty, short enough, and uses only `[a-z0-9-]`.
pub fn is_valid_command_name(name: &str) -> bool {
    !name.is_empty() && name.len() <= MAX_COMMAND_LENGTH && command_name_pattern().is_match(name)
}

/// Reply for a valid name with no registered handler.
pub fn unknown_command_message(name: &str) -> String {
    format!("Unknown command: /{name}. Type /help for available commands.")
}

/// Produces the text shown in response to a command.
///
/// Implementations must be thread-safe so a dispatcher can be shared across
/// sessions once setup is complete.
#[async_trait]
pub trait CommandHandler: Send + Sync {
    /// Runs the command with its arguments.
    async fn handle(&self, args: &[String]) -> Result<String>;
}

/// Adapts a synchronous closure into a [`CommandHandler`].
struct FnHandler<F>(F);

#[async_trait]
impl<F> CommandHandler for FnHandler<F>
where
    F: Fn(&[String]) -> Result<String> + Send + Sync,
{
    async fn handle(&self, args: &[String]) -> Result<String> {
        (self.0)(args)
    }
}

/// A registered command.
#[derive(Clone)]
pub struct CommandDefinition {
    /// Command name without the leading slash.
    pub name: String,
    /// One-line description shown in help.
    pub description: String,
    /// Usage pattern, e.g. `/skills [filter...]`.
    pub usage: String,
    /// Handler invoked on execution.
    pub handler: Arc<dyn CommandHandler>,
}

impl CommandDefinition {
    /// Creates a definition backed by a handler value.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        usage: impl Into<String>,
        handler: impl CommandHandler + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            usage: usage.into(),
            handler: Arc::new(handler),
        }
    }

    /// Creates a definition backed by a synchronous closure.
    pub fn from_fn<F>(
        name: impl Into<String>,
        description: impl Into<String>,
        usage: impl Into<String>,
        handler: F,
    ) -> Self
    where
        F: Fn(&[String]) -> Result<String> + Send + Sync + 'static,
    {
        Self::new(name, description, usage, FnHandler(handler))
    }
}

impl fmt::Debug for CommandDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandDefinition")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("usage", &self.usage)
            .finish_non_exhaustive()
    }
}

/// Registry of named commands.
#[derive(Debug, Default)]
pub struct Dispatcher {
    commands: HashMap<String, CommandDefinition>,
}

impl Dispatcher {
    /// Creates an empty dispatcher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a command, replacing any previous one with the same name.
    pub fn register(&mut self, definition: CommandDefinition) {
        let name = definition.name.clone();
        if self.commands.insert(name.clone(), definition).is_some() {
            debug!(command = %name, "Replaced existing command registration");
        } else {
            trace!(command = %name, "Registered command");
        }
    }

    /// Routes a command to its handler.
    ///
    /// Invalid and unknown names are answered with text, never with an error.
    /// Handler errors are returned unchanged.
    pub async fn execute(&self, command: &str, args: &[String]) -> Result<String> {
        if !is_valid_command_name(command) {
            debug!(command = %command, "Rejected invalid command name");
            return Ok(INVALID_COMMAND_MESSAGE.to_string());
        }

        let Some(definition) = self.commands.get(command) else {
            debug!(command = %command, "Unknown command");
            return Ok(unknown_command_message(command));
        };

        debug!(command = %command, args = args.len(), "Executing command");
        definition.handler.handle(args).await
    }

    /// Returns a snapshot of every registered command.
    pub fn commands(&self) -> Vec<CommandDefinition> {
        self.commands.values().cloned().collect()
    }

    /// Exact, case-sensitive check for a registered name.
    pub fn has_command(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }
}

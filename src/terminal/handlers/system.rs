//! System command handlers (/help).

use async_trait::async_trait;

use crate::error::Result;
use crate::terminal::dispatcher::CommandHandler;
use crate::terminal::help::{generate_command_help, generate_help_text, CommandSummary};

/// Handle /help command.
///
/// Holds a snapshot of the registry taken when help was registered.
pub struct HelpHandler {
    pub commands: Vec<CommandSummary>,
}

#[async_trait]
impl CommandHandler for HelpHandler {
    async fn handle(&self, args: &[String]) -> Result<String> {
        let Some(topic) = args.first() else {
            return Ok(generate_help_text(&self.commands));
        };

        let name = topic.trim_start_matches('/').to_lowercase();
        Ok(match self.commands.iter().find(|c| c.name == name) {
            Some(cmd) => generate_command_help(cmd),
            None => format!("No help for /{name}. Type /help for available commands."),
        })
    }
}

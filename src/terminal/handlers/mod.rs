//! Built-in command handlers for the portfolio terminal.
//!
//! Each handler owns the data it renders, so the dispatcher can be shared
//! read-only once setup is done.

pub mod profile;
pub mod system;

use std::sync::Arc;

use tracing::debug;

use crate::config::Profile;
use crate::terminal::dispatcher::{CommandDefinition, Dispatcher};
use crate::terminal::help::CommandSummary;

pub use profile::{AboutHandler, ContactHandler, ProjectsHandler, SkillsHandler};
pub use system::HelpHandler;

/// Registers the portfolio commands followed by /help.
pub fn register_builtin_commands(dispatcher: &mut Dispatcher, profile: Arc<Profile>) {
    dispatcher.register(CommandDefinition::new(
        "about",
        "Who I am",
        "/about",
        AboutHandler {
            profile: Arc::clone(&profile),
        },
    ));
    dispatcher.register(CommandDefinition::new(
        "skills",
        "Skills by category, optionally filtered",
        "/skills [filter...]",
        SkillsHandler {
            profile: Arc::clone(&profile),
        },
    ));
    dispatcher.register(CommandDefinition::new(
        "projects",
        "Projects I've built",
        "/projects [name]",
        ProjectsHandler {
            profile: Arc::clone(&profile),
        },
    ));
    dispatcher.register(CommandDefinition::new(
        "contact",
        "How to reach me",
        "/contact",
        ContactHandler { profile },
    ));

    register_help(dispatcher);
}

/// Registers /help with a listing of everything registered so far.
///
/// Call this after all other commands; later registrations are not listed.
pub fn register_help(dispatcher: &mut Dispatcher) {
    let help = CommandDefinition::new(
        "help",
        "Show available commands",
        "/help [command]",
        HelpHandler { commands: vec![] },
    );

    let mut commands: Vec<CommandSummary> = dispatcher
        .commands()
        .iter()
        .filter(|c| c.name != help.name)
        .map(CommandSummary::from)
        .collect();
    commands.push(CommandSummary::from(&help));

    debug!(count = commands.len(), "Registering help");
    dispatcher.register(CommandDefinition {
        handler: Arc::new(HelpHandler { commands }),
        ..help
    });
}

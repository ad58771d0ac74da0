//! Help text generation from registered command metadata.

use super::dispatcher::CommandDefinition;

/// Help-relevant metadata for one command, detached from its handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSummary {
    /// Command name without the leading slash.
    pub name: String,
    /// One-line description.
    pub description: String,
    /// Usage pattern.
    pub usage: String,
}

impl From<&CommandDefinition> for CommandSummary {
    fn from(def: &CommandDefinition) -> Self {
        Self {
            name: def.name.clone(),
            description: def.description.clone(),
            usage: def.usage.clone(),
        }
    }
}

/// Renders the command listing shown by `/help`.
///
/// Commands are sorted by name so the output is stable regardless of
/// registration order.
pub fn generate_help_text(commands: &[CommandSummary]) -> String {
    let mut sorted: Vec<&CommandSummary> = commands.iter().collect();
    sorted.sort_by(|a, b| a.name.cmp(&b.name));

    let width = sorted.iter().map(|c| c.name.len() + 1).max().unwrap_or(0);

    let lines: String = sorted
        .iter()
        .map(|cmd| {
            format!(
                "  {:<width$}  - {}\n",
                format!("/{}", cmd.name),
                cmd.description
            )
        })
        .collect();

    format!(
        "Available commands:\n{lines}\nType /help <command> for usage. Anything else is sent as a message."
    )
}

/// Renders detailed help for a single command.
pub fn generate_command_help(cmd: &CommandSummary) -> String {
    format!("/{}\n  {}\n\nUsage: {}", cmd.name, cmd.description, cmd.usage)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn summary(name: &str, description: &str) -> CommandSummary {
        CommandSummary {
            name: name.to_string(),
            description: description.to_string(),
            usage: format!("/{name}"),
        }
    }

    #[test]
    fn test_help_text_sorted_and_aligned() {
        let text = generate_help_text(&[
            summary("skills", "List skills"),
            summary("about", "About me"),
        ]);

        assert_eq!(
            text,
            "Available commands:\n  /about   - About me\n  /skills  - List skills\n\nType /help <command> for usage. Anything else is sent as a message."
        );
    }

    #[test]
    fn test_help_text_with_no_commands() {
        let text = generate_help_text(&[]);
        assert!(text.starts_with("Available commands:\n\n"));
    }

    #[test]
    fn test_command_help() {
        let cmd = CommandSummary {
            name: "skills".to_string(),
            description: "List skills".to_string(),
            usage: "/skills [filter...]".to_string(),
        };
        assert_eq!(
            generate_command_help(&cmd),
            "/skills\n  List skills\n\nUsage: /skills [filter...]"
        );
    }
}

//! Configuration management for the portfolio terminal.
//!
//! Loads the portfolio profile (bio, skills, projects, contacts), terminal
//! behavior, and canned responder rules from a TOML file.

use crate::error::{Result, TerminalError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Portfolio data served by the built-in commands.
    #[serde(default)]
    pub profile: Profile,

    /// Terminal behavior.
    #[serde(default)]
    pub terminal: TerminalConfig,

    /// Canned replies for free-text messages, checked in order.
    #[serde(default)]
    pub responses: Vec<ResponseRule>,
}

/// Portfolio owner and their work.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Profile {
    /// Display name.
    #[serde(default)]
    pub name: String,

    /// Short headline shown under the name.
    #[serde(default)]
    pub tagline: String,

    /// Longer free-form introduction.
    #[serde(default)]
    pub bio: String,

    /// Skills grouped by category.
    #[serde(default)]
    pub skills: Vec<SkillGroup>,

    /// Showcased projects.
    #[serde(default)]
    pub projects: Vec<Project>,

    /// Contact links.
    #[serde(default)]
    pub contacts: Vec<Contact>,
}

/// A named group of skills, e.g. "Languages".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SkillGroup {
    /// Category name.
    pub category: String,
    /// Skills in this category.
    #[serde(default)]
    pub items: Vec<String>,
}

/// A portfolio project.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Project {
    /// Project name.
    pub name: String,
    /// One-line summary.
    #[serde(default)]
    pub description: String,
    /// Link to the project, if public.
    pub url: Option<String>,
    /// Technologies or topics.
    #[serde(default)]
    pub tags: Vec<String>,
}

/// A contact link, e.g. GitHub or email.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Contact {
    /// Label such as "GitHub".
    pub label: String,
    /// URL or address.
    pub value: String,
}

/// Terminal behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TerminalConfig {
    /// Prompt printed before each input line.
    #[serde(default = "default_prompt")]
    pub prompt: String,

    /// Per-command deadline in seconds. Unset means commands may run forever.
    #[serde(default)]
    pub command_timeout_secs: Option<u64>,

    /// Reply for messages that match no response rule.
    #[serde(default = "default_fallback_reply")]
    pub fallback_reply: String,
}

fn default_prompt() -> String {
    "> ".to_string()
}

fn default_fallback_reply() -> String {
    "I can't answer free-form questions here yet. Type /help to see what I can do.".to_string()
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
            command_timeout_secs: None,
            fallback_reply: default_fallback_reply(),
        }
    }
}

impl TerminalConfig {
    /// Returns the command deadline, if one is configured.
    pub fn command_timeout(&self) -> Option<Duration> {
        self.command_timeout_secs.map(Duration::from_secs)
    }
}

/// A canned reply for messages containing a pattern.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResponseRule {
    /// Case-insensitive substring to look for.
    pub pattern: String,
    /// Reply text.
    pub reply: String,
}

impl Config {
    /// Returns the default config file path for the current platform.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("folio-terminal")
            .join("config.toml")
    }

    /// Loads configuration from a TOML file.
    ///
    /// A missing file yields the default configuration.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| TerminalError::config(format!("Failed to read config file: {e}")))?;

        Self::parse_toml(&content, path)
    }

    /// Parses configuration from a TOML string.
    fn parse_toml(content: &str, path: &Path) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(|e| {
            TerminalError::config(format!(
                "Configuration error in {}:\n  {}",
                path.display(),
                e
            ))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects values that would make the terminal unusable.
    fn validate(&self) -> Result<()> {
        if self.terminal.command_timeout_secs == Some(0) {
            return Err(TerminalError::config(
                "terminal.command_timeout_secs must be greater than zero",
            ));
        }
        if let Some(rule) = self.responses.iter().find(|r| r.pattern.trim().is_empty()) {
            return Err(TerminalError::config(format!(
                "response rule with reply '{}' has an empty pattern",
                rule.reply
            )));
        }
        Ok(())
    }
}

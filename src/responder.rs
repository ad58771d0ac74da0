//! Replies to free-text messages.
//!
//! Messages are anything the parser does not classify as a command. In
//! production they go to an AI responder; [`CannedResponder`] answers from
//! configured patterns so the terminal works offline.

use async_trait::async_trait;

use crate::config::{Config, ResponseRule};
use crate::error::Result;

/// Something that can answer a free-text message.
///
/// Implementations must be thread-safe (Send + Sync) to support async operations.
#[async_trait]
pub trait Responder: Send + Sync {
    /// Produces a reply for a sanitized message.
    async fn respond(&self, message: &str) -> Result<String>;
}

/// Responder that returns canned replies based on input patterns.
#[derive(Debug, Clone)]
pub struct CannedResponder {
    rules: Vec<ResponseRule>,
    fallback: String,
}

impl CannedResponder {
    /// Creates a responder with no rules and the given fallback reply.
    pub fn new(fallback: impl Into<String>) -> Self {
        Self {
            rules: Vec::new(),
            fallback: fallback.into(),
        }
    }

    /// Builds a responder from the `[[responses]]` rules in the config.
    pub fn from_config(config: &Config) -> Self {
        Self {
            rules: config.responses.clone(),
            fallback: config.terminal.fallback_reply.clone(),
        }
    }

    /// Adds a rule; when the message contains `pattern`, reply with `reply`.
    pub fn with_response(mut self, pattern: impl Into<String>, reply: impl Into<String>) -> Self {
        self.rules.push(ResponseRule {
            pattern: pattern.into(),
            reply: reply.into(),
        });
        self
    }

    fn reply_for(&self, message: &str) -> &str {
        let message = message.to_lowercase();
        self.rules
            .iter()
            .find(|rule| message.contains(&rule.pattern.to_lowercase()))
            .map(|rule| rule.reply.as_str())
            .unwrap_or(&self.fallback)
    }
}

#[async_trait]
impl Responder for CannedResponder {
    async fn respond(&self, message: &str) -> Result<String> {
        Ok(self.reply_for(message).to_string())
    }
}

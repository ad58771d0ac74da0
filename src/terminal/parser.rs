//! Input classification for the terminal.
//!
//! Turns one line of user text into either a slash command or a free-text
//! message. Parsing never fails: hostile or oversized input is sanitized and
//! classified like anything else.

use serde::{Deserialize, Serialize};

/// Maximum number of characters kept from a single input line.
pub const MAX_INPUT_LENGTH: usize = 1000;

/// Classified user input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ParsedInput {
    /// A slash command, e.g. `/skills rust`.
    Command {
        /// Lowercased command name without the leading slash.
        command: String,
        /// Remaining whitespace-separated tokens, in order.
        args: Vec<String>,
        /// Sanitized input line.
        raw: String,
    },
    /// Anything that does not start with `/`.
    Message {
        /// Sanitized input line.
        raw: String,
    },
}

impl ParsedInput {
    /// Returns the sanitized input this value was parsed from.
    pub fn raw(&self) -> &str {
        match self {
            Self::Command { raw, .. } | Self::Message { raw } => raw,
        }
    }

    /// Returns true for the command variant.
    pub fn is_command(&self) -> bool {
        matches!(self, Self::Command { .. })
    }
}

fn is_control(c: char) -> bool {
    matches!(c, '\u{0000}'..='\u{001F}' | '\u{007F}')
}

/// Whitespace as browsers see it: Unicode White_Space minus NEL, plus BOM.
fn is_separator(c: char) -> bool {
    (c.is_whitespace() && c != '\u{0085}') || c == '\u{FEFF}'
}

/// Strips C0 control characters and DEL, caps the length, and trims.
///
/// The length cap counts characters and is applied before trimming.
pub fn sanitize(input: &str) -> String {
    let capped: String = input
        .chars()
        .filter(|&c| !is_control(c))
        .take(MAX_INPUT_LENGTH)
        .collect();
    capped.trim_matches(is_separator).to_string()
}

/// Parses user input into a command or a message.
///
/// ```
/// use folio_terminal::terminal::{parse_input, ParsedInput};
///
/// assert_eq!(
///     parse_input("/skills react"),
///     ParsedInput::Command {
///         command: "skills".to_string(),
///         args: vec!["react".to_string()],
///         raw: "/skills react".to_string(),
///     }
/// );
/// assert!(!parse_input("tell me about your projects").is_command());
/// ```
pub fn parse_input(input: &str) -> ParsedInput {
    let raw = sanitize(input);

    if !raw.starts_with('/') {
        return ParsedInput::Message { raw };
    }

    let mut parts = raw[1..].split(is_separator).filter(|s| !s.is_empty());
    let command = parts.next().map(str::to_lowercase).unwrap_or_default();
    let args = parts.map(String::from).collect();

    ParsedInput::Command { command, args, raw }
}

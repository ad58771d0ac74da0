//! Terminal core: input parsing and command dispatch.
//!
//! The parser classifies a line of text; the dispatcher routes commands to
//! registered handlers. The two only share the shape of a command (name plus
//! arguments), so the dispatcher can be driven without the parser.

pub mod dispatcher;
pub mod handlers;
pub mod help;
pub mod parser;

pub use dispatcher::{
    is_valid_command_name, CommandDefinition, CommandHandler, Dispatcher,
    INVALID_COMMAND_MESSAGE, MAX_COMMAND_LENGTH,
};
pub use handlers::{register_builtin_commands, register_help};
pub use help::CommandSummary;
pub use parser::{parse_input, sanitize, ParsedInput, MAX_INPUT_LENGTH};

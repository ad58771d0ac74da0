//! folio-terminal - a slash-command terminal for a personal portfolio.
//!
//! The core is [`terminal`]: a parser that classifies input lines and a
//! dispatcher that routes commands to registered handlers. [`app`] and
//! [`repl`] drive it for one visitor.

pub mod app;
pub mod config;
pub mod error;
pub mod logging;
pub mod repl;
pub mod responder;
pub mod terminal;

//! End-to-end tests for the terminal: parser, dispatcher, session and binary.

mod cli_test;
mod common;
mod dispatch_test;
mod session_test;

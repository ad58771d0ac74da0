//! Parser and dispatcher working together, without a session.

use folio_terminal::terminal::{parse_input, ParsedInput, INVALID_COMMAND_MESSAGE};
use pretty_assertions::assert_eq;

use super::common::builtin_dispatcher;

async fn run(input: &str) -> String {
    let dispatcher = builtin_dispatcher();
    match parse_input(input) {
        ParsedInput::Command { command, args, .. } => {
            dispatcher.execute(&command, &args).await.unwrap()
        }
        ParsedInput::Message { raw } => panic!("expected a command, got message {raw:?}"),
    }
}

#[tokio::test]
async fn test_skills_filter_through_parser() {
    assert_eq!(
        run("/SKILLS   react   typescript").await,
        "Languages: TypeScript\nFrontend: React"
    );
}

#[tokio::test]
async fn test_about() {
    assert_eq!(
        run("/about").await,
        "Ada - Systems engineer\n\nBuilds compilers and terminals."
    );
}

#[tokio::test]
async fn test_help_for_single_command() {
    assert_eq!(
        run("/help skills").await,
        "/skills\n  Skills by category, optionally filtered\n\nUsage: /skills [filter...]"
    );
}

#[tokio::test]
async fn test_unknown_command() {
    assert_eq!(
        run("/resume").await,
        "Unknown command: /resume. Type /help for available commands."
    );
}

#[tokio::test]
async fn test_punctuation_in_name_is_invalid() {
    assert_eq!(run("/help!!").await, INVALID_COMMAND_MESSAGE);
    assert_eq!(run("/").await, INVALID_COMMAND_MESSAGE);
}

#[tokio::test]
async fn test_overlong_name_is_invalid() {
    let input = format!("/{}", "a".repeat(33));
    assert_eq!(run(&input).await, INVALID_COMMAND_MESSAGE);
}

#[tokio::test]
async fn test_execute_without_parser_is_still_validated() {
    let dispatcher = builtin_dispatcher();
    let output = dispatcher.execute("About", &[]).await.unwrap();
    assert_eq!(output, INVALID_COMMAND_MESSAGE);
}

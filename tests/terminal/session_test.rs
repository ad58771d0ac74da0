//! Session behavior over the built-in commands.

use folio_terminal::app::InputResult;
use pretty_assertions::assert_eq;

use super::common::sample_session;

#[tokio::test]
async fn test_message_routed_to_responder() {
    let session = sample_session();
    assert_eq!(
        session.handle_input("tell me about your projects").await,
        InputResult::Output("Type /projects to see them.".to_string())
    );
    assert_eq!(
        session.handle_input("hello").await,
        InputResult::Output("Try /help.".to_string())
    );
}

#[tokio::test]
async fn test_projects_detail() {
    let session = sample_session();
    assert_eq!(
        session.handle_input("/projects forwheel").await,
        InputResult::Output(
            "Forwheel\n  Bike fitting app\n  Tags: react, mobile\n  Link: https://forwheel.example"
                .to_string()
        )
    );
}

#[tokio::test]
async fn test_contact() {
    assert_eq!(
        sample_session().handle_input("/contact").await,
        InputResult::Output("Email: ada@example.com".to_string())
    );
}

#[tokio::test]
async fn test_control_characters_do_not_reach_handlers() {
    let session = sample_session();
    assert_eq!(
        session.handle_input("\u{1b}/sk\u{0}ills\u{7f} go\r\n").await,
        InputResult::Output("Languages: Go".to_string())
    );
}

#[tokio::test]
async fn test_oversized_message_is_accepted() {
    let session = sample_session();
    let input = "a".repeat(10_000);
    assert_eq!(
        session.handle_input(&input).await,
        InputResult::Output("Try /help.".to_string())
    );
}

#[tokio::test]
async fn test_blank_and_exit() {
    let session = sample_session();
    assert_eq!(session.handle_input("\u{0}\u{1}").await, InputResult::None);
    assert_eq!(session.handle_input("/exit").await, InputResult::Exit);
}

use std::path::Path;
use std::sync::Arc;

use automod_bot::handlers::line_handler::process_line;
use automod_bot::handlers::message_handler::{handle_message, ModerationOutcome};
use automod_bot::models::{AppState, IncomingMessage};
use automod_bot::services::diagnostics::MemorySink;
use automod_bot::services::filter_handle::{rebuild, FilterHandle};
use automod_bot::services::normalizer::normalize;
use automod_bot::services::word_filter::{MatchResult, WordFilter};

fn state(words: &[&str]) -> (AppState, Arc<MemorySink>) {
    let sink = Arc::new(MemorySink::new());
    let filter = WordFilter::with_builtin_table(words, sink.as_ref()).unwrap();
    let state = AppState {
        filter: FilterHandle::new(filter),
        log_channel_id: 1000,
        sink: sink.clone(),
    };
    (state, sink)
}

fn message(content: &str) -> IncomingMessage {
    IncomingMessage {
        author_id: 1,
        author_name: "someone".to_string(),
        is_bot: false,
        channel_id: 2,
        content: content.to_string(),
    }
}

#[test]
fn obfuscated_forms_resolve_to_canonical_word() {
    let (state, _) = state(&["bad", "courir", "shit", "ass"]);
    let cases = [
        ("this is b4d", Some("bad")),
        ("b-a-d", Some("bad")),
        ("B . 4 . D", Some("bad")),
        ("baaaad", Some("bad")),
        ("so $h!t", Some("shit")),
        ("@ss", Some("ass")),
        ("this is badge", None),
        ("elle courait vite", Some("courir")),
        ("", None),
        ("!!!???", None),
    ];

    for (text, expected) in cases {
        let filter = state.filter.current();
        let result = filter.find_banned_word(text);
        match expected {
            Some(word) => assert_eq!(result, MatchResult::Matched(word.to_string()), "{text}"),
            None => assert_eq!(result, MatchResult::NoMatch, "{text}"),
        }
    }
}

#[test]
fn violation_yields_repost_and_audit() {
    let (state, _) = state(&["bad"]);
    let outcome = handle_message(&state, &message("that was b a d, really"));

    let ModerationOutcome::Censored { repost, audit } = outcome else {
        panic!("expected a censored outcome");
    };
    assert_eq!(repost.content.chars().count(), "that was b a d, really".chars().count() + 2);
    assert!(repost.content.ends_with("`, really"));
    assert_eq!(audit.detected_word, "bad");
    assert_eq!(audit.log_channel_id, 1000);

    let json = serde_json::to_value(ModerationOutcome::Censored { repost, audit }).unwrap();
    assert_eq!(json["action"], "censored");
}

#[test]
fn reload_takes_effect_for_new_messages() {
    let (state, sink) = state(&["bad"]);
    rebuild(&state.filter, ["worse"], sink.as_ref()).unwrap();

    assert!(matches!(handle_message(&state, &message("b4d")), ModerationOutcome::Allowed));
    assert!(matches!(
        handle_message(&state, &message("w0rse")),
        ModerationOutcome::Censored { .. }
    ));
}

#[test]
fn normalization_is_idempotent() {
    for text in ["Heeelloooo!!", "b..a..a..d", "ÉÉté  ", "x-x-x", "mIxEd 123 321"] {
        let once = normalize(text);
        assert_eq!(normalize(&once), once, "{text}");
    }
}

#[test]
fn console_stream_survives_unreadable_lines() {
    let (state, _) = state(&["bad"]);
    let config = Path::new("config.json");
    let input: &[&[u8]] = &[
        b"\xff\xfe\xfd\n",
        b"{\"author_id\": 1, \"author_name\": \"x\", \"content\": \"\xff\xfe\"}\n",
        b"\n",
        br#"{"author_id": 1, "author_name": "x", "content": "b4d"}"#,
    ];

    let replies: Vec<String> = input
        .iter()
        .filter_map(|line| process_line(&state, config, line))
        .collect();

    assert_eq!(replies.len(), 2);
    assert!(replies[0].contains("\"action\":\"allowed\""));
    assert!(replies[1].contains("\"action\":\"censored\""));
}

mod common;

use common::{key, type_text};
use paraphrase_lab::input::{CaptureStep, Key, KeyMap, KeyPress, ResponseBuffer};

fn feed(buffer: &mut ResponseBuffer, presses: &[KeyPress]) -> Vec<CaptureStep> {
    let map = KeyMap::german();
    presses.iter().map(|p| buffer.apply(p, &map)).collect()
}

#[test]
fn test_typing_builds_response() {
    let mut buffer = ResponseBuffer::new();
    let steps = feed(&mut buffer, &type_text("I would return it."));

    assert!(steps.iter().all(|s| *s == CaptureStep::Continue));
    assert_eq!(buffer.as_str(), "I would return it.");
}

#[test]
fn test_backspace() {
    let mut buffer = ResponseBuffer::new();
    feed(&mut buffer, &type_text("abc"));
    feed(&mut buffer, &[key(Key::Backspace)]);
    assert_eq!(buffer.as_str(), "ab");

    // Backspace on empty is a no-op
    let mut empty = ResponseBuffer::new();
    feed(&mut empty, &[key(Key::Backspace), key(Key::Backspace)]);
    assert_eq!(empty.as_str(), "");
}

#[test]
fn test_backspace_removes_whole_umlaut() {
    let mut buffer = ResponseBuffer::new();
    feed(&mut buffer, &[KeyPress::named("g"), KeyPress::named("ü")]);
    feed(&mut buffer, &[key(Key::Backspace)]);
    assert_eq!(buffer.as_str(), "g");
}

#[test]
fn test_enter_on_blank_is_ignored() {
    let mut buffer = ResponseBuffer::new();
    assert_eq!(feed(&mut buffer, &[key(Key::Enter)]), vec![CaptureStep::Continue]);

    feed(&mut buffer, &[key(Key::Space), key(Key::Space)]);
    assert_eq!(
        feed(&mut buffer, &[key(Key::Enter)]),
        vec![CaptureStep::Continue],
        "whitespace-only content must not submit"
    );
    assert_eq!(buffer.as_str(), "  ");

    feed(&mut buffer, &type_text("ok"));
    assert_eq!(feed(&mut buffer, &[key(Key::Enter)]), vec![CaptureStep::Submit]);
}

#[test]
fn test_escape_aborts() {
    let mut buffer = ResponseBuffer::new();
    feed(&mut buffer, &type_text("half an answ"));
    assert_eq!(feed(&mut buffer, &[key(Key::Escape)]), vec![CaptureStep::Abort]);
}

#[test]
fn test_shifted_german_punctuation() {
    let mut buffer = ResponseBuffer::new();
    feed(
        &mut buffer,
        &[
            KeyPress::named("j"),
            KeyPress::named("a"),
            KeyPress::named("1").shifted(),
            KeyPress::named("period").shifted(),
            KeyPress::named("8").shifted(),
        ],
    );
    assert_eq!(buffer.as_str(), "ja!:(");
}

#[test]
fn test_unrecognized_keys_ignored() {
    let mut buffer = ResponseBuffer::new();
    feed(
        &mut buffer,
        &[KeyPress::named("x"), key(Key::Other), KeyPress::named("pagedown")],
    );
    assert_eq!(buffer.as_str(), "x");
}

#[test]
fn test_no_length_limit() {
    let mut buffer = ResponseBuffer::new();
    let long = "a".repeat(5_000);
    feed(&mut buffer, &type_text(&long));
    assert_eq!(buffer.as_str().len(), 5_000);
}

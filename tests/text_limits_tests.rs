use paraphrase_lab::config::{DISPLAY_LIMIT, STORED_LIMIT};
use paraphrase_lab::outputs::text::{display_text, strip_quotes, truncate_stored};

#[test]
fn test_stored_text_untouched_when_short() {
    let text = "I would hand it to the police.";
    assert_eq!(truncate_stored(text, STORED_LIMIT), text);

    let exact = "x".repeat(STORED_LIMIT);
    assert_eq!(truncate_stored(&exact, STORED_LIMIT), exact, "exactly at the limit is not cut");
}

#[test]
fn test_stored_text_cut_with_ellipsis() {
    let long = "y".repeat(450);
    let stored = truncate_stored(&long, STORED_LIMIT);
    assert_eq!(stored.chars().count(), STORED_LIMIT + 3);
    assert!(stored.ends_with("..."));
    assert!(stored.starts_with(&"y".repeat(STORED_LIMIT)));
}

#[test]
fn test_stored_limit_counts_characters() {
    let long = "ä".repeat(250);
    let stored = truncate_stored(&long, STORED_LIMIT);
    assert_eq!(stored.chars().count(), 203);
}

#[test]
fn test_display_short_text_only_unquoted() {
    assert_eq!(display_text("\"Keep it.\"", DISPLAY_LIMIT), "Keep it.");
    assert_eq!(display_text("'Keep it.'", DISPLAY_LIMIT), "Keep it.");
    assert_eq!(display_text("  plain  ", DISPLAY_LIMIT), "plain");
}

#[test]
fn test_quote_stripping_needs_matching_pair() {
    assert_eq!(strip_quotes("\"half"), "\"half");
    assert_eq!(strip_quotes("'a\""), "'a\"");
    assert_eq!(strip_quotes("\""), "\"");
    // Double pair first, then single pair inside it
    assert_eq!(strip_quotes("\"'nested'\""), "nested");
}

#[test]
fn test_display_cuts_at_first_sentence() {
    let first = "I would take the wallet to the nearest police station right away";
    let text = format!("{}. {}", first, "z".repeat(150));
    assert!(text.chars().count() > DISPLAY_LIMIT);

    let shown = display_text(&text, DISPLAY_LIMIT);
    assert_eq!(shown, format!("{}.", first));
}

#[test]
fn test_display_hard_cut_without_sentence() {
    let text = "w".repeat(300);
    let shown = display_text(&text, DISPLAY_LIMIT);
    assert_eq!(shown, format!("{}...", "w".repeat(DISPLAY_LIMIT)));
}

#[test]
fn test_display_ignores_sentence_break_past_limit() {
    let text = format!("{}. tail", "q".repeat(150));
    let shown = display_text(&text, DISPLAY_LIMIT);
    assert_eq!(shown.chars().count(), DISPLAY_LIMIT + 3);
    assert!(shown.ends_with("..."));
}

#[test]
fn test_display_of_stored_text_bounded() {
    // Whatever comes out of storage, the screen never gets more than 123 chars
    let samples = [
        "a".repeat(500),
        format!("Short. {}", "b".repeat(400)),
        format!("\"{}\"", "c".repeat(199)),
        "d. ".repeat(90),
    ];
    for raw in samples {
        let stored = truncate_stored(&raw, STORED_LIMIT);
        assert!(stored.chars().count() <= STORED_LIMIT + 3);
        let shown = display_text(&stored, DISPLAY_LIMIT);
        assert!(shown.chars().count() <= DISPLAY_LIMIT + 3, "too long: {}", shown);
    }
}

//! Tokenizer tests.

use eldoria_parser::{InputTokenizer, ParseError};

#[test]
fn folds_case_and_splits_whitespace() {
    assert_eq!(
        InputTokenizer::tokenize("  TAKE\tQuest   Scroll ").unwrap(),
        vec!["take", "quest", "scroll"]
    );
}

#[test]
fn digits_are_allowed() {
    assert_eq!(
        InputTokenizer::tokenize("take stone 11").unwrap(),
        vec!["take", "stone", "11"]
    );
}

#[test]
fn any_punctuation_rejects_the_whole_line() {
    for (input, bad) in [("go north!", '!'), ("take map.", '.'), ("ask elda, now", ',')] {
        assert_eq!(
            InputTokenizer::tokenize(input),
            Err(ParseError::InvalidCharacter(bad)),
            "{input}"
        );
    }
}

#[test]
fn non_ascii_letters_are_rejected() {
    assert!(InputTokenizer::tokenize("go nörth").is_err());
}

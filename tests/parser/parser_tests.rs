//! Command parser tests.

use eldoria_parser::{Command, CommandParser, ParseError};

#[test]
fn go_north() {
    let command = CommandParser::new().parse_input("Go North");
    assert_eq!(
        command,
        Command {
            action: "go".to_string(),
            arguments: vec!["north".to_string()],
            valid: true,
        }
    );
}

#[test]
fn empty_and_blank_are_invalid() {
    let parser = CommandParser::new();
    assert!(!parser.parse_input("").valid);
    assert!(!parser.parse_input(" \t ").valid);
    assert_eq!(parser.parse("   "), Err(ParseError::EmptyInput));
}

#[test]
fn punctuation_is_invalid() {
    let command = CommandParser::new().parse_input("go north!");
    assert!(!command.valid);
    assert!(command.action.is_empty());
}

#[test]
fn unknown_verbs_still_parse() {
    let command = CommandParser::new().parse_input("dance wildly");
    assert!(command.valid);
    assert_eq!(command.action, "dance");
}

#[test]
fn multi_word_targets_join() {
    let command = CommandParser::new().parse_input("examine Enchanted Map");
    assert_eq!(command.target(), "enchanted map");
    assert_eq!(command.first_argument(), Some("enchanted"));
}

#[test]
fn prepositions_split_arguments() {
    let command = CommandParser::new().parse_input("ask Elda about Malakar");
    assert_eq!(
        command.split_on("about"),
        Some(("elda".to_string(), "malakar".to_string()))
    );
}

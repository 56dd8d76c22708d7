//! Vocabulary tests.

use eldoria_foundation::Direction;
use eldoria_parser::{Action, Vocabulary};

#[test]
fn aliases_map_to_canonical_actions() {
    let vocabulary = Vocabulary::standard();
    for (word, action) in [
        ("go", Action::Go),
        ("move", Action::Go),
        ("take", Action::Take),
        ("pickup", Action::Take),
        ("inventory", Action::Inventory),
        ("inv", Action::Inventory),
        ("speak", Action::Talk),
        ("solve", Action::Answer),
        ("quit", Action::Quit),
    ] {
        assert_eq!(vocabulary.lookup_verb(word), Some(action), "{word}");
    }
    assert_eq!(vocabulary.lookup_verb("dance"), None);
}

#[test]
fn every_action_has_its_verb() {
    let vocabulary = Vocabulary::standard();
    for action in Action::ALL {
        assert_eq!(vocabulary.lookup_verb(action.verb()), Some(action));
    }
}

#[test]
fn directions_and_abbreviations() {
    let vocabulary = Vocabulary::standard();
    assert_eq!(vocabulary.lookup_direction("north"), Some(Direction::North));
    assert_eq!(vocabulary.lookup_direction("w"), Some(Direction::West));
    assert_eq!(vocabulary.lookup_direction("up"), None);
}

#[test]
fn custom_verbs() {
    let mut vocabulary = Vocabulary::new();
    vocabulary.register_verb("Walk", Action::Go);
    assert_eq!(vocabulary.lookup_verb("walk"), Some(Action::Go));
    assert_eq!(vocabulary.lookup_verb("go"), None);
}

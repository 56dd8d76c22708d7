//! The Elder's House scenario: examine, take, inventory, drop, look.

use eldoria_content::EldoriaContent;
use eldoria_engine::{Engine, EngineConfig, Outcome, TITLE};
use eldoria_foundation::Examine;

use crate::{REJECTED, play_script};

#[test]
fn elders_house_round_trip() {
    let mut engine = Engine::new(EngineConfig::default(), &EldoriaContent).unwrap();
    assert_eq!(engine.world().current_location().unwrap().name(), "Elder's House");

    assert_eq!(
        engine.step("examine elda").render(),
        "The wise village elder with kind eyes and silver hair."
    );

    let taken = engine.step("take quest scroll").render();
    assert_eq!(taken, "Taken: Quest Scroll");
    let here = engine.world().current_location().unwrap();
    assert!(here.find_item("quest scroll").is_none());

    let inventory = engine.step("inventory").render();
    assert!(inventory.contains("- Quest Scroll: An ancient scroll detailing your mission"));

    engine.step("drop quest scroll");
    assert!(engine.player().inventory().is_empty());
    let look = engine.step("look").render();
    assert!(look.contains("You can see:\n- Quest Scroll"));

    let scroll = engine
        .world()
        .current_location()
        .unwrap()
        .find_item("quest scroll")
        .unwrap();
    assert_eq!(scroll.id().as_str(), "QUEST_SCROLL");
    assert_eq!(
        scroll.description(),
        "An ancient scroll detailing your mission to save Eldoria."
    );
}

#[test]
fn transcript_has_banner_prompts_and_farewell() {
    let (outcome, transcript) = play_script(EngineConfig::default(), "look\nquit\n");
    assert_eq!(outcome, Outcome::Quit);
    assert!(transcript.starts_with(&"*".repeat(60)));
    assert!(transcript.contains(&format!("Welcome to {TITLE}")));
    assert!(transcript.contains("> look\n"));
    assert!(transcript.contains("> quit\n"));
    assert!(transcript.trim_end().ends_with(&format!("Thank you for playing {TITLE}!")));
}

#[test]
fn mistakes_never_end_the_game() {
    let script = "fly away\ngo\ngo up\ntake nothing\n!!!\nlook\n";
    let (outcome, transcript) = play_script(EngineConfig::default(), script);
    assert_eq!(outcome, Outcome::Continue);
    assert_eq!(transcript.matches(REJECTED).count(), 5);
    assert!(transcript.contains("Unknown command 'fly'."));
    assert!(transcript.contains("Invalid command."));
}

#[test]
fn capacity_comes_from_config() {
    let config = EngineConfig::new().with_capacity(1);
    let script = "\
        take quest scroll
        go north
        go north
        go north
        take enchanted map
        inventory
    ";
    let (_, transcript) = play_script(config, script);
    assert!(transcript.contains("You can't carry any more items."));
    assert!(transcript.contains("- Quest Scroll"));
    assert!(!transcript.contains("Taken: Enchanted Map"));
}

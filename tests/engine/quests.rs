//! NPC conversation, quest, and puzzle tests.

use eldoria_world::DialogueState;

use crate::{engine, play};

const TO_HOLLOW: [&str; 3] = ["go north", "go north", "go north"];
const TO_HOUSE: [&str; 3] = ["go south", "go south", "go south"];

#[test]
fn elda_hands_out_the_map_quest() {
    let mut engine = engine();
    let text = engine.step("talk to elda").render();
    assert!(text.starts_with("Elda says: \"Welcome to Luminara"));
    assert!(text.contains("New quest: Bring the Enchanted Map"));
    let elda = engine.world().current_location().unwrap().find_npc("elda").unwrap();
    assert_eq!(elda.state(), DialogueState::QuestActive);
}

#[test]
fn map_for_key() {
    let mut engine = engine();
    engine.step("talk elda");
    play(&mut engine, &TO_HOLLOW);
    assert!(engine.step("take enchanted map").render().contains("Taken: Enchanted Map"));
    play(&mut engine, &TO_HOUSE);

    let text = engine.step("give enchanted map to elda").render();
    assert!(text.contains("Elda unrolls the map with trembling hands."));
    assert!(text.contains("Quest complete!"));
    assert!(text.contains("Elda gives you the Silver Key."));
    assert!(engine.player().has_item("silver key"));
    assert!(!engine.player().has_item("enchanted map"));

    let text = engine.step("talk to elda").render();
    assert!(text.contains("May the Silver Key serve you well."));
}

#[test]
fn the_key_only_turns_in_the_lair() {
    let mut engine = engine();
    play(&mut engine, &TO_HOLLOW);
    engine.step("take enchanted map");
    play(&mut engine, &TO_HOUSE);
    engine.step("give enchanted map to elda");
    assert_eq!(
        engine.step("use silver key").render(),
        "There is no suitable lock here for the Silver Key. Type 'help' for a list of commands."
    );
}

#[test]
fn gorwin_riddle() {
    let mut engine = engine();
    play(&mut engine, &TO_HOLLOW);
    assert!(
        engine
            .step("examine gorwins riddle")
            .render()
            .contains("I speak without a mouth")
    );
    assert_eq!(engine.step("answer wind").render(), "That is not the right answer.");
    assert!(engine.step("examine puzzle").render().contains("Hint: Think about"));
    assert_eq!(
        engine.step("answer an echo").render(),
        "Correct! You have solved Gorwin's Riddle."
    );
    assert_eq!(
        engine.step("solve echo").render(),
        "You have already solved Gorwin's Riddle."
    );
    assert!(engine.step("look").render().contains("Gorwin's Riddle (solved)"));
}

#[test]
fn ask_uses_topics_then_hints() {
    let mut engine = engine();
    assert_eq!(
        engine.step("ask elda about malakar").render(),
        "Elda says: \"A sorcerer who would plunge Eldoria into eternal shadow.\""
    );
    assert_eq!(
        engine.step("ask elda about the weather").render(),
        "Elda says: \"Go north from the Village Square to reach the Whispering Woods.\""
    );
    assert_eq!(
        engine.step("ask elda about the harvest").render(),
        "Elda says: \"Gorwin lives in Hermit's Hollow, at the heart of the woods.\""
    );
}

#[test]
fn status_reports_load() {
    let mut engine = engine();
    engine.step("take quest scroll");
    assert_eq!(
        engine.step("status").render(),
        "Aric is at Elder's House, carrying 1/10 items.\nEnvironment: Village of Luminara"
    );
}

//! The full journey in `demos/walkthrough.txt`.

use eldoria_engine::{EngineConfig, Outcome};

use crate::{REJECTED, play_script};

const WALKTHROUGH: &str = include_str!("../../demos/walkthrough.txt");

fn transcript() -> String {
    let (outcome, transcript) = play_script(EngineConfig::default(), WALKTHROUGH);
    assert_eq!(outcome, Outcome::Quit);
    transcript
}

#[test]
fn no_step_is_rejected() {
    let transcript = transcript();
    assert!(
        !transcript.contains(REJECTED),
        "{transcript}"
    );
}

#[test]
fn every_environment_is_visited_in_order() {
    let transcript = transcript();
    let mut from = 0;
    for environment in [
        "Whispering Woods",
        "Village of Luminara",
        "Crystal Caves",
        "Forgotten Library",
        "Echoing Mountains",
        "Shadow Marshes",
        "Sanctum of Light",
        "Malakar's Lair",
    ] {
        let entered = format!("You have entered {environment}.");
        let at = transcript[from..]
            .find(&entered)
            .unwrap_or_else(|| panic!("never entered {environment}"));
        from += at + entered.len();
    }
    assert!(!transcript.contains("You have entered Hidden Grove."));
}

#[test]
fn quests_trade_items_along_the_way() {
    let transcript = transcript();
    assert!(transcript.contains("Correct! You have solved Gorwin's Riddle."));
    assert!(transcript.contains("Elda gives you the Silver Key."));
    assert!(transcript.contains("Lyra gives you the Herbal Mixture."));
    assert!(transcript.contains("Mira gives you the Staff of Lumos."));
    assert_eq!(transcript.matches("Quest complete!").count(), 3);
}

#[test]
fn items_work_where_they_belong() {
    let transcript = transcript();
    assert!(transcript.contains("You adjust the Crystal Lens, focusing the light."));
    assert!(transcript.contains(
        "The Echo Crystal hums softly as it records the wind moaning through the Resonance Chamber."
    ));
    assert!(transcript.contains(
        "The Echo Crystal resonates, playing back: the wind moaning through the Resonance Chamber"
    ));
    assert!(transcript.contains("The air shimmers and illusions begin to fade."));
    assert!(transcript.contains("The door mechanism responds with a click."));
    assert!(transcript.contains("The Staff of Lumos pulses with brilliant light"));
    assert!(transcript.contains("Aric is at Dark Antechamber, carrying 4/10 items."));
}

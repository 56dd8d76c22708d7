//! Dispatch and feedback tests.

use eldoria_engine::{Feedback, HELP_INVITATION, Outcome};
use eldoria_foundation::Examine;

use crate::{engine, play};

#[test]
fn every_mistake_is_one_line_with_help() {
    let mut engine = engine();
    for command in [
        "",
        "go north!",
        "dance",
        "go",
        "go up",
        "examine dragon",
        "take",
        "take dragon",
        "drop dragon",
        "use dragon",
        "talk to nobody",
        "answer echo",
    ] {
        let report = engine.step(command);
        assert!(report.is_rejected(), "{command:?}");
        let text = report.render();
        assert_eq!(text.lines().count(), 1, "{command:?}");
        assert!(text.ends_with(HELP_INVITATION), "{command:?}");
        assert!(engine.is_running());
    }
}

#[test]
fn blocked_movement_changes_nothing() {
    let mut engine = engine();
    engine.step("go south");
    let before = engine.world().current_location_id();
    let report = engine.step("go south");
    assert_eq!(report.feedback, Some(Feedback::Blocked));
    assert_eq!(engine.world().current_location_id(), before);
}

#[test]
fn movement_redisplays_location() {
    let mut engine = engine();
    let text = engine.step("move north").render();
    assert!(text.starts_with("You move north."));
    assert!(text.contains("Village Square"));
    assert!(text.contains("The heart of Luminara"));
    assert!(text.contains("Exits:"));
    assert!(text.contains("- North (to Forest Heart)"));
}

#[test]
fn crossing_into_a_new_environment_is_announced() {
    let mut engine = engine();
    let text = play(&mut engine, &["go north", "go north"]);
    assert!(text.contains("You have entered Whispering Woods."));
    assert_eq!(engine.world().current_grid().unwrap().name(), "Whispering Woods");
    assert_eq!(engine.player().location(), engine.world().current_location_id());
}

#[test]
fn look_and_help_are_read_only() {
    let mut engine = engine();
    let before = engine.world().current_location_id();
    let look = engine.step("look").render();
    assert!(look.contains("Elder's House"));
    assert!(look.contains("You can see:\n- Quest Scroll"));
    assert!(look.contains("Present here:\n- Elda (quest giver)"));
    engine.step("help");
    engine.step("inventory");
    assert_eq!(engine.world().current_location_id(), before);
    assert!(engine.player().inventory().is_empty());
}

#[test]
fn examine_searches_inventory_then_room_then_people() {
    let mut engine = engine();
    assert_eq!(
        engine.step("examine elda").render(),
        "The wise village elder with kind eyes and silver hair."
    );
    assert!(
        engine
            .step("examine quest scroll")
            .render()
            .starts_with("An ancient scroll detailing your mission")
    );
    assert!(engine.step("examine me").render().contains("Your inventory is empty."));
}

#[test]
fn use_needs_the_right_place() {
    let mut engine = engine();
    play(
        &mut engine,
        &["go north", "go north", "go north", "take enchanted map"],
    );
    assert_eq!(
        engine.step("use enchanted map").feedback,
        Some(Feedback::NotUsable)
    );
}

#[test]
fn quit_is_case_insensitive() {
    let mut engine = engine();
    assert_eq!(engine.step("Quit").outcome, Outcome::Quit);
    assert!(!engine.is_running());
    assert_eq!(engine.player().name(), "Aric");
}

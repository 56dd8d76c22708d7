//! Turn tracing tests.

use eldoria_content::EldoriaContent;
use eldoria_debug::{JsonFormatter, TraceEvent, TraceFormatter, TracerConfig};
use eldoria_engine::{Engine, EngineConfig};

fn traced() -> Engine {
    let config = EngineConfig::new().with_tracer(TracerConfig::new().enabled());
    Engine::new(config, &EldoriaContent).unwrap()
}

#[test]
fn disabled_tracer_records_nothing() {
    let mut engine = crate::engine();
    engine.step("go north");
    assert!(engine.tracer().buffer().is_empty());
}

#[test]
fn each_turn_is_bracketed() {
    let mut engine = traced();
    engine.step("look");
    engine.step("take quest scroll");

    let turn_two = engine.tracer().buffer().records_for_turn(2);
    assert!(matches!(turn_two.first().map(|r| &r.event), Some(TraceEvent::TurnStart { .. })));
    assert!(matches!(
        turn_two.last().map(|r| &r.event),
        Some(TraceEvent::TurnEnd { turn: 2, rejected: false })
    ));
    assert!(turn_two.iter().any(|r| matches!(
        &r.event,
        TraceEvent::ItemTransferred { item, to, .. } if item == "QUEST_SCROLL" && to == "inventory"
    )));
}

#[test]
fn cross_grid_moves_are_flagged() {
    let mut engine = traced();
    engine.step("go north");
    engine.step("go north");
    let moves: Vec<bool> = engine
        .tracer()
        .buffer()
        .iter()
        .filter_map(|r| match r.event {
            TraceEvent::Moved { grid_changed, .. } => Some(grid_changed),
            _ => None,
        })
        .collect();
    assert_eq!(moves, vec![false, true]);
}

#[test]
fn records_serialize_as_json() {
    let mut engine = traced();
    engine.step("go sideways");
    let record = engine.tracer().buffer().last().unwrap();
    let json = JsonFormatter::new().format(record);
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["type"], "turn-end");
    assert_eq!(value["rejected"], true);
}

#[test]
fn summary_counts_the_session() {
    let mut engine = traced();
    engine.step("go north");
    engine.step("go north");
    engine.step("dance");
    let summary = engine.tracer().summary();
    assert!(summary.starts_with("trace: "));
    assert!(summary.contains("over 3 turns (1..=3)"));
    assert!(summary.contains("moved 2"));
    assert!(summary.contains("command-rejected 1"));
}

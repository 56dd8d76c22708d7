//! `examine`.

use eldoria_foundation::{Examine, Result, names_match};
use eldoria_parser::{Action, Command};

use super::current_location;
use crate::dispatcher::TurnContext;
use crate::report::{Feedback, Report};

/// Words that name the player.
const SELF_WORDS: [&str; 3] = ["me", "self", "myself"];

/// Describes the first thing matching the target name.
///
/// Searched in order: inventory, location items, NPCs, the player, the
/// location's puzzle.
pub fn examine(ctx: &mut TurnContext<'_>, command: &Command) -> Result<Report> {
    let name = command.target();
    if name.is_empty() {
        return Ok(Report::feedback(Feedback::MissingTarget(Action::Examine)));
    }
    let state = &*ctx.state;

    if let Some(item) = state.player.item(&name) {
        return Ok(Report::text(item.examine()));
    }

    let location = current_location(&state.world)?;
    if let Some(item) = location.find_item(&name) {
        return Ok(Report::text(item.examine()));
    }
    if let Some(npc) = location.find_npc(&name) {
        return Ok(Report::text(npc.examine()));
    }
    if SELF_WORDS.contains(&name.as_str()) || state.player.matches_name(&name) {
        return Ok(Report::text(state.player.examine()));
    }
    if let Some(puzzle) = location.puzzle() {
        if name == "puzzle" || names_match(puzzle.name(), &name) {
            return Ok(Report::text(puzzle.prompt()));
        }
    }

    Ok(Report::feedback(Feedback::NotHere))
}

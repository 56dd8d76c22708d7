//! `answer`: forwards the player's words to the puzzle in the current location.

use eldoria_foundation::Result;
use eldoria_parser::{Action, Command};

use super::current_location_mut;
use crate::dispatcher::TurnContext;
use crate::report::{Feedback, Report};

/// Attempts the current location's puzzle.
pub fn answer(ctx: &mut TurnContext<'_>, command: &Command) -> Result<Report> {
    let location = current_location_mut(&mut ctx.state.world)?;
    let Some(puzzle) = location.puzzle_mut() else {
        return Ok(Report::feedback(Feedback::NoPuzzle));
    };
    let name = puzzle.name().to_string();
    if puzzle.is_solved() {
        return Ok(Report::text(format!("You have already solved {name}.")));
    }

    let attempt = command.target();
    if attempt.is_empty() {
        return Ok(Report::feedback(Feedback::MissingTarget(Action::Answer)));
    }
    let solved = puzzle.attempt(&attempt);
    ctx.tracer.puzzle_attempt(&name, solved);

    if solved {
        Ok(Report::text(format!("Correct! You have solved {name}.")))
    } else {
        Ok(Report::text("That is not the right answer."))
    }
}

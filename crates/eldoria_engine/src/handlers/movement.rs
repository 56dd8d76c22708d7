//! `go` and `look`.

use eldoria_foundation::{ErrorKind, Examine, Result};
use eldoria_parser::Command;

use super::describe_current;
use crate::dispatcher::TurnContext;
use crate::report::{Feedback, Report};

/// Moves through an exit of the current location.
pub fn go(ctx: &mut TurnContext<'_>, command: &Command) -> Result<Report> {
    let Some(word) = command.first_argument() else {
        return Ok(Report::feedback(Feedback::MissingDirection));
    };
    let Some(direction) = ctx.vocabulary.lookup_direction(word) else {
        return Ok(Report::feedback(Feedback::InvalidDirection(word.to_string())));
    };

    let state = &mut *ctx.state;
    let movement = match state.world.go(direction) {
        Ok(movement) => movement,
        Err(err) if matches!(err.kind, ErrorKind::NoExit(_)) => {
            return Ok(Report::feedback(Feedback::Blocked));
        }
        Err(err) => return Err(err),
    };
    state.player.set_location(movement.to);

    let from = state.world.location(movement.from).map_or("", Examine::name);
    let to = state.world.location(movement.to).map_or("", Examine::name);
    ctx.tracer
        .moved(direction, from, to, movement.grid_changed);

    let mut report = Report::text(format!("You move {direction}."));
    if movement.grid_changed {
        if let Some(grid) = state.world.current_grid() {
            report.push(format!("You have entered {}.", grid.name()));
        }
    }
    report.lines.extend(describe_current(&state.world)?);
    Ok(report)
}

/// Redisplays the current location.
pub fn look(ctx: &mut TurnContext<'_>, _command: &Command) -> Result<Report> {
    Ok(Report::lines(describe_current(&ctx.state.world)?))
}

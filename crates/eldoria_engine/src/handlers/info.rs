//! `help`, `quit` and `status`.

use eldoria_foundation::{Error, ErrorKind, Examine, Result};
use eldoria_parser::Command;

use super::current_location;
use crate::dispatcher::TurnContext;
use crate::report::Report;

const HELP: &[&str] = &[
    "=== AVAILABLE COMMANDS ===",
    "",
    "Movement:",
    "  go [direction]     - Move in specified direction (north, south, east, west)",
    "  move [direction]   - Alternative to 'go'",
    "",
    "Environment:",
    "  look               - Look around your current location",
    "  examine [target]   - Look at an item, person, or feature",
    "",
    "Item Management:",
    "  take/pickup [item] - Pick up an item",
    "  drop [item]        - Drop an item from your inventory",
    "  inventory/inv      - Show your inventory",
    "  use [item]         - Use an item",
    "",
    "People and Puzzles:",
    "  talk [name]        - Talk to someone",
    "  ask [name] about [topic] - Ask someone about a topic",
    "  give [item] to [name]    - Give an item to someone",
    "  answer [words]     - Answer the puzzle here",
    "",
    "System:",
    "  status             - Show where you are and what you carry",
    "  help               - Show this help message",
    "  quit               - Exit the game",
];

/// Lists every command.
pub fn help(_ctx: &mut TurnContext<'_>, _command: &Command) -> Result<Report> {
    Ok(Report::lines(HELP.iter().map(ToString::to_string).collect()))
}

/// Ends the run.
pub fn quit(_ctx: &mut TurnContext<'_>, _command: &Command) -> Result<Report> {
    Ok(Report::quit())
}

/// Reports position, environment and inventory load.
pub fn status(ctx: &mut TurnContext<'_>, _command: &Command) -> Result<Report> {
    let world = &ctx.state.world;
    let location = current_location(world)?;
    let grid = world
        .current_grid()
        .ok_or_else(|| Error::new(ErrorKind::NoCurrentLocation))?;
    let mut report = Report::text(ctx.state.player.status(location.name()));
    report.push(format!("Environment: {}", grid.name()));
    Ok(report)
}

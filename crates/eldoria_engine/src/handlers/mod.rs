//! Command handlers, one module per concern.
//!
//! Every handler has the [`Handler`](crate::dispatcher::Handler) signature.
//! Read-only handlers never mutate state.

pub mod examine;
pub mod info;
pub mod items;
pub mod movement;
pub mod puzzle;
pub mod social;

use eldoria_foundation::{Error, ErrorKind, Examine, Result};
use eldoria_world::{Location, World};

/// Width of the rule drawn around a location heading.
const RULE_WIDTH: usize = 50;

pub(crate) fn current_location(world: &World) -> Result<&Location> {
    world
        .current_location()
        .ok_or_else(|| Error::new(ErrorKind::NoCurrentLocation))
}

pub(crate) fn current_location_mut(world: &mut World) -> Result<&mut Location> {
    world
        .current_location_mut()
        .ok_or_else(|| Error::new(ErrorKind::NoCurrentLocation))
}

/// Heading plus full description of the current location.
pub(crate) fn describe_current(world: &World) -> Result<Vec<String>> {
    let location = current_location(world)?;
    let id = world
        .current_location_id()
        .ok_or_else(|| Error::new(ErrorKind::NoCurrentLocation))?;
    let description = world
        .full_description(id)
        .ok_or_else(|| Error::unknown_location(id))?;
    let rule = "=".repeat(RULE_WIDTH);
    Ok(vec![
        rule.clone(),
        location.name().to_string(),
        rule,
        description,
    ])
}

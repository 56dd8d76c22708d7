//! `take`, `drop`, `inventory` and `use`.

use eldoria_foundation::{Error, ErrorKind, Examine, Result};
use eldoria_parser::{Action, Command};
use eldoria_world::{TransferError, drop_item, take_item};

use super::current_location_mut;
use crate::dispatcher::TurnContext;
use crate::report::{Feedback, Report};

/// Name of the inventory in trace records.
const INVENTORY: &str = "inventory";

fn transfer_feedback(err: TransferError) -> Result<Report> {
    let feedback = match err {
        TransferError::NotHere => Feedback::NotHere,
        TransferError::NotCarried => Feedback::NotCarried,
        TransferError::InventoryFull => Feedback::InventoryFull,
        TransferError::Invariant(err) => return Err(err),
    };
    Ok(Report::feedback(feedback))
}

/// Moves an item from the current location into the inventory.
pub fn take(ctx: &mut TurnContext<'_>, command: &Command) -> Result<Report> {
    let name = command.target();
    if name.is_empty() {
        return Ok(Report::feedback(Feedback::MissingTarget(Action::Take)));
    }
    let state = &mut *ctx.state;
    let location = current_location_mut(&mut state.world)?;

    match take_item(location, &mut state.player, &name) {
        Ok(receipt) => {
            ctx.tracer
                .item_transferred(receipt.item.as_str(), location.name(), INVENTORY);
            Ok(Report::text(format!("Taken: {}", receipt.name)))
        }
        Err(err) => transfer_feedback(err),
    }
}

/// Moves an item from the inventory into the current location.
pub fn drop(ctx: &mut TurnContext<'_>, command: &Command) -> Result<Report> {
    let name = command.target();
    if name.is_empty() {
        return Ok(Report::feedback(Feedback::MissingTarget(Action::Drop)));
    }
    let state = &mut *ctx.state;
    let location = current_location_mut(&mut state.world)?;

    match drop_item(location, &mut state.player, &name) {
        Ok(receipt) => {
            ctx.tracer
                .item_transferred(receipt.item.as_str(), INVENTORY, location.name());
            Ok(Report::text(format!("Dropped: {}", receipt.name)))
        }
        Err(err) => transfer_feedback(err),
    }
}

/// Lists carried items.
pub fn inventory(ctx: &mut TurnContext<'_>, _command: &Command) -> Result<Report> {
    Ok(Report::text(ctx.state.player.inventory_description()))
}

/// Invokes a carried item's use effect.
pub fn use_item(ctx: &mut TurnContext<'_>, command: &Command) -> Result<Report> {
    let name = command.target();
    if name.is_empty() {
        return Ok(Report::feedback(Feedback::MissingTarget(Action::Use)));
    }
    let state = &mut *ctx.state;

    let Some(item) = state.player.item_mut(&name) else {
        return Ok(Report::feedback(Feedback::NotCarried));
    };
    let id = item.id().clone();
    let Some(usable) = item.usable_mut() else {
        return Ok(Report::feedback(Feedback::NotUsable));
    };
    let context = state
        .world
        .use_context()
        .ok_or_else(|| Error::new(ErrorKind::NoCurrentLocation))?;

    if !usable.can_use(&context) {
        ctx.tracer.item_used(id.as_str(), false);
        return Ok(Report::feedback(Feedback::CannotUseHere(
            usable.refusal().to_string(),
        )));
    }
    let outcome = usable.apply(&context);
    ctx.tracer.item_used(id.as_str(), true);
    Ok(Report::text(outcome))
}

//! Moving items between a location and the player's inventory.
//!
//! Each transfer either completes or leaves both containers as they were.

use log::debug;
use thiserror::Error;

use eldoria_foundation::{Error, Examine};

use crate::item::ItemId;
use crate::location::Location;
use crate::player::Player;

/// Why a transfer did not happen.
#[derive(Debug, Error)]
pub enum TransferError {
    /// No item with that name in the location.
    #[error("no such item here")]
    NotHere,
    /// No item with that name in the inventory.
    #[error("no such item carried")]
    NotCarried,
    /// The inventory is at capacity.
    #[error("inventory full")]
    InventoryFull,
    /// The containers disagree about where an item is.
    #[error(transparent)]
    Invariant(#[from] Error),
}

/// What was moved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Receipt {
    /// Id of the moved item.
    pub item: ItemId,
    /// Display name of the moved item.
    pub name: String,
}

/// Moves the named item from `location` into the inventory.
///
/// The item is removed from the location first and then added to the
/// inventory. `Item` is an owned value, so the location has to give it up
/// before the inventory can hold it, and it can never sit in both. If the
/// inventory refuses it, it goes back into the location at its original
/// index, so the room listing keeps its order.
///
/// # Errors
///
/// `NotHere` if no item matches, `InventoryFull` if there is no room.
/// Neither container changes on error.
pub fn take_item(location: &mut Location, player: &mut Player, name: &str) -> Result<Receipt, TransferError> {
    let index = location.find_item_index(name).ok_or(TransferError::NotHere)?;
    if player.is_full() {
        return Err(TransferError::InventoryFull);
    }

    let id = location.items()[index].id().clone();
    let item = location
        .remove_item_by_id(&id)
        .ok_or_else(|| Error::invariant(format!("item {id} vanished from {}", location.name())))?;
    let receipt = Receipt {
        item: id,
        name: item.name().to_string(),
    };

    if let Err(item) = player.try_add_item(item) {
        location.restore_item(index, item);
        return Err(TransferError::InventoryFull);
    }

    debug!("took {} from {}", receipt.item, location.name());
    Ok(receipt)
}

/// Moves the named item from the inventory into `location`.
///
/// # Errors
///
/// `NotCarried` if no carried item matches.
pub fn drop_item(location: &mut Location, player: &mut Player, name: &str) -> Result<Receipt, TransferError> {
    let item = player.remove_item(name).ok_or(TransferError::NotCarried)?;
    let receipt = Receipt {
        item: item.id().clone(),
        name: item.name().to_string(),
    };
    location.add_item(item);
    debug!("dropped {} in {}", receipt.item, location.name());
    Ok(receipt)
}

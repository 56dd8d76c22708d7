//! The player and their inventory.

use std::fmt::Write;

use eldoria_foundation::{Entity, Examine, LocationId};

use crate::item::{Item, ItemId};

/// Inventory capacity used when none is configured.
pub const DEFAULT_CAPACITY: usize = 10;

/// The player: a name, an inventory, and where they stand.
#[derive(Debug)]
pub struct Player {
    entity: Entity,
    inventory: Vec<Item>,
    capacity: usize,
    location: Option<LocationId>,
}

impl Player {
    /// Creates a player with the default capacity.
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            entity: Entity::new(name, description),
            inventory: Vec::new(),
            capacity: DEFAULT_CAPACITY,
            location: None,
        }
    }

    /// Sets the inventory capacity.
    #[must_use]
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Returns the inventory capacity.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Where the player stands.
    #[must_use]
    pub fn location(&self) -> Option<LocationId> {
        self.location
    }

    /// Moves the player.
    pub fn set_location(&mut self, location: LocationId) {
        self.location = Some(location);
    }

    // --- Inventory ---

    /// Whether the inventory is at capacity.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.inventory.len() >= self.capacity
    }

    /// Adds an item, handing it back if the inventory is full.
    ///
    /// # Errors
    ///
    /// Returns the item unchanged when there is no room.
    pub fn try_add_item(&mut self, mut item: Item) -> Result<(), Item> {
        if self.is_full() {
            return Err(item);
        }
        debug_assert!(
            self.inventory.iter().all(|held| held.id() != item.id()),
            "item {} already carried",
            item.id()
        );
        item.set_container(None);
        self.inventory.push(item);
        Ok(())
    }

    /// Removes the first carried item whose name matches.
    pub fn remove_item(&mut self, name: &str) -> Option<Item> {
        let index = self.inventory.iter().position(|item| item.matches_name(name))?;
        Some(self.inventory.remove(index))
    }

    /// Removes the carried item with the given id.
    pub fn remove_item_by_id(&mut self, id: &ItemId) -> Option<Item> {
        let index = self.inventory.iter().position(|item| item.id() == id)?;
        Some(self.inventory.remove(index))
    }

    /// First carried item whose name matches.
    #[must_use]
    pub fn item(&self, name: &str) -> Option<&Item> {
        self.inventory.iter().find(|item| item.matches_name(name))
    }

    /// First carried item whose name matches, mutably.
    pub fn item_mut(&mut self, name: &str) -> Option<&mut Item> {
        self.inventory.iter_mut().find(|item| item.matches_name(name))
    }

    /// Whether an item with this name is carried.
    #[must_use]
    pub fn has_item(&self, name: &str) -> bool {
        self.item(name).is_some()
    }

    /// Whether an item with this id is carried.
    #[must_use]
    pub fn has_item_id(&self, id: &ItemId) -> bool {
        self.inventory.iter().any(|item| item.id() == id)
    }

    /// Carried items, in acquisition order.
    #[must_use]
    pub fn inventory(&self) -> &[Item] {
        &self.inventory
    }

    /// One `- name: description` line per carried item.
    #[must_use]
    pub fn inventory_description(&self) -> String {
        if self.inventory.is_empty() {
            return "Your inventory is empty.".to_string();
        }
        let mut text = String::from("Inventory:");
        for item in &self.inventory {
            let _ = write!(text, "\n- {}: {}", item.name(), item.description());
        }
        text
    }

    /// Summary for the `status` command.
    #[must_use]
    pub fn status(&self, location_name: &str) -> String {
        format!(
            "{} is at {location_name}, carrying {}/{} items.",
            self.name(),
            self.inventory.len(),
            self.capacity
        )
    }
}

impl Examine for Player {
    fn entity(&self) -> &Entity {
        &self.entity
    }

    fn examine(&self) -> String {
        format!("{}\n{}", self.description(), self.inventory_description())
    }
}

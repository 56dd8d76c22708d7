//! Locations: the nodes of the world graph.

use std::fmt::Write;

use log::debug;

use eldoria_foundation::{Direction, Entity, Error, Examine, LocationId, Result};

use crate::item::{Item, ItemId};
use crate::npc::Npc;
use crate::puzzle::Puzzle;

/// A single place the player can stand in.
///
/// Exits are handles into the world arena and never own their targets.
/// Items, NPCs and the puzzle are owned by the location.
#[derive(Debug)]
pub struct Location {
    id: Option<LocationId>,
    entity: Entity,
    exits: [Option<LocationId>; 4],
    items: Vec<Item>,
    npcs: Vec<Npc>,
    puzzle: Option<Box<dyn Puzzle>>,
}

impl Location {
    /// Creates an empty location with no exits.
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: None,
            entity: Entity::new(name, description),
            exits: [None; 4],
            items: Vec::new(),
            npcs: Vec::new(),
            puzzle: None,
        }
    }

    /// Builder form of [`Location::add_item`].
    #[must_use]
    pub fn with_item(mut self, item: Item) -> Self {
        self.add_item(item);
        self
    }

    /// Builder form of [`Location::add_npc`].
    #[must_use]
    pub fn with_npc(mut self, npc: Npc) -> Self {
        self.add_npc(npc);
        self
    }

    /// Builder form of [`Location::set_puzzle`].
    #[must_use]
    pub fn with_puzzle(mut self, puzzle: impl Puzzle + 'static) -> Self {
        self.set_puzzle(Box::new(puzzle));
        self
    }

    /// Returns this location's handle, once it has been placed in a grid.
    #[must_use]
    pub fn id(&self) -> Option<LocationId> {
        self.id
    }

    /// Assigns the handle and re-stamps every held item.
    pub(crate) fn place(&mut self, id: LocationId) {
        self.id = Some(id);
        for item in &mut self.items {
            item.set_container(Some(id));
        }
    }

    // --- Exits ---

    /// Links an exit.
    ///
    /// Does not create the reciprocal exit.
    ///
    /// # Errors
    ///
    /// Returns `ExitOccupied` if the slot is already set; the existing
    /// target is left unchanged.
    pub fn add_exit(&mut self, direction: Direction, target: LocationId) -> Result<()> {
        let slot = &mut self.exits[direction.slot()];
        if slot.is_some() {
            return Err(Error::exit_occupied(self.id, direction));
        }
        *slot = Some(target);
        Ok(())
    }

    /// Returns the linked location, if any.
    #[must_use]
    pub fn get_exit(&self, direction: Direction) -> Option<LocationId> {
        self.exits[direction.slot()]
    }

    /// Iterates over set exits in north, east, south, west order.
    pub fn exits(&self) -> impl Iterator<Item = (Direction, LocationId)> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(|dir| self.get_exit(dir).map(|target| (dir, target)))
    }

    // --- Items ---

    /// Appends an item and points its container back at this location.
    pub fn add_item(&mut self, mut item: Item) {
        item.set_container(self.id);
        self.items.push(item);
    }

    /// Re-inserts an item at a given position, undoing an earlier removal.
    pub fn restore_item(&mut self, index: usize, mut item: Item) {
        item.set_container(self.id);
        let index = index.min(self.items.len());
        self.items.insert(index, item);
    }

    /// Removes the first item whose name matches.
    ///
    /// Two items sharing a display name are told apart by iteration order
    /// only; use [`Location::remove_item_by_id`] when the id is known.
    pub fn remove_item(&mut self, name: &str) -> Option<Item> {
        let index = self.find_item_index(name)?;
        Some(self.take_at(index))
    }

    /// Removes the item with the given id.
    pub fn remove_item_by_id(&mut self, id: &ItemId) -> Option<Item> {
        let index = self.items.iter().position(|item| item.id() == id)?;
        Some(self.take_at(index))
    }

    fn take_at(&mut self, index: usize) -> Item {
        let mut item = self.items.remove(index);
        item.set_container(None);
        debug!("removed {} from {}", item.id(), self.entity.name());
        item
    }

    /// Position of the first item whose name matches.
    #[must_use]
    pub fn find_item_index(&self, name: &str) -> Option<usize> {
        self.items.iter().position(|item| item.matches_name(name))
    }

    /// First item whose name matches.
    #[must_use]
    pub fn find_item(&self, name: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.matches_name(name))
    }

    /// Returns the items, in insertion order.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    // --- NPCs ---

    /// Appends an NPC. Duplicate names are allowed.
    pub fn add_npc(&mut self, npc: Npc) {
        self.npcs.push(npc);
    }

    /// First NPC whose name matches.
    #[must_use]
    pub fn find_npc(&self, name: &str) -> Option<&Npc> {
        self.npcs.iter().find(|npc| npc.matches_name(name))
    }

    /// First NPC whose name matches, mutably.
    pub fn find_npc_mut(&mut self, name: &str) -> Option<&mut Npc> {
        self.npcs.iter_mut().find(|npc| npc.matches_name(name))
    }

    /// Returns the NPCs, in insertion order.
    #[must_use]
    pub fn npcs(&self) -> &[Npc] {
        &self.npcs
    }

    // --- Puzzle ---

    /// Sets or replaces the puzzle.
    pub fn set_puzzle(&mut self, puzzle: Box<dyn Puzzle>) {
        self.puzzle = Some(puzzle);
    }

    /// Returns the puzzle, if any.
    #[must_use]
    pub fn puzzle(&self) -> Option<&dyn Puzzle> {
        self.puzzle.as_deref()
    }

    /// Returns the puzzle mutably, if any.
    pub fn puzzle_mut(&mut self) -> Option<&mut (dyn Puzzle + 'static)> {
        self.puzzle.as_deref_mut()
    }

    // --- Description ---

    /// Composes the description, items, NPCs, exits and puzzle, in that order.
    ///
    /// Empty sections are omitted. `exit_name` resolves an exit target to
    /// the name shown in parentheses.
    pub fn full_description<'w>(&self, exit_name: impl Fn(LocationId) -> Option<&'w str>) -> String {
        let mut desc = self.entity.description().to_string();

        if !self.items.is_empty() {
            desc.push_str("\n\nYou can see:");
            for item in &self.items {
                let _ = write!(desc, "\n- {}", item.name());
            }
        }

        if !self.npcs.is_empty() {
            desc.push_str("\n\nPresent here:");
            for npc in &self.npcs {
                let _ = write!(desc, "\n- {} ({})", npc.name(), npc.role().label());
            }
        }

        if self.exits().next().is_some() {
            desc.push_str("\n\nExits:");
            for (direction, target) in self.exits() {
                let target_name = exit_name(target).unwrap_or("somewhere unknown");
                let _ = write!(desc, "\n- {} (to {target_name})", direction.label());
            }
        }

        if let Some(puzzle) = &self.puzzle {
            let _ = write!(desc, "\n\nThere appears to be a puzzle here: {}", puzzle.name());
            if puzzle.is_solved() {
                desc.push_str(" (solved)");
            }
        }

        desc
    }
}

impl Examine for Location {
    fn entity(&self) -> &Entity {
        &self.entity
    }
}

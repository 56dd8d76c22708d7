//! Portable items and the "usable" capability.

use std::fmt;

use eldoria_foundation::{Entity, Examine, LocationId};

/// Unique item identifier (for example `QUEST_SCROLL`).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(String);

impl ItemId {
    /// Creates a new item id.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Where an item is being used, as seen by its use effect.
#[derive(Clone, Copy, Debug)]
pub struct UseContext<'a> {
    /// Name of the current environment (grid).
    pub environment: &'a str,
    /// Name of the current location.
    pub location: &'a str,
    /// Handle of the current location.
    pub location_id: LocationId,
}

type UsePredicate = Box<dyn Fn(&UseContext<'_>) -> bool>;
type UseEffect = Box<dyn FnMut(&UseContext<'_>) -> String>;

fn usable_anywhere(_: &UseContext<'_>) -> bool {
    true
}

/// Capability record attached to items that can be used.
///
/// The engine checks for the presence of this record instead of asking
/// what kind of item it holds.
pub struct Usable {
    can_use: UsePredicate,
    effect: UseEffect,
    refusal: String,
}

impl Usable {
    /// Creates a capability that is usable everywhere with the given effect.
    pub fn new(effect: impl FnMut(&UseContext<'_>) -> String + 'static) -> Self {
        Self {
            can_use: Box::new(usable_anywhere),
            effect: Box::new(effect),
            refusal: "You can't use that here.".to_string(),
        }
    }

    /// Restricts where the item can be used.
    #[must_use]
    pub fn when(mut self, predicate: impl Fn(&UseContext<'_>) -> bool + 'static) -> Self {
        self.can_use = Box::new(predicate);
        self
    }

    /// Sets the message shown when the item can't be used here.
    #[must_use]
    pub fn with_refusal(mut self, refusal: impl Into<String>) -> Self {
        self.refusal = refusal.into();
        self
    }

    /// Returns true if the item can be used in this context.
    #[must_use]
    pub fn can_use(&self, context: &UseContext<'_>) -> bool {
        (self.can_use)(context)
    }

    /// Invokes the effect and returns its outcome text.
    pub fn apply(&mut self, context: &UseContext<'_>) -> String {
        (self.effect)(context)
    }

    /// Message shown when [`Usable::can_use`] is false.
    #[must_use]
    pub fn refusal(&self) -> &str {
        &self.refusal
    }
}

impl fmt::Debug for Usable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Usable")
            .field("refusal", &self.refusal)
            .finish_non_exhaustive()
    }
}

/// A portable entity.
///
/// Owned by exactly one container at a time: a location's item list or the
/// player's inventory. `container` is `Some` only while a placed location
/// holds the item.
#[derive(Debug)]
pub struct Item {
    id: ItemId,
    entity: Entity,
    container: Option<LocationId>,
    usable: Option<Usable>,
}

impl Item {
    /// Creates a new item that is not yet placed anywhere.
    #[must_use]
    pub fn new(
        id: impl Into<ItemId>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            entity: Entity::new(name, description),
            container: None,
            usable: None,
        }
    }

    /// Attaches the usable capability.
    #[must_use]
    pub fn with_usable(mut self, usable: Usable) -> Self {
        self.usable = Some(usable);
        self
    }

    /// Returns the item id.
    #[must_use]
    pub fn id(&self) -> &ItemId {
        &self.id
    }

    /// Returns the location currently holding this item, if any.
    #[must_use]
    pub fn container(&self) -> Option<LocationId> {
        self.container
    }

    pub(crate) fn set_container(&mut self, container: Option<LocationId>) {
        self.container = container;
    }

    /// Returns the usable capability, if present.
    #[must_use]
    pub fn usable(&self) -> Option<&Usable> {
        self.usable.as_ref()
    }

    /// Returns the usable capability mutably, if present.
    pub fn usable_mut(&mut self) -> Option<&mut Usable> {
        self.usable.as_mut()
    }
}

impl From<String> for ItemId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Examine for Item {
    fn entity(&self) -> &Entity {
        &self.entity
    }

    fn examine(&self) -> String {
        format!("{}\nID: {}", self.entity.description(), self.id)
    }
}

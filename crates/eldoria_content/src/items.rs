//! Items of Eldoria and where their powers work.

use eldoria_world::{Item, Usable, UseContext};

use crate::environment::Environment;

/// The location where the Silver Key fits.
pub const LAIR_DOOR: &str = "Dark Antechamber";

fn in_environment(env: Environment) -> impl Fn(&UseContext<'_>) -> bool {
    move |context| context.environment == env.name()
}

/// Describes the mission; not usable.
#[must_use]
pub fn quest_scroll() -> Item {
    Item::new(
        "QUEST_SCROLL",
        "Quest Scroll",
        "An ancient scroll detailing your mission to save Eldoria.",
    )
}

/// Gorwin's map; Elda's quest item.
#[must_use]
pub fn enchanted_map() -> Item {
    Item::new(
        "ENCHANTED_MAP",
        "Enchanted Map",
        "A magical map that seems to shift and change as you watch.",
    )
}

/// Focuses light, but only where crystals gather it.
#[must_use]
pub fn crystal_lens() -> Item {
    Item::new(
        "CRYSTAL_LENS",
        "Crystal Lens",
        "A finely crafted lens that can focus and redirect light.",
    )
    .with_usable(
        Usable::new(|_| "You adjust the Crystal Lens, focusing the light.".to_string())
            .when(in_environment(Environment::Caves))
            .with_refusal("There isn't enough light here to use the Crystal Lens."),
    )
}

/// Dispels the illusions of the marshes.
#[must_use]
pub fn herbal_mixture() -> Item {
    Item::new(
        "HERBAL_MIXTURE",
        "Herbal Mixture",
        "A mysterious concoction that can reveal what is hidden.",
    )
    .with_usable(
        Usable::new(|_| {
            "You use the Herbal Mixture. The air shimmers and illusions begin to fade.".to_string()
        })
        .when(in_environment(Environment::Marshes))
        .with_refusal("There are no illusions here to dispel."),
    )
}

/// Mira's reward; answers only to Malakar's presence.
#[must_use]
pub fn staff_of_lumos() -> Item {
    Item::new(
        "STAFF_OF_LUMOS",
        "Staff of Lumos",
        "An ancient staff radiating with powerful light energy.",
    )
    .with_usable(
        Usable::new(|_| {
            "The Staff of Lumos pulses with brilliant light, its power ready to be unleashed."
                .to_string()
        })
        .when(in_environment(Environment::Lair))
        .with_refusal(
            "The Staff of Lumos cannot be used here. It seems to respond only to Malakar's presence.",
        ),
    )
}

/// Records the first sound it hears in the mountains and replays it after.
#[must_use]
pub fn echo_crystal() -> Item {
    let mut recorded: Option<String> = None;
    Item::new(
        "ECHO_CRYSTAL",
        "Echo Crystal",
        "A crystalline structure that can record and replay sounds.",
    )
    .with_usable(
        Usable::new(move |context| {
            if let Some(sound) = &recorded {
                return format!("The Echo Crystal resonates, playing back: {sound}");
            }
            let sound = format!("the wind moaning through the {}", context.location);
            let line = format!("The Echo Crystal hums softly as it records {sound}.");
            recorded = Some(sound);
            line
        })
        .when(in_environment(Environment::Mountains))
        .with_refusal("The acoustics here aren't suitable for using the Echo Crystal."),
    )
}

/// Elda's reward; opens the door to Malakar's lair.
#[must_use]
pub fn silver_key() -> Item {
    Item::new(
        "SILVER_KEY",
        "Silver Key",
        "An ornate silver key with mysterious markings.",
    )
    .with_usable(
        Usable::new(|_| {
            "You insert the Silver Key into the lock. The door mechanism responds with a click."
                .to_string()
        })
        .when(|context| context.location == LAIR_DOOR)
        .with_refusal("There is no suitable lock here for the Silver Key."),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use eldoria_foundation::{GridId, LocationId};

    fn at(environment: Environment, location: &'static str) -> UseContext<'static> {
        UseContext {
            environment: environment.name(),
            location,
            location_id: LocationId::new(GridId(0), 0),
        }
    }

    fn usable(item: &mut Item) -> &mut Usable {
        item.usable_mut().unwrap()
    }

    #[test]
    fn plain_items_have_no_use() {
        assert!(quest_scroll().usable().is_none());
        assert!(enchanted_map().usable().is_none());
    }

    #[test]
    fn lens_works_only_in_caves() {
        let mut lens = crystal_lens();
        let lens = usable(&mut lens);
        assert!(!lens.can_use(&at(Environment::Village, "Village Square")));
        assert!(lens.can_use(&at(Environment::Caves, "Central Cavern")));
        assert_eq!(
            lens.refusal(),
            "There isn't enough light here to use the Crystal Lens."
        );
    }

    #[test]
    fn key_works_only_at_the_door() {
        let mut key = silver_key();
        let key = usable(&mut key);
        assert!(key.can_use(&at(Environment::Lair, LAIR_DOOR)));
        assert!(!key.can_use(&at(Environment::Lair, "Corrupted Hall")));
    }

    #[test]
    fn staff_and_mixture_are_bound_to_their_regions() {
        let mut staff = staff_of_lumos();
        assert!(usable(&mut staff).can_use(&at(Environment::Lair, "Shadow Throne")));
        assert!(!usable(&mut staff).can_use(&at(Environment::Sanctum, "Central Sanctum")));

        let mut mixture = herbal_mixture();
        assert!(usable(&mut mixture).can_use(&at(Environment::Marshes, "Illusion Path")));
        assert!(!usable(&mut mixture).can_use(&at(Environment::Woods, "Forest Heart")));
    }

    #[test]
    fn echo_crystal_records_then_replays() {
        let mut crystal = echo_crystal();
        let crystal = usable(&mut crystal);
        let chamber = at(Environment::Mountains, "Echo Chamber");
        assert!(crystal.can_use(&chamber));

        let first = crystal.apply(&chamber);
        assert!(first.contains("records the wind moaning through the Echo Chamber"));

        let peak = at(Environment::Mountains, "Mountain Peak");
        assert_eq!(
            crystal.apply(&peak),
            "The Echo Crystal resonates, playing back: the wind moaning through the Echo Chamber"
        );
    }
}

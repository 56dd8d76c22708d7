//! Inventory capacity and take/drop ownership tests.

use eldoria_foundation::Examine;
use eldoria_world::{Item, Player, TransferError, World, drop_item, take_item};

use crate::fixtures::TwoRegions;

fn item(n: usize) -> Item {
    Item::new(format!("GEM_{n}"), format!("Gem {n}"), "A small gem.")
}

#[test]
fn capacity_ten_holds_exactly_ten() {
    let mut player = Player::new("Aric", "An adventurer.");
    assert_eq!(player.capacity(), 10);
    for n in 0..10 {
        assert!(player.try_add_item(item(n)).is_ok());
    }
    let refused = player.try_add_item(item(10)).unwrap_err();
    assert_eq!(refused.id().as_str(), "GEM_10");
    assert_eq!(player.inventory().len(), 10);

    let mut ids: Vec<&str> = player.inventory().iter().map(|i| i.id().as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 10);
}

#[test]
fn take_and_drop_preserve_identity() {
    let mut world = World::initialize(&TwoRegions::new(), (1, 1)).unwrap();
    let mut player = Player::new("Aric", "An adventurer.");
    let here = world.current_location_id().unwrap();
    let location = world.current_location_mut().unwrap();
    let total = location.items().len() + player.inventory().len();

    let receipt = take_item(location, &mut player, "QUEST SCROLL").unwrap();
    assert_eq!(receipt.name, "Quest Scroll");
    assert!(location.items().is_empty());
    assert_eq!(player.inventory()[0].container(), None);
    assert_eq!(location.items().len() + player.inventory().len(), total);

    drop_item(location, &mut player, "quest scroll").unwrap();
    let scroll = &location.items()[0];
    assert_eq!(scroll.id().as_str(), "QUEST_SCROLL");
    assert_eq!(scroll.description(), "An ancient scroll.");
    assert_eq!(scroll.container(), Some(here));
    assert!(player.inventory().is_empty());
}

#[test]
fn full_inventory_refuses_without_moving_anything() {
    let mut world = World::initialize(&TwoRegions::new(), (1, 1)).unwrap();
    let mut player = Player::new("Aric", "An adventurer.").with_capacity(0);
    let location = world.current_location_mut().unwrap();

    let err = take_item(location, &mut player, "quest scroll").unwrap_err();
    assert!(matches!(err, TransferError::InventoryFull));
    assert_eq!(location.items().len(), 1);
    assert!(player.inventory().is_empty());
}

#[test]
fn missing_items() {
    let mut world = World::initialize(&TwoRegions::new(), (1, 1)).unwrap();
    let mut player = Player::new("Aric", "An adventurer.");
    let location = world.current_location_mut().unwrap();
    assert!(matches!(
        take_item(location, &mut player, "lantern"),
        Err(TransferError::NotHere)
    ));
    assert!(matches!(
        drop_item(location, &mut player, "lantern"),
        Err(TransferError::NotCarried)
    ));
}

//! World initialization and movement tests.

use eldoria_foundation::{Direction, ErrorKind, Examine, GridId, LocationId};
use eldoria_world::{CellRef, CrossLink, World};

use crate::fixtures::TwoRegions;

fn world() -> World {
    World::initialize(&TwoRegions::new(), (1, 1)).unwrap()
}

#[test]
fn starts_in_the_centre_of_the_first_grid() {
    let world = world();
    assert_eq!(world.current_grid().unwrap().id(), GridId(0));
    assert_eq!(world.current_location().unwrap().name(), "Elder's House");
}

#[test]
fn empty_start_cell_fails_initialization() {
    let mut content = TwoRegions::new();
    content.empty_centre = true;
    let err = World::initialize(&content, (1, 1)).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::EmptyStartCell { .. }));
    assert!(err.is_configuration());
}

#[test]
fn prewired_exit_to_missing_grid_fails_initialization() {
    let mut content = TwoRegions::new();
    content.stray_exit = Some(LocationId::new(GridId(9), 0));
    let err = World::initialize(&content, (1, 1)).unwrap_err();
    assert!(matches!(
        &err.kind,
        ErrorKind::DanglingExit { location, direction: Direction::North, target }
            if location == "Elder's House" && target.grid == GridId(9)
    ));
    assert!(err.is_configuration());
}

#[test]
fn link_to_missing_grid_fails_initialization() {
    let mut content = TwoRegions::new();
    content.links.push(CrossLink {
        from: CellRef::new(GridId(0), 0, 0),
        to: CellRef::new(GridId(7), 0, 0),
        direction: Direction::North,
    });
    let err = World::initialize(&content, (1, 1)).unwrap_err();
    assert!(err.is_configuration());
}

#[test]
fn cross_grid_move_updates_grid_and_location_together() {
    let mut world = world();
    let start = world.current_location_id().unwrap();

    world.go(Direction::East).unwrap();
    let movement = world.go(Direction::East).unwrap();
    assert!(movement.grid_changed);
    assert_eq!(world.current_grid().unwrap().name(), "Hills");
    assert_eq!(world.current_location_id(), Some(movement.to));
    assert_eq!(movement.to.grid, GridId(1));

    let back = world.go(Direction::West).unwrap();
    assert!(back.grid_changed);
    assert_eq!(world.current_grid().unwrap().name(), "Meadow");
    assert_eq!(back.to, movement.from);

    world.go(Direction::West).unwrap();
    assert_eq!(world.current_location_id(), Some(start));
}

#[test]
fn identity_not_name_decides_the_grid() {
    let mut world = world();
    world.go(Direction::East).unwrap();
    world.go(Direction::East).unwrap();
    // both grids have a "Field 01"; we must be in the second one
    world.go(Direction::North).unwrap();
    let here = world.current_location_id().unwrap();
    assert_eq!(world.current_location().unwrap().name(), "Field 00");
    assert_eq!(world.locate(here), Some((GridId(1), 0, 0)));
}

#[test]
fn blocked_move_is_a_no_op() {
    let mut world = world();
    world.go(Direction::North).unwrap();
    let before = world.current_location_id();
    let err = world.go(Direction::North).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::NoExit(Direction::North)));
    assert!(!err.is_configuration());
    assert_eq!(world.current_location_id(), before);
}

#[test]
fn coordinates_search_only_the_current_grid() {
    let mut world = world();
    let hills_cell = world.grids()[1].location_id(0, 1).unwrap();
    assert_eq!(world.location_coordinates(hills_cell), None);

    world.go(Direction::East).unwrap();
    world.go(Direction::East).unwrap();
    assert_eq!(world.location_coordinates(hills_cell), Some((0, 1)));
}

//! Grid connection tests.

use eldoria_foundation::{Direction, ErrorKind, GridId};
use eldoria_world::{GRID_SIZE, Grid, Location};
use proptest::prelude::*;

fn full_grid() -> Grid {
    let mut grid = Grid::new(GridId(0), "Test");
    for y in 0..GRID_SIZE {
        for x in 0..GRID_SIZE {
            grid.set_location(x, y, Location::new(format!("Cell {x}{y}"), ""))
                .unwrap();
        }
    }
    grid
}

#[test]
fn adjacent_cells_link_both_ways() {
    let mut grid = full_grid();
    grid.connect_grid_locations();

    for y in 0..GRID_SIZE {
        for x in 0..GRID_SIZE - 1 {
            let west = grid.location_id(x, y).unwrap();
            let east = grid.location_id(x + 1, y).unwrap();
            assert_eq!(grid.location(west).unwrap().get_exit(Direction::East), Some(east));
            assert_eq!(grid.location(east).unwrap().get_exit(Direction::West), Some(west));
        }
    }
    for y in 0..GRID_SIZE - 1 {
        for x in 0..GRID_SIZE {
            let north = grid.location_id(x, y).unwrap();
            let south = grid.location_id(x, y + 1).unwrap();
            assert_eq!(grid.location(north).unwrap().get_exit(Direction::South), Some(south));
            assert_eq!(grid.location(south).unwrap().get_exit(Direction::North), Some(north));
        }
    }
}

#[test]
fn edges_have_no_exits_outward() {
    let mut grid = full_grid();
    grid.connect_grid_locations();
    let corner = grid.get_location(0, 0).unwrap();
    assert_eq!(corner.get_exit(Direction::North), None);
    assert_eq!(corner.get_exit(Direction::West), None);
    assert_eq!(corner.exits().count(), 2);
    assert_eq!(grid.get_location(1, 1).unwrap().exits().count(), 4);
}

#[test]
fn second_connect_is_a_no_op() {
    let mut grid = full_grid();
    let first = grid.connect_grid_locations();
    assert_eq!(first, 24);
    assert_eq!(grid.connect_grid_locations(), 0);
}

#[test]
fn occupied_exit_slot_is_kept() {
    let mut grid = full_grid();
    grid.connect_grid_locations();
    let centre = grid.location_id(1, 1).unwrap();
    let original = grid.location(centre).unwrap().get_exit(Direction::North);
    let elsewhere = grid.location_id(2, 2).unwrap();

    let err = grid
        .location_mut(centre)
        .unwrap()
        .add_exit(Direction::North, elsewhere)
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::ExitOccupied { direction: Direction::North, .. }));
    assert_eq!(grid.location(centre).unwrap().get_exit(Direction::North), original);
}

#[test]
fn out_of_range_cells() {
    let mut grid = full_grid();
    assert!(grid.get_location(GRID_SIZE, 0).is_none());
    assert!(grid.set_location(0, GRID_SIZE, Location::new("Nowhere", "")).is_err());
}

proptest! {
    #[test]
    fn sparse_grids_link_only_occupied_neighbours(mask in 0u16..512) {
        let mut grid = Grid::new(GridId(0), "Sparse");
        for i in 0..GRID_SIZE * GRID_SIZE {
            if mask & (1 << i) != 0 {
                grid.set_location(i % GRID_SIZE, i / GRID_SIZE, Location::new(format!("C{i}"), ""))
                    .unwrap();
            }
        }
        grid.connect_grid_locations();
        for (x, y, location) in grid.locations() {
            let id = grid.location_id(x, y).unwrap();
            for (direction, target) in location.exits() {
                prop_assert!(grid.contains(target));
                let back = grid.location(target).unwrap().get_exit(direction.opposite());
                prop_assert_eq!(back, Some(id));
            }
        }
    }
}

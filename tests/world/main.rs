//! Integration tests for Layer 1: World
//!
//! Tests for grid linking, cross-grid navigation, and item ownership.

mod fixtures;
mod grids;
mod inventory;
mod navigation;

//! Spatial data structures for tiles and boards
//!
//! This module contains spatial-related functionality including:
//! - Tile storage and oriented tile views
//! - The candidate board searched by the solver
//! - Image assembly over a solved board
//! - Seeded puzzle generation

/// Borderless image assembly and materialized bitmaps
pub mod assembly;
/// Seeded generation of solvable puzzles
pub mod generator;
/// Board of candidate cells
pub mod grid;
/// Orientations and oriented tile views
pub mod orientation;
/// Tile pixel grids and the tile store
pub mod tiles;

pub use grid::Board;
pub use tiles::TileStore;

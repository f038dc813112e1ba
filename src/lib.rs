//! Procedural dungeon layouts by binary space partitioning.
//!
//! A square area is split recursively into partitions, each leaf gets a room,
//! siblings are joined by corridors, and the tree is rasterized onto a tile
//! grid with six gameplay markers stamped into distinct rooms.

pub mod bsp;
pub mod carve;
pub mod config;
pub mod constants;
pub mod corridor;
pub mod dungeon_gen;
pub mod error;
pub mod grid;
pub mod pathfinding;
pub mod raster;
pub mod rect;
pub mod render;
pub mod spawning;
pub mod tile;

pub use bsp::{LeafRoom, SplitDirection, SplitRules, SubDungeon};
pub use config::DungeonConfig;
pub use dungeon_gen::{Dungeon, DungeonGenerator};
pub use error::{DungeonError, Result};
pub use grid::Grid;
pub use rect::Rect;
pub use spawning::{place_entities, EntitySpawn};
pub use tile::TileType;

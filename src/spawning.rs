//! Gameplay marker placement.
//!
//! Each marker goes into its own room, chosen by sampling distinct room
//! indices rather than stepping from a random start.

use crate::bsp::LeafRoom;
use crate::error::{DungeonError, Result};
use crate::grid::Grid;
use crate::rect::Rect;
use crate::tile::TileType;
use log::debug;
use rand::Rng;

/// Markers stamped by [`place_entities`], in sampling order
pub const PLACEMENT_ORDER: [TileType; 6] = [
    TileType::Player,
    TileType::Dagger,
    TileType::Enemy,
    TileType::Key,
    TileType::Door,
    TileType::End,
];

/// Where a marker was stamped
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EntitySpawn {
    pub tile: TileType,
    pub x: i32,
    pub y: i32,
    /// Position in the room list the marker was placed in
    pub room_index: usize,
}

/// The cell `margin` steps in from the room's origin, pulled back inside
/// rooms too small to hold it.
pub fn spawn_point(room: &Rect, margin: i32) -> (i32, i32) {
    let x = room.x.saturating_add(margin).min(room.x_max() - 1).max(room.x);
    let y = room.y.saturating_add(margin).min(room.y_max() - 1).max(room.y);
    (x, y)
}

/// Stamp one of each marker in [`PLACEMENT_ORDER`] into six distinct rooms.
///
/// Fails with `InsufficientRooms` before touching the grid when fewer than
/// six rooms exist.
pub fn place_entities(
    rooms: &[LeafRoom],
    grid: &mut Grid,
    margin: i32,
    rng: &mut impl Rng,
) -> Result<Vec<EntitySpawn>> {
    let required = PLACEMENT_ORDER.len();
    if rooms.len() < required {
        return Err(DungeonError::InsufficientRooms {
            found: rooms.len(),
            required,
        });
    }

    let picks = rand::seq::index::sample(rng, rooms.len(), required);
    let spawns: Vec<EntitySpawn> = PLACEMENT_ORDER
        .iter()
        .zip(picks.iter())
        .map(|(&tile, room_index)| {
            let (x, y) = spawn_point(&rooms[room_index].room, margin);
            EntitySpawn {
                tile,
                x,
                y,
                room_index,
            }
        })
        .collect();

    // Validate every target before the first write
    let bounds = grid.bounds();
    if let Some(bad) = spawns.iter().find(|s| !bounds.contains(s.x, s.y)) {
        return Err(DungeonError::OutOfBounds {
            x: bad.x,
            y: bad.y,
            size: grid.size(),
        });
    }
    for spawn in &spawns {
        grid.set(spawn.x, spawn.y, spawn.tile)?;
        debug!("placed {:?} at ({}, {}) in room {}", spawn.tile, spawn.x, spawn.y, spawn.room_index);
    }
    Ok(spawns)
}

//! Error types for dungeon generation

use crate::tile::TileType;

/// Result type alias using DungeonError
pub type Result<T> = std::result::Result<T, DungeonError>;

/// Failures surfaced by the generation pipeline and its boundaries.
///
/// Unsplittable partitions and rooms too small for their margins are not
/// errors: they are expected variation and are resolved where they occur.
#[derive(Debug, thiserror::Error)]
pub enum DungeonError {
    /// Entity placement needs one distinct room per marker
    #[error("not enough rooms for entity placement: found {found}, need {required}")]
    InsufficientRooms { found: usize, required: usize },

    /// A tile type has no visual mapping in the consumer's palette
    #[error("no visual mapping for tile type {0:?}")]
    InvalidTileType(TileType),

    /// Grid access outside `0..size` on either axis
    #[error("cell ({x}, {y}) is outside the {size}x{size} grid")]
    OutOfBounds { x: i32, y: i32, size: usize },

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Reading a configuration file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

//! Dungeon generation constants.

/// Smallest dungeon side length drawn per run (inclusive)
pub const DUNGEON_MIN_SIZE: u32 = 64;
/// Largest dungeon side length drawn per run (exclusive)
pub const DUNGEON_MAX_SIZE: u32 = 129;
/// Upper bound on the exclusive side-length limit a config may request
pub const DUNGEON_SIZE_LIMIT: u32 = 4096;
/// Minimum side length of a BSP partition
pub const DUNGEON_MIN_ROOM_SIZE: i32 = 10;
/// Partitions larger than this in either dimension always try to split
pub const DUNGEON_MAX_ROOM_SIZE: i32 = 1;
/// A small partition still splits when a uniform draw exceeds this
pub const DUNGEON_SPLIT_THRESHOLD: f32 = 0.25;
/// Wall margin kept between a room and its partition edge
pub const DUNGEON_ROOM_MARGIN: i32 = 1;
/// Offset from a room's origin where gameplay markers are stamped
pub const DUNGEON_ENTITY_MARGIN: i32 = 2;

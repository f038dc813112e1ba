/// The kind of content a single grid cell holds.
///
/// Discriminants are stable: a renderer's prefab table is indexed by
/// `discriminant - 1`, with `Empty` producing no object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum TileType {
    /// Walkable floor
    #[default]
    Empty = 0,
    Player,
    Enemy,
    Wall,
    Door,
    Key,
    Dagger,
    End,
}

impl TileType {
    pub const ALL: [TileType; 8] = [
        TileType::Empty,
        TileType::Player,
        TileType::Enemy,
        TileType::Wall,
        TileType::Door,
        TileType::Key,
        TileType::Dagger,
        TileType::End,
    ];

    /// Slot in a renderer's prefab table, or `None` for implicit floor.
    pub fn prefab_index(&self) -> Option<usize> {
        (*self as usize).checked_sub(1)
    }

    pub fn is_walkable(&self) -> bool {
        !matches!(self, TileType::Wall)
    }

    /// Gameplay markers stamped by entity placement
    pub fn is_entity(&self) -> bool {
        !matches!(self, TileType::Empty | TileType::Wall)
    }
}

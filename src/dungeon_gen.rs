use crate::bsp::{LeafRoom, SubDungeon};
use crate::config::DungeonConfig;
use crate::error::Result;
use crate::grid::Grid;
use crate::raster::rasterize;
use crate::rect::Rect;
use crate::spawning::{place_entities, EntitySpawn};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Result of dungeon generation
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dungeon {
    /// Final tile map, walls and floor with gameplay markers stamped in
    pub grid: Grid,
    /// The partition tree the grid was rasterized from
    pub root: SubDungeon,
    /// Leaf rooms in left-to-right tree order
    pub rooms: Vec<LeafRoom>,
    /// Markers placed, in placement order
    pub spawns: Vec<EntitySpawn>,
    /// Seed the run was drawn from; `None` when the caller supplied the rng
    pub seed: Option<u64>,
}

pub struct DungeonGenerator;

impl DungeonGenerator {
    /// Generate a dungeon drawing every random decision from `rng`.
    ///
    /// Fails without producing a grid when the config is invalid or the tree
    /// has too few rooms for entity placement.
    pub fn generate(config: &DungeonConfig, rng: &mut impl Rng) -> Result<Dungeon> {
        puffin::profile_function!();
        config.validate()?;

        let size = rng.gen_range(config.min_dungeon_size..config.max_dungeon_size) as usize;
        let mut grid = Grid::new(size);

        // Create the root BSP node covering the entire map
        let mut root = SubDungeon::new(Rect::new(0, 0, size as i32, size as i32));
        {
            puffin::profile_scope!("build_bsp");
            root.build(&config.split_rules(), rng);
        }
        {
            puffin::profile_scope!("create_rooms");
            root.create_rooms(rng);
        }
        debug!(
            "{}x{} dungeon: {} leaves, depth {}",
            size,
            size,
            root.leaf_count(),
            root.depth()
        );

        rasterize(&root, &mut grid)?;

        let mut rooms = Vec::new();
        root.collect_rooms(&mut rooms);

        let spawns = place_entities(&rooms, &mut grid, config.entity_margin, rng)?;
        info!("generated {}x{} dungeon with {} rooms", size, size, rooms.len());

        Ok(Dungeon {
            grid,
            root,
            rooms,
            spawns,
            seed: None,
        })
    }

    /// Generate from a seed; equal seeds and configs give identical dungeons.
    pub fn generate_seeded(config: &DungeonConfig, seed: u64) -> Result<Dungeon> {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut dungeon = Self::generate(config, &mut rng)?;
        dungeon.seed = Some(seed);
        Ok(dungeon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DungeonError;
    use crate::spawning::PLACEMENT_ORDER;
    use crate::tile::TileType;

    #[test]
    fn test_grid_size_within_configured_range() {
        let config = DungeonConfig::default();
        for seed in 0..10 {
            let dungeon = DungeonGenerator::generate_seeded(&config, seed).unwrap();
            let size = dungeon.grid.size();
            assert!((64..129).contains(&size));
            assert_eq!(dungeon.grid.tiles().len(), size * size);
        }
    }

    #[test]
    fn test_same_seed_same_dungeon() {
        let config = DungeonConfig::default();
        let a = DungeonGenerator::generate_seeded(&config, 1234).unwrap();
        let b = DungeonGenerator::generate_seeded(&config, 1234).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.seed, Some(1234));
    }

    #[test]
    fn test_caller_rng_leaves_seed_unset() {
        let config = DungeonConfig::default();
        let mut rng = StdRng::seed_from_u64(1234);
        let dungeon = DungeonGenerator::generate(&config, &mut rng).unwrap();
        assert_eq!(dungeon.seed, None);

        let seeded = DungeonGenerator::generate_seeded(&config, 1234).unwrap();
        assert_eq!(dungeon.grid, seeded.grid);
    }

    #[test]
    fn test_extreme_config_values_are_rejected_not_panicking() {
        let configs = [
            DungeonConfig {
                min_room_size: i32::MAX,
                ..Default::default()
            },
            DungeonConfig {
                entity_margin: i32::MAX,
                ..Default::default()
            },
            DungeonConfig {
                max_dungeon_size: u32::MAX,
                ..Default::default()
            },
        ];
        for config in configs {
            assert!(matches!(
                DungeonGenerator::generate_seeded(&config, 1),
                Err(DungeonError::InvalidConfig(_))
            ));
        }
    }

    #[test]
    fn test_dungeon_has_floor_and_walls() {
        let dungeon = DungeonGenerator::generate_seeded(&DungeonConfig::default(), 9).unwrap();
        assert!(dungeon.grid.count(TileType::Empty) > 0);
        assert!(dungeon.grid.count(TileType::Wall) > 0);
    }

    #[test]
    fn test_one_of_each_marker() {
        let dungeon = DungeonGenerator::generate_seeded(&DungeonConfig::default(), 77).unwrap();
        assert_eq!(dungeon.spawns.len(), 6);
        for tile in PLACEMENT_ORDER {
            assert_eq!(dungeon.grid.count(tile), 1, "{tile:?}");
        }
    }

    #[test]
    fn test_rooms_match_tree_leaves() {
        let dungeon = DungeonGenerator::generate_seeded(&DungeonConfig::default(), 5).unwrap();
        assert_eq!(dungeon.rooms.len(), dungeon.root.leaf_count());
    }

    #[test]
    fn test_tiny_dungeon_fails_with_insufficient_rooms() {
        // A 20x20 area with min_room_size 10 yields at most four leaves
        let config = DungeonConfig::default().with_fixed_size(20);
        let err = DungeonGenerator::generate_seeded(&config, 42).unwrap_err();
        assert!(matches!(err, DungeonError::InsufficientRooms { required: 6, .. }));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = DungeonConfig {
            min_room_size: 0,
            ..Default::default()
        };
        assert!(matches!(
            DungeonGenerator::generate_seeded(&config, 1),
            Err(DungeonError::InvalidConfig(_))
        ));
    }
}

//! Rasterizing a finished BSP tree onto the tile grid.
//!
//! Walls go down first; rooms and corridors only ever turn `Wall` into
//! `Empty`, so the passes must run in that order.

use crate::bsp::SubDungeon;
use crate::error::Result;
use crate::grid::Grid;
use crate::tile::TileType;

/// Reset every cell to `Wall`.
pub fn fill_walls(grid: &mut Grid) {
    grid.fill(TileType::Wall);
}

/// Carve every leaf room as floor.
pub fn draw_rooms(node: &SubDungeon, grid: &mut Grid) -> Result<()> {
    if node.is_leaf() {
        if let Some(room) = node.room {
            grid.fill_rect(&room, TileType::Empty)?;
        }
        return Ok(());
    }
    if let Some(ref left) = node.left {
        draw_rooms(left, grid)?;
    }
    if let Some(ref right) = node.right {
        draw_rooms(right, grid)?;
    }
    Ok(())
}

/// Carve every corridor as floor, children before parents.
pub fn draw_corridors(node: &SubDungeon, grid: &mut Grid) -> Result<()> {
    if let Some(ref left) = node.left {
        draw_corridors(left, grid)?;
    }
    if let Some(ref right) = node.right {
        draw_corridors(right, grid)?;
    }
    for corridor in &node.corridors {
        grid.fill_rect(corridor, TileType::Empty)?;
    }
    Ok(())
}

/// Run all three passes over `grid`.
pub fn rasterize(root: &SubDungeon, grid: &mut Grid) -> Result<()> {
    puffin::profile_function!();
    fill_walls(grid);
    draw_rooms(root, grid)?;
    draw_corridors(root, grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bsp::SplitRules;
    use crate::pathfinding::reachable;
    use crate::rect::Rect;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn tree(seed: u64) -> SubDungeon {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut root = SubDungeon::new(Rect::new(0, 0, 64, 64));
        let rules = SplitRules {
            min_room_size: 10,
            max_room_size: 1,
            split_threshold: 0.25,
        };
        root.build(&rules, &mut rng);
        root.create_rooms(&mut rng);
        root
    }

    fn all_corridors(node: &SubDungeon, out: &mut Vec<Rect>) {
        out.extend(node.corridors.iter().copied());
        if let Some(ref l) = node.left {
            all_corridors(l, out);
        }
        if let Some(ref r) = node.right {
            all_corridors(r, out);
        }
    }

    #[test]
    fn test_empty_only_inside_rooms_or_corridors() {
        let root = tree(17);
        let mut grid = Grid::new(64);
        rasterize(&root, &mut grid).unwrap();

        let mut rooms = Vec::new();
        root.collect_rooms(&mut rooms);
        let mut corridors = Vec::new();
        all_corridors(&root, &mut corridors);

        for (x, y, tile) in grid.iter() {
            let in_room = rooms.iter().any(|r| r.room.contains(x, y));
            let in_corridor = corridors.iter().any(|c| c.contains(x, y));
            assert_eq!(tile == TileType::Empty, in_room || in_corridor, "cell ({x}, {y})");
        }
    }

    #[test]
    fn test_double_wall_fill_is_idempotent() {
        let root = tree(23);
        let mut once = Grid::new(64);
        rasterize(&root, &mut once).unwrap();

        let mut twice = Grid::new(64);
        fill_walls(&mut twice);
        fill_walls(&mut twice);
        draw_rooms(&root, &mut twice).unwrap();
        draw_corridors(&root, &mut twice).unwrap();

        assert_eq!(once, twice);
    }

    #[test]
    fn test_rasterize_overwrites_stale_grid() {
        let root = tree(5);
        let mut fresh = Grid::new(64);
        rasterize(&root, &mut fresh).unwrap();

        let mut stale = Grid::new(64);
        stale.fill(TileType::Key);
        rasterize(&root, &mut stale).unwrap();
        assert_eq!(fresh, stale);
    }

    #[test]
    fn test_sibling_rooms_reachable() {
        let mut root = SubDungeon::new(Rect::new(0, 0, 40, 20));
        root.left = Some(Box::new(SubDungeon::new(Rect::new(0, 0, 20, 20))));
        root.right = Some(Box::new(SubDungeon::new(Rect::new(20, 0, 20, 20))));
        let mut rng = StdRng::seed_from_u64(31);
        root.create_rooms(&mut rng);

        let left = root.left.as_ref().unwrap().room.unwrap();
        let right = root.right.as_ref().unwrap().room.unwrap();
        assert!(!left.intersects(&right));
        assert!(!root.corridors.is_empty());

        let mut grid = Grid::new(40);
        rasterize(&root, &mut grid).unwrap();
        let seen = reachable(&grid, left.center());
        assert!(seen.contains(&right.center()));
    }

    #[test]
    fn test_room_outside_grid_is_reported() {
        let mut root = SubDungeon::new(Rect::new(0, 0, 20, 20));
        root.room = Some(Rect::new(15, 15, 10, 10));
        let mut grid = Grid::new(16);
        assert!(rasterize(&root, &mut grid).is_err());
    }
}

use crate::error::{DungeonError, Result};
use crate::rect::Rect;
use crate::tile::TileType;

/// Square tile map, stored row-major. Every cell starts as `Wall`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    tiles: Vec<TileType>,
}

impl Grid {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            tiles: vec![TileType::Wall; size * size],
        }
    }

    /// Side length; the grid is `size × size`.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Row-major view of every cell
    pub fn tiles(&self) -> &[TileType] {
        &self.tiles
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.size as i32, self.size as i32)
    }

    fn get_index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.size as i32 || y >= self.size as i32 {
            return None;
        }
        Some(y as usize * self.size + x as usize)
    }

    pub fn get(&self, x: i32, y: i32) -> Option<TileType> {
        self.get_index(x, y).map(|idx| self.tiles[idx])
    }

    pub fn set(&mut self, x: i32, y: i32, tile_type: TileType) -> Result<()> {
        let idx = self.get_index(x, y).ok_or(DungeonError::OutOfBounds {
            x,
            y,
            size: self.size,
        })?;
        self.tiles[idx] = tile_type;
        Ok(())
    }

    /// Overwrite the whole grid.
    pub fn fill(&mut self, tile_type: TileType) {
        self.tiles.fill(tile_type);
    }

    /// Overwrite every cell of `rect`. Nothing is written unless the whole
    /// rectangle lies inside the grid.
    pub fn fill_rect(&mut self, rect: &Rect, tile_type: TileType) -> Result<()> {
        if !self.bounds().contains_rect(rect) {
            return Err(DungeonError::OutOfBounds {
                x: rect.x_max() - 1,
                y: rect.y_max() - 1,
                size: self.size,
            });
        }
        for y in rect.y..rect.y_max() {
            let row = y as usize * self.size;
            self.tiles[row + rect.x as usize..row + rect.x_max() as usize].fill(tile_type);
        }
        Ok(())
    }

    pub fn count(&self, tile_type: TileType) -> usize {
        self.tiles.iter().filter(|&&t| t == tile_type).count()
    }

    /// Every cell with its coordinates, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (i32, i32, TileType)> + '_ {
        self.tiles.iter().enumerate().map(move |(idx, &tile)| {
            ((idx % self.size) as i32, (idx / self.size) as i32, tile)
        })
    }
}

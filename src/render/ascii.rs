use super::TileSink;
use crate::tile::TileType;
use std::fmt;

/// Text renderer: one glyph per cell, `.` for floor.
pub struct AsciiRenderer {
    size: usize,
    cells: Vec<char>,
}

impl AsciiRenderer {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec!['.'; size * size],
        }
    }
}

impl TileSink<char> for AsciiRenderer {
    fn instantiate(&mut self, x: i32, y: i32, _tile: TileType, visual: &char) {
        if x >= 0 && y >= 0 && (x as usize) < self.size && (y as usize) < self.size {
            self.cells[y as usize * self.size + x as usize] = *visual;
        }
    }
}

impl fmt::Display for AsciiRenderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.size.max(1)) {
            let line: String = row.iter().collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Grid;
    use crate::rect::Rect;
    use crate::render::{instantiate_tiles, TilePalette};

    #[test]
    fn test_renders_rows() {
        let mut grid = Grid::new(3);
        grid.fill_rect(&Rect::new(1, 1, 1, 1), TileType::Empty).unwrap();
        grid.set(2, 2, TileType::Player).unwrap();

        let mut ascii = AsciiRenderer::new(3);
        instantiate_tiles(&grid, &TilePalette::ascii(), &mut ascii);
        assert_eq!(ascii.to_string(), "###\n#.#\n##@\n");
    }
}

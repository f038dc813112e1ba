//! Boundary to whatever turns a finished grid into visible objects.
//!
//! The generator never depends on a renderer; it hands over the grid and a
//! consumer walks it through [`instantiate_tiles`].

mod ascii;

pub use ascii::AsciiRenderer;

use crate::error::DungeonError;
use crate::grid::Grid;
use crate::tile::TileType;
use log::error;

/// Receives one call per non-empty cell.
pub trait TileSink<V> {
    fn instantiate(&mut self, x: i32, y: i32, tile: TileType, visual: &V);
}

/// Visual for each tile type, indexed by [`TileType::prefab_index`].
/// Slots may be left unset.
#[derive(Clone, Debug)]
pub struct TilePalette<V> {
    visuals: Vec<Option<V>>,
}

impl<V> TilePalette<V> {
    pub fn new() -> Self {
        Self {
            visuals: Vec::new(),
        }
    }

    /// Build from a prefab table ordered like the tile discriminants
    /// (`Player` first); shorter tables leave the remaining types unmapped.
    pub fn from_prefabs(prefabs: Vec<Option<V>>) -> Self {
        Self { visuals: prefabs }
    }

    pub fn with(mut self, tile: TileType, visual: V) -> Self {
        if let Some(idx) = tile.prefab_index() {
            if self.visuals.len() <= idx {
                self.visuals.resize_with(idx + 1, || None);
            }
            self.visuals[idx] = Some(visual);
        }
        self
    }

    pub fn visual(&self, tile: TileType) -> Option<&V> {
        tile.prefab_index()
            .and_then(|idx| self.visuals.get(idx))
            .and_then(Option::as_ref)
    }
}

impl<V> Default for TilePalette<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl TilePalette<char> {
    /// Glyphs used by the command-line renderer
    pub fn ascii() -> Self {
        Self::new()
            .with(TileType::Player, '@')
            .with(TileType::Enemy, 'E')
            .with(TileType::Wall, '#')
            .with(TileType::Door, 'D')
            .with(TileType::Key, 'k')
            .with(TileType::Dagger, '/')
            .with(TileType::End, '>')
    }
}

/// Outcome of handing a grid to a consumer
#[derive(Debug, Default)]
pub struct InstantiateReport {
    /// Objects the sink created
    pub created: usize,
    /// Cells skipped for lack of a visual, with their coordinates
    pub failures: Vec<(i32, i32, DungeonError)>,
}

/// Walk `grid` row by row and instantiate every non-`Empty` cell.
///
/// A tile type missing from `palette` is logged and recorded as
/// `InvalidTileType`; the walk always finishes.
pub fn instantiate_tiles<V>(
    grid: &Grid,
    palette: &TilePalette<V>,
    sink: &mut impl TileSink<V>,
) -> InstantiateReport {
    puffin::profile_function!();
    let mut report = InstantiateReport::default();
    for (x, y, tile) in grid.iter() {
        if tile == TileType::Empty {
            continue;
        }
        match palette.visual(tile) {
            Some(visual) => {
                sink.instantiate(x, y, tile, visual);
                report.created += 1;
            }
            None => {
                error!("Invalid tile type selected: {:?} at ({}, {})", tile, x, y);
                report.failures.push((x, y, DungeonError::InvalidTileType(tile)));
            }
        }
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rect::Rect;

    #[derive(Default)]
    struct Recorder {
        placed: Vec<(i32, i32, TileType, u32)>,
    }

    impl TileSink<u32> for Recorder {
        fn instantiate(&mut self, x: i32, y: i32, tile: TileType, visual: &u32) {
            self.placed.push((x, y, tile, *visual));
        }
    }

    fn sample_grid() -> Grid {
        let mut grid = Grid::new(4);
        grid.fill_rect(&Rect::new(1, 1, 2, 2), TileType::Empty).unwrap();
        grid.set(1, 1, TileType::Key).unwrap();
        grid
    }

    #[test]
    fn test_empty_cells_produce_nothing() {
        let palette = TilePalette::new().with(TileType::Wall, 3).with(TileType::Key, 5);
        let mut sink = Recorder::default();
        let report = instantiate_tiles(&sample_grid(), &palette, &mut sink);

        assert!(report.failures.is_empty());
        assert_eq!(report.created, 13);
        assert!(sink.placed.contains(&(1, 1, TileType::Key, 5)));
        assert!(!sink.placed.iter().any(|&(x, y, _, _)| (x, y) == (2, 2)));
    }

    #[test]
    fn test_missing_visual_is_reported_not_fatal() {
        let palette = TilePalette::new().with(TileType::Wall, 3);
        let mut sink = Recorder::default();
        let report = instantiate_tiles(&sample_grid(), &palette, &mut sink);

        assert_eq!(report.created, 12);
        assert_eq!(report.failures.len(), 1);
        let (x, y, ref err) = report.failures[0];
        assert_eq!((x, y), (1, 1));
        assert!(matches!(err, DungeonError::InvalidTileType(TileType::Key)));
    }

    #[test]
    fn test_prefab_table_indexing() {
        let palette = TilePalette::from_prefabs(vec![Some('p'), None, Some('w')]);
        assert_eq!(palette.visual(TileType::Player), Some(&'p'));
        assert_eq!(palette.visual(TileType::Enemy), None);
        assert_eq!(palette.visual(TileType::Wall), Some(&'w'));
        assert_eq!(palette.visual(TileType::End), None);
        assert_eq!(palette.visual(TileType::Empty), None);
    }

    #[test]
    fn test_ascii_palette_covers_every_marker() {
        let palette = TilePalette::ascii();
        for tile in TileType::ALL {
            assert_eq!(palette.visual(tile).is_some(), tile != TileType::Empty);
        }
    }
}

use std::collections::HashMap;
use std::fmt;

use super::color::Rgba;
use super::constants::GRID_SIZE;

/// Integer address of one grid cell
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CellCoord {
    pub x: i32,
    pub y: i32,
}

impl CellCoord {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// True when both components lie in `[0, GRID_SIZE)`
    pub fn in_grid(self) -> bool {
        (0..GRID_SIZE).contains(&self.x) && (0..GRID_SIZE).contains(&self.y)
    }
}

impl fmt::Display for CellCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

/// Sparse map of painted cells. Absent entries render as the background.
#[derive(Clone, Debug, Default)]
pub struct PaintStore {
    cells: HashMap<CellCoord, Rgba>,
}

impl PaintStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `color` at `coord`. Returns false if the cell already held it.
    pub fn paint(&mut self, coord: CellCoord, color: Rgba) -> bool {
        self.cells.insert(coord, color) != Some(color)
    }

    pub fn get(&self, coord: CellCoord) -> Option<Rgba> {
        self.cells.get(&coord).copied()
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (CellCoord, Rgba)> + '_ {
        self.cells.iter().map(|(coord, color)| (*coord, *color))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coord_display_matches_key_encoding() {
        assert_eq!(CellCoord::new(10, 7).to_string(), "10,7");
    }

    #[test]
    fn test_in_grid_bounds() {
        assert!(CellCoord::new(0, 0).in_grid());
        assert!(CellCoord::new(GRID_SIZE - 1, GRID_SIZE - 1).in_grid());
        assert!(!CellCoord::new(-1, 0).in_grid());
        assert!(!CellCoord::new(0, GRID_SIZE).in_grid());
    }

    #[test]
    fn test_last_write_wins() {
        let mut store = PaintStore::new();
        let cell = CellCoord::new(10, 10);
        assert!(store.paint(cell, Rgba::rgb(255, 0, 0)));
        assert!(store.paint(cell, Rgba::rgb(0, 255, 0)));
        assert_eq!(store.get(cell), Some(Rgba::rgb(0, 255, 0)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_repaint_same_color_reports_no_change() {
        let mut store = PaintStore::new();
        let cell = CellCoord::new(3, 4);
        assert!(store.paint(cell, Rgba::rgb(1, 2, 3)));
        assert!(!store.paint(cell, Rgba::rgb(1, 2, 3)));
    }

    #[test]
    fn test_clear_empties_store() {
        let mut store = PaintStore::new();
        store.paint(CellCoord::new(1, 1), Rgba::rgb(0, 0, 0));
        store.paint(CellCoord::new(2, 2), Rgba::rgb(0, 0, 0));
        store.clear();
        assert!(store.is_empty());
        assert_eq!(store.get(CellCoord::new(1, 1)), None);
    }
}

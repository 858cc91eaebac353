use macroquad::math::{Rect, Vec2};

use super::cell::CellCoord;
use super::constants::{GRID_EXTENT, GRID_SIZE, INITIAL_ZOOM, MAX_ZOOM, MIN_ZOOM};

/// Zoom and pan over the fixed grid.
///
/// Screen positions are canvas units relative to the canvas's top-left
/// corner, where the on-screen frame always spans `GRID_SIZE` units (the
/// caller divides by the displayed frame width). The canvas is
/// `GRID_SIZE * zoom` units per side and clipped to the frame, so the
/// visible window in grid units is `[pan, pan + GRID_SIZE / zoom)`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Viewport {
    /// Screen pixels per grid unit, in `[MIN_ZOOM, MAX_ZOOM]`
    pub zoom: f32,

    /// Grid coordinates of the visible window's top-left corner
    pub pan: Vec2,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(INITIAL_ZOOM)
    }
}

impl Viewport {
    pub fn new(zoom: f32) -> Self {
        Self {
            zoom: zoom.clamp(MIN_ZOOM, MAX_ZOOM),
            pan: Vec2::ZERO,
        }
    }

    /// Displayed side length of the whole canvas in screen pixels
    #[inline]
    pub fn canvas_extent(&self) -> f32 {
        GRID_EXTENT * self.zoom
    }

    /// Side length of the visible window in grid units
    #[inline]
    pub fn visible_span(&self) -> f32 {
        GRID_EXTENT / self.zoom
    }

    /// Largest pan offset that keeps the visible window inside the grid
    #[inline]
    pub fn max_pan(&self) -> f32 {
        (GRID_EXTENT - self.visible_span()).max(0.0)
    }

    /// Convert a screen position to (fractional) grid coordinates.
    ///
    /// `pointer / canvas_extent * GRID_SIZE` reduces to `pointer / zoom`,
    /// which stays exact on cell boundaries at integer zooms.
    pub fn screen_to_grid(&self, pointer: Vec2) -> Vec2 {
        pointer / self.zoom + self.pan
    }

    /// Convert grid coordinates to a screen position
    pub fn grid_to_screen(&self, point: Vec2) -> Vec2 {
        (point - self.pan) * self.zoom
    }

    /// Cell under the pointer, or `None` when it falls outside the grid
    pub fn cell_at(&self, pointer: Vec2) -> Option<CellCoord> {
        let grid = self.screen_to_grid(pointer);
        let cell = CellCoord::new(grid.x.floor() as i32, grid.y.floor() as i32);
        cell.in_grid().then_some(cell)
    }

    /// Screen rect covered by one cell
    pub fn cell_to_screen_rect(&self, cell: CellCoord) -> Rect {
        let origin = self.grid_to_screen(Vec2::new(cell.x as f32, cell.y as f32));
        Rect::new(origin.x, origin.y, self.zoom, self.zoom)
    }

    /// Cells intersecting the visible window as `(min, max_exclusive)`
    pub fn visible_cells(&self) -> (CellCoord, CellCoord) {
        let end = self.pan + Vec2::splat(self.visible_span());
        (
            CellCoord::new(self.pan.x.floor() as i32, self.pan.y.floor() as i32),
            CellCoord::new(
                (end.x.ceil() as i32).min(GRID_SIZE),
                (end.y.ceil() as i32).min(GRID_SIZE),
            ),
        )
    }

    /// Zoom one integer step around the pointer.
    ///
    /// The grid point under the pointer stays under it. Zoom and pan are
    /// committed together. Returns true if either changed.
    pub fn zoom_at(&mut self, pointer: Vec2, direction: i32) -> bool {
        let new_zoom = step_zoom(self.zoom, direction);
        let anchor = self.screen_to_grid(pointer);

        let before = *self;
        self.zoom = new_zoom;
        self.pan = self.clamp_to_bounds(anchor - pointer / new_zoom);
        *self != before
    }

    /// Pan relative to where a drag started. Only allowed above minimum zoom.
    pub fn pan_from(&mut self, start_pan: Vec2, screen_delta: Vec2) -> bool {
        if self.zoom <= MIN_ZOOM {
            return false;
        }
        let delta_grid = screen_delta / self.zoom;
        let pan = self.clamp_to_bounds(start_pan - delta_grid);
        let changed = pan != self.pan;
        self.pan = pan;
        changed
    }

    /// Re-apply the pan invariant for the current zoom
    pub fn clamp_pan(&mut self) {
        self.pan = self.clamp_to_bounds(self.pan);
    }

    fn clamp_to_bounds(&self, pan: Vec2) -> Vec2 {
        let max = self.max_pan();
        Vec2::new(pan.x.clamp(0.0, max), pan.y.clamp(0.0, max))
    }
}

/// Next integer zoom level in `direction`, snapping fractional zooms first
pub fn step_zoom(zoom: f32, direction: i32) -> f32 {
    let next = match direction.signum() {
        1 => zoom.floor() + 1.0,
        -1 => zoom.ceil() - 1.0,
        _ => zoom,
    };
    next.clamp(MIN_ZOOM, MAX_ZOOM)
}

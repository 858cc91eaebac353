//! Application State Module
//!
//! Holds everything the canvas is re-derived from each frame: the paint
//! store, the viewport, selection and hover, the active pointer gesture and
//! the current color. Every mutation goes through a method here so the
//! revision counter stays in step with what the renderer must show.

use macroquad::math::Vec2;
use tracing::{debug, trace};

use crate::core::*;

/// Pointer gesture in progress
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Gesture {
    #[default]
    Idle,
    /// Secondary-button drag moving the viewport
    Panning {
        /// Pointer position when the drag began
        start_pointer: Vec2,
        /// Viewport pan when the drag began
        start_pan: Vec2,
    },
}

impl Gesture {
    pub fn is_panning(&self) -> bool {
        matches!(self, Gesture::Panning { .. })
    }
}

/// The main application state containing all global state
#[derive(Clone, Debug)]
pub struct ApplicationState {
    /// Painted cells
    pub cells: PaintStore,
    /// Zoom and pan
    pub viewport: Viewport,
    pub selected: Option<CellCoord>,
    pub hovered: Option<CellCoord>,
    pub gesture: Gesture,
    /// Color used by future paint actions
    pub current_color: Rgba,
    /// Bumped on every change that affects the rendered canvas
    revision: u64,
}

impl Default for ApplicationState {
    fn default() -> Self {
        Self::new(Rgba::BLACK, INITIAL_ZOOM)
    }
}

impl ApplicationState {
    pub fn new(current_color: Rgba, zoom: f32) -> Self {
        ApplicationState {
            cells: PaintStore::new(),
            viewport: Viewport::new(zoom),
            selected: None,
            hovered: None,
            gesture: Gesture::Idle,
            current_color,
            revision: 0,
        }
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn touch(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }

    fn set_selected(&mut self, coord: Option<CellCoord>) {
        if self.selected != coord {
            self.selected = coord;
            self.touch();
        }
    }

    /// Select a cell for display. Ignored mid-pan.
    pub fn select_cell(&mut self, coord: CellCoord) {
        if self.gesture.is_panning() || !coord.in_grid() {
            return;
        }
        trace!(%coord, "select");
        self.set_selected(Some(coord));
    }

    /// Paint a cell and select it. Ignored mid-pan.
    pub fn paint_cell(&mut self, coord: CellCoord, color: Rgba) {
        if self.gesture.is_panning() || !coord.in_grid() {
            return;
        }
        debug!(%coord, %color, "paint");
        if self.cells.paint(coord, color) {
            self.touch();
        }
        self.set_selected(Some(coord));
    }

    pub fn hover_cell(&mut self, coord: Option<CellCoord>) {
        if self.hovered != coord {
            self.hovered = coord;
            self.touch();
        }
    }

    /// Empty the paint store and drop the selection. Hover and viewport stay.
    pub fn clear_all(&mut self) {
        debug!(painted = self.cells.len(), "clear all");
        if !self.cells.is_empty() {
            self.cells.clear();
            self.touch();
        }
        self.set_selected(None);
    }

    /// Sets the color for future paints; painted cells keep theirs.
    pub fn set_color(&mut self, color: Rgba) {
        self.current_color = color;
    }

    /// Start a pan drag. Only possible when zoomed in.
    pub fn begin_pan(&mut self, pointer: Vec2) -> bool {
        if self.viewport.zoom <= MIN_ZOOM {
            trace!("pan ignored at minimum zoom");
            return false;
        }
        debug!(pan = ?self.viewport.pan, "pan start");
        self.gesture = Gesture::Panning {
            start_pointer: pointer,
            start_pan: self.viewport.pan,
        };
        self.hover_cell(None);
        true
    }

    pub fn update_pan(&mut self, pointer: Vec2) {
        if let Gesture::Panning { start_pointer, start_pan } = self.gesture {
            if self.viewport.pan_from(start_pan, pointer - start_pointer) {
                self.touch();
            }
        }
    }

    pub fn end_pan(&mut self) {
        if self.gesture.is_panning() {
            debug!(pan = ?self.viewport.pan, "pan end");
            self.gesture = Gesture::Idle;
        }
    }

    /// Zoom one step around `pointer`, keeping the grid point under it fixed
    pub fn zoom_at(&mut self, pointer: Vec2, direction: i32) {
        if self.viewport.zoom_at(pointer, direction) {
            debug!(zoom = self.viewport.zoom, pan = ?self.viewport.pan, "zoom");
            self.touch();
        }
        // No pan is possible at minimum zoom, so a drag in progress is over
        if self.viewport.zoom <= MIN_ZOOM {
            self.end_pan();
        }
    }
}

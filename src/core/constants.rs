// Core constants for the pixel canvas
use super::color::Rgba;

/// Side length of the square grid, in cells.
pub const GRID_SIZE: i32 = 360;
pub const GRID_EXTENT: f32 = GRID_SIZE as f32;

pub const MIN_ZOOM: f32 = 1.0;
pub const MAX_ZOOM: f32 = 20.0;
pub const INITIAL_ZOOM: f32 = 1.25;

pub const BACKGROUND: Rgba = Rgba::rgb(255, 255, 255);
pub const GRID_LINE_COLOR: Rgba = Rgba::rgb(240, 240, 240);
pub const GRID_LINE_THICKNESS: f32 = 0.5;
pub const HOVER_COLOR: Rgba = Rgba::rgb(74, 144, 226);
pub const SELECTION_COLOR: Rgba = Rgba::rgb(51, 51, 51);
pub const OUTLINE_THICKNESS: f32 = 1.0;

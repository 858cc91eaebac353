use macroquad::prelude::*;

use crate::state::ApplicationState;

pub const TITLE: &str = "Pixel Canvas";
pub const INSTRUCTIONS: &str = "Scroll to zoom | Right-click + drag to pan | Double-click to paint";

/// Zoom as shown to the user: `2x`, `1.25x`
pub fn format_zoom(zoom: f32) -> String {
    if zoom.fract() == 0.0 {
        format!("Zoom: {zoom:.0}x")
    } else {
        format!("Zoom: {zoom}x")
    }
}

/// Status line text, without the selection part when nothing is selected
pub fn status_line(state: &ApplicationState) -> String {
    let zoom = format_zoom(state.viewport.zoom);
    match state.selected {
        Some(cell) => format!("Selected: {cell}    {zoom}"),
        None => zoom,
    }
}

pub fn draw_hud(state: &ApplicationState, origin: Vec2) {
    let line_height = 24.0;

    draw_text(TITLE, origin.x, origin.y, 32.0, BLACK);
    draw_text(&status_line(state), origin.x, origin.y + line_height, 20.0, DARKGRAY);
    draw_text(INSTRUCTIONS, origin.x, origin.y + line_height * 2.0, 16.0, GRAY);
}

use macroquad::prelude::*;

use super::events::{handle_event, CanvasEvent};
use crate::state::ApplicationState;

pub const BUTTON_WIDTH: f32 = 120.0;
pub const BUTTON_HEIGHT: f32 = 30.0;

pub fn draw_button(text: &str, x: f32, y: f32, width: f32, height: f32) -> bool {
    let rect = Rect::new(x, y, width, height);
    let hovered = rect.contains(Vec2::from(mouse_position()));
    let color = if hovered {
        Color::from_rgba(230, 90, 90, 255)
    } else {
        Color::from_rgba(210, 70, 70, 255)
    };
    draw_rectangle(x, y, width, height, color);
    draw_rectangle_lines(x, y, width, height, 2.0, BLACK);
    let text_size = measure_text(text, None, 18, 1.0);
    let text_x = x + (width - text_size.width) / 2.0;
    let text_y = y + (height + text_size.height) / 2.0;
    draw_text(text, text_x, text_y, 18.0, WHITE);
    is_mouse_button_pressed(MouseButton::Left) && hovered
}

/// Draw the toolbar at `origin` and apply its actions
pub fn render_toolbar(state: &mut ApplicationState, origin: Vec2) {
    if draw_button("Clear Canvas", origin.x, origin.y, BUTTON_WIDTH, BUTTON_HEIGHT) {
        handle_event(state, CanvasEvent::Clear);
    }
}

use macroquad::prelude::*;
use tracing::info;

use crate::core::GRID_EXTENT;
use crate::input::{handle_input, render_toolbar, InputDispatcher};
use crate::rendering::{draw_hud, CanvasRenderer};
use crate::settings::Settings;
use crate::state::ApplicationState;
use crate::ui::{ColorSelector, PALETTE_HEIGHT, PALETTE_WIDTH};

pub const MARGIN: f32 = 16.0;
pub const HEADER_HEIGHT: f32 = 96.0;

/// Where each part of the window goes this frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    pub hud: Vec2,
    pub toolbar: Vec2,
    pub palette: Vec2,
    /// On-screen rect the canvas is clipped to
    pub frame: Rect,
}

impl Layout {
    pub fn compute(screen_w: f32, screen_h: f32) -> Self {
        let frame_x = MARGIN * 2.0 + PALETTE_WIDTH;
        let frame_y = HEADER_HEIGHT;
        // Shrink the frame on small windows rather than spill past the edge
        let side = GRID_EXTENT
            .min(screen_w - frame_x - MARGIN)
            .min(screen_h - frame_y - MARGIN)
            .max(0.0);

        Layout {
            hud: vec2(MARGIN, MARGIN * 2.0),
            toolbar: vec2(MARGIN, frame_y + PALETTE_HEIGHT + MARGIN),
            palette: vec2(MARGIN, frame_y),
            frame: Rect::new(frame_x, frame_y, side, side),
        }
    }
}

/// Map a screen position into canvas space, where the frame always spans
/// `GRID_SIZE` units whatever its on-screen size
pub fn frame_to_canvas(frame: Rect, screen: Vec2) -> Vec2 {
    if frame.w <= 0.0 || frame.h <= 0.0 {
        return Vec2::ZERO;
    }
    (screen - frame.point()) / frame.size() * GRID_EXTENT
}

pub fn window_size() -> (i32, i32) {
    let layout = Layout::compute(f32::MAX, f32::MAX);
    (
        (layout.frame.right() + MARGIN) as i32,
        (layout.frame.bottom() + MARGIN) as i32,
    )
}

pub async fn run(settings: Settings) {
    let mut state = ApplicationState::new(settings.initial_color(), settings.initial_zoom());
    let mut dispatcher = InputDispatcher::new(&settings);
    let mut canvas_renderer = CanvasRenderer::new();
    let mut color_selector = ColorSelector::new();

    info!(
        zoom = state.viewport.zoom,
        color = %state.current_color,
        "pixel canvas ready"
    );

    loop {
        let layout = Layout::compute(screen_width(), screen_height());

        clear_background(Color::from_rgba(245, 245, 245, 255));

        handle_input(&mut state, &mut dispatcher, layout.frame, !color_selector.is_editing());

        canvas_renderer.draw(&state, layout.frame);
        draw_rectangle_lines(
            layout.frame.x - 1.0,
            layout.frame.y - 1.0,
            layout.frame.w + 2.0,
            layout.frame.h + 2.0,
            2.0,
            if state.gesture.is_panning() { DARKGRAY } else { GRAY },
        );

        color_selector.render(&mut state, layout.palette);
        render_toolbar(&mut state, layout.toolbar);
        draw_hud(&state, layout.hud);

        next_frame().await
    }
}

use macroquad::prelude::*;
use tracing::debug;

use super::scene::{build_scene, DrawCommand};
use crate::core::GRID_EXTENT;
use crate::state::ApplicationState;

/// Canvas renderer backed by a render target at physical resolution.
///
/// The target is `frame size * device pixel ratio` pixels and is redrawn in
/// full whenever the state revision changes, then blitted into the frame
/// every frame.
pub struct CanvasRenderer {
    render_target: Option<RenderTarget>,
    width: u32,
    height: u32,
    drawn_revision: Option<u64>,
}

impl CanvasRenderer {
    pub fn new() -> Self {
        CanvasRenderer {
            render_target: None,
            width: 0,
            height: 0,
            drawn_revision: None,
        }
    }

    /// Recreate the render target if the frame or pixel ratio changed.
    /// Returns false when there is no surface to draw on this frame.
    fn ensure_target(&mut self, frame: Rect) -> bool {
        let (width, height) = physical_size(frame.size(), screen_dpi_scale());
        if width == 0 || height == 0 {
            debug!(frame = ?frame, "canvas surface unavailable, skipping frame");
            self.render_target = None;
            return false;
        }

        if self.render_target.is_none() || width != self.width || height != self.height {
            debug!(width, height, "creating canvas render target");
            let rt = render_target(width, height);
            rt.texture.set_filter(FilterMode::Nearest);
            self.render_target = Some(rt);
            self.width = width;
            self.height = height;
            self.drawn_revision = None;
        }
        true
    }

    /// Redraw if needed and draw the canvas into `frame`
    pub fn draw(&mut self, state: &ApplicationState, frame: Rect) {
        if !self.ensure_target(frame) {
            return;
        }
        let Some(rt) = self.render_target.as_ref() else {
            return;
        };

        if self.drawn_revision != Some(state.revision()) {
            full_redraw(rt, state);
            self.drawn_revision = Some(state.revision());
        }

        let params = DrawTextureParams {
            dest_size: Some(frame.size()),
            flip_y: true, // Render targets are Y-flipped in OpenGL
            ..Default::default()
        };
        draw_texture_ex(&rt.texture, frame.x, frame.y, WHITE, params);
    }
}

impl Default for CanvasRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Physical pixel size of a logical extent at the given pixel ratio
pub fn physical_size(logical: Vec2, dpr: f32) -> (u32, u32) {
    let scaled = (logical * dpr.max(0.0)).round();
    (scaled.x.max(0.0) as u32, scaled.y.max(0.0) as u32)
}

/// Draw the whole scene into the target. The camera maps the `GRID_SIZE`
/// canvas units of the frame onto the physical target, so strokes scale with
/// both the frame size and the pixel ratio.
fn full_redraw(rt: &RenderTarget, state: &ApplicationState) {
    set_camera(&Camera2D {
        render_target: Some(rt.clone()),
        ..Camera2D::from_display_rect(Rect::new(0.0, 0.0, GRID_EXTENT, GRID_EXTENT))
    });

    clear_background(LIGHTGRAY);

    for command in build_scene(state) {
        match command {
            DrawCommand::Fill { rect, color } => {
                draw_rectangle(rect.x, rect.y, rect.w, rect.h, color.to_mq_color());
            }
            DrawCommand::Line { from, to, thickness, color } => {
                draw_line(from.x, from.y, to.x, to.y, thickness, color.to_mq_color());
            }
            DrawCommand::Outline { rect, thickness, color } => {
                draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, thickness, color.to_mq_color());
            }
        }
    }

    set_default_camera();
}

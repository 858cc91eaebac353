use macroquad::math::Vec2;

use crate::state::ApplicationState;

/// Canvas input after platform polling.
///
/// Pointer positions are logical pixels relative to the canvas's top-left
/// corner, the space `Viewport` works in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CanvasEvent {
    /// Primary button single activation
    Click { pointer: Vec2 },
    /// Primary button double activation
    DoubleClick { pointer: Vec2 },
    SecondaryDown { pointer: Vec2 },
    SecondaryUp,
    Move { pointer: Vec2 },
    /// Pointer left the canvas frame
    Leave,
    /// One discrete wheel input; positive is up (zoom in)
    Wheel { pointer: Vec2, direction: i32 },
    /// Clear control activated
    Clear,
}

/// Apply one input event to the state
pub fn handle_event(state: &mut ApplicationState, event: CanvasEvent) {
    match event {
        CanvasEvent::Click { pointer } => {
            if let Some(cell) = state.viewport.cell_at(pointer) {
                state.select_cell(cell);
            }
        }
        CanvasEvent::DoubleClick { pointer } => {
            if let Some(cell) = state.viewport.cell_at(pointer) {
                let color = state.current_color;
                state.paint_cell(cell, color);
            }
        }
        CanvasEvent::SecondaryDown { pointer } => {
            state.begin_pan(pointer);
        }
        CanvasEvent::SecondaryUp => state.end_pan(),
        CanvasEvent::Move { pointer } => {
            if state.gesture.is_panning() {
                state.update_pan(pointer);
            } else {
                let cell = state.viewport.cell_at(pointer);
                state.hover_cell(cell);
            }
        }
        CanvasEvent::Leave => {
            state.hover_cell(None);
            state.end_pan();
        }
        CanvasEvent::Wheel { pointer, direction } => state.zoom_at(pointer, direction),
        CanvasEvent::Clear => state.clear_all(),
    }
}

use macroquad::math::{Rect, Vec2};

use crate::core::*;
use crate::state::ApplicationState;

/// One drawing primitive in canvas-local logical pixels
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DrawCommand {
    Fill { rect: Rect, color: Rgba },
    Line { from: Vec2, to: Vec2, thickness: f32, color: Rgba },
    Outline { rect: Rect, thickness: f32, color: Rgba },
}

/// Full picture of the canvas for the current state, back to front:
/// background, grid lines, painted cells, hover outline, selection outline.
/// Everything is already translated by the viewport pan.
pub fn build_scene(state: &ApplicationState) -> Vec<DrawCommand> {
    let viewport = &state.viewport;
    let origin = viewport.grid_to_screen(Vec2::ZERO);
    let extent = viewport.canvas_extent();

    let mut commands = Vec::with_capacity(2 * (GRID_SIZE as usize + 1) + state.cells.len() + 3);

    commands.push(DrawCommand::Fill {
        rect: Rect::new(origin.x, origin.y, extent, extent),
        color: BACKGROUND,
    });

    for i in 0..=GRID_SIZE {
        let offset = i as f32 * viewport.zoom;
        commands.push(DrawCommand::Line {
            from: Vec2::new(origin.x + offset, origin.y),
            to: Vec2::new(origin.x + offset, origin.y + extent),
            thickness: GRID_LINE_THICKNESS,
            color: GRID_LINE_COLOR,
        });
        commands.push(DrawCommand::Line {
            from: Vec2::new(origin.x, origin.y + offset),
            to: Vec2::new(origin.x + extent, origin.y + offset),
            thickness: GRID_LINE_THICKNESS,
            color: GRID_LINE_COLOR,
        });
    }

    for (coord, color) in state.cells.iter() {
        commands.push(DrawCommand::Fill {
            rect: viewport.cell_to_screen_rect(coord),
            color,
        });
    }

    if let Some(hovered) = state.hovered {
        commands.push(DrawCommand::Outline {
            rect: viewport.cell_to_screen_rect(hovered),
            thickness: OUTLINE_THICKNESS,
            color: HOVER_COLOR,
        });
    }

    if let Some(selected) = state.selected {
        commands.push(DrawCommand::Outline {
            rect: viewport.cell_to_screen_rect(selected),
            thickness: OUTLINE_THICKNESS,
            color: SELECTION_COLOR,
        });
    }

    commands
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn grid_line_count() -> usize {
        2 * (GRID_SIZE as usize + 1)
    }

    #[test]
    fn test_empty_scene_is_background_and_grid() {
        let state = ApplicationState::new(Rgba::BLACK, 2.0);
        let scene = build_scene(&state);

        assert_eq!(scene.len(), 1 + grid_line_count());
        assert_eq!(
            scene[0],
            DrawCommand::Fill {
                rect: Rect::new(0.0, 0.0, 720.0, 720.0),
                color: BACKGROUND,
            }
        );
    }

    #[test]
    fn test_scene_is_translated_by_pan() {
        let mut state = ApplicationState::new(Rgba::BLACK, 4.0);
        state.viewport.pan = Vec2::new(10.0, 5.0);
        let scene = build_scene(&state);

        assert_eq!(
            scene[0],
            DrawCommand::Fill {
                rect: Rect::new(-40.0, -20.0, 1440.0, 1440.0),
                color: BACKGROUND,
            }
        );
        assert_eq!(
            scene[1],
            DrawCommand::Line {
                from: Vec2::new(-40.0, -20.0),
                to: Vec2::new(-40.0, 1420.0),
                thickness: GRID_LINE_THICKNESS,
                color: GRID_LINE_COLOR,
            }
        );
    }

    #[test]
    fn test_outlines_drawn_last_with_selection_on_top() {
        let mut state = ApplicationState::new(Rgba::BLACK, 3.0);
        let red = Rgba::rgb(255, 0, 0);
        state.paint_cell(CellCoord::new(2, 1), red);
        state.hover_cell(Some(CellCoord::new(4, 4)));
        let scene = build_scene(&state);

        let tail = &scene[scene.len() - 3..];
        assert_eq!(
            tail,
            &[
                DrawCommand::Fill { rect: Rect::new(6.0, 3.0, 3.0, 3.0), color: red },
                DrawCommand::Outline {
                    rect: Rect::new(12.0, 12.0, 3.0, 3.0),
                    thickness: OUTLINE_THICKNESS,
                    color: HOVER_COLOR,
                },
                DrawCommand::Outline {
                    rect: Rect::new(6.0, 3.0, 3.0, 3.0),
                    thickness: OUTLINE_THICKNESS,
                    color: SELECTION_COLOR,
                },
            ]
        );
    }
}

use macroquad::prelude::*;

use crate::core::color::{ColorError, Rgba, PALETTE, PALETTE_COLS, PALETTE_ROWS};
use crate::state::ApplicationState;

pub const SWATCH_SIZE: f32 = 20.0;
pub const SWATCH_PADDING: f32 = 4.0;
pub const PALETTE_WIDTH: f32 = PALETTE_COLS as f32 * (SWATCH_SIZE + SWATCH_PADDING) + SWATCH_PADDING;

const INDICATOR_SIZE: f32 = 40.0;
const HEX_FIELD_HEIGHT: f32 = 22.0;

/// Total height of the selector: indicator, swatch rows and hex field
pub const PALETTE_HEIGHT: f32 = INDICATOR_SIZE
    + SWATCH_PADDING * 3.0
    + PALETTE_ROWS as f32 * (SWATCH_SIZE + SWATCH_PADDING)
    + SWATCH_PADDING
    + HEX_FIELD_HEIGHT;

/// Screen position of the swatch at `row`, `col` for a palette drawn at `origin`
pub fn swatch_rect(origin: Vec2, row: usize, col: usize) -> Rect {
    let swatch_top = origin.y + INDICATOR_SIZE + SWATCH_PADDING * 3.0;
    Rect::new(
        origin.x + SWATCH_PADDING + col as f32 * (SWATCH_SIZE + SWATCH_PADDING),
        swatch_top + row as f32 * (SWATCH_SIZE + SWATCH_PADDING),
        SWATCH_SIZE,
        SWATCH_SIZE,
    )
}

/// Swatch color under `point`, if any
pub fn swatch_at(origin: Vec2, point: Vec2) -> Option<Rgba> {
    (0..PALETTE_ROWS)
        .flat_map(|row| (0..PALETTE_COLS).map(move |col| (row, col)))
        .find(|&(row, col)| swatch_rect(origin, row, col).contains(point))
        .map(|(row, col)| PALETTE[row][col])
}

/// Hex entry for arbitrary colors. Holds digits only; `#` is implied.
#[derive(Clone, Debug, Default)]
pub struct HexInput {
    digits: String,
    editing: bool,
}

impl HexInput {
    const MAX_DIGITS: usize = 6;

    pub fn begin(&mut self) {
        self.digits.clear();
        self.editing = true;
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    /// Text shown in the field
    pub fn text(&self) -> String {
        format!("#{}", self.digits)
    }

    /// Append a typed character; anything but hex digits is dropped
    pub fn push_char(&mut self, c: char) {
        if self.editing && c.is_ascii_hexdigit() && self.digits.len() < Self::MAX_DIGITS {
            self.digits.push(c.to_ascii_lowercase());
        }
    }

    pub fn backspace(&mut self) {
        self.digits.pop();
    }

    pub fn cancel(&mut self) {
        self.editing = false;
        self.digits.clear();
    }

    /// Finish editing and parse. `None` when the field was not being edited.
    pub fn commit(&mut self) -> Option<Result<Rgba, ColorError>> {
        if !self.editing {
            return None;
        }
        let parsed = self.digits.parse();
        self.cancel();
        Some(parsed)
    }
}

/// Screen rect of the hex entry field for a palette drawn at `origin`
pub fn hex_field_rect(origin: Vec2) -> Rect {
    let below = swatch_rect(origin, PALETTE_ROWS - 1, 0).bottom() + SWATCH_PADDING * 2.0;
    Rect::new(origin.x + SWATCH_PADDING, below, PALETTE_WIDTH - SWATCH_PADDING * 2.0, HEX_FIELD_HEIGHT)
}

/// Color selector: current color indicator, clickable swatches and a hex
/// entry field. Picking a color never touches already painted cells.
#[derive(Debug, Default)]
pub struct ColorSelector {
    hex: HexInput,
}

impl ColorSelector {
    pub fn new() -> Self {
        Self::default()
    }

    /// True while keystrokes belong to the hex field
    pub fn is_editing(&self) -> bool {
        self.hex.is_editing()
    }

    pub fn render(&mut self, state: &mut ApplicationState, origin: Vec2) {
        let mouse_pos = Vec2::from(mouse_position());

        // Current color indicator
        let indicator_x = origin.x + SWATCH_PADDING;
        let indicator_y = origin.y;
        draw_rectangle(indicator_x, indicator_y, INDICATOR_SIZE, INDICATOR_SIZE, state.current_color.to_mq_color());
        draw_rectangle_lines(indicator_x, indicator_y, INDICATOR_SIZE, INDICATOR_SIZE, 2.0, BLACK);
        draw_text("Pixel Color:", indicator_x + INDICATOR_SIZE + 8.0, indicator_y + 16.0, 16.0, BLACK);
        draw_text(
            &state.current_color.to_hex(),
            indicator_x + INDICATOR_SIZE + 8.0,
            indicator_y + 34.0,
            16.0,
            DARKGRAY,
        );

        for (row, colors) in PALETTE.iter().enumerate() {
            for (col, rgba) in colors.iter().enumerate() {
                let rect = swatch_rect(origin, row, col);
                draw_rectangle(rect.x, rect.y, rect.w, rect.h, rgba.to_mq_color());

                // Highlight if this is the current color
                let (border_width, border_color) = if *rgba == state.current_color {
                    (3.0, Color::from_rgba(255, 200, 0, 255))
                } else {
                    (1.0, BLACK)
                };
                draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, border_width, border_color);
            }
        }

        self.render_hex_field(state, origin, mouse_pos);

        if is_mouse_button_pressed(MouseButton::Left) {
            if let Some(color) = swatch_at(origin, mouse_pos) {
                tracing::debug!(%color, "color selected");
                state.set_color(color);
            }
        }
    }

    fn render_hex_field(&mut self, state: &mut ApplicationState, origin: Vec2, mouse_pos: Vec2) {
        let field = hex_field_rect(origin);

        if is_mouse_button_pressed(MouseButton::Left) {
            if field.contains(mouse_pos) {
                self.hex.begin();
            } else {
                self.hex.cancel();
            }
        }

        if self.hex.is_editing() {
            while let Some(c) = get_char_pressed() {
                self.hex.push_char(c);
            }
            if is_key_pressed(KeyCode::Backspace) {
                self.hex.backspace();
            }
            if is_key_pressed(KeyCode::Escape) {
                self.hex.cancel();
            }
            if is_key_pressed(KeyCode::Enter) || is_key_pressed(KeyCode::KpEnter) {
                match self.hex.commit() {
                    Some(Ok(color)) => {
                        tracing::debug!(%color, "color entered");
                        state.set_color(color);
                    }
                    Some(Err(err)) => tracing::warn!("ignoring color entry: {}", err),
                    None => {}
                }
            }
        }

        let (fill, label) = if self.hex.is_editing() {
            (WHITE, self.hex.text())
        } else {
            (Color::from_rgba(235, 235, 235, 255), "Hex: click to type".to_string())
        };
        draw_rectangle(field.x, field.y, field.w, field.h, fill);
        draw_rectangle_lines(field.x, field.y, field.w, field.h, 1.0, BLACK);
        draw_text(&label, field.x + 6.0, field.y + field.h - 6.0, 16.0, BLACK);
    }
}

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Errors from parsing a `#rrggbb` / `#rgb` color string
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    #[error("expected 3 or 6 hex digits, got {0}")]
    InvalidLength(usize),

    #[error("invalid hex digit {0:?}")]
    InvalidDigit(char),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Convert to macroquad Color (f32 0.0-1.0)
    pub fn to_mq_color(self) -> macroquad::color::Color {
        macroquad::color::Color::from_rgba(self.r, self.g, self.b, self.a)
    }

    /// Lowercase `#rrggbb`; alpha is not part of the hex form
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Rgba {
    type Err = ColorError;

    /// Accepts `#rrggbb`, `#rgb`, with or without the leading `#`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.trim().trim_start_matches('#');
        let nibbles = digits
            .chars()
            .map(|c| c.to_digit(16).map(|d| d as u8).ok_or(ColorError::InvalidDigit(c)))
            .collect::<Result<Vec<u8>, _>>()?;

        match nibbles.as_slice() {
            [r, g, b] => Ok(Rgba::rgb(r * 17, g * 17, b * 17)),
            [r1, r2, g1, g2, b1, b2] => Ok(Rgba::rgb(r1 << 4 | r2, g1 << 4 | g2, b1 << 4 | b2)),
            other => Err(ColorError::InvalidLength(other.len())),
        }
    }
}

pub const PALETTE_ROWS: usize = 4;
pub const PALETTE_COLS: usize = 8;

pub const PALETTE: [[Rgba; PALETTE_COLS]; PALETTE_ROWS] = [
    [
        Rgba::rgb(0, 0, 0),       // black
        Rgba::rgb(80, 80, 80),    // dark gray
        Rgba::rgb(128, 128, 128), // gray
        Rgba::rgb(200, 200, 200), // light gray
        Rgba::rgb(255, 255, 255), // white
        Rgba::rgb(255, 0, 0),     // red
        Rgba::rgb(139, 0, 0),     // dark red
        Rgba::rgb(255, 192, 203), // pink
    ],
    [
        Rgba::rgb(255, 0, 255),   // magenta
        Rgba::rgb(255, 165, 0),   // orange
        Rgba::rgb(255, 127, 80),  // coral
        Rgba::rgb(255, 255, 0),   // yellow
        Rgba::rgb(255, 215, 0),   // gold
        Rgba::rgb(0, 255, 0),     // lime
        Rgba::rgb(34, 139, 34),   // forest green
        Rgba::rgb(0, 100, 0),     // dark green
    ],
    [
        Rgba::rgb(0, 255, 255),   // aqua
        Rgba::rgb(0, 128, 128),   // teal
        Rgba::rgb(135, 206, 235), // sky blue
        Rgba::rgb(0, 0, 255),     // blue
        Rgba::rgb(0, 0, 128),     // navy
        Rgba::rgb(128, 0, 128),   // purple
        Rgba::rgb(75, 0, 130),    // indigo
        Rgba::rgb(200, 162, 200), // lilac
    ],
    [
        Rgba::rgb(210, 180, 140), // tan
        Rgba::rgb(165, 42, 42),   // brown
        Rgba::rgb(139, 69, 19),   // saddle brown
        Rgba::rgb(128, 0, 0),     // maroon
        Rgba::rgb(255, 218, 185), // peach
        Rgba::rgb(189, 252, 201), // mint
        Rgba::rgb(137, 207, 240), // baby blue
        Rgba::rgb(63, 63, 116),   // steel blue
    ],
];

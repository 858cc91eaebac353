pub mod palette;

pub use palette::{ColorSelector, PALETTE_HEIGHT, PALETTE_WIDTH};

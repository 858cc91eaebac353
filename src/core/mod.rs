pub mod constants;
pub mod cell;
pub mod color;
pub mod viewport;

pub use constants::*;
pub use cell::*;
pub use color::*;
pub use viewport::*;

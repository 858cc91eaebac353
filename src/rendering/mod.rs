pub mod canvas;
pub mod hud;
pub mod scene;

pub use canvas::CanvasRenderer;
pub use hud::draw_hud;
pub use scene::{build_scene, DrawCommand};

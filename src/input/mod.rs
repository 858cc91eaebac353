pub mod click;
pub mod dispatcher;
pub mod events;
pub mod ui;

pub use click::ClickTracker;
pub use dispatcher::{handle_input, InputDispatcher};
pub use events::{handle_event, CanvasEvent};
pub use ui::render_toolbar;

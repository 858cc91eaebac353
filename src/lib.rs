pub mod app;
pub mod core;
pub mod input;
pub mod logging;
pub mod rendering;
pub mod settings;
pub mod state;
pub mod ui;

use macroquad::prelude::Conf;
use pixel_canvas::{app, logging, settings::Settings};

fn window_conf() -> Conf {
    let (width, height) = app::window_size();
    Conf {
        window_title: "Pixel Canvas".to_owned(),
        window_width: width,
        window_height: height,
        high_dpi: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let path = Settings::default_path();
    let loaded = Settings::load(&path);
    let settings = loaded.as_ref().cloned().unwrap_or_default();
    logging::init(settings.debug_logging);

    if let Err(err) = &loaded {
        tracing::warn!("failed to load settings from {}: {}; using defaults", path, err);
    }

    app::run(settings).await;
}

use tracing_subscriber::EnvFilter;

/// Directives applied on top of the base level. Windowing internals stay at
/// `warn` so per-frame noise does not drown out canvas actions.
const QUIET_DEPENDENCIES: &[&str] = &["macroquad=warn", "miniquad=warn"];

/// Filter directives: the canvas crate at `info` (or `debug`), everything
/// else at `warn`
pub fn filter_directives(debug: bool) -> String {
    let level = if debug { "debug" } else { "info" };
    let mut directives = vec!["warn".to_string(), format!("pixel_canvas={level}")];
    directives.extend(QUIET_DEPENDENCIES.iter().map(|d| d.to_string()));
    directives.join(",")
}

pub fn default_filter(debug: bool) -> EnvFilter {
    EnvFilter::new(filter_directives(debug))
}

/// Set up the global subscriber. In debug mode `RUST_LOG` takes precedence
/// over the built-in filter; otherwise it is ignored.
pub fn init(debug: bool) {
    let filter = if debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(true))
    } else {
        default_filter(false)
    };

    if tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(debug)
        .try_init()
        .is_err()
    {
        tracing::debug!("subscriber already installed");
    }
}

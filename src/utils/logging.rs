//! Tracing subscriber setup for the front-ends
//!
//! The library itself only emits `tracing` events; a binary or the wasm entry
//! point decides where they go.

/// Install a stderr subscriber for the CLI.
///
/// `RUST_LOG` takes precedence; otherwise `verbosity` picks the level
/// (0 = warn, 1 = info, 2 = debug, 3+ = trace) and `quiet` forces errors only.
#[cfg(feature = "cli")]
pub fn init_cli(verbosity: u8, quiet: bool) {
    use tracing_subscriber::EnvFilter;

    let level = if quiet {
        "error"
    } else {
        match verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    // A second call (e.g. from tests) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Route events to the browser console.
#[cfg(feature = "wasm")]
pub fn init_web() {
    use tracing_subscriber::filter::LevelFilter;
    use tracing_subscriber::prelude::*;

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        // std::time is unavailable in the browser
        .without_time()
        .with_writer(tracing_web::MakeWebConsoleWriter::new());

    let _ = tracing_subscriber::registry()
        .with(LevelFilter::INFO)
        .with(fmt_layer)
        .try_init();
}

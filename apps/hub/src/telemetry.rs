use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Structured logs go to stderr; stdout carries the game trace.
/// Filter from `HUB_LOG`, then `RUST_LOG`, else `off` so a default run
/// writes nothing to stderr but its diagnostic line.
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_env("HUB_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("off"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Installs a stdout layer plus a daily rotating file layer in `logs/`.
///
/// Levels come from `RUST_LOG`, falling back to `info` everywhere and
/// `debug` for the roster crates.
pub fn setup_logging() {
    let file_appender = tracing_appender::rolling::daily("logs", "roster.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let console_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_thread_ids(true)
        .with_target(true);

    let file_layer = fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false)
        .with_thread_ids(true)
        .with_target(true);

    let default_filter = "info,roster=debug,roster_app=debug,roster_web=debug,roster_db=debug";

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(console_layer)
        .init();

    // The file writer stops flushing once the guard drops; it has to live
    // as long as the process.
    keep_alive(guard);
}

fn keep_alive(guard: WorkerGuard) {
    std::mem::forget(guard);
}

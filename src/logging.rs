use tracing::Level;

/// Installs a formatting subscriber for the `tracing` macros used throughout the crate.
pub fn init_logging(max_level: Level) {
    tracing_subscriber::fmt()
        .with_thread_names(true)
        .with_max_level(max_level)
        .with_writer(std::io::stderr)
        .init();
}

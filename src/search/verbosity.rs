/// How much the binaries log while solving. Each level maps to the most
/// detailed `tracing` level that is still printed.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Errors only.
    Silent,
    /// Search start, progress and final statistics.
    #[default]
    Normal,
    /// Also the goal node and per-search details.
    Verbose,
    /// Every node expansion.
    Debug,
}

impl From<Verbosity> for tracing::Level {
    fn from(value: Verbosity) -> Self {
        match value {
            Verbosity::Silent => tracing::Level::ERROR,
            Verbosity::Normal => tracing::Level::INFO,
            Verbosity::Verbose => tracing::Level::DEBUG,
            Verbosity::Debug => tracing::Level::TRACE,
        }
    }
}

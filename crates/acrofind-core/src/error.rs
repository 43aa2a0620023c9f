use std::path::PathBuf;

/// Errors produced by acrofind operations outside the pure matching core.
///
/// "No match" is not represented here — the scorer reports it as `None` and
/// the collector degrades to an empty result set.
#[derive(Debug, thiserror::Error)]
pub enum AcrofindError {
    #[error("failed to read config: {0}")]
    ConfigRead(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("failed to read candidate list {}: {source}", .path.display())]
    InputRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid prefilter pattern: {0}")]
    Prefilter(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

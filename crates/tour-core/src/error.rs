use thiserror::Error;

/// Failures reported by the external collaborators.
///
/// None of these escape a store operation: the store logs them and carries
/// on with a defined default.
#[derive(Debug, Error)]
pub enum TourError {
    #[error("data load failed: {0}")]
    DataLoad(String),
    #[error("could not decode {what}: {source}")]
    Decode {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("persistence failed: {0}")]
    Persistence(String),
    #[error("playback failed: {0}")]
    Playback(String),
}

pub type Result<T, E = TourError> = std::result::Result<T, E>;

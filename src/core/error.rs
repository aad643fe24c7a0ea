use thiserror::Error;

/// Failures while reading page-supplied configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SiteError {
    #[error("setting `{key}` has invalid value `{value}`")]
    InvalidSetting { key: String, value: String },
    #[error("duplicate track id `{0}`")]
    DuplicateTrack(String),
    #[error("track `{0}` has no audio source")]
    MissingSource(String),
}

use thiserror::Error;

/// Failures the generator reports back to its caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeneratorError {
    #[error("no generation options have been set")]
    NotConfigured,

    #[error("invalid option: {0}")]
    InvalidOption(String),

    #[error("the filtered result is empty")]
    EmptyResult,
}

/// Why a single seed word's association lookup failed.
///
/// These never abort a generation; the seed just contributes nothing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("no API key configured (set WORD_ASSOCIATIONS_API_KEY or api_key in config)")]
    MissingApiKey,

    #[error("built without network support")]
    NetworkDisabled,

    #[error("request failed: {0}")]
    Transport(String),

    #[error("unexpected HTTP status {0}")]
    Status(u16),

    #[error("API error {code}: {message}")]
    Api { code: String, message: String },

    #[error("malformed response: {0}")]
    Decode(String),
}

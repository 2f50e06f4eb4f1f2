use thiserror::Error;

/// APNs push errors
///
/// Only failures that occur before the request reaches the wire surface
/// here. Delivery outcomes from Apple, including transport failures, are
/// reported through `ApnsResponse` so callers handle every wire result
/// through one code path.
#[derive(Error, Debug)]
pub enum ApnsError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Failed to parse APNs auth key: {0}")]
    KeyParse(String),

    #[error("Failed to sign provider token: {0}")]
    Signing(String),

    #[error("Failed to encode payload: {0}")]
    PayloadEncode(String),

    #[error("Failed to initialize APNs client: {0}")]
    Init(String),
}

pub type Result<T> = std::result::Result<T, ApnsError>;

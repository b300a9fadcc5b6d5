use thiserror::Error;

/// Errors surfaced by the remote translation client and the CRUD surface.
///
/// None of these are fatal to the surrounding form: callers recover locally,
/// typically by leaving a field as-is and showing a transient notice.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never completed (network failure, timeout, DNS, ...).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The remote call completed but reported failure (non-2xx status or a
    /// `success: false` envelope).
    #[error("remote reported failure: {0}")]
    RemoteFailure(String),

    /// The response body could not be decoded into the expected shape.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// The operation exists in the UI but has no backend support yet
    /// (skill creation and editing).
    #[error("not yet supported: {0}")]
    NotSupported(&'static str),
}

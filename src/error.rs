use thiserror::Error;

/// Failure while producing a single illustration.
///
/// Drawing, directory-creation and JPEG-encoding failures are deliberately
/// not distinguished; the operation name identifies which image failed and
/// the source carries the underlying cause.
#[derive(Debug, Error)]
#[error("failed to generate {operation} image: {source}")]
pub struct ImageGenerationError {
    /// Name of the illustration that failed (e.g. "funding").
    pub operation: String,

    /// Underlying cause.
    #[source]
    pub source: anyhow::Error,
}

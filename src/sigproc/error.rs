/// Errors that can occur during frequency-to-time transforms
#[derive(Debug, thiserror::Error)]
pub enum SigprocError {
    /// Scan or transform parameters outside their valid range
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Array could not be viewed with the expected dimensionality
    #[error("Shape error: {0}")]
    ShapeError(#[from] ndarray::ShapeError),
}

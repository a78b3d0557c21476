use thiserror::Error;

/// Library error type for viewplane operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Draw parameters violate the caller contract (zero-sized window,
    /// non-positive image dimensions, and the like).
    #[error("invalid draw parameters: {0}")]
    BadParams(String),

    /// A render target does not match the window size the parameters claim.
    #[error("render target is {actual_w}x{actual_h} but params expect {expect_w}x{expect_h}")]
    TargetMismatch {
        expect_w: u32,
        expect_h: u32,
        actual_w: u32,
        actual_h: u32,
    },

    /// Configuration failed validation after parsing.
    #[error("invalid configuration: {0}")]
    BadConfig(String),

    /// Underlying IO error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// YAML/serde configuration error.
    #[error(transparent)]
    Config(#[from] serde_yaml::Error),

    /// Image decode/encode error.
    #[error(transparent)]
    Image(#[from] image::ImageError),

    /// Rendering error from the GPU back end.
    #[error("render error: {0}")]
    Render(anyhow::Error),
}

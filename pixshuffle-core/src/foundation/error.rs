/// Convenience result type used across pixshuffle.
pub type PixshuffleResult<T> = Result<T, PixshuffleError>;

/// Top-level error taxonomy used by generation, codec and persistence APIs.
#[derive(thiserror::Error, Debug)]
pub enum PixshuffleError {
    /// Malformed caller input (zero dimensions, empty seed, bad buffers).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// An offset map or raster whose shape disagrees with the declared grid.
    #[error(
        "dimension mismatch: expected {}x{}, got {}x{}",
        .expected.0,
        .expected.1,
        .actual.0,
        .actual.1
    )]
    DimensionMismatch {
        /// Declared `(width, height)`.
        expected: (u32, u32),
        /// Observed `(width, height)`.
        actual: (u32, u32),
    },

    /// Filesystem failure at the persist boundary.
    #[error("io error: {context}: {source:#}")]
    Io {
        /// What was being attempted, including the path involved.
        context: String,
        /// Underlying failure.
        #[source]
        source: anyhow::Error,
    },

    /// Wrapped lower-level error from dependencies (image decoding, serde).
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PixshuffleError {
    /// Build a [`PixshuffleError::InvalidInput`] value.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Build a [`PixshuffleError::DimensionMismatch`] value from `(width, height)` pairs.
    pub fn dimension_mismatch(expected: (u32, u32), actual: (u32, u32)) -> Self {
        Self::DimensionMismatch { expected, actual }
    }

    /// Build a [`PixshuffleError::Io`] value.
    pub fn io(context: impl Into<String>, source: impl Into<anyhow::Error>) -> Self {
        Self::Io {
            context: context.into(),
            source: source.into(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;

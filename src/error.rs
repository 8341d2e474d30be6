//! Error types for path and circuit generation.

/// Errors returned by the public generation entry points.
///
/// Backbite moves themselves never fail: a rejected move is part of the
/// Markov chain, not an error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("circuit did not close after {attempts} backbite moves")]
    NonConvergence { attempts: u64 },
}

pub type Result<T> = std::result::Result<T, Error>;

/// Checks the grid size shared by every entry point.
pub(crate) fn check_size(n: usize) -> Result<()> {
    if n < 2 {
        return Err(Error::InvalidArgument(format!(
            "grid size must be at least 2, got {n}"
        )));
    }
    Ok(())
}

/// Checks the quality factor: it must be a finite, strictly positive real.
pub(crate) fn check_quality(q: f64) -> Result<()> {
    if !q.is_finite() || q <= 0.0 {
        return Err(Error::InvalidArgument(format!(
            "quality factor must be finite and positive, got {q}"
        )));
    }
    Ok(())
}

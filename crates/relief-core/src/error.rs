use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReliefError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ReliefError>;

/// Reject NaN and infinite scalars as out-of-contract input.
pub(crate) fn ensure_finite(name: &str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ReliefError::InvalidInput(format!("{name} must be finite, got {value}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_finite_scalars_are_invalid_input() {
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(matches!(ensure_finite("depth", bad), Err(ReliefError::InvalidInput(_))));
        }
        assert!(ensure_finite("depth", -12.5).is_ok());
    }
}

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StrategyError {
    #[error("No arms to draw from")]
    NoArms,
    #[error("Epsilon must lie in [0, 1], got {0}")]
    InvalidEpsilon(f64),
    #[error("Sampling failed: {0}")]
    SamplingError(String),
}

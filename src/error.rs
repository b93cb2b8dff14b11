use thiserror::Error;

/// Fatal solver errors. All of these surface before any generation runs;
/// nothing here is retryable.
#[derive(Error, Debug)]
pub enum SolverError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("invalid instance: {0}")]
    InvalidInstance(String),
    #[error("failed to read instance file")]
    Io(#[from] std::io::Error),
    #[error("malformed instance file: {0}")]
    Parse(String),
}

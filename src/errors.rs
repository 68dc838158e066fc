use std::io;
use thiserror::Error;

/// Error type for failed lookups, invalid configurations, and convergence problems.
#[derive(Error, Debug)]
pub enum PropertyError {
    // errors related to component resolution and parameter handling
    #[error("The following component(s) were not found: {0}")]
    ComponentsNotFound(String),
    #[error("The correlation '{0}' is not known. Available: [{1}]")]
    UnsupportedCorrelation(String, String),
    #[error("The mixing rule '{0}' is not known. Available: [{1}]")]
    UnsupportedMixingRule(String, String),
    #[error("Form {0} is not available for this component. Available forms: {1:?}")]
    InvalidForm(u32, Vec<u32>),
    #[error("Multiple correlation forms are available, a form has to be specified. Available forms: {0:?}")]
    AmbiguousForm(Vec<u32>),
    #[error("Incompatible parameters: {0}")]
    IncompatibleParameters(String),
    #[error("Missing parameters: {0}")]
    MissingParameters(String),
    #[error("No binary parameters for component pair ({0}, {1}).")]
    MissingBinaryParameters(u32, u32),

    // errors related to algorithms
    #[error("`{0}` did not converge within the maximum number of iterations.")]
    NotConverged(String),
    #[error("Temperature ({0} K) is at or above the critical temperature ({1} K).")]
    Supercritical(f64, f64),

    // errors related to file handling
    #[error(transparent)]
    FileIO(#[from] io::Error),

    // json errors
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
}

/// Convenience type for `Result<T, PropertyError>`.
pub type PropertyResult<T> = Result<T, PropertyError>;

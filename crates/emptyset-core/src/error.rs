use thiserror::Error;

/// Fatal error shared across emptyset crates.
///
/// Threshold breaches are not errors; they are recorded in the run report.
/// Every variant here aborts the whole run and maps to the unknown state.
#[derive(Debug, Error)]
pub enum Error {
    /// The external tool could not be started or exited with failure.
    #[error("execution error: {0}")]
    Exec(String),
    /// The tool ran but replied with an in-band protocol failure.
    #[error("protocol error: {0}")]
    Protocol(String),
    /// The tool output did not match the expected format.
    #[error("parse error: {0}")]
    Parse(String),
}

/// Convenience alias for results returned by emptyset crates.
pub type Result<T> = std::result::Result<T, Error>;

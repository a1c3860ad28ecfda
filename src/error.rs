use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the simulation core.
///
/// Every variant is a local precondition failure reported at the point of
/// the offending call; nothing here is retried or silently swallowed.
#[derive(Debug, Error)]
pub enum Error {
    /// Body rejected at creation (non-positive mass, non-finite state).
    #[error("invalid body: {0}")]
    InvalidBody(String),

    /// Non-positive world extent, timestep, or other bad scenario parameter.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

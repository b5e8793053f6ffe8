use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The MAC primitive rejected its key material. Fatal, never retried.
    #[error("keyed hash unavailable: {0}")]
    Computation(String),

    /// Wordlist failed load-time validation.
    #[error("wordlist configuration: {0}")]
    Configuration(String),

    /// Caller-supplied parameter outside the supported domain.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, Error>;

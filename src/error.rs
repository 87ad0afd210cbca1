/// Errors for keyword extraction.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Input cannot produce corpus statistics
    /// (empty corpus, no vocabulary left, unknown document index).
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// A parameter is outside its accepted range.
    #[error("invalid configuration: {0}")]
    Configuration(String),
}

pub type Result<T> = std::result::Result<T, Error>;

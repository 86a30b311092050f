use thiserror::Error;

/// Errors that can occur when reading, normalizing or writing YAML.
#[derive(Debug, Error)]
pub enum Error {
    /// The input bytes are not UTF-8
    #[error("invalid UTF-8 input: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    /// The input holds no YAML document at all
    #[error("yaml parse: input contains no document")]
    EmptyInput,

    /// The text does not follow the YAML grammar
    #[error("yaml parse: {0}")]
    Parse(serde_yml::Error),

    /// A mapping key is neither a string nor an integer
    #[error("type mismatch: expect map key string or integer; got: {0}")]
    KeyType(&'static str),

    /// Two keys of one mapping became the same string
    #[error("duplicate mapping key after conversion to string: {0:?}")]
    DuplicateKey(String),

    #[error("yaml encode: {0}")]
    Encode(serde_yml::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

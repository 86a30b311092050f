use thiserror::Error;

/// Errors that can occur when reading or writing JSON text.
#[derive(Debug, Error)]
pub enum Error {
    /// The input bytes are not UTF-8
    #[error("invalid UTF-8 input: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    /// The text is empty or does not follow the JSON grammar
    #[error("json parse: {0}")]
    Parse(serde_json::Error),

    /// The tree holds a value JSON cannot express (NaN or an infinity)
    #[error("json: unsupported value: {0}")]
    UnsupportedValue(String),

    #[error("json encode: {0}")]
    Encode(serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

pub mod error;

use error::{Error, Result};
use json2yaml::decoder::{DecodableFrom, Decoder};
use json2yaml::encoder::{EncodableTo, Encoder};
use value::Value;

/// A complete JSON document as text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Json {
    text: String,
}

impl Json {
    pub fn new(text: impl Into<String>) -> Self {
        Json { text: text.into() }
    }

    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self> {
        Ok(Json::new(String::from_utf8(bytes)?))
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

impl DecodableFrom<Json> for Value {}

impl Decoder<Json, Value> for Json {
    type Error = Error;

    fn decode(&self) -> Result<Value> {
        tracing::debug!(bytes = self.text.len(), "decoding JSON");
        serde_json::from_str(&self.text).map_err(Error::Parse)
    }
}

impl EncodableTo<Value> for Json {}

impl Encoder<Value, Json> for Value {
    type Error = Error;

    /// Pretty-prints with two-space indentation and a trailing newline.
    fn encode(&self) -> Result<Json> {
        ensure_finite(self)?;
        let mut text = serde_json::to_string_pretty(self).map_err(Error::Encode)?;
        text.push('\n');
        Ok(Json { text })
    }
}

// serde_json writes NaN and the infinities as `null`, which would
// silently change the data.
fn ensure_finite(value: &Value) -> Result<()> {
    match value {
        Value::Number(n) if !n.is_finite() => Err(Error::UnsupportedValue(n.to_string())),
        Value::Sequence(seq) => seq.iter().try_for_each(ensure_finite),
        Value::Mapping(map) => map.values().try_for_each(ensure_finite),
        _ => Ok(()),
    }
}

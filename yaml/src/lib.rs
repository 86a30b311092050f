pub mod error;
mod node;
pub mod normalize;

use error::{Error, Result};
use json2yaml::decoder::{DecodableFrom, Decoder};
use json2yaml::encoder::{EncodableTo, Encoder};
use serde::Deserialize;
use value::Value;

pub use node::Node;
pub use normalize::{Collision, normalize};

/// A YAML stream as text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Yaml {
    text: String,
}

impl Yaml {
    pub fn new(text: impl Into<String>) -> Self {
        Yaml { text: text.into() }
    }

    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self> {
        Ok(Yaml::new(String::from_utf8(bytes)?))
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

impl DecodableFrom<Yaml> for Node {}

impl Decoder<Yaml, Node> for Yaml {
    type Error = Error;

    /// Decodes the first document of the stream. Later documents are
    /// not read.
    fn decode(&self) -> Result<Node> {
        if !has_content(&self.text) {
            return Err(Error::EmptyInput);
        }
        let mut documents = serde_yml::Deserializer::from_str(&self.text);
        // serde_yml yields a null document for an empty stream, which
        // `has_content` already rules out.
        let first = documents.next().ok_or(Error::EmptyInput)?;
        let value = serde_yml::Value::deserialize(first).map_err(Error::Parse)?;
        tracing::debug!(bytes = self.text.len(), "decoded first YAML document");
        Ok(Node::from(value))
    }
}

// A stream made of blank and comment lines holds no document. A `---`
// marker alone is an explicit null document.
fn has_content(text: &str) -> bool {
    text.lines().any(|line| {
        let line = line.trim_start();
        !line.is_empty() && !line.starts_with('#')
    })
}

impl EncodableTo<Value> for Yaml {}

impl Encoder<Value, Yaml> for Value {
    type Error = Error;

    fn encode(&self) -> Result<Yaml> {
        let text = serde_yml::to_string(self).map_err(Error::Encode)?;
        Ok(Yaml { text })
    }
}

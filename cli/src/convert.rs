use json::Json;
use json2yaml::decoder::Decoder;
use json2yaml::encoder::Encoder;
use value::Value;
use yaml::{Collision, Node, Yaml, normalize};

use crate::error::Result;

/// JSON to YAML. Any JSON tree is already valid YAML, so no
/// normalization runs on this path.
pub(crate) fn json_to_yaml(input: Vec<u8>) -> Result<Yaml> {
    let json = Json::from_bytes(input)?;
    let value: Value = json.decode()?;
    let yaml: Yaml = value.encode()?;
    Ok(yaml)
}

/// YAML to JSON, with mapping keys converted to strings first.
pub(crate) fn yaml_to_json(input: Vec<u8>, collision: Collision) -> Result<Json> {
    let yaml = Yaml::from_bytes(input)?;
    let node: Node = yaml.decode()?;
    let value = normalize(&node, collision)?;
    let json: Json = value.encode()?;
    Ok(json)
}

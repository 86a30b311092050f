use serde_yml::Value as YamlValue;
use value::{Number, Value};

/// A decoded YAML tree.
///
/// Unlike [`Value`], a mapping key can be any node, and pairs are kept in
/// document order. Tags are not represented.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Sequence(Vec<Node>),
    Mapping(Vec<(Node, Node)>),
}

impl Node {
    /// Name of the runtime kind of this node, used in diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Node::Null => "null",
            Node::Bool(_) => "bool",
            Node::Number(n) if n.is_integer() => "integer",
            Node::Number(_) => "float",
            Node::String(_) => "string",
            Node::Sequence(_) => "sequence",
            Node::Mapping(_) => "mapping",
        }
    }
}

impl From<YamlValue> for Node {
    fn from(value: YamlValue) -> Self {
        match value {
            YamlValue::Null => Node::Null,
            YamlValue::Bool(b) => Node::Bool(b),
            YamlValue::Number(n) => Node::Number(number(&n)),
            YamlValue::String(s) => Node::String(s),
            YamlValue::Sequence(seq) => Node::Sequence(seq.into_iter().map(Node::from).collect()),
            YamlValue::Mapping(map) => Node::Mapping(
                map.into_iter()
                    .map(|(k, v)| (Node::from(k), Node::from(v)))
                    .collect(),
            ),
            // `!tag value` keeps only the value
            YamlValue::Tagged(tagged) => Node::from(tagged.value),
        }
    }
}

fn number(n: &serde_yml::Number) -> Number {
    if let Some(i) = n.as_i64() {
        Number::Integer(i)
    } else if let Some(u) = n.as_u64() {
        Number::Unsigned(u)
    } else {
        Number::Float(n.as_f64().unwrap_or(f64::NAN))
    }
}

/// Lifts a normalized tree back into a node, with string keys only.
impl From<&Value> for Node {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => Node::Null,
            Value::Bool(b) => Node::Bool(*b),
            Value::Number(n) => Node::Number(*n),
            Value::String(s) => Node::String(s.clone()),
            Value::Sequence(seq) => Node::Sequence(seq.iter().map(Node::from).collect()),
            Value::Mapping(map) => Node::Mapping(
                map.iter()
                    .map(|(k, v)| (Node::String(k.clone()), Node::from(v)))
                    .collect(),
            ),
        }
    }
}

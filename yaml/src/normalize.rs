//! Conversion of a decoded YAML tree into a JSON-legal [`Value`].
//!
//! YAML allows any node as a mapping key; JSON only allows strings. String
//! keys are kept, integer keys become their decimal text, and every other
//! key kind is an error. The walk is depth-first: a pair's value is
//! normalized before its key is converted, and the first error aborts the
//! whole walk.
//!
//! A string key `"7"` and an integer key `7` in the same mapping end up as
//! the same key. [`Collision`] decides what happens then.

use json2yaml::decoder::{DecodableFrom, Decoder};
use value::{Map, Value};

use crate::Node;
use crate::error::{Error, Result};

/// What to do when two keys of one mapping convert to the same string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Collision {
    /// Keep the value of the pair that comes last in the document.
    #[default]
    LastWins,
    /// Fail with [`Error::DuplicateKey`].
    Reject,
}

/// Builds a fresh string-keyed tree from `node`.
///
/// # Errors
///
/// [`Error::KeyType`] for a key that is neither a string nor an integer,
/// and [`Error::DuplicateKey`] for a collision under [`Collision::Reject`].
pub fn normalize(node: &Node, collision: Collision) -> Result<Value> {
    match node {
        Node::Mapping(pairs) => normalize_mapping(pairs, collision).map(Value::Mapping),
        Node::Sequence(seq) => seq
            .iter()
            .map(|n| normalize(n, collision))
            .collect::<Result<Vec<_>>>()
            .map(Value::Sequence),
        Node::Null => Ok(Value::Null),
        Node::Bool(b) => Ok(Value::Bool(*b)),
        Node::Number(n) => Ok(Value::Number(*n)),
        Node::String(s) => Ok(Value::String(s.clone())),
    }
}

fn normalize_mapping(pairs: &[(Node, Node)], collision: Collision) -> Result<Map> {
    let mut map = Map::new();
    for (key, value) in pairs {
        let value = normalize(value, collision)?;
        let key = key_to_string(key)?;
        if map.contains_key(&key) {
            match collision {
                Collision::Reject => return Err(Error::DuplicateKey(key)),
                Collision::LastWins => {
                    tracing::warn!(key = %key, "mapping keys collide after conversion to string, keeping the later value");
                }
            }
        }
        map.insert(key, value);
    }
    Ok(map)
}

fn key_to_string(key: &Node) -> Result<String> {
    match key {
        Node::String(s) => Ok(s.clone()),
        Node::Number(n) if n.is_integer() => Ok(n.to_string()),
        other => Err(Error::KeyType(other.type_name())),
    }
}

impl DecodableFrom<Node> for Value {}

impl Decoder<Node, Value> for Node {
    type Error = Error;

    fn decode(&self) -> Result<Value> {
        normalize(self, Collision::default())
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use json2yaml::decoder::Decoder;
    use value::{Number, Value};

    use crate::error::Error;
    use crate::normalize::{Collision, normalize};
    use crate::{Node, Yaml};

    fn string(s: &str) -> Node {
        Node::String(s.to_string())
    }

    fn int(n: i64) -> Node {
        Node::Number(Number::Integer(n))
    }

    fn decode(input: &str) -> Result<Value, Error> {
        let node: Node = Yaml::new(input).decode()?;
        node.decode()
    }

    #[test]
    fn test_integer_key_becomes_decimal_string() {
        let actual = decode(r#"{7: "a", "b": 2}"#).unwrap();

        let expected: Value = [("7", Value::from("a")), ("b", Value::from(2i64))]
            .into_iter()
            .collect();
        assert_eq!(expected, actual);
    }

    #[rstest(
        key,
        expected,
        case(int(-12), "-12"),
        case(Node::Number(Number::Unsigned(u64::MAX)), "18446744073709551615"),
        case(string(""), ""),
        case(string("x y"), "x y")
    )]
    fn test_key_to_string(key: Node, expected: &str) {
        let node = Node::Mapping(vec![(key, Node::Null)]);

        let actual = normalize(&node, Collision::LastWins).unwrap();

        assert_eq!(Some(&Value::Null), actual.get(expected));
    }

    #[rstest(
        input,
        expected,
        case("{true: 1}", "bool"),
        case("{1.5: x}", "float"),
        case("{~: x}", "null")
    )]
    fn test_unsupported_key_from_text(input: &str, expected: &str) {
        match decode(input) {
            Err(Error::KeyType(got)) => assert_eq!(expected, got),
            other => panic!("expected KeyType error, got {:?}", other),
        }
    }

    #[rstest(
        key,
        expected,
        case(Node::Sequence(vec![int(1)]), "sequence"),
        case(Node::Mapping(vec![(string("a"), int(1))]), "mapping"),
        case(Node::Bool(false), "bool")
    )]
    fn test_unsupported_key(key: Node, expected: &str) {
        let node = Node::Mapping(vec![(key, string("v"))]);

        let result = normalize(&node, Collision::LastWins);

        assert!(matches!(result, Err(Error::KeyType(got)) if got == expected));
    }

    #[test]
    fn test_error_deep_in_tree_aborts() {
        let node = Node::Sequence(vec![
            Node::Mapping(vec![(int(1), string("ok"))]),
            Node::Mapping(vec![(
                string("outer"),
                Node::Sequence(vec![Node::Mapping(vec![(Node::Null, int(0))])]),
            )]),
        ]);

        let result = normalize(&node, Collision::LastWins);

        assert!(matches!(result, Err(Error::KeyType("null"))));
    }

    #[test]
    fn test_sequence_order_preserved() {
        let actual = decode(r#"[3, 1, {2: "x"}]"#).unwrap();

        let expected = Value::from(vec![
            Value::from(3i64),
            Value::from(1i64),
            [("2", Value::from("x"))].into_iter().collect(),
        ]);
        assert_eq!(expected, actual);
    }

    #[test]
    fn test_nested_mappings() {
        let actual = decode("1:\n  2:\n    - 3: three\n").unwrap();

        let three = actual
            .get("1")
            .and_then(|v| v.get("2"))
            .and_then(Value::as_sequence)
            .and_then(|seq| seq[0].get("3"));
        assert_eq!(Some(&Value::from("three")), three);
    }

    #[rstest(
        collision,
        expected,
        case(Collision::LastWins, Some(Value::from("from int"))),
        case(Collision::Reject, None)
    )]
    fn test_collision(collision: Collision, expected: Option<Value>) {
        let node = Node::Mapping(vec![
            (string("7"), string("from string")),
            (int(7), string("from int")),
        ]);

        let result = normalize(&node, collision);

        match expected {
            Some(expected) => assert_eq!(Some(&expected), result.unwrap().get("7")),
            None => assert!(matches!(result, Err(Error::DuplicateKey(key)) if key == "7")),
        }
    }

    #[test]
    fn test_collision_from_text_keeps_later_pair() {
        let actual = decode("\"7\": first\n7: second\n").unwrap();
        assert_eq!(Some(&Value::from("second")), actual.get("7"));
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let once = decode("a: [1, {2: {3: null}}]\n4: {b: true, c: 1.5}\n").unwrap();

        let twice = normalize(&Node::from(&once), Collision::Reject).unwrap();

        assert_eq!(once, twice);
    }

    #[test]
    fn test_scalars_unchanged() {
        for node in [Node::Null, Node::Bool(true), int(5), string("s")] {
            let value = normalize(&node, Collision::LastWins).unwrap();
            assert_eq!(node, Node::from(&value));
        }
    }
}

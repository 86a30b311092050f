use serde::{Serialize, Serializer};

use crate::{Number, Value};

impl Serialize for Number {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Number::Integer(n) => serializer.serialize_i64(*n),
            Number::Unsigned(n) => serializer.serialize_u64(*n),
            Number::Float(f) => serializer.serialize_f64(*f),
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(n) => n.serialize(serializer),
            Value::String(s) => serializer.serialize_str(s),
            Value::Sequence(seq) => serializer.collect_seq(seq),
            Value::Mapping(map) => serializer.collect_map(map),
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use crate::Value;

    #[rstest(
        input,
        expected,
        case(Value::Null, "null"),
        case(Value::from(-3i64), "-3"),
        case(Value::from(u64::MAX), "18446744073709551615"),
        case(Value::from(2.5), "2.5"),
        case(Value::from("s"), r#""s""#),
        case(Value::from(vec![Value::from(3i64), Value::from(1i64)]), "[3,1]"),
        case(
            [("b", Value::from(2i64)), ("a", Value::Bool(false))].into_iter().collect(),
            r#"{"a":false,"b":2}"#
        )
    )]
    fn test_serialize(input: Value, expected: &str) {
        assert_eq!(expected, serde_json::to_string(&input).unwrap());
    }
}

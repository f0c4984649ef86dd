//! Loosely-typed arguments and the alternating key/value encoder
//!
//! The argument-based logging methods accept a flat sequence of alternating
//! (key, value) elements. [`encode_args`] normalizes that sequence into typed
//! [`KeyValue`] attributes with documented degradation for malformed input:
//! pairs with non-string keys are dropped, a dangling odd key is kept with an
//! empty-string value, and no input shape ever produces an error.

use std::fmt;

use super::value::{KeyValue, Value};

/// One element of an alternating key/value argument sequence.
///
/// Every supported source type converts into exactly one variant; anything
/// without a `From` impl goes through [`Arg::display`] or [`Arg::error`] as a
/// rendered string.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    /// Pre-typed value passed through unchanged
    Value(Value),
}

impl Arg {
    /// Fallback for types without a dedicated conversion: the rendered
    /// `Display` output becomes a string value.
    pub fn display(value: impl fmt::Display) -> Self {
        Arg::Str(value.to_string())
    }

    /// An error-like value, normalized to its rendered description.
    pub fn error(err: &dyn std::error::Error) -> Self {
        Arg::Str(err.to_string())
    }
}

impl From<String> for Arg {
    fn from(s: String) -> Self {
        Arg::Str(s)
    }
}

impl From<&str> for Arg {
    fn from(s: &str) -> Self {
        Arg::Str(s.to_string())
    }
}

macro_rules! arg_from_int {
    ($($ty:ty),+) => {
        $(impl From<$ty> for Arg {
            fn from(i: $ty) -> Self {
                Arg::Int(i as i64)
            }
        })+
    };
}

arg_from_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl From<f32> for Arg {
    fn from(f: f32) -> Self {
        Arg::Float(f as f64)
    }
}

impl From<f64> for Arg {
    fn from(f: f64) -> Self {
        Arg::Float(f)
    }
}

impl From<bool> for Arg {
    fn from(b: bool) -> Self {
        Arg::Bool(b)
    }
}

impl From<Value> for Arg {
    fn from(v: Value) -> Self {
        Arg::Value(v)
    }
}

impl<'a> From<&'a dyn std::error::Error> for Arg {
    fn from(err: &'a dyn std::error::Error) -> Self {
        Arg::error(err)
    }
}

/// Normalize one argument into a canonical attribute value.
///
/// Total over every `Arg` variant; allocates at most one value per input.
pub fn normalize(arg: &Arg) -> Value {
    match arg {
        Arg::Str(s) => Value::String(s.clone()),
        Arg::Int(i) => Value::Int(*i),
        Arg::Float(f) => Value::Float(*f),
        Arg::Bool(b) => Value::Bool(*b),
        Arg::Value(v) => v.clone(),
    }
}

/// Encode an alternating (key, value, key, value, ...) sequence into ordered
/// attributes.
///
/// Walks the sequence two elements at a time. A pair whose key element is not
/// a string is silently dropped. An odd-length sequence keeps its dangling
/// key, paired with an empty string. Duplicate keys are retained in encounter
/// order.
pub fn encode_args(args: &[Arg]) -> Vec<KeyValue> {
    let mut attrs = Vec::with_capacity(args.len() / 2 + 1);
    let mut i = 0;
    while i < args.len() {
        if i + 1 >= args.len() {
            // Odd number of arguments: keep the dangling key with an empty value
            if let Arg::Str(key) = &args[i] {
                attrs.push(KeyValue::string(key.clone(), ""));
            }
            break;
        }

        if let Arg::Str(key) = &args[i] {
            attrs.push(KeyValue::new(key.clone(), normalize(&args[i + 1])));
        }
        i += 2;
    }
    attrs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args;

    #[test]
    fn test_normalize_scalars() {
        assert_eq!(
            normalize(&Arg::from("s")),
            Value::String("s".to_string())
        );
        assert_eq!(normalize(&Arg::from(42_u8)), Value::Int(42));
        assert_eq!(normalize(&Arg::from(-3_i16)), Value::Int(-3));
        assert_eq!(normalize(&Arg::from(2.5_f32)), Value::Float(2.5));
        assert_eq!(normalize(&Arg::from(false)), Value::Bool(false));
    }

    #[test]
    fn test_normalize_pre_typed_value() {
        let v = Value::Int(99);
        assert_eq!(normalize(&Arg::from(v.clone())), v);
    }

    #[test]
    fn test_normalize_error() {
        let err = std::io::Error::new(std::io::ErrorKind::Other, "disk gone");
        assert_eq!(
            normalize(&Arg::error(&err)),
            Value::String("disk gone".to_string())
        );
    }

    #[test]
    fn test_display_fallback() {
        assert_eq!(
            normalize(&Arg::display('x')),
            Value::String("x".to_string())
        );
    }

    #[test]
    fn test_encode_even_sequence() {
        let attrs = encode_args(&args!["key1", "value1", "key2", 42]);
        assert_eq!(
            attrs,
            vec![KeyValue::string("key1", "value1"), KeyValue::int("key2", 42)]
        );
    }

    #[test]
    fn test_encode_odd_sequence_keeps_dangling_key() {
        let attrs = encode_args(&args!["key1", "value1", "key2"]);
        assert_eq!(
            attrs,
            vec![KeyValue::string("key1", "value1"), KeyValue::string("key2", "")]
        );
    }

    #[test]
    fn test_encode_drops_non_string_keys() {
        let attrs = encode_args(&args![42, "dropped", "kept", true]);
        assert_eq!(attrs, vec![KeyValue::bool("kept", true)]);
    }

    #[test]
    fn test_encode_dangling_non_string_key_dropped() {
        let attrs = encode_args(&args!["key1", "value1", 7]);
        assert_eq!(attrs, vec![KeyValue::string("key1", "value1")]);
    }

    #[test]
    fn test_encode_keeps_duplicates_in_order() {
        let attrs = encode_args(&args!["k", 1, "k", 2]);
        assert_eq!(attrs, vec![KeyValue::int("k", 1), KeyValue::int("k", 2)]);
    }

    #[test]
    fn test_encode_empty() {
        assert!(encode_args(&args![]).is_empty());
    }
}

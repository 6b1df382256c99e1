//! Input shapes accepted by the shuffle boundary
//!
//! Everything is normalised to one ordered `Vec`; the tag only decides how
//! the shuffled result is handed back.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ShuffleError;

/// JSON object key marking a fixed-arity sequence.
pub const TUPLE_KEY: &str = "tuple";

/// Items to shuffle, tagged with the shape they arrived in.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Items<T> {
    /// Nothing to shuffle.
    Empty,
    /// A single bare item. Comes back as a one-element list.
    Scalar(T),
    /// Mutable-order sequence.
    List(Vec<T>),
    /// Fixed-arity sequence. Comes back as a tuple of the same arity.
    Tuple(Vec<T>),
}

impl<T> Items<T> {
    pub fn empty() -> Self {
        Items::Empty
    }

    pub fn scalar(item: T) -> Self {
        Items::Scalar(item)
    }

    pub fn list(items: Vec<T>) -> Self {
        Items::List(items)
    }

    pub fn tuple(items: Vec<T>) -> Self {
        Items::Tuple(items)
    }

    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_tuple(&self) -> bool {
        matches!(self, Items::Tuple(_))
    }

    /// The items in their current order.
    pub fn as_slice(&self) -> &[T] {
        match self {
            Items::Empty => &[],
            Items::Scalar(item) => core::slice::from_ref(item),
            Items::List(items) | Items::Tuple(items) => items,
        }
    }

    pub fn into_vec(self) -> Vec<T> {
        match self {
            Items::Empty => Vec::new(),
            Items::Scalar(item) => vec![item],
            Items::List(items) | Items::Tuple(items) => items,
        }
    }

    /// Reorder the items with `f` and re-present them.
    ///
    /// Tuples stay tuples; every other shape comes back as a list.
    pub fn reorder<F>(self, f: F) -> Items<T>
    where
        F: FnOnce(Vec<T>) -> Vec<T>,
    {
        let tuple = self.is_tuple();
        let reordered = f(self.into_vec());
        if tuple {
            Items::Tuple(reordered)
        } else {
            Items::List(reordered)
        }
    }
}

impl<T> From<Vec<T>> for Items<T> {
    fn from(items: Vec<T>) -> Self {
        Items::List(items)
    }
}

impl<T, const N: usize> From<[T; N]> for Items<T> {
    fn from(items: [T; N]) -> Self {
        Items::Tuple(items.into())
    }
}

impl<T> From<Option<T>> for Items<T> {
    fn from(item: Option<T>) -> Self {
        match item {
            None => Items::Empty,
            Some(item) => Items::Scalar(item),
        }
    }
}

impl Items<Value> {
    /// Build from a dynamically typed value.
    ///
    /// - `null` → empty
    /// - string, integer or bool → scalar
    /// - array → list
    /// - `{"tuple": [...]}` → tuple
    ///
    /// Anything else is rejected.
    pub fn from_json(value: Value) -> Result<Self, ShuffleError> {
        match value {
            Value::Null => Ok(Items::Empty),
            Value::String(s) => Ok(Items::Scalar(Value::String(s))),
            Value::Number(n) => {
                if n.is_i64() || n.is_u64() {
                    Ok(Items::Scalar(Value::Number(n)))
                } else {
                    Err(unsupported("float"))
                }
            }
            Value::Array(items) => Ok(Items::List(items)),
            Value::Object(mut map) => match map.remove(TUPLE_KEY) {
                Some(Value::Array(items)) if map.is_empty() => Ok(Items::Tuple(items)),
                _ => Err(unsupported("object")),
            },
            Value::Bool(b) => Ok(Items::Scalar(Value::Bool(b))),
        }
    }

    /// Inverse of [`Items::from_json`].
    pub fn into_json(self) -> Value {
        match self {
            Items::Empty => Value::Null,
            Items::Scalar(item) => item,
            Items::List(items) => Value::Array(items),
            Items::Tuple(items) => {
                let mut map = serde_json::Map::new();
                map.insert(TUPLE_KEY.to_string(), Value::Array(items));
                Value::Object(map)
            }
        }
    }
}

fn unsupported(kind: &str) -> ShuffleError {
    ShuffleError::InvalidArgument(format!(
        "expected null, string, integer, bool, array or {{\"{}\": [...]}}, got {}",
        TUPLE_KEY, kind
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_conversions() {
        assert_eq!(Items::from(vec![1, 2]), Items::List(vec![1, 2]));
        assert_eq!(Items::from([1, 2, 3]), Items::Tuple(vec![1, 2, 3]));
        assert_eq!(Items::from(Some("test")), Items::Scalar("test"));
        assert_eq!(Items::<u8>::from(None), Items::Empty);
    }

    #[test]
    fn test_len_and_slice() {
        assert_eq!(Items::<u8>::empty().len(), 0);
        assert!(Items::<u8>::empty().is_empty());
        assert_eq!(Items::scalar(9).as_slice(), &[9]);
        assert_eq!(Items::tuple(vec![1, 2]).len(), 2);
    }

    #[test]
    fn test_reorder_preserves_tuple_shape() {
        let out = Items::tuple(vec![1, 2, 3]).reorder(|mut v| {
            v.reverse();
            v
        });
        assert_eq!(out, Items::Tuple(vec![3, 2, 1]));
    }

    #[test]
    fn test_reorder_lists_everything_else() {
        assert_eq!(Items::scalar(5).reorder(|v| v), Items::List(vec![5]));
        assert_eq!(Items::<u8>::empty().reorder(|v| v), Items::List(vec![]));
        assert_eq!(Items::list(vec![1, 2]).reorder(|v| v), Items::List(vec![1, 2]));
    }

    #[test]
    fn test_from_json_shapes() {
        assert_eq!(Items::from_json(Value::Null), Ok(Items::Empty));
        assert_eq!(Items::from_json(json!("test")), Ok(Items::Scalar(json!("test"))));
        assert_eq!(Items::from_json(json!(255)), Ok(Items::Scalar(json!(255))));
        assert_eq!(Items::from_json(json!(-1)), Ok(Items::Scalar(json!(-1))));
        assert_eq!(Items::from_json(json!(true)), Ok(Items::Scalar(json!(true))));
        assert_eq!(Items::from_json(json!([1, 2])), Ok(Items::List(vec![json!(1), json!(2)])));
        assert_eq!(
            Items::from_json(json!({"tuple": ["a", "b"]})),
            Ok(Items::Tuple(vec![json!("a"), json!("b")])),
        );
    }

    #[test]
    fn test_from_json_rejects_other_shapes() {
        for bad in [json!(1.5), json!({"a": 1}), json!({"tuple": 3}), json!({"tuple": [], "x": 1})] {
            assert!(
                matches!(Items::from_json(bad.clone()), Err(ShuffleError::InvalidArgument(_))),
                "{} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_json_roundtrip() {
        for value in [Value::Null, json!("x"), json!([1, 2, 3]), json!({"tuple": [1]})] {
            let items = Items::from_json(value.clone()).unwrap();
            assert_eq!(items.into_json(), value);
        }
    }

    #[test]
    fn test_serde_representation() {
        let json = serde_json::to_string(&Items::Tuple(vec![1, 2])).unwrap();
        assert_eq!(json, r#"{"tuple":[1,2]}"#);
        let back: Items<u32> = serde_json::from_str(r#"{"list":[3]}"#).unwrap();
        assert_eq!(back, Items::List(vec![3]));
    }
}

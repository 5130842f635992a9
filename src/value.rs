//! Dynamic value representation for hstore data.
//!
//! This module provides the [`Value`] enum which represents anything the
//! hstore text format can carry: `NULL`, booleans (`t`/`f`), unsigned
//! decimal numbers, strings, arrays and string-keyed maps, nested to any
//! depth.
//!
//! ## Core Types
//!
//! - [`Value`]: An enum over null, bool, number, string, array and map
//! - [`Number`]: An integer or a floating-point number
//!
//! ## Usage Patterns
//!
//! ### Creating Values
//!
//! ```rust
//! use serde_hstore::{hstore, Value};
//!
//! let null = Value::Null;
//! let number = Value::from(42);
//! let text = Value::from("hello");
//!
//! let map = hstore!({
//!     "name": "Alice",
//!     "tags": ["a", "b"]
//! });
//! assert!(map.is_map());
//! ```
//!
//! ### Extracting Values
//!
//! ```rust
//! use serde_hstore::{parse, Value};
//! use std::convert::TryFrom;
//!
//! let value = parse(r#""a"=>1,"b"=>"1""#).unwrap();
//!
//! assert_eq!(value.get("a").and_then(Value::as_i64), Some(1));
//! assert_eq!(value.get("b").and_then(Value::as_str), Some("1"));
//!
//! let a = i64::try_from(value.get("a").cloned().unwrap()).unwrap();
//! assert_eq!(a, 1);
//! ```

use crate::HstoreMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A dynamically-typed representation of any hstore value.
///
/// # Examples
///
/// ```rust
/// use serde_hstore::{Number, Value};
///
/// let null = Value::Null;
/// let num = Value::Number(Number::Integer(42));
/// let text = Value::String("hello".to_string());
///
/// assert!(null.is_null());
/// assert!(num.is_number());
/// assert!(text.is_string());
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(Vec<Value>),
    Map(HstoreMap),
}

/// A numeric value, either an integer or a floating-point number.
///
/// Bare hstore text matching `^\d+$` reads as [`Number::Integer`] and text
/// matching `^\d+\.\d+$` as [`Number::Float`].
///
/// # Examples
///
/// ```rust
/// use serde_hstore::Number;
///
/// assert_eq!(Number::from_decimal("42"), Some(Number::Integer(42)));
/// assert_eq!(Number::from_decimal("2.5"), Some(Number::Float(2.5)));
/// assert_eq!(Number::from_decimal("-1"), None);
/// assert_eq!(Number::from_decimal("1e3"), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Number {
    Integer(i64),
    Float(f64),
}

impl Number {
    /// Reads an unsigned decimal, `digits` or `digits.digits`.
    ///
    /// Integers too large for `i64` fall back to [`Number::Float`].
    #[must_use]
    pub fn from_decimal(text: &str) -> Option<Number> {
        let (whole, fraction) = match text.split_once('.') {
            Some((whole, fraction)) => (whole, Some(fraction)),
            None => (text, None),
        };

        let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(whole) || !fraction.map_or(true, all_digits) {
            return None;
        }

        if fraction.is_none() {
            if let Ok(i) = text.parse::<i64>() {
                return Some(Number::Integer(i));
            }
        }
        text.parse::<f64>().ok().map(Number::Float)
    }

    #[inline]
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Number::Integer(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, Number::Float(_))
    }

    /// Returns `false` for NaN and the infinities, which hstore cannot spell.
    #[inline]
    #[must_use]
    pub fn is_finite(&self) -> bool {
        match self {
            Number::Integer(_) => true,
            Number::Float(f) => f.is_finite(),
        }
    }

    /// Converts this number to an `i64` if possible.
    ///
    /// Returns `Some(i64)` for integers and for floats with no fractional
    /// part that fit in the `i64` range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_hstore::Number;
    ///
    /// assert_eq!(Number::Integer(42).as_i64(), Some(42));
    /// assert_eq!(Number::Float(42.0).as_i64(), Some(42));
    /// assert_eq!(Number::Float(42.5).as_i64(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Number::Integer(i) => Some(*i),
            Number::Float(f) => {
                if f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64 {
                    Some(*f as i64)
                } else {
                    None
                }
            }
        }
    }

    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Integer(i) => *i as f64,
            Number::Float(f) => *f,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(i) => write!(f, "{}", i),
            Number::Float(fl) => write!(f, "{}", fl),
        }
    }
}

macro_rules! number_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Number {
                fn from(value: $ty) -> Self {
                    Number::Integer(value as i64)
                }
            }

            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::Number(Number::Integer(value as i64))
                }
            }
        )*
    };
}

number_from_integer!(i8, i16, i32, i64, u8, u16, u32);

impl From<u64> for Number {
    fn from(value: u64) -> Self {
        i64::try_from(value).map_or(Number::Float(value as f64), Number::Integer)
    }
}

impl From<f32> for Number {
    fn from(value: f32) -> Self {
        Number::Float(value as f64)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

impl Value {
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_map(&self) -> bool {
        matches!(self, Value::Map(_))
    }

    /// Returns `true` for arrays and maps.
    #[inline]
    #[must_use]
    pub const fn is_composite(&self) -> bool {
        matches!(self, Value::Array(_) | Value::Map(_))
    }

    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_number(&self) -> Option<&Number> {
        match self {
            Value::Number(n) => Some(n),
            _ => None,
        }
    }

    /// If the value is an integer or a whole-number float, returns it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_hstore::{Number, Value};
    ///
    /// assert_eq!(Value::Number(Number::Integer(42)).as_i64(), Some(42));
    /// assert_eq!(Value::Number(Number::Float(42.5)).as_i64(), None);
    /// assert_eq!(Value::from("42").as_i64(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(n.as_f64()),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Array(arr) => Some(arr),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_map(&self) -> Option<&HstoreMap> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Looks up a key when the value is a map.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_hstore::hstore;
    ///
    /// let value = hstore!({ "a": { "b": 1 } });
    /// let b = value.get("a").and_then(|a| a.get("b"));
    /// assert_eq!(b.and_then(|b| b.as_i64()), Some(1));
    /// assert!(value.get("missing").is_none());
    /// ```
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_map().and_then(|map| map.get(key))
    }

    /// Short name of the variant, used in error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Map(_) => "map",
        }
    }
}

/// Formats the value as hstore text with default options.
///
/// # Examples
///
/// ```rust
/// use serde_hstore::hstore;
///
/// let value = hstore!({ "a": 1, "b": null });
/// assert_eq!(value.to_string(), r#""a"=>1,"b"=>NULL"#);
/// ```
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::stringify(self))
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(Number::Integer(i)) => serializer.serialize_i64(*i),
            Value::Number(Number::Float(f)) => serializer.serialize_f64(*f),
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(arr) => {
                use serde::ser::SerializeSeq;
                let mut seq = serializer.serialize_seq(Some(arr.len()))?;
                for element in arr {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
            Value::Map(map) => {
                use serde::ser::SerializeMap;
                let mut state = serializer.serialize_map(Some(map.len()))?;
                for (k, v) in map.iter() {
                    state.serialize_entry(k, v)?;
                }
                state.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct ValueVisitor;

        impl<'de> Visitor<'de> for ValueVisitor {
            type Value = Value;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("any valid hstore value")
            }

            fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E> {
                Ok(Value::Bool(value))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E> {
                Ok(Value::Number(Number::Integer(value)))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E> {
                Ok(Value::Number(Number::from(value)))
            }

            fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E> {
                Ok(Value::Number(Number::Float(value)))
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E> {
                Ok(Value::String(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> Result<Self::Value, E> {
                Ok(Value::String(value))
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E> {
                Ok(Value::Null)
            }

            fn visit_none<E>(self) -> Result<Self::Value, E> {
                Ok(Value::Null)
            }

            fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                Deserialize::deserialize(deserializer)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let mut vec = Vec::new();
                while let Some(elem) = seq.next_element()? {
                    vec.push(elem);
                }
                Ok(Value::Array(vec))
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut values = HstoreMap::new();
                while let Some((key, value)) = map.next_entry()? {
                    values.insert(key, value);
                }
                Ok(Value::Map(values))
            }
        }

        deserializer.deserialize_any(ValueVisitor)
    }
}

impl TryFrom<Value> for i64 {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::Number(n) => n.as_i64().ok_or_else(|| {
                crate::Error::custom(format!("cannot convert {} to i64", n))
            }),
            _ => Err(crate::Error::custom(format!(
                "expected integer, found {}",
                value.type_name()
            ))),
        }
    }
}

impl TryFrom<Value> for f64 {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::Number(n) => Ok(n.as_f64()),
            _ => Err(crate::Error::custom(format!(
                "expected number, found {}",
                value.type_name()
            ))),
        }
    }
}

impl TryFrom<Value> for bool {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::Bool(b) => Ok(b),
            _ => Err(crate::Error::custom(format!(
                "expected bool, found {}",
                value.type_name()
            ))),
        }
    }
}

impl TryFrom<Value> for String {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::String(s) => Ok(s),
            _ => Err(crate::Error::custom(format!(
                "expected string, found {}",
                value.type_name()
            ))),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        Value::Number(Number::from(value))
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Number(Number::Float(value as f64))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(Number::Float(value))
    }
}

impl From<Number> for Value {
    fn from(value: Number) -> Self {
        Value::Number(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Array(value)
    }
}

impl From<HstoreMap> for Value {
    fn from(value: HstoreMap) -> Self {
        Value::Map(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::TryFrom;

    #[test]
    fn test_from_decimal() {
        assert_eq!(Number::from_decimal("0"), Some(Number::Integer(0)));
        assert_eq!(Number::from_decimal("007"), Some(Number::Integer(7)));
        assert_eq!(Number::from_decimal("3.25"), Some(Number::Float(3.25)));
        assert_eq!(Number::from_decimal(""), None);
        assert_eq!(Number::from_decimal("1."), None);
        assert_eq!(Number::from_decimal(".5"), None);
        assert_eq!(Number::from_decimal("1.2.3"), None);
        assert_eq!(Number::from_decimal("+1"), None);
        assert_eq!(Number::from_decimal(" 1"), None);
    }

    #[test]
    fn test_from_decimal_overflow_falls_back_to_float() {
        let n = Number::from_decimal("99999999999999999999").unwrap();
        assert!(n.is_float());
        assert_eq!(n.as_f64(), 1e20);
    }

    #[test]
    fn test_tryfrom_i64() {
        let value = Value::Number(Number::Integer(42));
        let result: i64 = TryFrom::try_from(value).unwrap();
        assert_eq!(result, 42);

        let value = Value::Number(Number::Float(42.0));
        let result: i64 = TryFrom::try_from(value).unwrap();
        assert_eq!(result, 42);

        assert!(i64::try_from(Value::Number(Number::Float(0.5))).is_err());
        assert!(i64::try_from(Value::String("test".to_string())).is_err());
    }

    #[test]
    fn test_tryfrom_scalars() {
        assert_eq!(f64::try_from(Value::from(2)).unwrap(), 2.0);
        assert!(bool::try_from(Value::Bool(true)).unwrap());
        assert!(bool::try_from(Value::from(1)).is_err());
        assert_eq!(String::try_from(Value::from("hi")).unwrap(), "hi");
        assert!(String::try_from(Value::Null).is_err());
    }

    #[test]
    fn test_from_primitives() {
        assert_eq!(Value::from(true), Value::Bool(true));
        assert_eq!(Value::from(42i32), Value::Number(Number::Integer(42)));
        assert_eq!(Value::from(3.5f64), Value::Number(Number::Float(3.5)));
        assert_eq!(Value::from(u64::MAX), Value::Number(Number::Float(u64::MAX as f64)));
        assert_eq!(Value::from("test"), Value::String("test".to_string()));
        assert_eq!(Value::from(None::<i32>), Value::Null);
        assert_eq!(Value::from(Some("x")), Value::String("x".to_string()));
    }

    #[test]
    fn test_type_name() {
        assert_eq!(Value::Null.type_name(), "null");
        assert_eq!(Value::Map(HstoreMap::new()).type_name(), "map");
        assert!(Value::Array(vec![]).is_composite());
        assert!(!Value::from(1).is_composite());
    }

    #[test]
    fn test_serialize_through_serde_json() {
        let mut map = HstoreMap::new();
        map.insert("a".to_string(), Value::from(1));
        map.insert("b".to_string(), Value::Array(vec![Value::Null, Value::from("x")]));

        let json = serde_json::to_string(&Value::Map(map)).unwrap();
        assert_eq!(json, r#"{"a":1,"b":[null,"x"]}"#);
    }

    #[test]
    fn test_deserialize_from_serde_json() {
        let value: Value = serde_json::from_str(r#"{"a":[1,2.5,true],"b":null}"#).unwrap();
        let a = value.get("a").and_then(Value::as_array).unwrap();
        assert_eq!(a[0], Value::from(1));
        assert_eq!(a[1], Value::from(2.5));
        assert_eq!(a[2], Value::Bool(true));
        assert_eq!(value.get("b"), Some(&Value::Null));
    }
}

//! hstore serialization.
//!
//! This module provides two serializers:
//!
//! - [`Serializer`] renders a [`Value`] as hstore text.
//! - [`ValueSerializer`] is a serde serializer turning any `T: Serialize`
//!   into a [`Value`], which [`crate::to_string`] then renders.
//!
//! ## Output rules
//!
//! | value | text |
//! |---|---|
//! | `Null` | `NULL` |
//! | `Bool` | `t` / `f` (`1` / `0` with `boolean_as_integer`) |
//! | `Number` | decimal text (`NULL` for NaN and infinities) |
//! | `String` | `"..."` with `\` and `"` backslash-escaped |
//! | `Array` | members joined by `,` |
//! | `Map` | `"key"=>value` pairs joined by `,` |
//!
//! Nested arrays and maps are always bracketed; the root only when
//! `root_hash_decorated` is set.
//!
//! ## Direct Serializer Usage
//!
//! ```rust
//! use serde_hstore::{hstore, HstoreOptions, Serializer};
//!
//! let mut serializer = Serializer::new(HstoreOptions::new());
//! serializer.serialize_value(&hstore!([1, 2, 3, "foo"]));
//! assert_eq!(serializer.into_inner(), r#"1,2,3,"foo""#);
//! ```

use crate::{Error, HstoreMap, HstoreOptions, Number, Result, Value};
use serde::{ser, Serialize};

/// The hstore text serializer.
pub struct Serializer {
    output: String,
    options: HstoreOptions,
}

impl Serializer {
    pub fn new(options: HstoreOptions) -> Self {
        Serializer {
            output: String::with_capacity(256),
            options,
        }
    }

    /// Returns the text written so far, as a SQL literal when
    /// `return_postgresql_expression` is set.
    pub fn into_inner(self) -> String {
        if self.options.return_postgresql_expression {
            format!("'{}'::hstore", self.output.replace('\'', "''"))
        } else {
            self.output
        }
    }

    /// Writes `value` as a document root.
    pub fn serialize_value(&mut self, value: &Value) {
        if value.is_composite() {
            self.write_composite(value, self.options.root_hash_decorated);
        } else {
            self.write_scalar(value);
        }
    }

    fn write_member(&mut self, value: &Value) {
        if value.is_composite() {
            self.write_composite(value, true);
        } else {
            self.write_scalar(value);
        }
    }

    fn write_composite(&mut self, value: &Value, bracketed: bool) {
        match value {
            Value::Array(items) => {
                let (open, close) = if self.options.array_square_brackets {
                    ('[', ']')
                } else {
                    ('{', '}')
                };
                if bracketed {
                    self.output.push(open);
                }
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        self.output.push(',');
                    }
                    self.write_member(item);
                }
                if bracketed {
                    self.output.push(close);
                }
            }
            Value::Map(map) => {
                if bracketed {
                    self.output.push('{');
                }
                for (i, (key, item)) in map.iter().enumerate() {
                    if i > 0 {
                        self.output.push(',');
                    }
                    self.write_quoted(key);
                    self.output.push_str("=>");
                    self.write_member(item);
                }
                if bracketed {
                    self.output.push('}');
                }
            }
            _ => self.write_scalar(value),
        }
    }

    fn write_scalar(&mut self, value: &Value) {
        match value {
            Value::Null => self.output.push_str("NULL"),
            Value::Bool(b) => {
                let text = match (self.options.boolean_as_integer, *b) {
                    (true, true) => "1",
                    (true, false) => "0",
                    (false, true) => "t",
                    (false, false) => "f",
                };
                self.output.push_str(text);
            }
            Value::Number(n) if n.is_finite() => self.output.push_str(&n.to_string()),
            Value::Number(_) => self.output.push_str("NULL"),
            Value::String(s) => self.write_quoted(s),
            Value::Array(_) | Value::Map(_) => self.write_composite(value, true),
        }
    }

    #[inline]
    fn write_quoted(&mut self, s: &str) {
        self.output.push('"');
        for ch in s.chars() {
            match ch {
                '"' => self.output.push_str("\\\""),
                '\\' => self.output.push_str("\\\\"),
                _ => self.output.push(ch),
            }
        }
        self.output.push('"');
    }
}

/// Serde serializer producing a [`Value`].
///
/// Enum variants with data are externally tagged, as single-entry maps.
///
/// # Examples
///
/// ```rust
/// use serde::Serialize;
/// use serde_hstore::{to_value, Value};
///
/// #[derive(Serialize)]
/// enum Shape { Circle { r: u32 }, Empty }
///
/// let circle = to_value(&Shape::Circle { r: 2 }).unwrap();
/// assert_eq!(circle.get("Circle").and_then(|c| c.get("r")), Some(&Value::from(2)));
/// assert_eq!(to_value(&Shape::Empty).unwrap(), Value::from("Empty"));
/// ```
pub struct ValueSerializer;

pub struct SerializeVec {
    vec: Vec<Value>,
    variant: Option<&'static str>,
}

pub struct SerializeMap {
    map: HstoreMap,
    current_key: Option<String>,
    variant: Option<&'static str>,
}

fn tagged(variant: Option<&'static str>, value: Value) -> Value {
    match variant {
        Some(name) => {
            let mut map = HstoreMap::with_capacity(1);
            map.insert(name.to_string(), value);
            Value::Map(map)
        }
        None => value,
    }
}

impl ser::Serializer for ValueSerializer {
    type Ok = Value;
    type Error = Error;

    type SerializeSeq = SerializeVec;
    type SerializeTuple = SerializeVec;
    type SerializeTupleStruct = SerializeVec;
    type SerializeTupleVariant = SerializeVec;
    type SerializeMap = SerializeMap;
    type SerializeStruct = SerializeMap;
    type SerializeStructVariant = SerializeMap;

    fn serialize_bool(self, v: bool) -> Result<Value> {
        Ok(Value::Bool(v))
    }

    fn serialize_i8(self, v: i8) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_i16(self, v: i16) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_i32(self, v: i32) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_i64(self, v: i64) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_u8(self, v: u8) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_u16(self, v: u16) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_u32(self, v: u32) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_u64(self, v: u64) -> Result<Value> {
        Ok(Value::Number(Number::from(v)))
    }

    fn serialize_f32(self, v: f32) -> Result<Value> {
        Ok(Value::Number(Number::Float(v as f64)))
    }

    fn serialize_f64(self, v: f64) -> Result<Value> {
        Ok(Value::Number(Number::Float(v)))
    }

    fn serialize_char(self, v: char) -> Result<Value> {
        Ok(Value::String(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<Value> {
        Ok(Value::String(v.to_string()))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Value> {
        Ok(Value::Array(v.iter().map(|&b| Value::from(b)).collect()))
    }

    fn serialize_none(self) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_some<T>(self, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Value> {
        Ok(Value::String(variant.to_string()))
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        Ok(tagged(Some(variant), to_value(value)?))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<SerializeVec> {
        Ok(SerializeVec::new(len.unwrap_or(0), None))
    }

    fn serialize_tuple(self, len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::new(len, None))
    }

    fn serialize_tuple_struct(self, _name: &'static str, len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::new(len, None))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<SerializeVec> {
        Ok(SerializeVec::new(len, Some(variant)))
    }

    fn serialize_map(self, len: Option<usize>) -> Result<SerializeMap> {
        Ok(SerializeMap::new(len.unwrap_or(0), None))
    }

    fn serialize_struct(self, _name: &'static str, len: usize) -> Result<SerializeMap> {
        Ok(SerializeMap::new(len, None))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<SerializeMap> {
        Ok(SerializeMap::new(len, Some(variant)))
    }
}

impl SerializeVec {
    fn new(len: usize, variant: Option<&'static str>) -> Self {
        SerializeVec {
            vec: Vec::with_capacity(len),
            variant,
        }
    }

    fn push<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<()> {
        self.vec.push(to_value(value)?);
        Ok(())
    }

    fn finish(self) -> Value {
        tagged(self.variant, Value::Array(self.vec))
    }
}

impl SerializeMap {
    fn new(len: usize, variant: Option<&'static str>) -> Self {
        SerializeMap {
            map: HstoreMap::with_capacity(len),
            current_key: None,
            variant,
        }
    }

    fn finish(self) -> Value {
        tagged(self.variant, Value::Map(self.map))
    }
}

impl ser::SerializeSeq for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push(value)
    }

    fn end(self) -> Result<Value> {
        Ok(self.finish())
    }
}

impl ser::SerializeTuple for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push(value)
    }

    fn end(self) -> Result<Value> {
        Ok(self.finish())
    }
}

impl ser::SerializeTupleStruct for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push(value)
    }

    fn end(self) -> Result<Value> {
        Ok(self.finish())
    }
}

impl ser::SerializeTupleVariant for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push(value)
    }

    fn end(self) -> Result<Value> {
        Ok(self.finish())
    }
}

impl ser::SerializeMap for SerializeMap {
    type Ok = Value;
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        // hstore keys are text; numeric and boolean keys keep their spelling.
        let key = match to_value(key)? {
            Value::String(s) => s,
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            other => {
                return Err(Error::unsupported_type(&format!(
                    "{} as a map key",
                    other.type_name()
                )))
            }
        };
        self.current_key = Some(key);
        Ok(())
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = self
            .current_key
            .take()
            .ok_or_else(|| Error::custom("serialize_value called without serialize_key"))?;
        self.map.insert(key, to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(self.finish())
    }
}

impl ser::SerializeStruct for SerializeMap {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.map.insert(key.to_string(), to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(self.finish())
    }
}

impl ser::SerializeStructVariant for SerializeMap {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.map.insert(key.to_string(), to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(self.finish())
    }
}

fn to_value<T: Serialize + ?Sized>(value: &T) -> Result<Value> {
    value.serialize(ValueSerializer)
}

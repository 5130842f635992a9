//! Conversion of parsed containers into typed values.
//!
//! Each [`Container`] becomes an array or a map depending on its first
//! element: a bare first element makes an array, a keyed one a map. Empty
//! containers become an empty array when written `[]` and an empty map
//! otherwise.
//!
//! Text coercion for values that were not quoted:
//!
//! | text | value |
//! |---|---|
//! | `t` | `Bool(true)` |
//! | `f` | `Bool(false)` |
//! | `NULL` | `Null` |
//! | `digits` / `digits.digits` | `Number` |
//! | anything else | `String` |
//!
//! Quoted values stay strings, unless `numeric_check` is set and the text
//! is numeric. Backslash escapes are resolved in keys and strings.

use crate::parser::{Bracket, Container, Element, ElementValue};
use crate::{HstoreMap, HstoreOptions, Number, Value};

/// Reduces a parsed container tree into a [`Value`].
///
/// # Examples
///
/// ```rust
/// use serde_hstore::parser::Parser;
/// use serde_hstore::reduce::reduce;
/// use serde_hstore::{HstoreOptions, Value};
///
/// let root = Parser::parse_str(r#"{"a"=>t,"b"=>"t"}"#).unwrap();
/// let value = reduce(root, &HstoreOptions::default());
/// assert_eq!(value.get("a"), Some(&Value::Bool(true)));
/// assert_eq!(value.get("b"), Some(&Value::from("t")));
/// ```
#[must_use]
pub fn reduce(container: Container, options: &HstoreOptions) -> Value {
    let is_array = match container.elements.first() {
        Some(first) => first.key.is_none(),
        None => container.bracket == Bracket::Square,
    };

    // The parser never mixes keyed and bare elements in one container; for
    // hand-built trees the first element's shape wins.
    if is_array {
        let values = container
            .elements
            .into_iter()
            .map(|element| reduce_value(element, options))
            .collect();
        Value::Array(values)
    } else {
        let mut map = HstoreMap::with_capacity(container.elements.len());
        for mut element in container.elements {
            let key = unescape(element.key.take().unwrap_or_default());
            map.insert(key, reduce_value(element, options));
        }
        Value::Map(map)
    }
}

fn reduce_value(element: Element, options: &HstoreOptions) -> Value {
    match element.value {
        ElementValue::Nested(container) => reduce(container, options),
        ElementValue::Text(text) if element.quoted => {
            if options.numeric_check {
                if let Some(number) = Number::from_decimal(&text) {
                    return Value::Number(number);
                }
            }
            Value::String(unescape(text))
        }
        ElementValue::Text(text) => coerce(text),
    }
}

fn coerce(text: String) -> Value {
    match text.as_str() {
        "t" => return Value::Bool(true),
        "f" => return Value::Bool(false),
        "NULL" => return Value::Null,
        _ => {}
    }
    match Number::from_decimal(&text) {
        Some(number) => Value::Number(number),
        None => Value::String(unescape(text)),
    }
}

/// Resolves backslash escapes: `\x` reads as `x`. A trailing lone
/// backslash is kept.
fn unescape(raw: String) -> String {
    if !raw.contains('\\') {
        return raw;
    }

    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            out.push(chars.next().unwrap_or('\\'));
        } else {
            out.push(c);
        }
    }
    out
}

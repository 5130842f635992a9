//! # serde_hstore
//!
//! A codec for the text form of PostgreSQL's `hstore` type, with Serde
//! integration.
//!
//! ## What is hstore text?
//!
//! `hstore` stores flat key/value pairs written as `"key"=>"value"`,
//! separated by commas. This crate accepts and produces an extended form
//! used by several client libraries: values may themselves be nested
//! `{...}` maps, and bare comma-separated lists (`{1,2,3}` or `[1,2,3]`)
//! read as arrays.
//!
//! ```text
//! "a"=>1,"b"=>"foobar","c"=>{"d"=>t,"e"=>NULL},"f"=>{1,2,3}
//! ```
//!
//! ## Key Features
//!
//! - **Streaming parser**: a character-driven state machine with an explicit
//!   frame stack and a configurable nesting limit (512 by default)
//! - **Value coercion**: bare `t`, `f`, `NULL` and decimal digits become
//!   booleans, null and numbers; quoted text stays text
//! - **Positioned errors**: every syntax error carries the character offset
//!   at which it was detected
//! - **Serde Compatible**: works with `#[derive(Serialize, Deserialize)]`
//!   types through [`Value`]
//!
//! ## Quick Start
//!
//! ```rust
//! use serde_hstore::{parse, stringify, Value};
//!
//! let value = parse(r#""a"=>1,"b"=>"2","c"=>NULL"#).unwrap();
//! assert_eq!(value.get("a"), Some(&Value::from(1)));
//! assert_eq!(value.get("b"), Some(&Value::from("2")));
//! assert_eq!(value.get("c"), Some(&Value::Null));
//!
//! assert_eq!(stringify(&value), r#""a"=>1,"b"=>"2","c"=>NULL"#);
//! ```
//!
//! ### Typed data
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//! use serde_hstore::{from_str, to_string};
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct Settings {
//!     retries: u32,
//!     verbose: bool,
//!     label: String,
//! }
//!
//! let settings = Settings { retries: 3, verbose: true, label: "night run".into() };
//! let text = to_string(&settings).unwrap();
//! assert_eq!(text, r#""retries"=>3,"verbose"=>t,"label"=>"night run""#);
//!
//! let back: Settings = from_str(&text).unwrap();
//! assert_eq!(back, settings);
//! ```
//!
//! ### Options
//!
//! ```rust
//! use serde_hstore::{hstore, stringify_with_options, HstoreOptions};
//!
//! let data = hstore!({ "a": [1, 2, 3] });
//! let options = HstoreOptions::new()
//!     .with_root_hash_decorated(true)
//!     .with_array_square_brackets(true);
//! assert_eq!(stringify_with_options(&data, options), r#"{"a"=>[1,2,3]}"#);
//! ```
//!
//! ## Logging
//!
//! With the `tracing` feature enabled, parsing emits `tracing` events:
//! `debug` at the start and end of each document, `warn` on failure and
//! `trace` for every container opened or closed.
//!
//! ## Grammar
//!
//! See the [`format`] module for the accepted grammar and the coercion
//! rules.

pub mod de;
pub mod error;
pub mod format;
pub mod macros;
pub mod map;
pub mod options;
pub mod parser;
pub mod reduce;
pub mod ser;
pub mod value;

pub use de::Deserializer;
pub use error::{Error, Result};
pub use map::HstoreMap;
pub use options::HstoreOptions;
pub use ser::{Serializer, ValueSerializer};
pub use value::{Number, Value};

use parser::Parser;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::iter;

#[cfg(feature = "tracing")]
use tracing::{debug, instrument, warn};

/// Parses hstore text with default options.
///
/// The input has no outer brackets; it is read as the members of an
/// implicit root map (or array, when its first element has no key).
///
/// # Examples
///
/// ```rust
/// use serde_hstore::{parse, Value};
///
/// let value = parse(r#""a"=>{"b"=>1},"c"=>{1,2}"#).unwrap();
/// assert_eq!(value.get("a").and_then(|a| a.get("b")), Some(&Value::from(1)));
/// assert_eq!(value.get("c").and_then(Value::as_array).map(Vec::len), Some(2));
///
/// assert!(parse("1,2,3").unwrap().is_array());
/// assert!(parse("").unwrap().is_map());
/// ```
///
/// # Errors
///
/// Returns a syntax error carrying the character offset where the input
/// stopped being valid hstore text.
pub fn parse(input: &str) -> Result<Value> {
    parse_with_options(input, HstoreOptions::default())
}

/// Parses hstore text with custom options.
///
/// With `root_hash_decorated` the input must carry its own root brackets.
///
/// # Examples
///
/// ```rust
/// use serde_hstore::{parse_with_options, HstoreOptions, Value};
///
/// let options = HstoreOptions::decorated().with_numeric_check(true);
/// let value = parse_with_options(r#"{"a"=>"12"}"#, options).unwrap();
/// assert_eq!(value.get("a"), Some(&Value::from(12)));
/// ```
///
/// # Errors
///
/// Returns a syntax error carrying the character offset where the input
/// stopped being valid hstore text.
#[cfg_attr(
    feature = "tracing",
    instrument(skip(input), fields(input_len = input.len()))
)]
pub fn parse_with_options(input: &str, options: HstoreOptions) -> Result<Value> {
    #[cfg(feature = "tracing")]
    debug!("Starting hstore parse");

    let result = if options.root_hash_decorated {
        run(Parser::new().with_max_depth(options.max_depth), input.chars())
    } else {
        let parser = Parser::wrapped(input.chars().count()).with_max_depth(options.max_depth);
        run(
            parser,
            iter::once('{').chain(input.chars()).chain(iter::once('}')),
        )
    };

    match result {
        Ok(container) => {
            let value = reduce::reduce(container, &options);
            #[cfg(feature = "tracing")]
            debug!(root = value.type_name(), "Successfully parsed hstore");
            Ok(value)
        }
        Err(err) => {
            #[cfg(feature = "tracing")]
            warn!(error = %err, "Failed to parse hstore");
            Err(err)
        }
    }
}

fn run<I>(mut parser: Parser, chars: I) -> Result<parser::Container>
where
    I: Iterator<Item = char>,
{
    let mut chars = chars.peekable();
    while let Some(c) = chars.next() {
        parser.step(c, chars.peek().copied())?;
    }
    parser.finish()
}

/// Renders a [`Value`] as hstore text with default options.
///
/// # Examples
///
/// ```rust
/// use serde_hstore::{hstore, stringify};
///
/// let data = hstore!({ "a": 1, "b": "x\"y", "c": null, "d": [1, 2] });
/// assert_eq!(stringify(&data), r#""a"=>1,"b"=>"x\"y","c"=>NULL,"d"=>{1,2}"#);
/// ```
#[must_use]
pub fn stringify(value: &Value) -> String {
    stringify_with_options(value, HstoreOptions::default())
}

/// Renders a [`Value`] as hstore text with custom options.
///
/// # Examples
///
/// ```rust
/// use serde_hstore::{hstore, stringify_with_options, HstoreOptions};
///
/// let data = hstore!({ "on": true });
/// let options = HstoreOptions::new().with_boolean_as_integer(true);
/// assert_eq!(stringify_with_options(&data, options), r#""on"=>1"#);
/// ```
#[must_use]
pub fn stringify_with_options(value: &Value, options: HstoreOptions) -> String {
    let mut serializer = Serializer::new(options);
    serializer.serialize_value(value);
    serializer.into_inner()
}

/// Convert any `T: Serialize` to a [`Value`].
///
/// # Examples
///
/// ```rust
/// use serde_hstore::to_value;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let value = to_value(&Point { x: 1, y: 2 }).unwrap();
/// assert!(value.is_map());
/// ```
///
/// # Errors
///
/// Returns an error if the value has no hstore shape, such as a map keyed
/// by a sequence.
pub fn to_value<T>(value: &T) -> Result<Value>
where
    T: ?Sized + Serialize,
{
    value.serialize(ValueSerializer)
}

/// Serialize any `T: Serialize` to hstore text.
///
/// # Errors
///
/// Returns an error if the value has no hstore shape.
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_string_with_options(value, HstoreOptions::default())
}

/// Serialize any `T: Serialize` to hstore text with custom options.
///
/// # Examples
///
/// ```rust
/// use serde_hstore::{to_string_with_options, HstoreOptions};
/// use std::collections::BTreeMap;
///
/// let mut row = BTreeMap::new();
/// row.insert("d", "'");
/// let options = HstoreOptions::new().with_return_postgresql_expression(true);
/// assert_eq!(
///     to_string_with_options(&row, options).unwrap(),
///     r#"'"d"=>"''"'::hstore"#
/// );
/// ```
///
/// # Errors
///
/// Returns an error if the value has no hstore shape.
pub fn to_string_with_options<T>(value: &T, options: HstoreOptions) -> Result<String>
where
    T: ?Sized + Serialize,
{
    let value = to_value(value)?;
    Ok(stringify_with_options(&value, options))
}

/// Deserialize an instance of type `T` from a [`Value`].
///
/// # Errors
///
/// Returns an error if the value does not have the shape `T` expects.
pub fn from_value<T>(value: Value) -> Result<T>
where
    T: DeserializeOwned,
{
    T::deserialize(Deserializer::new(value))
}

/// Deserialize an instance of type `T` from hstore text.
///
/// # Examples
///
/// ```rust
/// use serde_hstore::from_str;
/// use serde::Deserialize;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let point: Point = from_str(r#""x"=>1,"y"=>2"#).unwrap();
/// assert_eq!(point, Point { x: 1, y: 2 });
/// ```
///
/// # Errors
///
/// Returns a syntax error for malformed text, or an error if the parsed
/// value does not have the shape `T` expects.
pub fn from_str<T>(s: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    from_str_with_options(s, HstoreOptions::default())
}

/// Deserialize an instance of type `T` from hstore text with custom options.
///
/// # Errors
///
/// Returns a syntax error for malformed text, or an error if the parsed
/// value does not have the shape `T` expects.
pub fn from_str_with_options<T>(s: &str, options: HstoreOptions) -> Result<T>
where
    T: DeserializeOwned,
{
    from_value(parse_with_options(s, options)?)
}

//! hstore text format
//!
//! This module documents the text form accepted by [`crate::parse`] and
//! produced by [`crate::stringify`].
//!
//! # Overview
//!
//! PostgreSQL's `hstore` column stores a flat set of string pairs written
//! `"key"=>"value"`. Client libraries commonly extend it with nested maps
//! and bare arrays, and this crate reads and writes that extended form.
//!
//! # Grammar
//!
//! ```text
//! document  := members                      (default)
//!            | container                    (root_hash_decorated)
//! container := '{' members '}' | '[' members ']'
//! members   := ( member ( ',' member )* )?
//! member    := token '=>' value             (keyed)
//!            | value                        (bare)
//! value     := token | container
//! token     := '"' quoted-char* '"' | bare-char+
//! ```
//!
//! - A container is either all keyed or all bare; the first member decides.
//! - Spaces around tokens and separators are ignored. Spaces inside a bare
//!   token are kept, trailing ones are trimmed.
//! - A closing quote ends its token: only spaces, `=>`, `,` or a closing
//!   bracket may follow it.
//! - `\` makes the next character literal, inside or outside quotes. Inside
//!   quotes it is the only way to write `"`.
//! - A `{` opened with `[` must close with `]`, and the reverse.
//!
//! Without `root_hash_decorated` the document has no outer brackets:
//!
//! ```text
//! "a"=>1,"b"=>{"c"=>2}
//! ```
//!
//! With it the root container is written out:
//!
//! ```text
//! {"a"=>1,"b"=>{"c"=>2}}
//! ```
//!
//! # Values
//!
//! | Text | Value |
//! |------|-------|
//! | `NULL` | `Null` |
//! | `t` / `f` | `Bool` |
//! | `42` | `Number::Integer` |
//! | `4.2` | `Number::Float` |
//! | `"quoted"` | `String`, never coerced |
//! | anything else | `String` |
//!
//! Only unsigned decimals are numbers; `-1` and `1e5` stay strings.
//! Integers beyond `i64` become floats. With `numeric_check` a quoted
//! numeric string is read as a number too.
//!
//! ```rust
//! use serde_hstore::{parse, Value};
//!
//! let value = parse(r#"a=>t,b=>"t",c=>-1,d=>NULL,e=>"NULL""#).unwrap();
//! assert_eq!(value.get("a"), Some(&Value::Bool(true)));
//! assert_eq!(value.get("b"), Some(&Value::from("t")));
//! assert_eq!(value.get("c"), Some(&Value::from("-1")));
//! assert_eq!(value.get("d"), Some(&Value::Null));
//! assert_eq!(value.get("e"), Some(&Value::from("NULL")));
//! ```
//!
//! # Arrays
//!
//! A container whose members have no keys is an array. Arrays are written
//! with curly brackets unless `array_square_brackets` is set; both forms
//! are accepted when reading.
//!
//! ```rust
//! use serde_hstore::{parse, stringify_with_options, HstoreOptions};
//!
//! let value = parse(r#""a"=>[1,2,3],"b"=>{"foo","bar"}"#).unwrap();
//! let options = HstoreOptions::new().with_array_square_brackets(true);
//! assert_eq!(
//!     stringify_with_options(&value, options),
//!     r#""a"=>[1,2,3],"b"=>["foo","bar"]"#
//! );
//! ```
//!
//! An empty `[]` reads as an empty array and an empty `{}` as an empty
//! map.
//!
//! # Writing
//!
//! - Keys and strings are always quoted, with `\` and `"` escaped.
//! - `Null` is `NULL`; booleans are `t`/`f`, or `1`/`0` with
//!   `boolean_as_integer`.
//! - Non-finite floats are written as `NULL`.
//! - With `return_postgresql_expression` the text becomes a SQL literal:
//!   single quotes are doubled and `::hstore` is appended.
//!
//! ```rust
//! use serde_hstore::{hstore, stringify_with_options, HstoreOptions};
//!
//! let value = hstore!({ "d": "'" });
//! let options = HstoreOptions::new().with_return_postgresql_expression(true);
//! assert_eq!(stringify_with_options(&value, options), r#"'"d"=>"''"'::hstore"#);
//! ```
//!
//! # Errors
//!
//! Positions are 0-based character offsets into the text passed in.
//!
//! ```rust
//! use serde_hstore::{parse_with_options, Error, HstoreOptions};
//!
//! let err = parse_with_options(r#"{"a"=>1]"#, HstoreOptions::decorated()).unwrap_err();
//! assert_eq!(
//!     err,
//!     Error::BracketMismatch { position: 7, expected: '}', found: ']' }
//! );
//! ```
//!
//! # Nesting
//!
//! At most 512 containers may be open at once, the implicit root of
//! undecorated text not counted. Deeper input fails with
//! [`Error::DepthLimitExceeded`](crate::Error::DepthLimitExceeded) at the
//! first bracket past the limit; `HstoreOptions::with_max_depth` moves it.
//!
//! ```rust
//! use serde_hstore::{parse, Error};
//!
//! let deep = format!("a=>{}{}", "{".repeat(600), "}".repeat(600));
//! assert!(matches!(
//!     parse(&deep),
//!     Err(Error::DepthLimitExceeded { position: 515, limit: 512 })
//! ));
//! ```
//!
//! # Limitations
//!
//! - **Map keys**: always text; numeric keys round-trip as strings
//! - **Negative numbers**: written as numbers, read back as strings
//! - **Depth on output**: the writer recurses once per level, so a value
//!   built in code far deeper than the parse limit needs a larger stack
//! - **Scalar roots**: written as a single scalar, which does not parse
//!   back into the same value

//! Configuration options for hstore parsing and serialization.
//!
//! [`HstoreOptions`] is a plain record of boolean switches, all off by
//! default, plus the parser's nesting limit. The same record is passed to
//! both directions; each field only affects the direction(s) listed on it.
//!
//! ## Examples
//!
//! ```rust
//! use serde_hstore::{hstore, stringify_with_options, HstoreOptions};
//!
//! let data = hstore!({ "a": [1, 2, 3] });
//!
//! // Arrays in square brackets
//! let options = HstoreOptions::new().with_array_square_brackets(true);
//! assert_eq!(stringify_with_options(&data, options), r#""a"=>[1,2,3]"#);
//!
//! // Explicit root brackets
//! let options = HstoreOptions::new().with_root_hash_decorated(true);
//! assert_eq!(stringify_with_options(&data, options), r#"{"a"=>{1,2,3}}"#);
//! ```

use crate::parser::DEFAULT_MAX_DEPTH;

/// Configuration options for hstore parsing and serialization.
///
/// # Examples
///
/// ```rust
/// use serde_hstore::HstoreOptions;
///
/// // Defaults: undecorated root, curly array brackets
/// let options = HstoreOptions::new();
/// assert!(!options.root_hash_decorated);
///
/// // Builder style
/// let options = HstoreOptions::new()
///     .with_root_hash_decorated(true)
///     .with_array_square_brackets(true);
/// assert!(options.array_square_brackets);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HstoreOptions {
    /// Parse: the input carries its own root `{}`/`[]`.
    /// Stringify: the root composite is always bracketed.
    pub root_hash_decorated: bool,
    /// Stringify: arrays are written as `[...]` instead of `{...}`.
    pub array_square_brackets: bool,
    /// Stringify: booleans are written as `1`/`0` instead of `t`/`f`.
    pub boolean_as_integer: bool,
    /// Parse: quoted numeric text is coerced to a number as well.
    pub numeric_check: bool,
    /// Stringify: the output is wrapped as a SQL literal, `'...'::hstore`.
    pub return_postgresql_expression: bool,
    /// Parse: most containers open at once, the implicit root of
    /// undecorated input not counted. Deeper input is rejected with
    /// [`Error::DepthLimitExceeded`](crate::Error::DepthLimitExceeded).
    pub max_depth: usize,
}

impl Default for HstoreOptions {
    fn default() -> Self {
        HstoreOptions {
            root_hash_decorated: false,
            array_square_brackets: false,
            boolean_as_integer: false,
            numeric_check: false,
            return_postgresql_expression: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl HstoreOptions {
    /// Creates default options (every switch off, depth limit 512).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Options for documents whose root is written with its own brackets.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_hstore::HstoreOptions;
    ///
    /// assert!(HstoreOptions::decorated().root_hash_decorated);
    /// ```
    #[must_use]
    pub fn decorated() -> Self {
        HstoreOptions {
            root_hash_decorated: true,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_root_hash_decorated(mut self, enabled: bool) -> Self {
        self.root_hash_decorated = enabled;
        self
    }

    #[must_use]
    pub fn with_array_square_brackets(mut self, enabled: bool) -> Self {
        self.array_square_brackets = enabled;
        self
    }

    /// Writes booleans as `1`/`0`.
    ///
    /// The parser reads those back as numbers, so this is one-way.
    #[must_use]
    pub fn with_boolean_as_integer(mut self, enabled: bool) -> Self {
        self.boolean_as_integer = enabled;
        self
    }

    #[must_use]
    pub fn with_numeric_check(mut self, enabled: bool) -> Self {
        self.numeric_check = enabled;
        self
    }

    /// Wraps serializer output as a PostgreSQL expression.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_hstore::{hstore, stringify_with_options, HstoreOptions};
    ///
    /// let options = HstoreOptions::new().with_return_postgresql_expression(true);
    /// let sql = stringify_with_options(&hstore!({ "d": "'" }), options);
    /// assert_eq!(sql, r#"'"d"=>"''"'::hstore"#);
    /// ```
    #[must_use]
    pub fn with_return_postgresql_expression(mut self, enabled: bool) -> Self {
        self.return_postgresql_expression = enabled;
        self
    }

    /// Raises or lowers the parser's nesting limit.
    ///
    /// The reducer and the writer recurse once per level, so a limit far
    /// above the default needs a thread with a matching stack.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_hstore::{parse_with_options, Error, HstoreOptions};
    ///
    /// let options = HstoreOptions::new().with_max_depth(1);
    /// assert!(parse_with_options(r#""a"=>{1}"#, options).is_ok());
    /// assert!(matches!(
    ///     parse_with_options(r#""a"=>{{1}}"#, options),
    ///     Err(Error::DepthLimitExceeded { position: 6, limit: 1 })
    /// ));
    /// ```
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

/// Builds a [`Value`](crate::Value) with the shape of an hstore document.
///
/// Keys are string literals, `[...]` is an array and `{...}` a map. `null`,
/// `true` and `false` become the scalars the parser produces for bare
/// `NULL`, `t` and `f`. Any other single token, or a parenthesized
/// expression, goes through [`to_value`](crate::to_value).
///
/// ```rust
/// use serde_hstore::{hstore, parse, stringify};
///
/// let value = hstore!({ "a": 1, "b": [true, null], "c": { "d": "x" } });
/// assert_eq!(stringify(&value), r#""a"=>1,"b"=>{t,NULL},"c"=>{"d"=>"x"}"#);
/// assert_eq!(parse(r#""a"=>1,"b"=>{t,NULL},"c"=>{"d"=>"x"}"#).unwrap(), value);
///
/// // Multi-token expressions need parentheses.
/// let port = 5432;
/// assert_eq!(stringify(&hstore!({ "port": (port + 1) })), r#""port"=>5433"#);
///
/// // Repeated keys behave like the parser: last value, first position.
/// assert_eq!(stringify(&hstore!({ "k": 1, "j": 2, "k": 3 })), r#""k"=>3,"j"=>2"#);
/// ```
#[macro_export]
macro_rules! hstore {
    (null) => {
        $crate::Value::Null
    };

    (true) => {
        $crate::Value::Bool(true)
    };

    (false) => {
        $crate::Value::Bool(false)
    };

    ([]) => {
        $crate::Value::Array(vec![])
    };

    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::Array(vec![$($crate::hstore!($elem)),*])
    };

    ({}) => {
        $crate::Value::Map($crate::HstoreMap::new())
    };

    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut map = $crate::HstoreMap::new();
        $(
            map.insert($key.to_string(), $crate::hstore!($value));
        )*
        $crate::Value::Map(map)
    }};

    // Anything else goes through serde; a value serde rejects becomes NULL.
    ($s:expr) => {
        $crate::to_value(&$s).unwrap_or($crate::Value::Null)
    };
}

//! The member map behind [`Value::Map`].
//!
//! An hstore container is a list of `key=>value` members. Two things about
//! that list matter when it is held in memory:
//!
//! - a key may appear more than once in the text, and the last value wins;
//! - the writer emits members in map order, so `stringify(parse(s))` gives
//!   back `s` only if the map remembers where each key first appeared.
//!
//! [`HstoreMap`] keeps both rules by storing members in an [`IndexMap`].
//!
//! ```rust
//! use serde_hstore::{parse, stringify};
//!
//! let value = parse(r#""b"=>1,"a"=>2,"b"=>3"#).unwrap();
//! let map = value.as_map().unwrap();
//!
//! assert_eq!(map.len(), 2);
//! assert_eq!(stringify(&value), r#""b"=>3,"a"=>2"#);
//! ```

use crate::Value;
use indexmap::IndexMap;

/// Insertion-ordered `key => value` members of an hstore container.
///
/// # Examples
///
/// ```rust
/// use serde_hstore::{stringify, HstoreMap, Value};
///
/// let mut map = HstoreMap::new();
/// map.insert("host".to_string(), Value::from("db1"));
/// map.insert("port".to_string(), Value::from(5432));
/// map.insert("replica".to_string(), Value::Null);
///
/// assert_eq!(
///     stringify(&Value::Map(map)),
///     r#""host"=>"db1","port"=>5432,"replica"=>NULL"#
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HstoreMap(IndexMap<String, Value>);

impl HstoreMap {
    #[must_use]
    pub fn new() -> Self {
        HstoreMap(IndexMap::new())
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        HstoreMap(IndexMap::with_capacity(capacity))
    }

    /// Sets the member `key`, returning the value it replaced.
    ///
    /// A repeated key takes the new value but stays where it was first
    /// inserted, the same way the parser resolves duplicate keys.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_hstore::{stringify, HstoreMap, Value};
    ///
    /// let mut map = HstoreMap::new();
    /// map.insert("a".to_string(), Value::from(1));
    /// map.insert("b".to_string(), Value::from(2));
    /// let old = map.insert("a".to_string(), Value::from("x"));
    ///
    /// assert_eq!(old, Some(Value::from(1)));
    /// assert_eq!(stringify(&Value::Map(map)), r#""a"=>"x","b"=>2"#);
    /// ```
    pub fn insert(&mut self, key: String, value: Value) -> Option<Value> {
        self.0.insert(key, value)
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.0.get_mut(key)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Removes a member. The remaining members keep their relative order,
    /// so the written text only loses that one `key=>value` pair.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.shift_remove(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Keys in the order they will be written.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, Value> {
        self.0.keys()
    }

    pub fn values(&self) -> indexmap::map::Values<'_, String, Value> {
        self.0.values()
    }

    /// Members in the order they will be written.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.0.iter()
    }
}

impl IntoIterator for HstoreMap {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a HstoreMap {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Collecting follows [`HstoreMap::insert`]: a later duplicate key replaces
/// the value in place.
impl FromIterator<(String, Value)> for HstoreMap {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        HstoreMap(IndexMap::from_iter(iter))
    }
}

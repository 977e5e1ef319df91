//! String-keyed map wrapper with dotted accessors.
//!
//! Accessors take a dotted path that walks nested maps, and give back an
//! empty result when anything along the way is missing or the wrong shape.
//!
//! ```
//! use nub::{yaml, StrMap};
//!
//! let m = StrMap::from(yaml::load("db:\n  host: localhost\n  ports: [5432]")?);
//! assert_eq!(m.str("db.host"), "localhost");
//! assert_eq!(m.str_slice("db.ports").join(","), "5432");
//! assert!(m.str("db.user").is_empty());
//! # Ok::<(), nub::Error>(())
//! ```

use crate::query::Queryable;
use crate::slice::StrSlice;
use crate::str::Str;
use crate::value::{Map, Value};
use serde::{Deserialize, Serialize};

/// A map from strings to [`Value`]s.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StrMap(Map);

impl StrMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a key.
    pub fn add(&mut self, key: impl Into<String>, val: impl Into<Value>) -> &mut Self {
        self.0.insert(key.into(), val.into());
        self
    }

    pub fn any(&self) -> bool {
        !self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Borrow the underlying map.
    pub fn m(&self) -> &Map {
        &self.0
    }

    pub fn into_inner(self) -> Map {
        self.0
    }

    pub fn q(&self) -> Queryable {
        Queryable::new(Value::Map(self.0.clone()))
    }

    /// Merge `other` in, with `other` winning on conflicts.
    pub fn merge(&mut self, other: Map) -> &mut Self {
        let mine = std::mem::take(&mut self.0);
        self.0 = merge_map(mine, other);
        self
    }

    pub fn merge_all(&mut self, others: impl IntoIterator<Item = Map>) -> &mut Self {
        for other in others {
            self.merge(other);
        }
        self
    }

    pub fn merge_maps(&mut self, others: impl IntoIterator<Item = StrMap>) -> &mut Self {
        self.merge_all(others.into_iter().map(StrMap::into_inner))
    }

    /// Sequence at `path`.
    pub fn slice(&self, path: &str) -> Vec<Value> {
        self.lookup(path)
            .and_then(Value::as_seq)
            .cloned()
            .unwrap_or_default()
    }

    /// String at `path`. Non-string leaves give an empty `Str`.
    pub fn str(&self, path: &str) -> Str {
        self.lookup(path)
            .and_then(Value::as_str)
            .map(Str::from)
            .unwrap_or_default()
    }

    /// Nested map at `path`.
    pub fn str_map(&self, path: &str) -> StrMap {
        self.lookup(path)
            .and_then(Value::as_map)
            .cloned()
            .map(StrMap)
            .unwrap_or_default()
    }

    /// First map in the sequence at `path` whose string field `k` is `v`.
    pub fn str_map_by_name(&self, path: &str, k: &str, v: &str) -> StrMap {
        self.str_map_slice(path)
            .into_iter()
            .find(|m| m.0.get(k).and_then(Value::as_str) == Some(v))
            .unwrap_or_default()
    }

    /// Maps in the sequence at `path`, skipping anything else.
    pub fn str_map_slice(&self, path: &str) -> Vec<StrMap> {
        self.slice(path)
            .into_iter()
            .filter_map(|v| v.as_map().cloned().map(StrMap))
            .collect()
    }

    /// Elements of the sequence at `path`, rendered as strings.
    pub fn str_slice(&self, path: &str) -> StrSlice {
        self.slice(path).iter().map(ToString::to_string).collect()
    }

    /// Walk plain keys through nested maps.
    fn lookup(&self, path: &str) -> Option<&Value> {
        let mut keys = path.split('.');
        let mut current = self.0.get(keys.next()?)?;
        for key in keys {
            current = current.as_map()?.get(key)?;
        }
        Some(current)
    }
}

impl From<Map> for StrMap {
    fn from(m: Map) -> Self {
        Self(m)
    }
}

/// Anything that isn't a map becomes an empty `StrMap`.
impl From<Value> for StrMap {
    fn from(v: Value) -> Self {
        match v {
            Value::Map(m) => Self(m),
            other => Self(other.as_map().cloned().unwrap_or_default()),
        }
    }
}

impl From<StrMap> for Value {
    fn from(m: StrMap) -> Self {
        Value::Map(m.0)
    }
}

impl FromIterator<(String, Value)> for StrMap {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Merge `b` into `a`.
///
/// Keys only in `b` are added. On a collision `b` wins, unless both sides
/// are maps, in which case they're merged the same way.
///
/// ```
/// use nub::strmap::merge_map;
/// use nub::{StrMap, Value};
///
/// let a = StrMap::new().add("x", 1).add("keep", true).clone().into_inner();
/// let b = StrMap::new().add("x", 2).clone().into_inner();
/// let merged = merge_map(a, b);
/// assert_eq!(merged.get("x"), Some(&Value::Int(2)));
/// assert_eq!(merged.get("keep"), Some(&Value::Bool(true)));
/// ```
pub fn merge_map(mut a: Map, b: Map) -> Map {
    if a.is_empty() {
        return b;
    }
    for (k, bv) in b {
        let merged = match (a.remove(&k), bv) {
            (Some(Value::Map(av)), Value::Map(bv)) => Value::Map(merge_map(av, bv)),
            (_, bv) => bv,
        };
        a.insert(k, merged);
    }
    a
}

//! Dotted-path lookups into nested data.
//!
//! A [`Queryable`] wraps a [`Value`] that may not be there at all. Paths are
//! split on `.`, and each segment is one of:
//!
//!  - a map key, like `foo`;
//!  - a sequence position, like `0` or `-1`;
//!  - a predicate, like `[name:2]`, picking the first map in a sequence
//!    whose `name` field equals `2`. The right-hand side goes through
//!    [`crate::yaml::yaml_type`], and ints and floats compare numerically.
//!
//! A path that leads nowhere gives a nil queryable, never an error:
//!
//! ```
//! use nub::{yaml, Queryable};
//!
//! let q = Queryable::new(yaml::load("foo: [{name: 1}, {name: 2}]")?);
//! assert_eq!(q.yaml("foo.[name:2].name").i(), 2);
//! assert_eq!(q.yaml("foo.-1").m().len(), 1);
//! assert!(!q.yaml("foo.[name:9]").any());
//! assert!(!q.yaml("bar.baz").any());
//! # Ok::<(), nub::Error>(())
//! ```

use crate::index::abs_index;
use crate::value::Value;
use crate::yaml::yaml_type;
use serde::{Deserialize, Serialize};

/// A key and its value, from iterating a map or sequence.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeyVal {
    pub key: Value,
    pub val: Value,
}

impl KeyVal {
    pub fn new(key: impl Into<Value>, val: impl Into<Value>) -> Self {
        Self {
            key: key.into(),
            val: val.into(),
        }
    }
}

/// A value that might be absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Queryable(Option<Value>);

impl Queryable {
    /// Nothing at all.
    pub fn nil() -> Self {
        Self(None)
    }

    /// Wrap a value. Null is treated as absent.
    pub fn new(v: impl Into<Value>) -> Self {
        match v.into() {
            Value::Null => Self::nil(),
            v => Self(Some(v)),
        }
    }

    pub fn value(&self) -> Option<&Value> {
        self.0.as_ref()
    }

    pub fn into_value(self) -> Option<Value> {
        self.0
    }

    pub fn is_nil(&self) -> bool {
        self.0.is_none()
    }

    pub fn is_seq(&self) -> bool {
        self.0.as_ref().is_some_and(|v| v.as_seq().is_some())
    }

    pub fn is_map(&self) -> bool {
        self.0.as_ref().is_some_and(|v| v.as_map().is_some())
    }

    pub fn is_str(&self) -> bool {
        self.0.as_ref().is_some_and(|v| v.as_str().is_some())
    }

    /// Number of elements, entries or bytes. Other scalars count as one.
    pub fn len(&self) -> usize {
        match self.0.as_ref().map(Value::indirect) {
            None | Some(Value::Null) => 0,
            Some(Value::Seq(items)) => items.len(),
            Some(Value::Map(m)) => m.len(),
            Some(Value::Str(s)) => s.len(),
            Some(_) => 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True if there's something non-empty here.
    pub fn any(&self) -> bool {
        !self.is_empty()
    }

    /// Elements of a sequence. A scalar or map yields itself once.
    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        match self.0.as_ref() {
            None => <&[Value]>::default().iter(),
            Some(v) => match v.as_seq() {
                Some(items) => items.iter(),
                None => std::slice::from_ref(v).iter(),
            },
        }
    }

    /// Entries of a map, or positions of a sequence, as key/value pairs.
    pub fn pairs(&self) -> Vec<KeyVal> {
        match self.0.as_ref().map(Value::indirect) {
            Some(Value::Map(m)) => m
                .iter()
                .map(|(k, v)| KeyVal::new(k, v.clone()))
                .collect(),
            Some(Value::Seq(items)) => items
                .iter()
                .enumerate()
                .map(|(i, v)| KeyVal::new(i, v.clone()))
                .collect(),
            _ => vec![],
        }
    }

    /// Follow a dotted path. An empty path is this queryable.
    pub fn yaml(&self, path: &str) -> Queryable {
        if path.is_empty() {
            return self.clone();
        }
        let mut current = match self.0.as_ref() {
            Some(v) => v,
            None => return Self::nil(),
        };
        for segment in segments(path) {
            current = match step(current, segment) {
                Some(next) => next,
                None => {
                    tracing::trace!(path, segment, "path segment matched nothing");
                    return Self::nil();
                }
            };
        }
        Self::new(current.clone())
    }
}

impl From<Value> for Queryable {
    fn from(v: Value) -> Self {
        Self::new(v)
    }
}

/// Split on dots outside of `[...]`, so predicate values may contain them.
fn segments(path: &str) -> Vec<&str> {
    let mut parts = vec![];
    let (mut depth, mut start) = (0usize, 0);
    for (i, c) in path.char_indices() {
        match c {
            '[' => depth += 1,
            ']' => depth = depth.saturating_sub(1),
            '.' if depth == 0 => {
                parts.push(&path[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(&path[start..]);
    parts
}

fn step<'a>(v: &'a Value, segment: &str) -> Option<&'a Value> {
    if let Some((key, want)) = predicate(segment) {
        return v.as_seq()?.iter().find(|item| {
            item.as_map()
                .and_then(|m| m.get(key))
                .is_some_and(|got| got.loosely_eq(&want))
        });
    }
    match v.indirect() {
        Value::Map(m) => m.get(segment),
        Value::Seq(items) => {
            let i = segment.parse::<isize>().ok()?;
            abs_index(items.len(), i).map(|i| &items[i])
        }
        _ => None,
    }
}

/// Parse `[key:value]`.
fn predicate(segment: &str) -> Option<(&str, Value)> {
    let inner = segment.strip_prefix('[')?.strip_suffix(']')?;
    let (key, raw) = inner.split_once(':')?;
    Some((key, yaml_type(raw)))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::Error;
    use crate::value::Map;
    use crate::yaml::load;
    use indoc::indoc;

    fn entry(k: &str, v: Value) -> Value {
        let mut m = Map::new();
        m.insert(k.to_owned(), v);
        Value::Map(m)
    }

    fn nested() -> Result<Queryable, Error> {
        Ok(Queryable::new(load(indoc! {"
            1:
              2: two
              3:
                4: four
            foo:
              - name: 1
              - name: 2
              - name: 3
            labels:
              - name: '2'
              - name: v1.5
        "})?))
    }

    #[test]
    fn nil_and_new() {
        assert!(Queryable::nil().is_nil());
        assert!(Queryable::new(Value::Null).is_nil());
        assert!(!Queryable::new(0).is_nil());
        assert!(Queryable::new(0).any());
        assert!(!Queryable::new("").any());
    }

    #[test]
    fn shapes() -> Result<(), Error> {
        let q = nested()?;
        assert!(q.any());
        assert!(q.is_map());
        assert!(q.yaml("foo").is_seq());
        assert!(q.yaml("1.2").is_str());
        assert_eq!(q.yaml("foo").len(), 3);
        Ok(())
    }

    #[test]
    fn empty_path_is_self() -> Result<(), Error> {
        let q = nested()?;
        assert_eq!(q.yaml(""), q);
        Ok(())
    }

    #[test]
    fn dotted_lookup() -> Result<(), Error> {
        let q = nested()?;
        assert_eq!(q.yaml("1.2").a(), "two");
        assert_eq!(q.yaml("1.3.4").a(), "four");
        assert_eq!(q.yaml("1.3").o(), entry("4", "four".into()));
        Ok(())
    }

    #[test]
    fn missing_lookups_are_nil() -> Result<(), Error> {
        let q = nested()?;
        assert!(!q.yaml("foo.foo").any());
        assert!(!q.yaml("9.9").any());
        assert!(!q.yaml("1.2.3").any());
        assert!(!q.yaml("bar").any());
        assert!(!Queryable::nil().yaml("1").any());
        Ok(())
    }

    #[test]
    fn predicate_matches_numerically() -> Result<(), Error> {
        let q = nested()?;
        assert_eq!(q.yaml("foo.[name:2]").o(), entry("name", Value::Int(2)));
        assert!(!q.yaml("foo.[name:9]").any());
        Ok(())
    }

    #[test]
    fn predicate_keeps_strings_apart() -> Result<(), Error> {
        let q = nested()?;
        assert!(!q.yaml("foo.['2']").any());
        assert!(!q.yaml("foo.[name:'2']").any());
        assert_eq!(q.yaml("labels.[name:'2']").o(), entry("name", "2".into()));
        assert!(!q.yaml("labels.[name:2]").any());
        Ok(())
    }

    #[test]
    fn predicate_value_with_dots() -> Result<(), Error> {
        let q = nested()?;
        assert_eq!(q.yaml("labels.[name:v1.5].name").a(), "v1.5");
        Ok(())
    }

    #[test]
    fn predicate_on_non_sequence() -> Result<(), Error> {
        let q = nested()?;
        assert!(!q.yaml("1.[name:2]").any());
        assert!(!q.yaml("[name:2]").any());
        Ok(())
    }

    #[test]
    fn sequence_positions() -> Result<(), Error> {
        let q = nested()?;
        assert_eq!(q.yaml("foo.0.name").i(), 1);
        assert_eq!(q.yaml("foo.-1.name").i(), 3);
        assert!(!q.yaml("foo.3").any());
        assert!(!q.yaml("foo.x").any());
        Ok(())
    }

    #[test]
    fn iterate() -> Result<(), Error> {
        let q = nested()?;
        assert_eq!(q.yaml("foo").iter().count(), 3);
        assert_eq!(q.yaml("1.2").iter().collect::<Vec<_>>(), vec![&Value::from("two")]);
        assert_eq!(Queryable::nil().iter().count(), 0);
        Ok(())
    }

    #[test]
    fn pairs() -> Result<(), Error> {
        let q = nested()?;
        assert_eq!(
            q.yaml("1.3").pairs(),
            vec![KeyVal::new("4", "four")]
        );
        let positions: Vec<Value> = q.yaml("foo").pairs().into_iter().map(|kv| kv.key).collect();
        assert_eq!(positions, vec![Value::Int(0), Value::Int(1), Value::Int(2)]);
        assert!(q.yaml("1.2").pairs().is_empty());
        Ok(())
    }

    #[test]
    fn segments_respect_brackets() {
        assert_eq!(segments("a.b"), vec!["a", "b"]);
        assert_eq!(segments("a.[v:1.5].c"), vec!["a", "[v:1.5]", "c"]);
        assert_eq!(segments("a"), vec!["a"]);
    }

    #[test]
    fn key_val_json() {
        let kv = KeyVal::new("k", 1);
        assert_eq!(
            serde_json::to_string(&kv).expect("should serialize"),
            r#"{"key":"k","val":1}"#
        );
    }
}

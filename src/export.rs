//! Converting a [`Queryable`] into plain Rust shapes.
//!
//! Every converter is total. When the value is missing, or isn't the shape
//! asked for, the result is the empty value of the target type.
//!
//! ```
//! use nub::{yaml, Queryable};
//!
//! let q = Queryable::new(yaml::load("ports: [80, 443]\nname: web")?);
//! assert_eq!(q.yaml("ports").ints(), vec![80, 443]);
//! assert_eq!(q.yaml("name").a(), "web");
//! assert_eq!(q.yaml("name").ints(), Vec::<i64>::new());
//! assert_eq!(q.yaml("missing").i(), 0);
//! # Ok::<(), nub::Error>(())
//! ```

use crate::query::Queryable;
use crate::value::{Map, Value};
use std::collections::BTreeMap;

/// A map with every value rendered as a string.
pub type StrStrMap = BTreeMap<String, String>;

impl Queryable {
    /// As a string. Other scalars are rendered; collections are empty.
    pub fn a(&self) -> String {
        match self.value().map(Value::indirect) {
            Some(Value::Str(s)) => s.clone(),
            Some(v @ (Value::Bool(_) | Value::Int(_) | Value::Float(_))) => v.to_string(),
            _ => String::new(),
        }
    }

    /// As an integer. Floats count if they're whole.
    pub fn i(&self) -> i64 {
        self.value().map_or(0, |v| to_int(v).unwrap_or(0))
    }

    /// The wrapped value, or null.
    pub fn o(&self) -> Value {
        self.value().cloned().unwrap_or_default()
    }

    /// Every element, see [`Queryable::iter`].
    pub fn s(&self) -> Vec<Value> {
        self.iter().cloned().collect()
    }

    /// Sequence elements rendered as strings.
    pub fn strs(&self) -> Vec<String> {
        match self.is_seq() {
            true => self.iter().map(ToString::to_string).collect(),
            false => vec![],
        }
    }

    /// Sequence elements that are integers.
    pub fn ints(&self) -> Vec<i64> {
        match self.is_seq() {
            true => self.iter().filter_map(to_int).collect(),
            false => vec![],
        }
    }

    pub fn m(&self) -> Map {
        self.value()
            .and_then(Value::as_map)
            .cloned()
            .unwrap_or_default()
    }

    /// Map with values rendered as strings.
    pub fn aa_map(&self) -> StrStrMap {
        self.value()
            .and_then(Value::as_map)
            .map(stringify)
            .unwrap_or_default()
    }

    /// Sequence elements that are maps.
    pub fn sa_map(&self) -> Vec<Map> {
        match self.is_seq() {
            true => self
                .iter()
                .filter_map(Value::as_map)
                .cloned()
                .collect(),
            false => vec![],
        }
    }

    /// Sequence elements as string maps. Elements that aren't maps become
    /// empty maps, so positions line up with the sequence.
    pub fn saa_map(&self) -> Vec<StrStrMap> {
        match self.is_seq() {
            true => self
                .iter()
                .map(|v| v.as_map().map(stringify).unwrap_or_default())
                .collect(),
            false => vec![],
        }
    }
}

fn to_int(v: &Value) -> Option<i64> {
    match v.indirect() {
        Value::Int(i) => Some(*i),
        Value::Float(f) if f.fract() == 0.0 && f.is_finite() => Some(*f as i64),
        _ => None,
    }
}

fn stringify(m: &Map) -> StrStrMap {
    m.iter().map(|(k, v)| (k.clone(), v.to_string())).collect()
}

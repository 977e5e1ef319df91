//! The dynamic element type.
//!
//! [`Value`] is what nested, loosely typed data looks like once it's been
//! decoded: scalars, sequences and string-keyed maps. It's the element type of
//! [`crate::RefSlice`], the leaves of [`crate::StrMap`], and what a
//! [`crate::Queryable`] wraps.
//!
//! `Value::Ref` is an opaque shared handle to another value. Anything that
//! compares, orders, hashes or inspects values looks through it with
//! [`Value::indirect`], so a handle behaves exactly like what it points at.
//!
//! ```
//! use nub::{Kind, Value};
//!
//! let two = Value::from(2).shared();
//! assert_eq!(two.kind(), Kind::Int);
//! assert_eq!(two, Value::Int(2));
//! assert!(Value::Float(2.0).loosely_eq(&two));
//! ```

use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::ser::{Serialize, Serializer};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

/// Nested map type, keyed by string.
pub type Map = BTreeMap<String, Value>;

/// A loosely typed value.
#[derive(Debug, Clone, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Seq(Vec<Value>),
    Map(Map),
    /// Shared handle to another value.
    Ref(Rc<Value>),
}

/// The variant of a [`Value`], after looking through any `Ref` handle.
///
/// The declaration order is also the order values of different kinds sort in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Kind {
    Null,
    Bool,
    Int,
    Float,
    Str,
    Seq,
    Map,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Null => "null",
                Self::Bool => "bool",
                Self::Int => "int",
                Self::Float => "float",
                Self::Str => "str",
                Self::Seq => "seq",
                Self::Map => "map",
            }
        )
    }
}

impl Value {
    /// Look through `Ref` handles to the value they point at.
    pub fn indirect(&self) -> &Value {
        let mut current = self;
        while let Self::Ref(inner) = current {
            current = inner;
        }
        current
    }

    /// Wrap this value in a shared handle. Already shared values are left
    /// alone, so handles never nest.
    pub fn shared(self) -> Value {
        match self {
            Self::Ref(_) => self,
            other => Self::Ref(Rc::new(other)),
        }
    }

    pub fn kind(&self) -> Kind {
        match self {
            Self::Null => Kind::Null,
            Self::Bool(_) => Kind::Bool,
            Self::Int(_) => Kind::Int,
            Self::Float(_) => Kind::Float,
            Self::Str(_) => Kind::Str,
            Self::Seq(_) => Kind::Seq,
            Self::Map(_) => Kind::Map,
            Self::Ref(inner) => inner.kind(),
        }
    }

    pub fn is_null(&self) -> bool {
        self.kind() == Kind::Null
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self.indirect() {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self.indirect() {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Numeric value, accepting ints as well as floats.
    pub fn as_f64(&self) -> Option<f64> {
        match self.indirect() {
            Self::Int(i) => Some(*i as f64),
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self.indirect() {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_seq(&self) -> Option<&Vec<Value>> {
        match self.indirect() {
            Self::Seq(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&Map> {
        match self.indirect() {
            Self::Map(m) => Some(m),
            _ => None,
        }
    }

    /// Equality where ints and floats compare numerically.
    ///
    /// This is what query predicates use, since an unquoted `2` in a path is
    /// inferred as a float while the stored leaf may be an int.
    pub fn loosely_eq(&self, other: &Value) -> bool {
        match (self.indirect(), other.indirect()) {
            (Self::Int(a), Self::Float(b)) | (Self::Float(b), Self::Int(a)) => *a as f64 == *b,
            (a, b) => a == b,
        }
    }
}

impl Ord for Value {
    fn cmp(&self, other: &Self) -> Ordering {
        use Value::*;
        match (self, other) {
            (Ref(a), b) => a.as_ref().cmp(b),
            (a, Ref(b)) => a.cmp(b.as_ref()),
            (Null, Null) => Ordering::Equal,
            (Bool(a), Bool(b)) => a.cmp(b),
            (Int(a), Int(b)) => a.cmp(b),
            (Float(a), Float(b)) => a.total_cmp(b),
            (Str(a), Str(b)) => a.cmp(b),
            (Seq(a), Seq(b)) => a.cmp(b),
            (Map(a), Map(b)) => a.cmp(b),
            (a, b) => a.kind().cmp(&b.kind()),
        }
    }
}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Self::Ref(inner) => inner.hash(state),
            Self::Null => Kind::Null.hash(state),
            Self::Bool(b) => {
                Kind::Bool.hash(state);
                b.hash(state)
            }
            Self::Int(i) => {
                Kind::Int.hash(state);
                i.hash(state)
            }
            Self::Float(f) => {
                Kind::Float.hash(state);
                f.to_bits().hash(state)
            }
            Self::Str(s) => {
                Kind::Str.hash(state);
                s.hash(state)
            }
            Self::Seq(s) => {
                Kind::Seq.hash(state);
                s.hash(state)
            }
            Self::Map(m) => {
                Kind::Map.hash(state);
                m.hash(state)
            }
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Bool(b) => write!(f, "{}", b),
            Self::Int(i) => write!(f, "{}", i),
            Self::Float(x) => write!(f, "{}", x),
            Self::Str(s) => write!(f, "{}", s),
            Self::Seq(items) => {
                write!(f, "[")?;
                for (n, item) in items.iter().enumerate() {
                    if n > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Self::Map(m) => {
                write!(f, "{{")?;
                for (n, (k, v)) in m.iter().enumerate() {
                    if n > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", k, v)?;
                }
                write!(f, "}}")
            }
            Self::Ref(inner) => write!(f, "{}", inner),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}
impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}
impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Self::Int(i.into())
    }
}
impl From<u32> for Value {
    fn from(i: u32) -> Self {
        Self::Int(i.into())
    }
}
impl From<usize> for Value {
    fn from(i: usize) -> Self {
        match i64::try_from(i) {
            Ok(i) => Self::Int(i),
            Err(_) => Self::Float(i as f64),
        }
    }
}
impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}
impl From<f32> for Value {
    fn from(f: f32) -> Self {
        Self::Float(f.into())
    }
}
impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Str(s.to_owned())
    }
}
impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}
impl From<&String> for Value {
    fn from(s: &String) -> Self {
        Self::Str(s.clone())
    }
}
impl From<Map> for Value {
    fn from(m: Map) -> Self {
        Self::Map(m)
    }
}
/// A handle around a handle collapses to the inner one.
impl From<Rc<Value>> for Value {
    fn from(rc: Rc<Value>) -> Self {
        match rc.as_ref() {
            Self::Ref(inner) => Self::from(Rc::clone(inner)),
            _ => Self::Ref(rc),
        }
    }
}
impl<T> From<Vec<T>> for Value
where
    T: Into<Value>,
{
    fn from(items: Vec<T>) -> Self {
        Self::Seq(items.into_iter().map(Into::into).collect())
    }
}
impl<T> From<Option<T>> for Value
where
    T: Into<Value>,
{
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Self::Null, Into::into)
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Int(i) => serializer.serialize_i64(*i),
            Self::Float(f) => serializer.serialize_f64(*f),
            Self::Str(s) => serializer.serialize_str(s),
            Self::Seq(items) => serializer.collect_seq(items),
            Self::Map(m) => serializer.collect_map(m),
            Self::Ref(inner) => inner.serialize(serializer),
        }
    }
}

struct ValueVisitor;

impl<'de> Visitor<'de> for ValueVisitor {
    type Value = Value;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "a scalar, sequence or map")
    }

    fn visit_bool<E: de::Error>(self, b: bool) -> Result<Value, E> {
        Ok(Value::Bool(b))
    }

    fn visit_i64<E: de::Error>(self, i: i64) -> Result<Value, E> {
        Ok(Value::Int(i))
    }

    fn visit_u64<E: de::Error>(self, u: u64) -> Result<Value, E> {
        Ok(match i64::try_from(u) {
            Ok(i) => Value::Int(i),
            Err(_) => Value::Float(u as f64),
        })
    }

    fn visit_f64<E: de::Error>(self, f: f64) -> Result<Value, E> {
        Ok(Value::Float(f))
    }

    fn visit_str<E: de::Error>(self, s: &str) -> Result<Value, E> {
        Ok(Value::Str(s.to_owned()))
    }

    fn visit_string<E: de::Error>(self, s: String) -> Result<Value, E> {
        Ok(Value::Str(s))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_none<E: de::Error>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element::<Value>()? {
            items.push(item);
        }
        Ok(Value::Seq(items))
    }

    fn visit_map<A>(self, mut access: A) -> Result<Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        // Keys like `1:` in YAML arrive as numbers; the map is string keyed.
        let mut m = Map::new();
        while let Some((k, v)) = access.next_entry::<Value, Value>()? {
            let key = match k {
                Value::Str(s) => s,
                other => other.to_string(),
            };
            m.insert(key, v);
        }
        Ok(Value::Map(m))
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(ValueVisitor)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::collections::HashSet;

    fn map(entries: &[(&str, Value)]) -> Value {
        Value::Map(
            entries
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect(),
        )
    }

    #[test]
    fn kinds() {
        assert_eq!(Value::Null.kind(), Kind::Null);
        assert_eq!(Value::from(true).kind(), Kind::Bool);
        assert_eq!(Value::from(1).kind(), Kind::Int);
        assert_eq!(Value::from(1.5).kind(), Kind::Float);
        assert_eq!(Value::from("x").kind(), Kind::Str);
        assert_eq!(Value::from(vec![1, 2]).kind(), Kind::Seq);
        assert_eq!(map(&[]).kind(), Kind::Map);
        assert_eq!(Value::from("x").shared().kind(), Kind::Str);
    }

    #[test]
    fn indirect_unwraps_handles() {
        let v = Value::from(7).shared();
        assert!(matches!(v, Value::Ref(_)));
        assert!(matches!(v.indirect(), Value::Int(7)));
        assert!(matches!(Value::Int(7).indirect(), Value::Int(7)));

        let built = Value::Ref(Rc::new(Value::Ref(Rc::new(Value::Int(3)))));
        assert!(matches!(built.indirect(), Value::Int(3)));
        assert_eq!(built.as_i64(), Some(3));
    }

    #[test]
    fn handle_from_handle_does_not_nest() {
        let v = Value::from(Rc::new(Value::from(Rc::new(Value::Int(3)))));
        match &v {
            Value::Ref(inner) => assert!(matches!(**inner, Value::Int(3))),
            other => panic!("expected a handle, got {:?}", other),
        }
        assert_eq!(v.kind(), Kind::Int);
        assert_eq!(v.as_i64(), Some(3));
        assert_eq!(crate::Queryable::new(v).i(), 3);
    }

    #[test]
    fn shared_does_not_nest() {
        let v = Value::from(7).shared().shared();
        match v {
            Value::Ref(inner) => assert!(matches!(*inner, Value::Int(7))),
            other => panic!("expected a handle, got {:?}", other),
        }
    }

    #[test]
    fn equality_looks_through_handles() {
        let shared = Value::from("a").shared();
        assert_eq!(shared, Value::from("a"));
        assert_eq!(Value::from("a"), shared);

        let mut set = HashSet::new();
        set.insert(shared);
        assert!(set.contains(&Value::from("a")));
    }

    #[test]
    fn strict_equality_keeps_kinds_apart() {
        assert_ne!(Value::Int(2), Value::Float(2.0));
        assert_ne!(Value::Int(2), Value::from("2"));
    }

    #[test]
    fn loose_equality() {
        assert!(Value::Int(2).loosely_eq(&Value::Float(2.0)));
        assert!(Value::Float(2.0).loosely_eq(&Value::Int(2)));
        assert!(!Value::Int(2).loosely_eq(&Value::from("2")));
        assert!(Value::from("a").loosely_eq(&Value::from("a")));
    }

    #[test]
    fn ordering() {
        let mut items = vec![
            Value::from("b"),
            Value::from(3),
            Value::Null,
            Value::from("a"),
            Value::from(1),
            Value::from(true),
        ];
        items.sort();
        assert_eq!(
            items,
            vec![
                Value::Null,
                Value::from(true),
                Value::from(1),
                Value::from(3),
                Value::from("a"),
                Value::from("b"),
            ]
        );
    }

    #[test]
    fn display() {
        assert_eq!(Value::Null.to_string(), "null");
        assert_eq!(Value::Float(2.0).to_string(), "2");
        assert_eq!(Value::Float(2.5).to_string(), "2.5");
        assert_eq!(Value::from(vec![1, 2, 3]).to_string(), "[1 2 3]");
        assert_eq!(
            map(&[("a", 1.into()), ("b", "two".into())]).to_string(),
            "{a: 1, b: two}"
        );
    }

    #[test]
    fn accessors() {
        assert_eq!(Value::from(3).as_i64(), Some(3));
        assert_eq!(Value::from(3).as_f64(), Some(3.0));
        assert_eq!(Value::from("3").as_i64(), None);
        assert_eq!(Value::from("x").shared().as_str(), Some("x"));
        assert_eq!(Value::from(false).as_bool(), Some(false));
        assert!(Value::from(vec![1]).as_seq().is_some());
        assert!(Value::Null.as_map().is_none());
        assert!(Value::from(None::<i64>).is_null());
    }

    #[test]
    fn json_round_trip() {
        let v = map(&[
            ("list", Value::from(vec![1, 2])),
            ("name", "nub".into()),
            ("ratio", 0.5.into()),
            ("none", Value::Null),
        ]);
        let txt = serde_json::to_string(&v).expect("should serialize");
        assert_eq!(
            txt,
            r#"{"list":[1,2],"name":"nub","none":null,"ratio":0.5}"#
        );
        let back: Value = serde_json::from_str(&txt).expect("should deserialize");
        assert_eq!(back, v);
    }

    #[test]
    fn yaml_numeric_keys_become_strings() {
        let v: Value = serde_yml::from_str("1:\n  2: two\n").expect("should deserialize");
        assert_eq!(v, map(&[("1", map(&[("2", "two".into())]))]));
    }
}

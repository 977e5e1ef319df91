//! A slice of [`Value`]s that all share one [`Kind`].
//!
//! The first value stored decides the kind. After that, anything of another
//! kind is refused: the plain methods panic, and the `try_` methods return
//! [`Error::TypeMismatch`]. A refused insertion never changes the contents,
//! and batches are checked in full before anything is stored.
//!
//! Everything read-only comes from [`Slice`] through `Deref`.
//!
//! ```
//! use nub::{Kind, RefSlice, Value};
//!
//! let mut s = RefSlice::new();
//! s.append("b").append("a");
//! assert_eq!(s.kind(), Some(Kind::Str));
//! assert!(s.try_append_all(vec![Value::from("c"), Value::from(1)]).is_err());
//! assert_eq!(s.sort().to_string(), "[a b]");
//! ```

use crate::error::Error;
use crate::slice::Slice;
use crate::value::{Kind, Value};
use std::fmt;
use std::ops::Deref;

/// Kind-checked slice of values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RefSlice {
    items: Slice<Value>,
    kind: Option<Kind>,
}

impl RefSlice {
    /// No storage and no kind yet.
    pub fn nil() -> Self {
        Self::default()
    }

    /// Empty storage, no kind yet.
    pub fn new() -> Self {
        Self {
            items: Slice::new(),
            kind: None,
        }
    }

    /// Build from values, which must all be of one kind.
    pub fn from_values<V>(values: impl IntoIterator<Item = V>) -> Result<Self, Error>
    where
        V: Into<Value>,
    {
        let mut s = Self::new();
        s.try_append_all(values)?;
        Ok(s)
    }

    /// The kind established by the first insertion, if any.
    pub fn kind(&self) -> Option<Kind> {
        self.kind
    }

    pub fn as_values(&self) -> &Slice<Value> {
        &self.items
    }

    pub fn into_values(self) -> Slice<Value> {
        self.items
    }

    /// Kind that `values` would leave this container with.
    fn check<'a>(&self, values: impl IntoIterator<Item = &'a Value>) -> Result<Option<Kind>, Error> {
        let mut established = self.kind;
        for v in values {
            let attempted = v.kind();
            match established {
                None => established = Some(attempted),
                Some(k) if k == attempted => {}
                Some(k) => {
                    tracing::debug!(%attempted, established = %k, "refusing insertion");
                    return Err(Error::TypeMismatch {
                        attempted,
                        established: k,
                    });
                }
            }
        }
        Ok(established)
    }

    fn admit(&mut self, values: &[Value]) -> Result<(), Error> {
        self.kind = self.check(values)?;
        Ok(())
    }

    /// A container of the same kind holding `items`.
    fn wrap(&self, items: Slice<Value>) -> Self {
        Self {
            items,
            kind: self.kind,
        }
    }
}

// Checked tier.
impl RefSlice {
    pub fn try_append(&mut self, x: impl Into<Value>) -> Result<&mut Self, Error> {
        let x = x.into();
        self.admit(std::slice::from_ref(&x))?;
        self.items.append(x);
        Ok(self)
    }

    pub fn try_append_all<V>(&mut self, xs: impl IntoIterator<Item = V>) -> Result<&mut Self, Error>
    where
        V: Into<Value>,
    {
        let xs: Vec<Value> = xs.into_iter().map(Into::into).collect();
        self.admit(&xs)?;
        self.items.append_all(xs);
        Ok(self)
    }

    pub fn try_concat_mut(&mut self, other: RefSlice) -> Result<&mut Self, Error> {
        self.try_append_all(other.items)
    }

    pub fn try_prepend(&mut self, x: impl Into<Value>) -> Result<&mut Self, Error> {
        let x = x.into();
        self.admit(std::slice::from_ref(&x))?;
        self.items.prepend(x);
        Ok(self)
    }

    /// See [`Slice::insert`] for where `x` lands.
    pub fn try_insert(&mut self, i: isize, x: impl Into<Value>) -> Result<&mut Self, Error> {
        let x = x.into();
        self.admit(std::slice::from_ref(&x))?;
        self.items.insert(i, x);
        Ok(self)
    }

    pub fn try_set(&mut self, i: isize, x: impl Into<Value>) -> Result<&mut Self, Error> {
        let x = x.into();
        let len = self.items.len();
        crate::index::abs_index(len, i).ok_or(Error::OutOfBounds { index: i, len })?;
        self.admit(std::slice::from_ref(&x))?;
        self.items.try_set(i, x)?;
        Ok(self)
    }
}

fn must(result: Result<&mut RefSlice, Error>) -> &mut RefSlice {
    match result {
        Ok(s) => s,
        Err(e) => panic!("{}", e),
    }
}

// Panicking tier.
impl RefSlice {
    pub fn append(&mut self, x: impl Into<Value>) -> &mut Self {
        must(self.try_append(x))
    }

    pub fn append_all<V>(&mut self, xs: impl IntoIterator<Item = V>) -> &mut Self
    where
        V: Into<Value>,
    {
        must(self.try_append_all(xs))
    }

    pub fn concat_mut(&mut self, other: RefSlice) -> &mut Self {
        must(self.try_concat_mut(other))
    }

    pub fn prepend(&mut self, x: impl Into<Value>) -> &mut Self {
        must(self.try_prepend(x))
    }

    pub fn insert(&mut self, i: isize, x: impl Into<Value>) -> &mut Self {
        must(self.try_insert(i, x))
    }

    pub fn set(&mut self, i: isize, x: impl Into<Value>) -> &mut Self {
        must(self.try_set(i, x))
    }
}

// Removal and reordering. None of these can break the kind, and the kind
// outlives the elements.
impl RefSlice {
    pub fn clear(&mut self) -> &mut Self {
        self.items.clear();
        self
    }

    pub fn drop(&mut self, i: isize, j: isize) -> &mut Self {
        self.items.drop(i, j);
        self
    }

    pub fn drop_at(&mut self, i: isize) -> &mut Self {
        self.items.drop_at(i);
        self
    }

    pub fn drop_first(&mut self) -> &mut Self {
        self.items.drop_first();
        self
    }

    pub fn drop_first_n(&mut self, n: isize) -> &mut Self {
        self.items.drop_first_n(n);
        self
    }

    pub fn drop_last(&mut self) -> &mut Self {
        self.items.drop_last();
        self
    }

    pub fn drop_last_n(&mut self, n: isize) -> &mut Self {
        self.items.drop_last_n(n);
        self
    }

    pub fn drop_where(&mut self, f: impl FnMut(&Value) -> bool) -> &mut Self {
        self.items.drop_where(f);
        self
    }

    pub fn pop(&mut self) -> Option<Value> {
        self.items.pop()
    }

    pub fn pop_n(&mut self, n: isize) -> Self {
        let taken = self.items.pop_n(n);
        self.wrap(taken)
    }

    pub fn shift(&mut self) -> Option<Value> {
        self.items.shift()
    }

    pub fn shift_n(&mut self, n: isize) -> Self {
        let taken = self.items.shift_n(n);
        self.wrap(taken)
    }

    pub fn take(&mut self, i: isize, j: isize) -> Self {
        let taken = self.items.take(i, j);
        self.wrap(taken)
    }

    pub fn take_at(&mut self, i: isize) -> Option<Value> {
        self.items.take_at(i)
    }

    pub fn take_where(&mut self, f: impl FnMut(&Value) -> bool) -> Self {
        let taken = self.items.take_where(f);
        self.wrap(taken)
    }

    pub fn swap(&mut self, i: isize, j: isize) -> &mut Self {
        self.items.swap(i, j);
        self
    }

    pub fn reverse_mut(&mut self) -> &mut Self {
        self.items.reverse_mut();
        self
    }

    pub fn sort_mut(&mut self) -> &mut Self {
        self.items.sort_mut();
        self
    }

    pub fn sort_descending_mut(&mut self) -> &mut Self {
        self.items.sort_descending_mut();
        self
    }

    pub fn uniq_mut(&mut self) -> &mut Self {
        self.items.uniq_mut();
        self
    }
}

// Copies that keep the kind.
impl RefSlice {
    pub fn copy(&self) -> Self {
        self.wrap(self.items.copy())
    }

    pub fn slice(&self, i: isize, j: isize) -> Self {
        self.wrap(self.items.slice(i, j))
    }

    pub fn select(&self, f: impl FnMut(&Value) -> bool) -> Self {
        self.wrap(self.items.select(f))
    }

    pub fn reverse(&self) -> Self {
        self.wrap(self.items.reverse())
    }

    pub fn sort(&self) -> Self {
        self.wrap(self.items.sort())
    }

    pub fn sort_descending(&self) -> Self {
        self.wrap(self.items.sort_descending())
    }

    pub fn uniq(&self) -> Self {
        self.wrap(self.items.uniq())
    }
}

impl Deref for RefSlice {
    type Target = Slice<Value>;

    fn deref(&self) -> &Slice<Value> {
        &self.items
    }
}

impl fmt::Display for RefSlice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.items)
    }
}

impl From<RefSlice> for Value {
    fn from(s: RefSlice) -> Self {
        Value::Seq(s.items.into_vec())
    }
}

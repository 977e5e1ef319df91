//! Chainable sequence container.
//!
//! A [`Slice`] wraps a `Vec` that may not exist yet. A *nil* slice has no
//! backing storage at all, while an *empty* one has storage but no elements.
//! Every query treats both as "nothing there"; any insertion into a nil slice
//! allocates. Mutating methods take `&mut self` and hand it back, so calls can
//! be chained:
//!
//! ```
//! use nub::{slice, IntSlice};
//!
//! let mut s: IntSlice = slice![1, 2, 3];
//! s.append(4).prepend(0).drop_at(2);
//! assert_eq!(s.as_slice(), &[0, 1, 3, 4]);
//! assert_eq!(s.at(-1), Some(&4));
//! assert_eq!(s.slice(1, -2).to_string(), "[1 3]");
//! ```
//!
//! Indices follow [`crate::index`]: negatives count back from the end, and
//! pairs are inclusive on both ends.

mod access;
mod edit;
mod iter;
mod order;
mod take;

use crate::index::abs_indices;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A sequence of `T`, possibly without storage.
#[derive(Debug, Clone)]
pub struct Slice<T>(Option<Vec<T>>);

/// Slice of integers.
pub type IntSlice = Slice<i64>;

/// Slice of owned strings.
pub type StrSlice = Slice<String>;

impl<T> Slice<T> {
    /// A slice with no backing storage.
    pub fn nil() -> Self {
        Self(None)
    }

    /// An empty slice with storage.
    pub fn new() -> Self {
        Self(Some(vec![]))
    }

    /// Wrap an existing `Vec`.
    pub fn with(items: Vec<T>) -> Self {
        Self(Some(items))
    }

    pub fn is_nil(&self) -> bool {
        self.0.is_none()
    }

    /// True for both nil and empty slices.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn len(&self) -> usize {
        self.0.as_ref().map_or(0, Vec::len)
    }

    /// True if there's at least one element.
    pub fn any(&self) -> bool {
        !self.is_empty()
    }

    /// True if there's exactly one element.
    pub fn single(&self) -> bool {
        self.len() == 1
    }

    pub fn as_slice(&self) -> &[T] {
        self.0.as_deref().unwrap_or(&[])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.0.unwrap_or_default()
    }

    /// Storage, allocated on first use.
    fn items_mut(&mut self) -> &mut Vec<T> {
        self.0.get_or_insert_with(Vec::new)
    }

    /// Normalized range for zero, one or two indices, if it selects anything.
    fn range(&self, indices: &[isize]) -> Option<std::ops::Range<usize>> {
        abs_indices(self.len(), indices).filter(|r| !r.is_empty())
    }
}

impl<T> Default for Slice<T> {
    fn default() -> Self {
        Self::nil()
    }
}

impl<T> From<Vec<T>> for Slice<T> {
    fn from(items: Vec<T>) -> Self {
        Self::with(items)
    }
}

impl<T, const N: usize> From<[T; N]> for Slice<T> {
    fn from(items: [T; N]) -> Self {
        Self::with(items.into())
    }
}

impl<'a> From<Vec<&'a str>> for StrSlice {
    fn from(items: Vec<&'a str>) -> Self {
        items.into_iter().map(str::to_owned).collect()
    }
}

impl<T> FromIterator<T> for Slice<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::with(iter.into_iter().collect())
    }
}

impl<T> Extend<T> for Slice<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items_mut().extend(iter)
    }
}

impl<T> IntoIterator for Slice<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Slice<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// Nil and empty hold the same (zero) elements, so they compare equal.
impl<T: PartialEq> PartialEq for Slice<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for Slice<T> {}

impl<T: PartialOrd> PartialOrd for Slice<T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

impl<T: Ord> Ord for Slice<T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl<T: Hash> Hash for Slice<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

impl<T: fmt::Display> fmt::Display for Slice<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.join(" "))
    }
}

/// Build a [`Slice`] from a list of elements.
///
/// `slice![]` is an empty (not nil) slice.
#[macro_export]
macro_rules! slice {
    () => {
        $crate::Slice::new()
    };
    ( $( $x:expr ),+ $(,)? ) => {
        $crate::Slice::with(vec![ $( $x ),+ ])
    };
}

use super::Slice;
use crate::index::{abs_count, abs_index};
use std::fmt::Display;

impl<T> Slice<T> {
    /// Element at a possibly negative index.
    pub fn at(&self, i: isize) -> Option<&T> {
        abs_index(self.len(), i).map(|i| &self.as_slice()[i])
    }

    pub fn first(&self) -> Option<&T> {
        self.at(0)
    }

    pub fn last(&self) -> Option<&T> {
        self.at(-1)
    }

    /// First two elements, either of which may be missing.
    pub fn pair(&self) -> (Option<&T>, Option<&T>) {
        (self.at(0), self.at(1))
    }

    /// Position of the first element equal to `x`.
    pub fn index(&self, x: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|item| item == x)
    }

    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq,
    {
        self.as_slice().contains(x)
    }

    /// True if any of `xs` is in the slice.
    pub fn contains_any(&self, xs: &[T]) -> bool
    where
        T: PartialEq,
    {
        xs.iter().any(|x| self.contains(x))
    }

    /// Number of elements equal to `x`.
    pub fn count(&self, x: &T) -> usize
    where
        T: PartialEq,
    {
        self.iter().filter(|item| *item == x).count()
    }

    pub fn count_where(&self, mut f: impl FnMut(&T) -> bool) -> usize {
        self.iter().filter(|item| f(*item)).count()
    }

    pub fn any_where(&self, f: impl FnMut(&T) -> bool) -> bool {
        self.iter().any(f)
    }

    pub fn join(&self, sep: &str) -> String
    where
        T: Display,
    {
        self.iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(sep)
    }
}

impl<T: Clone> Slice<T> {
    /// New slice holding every element.
    pub fn copy(&self) -> Self {
        self.extract(&[])
    }

    /// New slice holding the inclusive range `i..=j`.
    ///
    /// Out of range ends are clamped. An exclusive pair (`i` after `j`) gives
    /// an empty slice.
    ///
    /// ```
    /// use nub::IntSlice;
    ///
    /// let s = IntSlice::from(vec![1, 2, 3, 4]);
    /// assert_eq!(s.slice(1, -1).as_slice(), &[2, 3, 4]);
    /// assert_eq!(s.slice(-2, 10).as_slice(), &[3, 4]);
    /// assert!(s.slice(3, 1).is_empty());
    /// ```
    pub fn slice(&self, i: isize, j: isize) -> Self {
        self.extract(&[i, j])
    }

    /// Up to `n` elements from the front. The sign of `n` is ignored.
    pub fn first_n(&self, n: isize) -> Self {
        let n = abs_count(n).min(self.len());
        Self::with(self.as_slice()[..n].to_vec())
    }

    /// Up to `n` elements from the back, in their original order.
    pub fn last_n(&self, n: isize) -> Self {
        let n = abs_count(n).min(self.len());
        Self::with(self.as_slice()[self.len() - n..].to_vec())
    }

    /// New slice of the elements that satisfy `f`.
    pub fn select(&self, mut f: impl FnMut(&T) -> bool) -> Self {
        self.iter().filter(|item| f(*item)).cloned().collect()
    }

    fn extract(&self, indices: &[isize]) -> Self {
        match self.range(indices) {
            Some(r) => Self::with(self.as_slice()[r].to_vec()),
            None => Self::new(),
        }
    }
}

impl<T> Slice<T> {
    /// New slice of a possibly different element type.
    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Slice<U> {
        self.iter().map(f).collect()
    }
}

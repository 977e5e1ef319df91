use super::Slice;
use std::collections::HashSet;
use std::hash::Hash;

impl<T> Slice<T> {
    pub fn reverse_mut(&mut self) -> &mut Self {
        if let Some(items) = self.0.as_mut() {
            items.reverse();
        }
        self
    }
}

impl<T: Clone> Slice<T> {
    /// Reversed copy.
    pub fn reverse(&self) -> Self {
        let mut copy = self.copy();
        copy.reverse_mut();
        copy
    }
}

impl<T: Ord> Slice<T> {
    /// Stable ascending sort, in place.
    pub fn sort_mut(&mut self) -> &mut Self {
        if let Some(items) = self.0.as_mut() {
            items.sort();
        }
        self
    }

    /// Stable descending sort, in place.
    pub fn sort_descending_mut(&mut self) -> &mut Self {
        if let Some(items) = self.0.as_mut() {
            items.sort_by(|a, b| b.cmp(a));
        }
        self
    }
}

impl<T: Ord + Clone> Slice<T> {
    pub fn sort(&self) -> Self {
        let mut copy = self.copy();
        copy.sort_mut();
        copy
    }

    pub fn sort_descending(&self) -> Self {
        let mut copy = self.copy();
        copy.sort_descending_mut();
        copy
    }
}

impl<T: Eq + Hash + Clone> Slice<T> {
    /// Drop repeats in place, keeping the first of each.
    pub fn uniq_mut(&mut self) -> &mut Self {
        if let Some(items) = self.0.as_mut() {
            let mut seen = HashSet::new();
            items.retain(|x| seen.insert(x.clone()));
        }
        self
    }

    /// Copy without repeats, in first-seen order.
    ///
    /// ```
    /// use nub::IntSlice;
    ///
    /// let s = IntSlice::from(vec![1, 2, 2, 3, 1]);
    /// assert_eq!(s.uniq().as_slice(), &[1, 2, 3]);
    /// ```
    pub fn uniq(&self) -> Self {
        let mut copy = self.copy();
        copy.uniq_mut();
        copy
    }

    /// Concatenation of both, without repeats.
    pub fn union(&self, other: &Slice<T>) -> Self {
        let mut joined = self.concat(other);
        joined.uniq_mut();
        joined
    }

    pub fn union_mut(&mut self, other: Slice<T>) -> &mut Self {
        self.concat_mut(other).uniq_mut()
    }
}

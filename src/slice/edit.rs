use super::Slice;
use crate::error::Error;
use crate::index::{abs_count, abs_index};

impl<T> Slice<T> {
    pub fn append(&mut self, x: T) -> &mut Self {
        self.items_mut().push(x);
        self
    }

    pub fn append_all(&mut self, xs: impl IntoIterator<Item = T>) -> &mut Self {
        self.items_mut().extend(xs);
        self
    }

    /// Move every element of `other` onto the end.
    pub fn concat_mut(&mut self, other: Slice<T>) -> &mut Self {
        self.append_all(other)
    }

    pub fn prepend(&mut self, x: T) -> &mut Self {
        self.items_mut().insert(0, x);
        self
    }

    /// Insert `x` before index `i`.
    ///
    /// A negative `i` inserts after the element it refers to, so `-1` appends.
    /// An index outside the slice leaves it unchanged, except that inserting
    /// into an empty slice always appends.
    ///
    /// ```
    /// use nub::IntSlice;
    ///
    /// let mut s = IntSlice::from(vec![1, 3]);
    /// s.insert(1, 2).insert(-1, 4).insert(9, 99);
    /// assert_eq!(s.as_slice(), &[1, 2, 3, 4]);
    /// ```
    pub fn insert(&mut self, i: isize, x: T) -> &mut Self {
        if self.is_empty() {
            return self.append(x);
        }
        if let Some(mut j) = abs_index(self.len(), i) {
            if i < 0 {
                j += 1;
            }
            self.items_mut().insert(j, x);
        }
        self
    }

    /// Overwrite the element at `i`.
    ///
    /// Panics if `i` is out of bounds; see [`Slice::try_set`].
    pub fn set(&mut self, i: isize, x: T) -> &mut Self {
        match self.try_set(i, x) {
            Ok(s) => s,
            Err(e) => panic!("{}", e),
        }
    }

    /// Overwrite the element at `i`, or report that `i` is out of bounds.
    pub fn try_set(&mut self, i: isize, x: T) -> Result<&mut Self, Error> {
        let len = self.len();
        let j = abs_index(len, i).ok_or(Error::OutOfBounds { index: i, len })?;
        self.items_mut()[j] = x;
        Ok(self)
    }

    /// Exchange two elements. Does nothing unless both indices are valid.
    pub fn swap(&mut self, i: isize, j: isize) -> &mut Self {
        let len = self.len();
        if let (Some(i), Some(j)) = (abs_index(len, i), abs_index(len, j)) {
            self.items_mut().swap(i, j);
        }
        self
    }

    /// Remove every element, keeping storage.
    pub fn clear(&mut self) -> &mut Self {
        if let Some(items) = self.0.as_mut() {
            items.clear();
        }
        self
    }

    /// Remove the inclusive range `i..=j`.
    pub fn drop(&mut self, i: isize, j: isize) -> &mut Self {
        if let Some(r) = self.range(&[i, j]) {
            self.items_mut().drain(r);
        }
        self
    }

    pub fn drop_at(&mut self, i: isize) -> &mut Self {
        self.drop(i, i)
    }

    pub fn drop_first(&mut self) -> &mut Self {
        self.drop_first_n(1)
    }

    /// Remove up to `n` elements from the front. The sign of `n` is ignored.
    pub fn drop_first_n(&mut self, n: isize) -> &mut Self {
        let n = abs_count(n).min(self.len());
        if n > 0 {
            self.items_mut().drain(..n);
        }
        self
    }

    pub fn drop_last(&mut self) -> &mut Self {
        self.drop_last_n(1)
    }

    /// Remove up to `n` elements from the back. The sign of `n` is ignored.
    pub fn drop_last_n(&mut self, n: isize) -> &mut Self {
        let len = self.len();
        let n = abs_count(n).min(len);
        if n > 0 {
            self.items_mut().truncate(len - n);
        }
        self
    }

    /// Remove every element that satisfies `f`.
    pub fn drop_where(&mut self, mut f: impl FnMut(&T) -> bool) -> &mut Self {
        if let Some(items) = self.0.as_mut() {
            items.retain(|x| !f(x));
        }
        self
    }
}

impl<T: Clone> Slice<T> {
    /// New slice of these elements followed by those of `other`.
    pub fn concat(&self, other: &Slice<T>) -> Self {
        self.iter().chain(other.iter()).cloned().collect()
    }
}

#[cfg(test)]
mod test {
    use crate::error::Error;
    use crate::slice::{IntSlice, Slice, StrSlice};

    #[test]
    fn append_chain() {
        let mut s = IntSlice::nil();
        s.append(1).append(2).append_all(vec![3, 4]);
        assert_eq!(s.as_slice(), &[1, 2, 3, 4]);
    }

    #[test]
    fn concat() {
        let a = IntSlice::from(vec![1, 2]);
        let b = IntSlice::from(vec![3]);
        assert_eq!(a.concat(&b).as_slice(), &[1, 2, 3]);
        assert_eq!(a.as_slice(), &[1, 2]);

        let mut c = IntSlice::nil();
        c.concat_mut(a).concat_mut(b);
        assert_eq!(c.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn prepend() {
        let mut s: StrSlice = vec!["b"].into();
        s.prepend("a".into());
        assert_eq!(s.join(""), "ab");
    }

    #[test]
    fn insert_positions() {
        let mut s = IntSlice::from(vec![1, 2, 3]);
        s.insert(0, 0);
        assert_eq!(s.as_slice(), &[0, 1, 2, 3]);
        s.insert(-1, 4);
        assert_eq!(s.as_slice(), &[0, 1, 2, 3, 4]);
        s.insert(-2, 9);
        assert_eq!(s.as_slice(), &[0, 1, 2, 3, 9, 4]);
        s.insert(2, 8);
        assert_eq!(s.as_slice(), &[0, 1, 8, 2, 3, 9, 4]);
    }

    #[test]
    fn insert_out_of_range() {
        let mut s = IntSlice::from(vec![1, 2]);
        s.insert(2, 9).insert(-3, 9);
        assert_eq!(s.as_slice(), &[1, 2]);
    }

    #[test]
    fn insert_into_empty_appends() {
        let mut s = IntSlice::nil();
        s.insert(5, 1);
        assert_eq!(s.as_slice(), &[1]);
    }

    #[test]
    fn set() {
        let mut s = IntSlice::from(vec![1, 2, 3]);
        s.set(0, 10).set(-1, 30);
        assert_eq!(s.as_slice(), &[10, 2, 30]);
    }

    #[test]
    #[should_panic(expected = "slice assignment is out of bounds")]
    fn set_out_of_bounds_panics() {
        IntSlice::from(vec![1]).set(1, 2);
    }

    #[test]
    fn try_set() -> Result<(), Error> {
        let mut s = IntSlice::from(vec![1, 2, 3]);
        s.try_set(1, 20)?;
        assert_eq!(s.as_slice(), &[1, 20, 3]);
        assert_eq!(
            s.try_set(-4, 0).map(|_| ()),
            Err(Error::OutOfBounds { index: -4, len: 3 })
        );
        assert_eq!(s.as_slice(), &[1, 20, 3]);
        assert_eq!(
            IntSlice::nil().try_set(0, 1).map(|_| ()),
            Err(Error::OutOfBounds { index: 0, len: 0 })
        );
        Ok(())
    }

    #[test]
    fn swap() {
        let mut s = IntSlice::from(vec![1, 2, 3]);
        s.swap(0, -1);
        assert_eq!(s.as_slice(), &[3, 2, 1]);
        s.swap(0, 5);
        assert_eq!(s.as_slice(), &[3, 2, 1]);
    }

    #[test]
    fn clear_keeps_storage() {
        let mut s = IntSlice::from(vec![1, 2]);
        s.clear();
        assert!(s.is_empty());
        assert!(!s.is_nil());
        let mut nil = IntSlice::nil();
        nil.clear();
        assert!(nil.is_nil());
    }

    #[test]
    fn drop_ranges() {
        let mut s = IntSlice::from(vec![1, 2, 3, 4, 5]);
        s.drop(1, 2);
        assert_eq!(s.as_slice(), &[1, 4, 5]);
        s.drop(2, 1);
        assert_eq!(s.as_slice(), &[1, 4, 5]);
        s.drop(-2, -1);
        assert_eq!(s.as_slice(), &[1]);
    }

    #[test]
    fn drop_at() {
        let mut s = IntSlice::from(vec![1, 2, 3]);
        s.drop_at(-1).drop_at(7);
        assert_eq!(s.as_slice(), &[1, 2]);
    }

    #[test]
    fn drop_ends() {
        let mut s: Slice<i64> = (1..=6).collect();
        s.drop_first().drop_last();
        assert_eq!(s.as_slice(), &[2, 3, 4, 5]);
        s.drop_first_n(-2);
        assert_eq!(s.as_slice(), &[4, 5]);
        s.drop_last_n(10);
        assert!(s.is_empty());
        s.drop_first();
        assert!(s.is_empty());
    }

    #[test]
    fn drop_where() {
        let mut s: Slice<i64> = (1..=6).collect();
        s.drop_where(|x| x % 2 == 0);
        assert_eq!(s.as_slice(), &[1, 3, 5]);
    }
}

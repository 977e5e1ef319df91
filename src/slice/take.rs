use super::Slice;
use crate::index::{abs_count, abs_index};

// Removal that hands back what was removed.
impl<T> Slice<T> {
    /// Remove and return the last element.
    pub fn pop(&mut self) -> Option<T> {
        self.0.as_mut().and_then(Vec::pop)
    }

    /// Remove and return up to `n` elements from the back, in order.
    pub fn pop_n(&mut self, n: isize) -> Slice<T> {
        let len = self.len();
        let n = abs_count(n).min(len);
        match n {
            0 => Slice::new(),
            n => self.items_mut().split_off(len - n).into(),
        }
    }

    /// Remove and return the first element.
    pub fn shift(&mut self) -> Option<T> {
        match self.is_empty() {
            true => None,
            false => Some(self.items_mut().remove(0)),
        }
    }

    /// Remove and return up to `n` elements from the front.
    pub fn shift_n(&mut self, n: isize) -> Slice<T> {
        let n = abs_count(n).min(self.len());
        match n {
            0 => Slice::new(),
            n => self.items_mut().drain(..n).collect(),
        }
    }

    /// Remove and return the inclusive range `i..=j`.
    pub fn take(&mut self, i: isize, j: isize) -> Slice<T> {
        match self.range(&[i, j]) {
            Some(r) => self.items_mut().drain(r).collect(),
            None => Slice::new(),
        }
    }

    /// Remove and return the element at `i`.
    pub fn take_at(&mut self, i: isize) -> Option<T> {
        abs_index(self.len(), i).map(|i| self.items_mut().remove(i))
    }

    /// Remove and return every element that satisfies `f`.
    ///
    /// ```
    /// use nub::IntSlice;
    ///
    /// let mut s = IntSlice::from(vec![1, 2, 3, 4]);
    /// let evens = s.take_where(|x| x % 2 == 0);
    /// assert_eq!(evens.as_slice(), &[2, 4]);
    /// assert_eq!(s.as_slice(), &[1, 3]);
    /// ```
    pub fn take_where(&mut self, mut f: impl FnMut(&T) -> bool) -> Slice<T> {
        let items = match self.0.take() {
            Some(items) => items,
            None => return Slice::new(),
        };
        let (taken, kept): (Vec<T>, Vec<T>) = items.into_iter().partition(|x| f(x));
        self.0 = Some(kept);
        taken.into()
    }
}

#[cfg(test)]
mod test {
    use crate::slice::IntSlice;

    #[test]
    fn pop() {
        let mut s = IntSlice::from(vec![1, 2]);
        assert_eq!(s.pop(), Some(2));
        assert_eq!(s.pop(), Some(1));
        assert_eq!(s.pop(), None);
        assert_eq!(IntSlice::nil().pop(), None);
    }

    #[test]
    fn pop_n() {
        let mut s = IntSlice::from(vec![1, 2, 3, 4]);
        assert_eq!(s.pop_n(2).as_slice(), &[3, 4]);
        assert_eq!(s.as_slice(), &[1, 2]);
        assert_eq!(s.pop_n(-5).as_slice(), &[1, 2]);
        assert!(s.is_empty());
        assert!(s.pop_n(1).is_empty());
    }

    #[test]
    fn shift() {
        let mut s = IntSlice::from(vec![1, 2]);
        assert_eq!(s.shift(), Some(1));
        assert_eq!(s.as_slice(), &[2]);
        assert_eq!(IntSlice::nil().shift(), None);
    }

    #[test]
    fn shift_n() {
        let mut s = IntSlice::from(vec![1, 2, 3]);
        assert_eq!(s.shift_n(2).as_slice(), &[1, 2]);
        assert_eq!(s.as_slice(), &[3]);
        assert_eq!(s.shift_n(0).len(), 0);
        assert_eq!(s.as_slice(), &[3]);
    }

    #[test]
    fn take_range() {
        let mut s = IntSlice::from(vec![1, 2, 3, 4]);
        assert_eq!(s.take(1, 2).as_slice(), &[2, 3]);
        assert_eq!(s.as_slice(), &[1, 4]);
        assert!(s.take(1, 0).is_empty());
        assert_eq!(s.as_slice(), &[1, 4]);
    }

    #[test]
    fn take_at() {
        let mut s = IntSlice::from(vec![1, 2, 3]);
        assert_eq!(s.take_at(-1), Some(3));
        assert_eq!(s.take_at(5), None);
        assert_eq!(s.as_slice(), &[1, 2]);
    }

    #[test]
    fn take_where_on_nil() {
        let mut s = IntSlice::nil();
        assert!(s.take_where(|_| true).is_empty());
        assert!(s.is_nil());
    }
}

use super::Slice;

// Callback iteration. The try_ forms stop at the first error and return it
// untouched.
impl<T> Slice<T> {
    pub fn each(&self, f: impl FnMut(&T)) -> &Self {
        self.iter().for_each(f);
        self
    }

    pub fn each_with_index(&self, mut f: impl FnMut(usize, &T)) -> &Self {
        self.iter().enumerate().for_each(|(i, x)| f(i, x));
        self
    }

    pub fn each_reverse(&self, f: impl FnMut(&T)) -> &Self {
        self.iter().rev().for_each(f);
        self
    }

    /// Walk backwards. Indices are the elements' real positions.
    pub fn each_reverse_with_index(&self, mut f: impl FnMut(usize, &T)) -> &Self {
        self.iter().enumerate().rev().for_each(|(i, x)| f(i, x));
        self
    }

    /// ```
    /// use nub::IntSlice;
    ///
    /// let s = IntSlice::from(vec![1, 2, 3]);
    /// let mut seen = vec![];
    /// let result = s.try_each(|x| match *x {
    ///     2 => Err("stop"),
    ///     x => Ok(seen.push(x)),
    /// });
    /// assert_eq!(result.map(|_| ()), Err("stop"));
    /// assert_eq!(seen, vec![1]);
    /// ```
    pub fn try_each<E>(&self, f: impl FnMut(&T) -> Result<(), E>) -> Result<&Self, E> {
        self.iter().try_for_each(f)?;
        Ok(self)
    }

    pub fn try_each_with_index<E>(
        &self,
        mut f: impl FnMut(usize, &T) -> Result<(), E>,
    ) -> Result<&Self, E> {
        self.iter()
            .enumerate()
            .try_for_each(|(i, x)| f(i, x))?;
        Ok(self)
    }

    pub fn try_each_reverse<E>(&self, f: impl FnMut(&T) -> Result<(), E>) -> Result<&Self, E> {
        self.iter().rev().try_for_each(f)?;
        Ok(self)
    }

    pub fn try_each_reverse_with_index<E>(
        &self,
        mut f: impl FnMut(usize, &T) -> Result<(), E>,
    ) -> Result<&Self, E> {
        self.iter()
            .enumerate()
            .rev()
            .try_for_each(|(i, x)| f(i, x))?;
        Ok(self)
    }
}

//! Chainable string wrapper.
//!
//! ```
//! use nub::Str;
//!
//! let s = Str::from("  key: value  ").trim_space();
//! assert_eq!(s.split_on(":"), ("key:".to_string(), " value".to_string()));
//! ```

use crate::query::Queryable;
use crate::slice::StrSlice;
use crate::value::Value;
use std::fmt;

/// An owned string with convenience methods.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Str(String);

impl Str {
    pub fn new() -> Self {
        Self::default()
    }

    /// Export as a `String`.
    pub fn a(&self) -> String {
        self.0.clone()
    }

    /// Export as bytes.
    pub fn b(&self) -> Vec<u8> {
        self.0.as_bytes().to_vec()
    }

    /// Wrap the string in a [`Queryable`].
    pub fn q(&self) -> Queryable {
        Queryable::new(self.0.clone())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True if the string is empty or only whitespace.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }

    pub fn contains(&self, target: &str) -> bool {
        self.0.contains(target)
    }

    pub fn contains_any(&self, targets: &[&str]) -> bool {
        targets.iter().any(|t| self.0.contains(t))
    }

    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.0.starts_with(prefix)
    }

    pub fn has_suffix(&self, suffix: &str) -> bool {
        self.0.ends_with(suffix)
    }

    pub fn has_any_prefix(&self, prefixes: &[&str]) -> bool {
        prefixes.iter().any(|p| self.0.starts_with(p))
    }

    pub fn has_any_suffix(&self, suffixes: &[&str]) -> bool {
        suffixes.iter().any(|s| self.0.ends_with(s))
    }

    /// Replace every occurrence of `from`.
    pub fn replace(&self, from: &str, to: &str) -> Self {
        Self(self.0.replace(from, to))
    }

    /// Replace the first `n` occurrences of `from`.
    pub fn replacen(&self, from: &str, to: &str, n: usize) -> Self {
        Self(self.0.replacen(from, to, n))
    }

    /// The leading whitespace.
    pub fn space_left(&self) -> String {
        self.0.chars().take_while(|c| c.is_whitespace()).collect()
    }

    pub fn split(&self, delim: &str) -> StrSlice {
        self.0.split(delim).map(str::to_owned).collect()
    }

    /// Split at the first `delim`, which stays on the end of the first part.
    ///
    /// ```
    /// use nub::Str;
    ///
    /// let (first, rest) = Str::from("a/b/c").split_on("/");
    /// assert_eq!((first.as_str(), rest.as_str()), ("a/", "b/c"));
    /// ```
    pub fn split_on(&self, delim: &str) -> (String, String) {
        match self.0.find(delim) {
            Some(i) => {
                let (first, second) = self.0.split_at(i + delim.len());
                (first.to_owned(), second.to_owned())
            }
            None => (self.0.clone(), String::new()),
        }
    }

    pub fn trim_prefix(&self, prefix: &str) -> Self {
        Self(self.0.strip_prefix(prefix).unwrap_or(&self.0).to_owned())
    }

    pub fn trim_suffix(&self, suffix: &str) -> Self {
        Self(self.0.strip_suffix(suffix).unwrap_or(&self.0).to_owned())
    }

    pub fn trim_space(&self) -> Self {
        Self(self.0.trim().to_owned())
    }

    pub fn trim_space_left(&self) -> Self {
        Self(self.0.trim_start().to_owned())
    }

    pub fn trim_space_right(&self) -> Self {
        Self(self.0.trim_end().to_owned())
    }

    /// See [`crate::yaml::yaml_type`].
    pub fn yaml_type(&self) -> Value {
        crate::yaml::yaml_type(&self.0)
    }
}

impl From<&str> for Str {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<String> for Str {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&[u8]> for Str {
    fn from(bytes: &[u8]) -> Self {
        Self(String::from_utf8_lossy(bytes).into_owned())
    }
}

impl From<Str> for String {
    fn from(s: Str) -> Self {
        s.0
    }
}

impl From<Str> for Value {
    fn from(s: Str) -> Self {
        Value::Str(s.0)
    }
}

impl AsRef<str> for Str {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<&str> for Str {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for Str {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

//! Errors for misuse of the containers.
//!
//! Only the programmer-error class lives here. Absence (a missing key, an
//! empty container, a predicate that matched nothing) is never an error; it
//! shows up as `None`, an empty container or a nil [`crate::Queryable`].
//!
//! ```
//! use nub::{Error, Kind, RefSlice};
//!
//! let mut s = RefSlice::new();
//! s.try_append("one")?;
//! assert_eq!(
//!     s.try_append(2),
//!     Err(Error::TypeMismatch { attempted: Kind::Int, established: Kind::Str }),
//! );
//! # Ok::<(), nub::Error>(())
//! ```

use crate::value::Kind;

/// Ways a container operation can be misused.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum Error {
    /// The index doesn't address an element of the container.
    #[error("slice assignment is out of bounds: index {index} for length {len}")]
    OutOfBounds { index: isize, len: usize },

    /// A value of one kind was inserted into a container of another.
    #[error("type mismatch: can't insert '{attempted}' into a container of '{established}'")]
    TypeMismatch { attempted: Kind, established: Kind },

    /// YAML input couldn't be decoded into a [`crate::Value`].
    #[error("failed to decode yaml: {0}")]
    Yaml(String),
}

impl From<serde_yml::Error> for Error {
    fn from(e: serde_yml::Error) -> Self {
        Self::Yaml(e.to_string())
    }
}

impl From<Error> for std::io::Error {
    fn from(e: Error) -> Self {
        Self::other(e)
    }
}

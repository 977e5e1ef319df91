//! Convenience collections.
//!
//! Chainable wrappers around sequences, maps and strings, with dotted-path
//! lookups into nested YAML-shaped data.
//!
//! ```
//! use nub::{slice, yaml, IntSlice, Queryable};
//!
//! let mut ids: IntSlice = slice![3, 1, 2, 3];
//! ids.uniq_mut().sort_mut();
//! assert_eq!(ids.join(","), "1,2,3");
//!
//! let doc = Queryable::new(yaml::load("users: [{id: 1, name: ann}, {id: 2, name: bo}]")?);
//! assert_eq!(doc.yaml("users.[id:2].name").a(), "bo");
//! # Ok::<(), nub::Error>(())
//! ```

pub mod error;
pub mod export;
pub mod index;
pub mod query;
pub mod refslice;
pub mod slice;
pub mod str;
pub mod strmap;
pub mod value;
pub mod yaml;

pub use error::Error;
pub use query::{KeyVal, Queryable};
pub use refslice::RefSlice;
pub use slice::{IntSlice, Slice, StrSlice};
pub use str::Str;
pub use strmap::StrMap;
pub use value::{Kind, Map, Value};

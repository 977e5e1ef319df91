//! Index normalization shared by every container.
//!
//! Containers accept negative indices, counting back from the end, and
//! inclusive ranges, so `(0, -1)` means "everything". These functions turn
//! that notation into plain, in-bounds positions.
//!
//! ```
//! use nub::index::{abs_index, abs_indices};
//!
//! assert_eq!(abs_index(3, -1), Some(2));
//! assert_eq!(abs_index(3, 3), None);
//! assert_eq!(abs_indices(5, &[1, -2]), Some(1..4));
//! assert_eq!(abs_indices(5, &[3, 1]), None);
//! ```

use std::ops::Range;

/// Convert a possibly negative index into a position within `len`.
///
/// Anything outside `[-len, len-1]` is `None` rather than being clamped.
pub fn abs_index(len: usize, i: isize) -> Option<usize> {
    let len = len as isize;
    let i = if i < 0 { len + i } else { i };
    match i >= 0 && i < len {
        true => Some(i as usize),
        false => None,
    }
}

/// Convert zero, one or two indices into a half-open range over `len`.
///
///  - No indices selects everything.
///  - One index selects that single element, or `None` if it's out of bounds.
///  - Two indices `i, j` are an inclusive pair. Negatives count from the end,
///    the pair is clamped into bounds, and `None` means there's nothing
///    between them (`i` after `j`, or `i` past the end).
pub fn abs_indices(len: usize, indices: &[isize]) -> Option<Range<usize>> {
    match indices {
        [] => Some(0..len),
        [i] => abs_index(len, *i).map(|i| i..i + 1),
        [i, j] if len > 0 => {
            let n = len as isize;
            let i = if *i < 0 { n + i } else { *i };
            let j = if *j < 0 { n + j } else { *j };
            if i > j {
                return None;
            }

            let (i, j) = (i.max(0), j.min(n - 1));
            match i <= j {
                true => Some(i as usize..j as usize + 1),
                false => None,
            }
        }
        _ => None,
    }
}

/// Count of elements `n` refers to, ignoring its sign.
///
/// `first_n(-2)` and `first_n(2)` mean the same thing.
pub(crate) fn abs_count(n: isize) -> usize {
    n.unsigned_abs()
}

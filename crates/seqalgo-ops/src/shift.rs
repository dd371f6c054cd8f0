//! In-place swap and shift-by-one.

use seqalgo_core::{Error, Index, Result};

use crate::validate;

/// Exchange the elements at positions `i` and `j`.
///
/// Fails with [`Error::IndexOutOfBounds`] if either position lies outside the
/// slice. `i == j` is a no-op.
pub fn swap<T>(seq: &mut [T], i: Index, j: Index) -> Result<()> {
    let len = seq.len();
    let (a, b) = match (validate::index("swap", len, i), validate::index("swap", len, j)) {
        (Ok(a), Ok(b)) => (a, b),
        _ => return Err(Error::IndexOutOfBounds { lo: i, hi: j, len }),
    };
    seq.swap(a, b);
    Ok(())
}

/// Copy every element of `(i, j]` one slot to the left.
///
/// Afterwards `seq[p] == old seq[p + 1]` for `p` in `[i, j)`; the value at `j`
/// is left in place, so it ends up duplicated at `j - 1` and `j`.
pub fn shift_left<T: Clone>(seq: &mut [T], i: Index, j: Index) -> Result<()> {
    validate::endpoints("shift_left", seq.len(), i, j)?;
    let (i, j) = (i as usize, j as usize);
    for p in i..j {
        let next = seq[p + 1].clone();
        seq[p] = next;
    }
    Ok(())
}

/// Copy every element of `[i, j)` one slot to the right, walking down from `j`.
///
/// The value at `i` is left in place and ends up duplicated at `i + 1`.
pub fn shift_right<T: Clone>(seq: &mut [T], i: Index, j: Index) -> Result<()> {
    validate::endpoints("shift_right", seq.len(), i, j)?;
    let (i, j) = (i as usize, j as usize);
    for p in (i + 1..=j).rev() {
        let prev = seq[p - 1].clone();
        seq[p] = prev;
    }
    Ok(())
}

//! This module drives the bit-run scanner over a validity bitmap and turns
//! runs back into per-position visits.
//!
//! Two call conventions are exposed and behave identically modulo
//! propagation:
//! - the fallible form short-circuits the whole traversal on the first `Err`
//!   from the callback and returns that error unchanged;
//! - the infallible form visits every position unconditionally.
//!
//! The callback receives `Some(position)` for a valid position and `None` for
//! a null one. Positions are visited in strictly ascending order, exactly
//! once each. Inside an all-set or all-clear run no bit is re-tested; only a
//! mixed run falls back to the shared bit primitive.

use crate::array::bit_util;
use crate::error::KolomError;
use crate::scan::bit_run::BitRunScanner;

/// Visits positions `0..len`, classifying validity through the bit-run
/// scanner, short-circuiting on the first callback error.
///
/// `bitmap` is the validity bitmap with `offset` applied at the bit level;
/// absence means every position is valid.
pub fn visit_bit_runs<F>(
    bitmap: Option<&[u8]>,
    offset: usize,
    len: usize,
    mut visit: F,
) -> Result<(), KolomError>
where
    F: FnMut(Option<usize>) -> Result<(), KolomError>,
{
    let bytes = match bitmap {
        // Implicit all-set bitmap: no bit logic at all.
        None => {
            for position in 0..len {
                visit(Some(position))?;
            }
            return Ok(());
        }
        Some(bytes) => bytes,
    };

    let mut scanner = BitRunScanner::new(Some(bytes), offset, len);
    let mut position = 0;
    while position < len {
        let run = scanner.next_run();
        if run.all_set() {
            for _ in 0..run.len {
                visit(Some(position))?;
                position += 1;
            }
        } else if run.none_set() {
            for _ in 0..run.len {
                visit(None)?;
                position += 1;
            }
        } else {
            for _ in 0..run.len {
                if bit_util::get_bit(bytes, offset + position) {
                    visit(Some(position))?;
                } else {
                    visit(None)?;
                }
                position += 1;
            }
        }
    }
    Ok(())
}

/// Infallible twin of [`visit_bit_runs`]: same classification, same ordering,
/// but the callback cannot stop the traversal.
pub fn visit_bit_runs_infallible<F>(bitmap: Option<&[u8]>, offset: usize, len: usize, mut visit: F)
where
    F: FnMut(Option<usize>),
{
    let bytes = match bitmap {
        None => {
            for position in 0..len {
                visit(Some(position));
            }
            return;
        }
        Some(bytes) => bytes,
    };

    let mut scanner = BitRunScanner::new(Some(bytes), offset, len);
    let mut position = 0;
    while position < len {
        let run = scanner.next_run();
        if run.all_set() {
            for _ in 0..run.len {
                visit(Some(position));
                position += 1;
            }
        } else if run.none_set() {
            for _ in 0..run.len {
                visit(None);
                position += 1;
            }
        } else {
            for _ in 0..run.len {
                visit(if bit_util::get_bit(bytes, offset + position) {
                    Some(position)
                } else {
                    None
                });
                position += 1;
            }
        }
    }
}

//==================================================================================
// Bitmap-only iteration
//==================================================================================

/// Visits only the validity flag for positions `0..len`, without touching any
/// value buffer. Short-circuits on the first callback error.
///
/// `null_count` is accepted purely as a hint from callers that track one; the
/// scan never trusts it, because a stale count must not change what gets
/// visited.
pub fn try_for_each_validity<F>(
    bitmap: Option<&[u8]>,
    offset: usize,
    len: usize,
    null_count: usize,
    mut f: F,
) -> Result<(), KolomError>
where
    F: FnMut(bool) -> Result<(), KolomError>,
{
    let _ = null_count;
    visit_bit_runs(bitmap, offset, len, |slot| f(slot.is_some()))
}

/// Infallible twin of [`try_for_each_validity`]: visits every position.
pub fn for_each_validity<F>(bitmap: Option<&[u8]>, offset: usize, len: usize, null_count: usize, mut f: F)
where
    F: FnMut(bool),
{
    let _ = null_count;
    visit_bit_runs_infallible(bitmap, offset, len, |slot| f(slot.is_some()))
}

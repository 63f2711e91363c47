//! The numeric kernels, over flat row-major `f64` buffers.
//!
//! Nothing in here knows about host values: every function takes plain
//! slices plus explicit dimensions, which is what lets [`crate::offload`]
//! run them on a worker thread.
//!
//! None of the kernels validate that the dimensions agree with each other.
//! Contraction and add lengths are the *average* of the two sizes involved,
//! and transpose strides by `rows` on both axes. What they do check is that
//! the highest index the loops will touch exists; if not they return
//! [`MtrxError::OutOfBounds`] before reading or writing anything.

pub mod add;
pub mod multiply;
pub mod scalar;
pub mod transpose;

use crate::error::{MtrxError, Op, Operand, Result};

/// `(a + b) / 2`, rounded down, without overflowing.
pub fn average_len(a: usize, b: usize) -> usize {
    a / 2 + b / 2 + (a % 2 + b % 2) / 2
}

/// Turns a checked dimension product into a result.
pub(crate) fn dim(op: Op, value: Option<usize>) -> Result<usize> {
    value.ok_or(MtrxError::DimensionOverflow { op })
}

/// Fails unless `buf[index]` exists.
pub(crate) fn check_index(op: Op, operand: Operand, buf: &[f64], index: usize) -> Result<()> {
    if index < buf.len() {
        Ok(())
    } else {
        Err(MtrxError::OutOfBounds {
            op,
            operand,
            index,
            len: buf.len(),
        })
    }
}

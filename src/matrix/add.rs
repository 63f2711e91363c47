use super::{average_len, check_index};
use crate::error::{Op, Operand, Result};

/// Length of the result of [`add_in_place`]: `(len1 + len2) / 2`.
pub fn added_length(len1: usize, len2: usize) -> usize {
    average_len(len1, len2)
}

/// Adds `m2` into the first `L = (m1.len() + m2.len()) / 2` slots of `m1`
/// and returns those `L` slots.
///
/// Elements past `L` in either buffer are ignored. With unequal lengths the
/// averaged `L` is longer than the shorter buffer, so this only succeeds when
/// the lengths differ by at most one.
///
/// ```
/// use mtrx::matrix::add::add_in_place;
///
/// let mut m1 = vec![1.0, 2.0, 3.0];
/// let sum = add_in_place(&mut m1, &[4.0, 5.0]).unwrap();
/// assert_eq!(sum, &[5.0, 7.0]);
/// assert_eq!(m1, vec![5.0, 7.0, 3.0]);
/// ```
pub fn add_in_place<'a>(m1: &'a mut [f64], m2: &[f64]) -> Result<&'a mut [f64]> {
    let op = Op::Add;
    let len = added_length(m1.len(), m2.len());

    if len > 0 {
        check_index(op, Operand::M1, m1, len - 1)?;
        check_index(op, Operand::M2, m2, len - 1)?;
    }

    let head = &mut m1[..len];
    for (x, y) in head.iter_mut().zip(m2) {
        *x += y;
    }
    Ok(head)
}

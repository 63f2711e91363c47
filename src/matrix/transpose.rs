use super::{check_index, dim};
use crate::error::{Op, Operand, Result};

/// Transpose in place by swapping `m[i*rows + j]` with `m[j*rows + i]` for
/// every `i < rows`, `i < j < cols`.
///
/// `rows` is the stride on *both* axes. For a square matrix that is the
/// ordinary transpose. For anything else it is a fixed permutation of the
/// elements that is not a transpose, and the buffer keeps its length.
///
/// # Example
///
/// ```
/// use mtrx::matrix::transpose::transpose_in_place;
///
/// let mut m = vec![1.0, 2.0,   // 2×2
///                  3.0, 4.0];
///
/// transpose_in_place(&mut m, 2, 2).unwrap();
///
/// assert_eq!(m, vec![1.0, 3.0,
///                    2.0, 4.0]);
/// ```
pub fn transpose_in_place(m: &mut [f64], rows: usize, cols: usize) -> Result<&mut [f64]> {
    let op = Op::Transpose;

    // Swaps only happen for i < min(rows, cols - 1).
    let swap_rows = rows.min(cols.saturating_sub(1));
    if swap_rows == 0 {
        return Ok(m);
    }

    let (i_last, j_last) = (swap_rows - 1, cols - 1);
    let upper = i_last.checked_mul(rows).and_then(|v| v.checked_add(j_last));
    let lower = j_last.checked_mul(rows).and_then(|v| v.checked_add(i_last));
    let last = dim(op, upper)?.max(dim(op, lower)?);
    check_index(op, Operand::M, m, last)?;

    for i in 0..rows {
        for j in (i + 1)..cols {
            m.swap(i * rows + j, j * rows + i);
        }
    }

    Ok(m)
}

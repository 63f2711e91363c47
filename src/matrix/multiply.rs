use super::{average_len, check_index, dim};
use crate::error::{Op, Operand, Result};

/// Number of terms summed for each output element: `(m1cols + m2rows) / 2`.
///
/// When `m1cols == m2rows` this is the usual inner dimension. When they
/// differ nothing complains; the kernel just sums that many terms.
pub fn contraction_length(m1cols: usize, m2rows: usize) -> usize {
    average_len(m1cols, m2rows)
}

/// Matrix product into a fresh, zero-initialised `m1rows × m2cols` buffer.
///
/// ```text
/// product[i*m2cols + j] = Σ_{k < L} m1[i*m1cols + k] * m2[j + k*m2cols]
/// ```
///
/// with `L = contraction_length(m1cols, m2rows)`. `m2` is walked down column
/// `j` with stride `m2cols`, so for consistent dimensions this is the ordinary
/// row-major product. If `L > m1cols` a row read runs on into the next row of
/// `m1`; that is allowed as long as it stays inside the buffer.
///
/// # Errors
///
/// [`MtrxError::OutOfBounds`](crate::MtrxError::OutOfBounds) if the last
/// element of either operand that would be read does not exist, and
/// [`MtrxError::DimensionOverflow`](crate::MtrxError::DimensionOverflow) if
/// an index does not fit in `usize`.
///
/// # Example
///
/// ```
/// use mtrx::matrix::multiply::matrix_mul;
///
/// let m1 = [1.0, 2.0, 3.0, 4.0];
/// let m2 = [5.0, 6.0, 7.0, 8.0];
///
/// let product = matrix_mul(&m1, &m2, 2, 2, 2, 2).unwrap();
/// assert_eq!(product, vec![19.0, 22.0, 43.0, 50.0]);
/// ```
pub fn matrix_mul(
    m1: &[f64],
    m2: &[f64],
    m1rows: usize,
    m1cols: usize,
    m2rows: usize,
    m2cols: usize,
) -> Result<Vec<f64>> {
    let op = Op::MatrixMultiply;
    let len = contraction_length(m1cols, m2rows);
    let out_len = dim(op, m1rows.checked_mul(m2cols))?;

    if out_len == 0 || len == 0 {
        return Ok(vec![0.0; out_len]);
    }

    // Last row of m1, last term.
    let m1_last = (m1rows - 1)
        .checked_mul(m1cols)
        .and_then(|row| row.checked_add(len - 1));
    check_index(op, Operand::M1, m1, dim(op, m1_last)?)?;

    // Last column of m2, last term: (m2cols - 1) + (len - 1) * m2cols.
    let m2_last = len.checked_mul(m2cols).map(|n| n - 1);
    check_index(op, Operand::M2, m2, dim(op, m2_last)?)?;

    let mut product = vec![0.0; out_len];
    for i in 0..m1rows {
        for j in 0..m2cols {
            let mut acc = 0.0;
            for k in 0..len {
                acc += m1[i * m1cols + k] * m2[j + k * m2cols];
            }
            product[i * m2cols + j] = acc;
        }
    }

    Ok(product)
}

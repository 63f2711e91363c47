//! Flat-buffer matrix kernels for a scripting host.
//!
//! The host keeps its matrices as flat lists of numbers plus row and column
//! counts, and calls down here for the four operations it needs to be fast:
//! multiply, scale, add and transpose. Every call converts its inputs into
//! `f64` buffers, runs the numeric loop (on a worker thread when the call is
//! big enough), and hands back a new `Vec<f64>`.
//!
//! ## Usage
//!
//! ```
//! use mtrx::{add, matrix_multiply, scalar_multiply, transpose};
//!
//! let product = matrix_multiply(2, 2, 2, 2, &[1.0, 2.0, 3.0, 4.0], &[5.0, 6.0, 7.0, 8.0]).unwrap();
//! assert_eq!(product, vec![19.0, 22.0, 43.0, 50.0]);
//!
//! assert_eq!(scalar_multiply(&[1, 2, 3], 0.5).unwrap(), vec![0.5, 1.0, 1.5]);
//! assert_eq!(add(&[1.0, 2.0, 3.0], &[4.0, 5.0]).unwrap(), vec![5.0, 7.0]);
//! assert_eq!(transpose(2, 2, &[1.0, 2.0, 3.0, 4.0]).unwrap(), vec![1.0, 3.0, 2.0, 4.0]);
//! ```
//!
//! Host values that may not be numbers go through [`Value`]:
//!
//! ```
//! use mtrx::{scalar_multiply, MtrxError, Value};
//!
//! let m = vec![Value::Int(1), Value::from("two")];
//! let err = scalar_multiply(&m, 2.0).unwrap_err();
//! assert!(matches!(err, MtrxError::Conversion { index: 1, .. }));
//! ```
//!
//! ## Things that will surprise you
//!
//! These are kept exactly as existing callers rely on them:
//!
//! - `matrix_multiply` sums `(m1cols + m2rows) / 2` terms, not `m1cols`.
//! - `add` returns `(len(m1) + len(m2)) / 2` elements; anything past that is
//!   dropped.
//! - `transpose` uses `rows` as the stride on both axes, so it only transposes
//!   square matrices.
//! - Dimensions are never checked against each other. If they make a kernel
//!   index past the end of a buffer you get [`MtrxError::OutOfBounds`].

pub mod config;
pub mod error;
pub mod kernel;
pub mod marshal;
pub mod matrix;
pub mod offload;

pub use config::Config;
pub use error::{ConversionError, MtrxError, Op, Operand, Result};
pub use kernel::Kernel;
pub use marshal::{Numeric, Value};

/// `m1rows × m2cols` product of two flat matrices.
///
/// Runs on [`Kernel::default`]; see [`Kernel::matrix_multiply`].
pub fn matrix_multiply<T: Numeric>(
    m1rows: usize,
    m1cols: usize,
    m2rows: usize,
    m2cols: usize,
    m1: &[T],
    m2: &[T],
) -> Result<Vec<f64>> {
    Kernel::default().matrix_multiply(m1rows, m1cols, m2rows, m2cols, m1, m2)
}

/// Every element of `m` times `a`.
pub fn scalar_multiply<T: Numeric>(m: &[T], a: f64) -> Result<Vec<f64>> {
    Kernel::default().scalar_multiply(m, a)
}

/// Elementwise sum, `(len(m1) + len(m2)) / 2` elements long.
pub fn add<T: Numeric>(m1: &[T], m2: &[T]) -> Result<Vec<f64>> {
    Kernel::default().add(m1, m2)
}

/// Transpose of an `r × c` flat matrix. Only a true transpose when `r == c`.
pub fn transpose<T: Numeric>(r: usize, c: usize, m: &[T]) -> Result<Vec<f64>> {
    Kernel::default().transpose(r, c, m)
}

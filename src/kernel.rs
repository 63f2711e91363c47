//! The host-facing calls: convert, compute, hand back a fresh buffer.

use crate::config::Config;
use crate::error::{Op, Operand, Result};
use crate::marshal::{Numeric, to_buffer};
use crate::matrix::{add, multiply, scalar, transpose};
use crate::offload;

/// Runs the four operations under a [`Config`].
///
/// Each call converts its inputs with [`to_buffer`] first (so a non-numeric
/// element fails before any arithmetic), then runs the kernel inside an
/// [`offload`] window, then returns the result buffer. The caller's slices
/// are never modified.
#[derive(Clone, Copy, Debug, Default)]
pub struct Kernel {
    config: Config,
}

impl Kernel {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// A kernel configured from `MTRX_*` environment variables.
    pub fn from_env() -> Self {
        Self::new(Config::from_env())
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// `m1rows × m2cols` product with contraction length
    /// `(m1cols + m2rows) / 2`. See [`multiply::matrix_mul`].
    pub fn matrix_multiply<T: Numeric>(
        &self,
        m1rows: usize,
        m1cols: usize,
        m2rows: usize,
        m2cols: usize,
        m1: &[T],
        m2: &[T],
    ) -> Result<Vec<f64>> {
        let op = Op::MatrixMultiply;
        log::debug!(
            "{}: {}x{} * {}x{} (len {} / {})",
            op,
            m1rows,
            m1cols,
            m2rows,
            m2cols,
            m1.len(),
            m2.len()
        );

        let m1 = to_buffer(op, Operand::M1, m1)?;
        let m2 = to_buffer(op, Operand::M2, m2)?;

        let len = multiply::contraction_length(m1cols, m2rows);
        if len != m1cols || len != m2rows {
            log::debug!(
                "{}: inner dimensions {} and {} disagree, summing {} terms",
                op,
                m1cols,
                m2rows,
                len
            );
        }

        let work = m1rows.saturating_mul(m2cols).saturating_mul(len);
        offload::run(&self.config, op, work, || {
            multiply::matrix_mul(&m1, &m2, m1rows, m1cols, m2rows, m2cols)
        })
    }

    /// Every element of `m` times `a`.
    pub fn scalar_multiply<T: Numeric>(&self, m: &[T], a: f64) -> Result<Vec<f64>> {
        let op = Op::ScalarMultiply;
        log::debug!("{}: len {} by {}", op, m.len(), a);

        let mut m = to_buffer(op, Operand::M, m)?;
        let work = m.len();
        offload::run(&self.config, op, work, || {
            scalar::scalar_mul(&mut m, a);
            Ok(())
        })?;
        Ok(m)
    }

    /// Elementwise sum over the first `(len(m1) + len(m2)) / 2` elements.
    /// See [`add::add_in_place`].
    pub fn add<T: Numeric>(&self, m1: &[T], m2: &[T]) -> Result<Vec<f64>> {
        let op = Op::Add;
        log::debug!("{}: len {} + {}", op, m1.len(), m2.len());
        if m1.len() != m2.len() {
            log::debug!(
                "{}: lengths differ, keeping {}",
                op,
                add::added_length(m1.len(), m2.len())
            );
        }

        let mut m1 = to_buffer(op, Operand::M1, m1)?;
        let m2 = to_buffer(op, Operand::M2, m2)?;

        let work = add::added_length(m1.len(), m2.len());
        let len = offload::run(&self.config, op, work, || {
            add::add_in_place(&mut m1, &m2).map(|sum| sum.len())
        })?;
        m1.truncate(len);
        Ok(m1)
    }

    /// Row-stride transpose of `m`. See [`transpose::transpose_in_place`].
    pub fn transpose<T: Numeric>(&self, rows: usize, cols: usize, m: &[T]) -> Result<Vec<f64>> {
        let op = Op::Transpose;
        log::debug!("{}: {}x{} (len {})", op, rows, cols, m.len());
        if rows != cols {
            log::debug!("{}: non-square input, result is not a transpose", op);
        }

        let mut m = to_buffer(op, Operand::M, m)?;
        let work = rows.saturating_mul(cols);
        offload::run(&self.config, op, work, || {
            transpose::transpose_in_place(&mut m, rows, cols).map(|_| ())
        })?;
        Ok(m)
    }
}

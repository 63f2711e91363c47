//! Error types shared by every entry point.

use std::fmt;
use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, MtrxError>;

/// The four operations, used to tag errors and log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    MatrixMultiply,
    ScalarMultiply,
    Add,
    Transpose,
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Op::MatrixMultiply => "matrix_multiply",
            Op::ScalarMultiply => "scalar_multiply",
            Op::Add => "add",
            Op::Transpose => "transpose",
        })
    }
}

/// Which input buffer an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    /// The single operand of `scalar_multiply` / `transpose`.
    M,
    M1,
    M2,
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Operand::M => "m",
            Operand::M1 => "m1",
            Operand::M2 => "m2",
        })
    }
}

/// An element that could not be read as a float.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("must be real number, not {found}")]
pub struct ConversionError {
    /// Type name of the offending element, e.g. `"str"`.
    pub found: String,
}

impl ConversionError {
    pub fn new(found: impl Into<String>) -> Self {
        Self {
            found: found.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum MtrxError {
    /// An input element is not numeric. Raised before any computation starts.
    #[error("{op}: {operand}[{index}] {source}")]
    Conversion {
        op: Op,
        operand: Operand,
        index: usize,
        #[source]
        source: ConversionError,
    },

    /// The supplied dimensions make the kernel address past the end of a buffer.
    ///
    /// `index` is the highest index the operation would have touched.
    #[error("{op}: index {index} out of bounds for {operand} of length {len}")]
    OutOfBounds {
        op: Op,
        operand: Operand,
        index: usize,
        len: usize,
    },

    #[error("{op}: dimensions overflow the address space")]
    DimensionOverflow { op: Op },

    #[error("{op}: failed to spawn compute worker")]
    Spawn {
        op: Op,
        #[source]
        source: std::io::Error,
    },

    #[error("{op}: compute worker panicked")]
    WorkerPanicked { op: Op },
}

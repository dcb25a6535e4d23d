//! Error types for the validating concatenation entry point.

use std::error::Error;
use std::fmt;

/// Identifies which argument of a two-operand call was invalid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operand {
    /// The first (left) sequence.
    First,
    /// The second (right) sequence.
    Second,
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::First => write!(f, "first"),
            Self::Second => write!(f, "second"),
        }
    }
}

/// Errors that can occur when concatenating raw byte slices.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConcatError {
    /// A raw input slice contained a NUL byte. The result would be
    /// truncated at that byte under terminator-scanning, so the input
    /// is rejected before any allocation.
    InteriorNul {
        /// Which operand was invalid.
        operand: Operand,
        /// Byte offset of the first NUL in that operand.
        position: usize,
    },
}

impl fmt::Display for ConcatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InteriorNul { operand, position } => {
                write!(
                    f,
                    "{operand} operand contains an interior NUL at byte {position}"
                )
            }
        }
    }
}

impl Error for ConcatError {}

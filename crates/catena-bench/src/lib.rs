//! Benchmark fixtures for the catena concatenation library.
//!
//! Provides deterministic operand constructors shared by the bench
//! targets, so every run measures identical inputs.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::ffi::CString;

/// Build a terminated sequence of `len` bytes cycling through `a..=z`.
pub fn operand(len: usize) -> CString {
    let bytes: Vec<u8> = (0..len).map(|i| b'a' + (i % 26) as u8).collect();
    CString::new(bytes).expect("cycled letters contain no NUL")
}

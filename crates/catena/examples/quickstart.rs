//! Catena Quickstart — splice two terminated sequences into one owned buffer.
//!
//! Demonstrates:
//!   1. The typed entry point over C-string literals
//!   2. The validating entry point rejecting an interior NUL
//!
//! Run with:
//!   cargo run --example quickstart

use catena::{concat, concat_bytes};

fn main() {
    // 1. The canonical call: two fixed literals, one owned result.
    //    The buffer is sized to len(a) + len(b) + 1 in a single
    //    allocation and released automatically when it drops.
    let result = concat(c"test", c"test");
    println!("Test result: {}", result.to_string_lossy());

    // 2. Raw byte slices are validated first: a NUL inside an operand
    //    would truncate the result under terminator-scanning.
    match concat_bytes(b"foo", b"ba\0r") {
        Ok(out) => println!("Unexpected success: {out:?}"),
        Err(err) => println!("Rejected as expected: {err}"),
    }
}

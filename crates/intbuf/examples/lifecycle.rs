// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

// Walks a buffer through create -> release -> release.
// Usage: cargo run --example lifecycle -p intbuf

use intbuf::{BufferError, BufferHandle};

fn main() -> Result<(), BufferError> {
    let mut handle = BufferHandle::create(10_000)?;
    println!("created: {:?}", handle);

    handle.release()?;
    println!("released: {:?}", handle);

    match handle.release() {
        Err(e @ BufferError::DoubleRelease) => println!("second release rejected: {}", e),
        other => println!("unexpected second release result: {:?}", other),
    }

    Ok(())
}

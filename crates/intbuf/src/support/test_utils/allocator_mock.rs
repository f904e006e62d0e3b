// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Mock allocator for testing.

use core::alloc::Layout;
use core::cell::Cell;
use core::ptr::NonNull;

use crate::system::SystemAllocator;
use crate::traits::RawAllocator;

/// Mock failure behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllocatorMockBehaviour {
    /// No failure.
    None,
    /// Fail allocate at call index (0-indexed).
    FailAllocateAt(usize),
}

/// Mock allocator backed by [`SystemAllocator`] that counts calls.
///
/// Lend it to a buffer by reference (`&AllocatorMock` is a `RawAllocator`)
/// to inspect the counters after the buffer is gone.
#[derive(Debug)]
pub struct AllocatorMock {
    backend: SystemAllocator,
    behaviour: AllocatorMockBehaviour,
    allocate_count: Cell<usize>,
    deallocate_count: Cell<usize>,
    live_allocations: Cell<usize>,
    last_deallocated: Cell<Option<Layout>>,
}

impl AllocatorMock {
    /// Creates a mock with the given behaviour.
    pub fn new(behaviour: AllocatorMockBehaviour) -> Self {
        Self {
            backend: SystemAllocator,
            behaviour,
            allocate_count: Cell::new(0),
            deallocate_count: Cell::new(0),
            live_allocations: Cell::new(0),
            last_deallocated: Cell::new(None),
        }
    }

    /// Number of `allocate` calls, failed ones included.
    #[inline]
    pub fn allocate_count(&self) -> usize {
        self.allocate_count.get()
    }

    /// Number of `deallocate` calls.
    #[inline]
    pub fn deallocate_count(&self) -> usize {
        self.deallocate_count.get()
    }

    /// Allocations handed out and not yet returned.
    #[inline]
    pub fn live_allocations(&self) -> usize {
        self.live_allocations.get()
    }

    /// Layout of the most recent `deallocate` call.
    #[inline]
    pub fn last_deallocated(&self) -> Option<Layout> {
        self.last_deallocated.get()
    }
}

unsafe impl RawAllocator for AllocatorMock {
    fn allocate(&self, layout: Layout) -> Option<NonNull<u8>> {
        let current = self.allocate_count.get();
        self.allocate_count.set(current + 1);

        if let AllocatorMockBehaviour::FailAllocateAt(idx) = self.behaviour {
            if current == idx {
                return None;
            }
        }

        let ptr = self.backend.allocate(layout)?;
        self.live_allocations.set(self.live_allocations.get() + 1);

        Some(ptr)
    }

    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        self.deallocate_count.set(self.deallocate_count.get() + 1);
        self.live_allocations
            .set(self.live_allocations.get().saturating_sub(1));
        self.last_deallocated.set(Some(layout));

        // SAFETY (PRECONDITIONS ARE MET): ptr came from backend.allocate() with layout
        unsafe { self.backend.deallocate(ptr, layout) }
    }
}

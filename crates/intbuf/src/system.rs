// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! SystemAllocator - forwards to the global allocator.

use core::alloc::Layout;
use core::ptr::NonNull;

use crate::traits::RawAllocator;

/// The process-wide global allocator.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub struct SystemAllocator;

unsafe impl RawAllocator for SystemAllocator {
    #[inline]
    fn allocate(&self, layout: Layout) -> Option<NonNull<u8>> {
        debug_assert!(layout.size() != 0);

        // SAFETY (PRECONDITIONS ARE MET): layout has non-zero size
        NonNull::new(unsafe { alloc::alloc::alloc(layout) })
    }

    #[inline]
    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        // SAFETY (PRECONDITIONS ARE MET): ptr was returned by alloc() with this layout
        unsafe { alloc::alloc::dealloc(ptr.as_ptr(), layout) }
    }
}

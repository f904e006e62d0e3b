// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::alloc::Layout;

use proptest::prelude::*;

use crate::error::BufferError;
use crate::handle::BufferHandle;
use crate::int_buffer::IntBuffer;
use crate::support::test_utils::{AllocatorMock, AllocatorMockBehaviour};

proptest! {
    #[test]
    fn create_then_release_deallocates_exactly_once(
        len in 1..=65_536usize
    ) {
        let mock = AllocatorMock::new(AllocatorMockBehaviour::None);
        let buffer = IntBuffer::create_in(len, &mock).expect("Failed to create_in(..)");

        prop_assert_eq!(buffer.len(), len);

        buffer.release();

        prop_assert_eq!(mock.allocate_count(), 1);
        prop_assert_eq!(mock.deallocate_count(), 1);
        prop_assert_eq!(
            mock.last_deallocated(),
            Some(Layout::array::<i32>(len).expect("Failed to Layout::array(..)"))
        );
    }

    #[test]
    fn handle_second_release_is_rejected(
        len in 0..=65_536usize,
        extra_releases in 1..=4usize
    ) {
        let mock = AllocatorMock::new(AllocatorMockBehaviour::None);
        let mut handle = BufferHandle::create_in(len, &mock).expect("Failed to create_in(..)");

        prop_assert_eq!(handle.live_len(), Some(len));
        prop_assert!(handle.release().is_ok());

        for _ in 0..extra_releases {
            prop_assert_eq!(handle.release(), Err(BufferError::DoubleRelease));
        }

        let expected_deallocations = usize::from(len != 0);
        prop_assert_eq!(mock.deallocate_count(), expected_deallocations);
        prop_assert_eq!(mock.live_allocations(), 0);
    }
}

use core::ptr::NonNull;

use crate::NonZeroLayout;

/// A block of memory handed out by a [`RawAlloc`].
///
/// [`RawAlloc`]: trait.RawAlloc.html
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Allocation {
    /// Pointer to the start of the uninitialized block.
    pub ptr: NonNull<u8>,
    /// The layout the block was requested with.
    pub layout: NonZeroLayout,
}

/// An allocator that can be used by a container through a handle.
///
/// The trait is implemented on the handle a container stores, which should be cheap to clone.
/// Shared references to an allocator are handles themselves, so a single local allocator can back
/// several containers at once.
///
/// ## Safety
///
/// Implementors must ensure that a block returned from `alloc` is valid for reads and writes of
/// `layout.size()` bytes, is aligned to `layout.align()`, and is not handed out again until it
/// has been passed to `dealloc`. Clones of a handle must be able to deallocate each other's
/// blocks.
///
/// One must be able to move the handle and keep all allocations. A block stays valid until it is
/// deallocated, no matter where the handle that produced it was moved in the meantime. An
/// allocator whose blocks lie within its own value therefore implements the trait only for a
/// shared reference to itself, which pins the value for as long as the handle exists.
pub unsafe trait RawAlloc {
    /// Allocate one block of memory.
    ///
    /// Returns `None` if the request can not be satisfied. The allocator must not panic or abort
    /// on exhaustion, the caller decides how to report the failure.
    fn alloc(&self, layout: NonZeroLayout) -> Option<Allocation>;

    /// Deallocate a block previously allocated.
    ///
    /// # Safety
    /// The caller must ensure that:
    /// * `alloc` has been previously returned from a call to `alloc` on this allocator or one of
    ///   its clones, with the same layout.
    /// * There are no more pointers to the allocation.
    unsafe fn dealloc(&self, alloc: Allocation);

    /// The theoretical maximum size, in bytes, of a single allocation.
    ///
    /// This is an upper bound only. A request below it may still fail.
    fn max_size(&self) -> usize {
        isize::MAX as usize
    }
}

unsafe impl<A> RawAlloc for &'_ A
    where A: RawAlloc + ?Sized,
{
    fn alloc(&self, layout: NonZeroLayout) -> Option<Allocation> {
        (**self).alloc(layout)
    }

    unsafe fn dealloc(&self, alloc: Allocation) {
        (**self).dealloc(alloc)
    }

    fn max_size(&self) -> usize {
        (**self).max_size()
    }
}

use core::ptr::NonNull;

use crate::{Allocation, NonZeroLayout, RawAlloc};

/// Handle to the process-wide allocator of the `alloc` crate.
///
/// This is whatever `#[global_allocator]` the final binary registered, or the system allocator.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub struct Global;

unsafe impl RawAlloc for Global {
    fn alloc(&self, layout: NonZeroLayout) -> Option<Allocation> {
        // SAFETY: the layout is not empty due to `NonZeroLayout`.
        let ptr = unsafe { alloc::alloc::alloc(layout.into()) };
        from_global_ptr(ptr, layout)
    }

    unsafe fn dealloc(&self, alloc: Allocation) {
        // SAFETY: all preconditions have been propagated.
        alloc::alloc::dealloc(alloc.ptr.as_ptr(), alloc.layout.into())
    }
}

fn from_global_ptr(ptr: *mut u8, layout: NonZeroLayout) -> Option<Allocation> {
    let ptr = NonNull::new(ptr)?;
    Some(Allocation {
        ptr,
        layout,
    })
}

//! Contains the `Region`, the raw storage underneath a [`Vector`].
//!
//! [See `Region` for the main information][`Region`].
//!
//! [`Region`]: struct.Region.html
//! [`Vector`]: ../vector/struct.Vector.html
use core::{fmt, mem};
use core::marker::PhantomData;
use core::ptr::NonNull;

use alloc_traits::{Allocation, Global, NonZeroLayout, RawAlloc};
use crate::Error;

/// One contiguous allocation of slots for `T`, with a live prefix.
///
/// The region owns the memory but not the values in it. Slots `[0, len)` are considered live,
/// constructed objects and slots `[len, capacity)` are uninitialized. The region itself never
/// constructs, moves or drops an element; it only knows the split. Whoever owns the region is
/// responsible for dropping the live prefix before the region goes away, which then merely
/// releases the allocation.
///
/// A region is move-only. Duplicating it would duplicate the ownership of the allocation, so there
/// is neither `Clone` nor `Copy`, and the contents can only be duplicated by someone who knows how
/// to clone elements.
///
/// Zero-sized types never allocate. Their region has a dangling pointer and exactly the capacity
/// it was requested with.
///
/// ```
/// use alloc_traits::Global;
/// use region_vec::region::Region;
///
/// let mut region = Region::<u32>::with_capacity_in(4, Global).unwrap();
/// assert_eq!(region.capacity(), 4);
/// assert_eq!(region.len(), 0);
///
/// unsafe {
///     region.as_mut_ptr().write(7);
///     region.set_len(1);
/// }
///
/// // `u32` needs no drop, so we can simply let the allocation go.
/// let moved = region.take();
/// assert_eq!(moved.len(), 1);
/// assert_eq!(region.capacity(), 0);
/// ```
pub struct Region<T, A: RawAlloc = Global> {
    ptr: NonNull<T>,
    capacity: usize,
    /// The number of live slots, always a prefix.
    len: usize,
    alloc: A,
    elements: PhantomData<T>,
}

impl<T, A: RawAlloc> Region<T, A> {
    /// Create a region without any memory.
    pub const fn new_in(alloc: A) -> Self {
        Region {
            ptr: NonNull::dangling(),
            capacity: 0,
            len: 0,
            alloc,
            elements: PhantomData,
        }
    }

    /// Allocate a region of exactly `capacity` uninitialized slots.
    ///
    /// Fails with [`Error::Alloc`] if the byte size overflows, exceeds what the allocator can
    /// theoretically provide, or if the allocator returns no memory.
    ///
    /// [`Error::Alloc`]: ../enum.Error.html#variant.Alloc
    pub fn with_capacity_in(capacity: usize, alloc: A) -> Result<Self, Error> {
        let mut region = Region::new_in(alloc);

        if capacity == 0 {
            return Ok(region);
        }

        if mem::size_of::<T>() == 0 {
            region.capacity = capacity;
            return Ok(region);
        }

        if capacity > region.max_capacity() {
            return Err(Error::Alloc { capacity });
        }

        let layout = NonZeroLayout::array::<T>(capacity)
            .ok_or(Error::Alloc { capacity })?;
        let allocation = region.alloc.alloc(layout)
            .ok_or(Error::Alloc { capacity })?;

        region.ptr = allocation.ptr.cast();
        region.capacity = capacity;
        Ok(region)
    }

    /// Returns the number of slots.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the number of live slots.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no slot is live.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The largest capacity the allocator could theoretically provide.
    pub fn max_capacity(&self) -> usize {
        match mem::size_of::<T>() {
            0 => usize::MAX,
            size => self.alloc.max_size() / size,
        }
    }

    /// Get a reference to the allocator handle.
    pub fn allocator(&self) -> &A {
        &self.alloc
    }

    /// Pointer to the first slot.
    ///
    /// Dangling, but aligned, if the region has no memory.
    pub fn as_ptr(&self) -> *const T {
        self.ptr.as_ptr()
    }

    /// Mutable pointer to the first slot.
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// Set the number of live slots.
    ///
    /// ## Safety
    /// * `len` must be smaller or equal `self.capacity()`.
    /// * All slots in `[0, len)` must hold initialized values.
    /// * Values in slots that drop out of the live prefix are no longer owned by the region's
    ///   owner, the caller must have moved or dropped them.
    pub unsafe fn set_len(&mut self, len: usize) {
        debug_assert!(len <= self.capacity);
        self.len = len;
    }

    /// Exchange the memory, counters and allocator of two regions.
    ///
    /// No element is moved or touched. This is the pivot for reallocation: a fully prepared new
    /// region is swapped in and the old one released afterwards.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other)
    }

    /// Move the allocation out, leaving an empty region behind.
    ///
    /// The returned region has all memory and the live count. `self` keeps a clone of the
    /// allocator handle but has a capacity of `0`, and can be dropped or grown again.
    pub fn take(&mut self) -> Self
        where A: Clone,
    {
        let mut empty = Region::new_in(self.alloc.clone());
        self.swap(&mut empty);
        empty
    }
}

impl<T, A: RawAlloc> Drop for Region<T, A> {
    fn drop(&mut self) {
        // Zero-sized types and empty regions have no layout, and no allocation.
        if let Some(layout) = NonZeroLayout::array::<T>(self.capacity) {
            unsafe {
                // SAFETY: this exact layout was allocated from this allocator handle, or one of
                // its clones, in `with_capacity_in`.
                self.alloc.dealloc(Allocation {
                    ptr: self.ptr.cast(),
                    layout,
                })
            }
        }
    }
}

impl<T, A: RawAlloc> fmt::Debug for Region<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Region")
            .field("ptr", &self.ptr)
            .field("capacity", &self.capacity)
            .field("len", &self.len)
            .finish()
    }
}

// SAFETY: the region owns its allocation uniquely, like a `Box<[T]>` would.
unsafe impl<T: Send, A: RawAlloc + Send> Send for Region<T, A> { }
// SAFETY: shared access only hands out `*const T`.
unsafe impl<T: Sync, A: RawAlloc + Sync> Sync for Region<T, A> { }

//! A bump allocator over storage embedded in its own value.
//!
//! See [`Bump`] for usage.
//!
//! [`Bump`]: struct.Bump.html
use core::cell::UnsafeCell;
use core::fmt;
use core::mem::{self, MaybeUninit};
use core::ptr::NonNull;
use core::sync::atomic::{AtomicUsize, Ordering};

use alloc_traits::{Allocation, NonZeroLayout, RawAlloc};

/// Allocator handing out consecutive blocks of its inline, fixed-size storage.
///
/// The type parameter `T` only determines the size and alignment of the storage, no `T` is ever
/// created. Choosing an array of the element type a container will store makes it easy to tell
/// how many elements fit, padding included.
///
/// A `Bump` is always `Sync` so that it can be a `static`.
///
/// ## Usage as a bounded local allocator
///
/// A shared reference to a `Bump` is an allocator handle. Containers that are generic over
/// [`RawAlloc`] can draw from it, and they will observe a failed allocation as soon as the storage
/// is used up. The `Bump` itself is not a handle: its blocks point into its own storage, so they
/// would dangle once it is moved.
///
/// ```rust
/// use alloc_traits::{NonZeroLayout, RawAlloc};
/// use static_alloc::Bump;
///
/// fn fill<A: RawAlloc>(alloc: A) -> usize {
///     let layout = NonZeroLayout::new::<u64>().unwrap();
///     core::iter::from_fn(|| alloc.alloc(layout)).count()
/// }
///
/// let local: Bump<[u64; 3]> = Bump::uninit();
/// assert_eq!(fill(&local), 3);
/// ```
///
/// A `[u8; 24]` storage does not guarantee room for three `u64` since it is only byte aligned.
///
/// ## Deallocation
///
/// Memory is only ever handed out from the top. Deallocating the most recent block rewinds the
/// top so that strictly nested usage reuses memory. Any other deallocation is a no-op and the
/// block stays consumed until [`reset`].
///
/// ```rust
/// use alloc_traits::{NonZeroLayout, RawAlloc};
/// use static_alloc::Bump;
///
/// let local: Bump<[u32; 4]> = Bump::uninit();
/// let layout = NonZeroLayout::new::<u32>().unwrap();
///
/// let before = local.level();
/// let block = local.alloc(layout).unwrap();
/// assert!(local.level() > before);
///
/// unsafe { local.dealloc(block) };
/// assert_eq!(local.level(), before);
/// ```
///
/// [`RawAlloc`]: https://docs.rs/alloc-traits
/// [`reset`]: #method.reset
pub struct Bump<T> {
    /// Bytes handed out from the start of `storage`, including alignment padding.
    ///
    /// Grows in `try_alloc` and shrinks in `rewind`, both only by atomic read-modify-write.
    consumed: AtomicUsize,
    /// Never read as a `T`. `MaybeUninit` since the bytes are handed out piecewise.
    storage: UnsafeCell<MaybeUninit<T>>,
}

/// The number of bytes consumed in a bump allocator at some point.
///
/// Every allocation raises the level since blocks are never empty. Comparing the level before
/// and after an operation shows whether memory was taken, or handed back by a rewind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Level(pub(crate) usize);

/// Placement of a block behind a given level.
struct Fit {
    start: usize,
    end: usize,
}

impl<T> Bump<T> {
    /// Create an allocator with uninitialized storage of the size and alignment of `T`.
    pub const fn uninit() -> Self {
        Bump {
            consumed: AtomicUsize::new(0),
            storage: UnsafeCell::new(MaybeUninit::uninit()),
        }
    }

    /// Create an allocator whose storage starts out as the bytes of `storage`.
    ///
    /// The value is never dropped and can not be retrieved.
    pub const fn new(storage: T) -> Self {
        Bump {
            consumed: AtomicUsize::new(0),
            storage: UnsafeCell::new(MaybeUninit::new(storage)),
        }
    }

    /// Forget all blocks and start handing out memory from the beginning.
    ///
    /// Requires a mutable reference, so no block handed out before can still be in use.
    pub fn reset(&mut self) {
        *self.consumed.get_mut() = 0;
    }

    /// Observe the current level.
    pub fn level(&self) -> Level {
        Level(self.consumed.load(Ordering::SeqCst))
    }

    /// The total number of bytes of storage.
    pub const fn capacity(&self) -> usize {
        mem::size_of::<T>()
    }

    /// The number of bytes not yet handed out.
    ///
    /// Alignment padding may make a request fail even if its size is below this number.
    pub fn remaining(&self) -> usize {
        self.capacity() - self.level().0
    }

    /// Place a block of `layout` behind `consumed` bytes, if it fits into the storage.
    fn fit(&self, layout: NonZeroLayout, consumed: usize) -> Option<Fit> {
        let padding = self.base_ptr()
            .wrapping_add(consumed)
            .align_offset(layout.align());
        let start = consumed.checked_add(padding)?;
        let end = start.checked_add(layout.size().get())?;

        if end > self.capacity() {
            return None;
        }

        Some(Fit { start, end })
    }

    fn try_alloc(&self, layout: NonZeroLayout) -> Option<NonNull<u8>> {
        // Retries with the fresh level if another thread allocated in between.
        let previous = self.consumed
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |consumed| {
                self.fit(layout, consumed).map(|fit| fit.end)
            })
            .ok()?;

        // Same input as the successful update, so the same placement.
        let Fit { start, .. } = self.fit(layout, previous)?;
        let block = unsafe {
            // SAFETY: `start < end <= capacity`, in bounds of the storage.
            self.base_ptr().add(start)
        };

        NonNull::new(block)
    }

    /// Allocate a block from the storage, or `None` if it does not fit.
    pub fn alloc(&self, layout: NonZeroLayout) -> Option<Allocation> {
        let ptr = self.try_alloc(layout)?;
        Some(Allocation {
            ptr,
            layout,
        })
    }

    /// Hand back a block.
    ///
    /// Only the most recent block is actually reclaimed, any other block stays consumed until
    /// [`reset`]. Blocks that do not lie within this allocator's storage are ignored.
    ///
    /// ## Safety
    /// The block must no longer be used if it was allocated from this allocator.
    ///
    /// [`reset`]: #method.reset
    pub unsafe fn dealloc(&self, block: Allocation) {
        self.rewind(block)
    }

    /// Hand back the block if it is the topmost one.
    fn rewind(&self, block: Allocation) {
        let start = match (block.ptr.as_ptr() as usize).checked_sub(self.base_ptr() as usize) {
            Some(start) if start < self.capacity() => start,
            _ => return,
        };
        let end = start + block.layout.size().get();
        // Fails when another allocation happened after this block, then it stays consumed.
        let _ = self.consumed.compare_exchange(
            end,
            start,
            Ordering::SeqCst,
            Ordering::SeqCst);
    }

    fn base_ptr(&self) -> *mut u8 {
        self.storage.get() as *mut u8
    }
}

impl<T> fmt::Debug for Bump<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bump")
            .field("consumed", &self.level().0)
            .field("capacity", &self.capacity())
            .finish()
    }
}

// SAFETY: at most one thread gets a pointer to each chunk of data.
unsafe impl<T> Sync for Bump<T> { }

// SAFETY: blocks lie within the borrowed storage, which can not move while the handle exists.
unsafe impl<'a, T> RawAlloc for &'a Bump<T> {
    fn alloc(&self, layout: NonZeroLayout) -> Option<Allocation> {
        Bump::alloc(self, layout)
    }

    unsafe fn dealloc(&self, alloc: Allocation) {
        Bump::dealloc(self, alloc)
    }

    fn max_size(&self) -> usize {
        self.capacity()
    }
}

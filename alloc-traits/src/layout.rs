use core::alloc;
use core::num::NonZeroUsize;

/// The size and alignment of a block of memory.
///
/// A thin wrapper of the `Layout` in core, constructed for types and arrays of them. Requests
/// whose size overflows are `None`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Layout(alloc::Layout);

/// A layout with a non-zero size, the only kind an allocator is asked for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NonZeroLayout(Layout);

impl Layout {
    /// The layout of one `T`.
    pub fn new<T>() -> Self {
        Layout(alloc::Layout::new::<T>())
    }

    /// The layout of `count` consecutive instances of `T`.
    ///
    /// Returns `None` if the total size would overflow `isize::MAX`.
    ///
    /// ```
    /// use alloc_traits::Layout;
    ///
    /// let layout = Layout::array::<u32>(4).unwrap();
    /// assert_eq!(layout.size(), 16);
    /// assert_eq!(layout.align(), 4);
    ///
    /// assert!(Layout::array::<u32>(usize::MAX).is_none());
    /// ```
    pub fn array<T>(count: usize) -> Option<Self> {
        alloc::Layout::array::<T>(count).ok().map(Layout)
    }

    /// Size in bytes.
    pub fn size(&self) -> usize {
        self.0.size()
    }

    /// Alignment in bytes, a power of two.
    pub fn align(&self) -> usize {
        self.0.align()
    }

    /// Keep the layout if it is not empty.
    pub fn non_zero(self) -> Option<NonZeroLayout> {
        match self.size() {
            0 => None,
            _ => Some(NonZeroLayout(self)),
        }
    }
}

impl NonZeroLayout {
    /// The layout of one `T`, or `None` for a zero-sized type.
    pub fn new<T>() -> Option<Self> {
        Layout::new::<T>().non_zero()
    }

    /// The layout of `count` consecutive instances of `T`.
    ///
    /// `None` on overflow, and for empty arrays: a zero-sized `T` or a `count` of `0`.
    pub fn array<T>(count: usize) -> Option<Self> {
        Layout::array::<T>(count)?.non_zero()
    }

    /// Size in bytes.
    pub fn size(&self) -> NonZeroUsize {
        match NonZeroUsize::new(self.0.size()) {
            Some(size) => size,
            None => unreachable!("constructed only from non-empty layouts"),
        }
    }

    /// Alignment in bytes, a power of two.
    pub fn align(&self) -> usize {
        self.0.align()
    }
}

impl From<NonZeroLayout> for Layout {
    fn from(layout: NonZeroLayout) -> Layout {
        layout.0
    }
}

impl From<NonZeroLayout> for alloc::Layout {
    fn from(layout: NonZeroLayout) -> alloc::Layout {
        (layout.0).0
    }
}

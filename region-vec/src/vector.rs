//! Contains the `Vector` implementation.
//!
//! [See `Vector` for the main information][`Vector`].
//!
//! [`Vector`]: struct.Vector.html
use core::{borrow, cmp, fmt, hash, iter, mem, ops, ptr, slice};

use alloc_traits::{Global, RawAlloc};
use scopeguard::ScopeGuard;

use crate::cursor::Cursor;
use crate::error::Error;
use crate::iter::{IntoIter, Iter, IterMut};
use crate::region::Region;

/// A growable, contiguous sequence managing its own raw region.
///
/// The vector exclusively owns one [`Region`] obtained from its allocator handle `A`. The first
/// `len()` slots of the region hold the elements, the remaining `capacity() - len()` slots are
/// uninitialized. Whenever an operation needs more slots than the region provides, a new region is
/// allocated, the elements are moved over in index order, and the new region is swapped in. Growth
/// without an explicit target doubles the capacity, starting at `1`.
///
/// The capacity never shrinks on its own. Removing elements, truncating and clearing keep the
/// region, only assignment or [`take`] replace it.
///
/// # Basic Usage
///
/// ```
/// use region_vec::Vector;
///
/// let mut vec = Vector::new();
/// vec.push(1).unwrap();
/// vec.push(2).unwrap();
/// vec.push(3).unwrap();
///
/// assert_eq!(vec.len(), 3);
/// assert_eq!(vec.capacity(), 4);
/// assert_eq!(vec.at(1), Ok(&2));
///
/// while let Ok(top) = vec.pop() {
///     // Prints 3, 2, 1
///     println!("{}", top);
/// }
/// ```
///
/// ## With a bounded allocator
///
/// Any [`RawAlloc`] handle can back the vector. A shared reference to a `Bump` allows observing
/// allocation failure, which leaves the vector as it was.
///
/// ```
/// use region_vec::{Error, Vector};
/// use static_alloc::Bump;
///
/// let memory: Bump<[u64; 4]> = Bump::uninit();
/// let mut vec = Vector::new_in(&memory);
///
/// vec.push(0_u64).unwrap();
/// vec.push(1_u64).unwrap();
/// // Growing to 4 elements needs a fresh region but the old ones are not reclaimed.
/// assert_eq!(vec.push(2_u64), Err(Error::Alloc { capacity: 4 }));
/// assert_eq!(vec.as_slice(), [0, 1]);
/// ```
///
/// ## Failing element operations
///
/// Panics in the element type's `Clone` or `Drop` unwind through the vector. Operations that
/// construct new elements roll back the elements they already constructed, so the vector is left
/// with exactly its prior contents.
///
/// [`Region`]: ../region/struct.Region.html
/// [`RawAlloc`]: https://docs.rs/alloc-traits
/// [`take`]: #method.take
pub struct Vector<T, A: RawAlloc = Global> {
    region: Region<T, A>,
}

impl<T> Vector<T, Global> {
    /// Create an empty vector on the global allocator.
    ///
    /// This does not allocate.
    pub const fn new() -> Self {
        Vector::new_in(Global)
    }

    /// Create an empty vector with room for exactly `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Result<Self, Error> {
        Vector::with_capacity_in(capacity, Global)
    }

    /// Create a vector of `count` clones of `value`.
    ///
    /// See [`from_elem_in`] for details.
    ///
    /// [`from_elem_in`]: #method.from_elem_in
    pub fn from_elem(count: usize, value: T) -> Result<Self, Error>
        where T: Clone,
    {
        Vector::from_elem_in(count, value, Global)
    }
}

impl<T, A: RawAlloc> Vector<T, A> {
    /// Create an empty vector with an allocator handle.
    pub const fn new_in(alloc: A) -> Self {
        Vector {
            region: Region::new_in(alloc),
        }
    }

    /// Create an empty vector with room for exactly `capacity` elements.
    pub fn with_capacity_in(capacity: usize, alloc: A) -> Result<Self, Error> {
        Ok(Vector {
            region: Region::with_capacity_in(capacity, alloc)?,
        })
    }

    /// Returns the number of elements in the vector.
    pub fn len(&self) -> usize {
        self.region.len()
    }

    /// Returns the number of elements the vector can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.region.capacity()
    }

    /// Returns `true` if the vector contains no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The theoretical maximum number of elements, as far as the allocator can tell.
    ///
    /// Never `0` unless the allocator can not allocate a single element.
    pub fn max_size(&self) -> usize {
        self.region.max_capacity()
    }

    /// Get a reference to the allocator handle.
    pub fn allocator(&self) -> &A {
        self.region.allocator()
    }

    /// Extracts a slice containing the entire vector.
    pub fn as_slice(&self) -> &[T] {
        unsafe {
            // SAFETY: the live prefix is initialized.
            slice::from_raw_parts(self.region.as_ptr(), self.region.len())
        }
    }

    /// Extracts the mutable slice containing the entire vector.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe {
            // SAFETY:
            // * the live prefix is initialized.
            // * unaliased since we take ourselves by `mut`.
            slice::from_raw_parts_mut(self.region.as_mut_ptr(), self.region.len())
        }
    }

    /// Pointer to the first element.
    ///
    /// Invalidated by any operation that reallocates.
    pub fn as_ptr(&self) -> *const T {
        self.region.as_ptr()
    }

    /// Mutable pointer to the first element.
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.region.as_mut_ptr()
    }

    /// Bounds-checked access to an element.
    ///
    /// ```
    /// use region_vec::{Error, Vector};
    ///
    /// let vec = Vector::from_elem(2, 'a').unwrap();
    /// assert_eq!(vec.at(1), Ok(&'a'));
    /// assert_eq!(vec.at(2), Err(Error::IndexOutOfRange { index: 2, len: 2 }));
    /// ```
    pub fn at(&self, index: usize) -> Result<&T, Error> {
        let len = self.len();
        self.as_slice().get(index).ok_or(Error::IndexOutOfRange { index, len })
    }

    /// Bounds-checked mutable access to an element.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, Error> {
        let len = self.len();
        self.as_mut_slice().get_mut(index).ok_or(Error::IndexOutOfRange { index, len })
    }

    /// The first element, or `Error::Empty`.
    pub fn front(&self) -> Result<&T, Error> {
        self.as_slice().first().ok_or(Error::Empty)
    }

    /// The first element, or `Error::Empty`.
    pub fn front_mut(&mut self) -> Result<&mut T, Error> {
        self.as_mut_slice().first_mut().ok_or(Error::Empty)
    }

    /// The last element, or `Error::Empty`.
    pub fn back(&self) -> Result<&T, Error> {
        self.as_slice().last().ok_or(Error::Empty)
    }

    /// The last element, or `Error::Empty`.
    pub fn back_mut(&mut self) -> Result<&mut T, Error> {
        self.as_mut_slice().last_mut().ok_or(Error::Empty)
    }

    /// A cursor at the first element, equal to `end()` if the vector is empty.
    pub fn begin(&self) -> Cursor<'_, T> {
        Cursor::new(self, self.as_slice(), 0)
    }

    /// A cursor one past the last element.
    pub fn end(&self) -> Cursor<'_, T> {
        Cursor::new(self, self.as_slice(), self.len())
    }

    fn cursor_at(&self, index: usize) -> Cursor<'_, T> {
        Cursor::new(self, self.as_slice(), index)
    }

    /// Iterate over the elements.
    ///
    /// Use `iter().rev()` for the reverse traversal.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.as_slice())
    }

    /// Iterate over mutable references to the elements.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self.as_mut_slice())
    }

    /// Removes the last element from a vector and returns it, or `Error::Empty`.
    ///
    /// The capacity is not affected.
    pub fn pop(&mut self) -> Result<T, Error> {
        let len = self.len();
        if len == 0 {
            return Err(Error::Empty);
        }

        unsafe {
            // SAFETY: initialized, and leaves the live prefix before anyone can observe it.
            self.region.set_len(len - 1);
            Ok(ptr::read(self.region.as_ptr().add(len - 1)))
        }
    }

    /// Append an element if there is room for it, without allocating.
    ///
    /// Returns the value back if the vector is full.
    ///
    /// ```
    /// use region_vec::Vector;
    ///
    /// let mut vec = Vector::with_capacity(1).unwrap();
    /// assert_eq!(vec.push_within_capacity('a'), Ok(()));
    /// assert_eq!(vec.push_within_capacity('b'), Err('b'));
    /// assert_eq!(vec.as_slice(), ['a']);
    /// ```
    pub fn push_within_capacity(&mut self, value: T) -> Result<(), T> {
        let len = self.len();
        if len == self.capacity() {
            return Err(value);
        }

        unsafe {
            // SAFETY: `len < capacity`, behind the live prefix.
            ptr::write(self.region.as_mut_ptr().add(len), value);
            self.region.set_len(len + 1);
        }

        Ok(())
    }

    /// Remove the element at `index`, shifting all following elements to the left.
    ///
    /// Fails with `Error::IndexOutOfRange` if `index >= len()`.
    pub fn remove(&mut self, index: usize) -> Result<T, Error> {
        let len = self.len();
        if index >= len {
            return Err(Error::IndexOutOfRange { index, len });
        }

        unsafe {
            // SAFETY: `index < len` so the slot is live. After reading it out it is logically
            // uninit and the following elements are moved into it with a bitwise copy.
            let slot = self.region.as_mut_ptr().add(index);
            let value = ptr::read(slot);
            ptr::copy(slot.add(1), slot, len - index - 1);
            self.region.set_len(len - 1);
            Ok(value)
        }
    }

    /// Drop the element at `index`, shifting all following elements to the left.
    ///
    /// Returns a cursor at `index`, which is the end cursor if the last element was erased.
    ///
    /// ```
    /// use region_vec::Vector;
    ///
    /// let mut vec: Vector<_> = [99, 1, 2, 3].iter().copied().collect();
    /// let next = vec.erase(0).unwrap();
    /// assert_eq!(next.get(), Some(&1));
    /// assert_eq!(vec.as_slice(), [1, 2, 3]);
    /// ```
    pub fn erase(&mut self, index: usize) -> Result<Cursor<'_, T>, Error> {
        drop(self.remove(index)?);
        Ok(self.cursor_at(index))
    }

    /// Shorten the vector to a maximum length.
    ///
    /// If the length is not larger than `len` this has no effect. The tail is dropped in index
    /// order. The length is shortened *before* any element is dropped, so a panic in one `Drop`
    /// can not lead to a double drop. The rest of the tail is still dropped while unwinding.
    pub fn truncate(&mut self, len: usize) {
        let old_len = self.len();
        if len >= old_len {
            return;
        }

        unsafe {
            let tail = ptr::slice_from_raw_parts_mut(
                self.region.as_mut_ptr().add(len),
                old_len - len);
            self.region.set_len(len);
            ptr::drop_in_place(tail);
        }
    }

    /// Remove all elements.
    ///
    /// This is an alias for [`truncate(0)`][truncate], the capacity is kept.
    ///
    /// [truncate]: #method.truncate
    pub fn clear(&mut self) {
        self.truncate(0)
    }

    /// Exchange the contents, including the allocator handles, of two vectors.
    pub fn swap(&mut self, other: &mut Self) {
        self.region.swap(&mut other.region)
    }
}

impl<T, A: RawAlloc + Clone> Vector<T, A> {
    /// Create a vector of `count` clones of `value`, in a region of exactly `count` slots.
    ///
    /// If a clone panics, the elements cloned so far are dropped and the region is released
    /// before the panic continues.
    pub fn from_elem_in(count: usize, value: T, alloc: A) -> Result<Self, Error>
        where T: Clone,
    {
        let mut vec = Vector::with_capacity_in(count, alloc)?;
        vec.extend_with(count, |_| value.clone())?;
        Ok(vec)
    }

    /// Create an independent copy, with a region sized exactly to the length.
    ///
    /// This is `Clone::clone` with the allocation failure reported instead of a panic.
    pub fn try_clone(&self) -> Result<Self, Error>
        where T: Clone,
    {
        let mut copy = Vector::with_capacity_in(self.len(), self.allocator().clone())?;
        copy.extend_from_slice(self.as_slice())?;
        Ok(copy)
    }

    /// Replace the contents with a copy of `other`.
    ///
    /// The copy is created completely before it is swapped in. If creating it fails or panics,
    /// `self` is untouched. The previous contents are dropped afterwards, with the temporary.
    pub fn assign_from(&mut self, other: &Self) -> Result<(), Error>
        where T: Clone,
    {
        let mut copy = other.try_clone()?;
        self.swap(&mut copy);
        Ok(())
    }

    /// Move the contents out, leaving an empty vector without capacity behind.
    ///
    /// No element is moved individually, the region changes owner.
    ///
    /// ```
    /// use region_vec::Vector;
    ///
    /// let mut original = Vector::from_elem(5, 'x').unwrap();
    /// let moved = original.take();
    ///
    /// assert_eq!(moved.len(), 5);
    /// assert_eq!(original.len(), 0);
    /// assert_eq!(original.capacity(), 0);
    /// ```
    pub fn take(&mut self) -> Self {
        Vector {
            region: self.region.take(),
        }
    }

    /// Replace the contents by moving them out of `other`.
    ///
    /// `other` is left empty and without capacity, the previous contents of `self` are dropped.
    pub fn move_from(&mut self, other: &mut Self) {
        *self = other.take();
    }

    /// Ensure a total capacity of at least `capacity` elements.
    ///
    /// Unlike the standard `Vec` this takes the *total* capacity, not the additional one. Does
    /// nothing if the capacity is already sufficient. Otherwise allocates a region of exactly
    /// `capacity` slots and moves all elements over. On failure the vector is unchanged.
    pub fn reserve(&mut self, capacity: usize) -> Result<(), Error> {
        if capacity <= self.capacity() {
            return Ok(());
        }

        let mut fresh = Region::with_capacity_in(capacity, self.allocator().clone())?;
        let len = self.len();

        unsafe {
            // SAFETY: distinct allocations, `len` live slots fit into the new region. The old
            // slots are logically uninit after the move.
            ptr::copy_nonoverlapping(self.region.as_ptr(), fresh.as_mut_ptr(), len);
            fresh.set_len(len);
            self.region.set_len(0);
        }

        self.region.swap(&mut fresh);
        // `fresh` holds the old region, without live slots, and releases it.
        Ok(())
    }

    /// Appends an element to the back of a collection.
    ///
    /// Doubles the capacity when full. Returns `Error::Alloc` if that is not possible, in which
    /// case the vector is unchanged.
    ///
    /// **The value is dropped on failure.** To keep it, [`reserve`] first or use
    /// [`push_within_capacity`], which hands the value back instead.
    ///
    /// [`reserve`]: #method.reserve
    /// [`push_within_capacity`]: #method.push_within_capacity
    pub fn push(&mut self, value: T) -> Result<(), Error> {
        let len = self.len();
        let required = len.checked_add(1).ok_or(Error::Alloc { capacity: usize::MAX })?;
        self.grow_for(required)?;

        unsafe {
            // SAFETY: in bounds after growing, behind the live prefix.
            ptr::write(self.region.as_mut_ptr().add(len), value);
            self.region.set_len(required);
        }

        Ok(())
    }

    /// Insert an element at `index`, shifting all following elements to the right.
    ///
    /// Fails with `Error::IndexOutOfRange` if `index > len()`. Returns a cursor at the new element.
    ///
    /// **The value is dropped on failure**, like in [`push`].
    ///
    /// [`push`]: #method.push
    ///
    /// ```
    /// use region_vec::Vector;
    ///
    /// let mut vec: Vector<_> = (1..=3).collect();
    /// let inserted = vec.insert(0, 99).unwrap();
    /// assert_eq!(inserted.get(), Some(&99));
    /// assert_eq!(vec.as_slice(), [99, 1, 2, 3]);
    /// ```
    pub fn insert(&mut self, index: usize, value: T) -> Result<Cursor<'_, T>, Error> {
        let len = self.len();
        if index > len {
            return Err(Error::IndexOutOfRange { index, len });
        }

        let required = len.checked_add(1).ok_or(Error::Alloc { capacity: usize::MAX })?;
        self.grow_for(required)?;

        unsafe {
            // SAFETY: room for one more after growing. `ptr::copy` handles the overlap, moving
            // the highest element first.
            let slot = self.region.as_mut_ptr().add(index);
            ptr::copy(slot, slot.add(1), len - index);
            ptr::write(slot, value);
            self.region.set_len(required);
        }

        Ok(self.cursor_at(index))
    }

    /// Resize to `new_len` elements, filling with clones of `value`.
    ///
    /// Does nothing if the length is already `new_len`. Shrinking drops the tail like
    /// [`truncate`] and keeps the capacity. Growing ensures capacity first and then clones into the
    /// new slots; the length changes only once all of them are written. If a clone panics, the new
    /// elements are dropped again and the length stays as it was.
    ///
    /// [`truncate`]: #method.truncate
    pub fn resize(&mut self, new_len: usize, value: T) -> Result<(), Error>
        where T: Clone,
    {
        let len = self.len();
        if new_len <= len {
            self.truncate(new_len);
            return Ok(());
        }

        self.extend_with(new_len - len, |_| value.clone())
    }

    /// Resize to `new_len` elements, filling with values returned by a closure.
    ///
    /// Same guarantees as [`resize`].
    ///
    /// [`resize`]: #method.resize
    pub fn resize_with<F>(&mut self, new_len: usize, mut f: F) -> Result<(), Error>
        where F: FnMut() -> T,
    {
        let len = self.len();
        if new_len <= len {
            self.truncate(new_len);
            return Ok(());
        }

        self.extend_with(new_len - len, |_| f())
    }

    /// Append clones of all elements of a slice.
    ///
    /// Either all elements are appended or, on allocation failure or a panicking clone, none.
    pub fn extend_from_slice(&mut self, other: &[T]) -> Result<(), Error>
        where T: Clone,
    {
        self.extend_with(other.len(), |idx| other[idx].clone())
    }

    /// Append `count` elements created by `next`, which receives the index among the new ones.
    fn extend_with<F>(&mut self, count: usize, mut next: F) -> Result<(), Error>
        where F: FnMut(usize) -> T,
    {
        let len = self.len();
        let new_len = len.checked_add(count).ok_or(Error::Alloc { capacity: usize::MAX })?;
        self.grow_for(new_len)?;

        let tail = unsafe {
            // SAFETY: at most one-past-the-end of the region.
            self.region.as_mut_ptr().add(len)
        };

        // Slots written behind the live prefix. Should `next` unwind, they are dropped again.
        let mut written = scopeguard::guard(0usize, move |written| unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(tail, written));
        });

        while *written < count {
            let value = next(*written);
            unsafe {
                // SAFETY: `len + written < new_len <= capacity`, and uninit.
                ptr::write(tail.add(*written), value);
            }
            *written += 1;
        }

        ScopeGuard::into_inner(written);
        unsafe {
            // SAFETY: all `count` slots were written.
            self.region.set_len(new_len);
        }

        Ok(())
    }

    /// Ensure room for `required` elements, doubling the capacity if growth is needed.
    fn grow_for(&mut self, required: usize) -> Result<(), Error> {
        let capacity = self.capacity();
        if required <= capacity {
            return Ok(());
        }

        let doubled = cmp::max(1, capacity.saturating_mul(2));
        let target = cmp::max(required, cmp::min(doubled, self.max_size()));
        self.reserve(target)
    }
}

impl<T, A: RawAlloc> Drop for Vector<T, A> {
    fn drop(&mut self) {
        unsafe {
            ptr::drop_in_place(self.as_mut_slice())
        }
    }
}

impl<T: Clone, A: RawAlloc + Clone> Clone for Vector<T, A> {
    /// ## Panics
    /// This method panics if the allocator can not provide the region. Use [`try_clone`] to
    /// handle that case.
    ///
    /// [`try_clone`]: #method.try_clone
    fn clone(&self) -> Self {
        match self.try_clone() {
            Ok(copy) => copy,
            Err(err) => panic!("{}", err),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        if let Err(err) = self.assign_from(source) {
            panic!("{}", err);
        }
    }
}

impl<T, A: RawAlloc + Default> Default for Vector<T, A> {
    fn default() -> Self {
        Vector::new_in(A::default())
    }
}

impl<T, A: RawAlloc> ops::Deref for Vector<T, A> {
    type Target = [T];
    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, A: RawAlloc> ops::DerefMut for Vector<T, A> {
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T, A: RawAlloc, I> ops::Index<I> for Vector<T, A>
    where I: slice::SliceIndex<[T]>,
{
    type Output = I::Output;

    fn index(&self, idx: I) -> &I::Output {
        ops::Index::index(&**self, idx)
    }
}

impl<T, A: RawAlloc, I> ops::IndexMut<I> for Vector<T, A>
    where I: slice::SliceIndex<[T]>,
{
    fn index_mut(&mut self, idx: I) -> &mut I::Output {
        ops::IndexMut::index_mut(&mut **self, idx)
    }
}

impl<T, U, A, B> PartialEq<Vector<U, B>> for Vector<T, A>
where
    T: PartialEq<U>,
    A: RawAlloc,
    B: RawAlloc,
{
    #[inline]
    fn eq(&self, other: &Vector<U, B>) -> bool {
        PartialEq::eq(&**self, &**other)
    }
}

impl<T: Eq, A: RawAlloc> Eq for Vector<T, A> { }

impl<T: PartialOrd, A: RawAlloc, B: RawAlloc> PartialOrd<Vector<T, B>> for Vector<T, A> {
    #[inline]
    fn partial_cmp(&self, other: &Vector<T, B>) -> Option<cmp::Ordering> {
        PartialOrd::partial_cmp(&**self, &**other)
    }
}

impl<T: Ord, A: RawAlloc> Ord for Vector<T, A> {
    #[inline]
    fn cmp(&self, other: &Self) -> cmp::Ordering {
        Ord::cmp(&**self, &**other)
    }
}

impl<T: hash::Hash, A: RawAlloc> hash::Hash for Vector<T, A> {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        hash::Hash::hash(&**self, state)
    }
}

impl<T: fmt::Debug, A: RawAlloc> fmt::Debug for Vector<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T, A: RawAlloc> borrow::Borrow<[T]> for Vector<T, A> {
    fn borrow(&self) -> &[T] {
        &**self
    }
}

impl<T, A: RawAlloc> borrow::BorrowMut<[T]> for Vector<T, A> {
    fn borrow_mut(&mut self) -> &mut [T] {
        &mut **self
    }
}

impl<T, A: RawAlloc> AsRef<[T]> for Vector<T, A> {
    fn as_ref(&self) -> &[T] {
        &**self
    }
}

impl<T, A: RawAlloc> AsMut<[T]> for Vector<T, A> {
    fn as_mut(&mut self) -> &mut [T] {
        &mut **self
    }
}

/// Append all elements of an iterator.
///
/// ## Panics
/// Panics if the allocator fails to provide a larger region. Elements appended before that remain
/// in the vector. Use [`push`] in a loop to handle the failure instead.
///
/// [`push`]: #method.push
impl<T, A: RawAlloc + Clone> iter::Extend<T> for Vector<T, A> {
    fn extend<I>(&mut self, iter: I)
        where I: IntoIterator<Item=T>,
    {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        if let Err(err) = self.grow_for(self.len().saturating_add(lower)) {
            panic!("{}", err);
        }

        for item in iter {
            if let Err(err) = self.push(item) {
                panic!("{}", err);
            }
        }
    }
}

impl<'a, T: Clone + 'a, A: RawAlloc + Clone> iter::Extend<&'a T> for Vector<T, A> {
    fn extend<I>(&mut self, iter: I)
        where I: IntoIterator<Item=&'a T>,
    {
        self.extend(iter.into_iter().cloned())
    }
}

impl<T, A: RawAlloc + Clone + Default> iter::FromIterator<T> for Vector<T, A> {
    fn from_iter<I>(iter: I) -> Self
        where I: IntoIterator<Item=T>,
    {
        let mut vec = Vector::default();
        vec.extend(iter);
        vec
    }
}

impl<T, A: RawAlloc> IntoIterator for Vector<T, A> {
    type Item = T;
    type IntoIter = IntoIter<T, A>;

    fn into_iter(self) -> IntoIter<T, A> {
        let this = mem::ManuallyDrop::new(self);
        let region = unsafe {
            // SAFETY: `this` is never dropped, so the region has a single owner again.
            ptr::read(&this.region)
        };
        IntoIter::new(region)
    }
}

impl<'a, T, A: RawAlloc> IntoIterator for &'a Vector<T, A> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T, A: RawAlloc> IntoIterator for &'a mut Vector<T, A> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}

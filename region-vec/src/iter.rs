//! Iterators over the elements of a vector.
//!
//! All of them are double ended. The reverse traversal of a vector is the reversed forward
//! iterator, whose first item is the last live element.
use core::{fmt, iter, ptr, slice};
use core::marker::PhantomData;
use core::ptr::NonNull;

use alloc_traits::RawAlloc;
use crate::region::Region;

/// An iterator over shared references to the elements.
///
/// Created by [`Vector::iter`].
///
/// [`Vector::iter`]: ../vector/struct.Vector.html#method.iter
// Internal invariant: `front <= back <= elements.len()`
pub struct Iter<'a, T> {
    elements: &'a [T],
    front: usize,
    back: usize,
}

/// An iterator over mutable references to the elements.
///
/// Created by [`Vector::iter_mut`].
///
/// [`Vector::iter_mut`]: ../vector/struct.Vector.html#method.iter_mut
// Internal invariant: `front <= back` and all indices below `back` are initialized.
pub struct IterMut<'a, T> {
    elements: NonNull<T>,
    front: usize,
    back: usize,
    lifetime: PhantomData<&'a mut T>,
}

/// An iterator moving the elements out of a vector.
///
/// The region of the vector is owned by the iterator and released when it is dropped, together
/// with all elements that have not been yielded.
// Internal invariant: `front <= back <= region.capacity()`. The region's own live count is zero,
// the live slots are exactly `[front, back)`.
pub struct IntoIter<T, A: RawAlloc> {
    region: Region<T, A>,
    front: usize,
    back: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(elements: &'a [T]) -> Self {
        Iter { elements, front: 0, back: elements.len() }
    }

    /// View the remaining elements as a slice.
    pub fn as_slice(&self) -> &'a [T] {
        &self.elements[self.front..self.back]
    }
}

impl<'a, T> IterMut<'a, T> {
    pub(crate) fn new(elements: &'a mut [T]) -> Self {
        let back = elements.len();
        IterMut {
            elements: NonNull::from(elements).cast(),
            front: 0,
            back,
            lifetime: PhantomData,
        }
    }

    /// View the remaining elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        unsafe {
            // SAFETY: `[front, back)` is initialized and not yet handed out.
            slice::from_raw_parts(self.elements.as_ptr().add(self.front), self.back - self.front)
        }
    }
}

impl<T, A: RawAlloc> IntoIter<T, A> {
    pub(crate) fn new(mut region: Region<T, A>) -> Self {
        let back = region.len();
        unsafe {
            // SAFETY: the iterator tracks the live range itself from now on.
            region.set_len(0);
        }
        IntoIter { region, front: 0, back }
    }

    /// View the remaining elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        unsafe {
            // SAFETY: `[front, back)` are the live slots.
            slice::from_raw_parts(self.region.as_ptr().add(self.front), self.back - self.front)
        }
    }

    /// View the remaining elements as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe {
            // SAFETY: `[front, back)` are the live slots, unaliased since we borrow `self`.
            slice::from_raw_parts_mut(
                self.region.as_mut_ptr().add(self.front),
                self.back - self.front)
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.front == self.back {
            return None;
        }

        let item = &self.elements[self.front];
        self.front += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.front..self.back).size_hint()
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        if self.front == self.back {
            return None;
        }

        self.back -= 1;
        Some(&self.elements[self.back])
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> { }

impl<T> iter::FusedIterator for Iter<'_, T> { }

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter { ..*self }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<&'a mut T> {
        if self.front == self.back {
            return None;
        }

        let item = unsafe {
            // SAFETY: in bounds, and every index is yielded at most once.
            &mut *self.elements.as_ptr().add(self.front)
        };
        self.front += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.front..self.back).size_hint()
    }
}

impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {
    fn next_back(&mut self) -> Option<&'a mut T> {
        if self.front == self.back {
            return None;
        }

        self.back -= 1;
        unsafe {
            // SAFETY: in bounds, and every index is yielded at most once.
            Some(&mut *self.elements.as_ptr().add(self.back))
        }
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> { }

impl<T> iter::FusedIterator for IterMut<'_, T> { }

impl<T, A: RawAlloc> Iterator for IntoIter<T, A> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.front == self.back {
            return None;
        }

        let item = unsafe {
            // SAFETY: live slot, and leaves the live range right after.
            ptr::read(self.region.as_ptr().add(self.front))
        };
        self.front += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.front..self.back).size_hint()
    }
}

impl<T, A: RawAlloc> DoubleEndedIterator for IntoIter<T, A> {
    fn next_back(&mut self) -> Option<T> {
        if self.front == self.back {
            return None;
        }

        self.back -= 1;
        unsafe {
            // SAFETY: live slot, and already removed from the live range.
            Some(ptr::read(self.region.as_ptr().add(self.back)))
        }
    }
}

impl<T, A: RawAlloc> ExactSizeIterator for IntoIter<T, A> { }

impl<T, A: RawAlloc> iter::FusedIterator for IntoIter<T, A> { }

impl<T, A: RawAlloc> Drop for IntoIter<T, A> {
    fn drop(&mut self) {
        let remaining: *mut [T] = self.as_mut_slice();
        // Nothing is live any more, even if one of the drops panics.
        self.front = self.back;
        unsafe {
            ptr::drop_in_place(remaining)
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter").field(&self.as_slice()).finish()
    }
}

impl<T: fmt::Debug> fmt::Debug for IterMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IterMut").field(&self.as_slice()).finish()
    }
}

impl<T: fmt::Debug, A: RawAlloc> fmt::Debug for IntoIter<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

// SAFETY: behaves like `&mut [T]`.
unsafe impl<T: Send> Send for IterMut<'_, T> { }
// SAFETY: behaves like `&mut [T]`.
unsafe impl<T: Sync> Sync for IterMut<'_, T> { }

#[cfg(test)]
mod tests {
    use crate::Vector;

    use core::cell::Cell;

    #[derive(Debug)]
    struct DropCounted<'a>(&'a Cell<usize>);

    impl Drop for DropCounted<'_> {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn both_ends() {
        let vec: Vector<u32> = (0..6).collect();
        let mut iter = vec.iter();

        assert_eq!(iter.len(), 6);
        assert_eq!(iter.next(), Some(&0));
        assert_eq!(iter.next_back(), Some(&5));
        assert_eq!(iter.as_slice(), [1, 2, 3, 4]);
        assert_eq!(iter.len(), 4);
        assert!(iter.rev().eq([4, 3, 2, 1].iter()));
    }

    #[test]
    fn mutate_in_place() {
        let mut vec: Vector<u32> = (0..4).collect();
        for element in vec.iter_mut().rev() {
            *element *= 10;
        }
        assert_eq!(vec.as_slice(), [0, 10, 20, 30]);
    }

    #[test]
    fn into_iter_drops_rest() {
        let drops = Cell::new(0);
        let mut vec = Vector::new();
        for _ in 0..5 {
            vec.push(DropCounted(&drops)).unwrap();
        }

        let mut iter = vec.into_iter();
        let first = iter.next().unwrap();
        let last = iter.next_back().unwrap();
        assert_eq!(iter.len(), 3);
        assert_eq!(drops.get(), 0);

        drop(iter);
        assert_eq!(drops.get(), 3);
        drop((first, last));
        assert_eq!(drops.get(), 5);
    }

    #[test]
    fn zst() {
        let mut vec = Vector::new();
        for _ in 0..10 {
            vec.push(()).unwrap();
        }
        assert_eq!(vec.iter().count(), 10);
        assert_eq!(vec.iter_mut().rev().count(), 10);
        assert_eq!(vec.into_iter().count(), 10);
    }
}

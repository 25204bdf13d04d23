//! Position handles into the live elements of a vector.
use core::{cmp, fmt, ops};

use crate::iter::Iter;

/// A position within the elements of a [`Vector`], like a random access iterator.
///
/// Valid positions are `0..=len`, where `len` is the *end* position that does not refer to an
/// element. A cursor is a small `Copy` value and does not own anything.
///
/// The cursor borrows the vector. As a consequence the vector can not reallocate, insert or erase
/// while any cursor into it exists, and a cursor can never observe a slot that was moved or
/// released after it was created. Re-fetch cursors after mutating.
///
/// Cursors compare equal if they point to the same position of the same vector. Ordering is only
/// defined between cursors of the same vector, `partial_cmp` returns `None` otherwise. Vectors
/// are told apart by identity, not by their memory, so this holds for empty vectors too.
///
/// ```
/// use region_vec::Vector;
///
/// let vec: Vector<u32> = (1..=4).collect();
/// let mut cursor = vec.begin();
/// assert_eq!(cursor.get(), Some(&1));
///
/// cursor += 2;
/// assert_eq!(cursor.get(), Some(&3));
/// assert_eq!(vec.end() - cursor, 2);
/// assert!(cursor < vec.end());
///
/// cursor.move_next();
/// cursor.move_next();
/// assert_eq!(cursor, vec.end());
/// assert_eq!(cursor.get(), None);
/// ```
///
/// [`Vector`]: ../vector/struct.Vector.html
pub struct Cursor<'a, T> {
    /// Address of the vector, stable while it is borrowed.
    owner: usize,
    elements: &'a [T],
    index: usize,
}

impl<'a, T> Cursor<'a, T> {
    /// Create a cursor at `index` into the live elements of `owner`.
    ///
    /// ## Panics
    /// This method panics if `index > elements.len()`.
    pub(crate) fn new<V>(owner: &'a V, elements: &'a [T], index: usize) -> Self {
        assert!(index <= elements.len(), "cursor position out of bounds");
        Cursor {
            owner: owner as *const V as usize,
            elements,
            index,
        }
    }

    /// The element at the position, or `None` at the end.
    pub fn get(&self) -> Option<&'a T> {
        self.elements.get(self.index)
    }

    /// The position as an index into the vector.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns `true` if this is the end position.
    pub fn is_end(&self) -> bool {
        self.index == self.elements.len()
    }

    /// Step to the next position.
    ///
    /// ## Panics
    /// This method panics if the cursor is already at the end.
    pub fn move_next(&mut self) {
        *self += 1;
    }

    /// Step to the previous position.
    ///
    /// ## Panics
    /// This method panics if the cursor is at the first position.
    pub fn move_prev(&mut self) {
        *self -= 1;
    }

    /// Move the cursor by a signed distance, if the result stays within `0..=len`.
    pub fn checked_offset(self, delta: isize) -> Option<Self> {
        let index = self.index.checked_add_signed(delta)?;
        if index > self.elements.len() {
            return None;
        }

        Some(Cursor { index, ..self })
    }

    /// The signed distance from `origin` to this cursor.
    ///
    /// Both cursors must belong to the same vector, the result is meaningless otherwise.
    ///
    /// ## Panics
    /// This method panics if the distance does not fit into an `isize`, which is only possible for
    /// vectors of zero-sized elements.
    pub fn offset_from(&self, origin: &Self) -> isize {
        debug_assert!(self.same_vector(origin), "cursors of different vectors");
        let distance = if self.index >= origin.index {
            isize::try_from(self.index - origin.index)
        } else {
            isize::try_from(origin.index - self.index).map(|distance| -distance)
        };

        match distance {
            Ok(distance) => distance,
            Err(_) => panic!("cursor distance exceeds isize::MAX"),
        }
    }

    /// The elements from this position to the end.
    pub fn as_slice(&self) -> &'a [T] {
        &self.elements[self.index..]
    }

    /// Iterate the elements from this position to the end.
    pub fn iter(&self) -> Iter<'a, T> {
        Iter::new(self.as_slice())
    }

    fn same_vector(&self, other: &Self) -> bool {
        self.owner == other.owner
    }
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cursor<'_, T> { }

impl<T> PartialEq for Cursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.same_vector(other) && self.index == other.index
    }
}

impl<T> Eq for Cursor<'_, T> { }

impl<T> PartialOrd for Cursor<'_, T> {
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        if self.same_vector(other) {
            Some(self.index.cmp(&other.index))
        } else {
            None
        }
    }
}

impl<T> ops::Add<usize> for Cursor<'_, T> {
    type Output = Self;

    fn add(self, n: usize) -> Self {
        let index = self.index.checked_add(n);
        match index {
            Some(index) if index <= self.elements.len() => Cursor { index, ..self },
            _ => panic!("cursor moved out of bounds"),
        }
    }
}

impl<T> ops::Sub<usize> for Cursor<'_, T> {
    type Output = Self;

    fn sub(self, n: usize) -> Self {
        match self.index.checked_sub(n) {
            Some(index) => Cursor { index, ..self },
            None => panic!("cursor moved out of bounds"),
        }
    }
}

impl<T> ops::AddAssign<usize> for Cursor<'_, T> {
    fn add_assign(&mut self, n: usize) {
        *self = *self + n;
    }
}

impl<T> ops::SubAssign<usize> for Cursor<'_, T> {
    fn sub_assign(&mut self, n: usize) {
        *self = *self - n;
    }
}

impl<'a, T> ops::Sub for Cursor<'a, T> {
    type Output = isize;

    fn sub(self, origin: Cursor<'a, T>) -> isize {
        self.offset_from(&origin)
    }
}

impl<T: fmt::Debug> fmt::Debug for Cursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("index", &self.index)
            .field("element", &self.get())
            .finish()
    }
}

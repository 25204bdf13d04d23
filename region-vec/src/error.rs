//! Errors reported by the container.
use core::fmt;

/// Errors that can occur during vector operations.
///
/// A failing operation never modifies the vector. Panics of the element type's `Clone` or `Drop`
/// are not represented here, they unwind through the vector which stays consistent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Error {
    /// The allocator could not provide a region of the requested size.
    Alloc {
        /// Number of elements the region was requested for.
        capacity: usize,
    },
    /// An index past the live elements.
    IndexOutOfRange {
        /// The index that was requested.
        index: usize,
        /// Number of live elements at the time.
        len: usize,
    },
    /// The vector has no elements.
    Empty,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Alloc { capacity } => {
                write!(f, "allocation failed: no region for {capacity} elements")
            }
            Self::IndexOutOfRange { index, len } => {
                write!(f, "index out of range: the index is {index} but the length is {len}")
            }
            Self::Empty => f.write_str("the vector is empty"),
        }
    }
}

impl core::error::Error for Error {}

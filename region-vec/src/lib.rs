//! A growable, contiguous vector on raw allocator primitives.
//!
//! The [`Vector`] owns a single [`Region`]: uninitialized memory for a number of elements, obtained
//! from an allocator handle implementing [`RawAlloc`]. Elements are constructed into the region
//! in place, moved bitwise when it is replaced by a larger one, and dropped when removed. The
//! handle defaults to [`Global`] but any local allocator, for example a `static_alloc::Bump`, can
//! stand in. Allocation failure is reported as an [`Error`] and never leaves a container modified.
//!
//! Positions inside a vector are described by a [`Cursor`], a random access position that borrows
//! the vector. Any operation that could invalidate it requires a mutable borrow and thus ends the
//! cursor's lifetime first.
//!
//! [`Vector`]: vector/struct.Vector.html
//! [`Region`]: region/struct.Region.html
//! [`RawAlloc`]: https://docs.rs/alloc-traits
//! [`Global`]: https://docs.rs/alloc-traits
//! [`Error`]: enum.Error.html
//! [`Cursor`]: cursor/struct.Cursor.html

// Copyright 2019-2021 Andreas Molzer
#![no_std]
#![deny(missing_docs)]

#[cfg(test)]
extern crate std;

pub mod cursor;
mod error;
pub mod iter;
pub mod region;
pub mod vector;

pub use alloc_traits::{Global, RawAlloc};

pub use crate::cursor::Cursor;
pub use crate::error::Error;
pub use crate::vector::Vector;

// Can't use the macro-call itself within the `doc` attribute. So force it to eval it as part of
// the macro invocation.
// 
// The inspiration for the macro and implementation is from
// <https://github.com/GuillaumeGomez/doc-comment>
//
// MIT License
//
// Copyright (c) 2018 Guillaume Gomez
macro_rules! insert_as_doc {
    { $content:expr } => {
        #[doc = $content] extern { }
    }
}

// Provides the README.md as doc, to ensure the example works!
insert_as_doc!(include_str!("../Readme.md"));

//! The allocator contract consumed by `region-vec`.
//!
//! Defines a trait, similar to `alloc::GlobalAlloc`, that a container can be generic over. Unlike
//! the standard library one it does not presume global uniqueness and static lifetime of the
//! memory resource provider, and it never receives empty layouts. A container holds an allocator
//! *handle*: a cheap, clonable value such as [`Global`] or a shared reference to a local
//! allocator.
//!
//! There are additional independent crates building on-top:
//! * [`static-alloc`]: A bump allocator drawing from a memory region embedded in its own value,
//!   usable as a bounded local allocator.
//! * [`region-vec`]: A growable vector managing a raw region obtained from any implementor of the
//!   trait defined here.
//!
//! [`Global`]: struct.Global.html
//! [`static-alloc`]: https://crates.io/crates/static-alloc
//! [`region-vec`]: https://crates.io/crates/region-vec

// Copyright 2019-2021 Andreas Molzer
#![no_std]
#![deny(missing_docs)]

extern crate alloc;

mod global;
mod layout;
mod raw;

pub use crate::global::Global;
pub use crate::layout::{Layout, NonZeroLayout};
pub use crate::raw::{Allocation, RawAlloc};

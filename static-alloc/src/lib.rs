//! A bump allocator with static, inline storage.
//!
//! Provides an allocator for resource constrained environments and for tests that need a memory
//! resource with a hard, predictable limit. The [`Bump`] implements the [`RawAlloc`] contract so
//! any container generic over that trait can draw from it through a shared reference.
//!
//! ## Usage
//!
//! ```rust
//! use alloc_traits::NonZeroLayout;
//! use static_alloc::Bump;
//!
//! let local: Bump<[u64; 2]> = Bump::uninit();
//! let layout = NonZeroLayout::new::<u64>().unwrap();
//!
//! let first = local.alloc(layout).unwrap();
//! let _second = local.alloc(layout).unwrap();
//! // Exhausted the space.
//! assert!(local.alloc(layout).is_none());
//! # let _ = first;
//! ```
//!
//! [`Bump`]: bump/struct.Bump.html
//! [`RawAlloc`]: https://docs.rs/alloc-traits

// Copyright 2019 Andreas Molzer
#![no_std]
#![deny(missing_docs)]

pub mod bump;
pub use bump::{Bump, Level};

//! Contig: a growable contiguous sequence container built on a raw-memory
//! ownership primitive.
//!
//! The design separates two concerns that general-purpose containers
//! usually fuse:
//!
//! - **Memory ownership** lives in [`Block`] (from `contig-storage`): an
//!   exclusively-owned, uninitialized allocation that knows only slot
//!   counts and addresses.
//! - **Object lifetime** lives in [`Contig`]: one block plus a count of
//!   how many leading slots hold live elements, with every construction
//!   and destruction driven here.
//!
//! # Quick start
//!
//! ```rust
//! use contig::Contig;
//!
//! let mut seq = Contig::new();
//! seq.push(1);
//! seq.push(2);
//! seq.push(3);
//! assert_eq!(seq.as_slice(), &[1, 2, 3]);
//!
//! seq.insert(1, 9);
//! assert_eq!(seq.as_slice(), &[1, 9, 2, 3]);
//!
//! let removed = seq.remove(2);
//! assert_eq!(removed, 2);
//! assert_eq!(seq.pop(), Some(3));
//! assert_eq!(seq.as_slice(), &[1, 9]);
//! ```
//!
//! # Panic safety
//!
//! A panicking element constructor, clone, or drop never corrupts or leaks
//! the container. Reallocating operations hold the strong guarantee: they
//! either complete or leave the sequence exactly as it was. See the
//! [`seq`] module documentation for the per-operation contracts.
//!
//! Along with `contig-storage`, this is one of the two crates in the
//! workspace that contain `unsafe` code. Every `unsafe` block carries a
//! `// SAFETY:` comment.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod seq;

pub use contig_storage::{AllocError, Block};
pub use seq::Contig;

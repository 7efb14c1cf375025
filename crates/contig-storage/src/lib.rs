//! Raw storage blocks for the contig container library.
//!
//! This crate is the allocation leaf of the workspace: a [`Block`] owns an
//! untyped, uninitialized allocation sized in element slots and knows
//! nothing about element lifetime. Construction and destruction of the
//! values that live in those slots is entirely the owning container's
//! responsibility — see the `contig` crate.
//!
//! Along with `contig` itself, this is one of the two crates in the
//! workspace that contain `unsafe` code. Every `unsafe` block carries a
//! `// SAFETY:` comment.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod block;
pub mod error;

pub use block::Block;
pub use error::AllocError;

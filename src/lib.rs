//! An 8-ary min-heap family over `u16` keys, accelerated by a
//! single-instruction minimum-position reduction (SSE4.1 `PHMINPOSUW`, or a
//! portable equivalent) for the per-node "pick the smallest of eight
//! children" step that dominates heap work.
//!
//! Four cooperating layouts are provided:
//!
//! - [`Heap8`] - bare `u16` keys.
//! - [`Heap8Aux`] - keys with a parallel shadow payload array.
//! - [`Heap8Embed`] - keys with the payload interleaved per 8-element node.
//! - [`merge`] - a multiway merger built on [`Heap8Aux`].
//!
//! [`StdHeap`] is a textbook binary heap kept only for differential testing
//! and benchmarking; it is not meant for production use.
//!
//! # Sentinel contract
//!
//! [`util::K_MAX`] (`0xFFFF`) is reserved to pad unused lanes within the
//! final node of every heap's backing storage. Callers should avoid
//! inserting `0xFFFF` as a live key; `push`/`push_entry` reject it with a
//! debug assertion (see the crate's error-handling notes in each type).
//!
//! # Examples
//!
//! ```rust
//! use minpos8::Heap8;
//!
//! let mut h = Heap8::new();
//! h.push(2).unwrap();
//! h.push(1).unwrap();
//! h.push(3).unwrap();
//! assert_eq!(h.pop(), 1);
//! assert_eq!(h.pop(), 2);
//! assert_eq!(h.pop(), 3);
//! ```
#![cfg_attr(feature = "simd", feature(portable_simd))]

mod error;
mod heap8;
mod heap8_aux;
mod heap8_embed;
mod merge;
mod std_heap;
pub mod util;
pub mod vector;

pub use error::{HeapError, HeapResult};
pub use heap8::Heap8;
pub use heap8_aux::{Entry, Heap8Aux};
pub use heap8_embed::Heap8Embed;
pub use merge::{merge, Stream};
pub use std_heap::StdHeap;
pub use vector::{minpos, sort8, V};

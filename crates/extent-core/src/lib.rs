// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Extent Core
//!
//! Exact algebra over half-open integer blocks `[top, bottom)`: the
//! primitives a free-space tracker, extent allocator or range index is built
//! on. Blocks are immutable values; every operation returns new blocks.
//!
//! ## Modules
//!
//! - `block`: The [`Block`](block::Block) type with normalizing
//!   construction, lexicographic ordering, membership and geometric
//!   predicates, point iteration and `Range` conversions, plus the algebra:
//!   union (`+`), single and array difference (`-`), coalescing merge,
//!   padding, limiting and intersection (`&`).
//! - `algorithm`: Invariant checks and searches over sorted block slices.
//! - `error`: [`DisjointRangeError`](error::DisjointRangeError), raised when
//!   limiting a block by a limiter it does not reach.
//!
//! ## Example
//!
//! ```rust
//! use extent_core::block::Block;
//!
//! let disk = Block::new(0, 1024);
//! let used = [Block::new(0, 64), Block::new(512, 600), Block::new(100, 128)];
//!
//! let free = disk - &used[..];
//! assert_eq!(
//!     free,
//!     vec![Block::new(64, 100), Block::new(128, 512), Block::new(600, 1024)]
//! );
//! ```

pub mod algorithm;
pub mod block;
pub mod error;

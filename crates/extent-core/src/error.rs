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

//! Errors raised by the block algebra.

use crate::block::Block;
use num_traits::PrimInt;

/// Returned by [`Block::limited`] when the block and the limiter are
/// separated by a gap, so no clamped block exists.
///
/// # Examples
///
/// ```rust
/// # use extent_core::block::Block;
///
/// let err = Block::new(150, 160).limited(Block::new(0, 100)).unwrap_err();
/// assert_eq!(
///     err.to_string(),
///     "block [150, 160) lies outside limiter [0, 100)"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("block {block} lies outside limiter {limiter}")]
pub struct DisjointRangeError<T>
where
    T: PrimInt,
{
    block: Block<T>,
    limiter: Block<T>,
}

impl<T> DisjointRangeError<T>
where
    T: PrimInt,
{
    #[inline]
    pub(crate) fn new(block: Block<T>, limiter: Block<T>) -> Self {
        Self { block, limiter }
    }

    /// The block that was being limited.
    #[inline]
    pub fn block(&self) -> Block<T> {
        self.block
    }

    /// The limiter it failed to overlap.
    #[inline]
    pub fn limiter(&self) -> Block<T> {
        self.limiter
    }
}

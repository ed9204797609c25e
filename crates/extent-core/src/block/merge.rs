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

//! Coalescing a collection of blocks into a minimal sorted set.

use crate::algorithm::are_coalesced;
use crate::block::Block;
use num_traits::PrimInt;
use std::cmp::max;

/// Coalesces `blocks` into the minimal sorted sequence of disjoint blocks
/// covering the same points.
///
/// Blocks that overlap or touch are fused. The output is sorted ascending and
/// no two output blocks overlap or touch.
///
/// # Examples
///
/// ```rust
/// # use extent_core::block::{Block, merge::coalesce};
///
/// let merged = coalesce([Block::new(30, 40), Block::new(10, 20), Block::new(20, 25)]);
/// assert_eq!(merged, vec![Block::new(10, 25), Block::new(30, 40)]);
/// ```
pub fn coalesce<T, I>(blocks: I) -> Vec<Block<T>>
where
    T: PrimInt,
    I: IntoIterator<Item = Block<T>>,
{
    let mut sorted: Vec<Block<T>> = blocks.into_iter().collect();
    sorted.sort_unstable();
    let inputs = sorted.len();

    let mut merged: Vec<Block<T>> = Vec::with_capacity(inputs);
    let mut sorted = sorted.into_iter();
    if let Some(first) = sorted.next() {
        let mut current = first;
        for next in sorted {
            if next.top() <= current.bottom() {
                current =
                    Block::from_ordered(current.top(), max(current.bottom(), next.bottom()));
            } else {
                merged.push(current);
                current = next;
            }
        }
        merged.push(current);
    }

    debug_assert!(
        are_coalesced(&merged),
        "`coalesce` produced overlapping or touching blocks"
    );
    tracing::trace!(inputs, outputs = merged.len(), "coalesced blocks");
    merged
}

impl<T> Block<T>
where
    T: PrimInt,
{
    /// Merges `self` with `others` into the minimal sorted sequence of
    /// disjoint blocks.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use extent_core::block::Block;
    ///
    /// let a = Block::new(10, 20);
    /// let others = [
    ///     Block::new(20, 25),
    ///     Block::new(30, 40),
    ///     Block::new(35, 45),
    ///     Block::new(55, 65),
    /// ];
    ///
    /// assert_eq!(
    ///     a.merge(&others),
    ///     vec![Block::new(10, 25), Block::new(30, 45), Block::new(55, 65)]
    /// );
    /// ```
    pub fn merge(&self, others: &[Self]) -> Vec<Self> {
        coalesce(std::iter::once(*self).chain(others.iter().copied()))
    }
}

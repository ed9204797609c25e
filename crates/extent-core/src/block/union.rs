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

//! Pairwise union of two blocks.

use crate::block::Block;
use num_traits::PrimInt;
use smallvec::SmallVec;
use std::cmp::{max, min};
use std::ops::Add;

impl<T> Block<T>
where
    T: PrimInt,
{
    /// Calculates the union `self + other`.
    ///
    /// Overlapping or touching blocks collapse into the single block spanning
    /// both. Otherwise both blocks are returned unchanged, sorted ascending.
    ///
    /// # Returns
    ///
    /// A `SmallVec` containing:
    /// * 1 block: If one block contains the other, or they overlap or touch.
    /// * 2 blocks: If a gap separates them.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use extent_core::block::Block;
    ///
    /// let a = Block::new(100, 200);
    ///
    /// assert_eq!(a.union(Block::new(190, 210)).as_slice(), &[Block::new(100, 210)]);
    /// assert_eq!(
    ///     a.union(Block::new(10, 20)).as_slice(),
    ///     &[Block::new(10, 20), Block::new(100, 200)]
    /// );
    /// ```
    pub fn union(&self, other: Self) -> SmallVec<Self, 2> {
        if !self.intersects_or_adjacent(other) {
            return if *self <= other {
                smallvec::smallvec![*self, other]
            } else {
                smallvec::smallvec![other, *self]
            };
        }

        if self.contains_block(other) {
            return smallvec::smallvec![*self];
        }
        if other.contains_block(*self) {
            return smallvec::smallvec![other];
        }

        smallvec::smallvec![Self::from_ordered(
            min(self.top(), other.top()),
            max(self.bottom(), other.bottom()),
        )]
    }
}

impl<T> Add for Block<T>
where
    T: PrimInt,
{
    type Output = SmallVec<Self, 2>;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

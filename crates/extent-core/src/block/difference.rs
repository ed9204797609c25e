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

//! Subtraction of one block, or of a collection of blocks, from a block.

use crate::block::Block;
use num_traits::PrimInt;
use smallvec::SmallVec;
use std::ops::Sub;

impl<T> Block<T>
where
    T: PrimInt,
{
    /// Calculates the set difference `self - other`.
    ///
    /// This removes the portion of `self` that overlaps with `other`. A
    /// `self` lying inside `other` (shared edges included) vanishes, even when
    /// `self` is empty. Otherwise blocks that only touch do not overlap, and
    /// an empty `other` removes nothing. No empty fragment is ever produced
    /// from a non-empty `self`.
    ///
    /// # Returns
    ///
    /// A `SmallVec` containing:
    /// * 0 blocks: If `other` covers `self`.
    /// * 1 block: If `other` clips one edge of `self` or does not overlap it.
    /// * 2 blocks: If `other` lies strictly inside `self`, splitting it in two.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use extent_core::block::Block;
    ///
    /// let a = Block::new(100, 200);
    ///
    /// let diff = a.difference(Block::new(150, 170));
    /// assert_eq!(diff.as_slice(), &[Block::new(100, 150), Block::new(170, 200)]);
    ///
    /// assert!(a.difference(Block::new(90, 210)).is_empty());
    /// ```
    pub fn difference(&self, other: Self) -> SmallVec<Self, 2> {
        if other.contains_block(*self) {
            return SmallVec::new();
        }
        if other.is_empty() || !self.intersects(other) {
            return smallvec::smallvec![*self];
        }

        let mut result = SmallVec::new();
        if self.top() < other.top() {
            result.push(Self::from_ordered(self.top(), other.top()));
        }
        if self.bottom() > other.bottom() {
            result.push(Self::from_ordered(other.bottom(), self.bottom()));
        }
        result
    }

    /// Removes every block of `others` from `self`.
    ///
    /// `others` may be unsorted and may overlap each other. The remaining
    /// fragments are returned sorted ascending and pairwise disjoint.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use extent_core::block::Block;
    ///
    /// let a = Block::new(100, 200);
    /// let holes = [Block::new(90, 110), Block::new(130, 140), Block::new(180, 220)];
    ///
    /// assert_eq!(
    ///     a.difference_all(&holes),
    ///     vec![Block::new(110, 130), Block::new(140, 180)]
    /// );
    /// ```
    pub fn difference_all(&self, others: &[Self]) -> Vec<Self> {
        let mut fragments = vec![*self];
        for &other in others {
            if fragments.is_empty() {
                break;
            }
            // Fragments stay sorted: each one is replaced in place by its own
            // sub-fragments, which never leave its bounds.
            fragments = fragments
                .into_iter()
                .flat_map(|fragment| fragment.difference(other))
                .collect();
        }

        tracing::trace!(
            subtrahends = others.len(),
            fragments = fragments.len(),
            "subtracted blocks"
        );
        fragments
    }
}

impl<T> Sub for Block<T>
where
    T: PrimInt,
{
    type Output = SmallVec<Self, 2>;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.difference(rhs)
    }
}

impl<T> Sub<&[Block<T>]> for Block<T>
where
    T: PrimInt,
{
    type Output = Vec<Self>;

    #[inline]
    fn sub(self, rhs: &[Block<T>]) -> Self::Output {
        self.difference_all(rhs)
    }
}

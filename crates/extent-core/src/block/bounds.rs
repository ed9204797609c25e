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

//! Growing, clamping and intersecting a block against its surroundings.

use crate::block::Block;
use crate::error::DisjointRangeError;
use num_traits::PrimInt;
use std::cmp::{max, min};
use std::ops::BitAnd;

impl<T> Block<T>
where
    T: PrimInt,
{
    /// Grows the block outward by `top_pad` above and `bottom_pad` below.
    ///
    /// Padding never shrinks a block: a pad that is not positive leaves its
    /// edge unchanged. Edges saturate at the bounds of `T`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use extent_core::block::Block;
    ///
    /// let a = Block::new(100, 200);
    /// assert_eq!(a.padded(10, 20), Block::new(90, 220));
    /// assert_eq!(a.padded(-10, -20), a);
    /// ```
    pub fn padded(&self, top_pad: T, bottom_pad: T) -> Self {
        let top = if top_pad > T::zero() {
            self.top().saturating_sub(top_pad)
        } else {
            self.top()
        };
        let bottom = if bottom_pad > T::zero() {
            self.bottom().saturating_add(bottom_pad)
        } else {
            self.bottom()
        };
        Self::from_ordered(top, bottom)
    }

    /// Clamps the block to fit inside `limiter`.
    ///
    /// A block already inside `limiter` is returned unchanged. A block that
    /// only touches `limiter` is clamped to an empty block on the shared edge.
    ///
    /// # Errors
    ///
    /// Returns [`DisjointRangeError`] if the block and `limiter` are separated
    /// by a gap, since no clamped block exists.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use extent_core::block::Block;
    ///
    /// let limiter = Block::new(0, 100);
    /// assert_eq!(Block::new(-10, 10).limited(limiter), Ok(Block::new(0, 10)));
    /// assert_eq!(Block::new(90, 110).limited(limiter), Ok(Block::new(90, 100)));
    /// assert!(Block::new(150, 160).limited(limiter).is_err());
    /// ```
    pub fn limited(&self, limiter: Self) -> Result<Self, DisjointRangeError<T>> {
        let top = max(self.top(), limiter.top());
        let bottom = min(self.bottom(), limiter.bottom());
        if top > bottom {
            tracing::debug!("refusing to limit a block by a disjoint limiter");
            return Err(DisjointRangeError::new(*self, limiter));
        }
        Ok(Self::from_ordered(top, bottom))
    }

    /// Calculates the intersection of two blocks.
    ///
    /// Returns `None` if the blocks share no point.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use extent_core::block::Block;
    ///
    /// let a = Block::new(0, 10);
    /// assert_eq!(a.intersection(Block::new(5, 15)), Some(Block::new(5, 10)));
    /// assert_eq!(a.intersection(Block::new(10, 15)), None);
    /// ```
    #[inline]
    pub fn intersection(&self, other: Self) -> Option<Self> {
        let top = max(self.top(), other.top());
        let bottom = min(self.bottom(), other.bottom());
        if top < bottom {
            Some(Self::from_ordered(top, bottom))
        } else {
            None
        }
    }
}

impl<T> BitAnd for Block<T>
where
    T: PrimInt,
{
    type Output = Option<Self>;

    #[inline]
    fn bitand(self, rhs: Self) -> Self::Output {
        self.intersection(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_padded_positive() {
        let a = Block::new(100, 200);
        let padded = a.padded(10, 20);
        assert_eq!(padded.top(), 90);
        assert_eq!(padded.bottom(), 220);
    }

    #[test]
    fn test_padded_negative_is_noop() {
        let a = Block::new(100, 200);
        let padded = a.padded(-10, -20);
        assert_eq!(padded.top(), 100);
        assert_eq!(padded.bottom(), 200);
    }

    #[test]
    fn test_padded_mixed_signs() {
        let a = Block::new(100, 200);
        assert_eq!(a.padded(10, -20), Block::new(90, 200));
        assert_eq!(a.padded(0, 5), Block::new(100, 205));
    }

    #[test]
    fn test_padded_saturates() {
        let a: Block<u8> = Block::new(5, 250);
        assert_eq!(a.padded(10, 10), Block::new(0, 255));

        let b: Block<i8> = Block::new(-120, 120);
        assert_eq!(b.padded(100, 100), Block::new(i8::MIN, i8::MAX));
    }

    #[test]
    fn test_limited_trims_top() {
        let result = Block::new(-10, 10).limited(Block::new(0, 100)).unwrap();
        assert_eq!(result.top(), 0);
        assert_eq!(result.bottom(), 10);
    }

    #[test]
    fn test_limited_trims_bottom() {
        let result = Block::new(90, 110).limited(Block::new(0, 100)).unwrap();
        assert_eq!(result.top(), 90);
        assert_eq!(result.bottom(), 100);
    }

    #[test]
    fn test_limited_inside_is_unchanged() {
        let a = Block::new(20, 30);
        assert_eq!(a.limited(Block::new(0, 100)), Ok(a));
    }

    #[test]
    fn test_limited_larger_than_limiter() {
        let limiter = Block::new(0, 100);
        assert_eq!(Block::new(-50, 150).limited(limiter), Ok(limiter));
    }

    #[test]
    fn test_limited_touching_yields_empty_block() {
        let limiter = Block::new(0, 100);
        assert_eq!(Block::new(-10, 0).limited(limiter), Ok(Block::new(0, 0)));
        assert_eq!(
            Block::new(100, 110).limited(limiter),
            Ok(Block::new(100, 100))
        );
    }

    #[test]
    fn test_limited_disjoint_is_error() {
        let limiter = Block::new(0, 100);
        let err = Block::new(150, 160).limited(limiter).unwrap_err();
        assert_eq!(err.block(), Block::new(150, 160));
        assert_eq!(err.limiter(), limiter);
        assert!(Block::new(-20, -10).limited(limiter).is_err());
    }

    #[test]
    fn test_intersection() {
        let a = Block::new(0, 10);
        assert_eq!(a & Block::new(5, 15), Some(Block::new(5, 10)));
        assert_eq!(a & Block::new(2, 8), Some(Block::new(2, 8)));
        assert_eq!(a & Block::new(10, 20), None);
        assert_eq!(a & Block::new(12, 20), None);
    }
}

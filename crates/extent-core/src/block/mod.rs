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

//! # Blocks
//!
//! The [`Block`] value type: an immutable half-open integer interval
//! `[top, bottom)`. Construction normalizes the bounds, so every block in
//! existence satisfies `top <= bottom`.
//!
//! The algebra is split over the submodules:
//!
//! - `union`: pairwise union (`a + b`).
//! - `difference`: single (`a - b`) and array (`a - &[b, c, ..]`) subtraction.
//! - `merge`: coalescing a collection into a minimal, sorted, disjoint set.
//! - `bounds`: growing (`padded`), clamping (`limited`) and intersecting.

pub mod bounds;
pub mod difference;
pub mod merge;
pub mod union;

use num_traits::PrimInt;
use std::iter::FusedIterator;

/// A half-open integer interval `[top, bottom)`.
///
/// `top` is inclusive, `bottom` is exclusive. A block with `top == bottom`
/// is valid and covers no points.
///
/// Ordering is lexicographic on `(top, bottom)`; equality is structural.
///
/// # Examples
///
/// ```rust
/// # use extent_core::block::Block;
///
/// let block = Block::new(6, 2);
/// assert_eq!(block.top(), 2);
/// assert_eq!(block.bottom(), 6);
/// assert_eq!(block.len(), 4);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Block<T>
where
    T: PrimInt,
{
    // Field order drives the derived `Ord`.
    top: T,
    bottom: T,
}

/// An iterator over the integer points covered by a [`Block`].
///
/// # Examples
///
/// ```rust
/// # use extent_core::block::Block;
///
/// let points: Vec<_> = Block::new(1, 5).iter().collect();
/// assert_eq!(points, vec![1, 2, 3, 4]);
/// ```
#[derive(Debug, Clone)]
pub struct BlockPoints<T>
where
    T: PrimInt,
{
    current: T,
    bottom: T,
}

impl<T> Iterator for BlockPoints<T>
where
    T: PrimInt,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current < self.bottom {
            let point = self.current;
            self.current = self.current + T::one();
            Some(point)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(distance(self.current, self.bottom)) {
            Ok(remaining) => (remaining, Some(remaining)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl<T> DoubleEndedIterator for BlockPoints<T>
where
    T: PrimInt,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.current < self.bottom {
            self.bottom = self.bottom - T::one();
            Some(self.bottom)
        } else {
            None
        }
    }
}

impl<T> ExactSizeIterator for BlockPoints<T>
where
    T: PrimInt,
{
    /// Returns the number of points left to yield.
    ///
    /// # Panics
    ///
    /// Panics if the remaining width exceeds `usize::MAX`, which only blocks
    /// over 128-bit (or, on narrow targets, 64-bit) integers can reach.
    fn len(&self) -> usize {
        usize::try_from(distance(self.current, self.bottom))
            .expect("BlockPoints: remaining length exceeds usize::MAX")
    }
}

impl<T> FusedIterator for BlockPoints<T> where T: PrimInt {}

/// Returns `high - low` as an unsigned width.
///
/// Every width between two values of a primitive integer type fits in `u128`,
/// so this never overflows.
#[inline]
fn distance<T>(low: T, high: T) -> u128
where
    T: PrimInt,
{
    debug_assert!(low <= high, "called `distance` with low greater than high");
    if let (Some(low), Some(high)) = (low.to_i128(), high.to_i128()) {
        // The true difference lies in `0..=u128::MAX`, so the wrapped bits are exact.
        return high.wrapping_sub(low) as u128;
    }
    // Only `u128` values above `i128::MAX` get here, and those are always
    // representable as `u128`.
    let low = low.to_u128().unwrap_or(0);
    let high = high.to_u128().unwrap_or(u128::MAX);
    high - low
}

impl<T> Block<T>
where
    T: PrimInt,
{
    /// Creates a new block spanning `x` and `y`, in either order.
    ///
    /// The smaller value becomes `top`, the larger one `bottom`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use extent_core::block::Block;
    ///
    /// assert_eq!(Block::new(1, 2), Block::new(2, 1));
    /// ```
    #[inline]
    pub fn new(x: T, y: T) -> Self {
        if x <= y {
            Self { top: x, bottom: y }
        } else {
            Self { top: y, bottom: x }
        }
    }

    /// Builds a block from bounds already known to be ordered.
    #[inline]
    pub(crate) fn from_ordered(top: T, bottom: T) -> Self {
        debug_assert!(
            top <= bottom,
            "called `Block::from_ordered` with top greater than bottom"
        );
        Self { top, bottom }
    }

    /// Returns the inclusive upper edge (the smaller bound).
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use extent_core::block::Block;
    ///
    /// assert_eq!(Block::new(5, 10).top(), 5);
    /// ```
    #[inline]
    pub const fn top(&self) -> T {
        self.top
    }

    /// Returns the exclusive lower edge (the larger bound).
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use extent_core::block::Block;
    ///
    /// assert_eq!(Block::new(5, 10).bottom(), 10);
    /// ```
    #[inline]
    pub const fn bottom(&self) -> T {
        self.bottom
    }

    /// Alias for [`Block::top`].
    #[inline]
    pub const fn start(&self) -> T {
        self.top
    }

    /// Alias for [`Block::bottom`].
    #[inline]
    pub const fn end(&self) -> T {
        self.bottom
    }

    /// Returns the number of points covered, `bottom - top`.
    ///
    /// The width is returned as `u128`, which holds the width of every block
    /// over any primitive integer type, so `Block::new(i32::MIN, i32::MAX)`
    /// has a length of `u32::MAX`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use extent_core::block::Block;
    ///
    /// assert_eq!(Block::new(2, 2).len(), 0);
    /// assert_eq!(Block::new(1, 2).len(), 1);
    /// ```
    #[inline]
    pub fn len(&self) -> u128 {
        distance(self.top, self.bottom)
    }

    /// Returns `true` if the block covers no points (`top == bottom`).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.top == self.bottom
    }

    /// Returns `true` if `n` lies in `[top, bottom)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use extent_core::block::Block;
    ///
    /// let block = Block::new(2, 6);
    /// assert!(block.includes(2));
    /// assert!(block.includes(5));
    /// assert!(!block.includes(6));
    /// ```
    #[inline]
    pub fn includes(&self, n: T) -> bool {
        self.top <= n && n < self.bottom
    }

    /// Returns `true` if both blocks cover at least one common point.
    ///
    /// Touching blocks do not intersect.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use extent_core::block::Block;
    ///
    /// let a = Block::new(0, 10);
    /// assert!(a.intersects(Block::new(5, 15)));
    /// assert!(!a.intersects(Block::new(10, 20)));
    /// ```
    #[inline]
    pub fn intersects(&self, other: Self) -> bool {
        self.top < other.bottom && other.top < self.bottom
    }

    /// Returns `true` if one block ends exactly where the other begins.
    #[inline]
    pub fn adjacent(&self, other: Self) -> bool {
        self.bottom == other.top || other.bottom == self.top
    }

    /// Returns `true` if the blocks intersect or touch, i.e. their union is a
    /// single contiguous block.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use extent_core::block::Block;
    ///
    /// let a = Block::new(0, 10);
    /// assert!(a.intersects_or_adjacent(Block::new(10, 20)));
    /// assert!(!a.intersects_or_adjacent(Block::new(11, 20)));
    /// ```
    #[inline]
    pub fn intersects_or_adjacent(&self, other: Self) -> bool {
        self.top <= other.bottom && other.top <= self.bottom
    }

    /// Returns `true` if `other` lies entirely within `self`, shared edges
    /// included.
    #[inline]
    pub fn contains_block(&self, other: Self) -> bool {
        self.top <= other.top && other.bottom <= self.bottom
    }

    /// Creates an iterator over the points in the block.
    #[inline]
    pub fn iter(&self) -> BlockPoints<T> {
        BlockPoints {
            current: self.top,
            bottom: self.bottom,
        }
    }
}

impl<T> Default for Block<T>
where
    T: PrimInt,
{
    #[inline]
    fn default() -> Self {
        Self {
            top: T::zero(),
            bottom: T::zero(),
        }
    }
}

impl<T> std::fmt::Debug for Block<T>
where
    T: PrimInt + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Block")
            .field("top", &self.top)
            .field("bottom", &self.bottom)
            .finish()
    }
}

impl<T> std::fmt::Display for Block<T>
where
    T: PrimInt + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {})", self.top, self.bottom)
    }
}

impl<T> std::ops::RangeBounds<T> for Block<T>
where
    T: PrimInt,
{
    fn start_bound(&self) -> std::ops::Bound<&T> {
        std::ops::Bound::Included(&self.top)
    }

    fn end_bound(&self) -> std::ops::Bound<&T> {
        std::ops::Bound::Excluded(&self.bottom)
    }
}

impl<T> IntoIterator for Block<T>
where
    T: PrimInt,
{
    type Item = T;
    type IntoIter = BlockPoints<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for &Block<T>
where
    T: PrimInt,
{
    type Item = T;
    type IntoIter = BlockPoints<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> From<std::ops::Range<T>> for Block<T>
where
    T: PrimInt,
{
    #[inline]
    fn from(range: std::ops::Range<T>) -> Self {
        Self::new(range.start, range.end)
    }
}

impl<T> From<Block<T>> for std::ops::Range<T>
where
    T: PrimInt,
{
    #[inline]
    fn from(block: Block<T>) -> Self {
        block.top..block.bottom
    }
}

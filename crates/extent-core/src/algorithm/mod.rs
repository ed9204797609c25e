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

//! # Sorted Block Sets
//!
//! Slice-level checks and measures over block sequences such as the output
//! of [`Block::merge`] or [`Block::difference_all`].

use crate::block::Block;
use num_traits::PrimInt;

/// Checks whether the given blocks are pairwise disjoint and sorted by top.
///
/// Touching blocks count as disjoint.
#[inline(always)]
pub fn are_disjoint_and_sorted<T>(blocks: &[Block<T>]) -> bool
where
    T: PrimInt,
{
    blocks.windows(2).all(|w| w[0].bottom() <= w[1].top())
}

/// Checks whether the given blocks are sorted and separated by gaps, i.e.
/// no further merge is possible.
#[inline(always)]
pub fn are_coalesced<T>(blocks: &[Block<T>]) -> bool
where
    T: PrimInt,
{
    blocks.windows(2).all(|w| w[0].bottom() < w[1].top())
}

/// Sums the lengths of the given blocks.
///
/// For a coalesced sequence this is the number of covered points. The sum
/// saturates at `u128::MAX`.
#[inline]
pub fn covered_length<T>(blocks: &[Block<T>]) -> u128
where
    T: PrimInt,
{
    blocks
        .iter()
        .fold(0u128, |total, block| total.saturating_add(block.len()))
}

#[cfg(test)]
mod tests {
    use super::*;

    type IntegerType = i64;

    fn b(top: IntegerType, bottom: IntegerType) -> Block<IntegerType> {
        Block::new(top, bottom)
    }

    #[test]
    fn test_are_disjoint_and_sorted_empty_and_single() {
        let v: Vec<Block<IntegerType>> = vec![];
        assert!(are_disjoint_and_sorted(&v));
        assert!(are_disjoint_and_sorted(&[b(0, 10)]));
    }

    #[test]
    fn test_are_disjoint_and_sorted_touching() {
        assert!(are_disjoint_and_sorted(&[b(0, 5), b(5, 10), b(10, 20)]));
    }

    #[test]
    fn test_are_disjoint_and_sorted_false() {
        assert!(!are_disjoint_and_sorted(&[b(0, 10), b(9, 15)]));
        // Disjoint but unsorted.
        assert!(!are_disjoint_and_sorted(&[b(10, 20), b(0, 5)]));
    }

    #[test]
    fn test_are_coalesced() {
        assert!(are_coalesced(&[b(0, 5), b(6, 10)]));
        assert!(!are_coalesced(&[b(0, 5), b(5, 10)]));
        assert!(!are_coalesced(&[b(6, 10), b(0, 5)]));
    }

    #[test]
    fn test_covered_length() {
        assert_eq!(covered_length::<IntegerType>(&[]), 0);
        assert_eq!(covered_length(&[b(0, 5), b(10, 12), b(20, 20)]), 7);
    }

    #[test]
    fn test_covered_length_full_type_range() {
        let full = [Block::new(i64::MIN, 0), Block::new(0, i64::MAX)];
        assert_eq!(covered_length(&full), u128::from(u64::MAX));

        let huge = [Block::new(0u128, u128::MAX), Block::new(0u128, 10)];
        assert_eq!(covered_length(&huge), u128::MAX);
    }
}

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

use extent_core::block::Block;

fn b(top: i64, bottom: i64) -> Block<i64> {
    Block::new(top, bottom)
}

#[test]
fn construction_normalizes_bounds() {
    assert_eq!(b(1, 2).top(), 1);
    assert_eq!(b(1, 2).bottom(), 2);
    assert_eq!(b(2, 1).top(), 1);
    assert_eq!(b(2, 1).bottom(), 2);
    assert_eq!(b(2, 2).len(), 0);
    assert_eq!(b(1, 2).len(), 1);
}

#[test]
fn includes_excludes_bottom() {
    let a = b(2, 6);
    assert!(a.includes(3));
    assert!(!a.includes(6));
    assert!(!a.includes(8));
}

#[test]
fn union_cases() {
    let a = b(100, 200);
    assert_eq!((a + b(110, 190)).as_slice(), &[b(100, 200)]);
    assert_eq!((a + b(90, 210)).as_slice(), &[b(90, 210)]);
    assert_eq!((a + b(90, 110)).as_slice(), &[b(90, 200)]);
    assert_eq!((a + b(190, 210)).as_slice(), &[b(100, 210)]);
    assert_eq!((a + b(10, 20)).as_slice(), &[b(10, 20), b(100, 200)]);
    assert_eq!((a + a).as_slice(), &[a]);
}

#[test]
fn difference_cases() {
    let a = b(100, 200);
    assert_eq!((a - b(150, 170)).as_slice(), &[b(100, 150), b(170, 200)]);
    assert!((a - b(90, 210)).is_empty());
    assert!((a - b(100, 210)).is_empty());
    assert!((a - b(90, 200)).is_empty());
    assert_eq!((a - b(100, 110)).as_slice(), &[b(110, 200)]);
    assert_eq!((a - b(190, 200)).as_slice(), &[b(100, 190)]);
    assert_eq!((a - b(0, 100)).as_slice(), &[a]);
    assert!((a - a).is_empty());

    let empty = b(5, 5);
    assert!((empty - empty).is_empty());
    assert!((empty - b(5, 10)).is_empty());
}

#[test]
fn length_spans_whole_integer_type() {
    assert_eq!(Block::new(i32::MIN, i32::MAX).len(), u128::from(u32::MAX));
}

#[test]
fn array_difference_leaves_gaps_between_holes() {
    let a = b(100, 200);
    let holes = [b(90, 110), b(130, 140), b(180, 220)];
    assert_eq!(a - &holes[..], vec![b(110, 130), b(140, 180)]);
}

#[test]
fn merge_collapses_contiguous_and_overlapping() {
    let result = b(10, 20).merge(&[b(20, 25), b(30, 40), b(35, 45), b(55, 65)]);
    assert_eq!(result, vec![b(10, 25), b(30, 45), b(55, 65)]);
}

#[test]
fn padding_grows_only() {
    let a = b(100, 200);
    assert_eq!(a.padded(10, 20), b(90, 220));
    assert_eq!(a.padded(-10, -20), b(100, 200));
}

#[test]
fn limiting_clamps_to_limiter() {
    let limiter = b(0, 100);
    assert_eq!(b(-10, 10).limited(limiter), Ok(b(0, 10)));
    assert_eq!(b(90, 110).limited(limiter), Ok(b(90, 100)));
}

#[test]
fn limiting_by_disjoint_limiter_fails() {
    let err = b(200, 300).limited(b(0, 100)).unwrap_err();
    assert_eq!(err.block(), b(200, 300));
    assert_eq!(err.limiter(), b(0, 100));
}

#[test]
fn free_space_bookkeeping() {
    // Carve allocations out of a free region, then release them again.
    let region = b(0, 4096);
    let allocations = [b(0, 512), b(1024, 1536), b(3072, 4096)];

    let free = region - &allocations[..];
    assert_eq!(free, vec![b(512, 1024), b(1536, 3072)]);

    let (first, rest) = free.split_first().unwrap();
    let mut released = rest.to_vec();
    released.extend_from_slice(&allocations);
    assert_eq!(first.merge(&released), vec![region]);
}

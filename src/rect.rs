//
// Copyright 2022-Present (c) Raja Lehtihet & Wael El Oraiby
//
// Redistribution and use in source and binary forms, with or without
// modification, are permitted provided that the following conditions are met:
//
// 1. Redistributions of source code must retain the above copyright notice,
// this list of conditions and the following disclaimer.
//
// 2. Redistributions in binary form must reproduce the above copyright notice,
// this list of conditions and the following disclaimer in the documentation
// and/or other materials provided with the distribution.
//
// 3. Neither the name of the copyright holder nor the names of its contributors
// may be used to endorse or promote products derived from this software without
// specific prior written permission.
//
// THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
// AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
// IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE
// ARE DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE
// LIABLE FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR
// CONSEQUENTIAL DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF
// SUBSTITUTE GOODS OR SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS
// INTERRUPTION) HOWEVER CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN
// CONTRACT, STRICT LIABILITY, OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE)
// ARISING IN ANY WAY OUT OF THE USE OF THIS SOFTWARE, EVEN IF ADVISED OF THE
// POSSIBILITY OF SUCH DAMAGE.
//

/// Integer rectangle, half-open on both axes: a point is inside when
/// `x1 <= x < x2` and `y1 <= y < y2`. A rectangle is empty when either edge
/// pair is degenerate or inverted.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Rect {
    /// Left edge (inclusive).
    pub x1: i32,
    /// Top edge (inclusive).
    pub y1: i32,
    /// Right edge (exclusive).
    pub x2: i32,
    /// Bottom edge (exclusive).
    pub y2: i32,
}

impl Rect {
    /// Creates a rectangle from a top-left corner and an extent.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x1: x,
            y1: y,
            x2: x + width,
            y2: y + height,
        }
    }

    /// Creates an empty rectangle at the origin.
    pub fn empty() -> Self { Self::default() }

    /// Returns the rectangle's width. Negative when the edges are inverted.
    pub fn width(&self) -> i32 { self.x2 - self.x1 }

    /// Returns the rectangle's height. Negative when the edges are inverted.
    pub fn height(&self) -> i32 { self.y2 - self.y1 }

    /// Returns `true` when the rectangle covers no pixels.
    pub fn is_empty(&self) -> bool { self.x2 <= self.x1 || self.y2 <= self.y1 }

    /// Half-open point containment test.
    pub fn contains(&self, x: i32, y: i32) -> bool { x >= self.x1 && x < self.x2 && y >= self.y1 && y < self.y2 }

    /// Returns `true` when the two rectangles share at least one pixel.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x1 < other.x2 && other.x1 < self.x2 && self.y1 < other.y2 && other.y1 < self.y2
    }

    /// Moves the rectangle by the given deltas.
    pub fn translate(&mut self, dx: i32, dy: i32) {
        self.x1 += dx;
        self.y1 += dy;
        self.x2 += dx;
        self.y2 += dy;
    }

    /// Moves the rectangle so its top-left corner lands on `(x, y)`.
    pub fn set_pos(&mut self, x: i32, y: i32) { self.translate(x - self.x1, y - self.y1); }

    /// Clips the rectangle to `other`. The far edges are clamped up to the
    /// other's near edges so a disjoint result degenerates to a well-formed
    /// empty rectangle instead of an inverted one.
    pub fn intersect(&mut self, other: &Rect) {
        self.x1 = self.x1.max(other.x1);
        self.y1 = self.y1.max(other.y1);
        self.x2 = other.x1.max(self.x2.min(other.x2));
        self.y2 = other.y1.max(self.y2.min(other.y2));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn containment_is_half_open() {
        let r = Rect::new(10, 20, 5, 5);
        assert!(r.contains(10, 20));
        assert!(r.contains(14, 24));
        assert!(!r.contains(15, 24));
        assert!(!r.contains(14, 25));
        assert!(!r.contains(9, 20));
    }

    #[test]
    fn empty_rect_contains_nothing() {
        let r = Rect::empty();
        assert!(r.is_empty());
        assert!(!r.contains(0, 0));
    }

    #[test]
    fn zero_extent_is_empty() {
        assert!(Rect::new(5, 5, 0, 10).is_empty());
        assert!(Rect::new(5, 5, 10, 0).is_empty());
        assert!(!Rect::new(5, 5, 1, 1).is_empty());
    }

    #[test]
    fn overlap_excludes_shared_edges() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(10, 0, 10, 10);
        let c = Rect::new(9, 9, 10, 10);
        assert!(!a.overlaps(&b));
        assert!(a.overlaps(&c));
    }

    #[test]
    fn set_pos_preserves_extent() {
        let mut r = Rect::new(3, 4, 7, 8);
        r.set_pos(100, 200);
        assert_eq!(r, Rect::new(100, 200, 7, 8));
    }

    #[test]
    fn disjoint_intersection_degenerates_to_empty() {
        let mut a = Rect::new(0, 0, 10, 10);
        a.intersect(&Rect::new(20, 30, 10, 10));
        assert!(a.is_empty());
        // clamped, not inverted
        assert_eq!(a.x2, a.x1);
        assert_eq!(a.y2, a.y1);
    }

    #[test]
    fn partial_intersection_clips() {
        let mut a = Rect::new(0, 0, 10, 10);
        a.intersect(&Rect::new(5, 5, 10, 10));
        assert_eq!(a, Rect::new(5, 5, 5, 5));
    }

    proptest! {
        #[test]
        fn intersect_with_self_is_identity(x in -100i32..100, y in -100i32..100, w in 1i32..100, h in 1i32..100) {
            let a = Rect::new(x, y, w, h);
            let mut b = a;
            b.intersect(&a);
            prop_assert_eq!(a, b);
        }

        #[test]
        fn intersection_is_contained_in_both(
            ax in -50i32..50, ay in -50i32..50, aw in 1i32..60, ah in 1i32..60,
            bx in -50i32..50, by in -50i32..50, bw in 1i32..60, bh in 1i32..60,
            px in -120i32..120, py in -120i32..120,
        ) {
            let a = Rect::new(ax, ay, aw, ah);
            let b = Rect::new(bx, by, bw, bh);
            let mut i = a;
            i.intersect(&b);
            prop_assert_eq!(i.contains(px, py), a.contains(px, py) && b.contains(px, py));
        }
    }
}

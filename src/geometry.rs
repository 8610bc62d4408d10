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
use crate::{vec2, Vec2f};

/// Clamps `v` into `[lo, hi]` without panicking when the bounds cross; `hi` wins.
pub(crate) fn clampf(v: f32, lo: f32, hi: f32) -> f32 { v.max(lo).min(hi) }

pub(crate) fn clamp_vec2(v: Vec2f, lo: Vec2f, hi: Vec2f) -> Vec2f { vec2(clampf(v.x, lo.x, hi.x), clampf(v.y, lo.y, hi.y)) }

pub(crate) fn max_vec2(a: Vec2f, b: Vec2f) -> Vec2f { vec2(a.x.max(b.x), a.y.max(b.y)) }

pub(crate) fn min_vec2(a: Vec2f, b: Vec2f) -> Vec2f { vec2(a.x.min(b.x), a.y.min(b.y)) }

pub(crate) fn floor_vec2(v: Vec2f) -> Vec2f { vec2(v.x.floor(), v.y.floor()) }

pub(crate) fn length_sqr(v: Vec2f) -> f32 { v.x * v.x + v.y * v.y }

#[derive(Copy, Clone, Debug, Default)]
/// Axis-aligned rectangle described by its top-left and bottom-right corners.
pub struct Rect {
    /// Top-left corner.
    pub min: Vec2f,
    /// Bottom-right corner.
    pub max: Vec2f,
}

/// Clip rectangle used when nothing is pushed on a clip stack.
pub const UNCLIPPED_RECT: Rect = Rect {
    min: Vec2f { x: 0.0, y: 0.0 },
    max: Vec2f { x: f32::MAX, y: f32::MAX },
};

impl Rect {
    /// Builds a rectangle from its corners.
    pub fn new(min: Vec2f, max: Vec2f) -> Self { Self { min, max } }

    /// Builds a rectangle from a position and a size.
    pub fn from_pos_size(pos: Vec2f, size: Vec2f) -> Self { Self { min: pos, max: vec2(pos.x + size.x, pos.y + size.y) } }

    /// Width of the rectangle (negative when inverted).
    pub fn width(&self) -> f32 { self.max.x - self.min.x }

    /// Height of the rectangle (negative when inverted).
    pub fn height(&self) -> f32 { self.max.y - self.min.y }

    /// Size of the rectangle.
    pub fn size(&self) -> Vec2f { vec2(self.width(), self.height()) }

    /// Center point.
    pub fn center(&self) -> Vec2f { vec2((self.min.x + self.max.x) * 0.5, (self.min.y + self.max.y) * 0.5) }

    /// Top-right corner.
    pub fn top_right(&self) -> Vec2f { vec2(self.max.x, self.min.y) }

    /// Bottom-left corner.
    pub fn bottom_left(&self) -> Vec2f { vec2(self.min.x, self.max.y) }

    /// Returns `true` if `max` lies before `min` on either axis.
    pub fn is_inverted(&self) -> bool { self.min.x > self.max.x || self.min.y > self.max.y }

    /// Inclusive point containment.
    pub fn contains(&self, p: Vec2f) -> bool { p.x >= self.min.x && p.y >= self.min.y && p.x <= self.max.x && p.y <= self.max.y }

    /// Returns `true` if `other` lies entirely within this rectangle.
    pub fn contains_rect(&self, other: &Rect) -> bool { self.contains(other.min) && self.contains(other.max) }

    /// Returns `true` if the two rectangles share a non-empty area.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.min.y < other.max.y && self.max.y > other.min.y && self.min.x < other.max.x && self.max.x > other.min.x
    }

    /// Intersection of both rectangles; the result is inverted when they do not overlap.
    pub fn clip(&self, other: &Rect) -> Rect { Rect::new(max_vec2(self.min, other.min), min_vec2(self.max, other.max)) }

    /// Clamps both corners into `other`, so the result is never inverted when `self` is not.
    pub fn clip_full(&self, other: &Rect) -> Rect { Rect::new(clamp_vec2(self.min, other.min, other.max), clamp_vec2(self.max, other.min, other.max)) }

    /// Grows the rectangle by `amount` on every side.
    pub fn expand(&self, amount: f32) -> Rect { self.expand_vec2(vec2(amount, amount)) }

    /// Grows the rectangle by `amount.x` horizontally and `amount.y` vertically on each side.
    pub fn expand_vec2(&self, amount: Vec2f) -> Rect {
        Rect::new(vec2(self.min.x - amount.x, self.min.y - amount.y), vec2(self.max.x + amount.x, self.max.y + amount.y))
    }

    /// Moves the rectangle by `delta`.
    pub fn translate(&self, delta: Vec2f) -> Rect {
        Rect::new(vec2(self.min.x + delta.x, self.min.y + delta.y), vec2(self.max.x + delta.x, self.max.y + delta.y))
    }

    /// Component-wise equality.
    pub fn same_as(&self, other: &Rect) -> bool {
        self.min.x == other.min.x && self.min.y == other.min.y && self.max.x == other.max.x && self.max.y == other.max.y
    }
}

/// Returns `true` if `p` lies inside or on the circle.
pub fn circle_contains(center: Vec2f, radius: f32, p: Vec2f) -> bool { length_sqr(vec2(p.x - center.x, p.y - center.y)) <= radius * radius }

/// Returns `true` if `p` lies inside or on the triangle `a b c` regardless of winding.
pub fn triangle_contains(a: Vec2f, b: Vec2f, c: Vec2f, p: Vec2f) -> bool {
    let edge = |u: Vec2f, v: Vec2f| (p.x - v.x) * (u.y - v.y) - (u.x - v.x) * (p.y - v.y);
    let d1 = edge(a, b);
    let d2 = edge(b, c);
    let d3 = edge(c, a);
    let has_neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
    let has_pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;
    !(has_neg && has_pos)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_rect_eq(actual: Rect, expected: Rect) {
        assert!(actual.same_as(&expected), "expected {:?}, got {:?}", expected, actual);
    }

    #[test]
    fn clip_keeps_overlap() {
        let a = Rect::from_pos_size(vec2(0.0, 0.0), vec2(10.0, 10.0));
        let b = Rect::from_pos_size(vec2(5.0, 5.0), vec2(10.0, 10.0));
        assert_rect_eq(a.clip(&b), Rect::new(vec2(5.0, 5.0), vec2(10.0, 10.0)));
        assert!(a.overlaps(&b));
    }

    #[test]
    fn clip_disjoint_is_inverted() {
        let a = Rect::from_pos_size(vec2(0.0, 0.0), vec2(10.0, 10.0));
        let b = Rect::from_pos_size(vec2(20.0, 0.0), vec2(10.0, 10.0));
        assert!(a.clip(&b).is_inverted());
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn clip_full_never_inverts() {
        let a = Rect::from_pos_size(vec2(0.0, 0.0), vec2(10.0, 10.0));
        let b = Rect::from_pos_size(vec2(20.0, 0.0), vec2(10.0, 10.0));
        let clipped = a.clip_full(&b);
        assert!(!clipped.is_inverted());
        assert_eq!(clipped.width(), 0.0);
    }

    #[test]
    fn expand_grows_each_side() {
        let r = Rect::from_pos_size(vec2(10.0, 10.0), vec2(5.0, 5.0)).expand_vec2(vec2(2.0, 0.0));
        assert_rect_eq(r, Rect::new(vec2(8.0, 10.0), vec2(17.0, 15.0)));
    }

    #[test]
    fn containment_is_inclusive() {
        let r = Rect::from_pos_size(vec2(0.0, 0.0), vec2(4.0, 4.0));
        assert!(r.contains(vec2(4.0, 4.0)));
        assert!(!r.contains(vec2(4.1, 0.0)));
    }

    #[test]
    fn triangle_and_circle_hits() {
        let (a, b, c) = (vec2(0.0, 0.0), vec2(10.0, 0.0), vec2(0.0, 10.0));
        assert!(triangle_contains(a, b, c, vec2(2.0, 2.0)));
        assert!(triangle_contains(a, c, b, vec2(2.0, 2.0)));
        assert!(!triangle_contains(a, b, c, vec2(8.0, 8.0)));
        assert!(circle_contains(vec2(0.0, 0.0), 2.0, vec2(1.0, 1.0)));
        assert!(!circle_contains(vec2(0.0, 0.0), 1.0, vec2(1.0, 1.0)));
    }

    #[test]
    fn clampf_tolerates_crossed_bounds() {
        assert_eq!(clampf(5.0, 10.0, 0.0), 0.0);
        assert_eq!(clampf(5.0, 0.0, 10.0), 5.0);
    }
}

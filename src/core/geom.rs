//! Integer geometry for pixel-space collision.
//!
//! Rects are scanned with inclusive edges: a rect at `x` with width `w` covers
//! the columns `x..=x+w`. Every helper here follows that convention so the
//! edge scanner, the broad-phase test and the overlap math agree.

use std::fmt;
use std::ops::{Add, AddAssign, Sub};

use serde::{Deserialize, Serialize};

/// A pixel coordinate in level space
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0, y: 0 };

    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Inclusive containment: points on the rect's far edges are inside.
    #[inline]
    pub fn inside(&self, rect: &Rect) -> bool {
        self.x >= rect.x
            && self.x <= rect.x + rect.w
            && self.y >= rect.y
            && self.y <= rect.y + rect.h
    }
}

impl Add for Point {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self { x: self.x + rhs.x, y: self.y + rhs.y }
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Point {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self { x: self.x - rhs.x, y: self.y - rhs.y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point<{},{}>", self.x, self.y)
    }
}

/// Position plus dimensions
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    #[inline]
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// A rect of the given size anchored at 0,0.
    #[inline]
    pub const fn sized(w: i32, h: i32) -> Self {
        Self { x: 0, y: 0, w, h }
    }

    /// An all-zero rect means "not declared" for hitboxes.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.x == 0 && self.y == 0 && self.w == 0 && self.h == 0
    }

    #[inline]
    pub fn top_left(&self) -> Point {
        Point::new(self.x, self.y)
    }

    #[inline]
    pub fn bottom_right(&self) -> Point {
        Point::new(self.x + self.w, self.y + self.h)
    }

    /// Same dimensions, shifted by `by`.
    #[inline]
    pub fn translate(&self, by: Point) -> Rect {
        Rect { x: self.x + by.x, y: self.y + by.y, w: self.w, h: self.h }
    }

    /// True when the two rects share at least one pixel, counting shared edges.
    ///
    /// Symmetric, and reports full containment in either direction.
    pub fn intersects(&self, other: &Rect) -> bool {
        let (a_br, b_br) = (self.bottom_right(), other.bottom_right());
        self.x <= b_br.x && other.x <= a_br.x && self.y <= b_br.y && other.y <= a_br.y
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rect<{},{},{},{}>", self.x, self.y, self.w, self.h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inside_is_inclusive_of_far_edges() {
        let r = Rect::new(10, 10, 5, 5);
        assert!(Point::new(10, 10).inside(&r));
        assert!(Point::new(15, 15).inside(&r));
        assert!(!Point::new(16, 15).inside(&r));
        assert!(!Point::new(9, 12).inside(&r));
    }

    #[test]
    fn intersects_is_symmetric() {
        let rects = [
            Rect::new(0, 0, 32, 32),
            Rect::new(32, 0, 32, 32),
            Rect::new(100, 100, 40, 40),
            Rect::new(100, 100, 50, 50),
            Rect::new(80, 110, 100, 30),
            Rect::new(-20, -20, 10, 10),
        ];
        for a in rects.iter() {
            for b in rects.iter() {
                assert_eq!(a.intersects(b), b.intersects(a), "{a} vs {b}");
            }
        }
    }

    #[test]
    fn intersects_handles_containment_and_crossing() {
        let outer = Rect::new(300, 300, 1000, 600);
        let inner = Rect::new(450, 500, 42, 42);
        assert!(outer.intersects(&inner));
        assert!(inner.intersects(&outer));

        // Plus-shaped overlap: no corner of either rect lies inside the other.
        let wide = Rect::new(80, 110, 100, 30);
        let tall = Rect::new(100, 100, 50, 50);
        assert!(wide.intersects(&tall));
    }

    #[test]
    fn intersects_rejects_disjoint() {
        assert!(!Rect::new(0, 0, 32, 32).intersects(&Rect::new(100, 100, 40, 40)));
        assert!(!Rect::new(200, 200, 32, 32).intersects(&Rect::new(233, 200, 32, 32)));
    }

    #[test]
    fn zero_rect() {
        assert!(Rect::default().is_zero());
        assert!(!Rect::sized(1, 0).is_zero());
    }
}

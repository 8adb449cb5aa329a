//! Actor vs actor overlap - naive pairwise scan over bounding rects.

use crate::core::geom::Rect;

/// Indexes of two intersecting rects, `.0 < .1`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct IndexTuple(pub usize, pub usize);

/// An intersecting pair plus how they overlap
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoxCollision {
    pub a: usize,
    pub b: usize,
    /// Overlap relative to box `a`'s top-left corner.
    pub overlap: Rect,
}

impl BoxCollision {
    pub fn tuple(&self) -> IndexTuple {
        IndexTuple(self.a, self.b)
    }
}

/// Lazily yield every intersecting pair in `boxes`, ascending by first then second index.
pub fn between_boxes(boxes: &[Rect]) -> BetweenBoxes<'_> {
    BetweenBoxes { boxes, i: 0, j: 1 }
}

/// O(n²) pair iterator. `Clone` it to walk the pairs again.
#[derive(Clone, Debug)]
pub struct BetweenBoxes<'a> {
    boxes: &'a [Rect],
    i: usize,
    j: usize,
}

impl<'a> BetweenBoxes<'a> {
    /// Yield the overlap details alongside each pair.
    pub fn with_overlap(self) -> impl Iterator<Item = BoxCollision> + 'a {
        let boxes = self.boxes;
        self.filter_map(move |IndexTuple(a, b)| {
            let mut collision = compare_boxes(&boxes[a], &boxes[b])?;
            collision.a = a;
            collision.b = b;
            Some(collision)
        })
    }
}

impl Iterator for BetweenBoxes<'_> {
    type Item = IndexTuple;

    fn next(&mut self) -> Option<IndexTuple> {
        while self.i < self.boxes.len() {
            while self.j < self.boxes.len() {
                let (i, j) = (self.i, self.j);
                self.j += 1;
                if self.boxes[i].intersects(&self.boxes[j]) {
                    return Some(IndexTuple(i, j));
                }
            }
            self.i += 1;
            self.j = self.i + 1;
        }
        None
    }
}

/// Overlap between two boxes, or `None` when they don't intersect.
///
/// Indexes on the result are left at 0; [`BetweenBoxes::with_overlap`] fills them.
pub fn compare_boxes(a: &Rect, b: &Rect) -> Option<BoxCollision> {
    if !a.intersects(b) {
        return None;
    }
    Some(BoxCollision { a: 0, b: 0, overlap: overlap_relative(a, b) })
}

/// Absolute intersection rect of two boxes.
pub fn overlap(a: &Rect, b: &Rect) -> Rect {
    let (a_br, b_br) = (a.bottom_right(), b.bottom_right());
    let x1 = a.x.max(b.x);
    let y1 = a.y.max(b.y);
    let x2 = a_br.x.min(b_br.x);
    let y2 = a_br.y.min(b_br.y);
    Rect::new(x1, y1, x2 - x1, y2 - y1)
}

/// Intersection rect in `source`'s local space (its top-left is 0,0).
pub fn overlap_relative(source: &Rect, other: &Rect) -> Rect {
    let origin = source.top_left();
    let shifted = other.translate(crate::core::geom::Point::new(-origin.x, -origin.y));
    overlap(&Rect::sized(source.w, source.h), &shifted)
}

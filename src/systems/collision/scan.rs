//! Edge scanner
//!
//! A box is tested against the level by walking its four edges pixel by pixel.
//! The edges are independent, so they are scanned as four tasks joined before
//! returning. Each task fills its own [`EdgeScan`]; results are merged into the
//! shared [`Collide`] only after the join, in Top, Bottom, Left, Right order.

#[cfg(feature = "parallel")]
use rayon::join;

use crate::core::geom::{Point, Rect};
use crate::core::line::iter_line;
use crate::domain::swatch::Swatch;
use crate::spatial::grid::Grid;

use super::collide::{Collide, Side};
use super::perf::count_box_scan;

/// The four edges of a box as point pairs
///
/// Left and Right stop 1px short of the corners, which Top and Bottom own.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CollisionBox {
    pub top: [Point; 2],
    pub bottom: [Point; 2],
    pub left: [Point; 2],
    pub right: [Point; 2],
}

impl CollisionBox {
    pub fn from_rect(b: Rect) -> Self {
        Self {
            top: [Point::new(b.x, b.y), Point::new(b.x + b.w, b.y)],
            bottom: [Point::new(b.x, b.y + b.h), Point::new(b.x + b.w, b.y + b.h)],
            left: [Point::new(b.x, b.y + b.h - 1), Point::new(b.x, b.y + 1)],
            right: [Point::new(b.x + b.w, b.y + b.h - 1), Point::new(b.x + b.w, b.y + 1)],
        }
    }

    pub fn edge(&self, side: Side) -> [Point; 2] {
        match side {
            Side::Top => self.top,
            Side::Bottom => self.bottom,
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }
}

/// What one edge found, borrowed from the grid until merged
#[derive(Clone, Copy, Debug, Default)]
pub struct EdgeScan<'g> {
    pub hit: Option<(Point, &'g Swatch)>,
    pub fire: Option<&'g str>,
    pub water: bool,
    pub slippery: bool,
}

impl EdgeScan<'_> {
    /// Fold this edge's findings into `collide`. Never clears a flag.
    pub fn merge_into(&self, collide: &mut Collide, side: Side) {
        if let Some((point, swatch)) = self.hit {
            collide.set_hit(side, point, swatch);
        }
        if let Some(name) = self.fire {
            collide.in_fire = Some(name.to_string());
        }
        if self.water {
            collide.in_water = true;
        }
        if self.slippery {
            collide.is_slippery = true;
        }
    }
}

/// Scan the pixels from `p1` to `p2` along one edge of a box.
///
/// Non-solid swatches only contribute attributes. Semisolids never block the
/// Top edge. Empty points contribute nothing.
pub fn scan_grid_line<'g, G: Grid + ?Sized>(
    mut p1: Point,
    mut p2: Point,
    grid: &'g G,
    side: Side,
) -> EdgeScan<'g> {
    // Corners belong to the Left and Right edges.
    if matches!(side, Side::Top | Side::Bottom) {
        p1.x += 1;
        p2.x -= 1;
    }

    let mut scan = EdgeScan::default();
    for point in iter_line(p1, p2) {
        let Ok(swatch) = grid.get(point) else {
            continue;
        };

        if swatch.fire {
            scan.fire = Some(swatch.name.as_str());
        }
        if swatch.water {
            scan.water = true;
        }
        if side == Side::Bottom && swatch.slippery {
            scan.slippery = true;
        }

        if !swatch.blocks() {
            continue;
        }
        if swatch.semisolid && side == Side::Top {
            continue;
        }

        scan.hit = Some((point, swatch));
    }
    scan
}

/// Scan all four edges of `rect` and fold the results into `collide`.
///
/// Returns `collide.is_colliding()` after the merge, so flags already set by
/// an earlier scan still count.
pub fn scan_bounding_box<G: Grid + ?Sized>(collide: &mut Collide, rect: Rect, grid: &G) -> bool {
    debug_assert!(rect.w > 0 && rect.h > 0, "scan_bounding_box: empty box {rect}");
    count_box_scan();

    let col = CollisionBox::from_rect(rect);
    let scan_side = |side: Side| {
        let [p1, p2] = col.edge(side);
        scan_grid_line(p1, p2, grid, side)
    };

    #[cfg(feature = "parallel")]
    let ((top, bottom), (left, right)) = join(
        || join(|| scan_side(Side::Top), || scan_side(Side::Bottom)),
        || join(|| scan_side(Side::Left), || scan_side(Side::Right)),
    );

    #[cfg(not(feature = "parallel"))]
    let (top, bottom, left, right) = (
        scan_side(Side::Top),
        scan_side(Side::Bottom),
        scan_side(Side::Left),
        scan_side(Side::Right),
    );

    top.merge_into(collide, Side::Top);
    bottom.merge_into(collide, Side::Bottom);
    left.merge_into(collide, Side::Left);
    right.merge_into(collide, Side::Right);

    collide.is_colliding()
}

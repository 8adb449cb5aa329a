//! Movement resolver
//!
//! Given where an actor is and where it wants to be at the end of this tick,
//! find the furthest point it can reach and report what it touched on the way.
//!
//! Order of operations:
//! 1. Scan the current box. If it already overlaps the level, nudge it out by
//!    one pixel per touching side and update `grounded`.
//! 2. Grounded actors may not sink: their target Y is held at the current Y.
//! 3. Touching a wall in the direction of travel either climbs it (short
//!    steps, see [`can_step_up`]) or zeroes horizontal movement.
//! 4. Walk the DDA line toward the target. Every new ceiling, floor or wall
//!    found along the way becomes a cap that clamps all later points.
//! 5. Snap `move_to` to any caps found so the reported sides reflect every
//!    contact made during the tick.

use tracing::{debug, trace};

use crate::core::config::CollisionConfig;
use crate::core::geom::{Point, Rect};
use crate::core::line::iter_line;
use crate::domain::actor::{Actor, ActorOffset};
use crate::spatial::grid::Grid;

use super::bounding::{bounding_rect, bounding_rect_hitbox, effective_hitbox, size_plus_hitbox};
use super::collide::Collide;
use super::perf::count_trace_point;
use super::scan::scan_bounding_box;

/// Resolve an actor's movement toward `target` against the level.
///
/// `target` and the returned `move_to` are in sprite coordinates (the top-left
/// corner of the drawn sprite), even when the hitbox is offset inside it.
pub fn collides_with_grid<A, G>(
    actor: &mut A,
    grid: &G,
    target: Point,
    config: &CollisionConfig,
) -> (Collide, bool)
where
    A: Actor + ?Sized,
    G: Grid + ?Sized,
{
    let mut offset_actor = ActorOffset::new(actor);
    let offset = offset_actor.offset();

    let (mut collide, colliding) =
        box_collides_with_grid(&mut offset_actor, grid, target + offset, config);

    collide.move_to = collide.move_to - offset;
    (collide, colliding)
}

/// Core resolution for an actor whose hitbox starts at its position.
///
/// Prefer [`collides_with_grid`], which handles offset hitboxes.
pub fn box_collides_with_grid<A, G>(
    actor: &mut A,
    grid: &G,
    mut target: Point,
    config: &CollisionConfig,
) -> (Collide, bool)
where
    A: Actor + ?Sized,
    G: Grid + ?Sized,
{
    let mut p = actor.position();
    let hitbox = effective_hitbox(actor.size(), actor.hitbox());
    let s = size_plus_hitbox(bounding_rect(actor), hitbox);
    let actor_height = p.y + s.h;

    let mut result = Collide::at(p);
    let mut ceiling = false;
    let mut cap_height: Option<i32> = None;
    let mut cap_floor: Option<i32> = None;
    let mut cap_left: Option<i32> = None;
    let mut cap_right: Option<i32> = None;

    // Already overlapping the level? Wiggle free.
    if scan_bounding_box(&mut result, bounding_rect_hitbox(actor, hitbox), grid) {
        if result.bottom {
            if !actor.grounded() {
                actor.set_grounded(true);
            }
        } else {
            actor.set_grounded(false);
        }
        if result.top {
            ceiling = true;
            p.y += 1;
        }
        if result.left && !result.left_semisolid() {
            p.x += 1;
        }
        if result.right && !result.right_semisolid() {
            p.x -= 1;
        }
        trace!(from = %actor.position(), to = %p, "nudged actor out of level geometry");
    }

    if actor.grounded() {
        if !result.bottom {
            // Walked off a ledge.
            actor.set_grounded(false);
        } else if target.y < p.y {
            // Jumping.
            actor.set_grounded(false);
        } else {
            target.y = p.y;
        }
    }

    if (result.left && target.x < p.x) || (result.right && target.x > p.x) {
        let slope_height = if result.left { result.left_point.y } else { result.right_point.y };
        let moving_right = target.x > p.x;

        if let Some(step) = can_step_up(actor_height, slope_height, moving_right, config.slope_max_height) {
            target += step;
        } else if !(result.left && result.left_semisolid())
            && !(result.right && result.right_semisolid())
        {
            target.x = p.x;
        }
    }

    if ceiling {
        cap_height = Some(p.y);
    }

    result.reset();
    result.move_to = p;

    let clamp = |mut point: Point, height: Option<i32>, left: Option<i32>, right: Option<i32>| {
        if let Some(cap) = height {
            point.y = point.y.max(cap);
        }
        if let Some(cap) = left {
            point.x = point.x.max(cap);
        }
        if let Some(cap) = right {
            point.x = point.x.min(cap);
        }
        point
    };

    for point in iter_line(p, target) {
        count_trace_point();
        let point = clamp(point, cap_height, cap_left, cap_right);

        if scan_bounding_box(&mut result, Rect::new(point.x, point.y, s.w, s.h), grid) {
            if result.bottom {
                if cap_floor.is_none() {
                    cap_floor = Some(result.bottom_point.y - s.h);
                    trace!(?cap_floor, "found floor");
                }
                actor.set_grounded(true);
            }

            if result.top && !ceiling {
                ceiling = true;
                cap_height = Some(result.top_point.y + 1);
                trace!(?cap_height, "found ceiling");
            }

            // Walls too tall to step onto stop horizontal movement for the rest of the trace.
            if result.left && cap_left.is_none() && !result.left_semisolid() {
                let climbable =
                    can_step_up(actor_height, result.left_point.y, false, config.slope_max_height);
                if climbable.is_none() {
                    cap_left = Some(result.left_point.x);
                    trace!(?cap_left, "found wall on the left");
                }
            }
            if result.right && cap_right.is_none() && !result.right_semisolid() {
                let climbable =
                    can_step_up(actor_height, result.right_point.y, false, config.slope_max_height);
                if climbable.is_none() {
                    cap_right = Some(result.right_point.x - s.w);
                    trace!(?cap_right, "found wall on the right");
                }
            }
        }

        result.move_to = clamp(point, cap_height, cap_left, cap_right);
    }

    if let Some(cap) = cap_height.filter(|_| ceiling) {
        if result.move_to.y < cap {
            result.top = true;
            result.move_to.y = cap;
        }
    }
    if let Some(cap) = cap_floor {
        if result.move_to.y > cap {
            result.bottom = true;
            result.move_to.y = cap;
        }
    }
    if let Some(cap) = cap_left {
        result.left = true;
        result.move_to.x = cap;
    }
    if let Some(cap) = cap_right {
        result.right = true;
        result.move_to.x = cap;
    }

    let colliding = result.is_colliding();
    debug!(
        from = %actor.position(),
        %target,
        move_to = %result.move_to,
        top = result.top,
        bottom = result.bottom,
        left = result.left,
        right = result.right,
        grounded = actor.grounded(),
        "resolved movement"
    );
    (result, colliding)
}

/// Can the actor step onto a ledge this short?
///
/// `actor_height` is the Y of the actor's feet, `slope_height` the Y of the
/// highest pixel it touched on the side it is moving into. Returns the offset
/// that lifts the actor onto the step and one pixel forward.
pub fn can_step_up(actor_height: i32, slope_height: i32, moving_right: bool, max_height: i32) -> Option<Point> {
    let height = actor_height - slope_height;
    if height > max_height {
        return None;
    }
    let dx = if moving_right { 1 } else { -1 };
    Some(Point::new(dx, -height))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::actor::ActorState;
    use crate::domain::swatch::Swatch;
    use crate::spatial::grid::SwatchGrid;

    #[test]
    fn can_step_up_ties_climb() {
        assert_eq!(can_step_up(500, 492, true, 8), Some(Point::new(1, -8)));
        assert_eq!(can_step_up(500, 496, false, 8), Some(Point::new(-1, -4)));
        assert_eq!(can_step_up(500, 491, true, 8), None);
    }

    #[test]
    fn free_fall_in_empty_level() {
        let grid = SwatchGrid::default();
        let mut actor = ActorState::new(Point::new(0, 0), Rect::sized(32, 32));
        let (c, colliding) =
            collides_with_grid(&mut actor, &grid, Point::new(8, 8), &CollisionConfig::default());
        assert!(!colliding);
        assert_eq!(c.move_to, Point::new(8, 8));
        assert!(!actor.grounded);
    }

    #[test]
    fn stuck_actor_is_nudged_out_of_wall() {
        let mut grid = SwatchGrid::default();
        let stone = grid.add_swatch(Swatch::solid("stone"));
        grid.fill_rect(Rect::new(100, 0, 1, 1000), stone).unwrap();

        let mut actor = ActorState::new(Point::new(100, 50), Rect::sized(10, 10)).with_grounded(true);
        let (c, colliding) =
            collides_with_grid(&mut actor, &grid, Point::new(101, 50), &CollisionConfig::default());

        assert!(!colliding);
        assert_eq!(c.move_to, Point::new(101, 50));
        assert!(!actor.grounded);
    }

    #[test]
    fn cap_at_coordinate_zero_is_honoured() {
        // A ceiling whose underside sits at y = -1 caps the actor at y = 0.
        let mut grid = SwatchGrid::default();
        let stone = grid.add_swatch(Swatch::solid("stone"));
        grid.fill_rect(Rect::new(-50, -1, 100, 1), stone).unwrap();

        let mut actor = ActorState::new(Point::new(0, 20), Rect::sized(10, 10));
        let (c, _) =
            collides_with_grid(&mut actor, &grid, Point::new(0, -20), &CollisionConfig::default());
        assert!(c.top);
        assert_eq!(c.move_to, Point::new(0, 0));
    }
}

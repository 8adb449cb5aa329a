//! Actor capability and the hitbox normalizer.

use crate::core::geom::{Point, Rect};

/// What the collision core needs to know about a moving sprite.
///
/// `position` is the top-left corner of the sprite, `size` its drawn box and
/// `hitbox` the self-declared collision footprint relative to the sprite. A
/// zero hitbox means "use the full size".
pub trait Actor {
    fn position(&self) -> Point;
    fn size(&self) -> Rect;
    fn hitbox(&self) -> Rect;
    fn grounded(&self) -> bool;
    fn set_grounded(&mut self, grounded: bool);
}

/// Re-expresses an actor so its hitbox begins at 0,0.
///
/// The wrapped actor is borrowed mutably only so `set_grounded` can reach it;
/// position, size and hitbox are never written.
pub struct ActorOffset<'a, A: Actor + ?Sized> {
    actor: &'a mut A,
    offset: Point,
}

impl<'a, A: Actor + ?Sized> ActorOffset<'a, A> {
    pub fn new(actor: &'a mut A) -> Self {
        let position = actor.position();
        let hitbox = actor.hitbox();
        let delta = Point::new(position.x + hitbox.x, position.y + hitbox.y);
        let offset = delta - position;
        Self { actor, offset }
    }

    /// Distance from the sprite's position to the hitbox's top-left corner.
    pub fn offset(&self) -> Point {
        self.offset
    }
}

impl<A: Actor + ?Sized> Actor for ActorOffset<'_, A> {
    fn position(&self) -> Point {
        self.actor.position() + self.offset
    }

    fn size(&self) -> Rect {
        self.actor.size()
    }

    fn hitbox(&self) -> Rect {
        let hb = self.actor.hitbox();
        Rect::sized(hb.w, hb.h)
    }

    fn grounded(&self) -> bool {
        self.actor.grounded()
    }

    fn set_grounded(&mut self, grounded: bool) {
        self.actor.set_grounded(grounded);
    }
}

/// Plain-data actor for callers without their own sprite type.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ActorState {
    pub position: Point,
    pub size: Rect,
    pub hitbox: Rect,
    pub grounded: bool,
}

impl ActorState {
    pub fn new(position: Point, size: Rect) -> Self {
        Self { position, size, hitbox: Rect::default(), grounded: false }
    }

    pub fn with_hitbox(mut self, hitbox: Rect) -> Self {
        self.hitbox = hitbox;
        self
    }

    pub fn with_grounded(mut self, grounded: bool) -> Self {
        self.grounded = grounded;
        self
    }

    pub fn move_to(&mut self, to: Point) {
        self.position = to;
    }
}

impl Actor for ActorState {
    fn position(&self) -> Point { self.position }
    fn size(&self) -> Rect { self.size }
    fn hitbox(&self) -> Rect { self.hitbox }
    fn grounded(&self) -> bool { self.grounded }
    fn set_grounded(&mut self, grounded: bool) { self.grounded = grounded; }
}

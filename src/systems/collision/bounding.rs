use crate::core::geom::Rect;
use crate::domain::actor::Actor;

/// World-space box of the actor's drawn sprite.
pub fn bounding_rect<A: Actor + ?Sized>(actor: &A) -> Rect {
    let p = actor.position();
    let s = actor.size();
    Rect::new(p.x, p.y, s.w, s.h)
}

/// World-space box of the actor's declared hitbox.
///
/// A 64x32 sprite with hitbox `0,32,32,32` yields a 32x32 box starting 32px
/// below the sprite's position. A zero hitbox yields `bounding_rect`.
pub fn bounding_rect_hitbox<A: Actor + ?Sized>(actor: &A, hitbox: Rect) -> Rect {
    let mut rect = bounding_rect(actor);
    if !hitbox.is_zero() {
        rect.x += hitbox.x;
        rect.y += hitbox.y;
        rect.w = hitbox.w;
        rect.h = hitbox.h;
    }
    rect
}

/// Shrink a canvas size to the declared hitbox footprint.
pub fn size_plus_hitbox(size: Rect, hitbox: Rect) -> Rect {
    if hitbox.is_zero() {
        return size;
    }
    Rect {
        x: size.x + hitbox.x,
        y: size.y + hitbox.y,
        w: hitbox.w,
        h: hitbox.h,
    }
}

/// The hitbox to collide with: the declared one, or the full size when none is declared.
pub fn effective_hitbox(size: Rect, hitbox: Rect) -> Rect {
    if hitbox.is_zero() {
        Rect::sized(size.w, size.h)
    } else {
        hitbox
    }
}

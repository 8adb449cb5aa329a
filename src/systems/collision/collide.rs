use crate::core::geom::Point;
use crate::domain::swatch::Swatch;

/// Side of the collision box
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Top,
    Bottom,
    Left,
    Right,
}

impl Side {
    pub const ALL: [Side; 4] = [Side::Top, Side::Bottom, Side::Left, Side::Right];
}

/// How a collision occurred
///
/// Each side carries a flag, the last level pixel that hit it, and the swatch
/// painted there. `move_to` is where the actor may move this tick.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Collide {
    pub top: bool,
    pub top_point: Point,
    pub top_pixel: Option<Swatch>,
    pub left: bool,
    pub left_point: Point,
    pub left_pixel: Option<Swatch>,
    pub right: bool,
    pub right_point: Point,
    pub right_pixel: Option<Swatch>,
    pub bottom: bool,
    pub bottom_point: Point,
    pub bottom_pixel: Option<Swatch>,
    pub move_to: Point,

    /// Name of the fire swatch being touched
    pub in_fire: Option<String>,
    pub in_water: bool,
    pub is_slippery: bool,
}

impl Collide {
    pub fn at(move_to: Point) -> Self {
        Self { move_to, ..Default::default() }
    }

    /// Clear every flag and attribute, keeping `move_to`.
    pub fn reset(&mut self) {
        *self = Self::at(self.move_to);
    }

    /// Any solid contact, or touching fire or water.
    ///
    /// Side contact with a semisolid does not count.
    pub fn is_colliding(&self) -> bool {
        self.top
            || self.bottom
            || (self.left && !self.left_semisolid())
            || (self.right && !self.right_semisolid())
            || self.in_fire.is_some()
            || self.in_water
    }

    pub fn hit(&self, side: Side) -> bool {
        match side {
            Side::Top => self.top,
            Side::Bottom => self.bottom,
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub fn point(&self, side: Side) -> Point {
        match side {
            Side::Top => self.top_point,
            Side::Bottom => self.bottom_point,
            Side::Left => self.left_point,
            Side::Right => self.right_point,
        }
    }

    pub fn pixel(&self, side: Side) -> Option<&Swatch> {
        match side {
            Side::Top => self.top_pixel.as_ref(),
            Side::Bottom => self.bottom_pixel.as_ref(),
            Side::Left => self.left_pixel.as_ref(),
            Side::Right => self.right_pixel.as_ref(),
        }
    }

    #[inline]
    pub(crate) fn left_semisolid(&self) -> bool {
        self.left_pixel.as_ref().is_some_and(|s| s.semisolid)
    }

    #[inline]
    pub(crate) fn right_semisolid(&self) -> bool {
        self.right_pixel.as_ref().is_some_and(|s| s.semisolid)
    }

    /// Record a blocking pixel on one side.
    pub(crate) fn set_hit(&mut self, side: Side, point: Point, swatch: &Swatch) {
        let (flag, at, pixel) = match side {
            Side::Top => (&mut self.top, &mut self.top_point, &mut self.top_pixel),
            Side::Bottom => (&mut self.bottom, &mut self.bottom_point, &mut self.bottom_pixel),
            Side::Left => (&mut self.left, &mut self.left_point, &mut self.left_pixel),
            Side::Right => (&mut self.right, &mut self.right_point, &mut self.right_pixel),
        };
        *flag = true;
        *at = point;
        *pixel = Some(swatch.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_keeps_move_to() {
        let mut c = Collide::at(Point::new(4, 5));
        c.set_hit(Side::Top, Point::new(4, 5), &Swatch::solid("stone"));
        c.in_water = true;
        c.in_fire = Some("fire".into());
        assert!(c.is_colliding());

        c.reset();
        assert_eq!(c, Collide::at(Point::new(4, 5)));
        assert!(!c.is_colliding());
    }

    #[test]
    fn semisolid_side_contact_is_not_colliding() {
        let mut c = Collide::default();
        c.set_hit(Side::Left, Point::new(1, 1), &Swatch::semisolid("ledge"));
        assert!(c.left);
        assert!(!c.is_colliding());

        c.set_hit(Side::Right, Point::new(9, 1), &Swatch::solid("stone"));
        assert!(c.is_colliding());
    }

    #[test]
    fn side_accessors() {
        let mut c = Collide::default();
        c.set_hit(Side::Bottom, Point::new(3, 9), &Swatch::solid("stone"));
        for side in Side::ALL {
            assert_eq!(c.hit(side), side == Side::Bottom);
        }
        assert_eq!(c.point(Side::Bottom), Point::new(3, 9));
        assert_eq!(c.pixel(Side::Bottom).map(|s| s.name.as_str()), Some("stone"));
        assert!(c.pixel(Side::Top).is_none());
    }
}

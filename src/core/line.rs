use super::geom::Point;

/// DDA line rasterizer - lazy sequence of integer points from `from` to `to`
///
/// Steps along the major axis one pixel at a time and accumulates the minor axis
/// in f64, truncating toward zero on output. Both endpoints are yielded; a
/// zero-length line yields its single point.
///
/// The iterator is `Clone`, so a line can be walked more than once.
#[derive(Clone, Debug)]
pub struct LineIter {
    x: f64,
    y: f64,
    dx: f64,
    dy: f64,
    remaining: usize,
}

pub fn iter_line(from: Point, to: Point) -> LineIter {
    LineIter::new(from, to)
}

impl LineIter {
    pub fn new(from: Point, to: Point) -> Self {
        let dx = (to.x - from.x) as f64;
        let dy = (to.y - from.y) as f64;
        let step = dx.abs().max(dy.abs());

        let (dx, dy) = if step > 0.0 { (dx / step, dy / step) } else { (0.0, 0.0) };

        Self {
            x: from.x as f64,
            y: from.y as f64,
            dx,
            dy,
            remaining: step as usize + 1,
        }
    }
}

impl Iterator for LineIter {
    type Item = Point;

    #[inline]
    fn next(&mut self) -> Option<Point> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let point = Point::new(self.x as i32, self.y as i32);
        self.x += self.dx;
        self.y += self.dy;
        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for LineIter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_point_line() {
        let points: Vec<Point> = iter_line(Point::new(4, 7), Point::new(4, 7)).collect();
        assert_eq!(points, vec![Point::new(4, 7)]);
    }

    #[test]
    fn horizontal_line_includes_both_ends() {
        let points: Vec<Point> = iter_line(Point::new(0, 5), Point::new(3, 5)).collect();
        assert_eq!(
            points,
            vec![Point::new(0, 5), Point::new(1, 5), Point::new(2, 5), Point::new(3, 5)]
        );
    }

    #[test]
    fn backwards_vertical_line() {
        let points: Vec<Point> = iter_line(Point::new(2, 10), Point::new(2, 7)).collect();
        assert_eq!(
            points,
            vec![Point::new(2, 10), Point::new(2, 9), Point::new(2, 8), Point::new(2, 7)]
        );
    }

    #[test]
    fn diagonal_steps_one_pixel_per_axis() {
        let points: Vec<Point> = iter_line(Point::new(0, 0), Point::new(4, 2)).collect();
        assert_eq!(points.len(), 5);
        assert_eq!(points[0], Point::new(0, 0));
        assert_eq!(points[2], Point::new(2, 1));
        for pair in points.windows(2) {
            assert!((pair[1].x - pair[0].x).abs() <= 1);
            assert!((pair[1].y - pair[0].y).abs() <= 1);
        }
    }

    #[test]
    fn line_is_restartable() {
        let line = iter_line(Point::new(0, 0), Point::new(8, 3));
        let first: Vec<Point> = line.clone().collect();
        let second: Vec<Point> = line.collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 9);
    }
}

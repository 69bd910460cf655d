use super::{Point, Turn};
use crate::Float;

/// Circular arc stored the way a chain stores it: two end points and the
/// bulge `tan(θ / 4)` of the included angle `θ`.
///
/// A positive bulge sweeps counter-clockwise from `start` to `end`, a
/// negative one clockwise.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Arc<T> {
    pub start: Point<T>,
    pub end: Point<T>,
    pub bulge: T,
}

impl<T: Float> Arc<T> {
    /// Returns `None` when the input describes no arc at all: a zero bulge,
    /// coincident end points or non finite values.
    pub fn from_bulge(start: Point<T>, end: Point<T>, bulge: T) -> Option<Self> {
        if bulge == T::ZERO || !bulge.is_finite() || !start.is_finite() || !end.is_finite() {
            return None;
        }
        if start.sq_distance(&end) == T::ZERO {
            return None;
        }
        Some(Self { start, end, bulge })
    }

    fn chord(&self) -> Point<T> {
        self.end - self.start
    }

    /// Signed included angle, positive for counter-clockwise arcs.
    pub fn sweep(&self) -> T {
        T::TWO * T::TWO * self.bulge.atan()
    }

    pub fn radius(&self) -> T {
        let chord = self.chord().length();
        chord * (T::ONE + self.bulge * self.bulge) / (T::TWO * T::TWO * self.bulge.abs())
    }

    pub fn center(&self) -> Point<T> {
        let offset = (T::ONE - self.bulge * self.bulge) / (T::TWO * T::TWO * self.bulge);
        self.start.midpoint(&self.end) + self.chord().perp() * offset
    }

    /// Point halfway along the arc.
    pub fn midpoint(&self) -> Point<T> {
        self.start.midpoint(&self.end) - self.chord().perp() * (self.bulge * T::HALF)
    }

    pub fn length(&self) -> T {
        self.radius() * self.sweep().abs()
    }

    pub fn turn(&self) -> Turn {
        if self.bulge > T::ZERO {
            Turn::CounterClockwise
        } else {
            Turn::Clockwise
        }
    }

    /// Unit direction of travel when leaving `start`.
    pub fn start_tangent(&self) -> Option<Point<T>> {
        self.tangent_at(self.start)
    }

    /// Unit direction of travel when arriving at `end`.
    pub fn end_tangent(&self) -> Option<Point<T>> {
        self.tangent_at(self.end)
    }

    fn tangent_at(&self, point: Point<T>) -> Option<Point<T>> {
        let radial = (point - self.center()).perp();
        let radial = if self.bulge > T::ZERO { radial } else { -radial };
        radial.normalize()
    }

    /// Area enclosed between the arc and its chord, signed like the sweep.
    pub fn segment_area(&self) -> T {
        let radius = self.radius();
        let sweep = self.sweep();
        radius * radius * T::HALF * (sweep - sweep.sin())
    }

    pub fn reversed(&self) -> Self {
        Self {
            start: self.end,
            end: self.start,
            bulge: -self.bulge,
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_8, PI};

    use super::*;

    fn quarter() -> Arc<f64> {
        Arc::from_bulge(Point::new(8.0, 0.0), Point::new(10.0, 2.0), FRAC_PI_8.tan()).unwrap()
    }

    #[test]
    fn zero_bulge_is_not_an_arc() {
        assert!(Arc::from_bulge(Point::new(0.0, 0.0), Point::new(1.0, 0.0), 0.0).is_none());
        assert!(Arc::from_bulge(Point::new(1.0, 1.0), Point::new(1.0, 1.0), 0.5).is_none());
    }

    #[test]
    fn quarter_circle_geometry() {
        let arc = quarter();
        assert_abs_diff_eq!(arc.radius(), 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(arc.sweep(), FRAC_PI_2, epsilon = 1e-12);
        assert_abs_diff_eq!(arc.length(), PI, epsilon = 1e-12);
        let center = arc.center();
        assert_abs_diff_eq!(center.x, 8.0, epsilon = 1e-12);
        assert_abs_diff_eq!(center.y, 2.0, epsilon = 1e-12);
        assert_eq!(arc.turn(), Turn::CounterClockwise);
    }

    #[test]
    fn midpoint_lies_on_circle() {
        let arc = quarter();
        let mid = arc.midpoint();
        assert_abs_diff_eq!(mid.distance(&arc.center()), arc.radius(), epsilon = 1e-12);
        assert_abs_diff_eq!(mid.x, 8.0 + 2.0f64.sqrt(), epsilon = 1e-12);
        assert_abs_diff_eq!(mid.y, 2.0 - 2.0f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn tangents_follow_travel_direction() {
        let arc = quarter();
        let start = arc.start_tangent().unwrap();
        let end = arc.end_tangent().unwrap();
        assert_abs_diff_eq!(start.x, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(start.y, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(end.x, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(end.y, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn reversed_arc_keeps_circle() {
        let arc = quarter();
        let back = arc.reversed();
        assert_eq!(back.turn(), Turn::Clockwise);
        assert_abs_diff_eq!(back.radius(), arc.radius(), epsilon = 1e-12);
        assert!(back.center().aprox_eq(&arc.center(), 1e-12));
        assert_abs_diff_eq!(back.segment_area(), -arc.segment_area(), epsilon = 1e-12);
    }

    #[test]
    fn semicircle() {
        let arc = Arc::from_bulge(Point::new(-1.0, 0.0), Point::new(1.0, 0.0), 1.0).unwrap();
        assert_abs_diff_eq!(arc.radius(), 1.0, epsilon = 1e-12);
        assert!(arc.center().aprox_eq(&Point::ORIGIN, 1e-12));
        assert_abs_diff_eq!(arc.segment_area(), PI / 2.0, epsilon = 1e-12);
        // Counter-clockwise from (-1, 0) to (1, 0) passes below the chord.
        assert_abs_diff_eq!(arc.midpoint().y, -1.0, epsilon = 1e-12);
    }
}

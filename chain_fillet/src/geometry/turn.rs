use super::Point;
use crate::Float;

/// Direction in which a path bends when walking through three points.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Turn {
    Clockwise,
    CounterClockwise,
    Collinear,
}

impl Turn {
    pub const ALL: [Turn; 3] = [Turn::Clockwise, Turn::CounterClockwise, Turn::Collinear];

    /// Classifies the walk `p1 -> p2 -> p3`.
    ///
    /// The cross product `(p2 - p1) x (p3 - p1)` has to clear
    /// [`Float::TURN_EPSILON`] in either direction, anything in between is
    /// reported as collinear.
    pub fn of<T: Float>(p1: Point<T>, p2: Point<T>, p3: Point<T>) -> Self {
        Self::from_signed((p2 - p1).cross(&(p3 - p1)))
    }

    /// Classifies a signed area or cross product value.
    pub fn from_signed<T: Float>(value: T) -> Self {
        if value > T::TURN_EPSILON {
            Turn::CounterClockwise
        } else if value < -T::TURN_EPSILON {
            Turn::Clockwise
        } else {
            Turn::Collinear
        }
    }

    pub fn is_counter_clockwise(self) -> bool {
        self == Turn::CounterClockwise
    }

    pub fn reversed(self) -> Self {
        match self {
            Turn::Clockwise => Turn::CounterClockwise,
            Turn::CounterClockwise => Turn::Clockwise,
            Turn::Collinear => Turn::Collinear,
        }
    }
}

impl core::fmt::Display for Turn {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Turn::Clockwise => write!(f, "ClockWise"),
            Turn::CounterClockwise => write!(f, "CounterClockWise"),
            Turn::Collinear => write!(f, "Collinear"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn left_turn_is_counter_clockwise() {
        let turn = Turn::of(
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
        );
        assert_eq!(turn, Turn::CounterClockwise);
    }

    #[test]
    fn right_turn_is_clockwise() {
        let turn = Turn::of(
            Point::new(0.0, 0.0),
            Point::new(0.0, 10.0),
            Point::new(10.0, 10.0),
        );
        assert_eq!(turn, Turn::Clockwise);
    }

    #[test]
    fn straight_walk_is_collinear() {
        let turn = Turn::of(
            Point::new(0.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(3.0, 3.0),
        );
        assert_eq!(turn, Turn::Collinear);
    }

    #[test]
    fn values_inside_threshold_are_collinear() {
        assert_eq!(Turn::from_signed(5e-9f64), Turn::Collinear);
        assert_eq!(Turn::from_signed(-5e-9f64), Turn::Collinear);
        assert_eq!(Turn::from_signed(2e-8f64), Turn::CounterClockwise);
        assert_eq!(Turn::from_signed(-2e-8f64), Turn::Clockwise);
    }

    #[test]
    fn reversing_swaps_directions() {
        for turn in Turn::ALL {
            assert_eq!(turn.reversed().reversed(), turn);
        }
        assert_eq!(Turn::Clockwise.reversed(), Turn::CounterClockwise);
    }
}

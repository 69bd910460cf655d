use std::fmt;

use num_traits::AsPrimitive;

use super::Point;
use crate::Float;

/// A straight piece of a chain.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment<T> {
    pub start: Point<T>,
    pub end: Point<T>,
}

impl<T: fmt::Display> fmt::Display for Segment<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

impl<T> Segment<T> {
    pub fn new(start: Point<T>, end: Point<T>) -> Self {
        Self { start, end }
    }
}

impl<T: Float> Segment<T> {
    /// Displacement from `start` to `end`.
    pub fn vector(&self) -> Point<T> {
        self.end - self.start
    }

    pub fn length(&self) -> T {
        self.start.distance(&self.end)
    }

    pub fn midpoint(&self) -> Point<T> {
        self.start.midpoint(&self.end)
    }

    pub fn reversed(&self) -> Self {
        Self {
            start: self.end,
            end: self.start,
        }
    }
}

impl<T> Segment<T> {
    pub fn as_<S: Copy + 'static>(self) -> Segment<S>
    where
        T: AsPrimitive<S>,
    {
        Segment {
            start: self.start.as_(),
            end: self.end.as_(),
        }
    }
}

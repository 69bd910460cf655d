use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use num_traits::AsPrimitive;
use serde::{Deserialize, Serialize};

use crate::Float;

/// A position or a displacement in the drawing plane.
#[derive(Copy, Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Point<T> {
    pub x: T,
    pub y: T,
}

impl<T> Point<T> {
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T> Add for Point<T>
where
    T: Add<Output = T>,
{
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Point {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl<T> Sub for Point<T>
where
    T: Sub<Output = T>,
{
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Point {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl<T> Mul<T> for Point<T>
where
    T: Mul<Output = T> + Clone,
{
    type Output = Self;

    fn mul(self, scalar: T) -> Self {
        Point {
            x: self.x * scalar.clone(),
            y: self.y * scalar,
        }
    }
}

impl<T> Div<T> for Point<T>
where
    T: Div<Output = T> + Clone,
{
    type Output = Self;

    fn div(self, scalar: T) -> Self {
        Point {
            x: self.x / scalar.clone(),
            y: self.y / scalar,
        }
    }
}

impl<T> AddAssign for Point<T>
where
    T: AddAssign,
{
    fn add_assign(&mut self, other: Self) {
        self.x += other.x;
        self.y += other.y;
    }
}

impl<T> SubAssign for Point<T>
where
    T: SubAssign,
{
    fn sub_assign(&mut self, other: Self) {
        self.x -= other.x;
        self.y -= other.y;
    }
}

impl<T> MulAssign<T> for Point<T>
where
    T: MulAssign + Clone,
{
    fn mul_assign(&mut self, scalar: T) {
        self.x *= scalar.clone();
        self.y *= scalar;
    }
}

impl<T> DivAssign<T> for Point<T>
where
    T: DivAssign + Clone,
{
    fn div_assign(&mut self, scalar: T) {
        self.x /= scalar.clone();
        self.y /= scalar;
    }
}

impl<T: Neg> Neg for Point<T> {
    type Output = Point<T::Output>;

    fn neg(self) -> Self::Output {
        Point {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl<T: Float> Point<T> {
    pub const ORIGIN: Self = Self {
        x: T::ZERO,
        y: T::ZERO,
    };

    pub fn dot(&self, other: &Self) -> T {
        self.x * other.x + self.y * other.y
    }

    /// Z component of the 3D cross product; positive when `other` lies to the
    /// left of `self`.
    pub fn cross(&self, other: &Self) -> T {
        self.x * other.y - self.y * other.x
    }

    pub fn sq_length(&self) -> T {
        self.dot(self)
    }

    pub fn length(&self) -> T {
        self.sq_length().sqrt()
    }

    pub fn sq_distance(&self, other: &Self) -> T {
        (*self - *other).sq_length()
    }

    pub fn distance(&self, other: &Self) -> T {
        self.sq_distance(other).sqrt()
    }

    /// Unit vector with the same direction, `None` for the zero vector.
    pub fn normalize(&self) -> Option<Self> {
        let length = self.length();
        if length > T::ZERO && length.is_finite() {
            Some(*self / length)
        } else {
            None
        }
    }

    /// Unsigned angle between two vectors, in `[0, π]`.
    ///
    /// Parallel and anti-parallel vectors give exactly `0` and `π`.
    pub fn angle_to(&self, other: &Self) -> T {
        self.cross(other).abs().atan2(self.dot(other))
    }

    /// Counter-clockwise perpendicular.
    pub fn perp(&self) -> Self {
        Self {
            x: -self.y,
            y: self.x,
        }
    }

    pub fn midpoint(&self, other: &Self) -> Self {
        (*self + *other) * T::HALF
    }

    pub fn aprox_eq(&self, other: &Self, tolerance: T) -> bool {
        (self.x - other.x).abs() <= tolerance && (self.y - other.y).abs() <= tolerance
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl<S: num_traits::NumCast> Point<S> {
    pub fn cast<I: num_traits::NumCast>(self) -> Option<Point<I>> {
        num_traits::cast(self.x).and_then(|x| num_traits::cast(self.y).map(|y| Point { x, y }))
    }
}

impl<S> Point<S> {
    pub fn as_<I: Copy + 'static>(self) -> Point<I>
    where
        S: AsPrimitive<I>,
    {
        Point {
            x: self.x.as_(),
            y: self.y.as_(),
        }
    }
}

impl<T: std::fmt::Display> std::fmt::Display for Point<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

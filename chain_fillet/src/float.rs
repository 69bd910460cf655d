use std::{
    fmt::{Debug, Display},
    ops::{AddAssign, DivAssign, MulAssign, SubAssign},
};

use num_traits::{ConstOne, ConstZero};

pub trait Float:
    'static
    + Debug
    + Display
    + Sync
    + Send
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
    + num_traits::Float
    + num_traits::NumCast
    + ConstZero
    + ConstOne
{
    const HALF: Self;
    const TWO: Self;
    const PI: Self;
    const EPSILON: Self;
    /// Threshold on the cross product below which three points do not
    /// count as a counter-clockwise turn.
    const TURN_EPSILON: Self;
}

impl Float for f32 {
    const HALF: Self = 0.5;
    const TWO: Self = 2.0;
    const PI: Self = core::f32::consts::PI;
    const EPSILON: Self = f32::EPSILON;
    const TURN_EPSILON: Self = 1e-8;
}

impl Float for f64 {
    const HALF: Self = 0.5;
    const TWO: Self = 2.0;
    const PI: Self = core::f64::consts::PI;
    const EPSILON: Self = f64::EPSILON;
    const TURN_EPSILON: Self = 1e-8;
}

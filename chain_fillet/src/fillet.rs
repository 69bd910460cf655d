use std::fmt;

use crate::{
    chain::{Chain, Vertex},
    geometry::{Point, Turn},
    verboser::{Logger, Message, Verboser},
    Float,
};

/// Why a corner was left sharp.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum SkipReason {
    /// First vertex of an open chain.
    NoPredecessor,
    /// Last vertex of an open chain.
    NoSuccessor,
    /// One of the two segments meeting at the corner is already an arc.
    ArcSegment,
    /// Both segments are aligned, there is no corner to round.
    Straight,
    /// The arc would reach past the far end of one of the segments.
    TooLarge,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::NoPredecessor => write!(f, "no incoming segment"),
            SkipReason::NoSuccessor => write!(f, "no outgoing segment"),
            SkipReason::ArcSegment => write!(f, "adjacent to an arc"),
            SkipReason::Straight => write!(f, "straight corner"),
            SkipReason::TooLarge => write!(f, "radius does not fit"),
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Corner<T> {
    /// The corner was replaced by an arc from `start` to `end`.
    Rounded {
        start: Point<T>,
        end: Point<T>,
        bulge: T,
    },
    Skipped(SkipReason),
}

impl<T> Corner<T> {
    pub fn is_rounded(&self) -> bool {
        matches!(self, Corner::Rounded { .. })
    }

    /// Extra indices a traversal has to step over after this corner.
    pub fn consumed(&self) -> usize {
        match self {
            Corner::Rounded { .. } => 1,
            Corner::Skipped(_) => 0,
        }
    }
}

#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub struct FilletReport {
    pub rounded: usize,
    pub skipped: usize,
}

impl fmt::Display for FilletReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} corners rounded, {} left sharp",
            self.rounded, self.skipped
        )
    }
}

fn check_radius<T: Float>(radius: T) -> Result<(), FilletError> {
    if radius.is_finite() && radius >= T::ZERO {
        Ok(())
    } else {
        Err(FilletError::InvalidRadius(
            radius.to_f64().unwrap_or(f64::NAN),
        ))
    }
}

/// Rounds the corner at vertex `index` with an arc of `radius` tangent to
/// both straight segments meeting there.
///
/// On success a vertex holding the arc start is inserted at `index` and the
/// original corner vertex, now at `index + 1`, is moved to the arc end. The
/// bulge it carries for its own outgoing segment is left as it was. A
/// skipped corner leaves the chain untouched.
pub fn try_fillet_corner<T: Float>(
    chain: &mut Chain<T>,
    index: usize,
    radius: T,
) -> Result<Corner<T>, FilletError> {
    if index >= chain.len() {
        return Err(FilletError::IndexOutOfRange {
            index,
            len: chain.len(),
        });
    }
    check_radius(radius)?;

    let Some(prev) = chain.prev_index(index) else {
        return Ok(Corner::Skipped(SkipReason::NoPredecessor));
    };
    let (Some(incoming), Some(outgoing)) = (chain.segment(prev), chain.segment(index)) else {
        return Ok(Corner::Skipped(SkipReason::NoSuccessor));
    };
    let (Some(incoming), Some(outgoing)) = (incoming.as_line(), outgoing.as_line()) else {
        return Ok(Corner::Skipped(SkipReason::ArcSegment));
    };

    let back = incoming.start - incoming.end;
    let ahead = outgoing.end - outgoing.start;
    let half_angle = (T::PI - back.angle_to(&ahead)) * T::HALF;
    let tangent = radius * half_angle.tan();
    log::trace!("Corner {index}: tangent length {tangent}");

    if tangent == T::ZERO {
        return Ok(Corner::Skipped(SkipReason::Straight));
    }
    if tangent > incoming.length() || tangent > outgoing.length() {
        return Ok(Corner::Skipped(SkipReason::TooLarge));
    }
    let (Some(back), Some(ahead)) = (back.normalize(), ahead.normalize()) else {
        return Ok(Corner::Skipped(SkipReason::TooLarge));
    };

    let start = incoming.end + back * tangent;
    let end = outgoing.start + ahead * tangent;
    let mut bulge = (half_angle * T::HALF).tan();
    if !Turn::of(incoming.start, incoming.end, outgoing.end).is_counter_clockwise() {
        bulge = -bulge;
    }

    chain.insert(index, Vertex::new(start, bulge));
    chain.set_point(index + 1, end);
    Ok(Corner::Rounded { start, end, bulge })
}

/// Rounds the corner at vertex `index`, returning whether it was rounded.
pub fn fillet_corner<T: Float>(
    chain: &mut Chain<T>,
    index: usize,
    radius: T,
) -> Result<bool, FilletError> {
    try_fillet_corner(chain, index, radius).map(|corner| corner.is_rounded())
}

/// Rounds every corner of the chain once, logging each decision.
pub fn fillet_all<T: Float>(chain: &mut Chain<T>, radius: T) -> Result<FilletReport, FilletError> {
    fillet_all_verbose(chain, radius, &mut Logger)
}

/// Rounds every corner of the chain once, from the first vertex to the last.
///
/// The end vertices of an open chain are never candidates. Each rounded
/// corner inserts a vertex, so the bound is re-read from the chain on every
/// step and the freshly inserted vertex is stepped over.
pub fn fillet_all_verbose<T: Float, V: Verboser<T>>(
    chain: &mut Chain<T>,
    radius: T,
    verboser: &mut V,
) -> Result<FilletReport, FilletError> {
    check_radius(radius)?;
    let skip = if chain.is_closed() { 0 } else { 1 };
    let mut report = FilletReport::default();
    let mut index = skip;
    while index < chain.len() - skip {
        let corner = try_fillet_corner(chain, index, radius)?;
        match corner {
            Corner::Rounded { bulge, .. } => {
                report.rounded += 1;
                verboser.verbose(Message::Rounded { index, bulge });
            }
            Corner::Skipped(reason) => {
                report.skipped += 1;
                verboser.verbose(Message::Skipped { index, reason });
            }
        }
        index += 1 + corner.consumed();
    }
    verboser.verbose(Message::Finished(report));
    Ok(report)
}

/// Returns a rounded copy, leaving `chain` as it is.
pub fn filleted<T: Float>(chain: &Chain<T>, radius: T) -> Result<Chain<T>, FilletError> {
    let mut copy = chain.clone();
    fillet_all(&mut copy, radius)?;
    Ok(copy)
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum FilletError {
    #[error("Vertex index {index} is out of range for a chain of {len} vertices")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("Invalid fillet radius {0}")]
    InvalidRadius(f64),
}

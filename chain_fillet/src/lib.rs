pub mod geometry {
    pub mod arc;
    pub mod point;
    pub mod segment;
    pub mod turn;

    pub use arc::Arc;
    pub use point::Point;
    pub use segment::Segment;
    pub use turn::Turn;
}

pub mod chain;
pub mod fillet;
mod float;
pub mod profile;
pub mod verboser;

pub use chain::{Chain, ChainError, ChainSegment, SegmentKind, Vertex};
pub use fillet::{
    fillet_all, fillet_all_verbose, fillet_corner, filleted, try_fillet_corner, Corner,
    FilletError, FilletReport, SkipReason,
};
pub use float::Float;
pub use profile::BlockKind;

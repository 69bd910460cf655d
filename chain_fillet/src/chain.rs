use num_traits::AsPrimitive;
use serde::{Deserialize, Serialize};

use crate::{
    geometry::{Arc, Point, Segment, Turn},
    Float,
};

/// A chain vertex: its position and the bulge of the segment leaving it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Vertex<T> {
    #[serde(flatten)]
    pub point: Point<T>,
    pub bulge: T,
}

impl<T> Vertex<T> {
    pub fn new(point: Point<T>, bulge: T) -> Self {
        Self { point, bulge }
    }
}

impl<T: Float> Vertex<T> {
    pub fn line(point: Point<T>) -> Self {
        Self::new(point, T::ZERO)
    }
}

impl<T> Vertex<T> {
    pub fn as_<S: Copy + 'static>(self) -> Vertex<S>
    where
        T: AsPrimitive<S>,
    {
        Vertex {
            point: self.point.as_(),
            bulge: self.bulge.as_(),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum SegmentKind {
    Line,
    Arc,
}

/// Geometry of one chain segment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ChainSegment<T> {
    Line(Segment<T>),
    Arc(Arc<T>),
}

impl<T: Float> ChainSegment<T> {
    fn new(start: Point<T>, end: Point<T>, bulge: T) -> Self {
        match Arc::from_bulge(start, end, bulge) {
            Some(arc) => ChainSegment::Arc(arc),
            None => ChainSegment::Line(Segment::new(start, end)),
        }
    }

    pub fn kind(&self) -> SegmentKind {
        match self {
            ChainSegment::Line(_) => SegmentKind::Line,
            ChainSegment::Arc(_) => SegmentKind::Arc,
        }
    }

    pub fn start(&self) -> Point<T> {
        match self {
            ChainSegment::Line(line) => line.start,
            ChainSegment::Arc(arc) => arc.start,
        }
    }

    pub fn end(&self) -> Point<T> {
        match self {
            ChainSegment::Line(line) => line.end,
            ChainSegment::Arc(arc) => arc.end,
        }
    }

    pub fn length(&self) -> T {
        match self {
            ChainSegment::Line(line) => line.length(),
            ChainSegment::Arc(arc) => arc.length(),
        }
    }

    pub fn as_line(&self) -> Option<Segment<T>> {
        match self {
            ChainSegment::Line(line) => Some(*line),
            ChainSegment::Arc(_) => None,
        }
    }
}

/// Ordered vertices joined by straight or circular segments.
///
/// Segment `i` runs from vertex `i` to vertex `i + 1`. A closed chain has one
/// more segment, from the last vertex back to the first. Vertices can be
/// inserted or moved but never removed, and a chain always keeps at least
/// two of them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ChainData<T>")]
pub struct Chain<T> {
    vertices: Vec<Vertex<T>>,
    closed: bool,
}

#[derive(Deserialize)]
struct ChainData<T> {
    vertices: Vec<Vertex<T>>,
    closed: bool,
}

impl<T> TryFrom<ChainData<T>> for Chain<T> {
    type Error = ChainError;

    fn try_from(data: ChainData<T>) -> Result<Self, Self::Error> {
        Chain::new(data.vertices, data.closed)
    }
}

impl<T> Chain<T> {
    pub fn new(vertices: Vec<Vertex<T>>, closed: bool) -> Result<Self, ChainError> {
        if vertices.len() < 2 {
            return Err(ChainError::TooFewVertices(vertices.len()));
        }
        Ok(Self { vertices, closed })
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    // Always false once constructed.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn vertices(&self) -> &[Vertex<T>] {
        &self.vertices
    }

    pub fn vertex(&self, index: usize) -> Option<&Vertex<T>> {
        self.vertices.get(index)
    }

    /// Number of segments: one per vertex when closed, one less when open.
    pub fn segment_count(&self) -> usize {
        if self.closed {
            self.vertices.len()
        } else {
            self.vertices.len() - 1
        }
    }

    /// Index of the vertex the segment `index` ends at.
    pub fn next_index(&self, index: usize) -> Option<usize> {
        if index >= self.segment_count() {
            None
        } else {
            Some((index + 1) % self.vertices.len())
        }
    }

    /// Index of the segment ending at vertex `index`.
    pub fn prev_index(&self, index: usize) -> Option<usize> {
        match index {
            _ if index >= self.vertices.len() => None,
            0 if self.closed => Some(self.vertices.len() - 1),
            0 => None,
            _ => Some(index - 1),
        }
    }

    /// Inserts `vertex` at `index`, shifting the vertices from `index` on by
    /// one position.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    pub fn insert(&mut self, index: usize, vertex: Vertex<T>) {
        self.vertices.insert(index, vertex);
    }

    /// Moves vertex `index`, keeping the bulge of its outgoing segment.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn set_point(&mut self, index: usize, point: Point<T>) {
        self.vertices[index].point = point;
    }

    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn set_bulge(&mut self, index: usize, bulge: T) {
        self.vertices[index].bulge = bulge;
    }

    pub fn as_<S: Copy + 'static>(&self) -> Chain<S>
    where
        T: AsPrimitive<S>,
    {
        Chain {
            vertices: self.vertices.iter().map(|vertex| vertex.as_()).collect(),
            closed: self.closed,
        }
    }
}

impl<T: Float> Chain<T> {
    /// Builds a chain made only of straight segments.
    pub fn polygon<I>(points: I, closed: bool) -> Result<Self, ChainError>
    where
        I: IntoIterator<Item = Point<T>>,
    {
        Self::new(points.into_iter().map(Vertex::line).collect(), closed)
    }

    /// Closed four-sided chain of straight segments.
    pub fn quad(corners: [Point<T>; 4]) -> Self {
        Self {
            vertices: corners.into_iter().map(Vertex::line).collect(),
            closed: true,
        }
    }

    pub fn point(&self, index: usize) -> Option<Point<T>> {
        self.vertices.get(index).map(|vertex| vertex.point)
    }

    pub fn bulge(&self, index: usize) -> Option<T> {
        self.vertices.get(index).map(|vertex| vertex.bulge)
    }

    pub fn segment(&self, index: usize) -> Option<ChainSegment<T>> {
        let next = self.next_index(index)?;
        let start = &self.vertices[index];
        Some(ChainSegment::new(
            start.point,
            self.vertices[next].point,
            start.bulge,
        ))
    }

    pub fn segment_kind(&self, index: usize) -> Option<SegmentKind> {
        self.segment(index).map(|segment| segment.kind())
    }

    pub fn segments(&self) -> impl Iterator<Item = ChainSegment<T>> + '_ {
        (0..self.segment_count()).filter_map(|index| self.segment(index))
    }

    /// Total length, arcs measured along the curve.
    pub fn length(&self) -> T {
        self.segments()
            .fold(T::ZERO, |total, segment| total + segment.length())
    }

    /// Enclosed area, positive for counter-clockwise chains. Open chains
    /// enclose nothing.
    pub fn signed_area(&self) -> T {
        if !self.closed {
            return T::ZERO;
        }
        let twice = self.segments().fold(T::ZERO, |total, segment| {
            let (start, end) = (segment.start(), segment.end());
            total + start.cross(&end)
        });
        let bulges = self.segments().fold(T::ZERO, |total, segment| match segment {
            ChainSegment::Arc(arc) => total + arc.segment_area(),
            ChainSegment::Line(_) => total,
        });
        twice * T::HALF + bulges
    }

    /// Winding direction of a closed chain, [`Turn::Collinear`] for open or
    /// degenerate ones.
    pub fn orientation(&self) -> Turn {
        Turn::from_signed(self.signed_area())
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ChainError {
    #[error("A chain needs at least 2 vertices, got {0}")]
    TooFewVertices(usize),
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    fn square() -> Chain<f64> {
        Chain::polygon(
            [
                Point::new(0.0, 0.0),
                Point::new(10.0, 0.0),
                Point::new(10.0, 10.0),
                Point::new(0.0, 10.0),
            ],
            true,
        )
        .unwrap()
    }

    #[test]
    fn rejects_short_chains() {
        assert_eq!(
            Chain::<f64>::polygon([Point::new(1.0, 1.0)], false),
            Err(ChainError::TooFewVertices(1))
        );
        assert_eq!(
            Chain::<f64>::new(Vec::new(), true),
            Err(ChainError::TooFewVertices(0))
        );
    }

    #[test]
    fn closed_chain_wraps_around() {
        let chain = square();
        assert_eq!(chain.segment_count(), 4);
        assert_eq!(chain.prev_index(0), Some(3));
        assert_eq!(chain.next_index(3), Some(0));
        let last = chain.segment(3).unwrap();
        assert_eq!(last.start(), Point::new(0.0, 10.0));
        assert_eq!(last.end(), Point::new(0.0, 0.0));
    }

    #[test]
    fn open_chain_has_no_wraparound() {
        let chain = Chain::polygon(
            [Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(1.0, 1.0)],
            false,
        )
        .unwrap();
        assert_eq!(chain.segment_count(), 2);
        assert_eq!(chain.prev_index(0), None);
        assert_eq!(chain.next_index(2), None);
        assert!(chain.segment(2).is_none());
        assert!(chain.segment_kind(2).is_none());
        assert_eq!(chain.signed_area(), 0.0);
        assert_eq!(chain.orientation(), Turn::Collinear);
    }

    #[test]
    fn insert_shifts_later_vertices() {
        let mut chain = square();
        chain.insert(1, Vertex::new(Point::new(5.0, 0.0), 0.5));
        assert_eq!(chain.len(), 5);
        assert_eq!(chain.point(1), Some(Point::new(5.0, 0.0)));
        assert_eq!(chain.point(2), Some(Point::new(10.0, 0.0)));
        assert_eq!(chain.segment_kind(1), Some(SegmentKind::Arc));
        assert_eq!(chain.segment_kind(0), Some(SegmentKind::Line));
    }

    #[test]
    fn set_point_keeps_bulge() {
        let mut chain = square();
        chain.set_bulge(2, -0.25);
        chain.set_point(2, Point::new(12.0, 12.0));
        assert_eq!(chain.bulge(2), Some(-0.25));
        assert_eq!(chain.point(2), Some(Point::new(12.0, 12.0)));
    }

    #[test]
    fn square_measures() {
        let chain = square();
        assert_abs_diff_eq!(chain.length(), 40.0);
        assert_abs_diff_eq!(chain.signed_area(), 100.0);
        assert_eq!(chain.orientation(), Turn::CounterClockwise);
    }

    #[test]
    fn arc_contributes_to_area_and_length() {
        // Half disc: diameter along the x axis, arc below it going back.
        let chain = Chain::new(
            vec![
                Vertex::new(Point::new(1.0, 0.0), 0.0),
                Vertex::new(Point::new(-1.0, 0.0), 1.0),
            ],
            true,
        )
        .unwrap();
        assert_abs_diff_eq!(chain.signed_area(), std::f64::consts::FRAC_PI_2, epsilon = 1e-12);
        assert_abs_diff_eq!(chain.length(), 2.0 + std::f64::consts::PI, epsilon = 1e-12);
    }

    #[test]
    fn serializes_vertices_flat() {
        let chain = Chain::new(
            vec![
                Vertex::new(Point::new(0.0, 0.0), 0.0),
                Vertex::new(Point::new(1.0, 2.0), 0.5),
            ],
            false,
        )
        .unwrap();
        let json = serde_json::to_value(&chain).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "vertices": [
                    { "x": 0.0, "y": 0.0, "bulge": 0.0 },
                    { "x": 1.0, "y": 2.0, "bulge": 0.5 }
                ],
                "closed": false
            })
        );
        let back: Chain<f64> = serde_json::from_value(json).unwrap();
        assert_eq!(back, chain);
    }

    #[test]
    fn deserialization_checks_vertex_count() {
        let json = r#"{ "vertices": [ { "x": 0, "y": 0, "bulge": 0 } ], "closed": true }"#;
        assert!(serde_json::from_str::<Chain<f64>>(json).is_err());
    }
}

//! Line shape.

use super::{ShapeId, ShapeTrait};
use kurbo::{Affine, Point, Rect, Vec2};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One of the two ends of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Endpoint {
    Start,
    End,
}

impl Endpoint {
    /// Map a handle index (0 = start, 1 = end) to an endpoint.
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Endpoint::Start),
            1 => Some(Endpoint::End),
            _ => None,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Endpoint::Start => 0,
            Endpoint::End => 1,
        }
    }
}

/// A straight line segment.
///
/// A line stores two coordinate pairs: `points`, relative to `position` and used
/// for rendering, and `end_points` in canvas space. They always satisfy
/// `end_points[i] == position + rotate(points[i], rotation)`.
///
/// Every endpoint edit reprojects the line: `position` becomes the component-wise
/// minimum of the endpoints and `points` the offsets from that corner, so local
/// points always sit in the non-negative quadrant. Reprojection bakes any rotation
/// into the endpoints and resets `rotation` to zero.
///
/// Deserialized lines are rebuilt from `endPoints` alone; any stored `position`,
/// `points` or `rotation` is recomputed so both frames agree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawLine")]
pub struct Line {
    pub(crate) id: ShapeId,
    position: Point,
    points: [Point; 2],
    end_points: [Point; 2],
    rotation: f64,
    pub draggable: bool,
}

/// Serialized form of a line as accepted on load.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawLine {
    id: ShapeId,
    end_points: [Point; 2],
    #[serde(default = "super::default_draggable")]
    draggable: bool,
}

impl From<RawLine> for Line {
    fn from(raw: RawLine) -> Self {
        let mut line = Line::new(raw.end_points[0], raw.end_points[1]);
        line.id = raw.id;
        line.draggable = raw.draggable;
        line
    }
}

impl Line {
    /// Create a new line between two canvas points.
    pub fn new(start: Point, end: Point) -> Self {
        let mut line = Self {
            id: Uuid::new_v4(),
            position: Point::ZERO,
            points: [Point::ZERO; 2],
            end_points: [start, end],
            rotation: 0.0,
            draggable: true,
        };
        line.reproject();
        line
    }

    /// Local point pair, relative to `position`.
    pub fn points(&self) -> [Point; 2] {
        self.points
    }

    /// Absolute endpoints in canvas space.
    pub fn end_points(&self) -> [Point; 2] {
        self.end_points
    }

    pub fn end_point(&self, endpoint: Endpoint) -> Point {
        self.end_points[endpoint.index()]
    }

    /// Move one endpoint to `point` (canvas space) and reproject.
    pub fn set_end_point(&mut self, endpoint: Endpoint, point: Point) {
        self.end_points[endpoint.index()] = point;
        self.reproject();
    }

    /// Replace the local point pair. The endpoints are derived from the current
    /// position and rotation, then the line is reprojected.
    pub fn set_local_points(&mut self, points: [Point; 2]) {
        self.points = points;
        self.sync_end_points();
        self.reproject();
    }

    /// Move the whole line without changing its shape.
    pub fn translate(&mut self, delta: Vec2) {
        self.position += delta;
        for p in &mut self.end_points {
            *p += delta;
        }
    }

    /// Get the length of the line.
    pub fn length(&self) -> f64 {
        (self.end_points[1] - self.end_points[0]).hypot()
    }

    /// Get the midpoint of the line.
    pub fn midpoint(&self) -> Point {
        self.end_points[0].midpoint(self.end_points[1])
    }

    /// Transform from the local frame to canvas space.
    pub fn local_transform(&self) -> Affine {
        Affine::translate(self.position.to_vec2()) * Affine::rotate(self.rotation.to_radians())
    }

    fn sync_end_points(&mut self) {
        let transform = self.local_transform();
        self.end_points = self.points.map(|p| transform * p);
    }

    fn reproject(&mut self) {
        let [a, b] = self.end_points;
        let corner = Point::new(a.x.min(b.x), a.y.min(b.y));
        self.position = corner;
        self.points = self.end_points.map(|p| (p - corner).to_point());
        self.rotation = 0.0;
    }
}

impl ShapeTrait for Line {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn bounds(&self) -> Rect {
        Rect::from_points(self.end_points[0], self.end_points[1])
    }

    fn position(&self) -> Point {
        self.position
    }

    fn set_position(&mut self, position: Point) {
        self.translate(position - self.position);
    }

    fn rotation(&self) -> f64 {
        self.rotation
    }

    /// Rotating keeps the local frame and recomputes the absolute endpoints.
    fn set_rotation(&mut self, degrees: f64) {
        self.rotation = degrees;
        self.sync_end_points();
    }
}

//! Shape definitions for the layout canvas.

mod arc;
mod circle;
mod line;
mod rectangle;

pub use arc::Arc;
pub use circle::Circle;
pub use line::{Endpoint, Line};
pub use rectangle::Rectangle;

use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for shapes.
pub type ShapeId = Uuid;

/// Default origin for shapes created from the toolbar.
pub const DEFAULT_ORIGIN: Point = Point::new(100.0, 100.0);

/// Default edge length (or diameter) for box-like shapes created from the toolbar.
pub const DEFAULT_SIZE: f64 = 80.0;

/// Default length of a new horizontal line.
pub const DEFAULT_LINE_LENGTH: f64 = 100.0;

/// Common trait for all shapes.
pub trait ShapeTrait {
    /// Get the unique identifier.
    fn id(&self) -> ShapeId;

    /// Get the axis-aligned bounding box in world coordinates, ignoring rotation.
    fn bounds(&self) -> Rect;

    /// Top-left corner of the bounding box.
    fn position(&self) -> Point;

    /// Move the shape so that its top-left corner lands on `position`.
    fn set_position(&mut self, position: Point);

    /// Rotation in degrees about the shape's local origin.
    fn rotation(&self) -> f64;

    /// Set the rotation in degrees.
    fn set_rotation(&mut self, degrees: f64);
}

/// The kind of a shape, without its geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Rectangle,
    Arc,
    Circle,
    Line,
}

/// Enum wrapper for all shape types.
///
/// Box-like variants (rectangle, arc, circle) are positioned by the top-left
/// corner of their bounding box. Lines keep a local point pair and absolute
/// endpoints in sync, see [`Line`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
#[non_exhaustive]
pub enum Shape {
    Rectangle(Rectangle),
    Arc(Arc),
    Circle(Circle),
    Line(Line),
}

impl Shape {
    /// Create a shape with the toolbar defaults for `kind`.
    pub fn with_defaults(kind: ShapeKind) -> Self {
        match kind {
            ShapeKind::Rectangle => {
                Shape::Rectangle(Rectangle::new(DEFAULT_ORIGIN, DEFAULT_SIZE, DEFAULT_SIZE))
            }
            ShapeKind::Arc => Shape::Arc(Arc::new(DEFAULT_ORIGIN, DEFAULT_SIZE)),
            ShapeKind::Circle => Shape::Circle(Circle::new(DEFAULT_ORIGIN, DEFAULT_SIZE)),
            ShapeKind::Line => Shape::Line(Line::new(
                DEFAULT_ORIGIN,
                Point::new(DEFAULT_ORIGIN.x + DEFAULT_LINE_LENGTH, DEFAULT_ORIGIN.y),
            )),
        }
    }

    pub fn id(&self) -> ShapeId {
        match self {
            Shape::Rectangle(s) => s.id(),
            Shape::Arc(s) => s.id(),
            Shape::Circle(s) => s.id(),
            Shape::Line(s) => s.id(),
        }
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Rectangle(_) => ShapeKind::Rectangle,
            Shape::Arc(_) => ShapeKind::Arc,
            Shape::Circle(_) => ShapeKind::Circle,
            Shape::Line(_) => ShapeKind::Line,
        }
    }

    pub fn bounds(&self) -> Rect {
        match self {
            Shape::Rectangle(s) => s.bounds(),
            Shape::Arc(s) => s.bounds(),
            Shape::Circle(s) => s.bounds(),
            Shape::Line(s) => s.bounds(),
        }
    }

    pub fn position(&self) -> Point {
        match self {
            Shape::Rectangle(s) => s.position(),
            Shape::Arc(s) => s.position(),
            Shape::Circle(s) => s.position(),
            Shape::Line(s) => s.position(),
        }
    }

    /// Move the shape's origin. Lines are translated rigidly so both
    /// endpoints follow.
    pub fn set_position(&mut self, position: Point) {
        match self {
            Shape::Rectangle(s) => s.set_position(position),
            Shape::Arc(s) => s.set_position(position),
            Shape::Circle(s) => s.set_position(position),
            Shape::Line(s) => s.set_position(position),
        }
    }

    /// Get the rotation angle in degrees.
    pub fn rotation(&self) -> f64 {
        match self {
            Shape::Rectangle(s) => s.rotation(),
            Shape::Arc(s) => s.rotation(),
            Shape::Circle(s) => s.rotation(),
            Shape::Line(s) => s.rotation(),
        }
    }

    /// Set the rotation angle in degrees.
    pub fn set_rotation(&mut self, degrees: f64) {
        match self {
            Shape::Rectangle(s) => s.set_rotation(degrees),
            Shape::Arc(s) => s.set_rotation(degrees),
            Shape::Circle(s) => s.set_rotation(degrees),
            Shape::Line(s) => s.set_rotation(degrees),
        }
    }

    pub fn is_draggable(&self) -> bool {
        match self {
            Shape::Rectangle(s) => s.draggable,
            Shape::Arc(s) => s.draggable,
            Shape::Circle(s) => s.draggable,
            Shape::Line(s) => s.draggable,
        }
    }

    /// Width and height of a box-like shape. `None` for lines.
    ///
    /// Arcs and circles report their diameter on both axes.
    pub fn box_size(&self) -> Option<(f64, f64)> {
        match self {
            Shape::Rectangle(s) => Some((s.width, s.height)),
            Shape::Arc(s) => Some((s.diameter, s.diameter)),
            Shape::Circle(s) => Some((s.diameter, s.diameter)),
            Shape::Line(_) => None,
        }
    }

    /// Check if this shape is a line.
    pub fn is_line(&self) -> bool {
        matches!(self, Shape::Line(_))
    }

    /// Get the line if this shape is a line.
    pub fn as_line(&self) -> Option<&Line> {
        match self {
            Shape::Line(l) => Some(l),
            _ => None,
        }
    }

    /// Get the mutable line if this shape is a line.
    pub fn as_line_mut(&mut self) -> Option<&mut Line> {
        match self {
            Shape::Line(l) => Some(l),
            _ => None,
        }
    }
}

impl From<Rectangle> for Shape {
    fn from(rect: Rectangle) -> Self {
        Shape::Rectangle(rect)
    }
}

impl From<Arc> for Shape {
    fn from(arc: Arc) -> Self {
        Shape::Arc(arc)
    }
}

impl From<Circle> for Shape {
    fn from(circle: Circle) -> Self {
        Shape::Circle(circle)
    }
}

impl From<Line> for Shape {
    fn from(line: Line) -> Self {
        Shape::Line(line)
    }
}

fn default_draggable() -> bool {
    true
}

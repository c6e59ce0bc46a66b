//! Circle shape.

use super::{ShapeId, ShapeTrait};
use kurbo::{Point, Rect, Size};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A circle described by the top-left corner of its bounding square and its diameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub(crate) id: ShapeId,
    /// Top-left corner of the bounding square.
    pub position: Point,
    /// Diameter; the bounding box is `diameter x diameter`.
    pub diameter: f64,
    /// Rotation angle in degrees.
    #[serde(default)]
    pub rotation: f64,
    #[serde(default = "super::default_draggable")]
    pub draggable: bool,
}

impl Circle {
    /// Create a new circle.
    pub fn new(position: Point, diameter: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            position,
            diameter,
            rotation: 0.0,
            draggable: true,
        }
    }
}

impl ShapeTrait for Circle {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn bounds(&self) -> Rect {
        Rect::from_origin_size(self.position, Size::new(self.diameter, self.diameter))
    }

    fn position(&self) -> Point {
        self.position
    }

    fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    fn rotation(&self) -> f64 {
        self.rotation
    }

    fn set_rotation(&mut self, degrees: f64) {
        self.rotation = degrees;
    }
}

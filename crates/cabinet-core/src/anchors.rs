//! Anchor points: the geometrically significant points other shapes snap to.

use crate::shapes::Shape;
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// Type of anchor point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnchorKind {
    /// Corner of a bounding box, or a line endpoint.
    Corner,
    /// Midpoint of a bounding box edge.
    Edge,
    /// Center of a bounding box.
    Center,
}

/// A point on a shape that can be snapped to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchorPoint {
    /// The anchor location in canvas space.
    pub point: Point,
    /// Type of anchor for visual feedback.
    pub kind: AnchorKind,
}

impl AnchorPoint {
    pub fn new(point: Point, kind: AnchorKind) -> Self {
        Self { point, kind }
    }
}

/// Collect the anchor points of a shape.
///
/// Lines expose only their two endpoints. Box-like shapes expose four corners,
/// four edge midpoints and their center, taken from the unrotated bounding box.
pub fn anchors_of(shape: &Shape) -> Vec<AnchorPoint> {
    match shape {
        Shape::Line(line) => line
            .end_points()
            .into_iter()
            .map(|p| AnchorPoint::new(p, AnchorKind::Corner))
            .collect(),
        Shape::Rectangle(_) | Shape::Arc(_) | Shape::Circle(_) => anchors_from_bounds(shape.bounds()),
    }
}

/// Collect anchors from an axis-aligned bounding box.
pub fn anchors_from_bounds(bounds: Rect) -> Vec<AnchorPoint> {
    let center = bounds.center();
    vec![
        // Corners
        AnchorPoint::new(Point::new(bounds.x0, bounds.y0), AnchorKind::Corner),
        AnchorPoint::new(Point::new(bounds.x1, bounds.y0), AnchorKind::Corner),
        AnchorPoint::new(Point::new(bounds.x0, bounds.y1), AnchorKind::Corner),
        AnchorPoint::new(Point::new(bounds.x1, bounds.y1), AnchorKind::Corner),
        // Edge midpoints: top, right, bottom, left
        AnchorPoint::new(Point::new(center.x, bounds.y0), AnchorKind::Edge),
        AnchorPoint::new(Point::new(bounds.x1, center.y), AnchorKind::Edge),
        AnchorPoint::new(Point::new(center.x, bounds.y1), AnchorKind::Edge),
        AnchorPoint::new(Point::new(bounds.x0, center.y), AnchorKind::Edge),
        AnchorPoint::new(center, AnchorKind::Center),
    ]
}

//! Anchor-to-anchor snapping.

use super::{SnapGuide, SnapResult};
use crate::anchors::anchors_of;
use crate::shapes::{Shape, ShapeId};
use kurbo::Point;

/// Snap a point to the anchor points of other shapes.
///
/// Each axis is tested independently against every anchor of every shape except
/// `exclude`. An anchor captures an axis when its distance on that axis is strictly
/// less than `radius`; the capture radius is never tightened after a hit, so the
/// last capturing anchor in iteration order decides the coordinate. Every capture
/// emits a guide, duplicates included.
pub fn snap_to_anchor(
    point: Point,
    shapes: &[Shape],
    radius: f64,
    exclude: Option<ShapeId>,
) -> SnapResult {
    let mut result = SnapResult::none(point);

    for shape in shapes {
        if Some(shape.id()) == exclude {
            continue;
        }
        for anchor in anchors_of(shape) {
            if (point.x - anchor.point.x).abs() < radius {
                result.point.x = anchor.point.x;
                result.snapped_x = true;
                result.guides.push(SnapGuide::vertical(anchor.point.x));
            }
            if (point.y - anchor.point.y).abs() < radius {
                result.point.y = anchor.point.y;
                result.snapped_y = true;
                result.guides.push(SnapGuide::horizontal(anchor.point.y));
            }
        }
    }

    result
}

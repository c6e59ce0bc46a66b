//! Edge-to-edge adjacency snapping between box-like shapes.

use super::{SnapGuide, SnapOutcome};
use crate::shapes::Shape;

/// Snap a box-like shape flush against the right or bottom edge of its neighbours.
///
/// Two arrangements are tested per neighbour: the moving shape sitting below it
/// (top edge against the neighbour's bottom edge plus `gap`) and the moving shape
/// sitting to its right (left edge against the neighbour's right edge plus `gap`).
/// A candidate captures when its distance is strictly less than `threshold`.
/// Distances are always measured from the proposed position, and later
/// neighbours overwrite earlier captures. Pairs involving a line are skipped.
pub fn snap_to_adjacency(shape: &Shape, shapes: &[Shape], gap: f64, threshold: f64) -> SnapOutcome {
    if shape.is_line() {
        return SnapOutcome::unchanged(shape.clone());
    }

    let proposed = shape.position();
    let mut snapped = proposed;
    let mut guides = Vec::new();

    for other in shapes {
        if other.id() == shape.id() || other.is_line() {
            continue;
        }
        let bounds = other.bounds();

        let below = bounds.y1 + gap;
        if (proposed.y - below).abs() < threshold {
            snapped.y = below;
            guides.push(SnapGuide::horizontal(below));
        }

        let beside = bounds.x1 + gap;
        if (proposed.x - beside).abs() < threshold {
            snapped.x = beside;
            guides.push(SnapGuide::vertical(beside));
        }
    }

    let mut result = shape.clone();
    result.set_position(snapped);
    SnapOutcome::new(result, guides)
}

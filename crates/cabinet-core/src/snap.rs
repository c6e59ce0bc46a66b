//! Snap functionality for aligning shapes to the grid, to other shapes' anchors,
//! and flush against neighbouring shapes.
//!
//! Every function here is pure: shapes are read by reference and corrected
//! values are returned together with a fresh list of guides.

mod adjacency;
mod anchor;
mod grid;

pub use adjacency::snap_to_adjacency;
pub use anchor::snap_to_anchor;
pub use grid::{snap_shape_to_grid, snap_to_grid};

use crate::config::{SnapConfig, SnapMode};
use crate::shapes::{Shape, ShapeId};
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Orientation of a guide line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GuideAxis {
    /// A vertical line at a fixed x.
    Vertical,
    /// A horizontal line at a fixed y.
    Horizontal,
}

/// A visual alignment hint shown while dragging.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SnapGuide {
    pub axis: GuideAxis,
    /// x for vertical guides, y for horizontal guides.
    pub position: f64,
}

impl SnapGuide {
    pub fn vertical(x: f64) -> Self {
        Self {
            axis: GuideAxis::Vertical,
            position: x,
        }
    }

    pub fn horizontal(y: f64) -> Self {
        Self {
            axis: GuideAxis::Horizontal,
            position: y,
        }
    }
}

/// Result of snapping a single point.
#[derive(Debug, Clone, PartialEq)]
pub struct SnapResult {
    /// The snapped point.
    pub point: Point,
    /// Whether the X coordinate was snapped.
    pub snapped_x: bool,
    /// Whether the Y coordinate was snapped.
    pub snapped_y: bool,
    /// Guides produced while snapping.
    pub guides: Vec<SnapGuide>,
}

impl SnapResult {
    /// Create a result with no snapping.
    pub fn none(point: Point) -> Self {
        Self {
            point,
            snapped_x: false,
            snapped_y: false,
            guides: Vec::new(),
        }
    }

    /// Check if any snapping occurred.
    pub fn is_snapped(&self) -> bool {
        self.snapped_x || self.snapped_y
    }
}

/// Result of snapping a whole shape.
#[derive(Debug, Clone, PartialEq)]
pub struct SnapOutcome {
    /// The corrected shape.
    pub shape: Shape,
    /// Guides for the host to draw until the next drag starts.
    pub guides: Vec<SnapGuide>,
}

impl SnapOutcome {
    pub fn new(shape: Shape, guides: Vec<SnapGuide>) -> Self {
        Self { shape, guides }
    }

    /// The shape passed through untouched, without guides.
    pub fn unchanged(shape: Shape) -> Self {
        Self::new(shape, Vec::new())
    }
}

/// Snap a proposed shape according to the configured mode.
///
/// This is the entry point hosts call on every drag frame. `shapes` is the full
/// current shape list; the moving shape may be part of it and is never snapped
/// against itself.
pub fn apply_snapping(shape: &Shape, shapes: &[Shape], config: &SnapConfig) -> SnapOutcome {
    if !config.enabled {
        return SnapOutcome::unchanged(shape.clone());
    }

    let outcome = match config.mode {
        SnapMode::Grid => SnapOutcome::unchanged(snap_shape_to_grid(shape, config.grid_size)),
        SnapMode::Anchor => {
            let result = snap_to_anchor(
                shape.position(),
                shapes,
                config.anchor_snap_radius,
                Some(shape.id()),
            );
            let mut snapped = shape.clone();
            snapped.set_position(result.point);
            SnapOutcome::new(snapped, result.guides)
        }
        SnapMode::Adjacency => snap_to_adjacency(
            shape,
            shapes,
            config.effective_gap(),
            config.snap_threshold,
        ),
    };

    log::debug!(
        "Snapped {} in {:?} mode: {:?} -> {:?}, {} guides",
        shape.id(),
        config.mode,
        shape.position(),
        outcome.shape.position(),
        outcome.guides.len()
    );
    outcome
}

/// Snap a line endpoint being dragged by its handle.
///
/// Grid mode rounds the endpoint to the lattice, anchor mode aligns it with other
/// shapes' anchors (never the line's own). Adjacency only applies to box-like
/// shapes, so endpoints pass through there.
pub fn snap_line_endpoint(
    point: Point,
    line_id: ShapeId,
    shapes: &[Shape],
    config: &SnapConfig,
) -> SnapResult {
    if !config.enabled {
        return SnapResult::none(point);
    }
    match config.mode {
        SnapMode::Grid => {
            let snapped = snap_to_grid(point, config.grid_size);
            SnapResult {
                point: snapped,
                snapped_x: snapped.x != point.x,
                snapped_y: snapped.y != point.y,
                guides: Vec::new(),
            }
        }
        SnapMode::Anchor => snap_to_anchor(point, shapes, config.anchor_snap_radius, Some(line_id)),
        SnapMode::Adjacency => SnapResult::none(point),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AdjacencyMode;
    use crate::shapes::{Circle, Line, Rectangle};

    fn rect(x: f64, y: f64, w: f64, h: f64) -> Shape {
        Shape::from(Rectangle::new(Point::new(x, y), w, h))
    }

    fn config(mode: SnapMode) -> SnapConfig {
        SnapConfig {
            mode,
            ..SnapConfig::default()
        }
    }

    #[test]
    fn test_disabled_is_passthrough_for_every_mode() {
        let a = rect(0.0, 0.0, 100.0, 50.0);
        let b = rect(102.0, 3.0, 80.0, 80.0);
        let line = Shape::from(Line::new(Point::new(1.0, 1.0), Point::new(33.0, 7.0)));
        let shapes = [a, b.clone(), line.clone()];
        for mode in [SnapMode::Grid, SnapMode::Anchor, SnapMode::Adjacency] {
            let config = SnapConfig {
                enabled: false,
                ..config(mode)
            };
            for moving in [&b, &line] {
                let outcome = apply_snapping(moving, &shapes, &config);
                assert_eq!(&outcome.shape, moving);
                assert!(outcome.guides.is_empty());
            }
        }
    }

    #[test]
    fn test_grid_mode_emits_no_guides() {
        let b = rect(107.0, 193.0, 80.0, 80.0);
        let outcome = apply_snapping(&b, &[], &config(SnapMode::Grid));
        assert_eq!(outcome.shape.position(), Point::new(100.0, 200.0));
        assert!(outcome.guides.is_empty());
    }

    #[test]
    fn test_anchor_mode_excludes_moving_shape() {
        let committed = rect(0.0, 0.0, 40.0, 40.0);
        let mut moving = committed.clone();
        moving.set_position(Point::new(3.0, 3.0));
        let outcome = apply_snapping(&moving, &[committed], &config(SnapMode::Anchor));
        assert_eq!(outcome.shape.position(), Point::new(3.0, 3.0));
        assert!(outcome.guides.is_empty());
    }

    #[test]
    fn test_anchor_mode_aligns_origin() {
        let other = rect(0.0, 0.0, 100.0, 50.0);
        let moving = rect(97.0, 54.0, 20.0, 20.0);
        let outcome = apply_snapping(&moving, &[other], &config(SnapMode::Anchor));
        assert_eq!(outcome.shape.position(), Point::new(100.0, 50.0));
        assert_eq!(outcome.shape.box_size(), Some((20.0, 20.0)));
        assert!(!outcome.guides.is_empty());
    }

    #[test]
    fn test_anchor_mode_translates_lines_rigidly() {
        let other = rect(0.0, 0.0, 100.0, 50.0);
        let moving = Shape::from(Line::new(Point::new(96.0, 52.0), Point::new(146.0, 52.0)));
        let outcome = apply_snapping(&moving, &[other], &config(SnapMode::Anchor));
        let line = outcome.shape.as_line().unwrap();
        assert_eq!(line.end_points(), [Point::new(100.0, 50.0), Point::new(150.0, 50.0)]);
        assert!((line.length() - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_adjacency_contact_ignores_gap() {
        let a = rect(0.0, 0.0, 100.0, 50.0);
        let b = rect(102.0, 0.0, 80.0, 80.0);
        let config = SnapConfig {
            adjacency_gap: 30.0,
            adjacency_mode: AdjacencyMode::Contact,
            ..config(SnapMode::Adjacency)
        };
        let outcome = apply_snapping(&b, &[a], &config);
        assert_eq!(outcome.shape.position(), Point::new(100.0, 0.0));
        assert_eq!(outcome.guides, vec![SnapGuide::vertical(100.0)]);
    }

    #[test]
    fn test_adjacency_gap_mode() {
        let a = rect(0.0, 0.0, 100.0, 50.0);
        let b = Shape::from(Circle::new(Point::new(0.0, 78.0), 40.0));
        let config = SnapConfig {
            adjacency_gap: 25.0,
            adjacency_mode: AdjacencyMode::Gap,
            ..config(SnapMode::Adjacency)
        };
        let outcome = apply_snapping(&b, &[a], &config);
        assert_eq!(outcome.shape.position(), Point::new(0.0, 75.0));
        assert_eq!(outcome.guides, vec![SnapGuide::horizontal(75.0)]);
    }

    #[test]
    fn test_inputs_are_not_mutated() {
        let a = rect(0.0, 0.0, 100.0, 50.0);
        let b = rect(102.0, 0.0, 80.0, 80.0);
        let shapes = vec![a.clone(), b.clone()];
        let _ = apply_snapping(&b, &shapes, &config(SnapMode::Adjacency));
        assert_eq!(shapes, vec![a, b.clone()]);
        assert_eq!(b.position(), Point::new(102.0, 0.0));
    }

    #[test]
    fn test_snap_line_endpoint_modes() {
        let line = Line::new(Point::new(0.0, 0.0), Point::new(50.0, 0.0));
        let line_id = line.id;
        let other = rect(200.0, 200.0, 10.0, 10.0);
        let shapes = [Shape::from(line), other];

        let grid = snap_line_endpoint(Point::new(47.0, 12.0), line_id, &shapes, &config(SnapMode::Grid));
        assert_eq!(grid.point, Point::new(40.0, 20.0));
        assert!(grid.snapped_x && grid.snapped_y);

        let on_lattice =
            snap_line_endpoint(Point::new(40.0, 13.0), line_id, &shapes, &config(SnapMode::Grid));
        assert_eq!(on_lattice.point, Point::new(40.0, 20.0));
        assert!(!on_lattice.snapped_x);
        assert!(on_lattice.snapped_y);

        let untouched =
            snap_line_endpoint(Point::new(60.0, 80.0), line_id, &shapes, &config(SnapMode::Grid));
        assert!(!untouched.is_snapped());

        let anchor = snap_line_endpoint(
            Point::new(197.0, 3.0),
            line_id,
            &shapes,
            &config(SnapMode::Anchor),
        );
        // 200 and 205 are both within reach; the center anchor comes last.
        assert_eq!(anchor.point, Point::new(205.0, 3.0));
        assert!(anchor.snapped_x);
        assert!(!anchor.snapped_y);

        let adjacency = snap_line_endpoint(
            Point::new(197.0, 3.0),
            line_id,
            &shapes,
            &config(SnapMode::Adjacency),
        );
        assert!(!adjacency.is_snapped());
    }
}

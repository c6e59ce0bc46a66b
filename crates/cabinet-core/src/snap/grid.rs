//! Grid snapping.

use crate::shapes::Shape;
use kurbo::Point;

/// Snap a point to the nearest grid intersection.
///
/// Each axis rounds independently to the nearest multiple of `grid_size`,
/// halves rounding away from zero. `grid_size` must be positive; configurations
/// are validated before they reach this point.
pub fn snap_to_grid(point: Point, grid_size: f64) -> Point {
    Point::new(
        (point.x / grid_size).round() * grid_size,
        (point.y / grid_size).round() * grid_size,
    )
}

/// Snap a shape to the grid.
///
/// Box-like shapes snap their origin; size is untouched. Lines snap each local
/// point independently, which may change their length, and are then reprojected.
pub fn snap_shape_to_grid(shape: &Shape, grid_size: f64) -> Shape {
    match shape {
        Shape::Line(line) => {
            let mut line = line.clone();
            line.set_local_points(line.points().map(|p| snap_to_grid(p, grid_size)));
            Shape::Line(line)
        }
        Shape::Rectangle(_) | Shape::Arc(_) | Shape::Circle(_) => {
            let mut snapped = shape.clone();
            snapped.set_position(snap_to_grid(shape.position(), grid_size));
            snapped
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{Circle, Line, Rectangle, ShapeTrait};

    #[test]
    fn test_snap_to_grid() {
        assert_eq!(snap_to_grid(Point::new(107.0, 193.0), 20.0), Point::new(100.0, 200.0));
        assert_eq!(snap_to_grid(Point::new(23.0, 47.0), 20.0), Point::new(20.0, 40.0));
    }

    #[test]
    fn test_snap_to_grid_exact() {
        assert_eq!(snap_to_grid(Point::new(40.0, 60.0), 20.0), Point::new(40.0, 60.0));
    }

    #[test]
    fn test_halves_round_away_from_zero() {
        assert_eq!(snap_to_grid(Point::new(10.0, -10.0), 20.0), Point::new(20.0, -20.0));
    }

    #[test]
    fn test_idempotent() {
        let points = [
            Point::new(107.0, 193.0),
            Point::new(-33.3, 0.4),
            Point::new(12345.6, -987.65),
            Point::new(0.0, 0.0),
        ];
        for grid_size in [1.0, 7.5, 20.0, 64.0] {
            for p in points {
                let once = snap_to_grid(p, grid_size);
                assert_eq!(snap_to_grid(once, grid_size), once);
            }
        }
    }

    #[test]
    fn test_box_shape_snaps_origin_only() {
        let rect = Shape::from(Rectangle::new(Point::new(107.0, 193.0), 33.0, 47.0));
        let snapped = snap_shape_to_grid(&rect, 20.0);
        assert_eq!(snapped.position(), Point::new(100.0, 200.0));
        assert_eq!(snapped.box_size(), Some((33.0, 47.0)));
        assert_eq!(snapped.id(), rect.id());

        let circle = Shape::from(Circle::new(Point::new(-11.0, 9.0), 25.0));
        assert_eq!(snap_shape_to_grid(&circle, 10.0).position(), Point::new(-10.0, 10.0));
    }

    #[test]
    fn test_line_snaps_each_local_point() {
        let line = Shape::from(Line::new(Point::new(0.0, 0.0), Point::new(100.0, 0.0)));
        let snapped = snap_shape_to_grid(&line, 30.0);
        let snapped = snapped.as_line().unwrap();
        assert_eq!(snapped.end_points(), [Point::new(0.0, 0.0), Point::new(90.0, 0.0)]);
        assert!((snapped.length() - 90.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_line_snap_is_relative_to_position() {
        let line = Shape::from(Line::new(Point::new(5.0, 5.0), Point::new(47.0, 5.0)));
        let snapped = snap_shape_to_grid(&line, 20.0);
        let snapped = snapped.as_line().unwrap();
        assert_eq!(snapped.points(), [Point::new(0.0, 0.0), Point::new(40.0, 0.0)]);
        assert_eq!(snapped.end_points(), [Point::new(5.0, 5.0), Point::new(45.0, 5.0)]);
        assert_eq!(snapped.position(), Point::new(5.0, 5.0));
    }
}

//! Cabinet Designer Core Library
//!
//! Shape model and snapping engine for the Cabinet Designer layout editor.
//! Rendering, pointer handling and persistence live in the host; this crate
//! only computes where shapes should go and which guides to show.

pub mod anchors;
pub mod canvas;
pub mod config;
pub mod shapes;
pub mod snap;

pub use anchors::{AnchorKind, AnchorPoint, anchors_of};
pub use canvas::{CanvasDocument, CanvasError, CanvasResult};
pub use config::{AdjacencyMode, ConfigError, ConfigResult, SnapConfig, SnapConfigUpdate, SnapMode};
pub use shapes::{Endpoint, Shape, ShapeId, ShapeKind, ShapeTrait};
pub use snap::{
    GuideAxis, SnapGuide, SnapOutcome, SnapResult, apply_snapping, snap_line_endpoint,
    snap_shape_to_grid, snap_to_adjacency, snap_to_anchor, snap_to_grid,
};

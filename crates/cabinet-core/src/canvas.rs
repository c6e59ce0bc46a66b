//! Canvas document: the shape collection, selection and snap state a host drives.

use crate::config::{ConfigError, SnapConfig, SnapConfigUpdate};
use crate::shapes::{Endpoint, Shape, ShapeId, ShapeKind};
use crate::snap::{SnapGuide, apply_snapping, snap_line_endpoint};
use kurbo::{Point, Rect, Vec2};
use thiserror::Error;

/// Canvas errors.
#[derive(Debug, Error, PartialEq)]
pub enum CanvasError {
    #[error("Shape not found: {0}")]
    ShapeNotFound(ShapeId),
    #[error("Shape {0} is not a line")]
    NotALine(ShapeId),
    #[error("Shape already exists: {0}")]
    DuplicateId(ShapeId),
    #[error("Line endpoint index out of range: {0}")]
    EndpointIndex(usize),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Result type for canvas operations.
pub type CanvasResult<T> = Result<T, CanvasError>;

/// A canvas document containing all shapes and the snapping state.
///
/// Shapes are kept in z-order (back to front). Drag frames go through
/// [`CanvasDocument::drag_shape_to`], which snaps the proposed shape against the
/// current collection, commits the corrected shape and keeps the guides for the
/// renderer until the next drag starts.
#[derive(Debug, Clone, Default)]
pub struct CanvasDocument {
    shapes: Vec<Shape>,
    selected: Option<ShapeId>,
    snap_config: SnapConfig,
    guides: Vec<SnapGuide>,
}

impl CanvasDocument {
    /// Create a new empty document with the default snap configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty document with a validated snap configuration.
    pub fn with_snap_config(config: SnapConfig) -> CanvasResult<Self> {
        config.validate()?;
        Ok(Self {
            snap_config: config,
            ..Self::default()
        })
    }

    /// Add a shape to the document (on top). Ids are unique within a document.
    pub fn add_shape(&mut self, shape: Shape) -> CanvasResult<ShapeId> {
        let id = shape.id();
        if self.get_shape(id).is_some() {
            log::warn!("Rejected shape with duplicate id {}", id);
            return Err(CanvasError::DuplicateId(id));
        }
        self.shapes.push(shape);
        Ok(id)
    }

    /// Add a shape of `kind` with the toolbar defaults under a fresh id.
    pub fn add_default_shape(&mut self, kind: ShapeKind) -> ShapeId {
        let shape = Shape::with_defaults(kind);
        let id = shape.id();
        self.shapes.push(shape);
        id
    }

    /// Remove a shape from the document.
    pub fn remove_shape(&mut self, id: ShapeId) -> Option<Shape> {
        let index = self.shapes.iter().position(|s| s.id() == id)?;
        if self.selected == Some(id) {
            self.selected = None;
        }
        Some(self.shapes.remove(index))
    }

    /// Clear all shapes from the document.
    pub fn clear(&mut self) {
        self.shapes.clear();
        self.selected = None;
        self.guides.clear();
    }

    /// Get a shape by ID.
    pub fn get_shape(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.id() == id)
    }

    /// Get shapes in z-order (back to front).
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Check if the document is empty.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Get the number of shapes.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Get the bounding box of all shapes.
    pub fn bounds(&self) -> Option<Rect> {
        self.shapes
            .iter()
            .map(Shape::bounds)
            .reduce(|acc, bounds| acc.union(bounds))
    }

    /// Select a single shape, or clear the selection with `None`.
    pub fn select(&mut self, id: Option<ShapeId>) {
        self.selected = id;
    }

    pub fn selected_id(&self) -> Option<ShapeId> {
        self.selected
    }

    pub fn selected_shape(&self) -> Option<&Shape> {
        self.selected.and_then(|id| self.get_shape(id))
    }

    pub fn snap_config(&self) -> &SnapConfig {
        &self.snap_config
    }

    /// Replace the snap configuration. Degenerate configurations are rejected
    /// and the current one is kept.
    pub fn set_snap_config(&mut self, config: SnapConfig) -> CanvasResult<()> {
        if let Err(e) = config.validate() {
            log::warn!("Rejected snap configuration: {}", e);
            return Err(e.into());
        }
        log::info!(
            "Snap configuration updated: enabled={}, mode={:?}",
            config.enabled,
            config.mode
        );
        self.snap_config = config;
        Ok(())
    }

    /// Apply a partial change to the snap configuration.
    pub fn update_snap_config(&mut self, update: SnapConfigUpdate) -> CanvasResult<()> {
        match self.snap_config.merged(update) {
            Ok(config) => self.set_snap_config(config),
            Err(e) => {
                log::warn!("Rejected snap configuration update: {}", e);
                Err(e.into())
            }
        }
    }

    /// Guides from the most recent drag frame.
    pub fn guides(&self) -> &[SnapGuide] {
        &self.guides
    }

    /// Start dragging a shape: selects it and discards guides from the previous drag.
    pub fn begin_drag(&mut self, id: ShapeId) -> CanvasResult<()> {
        self.index_of(id)?;
        self.selected = Some(id);
        self.guides.clear();
        Ok(())
    }

    /// Propose a new origin for a shape on a drag frame.
    ///
    /// The candidate is snapped against the current collection and committed.
    /// Returns the committed shape.
    pub fn drag_shape_to(&mut self, id: ShapeId, position: Point) -> CanvasResult<&Shape> {
        let index = self.index_of(id)?;
        let mut candidate = self.shapes[index].clone();
        candidate.set_position(position);

        let outcome = apply_snapping(&candidate, &self.shapes, &self.snap_config);
        self.shapes[index] = outcome.shape;
        self.guides = outcome.guides;
        Ok(&self.shapes[index])
    }

    /// Finish a drag and hide its guides.
    pub fn end_drag(&mut self) {
        self.guides.clear();
    }

    /// Commit a new origin without snapping.
    pub fn move_shape(&mut self, id: ShapeId, position: Point) -> CanvasResult<()> {
        let index = self.index_of(id)?;
        self.shapes[index].set_position(position);
        Ok(())
    }

    /// Set a shape's rotation in degrees.
    pub fn rotate_shape(&mut self, id: ShapeId, degrees: f64) -> CanvasResult<()> {
        let index = self.index_of(id)?;
        self.shapes[index].set_rotation(degrees);
        Ok(())
    }

    /// Drag one endpoint of a line by its handle (0 = start, 1 = end).
    ///
    /// The endpoint is snapped for the active mode, then the line is reprojected.
    pub fn drag_line_endpoint(
        &mut self,
        id: ShapeId,
        index: usize,
        point: Point,
    ) -> CanvasResult<&Shape> {
        let endpoint = Endpoint::from_index(index).ok_or(CanvasError::EndpointIndex(index))?;
        let shape_index = self.index_of(id)?;
        if !self.shapes[shape_index].is_line() {
            return Err(CanvasError::NotALine(id));
        }

        let result = snap_line_endpoint(point, id, &self.shapes, &self.snap_config);
        if let Some(line) = self.shapes[shape_index].as_line_mut() {
            line.set_end_point(endpoint, result.point);
        }
        self.guides = result.guides;
        Ok(&self.shapes[shape_index])
    }

    /// Move a whole line by `delta`, keeping its length and direction.
    pub fn translate_line(&mut self, id: ShapeId, delta: Vec2) -> CanvasResult<()> {
        let index = self.index_of(id)?;
        let line = self.shapes[index]
            .as_line_mut()
            .ok_or(CanvasError::NotALine(id))?;
        line.translate(delta);
        Ok(())
    }

    fn index_of(&self, id: ShapeId) -> CanvasResult<usize> {
        self.shapes.iter().position(|s| s.id() == id).ok_or_else(|| {
            log::warn!("No shape with id {}", id);
            CanvasError::ShapeNotFound(id)
        })
    }
}

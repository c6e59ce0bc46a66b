//! Snap configuration and its validation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default grid size (matches the visual grid).
pub const DEFAULT_GRID_SIZE: f64 = 20.0;

/// Default capture radius for adjacency and anchor snapping (in world units).
pub const DEFAULT_SNAP_THRESHOLD: f64 = 10.0;

/// Default clearance between shapes in gap mode.
pub const DEFAULT_ADJACENCY_GAP: f64 = 10.0;

/// Configuration errors.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Grid size must be a finite positive number, got {0}")]
    InvalidGridSize(f64),
    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f64 },
    #[error("{field} must be a finite number")]
    NonFinite { field: &'static str },
    #[error("Invalid configuration: {0}")]
    Parse(String),
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Active snapping strategy. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SnapMode {
    /// Snap the shape origin to grid intersections.
    #[default]
    Grid,
    /// Align the shape origin with other shapes' anchor points.
    Anchor,
    /// Place box-like shapes flush against their neighbours.
    Adjacency,
}

impl SnapMode {
    /// Cycle to the next snap mode.
    pub fn next(self) -> Self {
        match self {
            SnapMode::Grid => SnapMode::Anchor,
            SnapMode::Anchor => SnapMode::Adjacency,
            SnapMode::Adjacency => SnapMode::Grid,
        }
    }
}

/// How adjacency snapping spaces shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdjacencyMode {
    /// Edges touch, the configured gap is ignored.
    #[default]
    Contact,
    /// Edges keep `adjacency_gap` of clearance.
    Gap,
}

impl AdjacencyMode {
    pub fn toggle(self) -> Self {
        match self {
            AdjacencyMode::Contact => AdjacencyMode::Gap,
            AdjacencyMode::Gap => AdjacencyMode::Contact,
        }
    }
}

/// Options controlling the snapping engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SnapConfig {
    /// Master switch. When off every snap call is a passthrough.
    pub enabled: bool,
    pub mode: SnapMode,
    /// Spacing of the grid lattice.
    pub grid_size: f64,
    /// Capture radius for adjacency detection.
    pub snap_threshold: f64,
    /// Capture radius for anchor-to-anchor detection.
    pub anchor_snap_radius: f64,
    /// Clearance used when `adjacency_mode` is `Gap`.
    pub adjacency_gap: f64,
    pub adjacency_mode: AdjacencyMode,
    /// Presentation only.
    pub show_grid: bool,
}

impl Default for SnapConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            mode: SnapMode::default(),
            grid_size: DEFAULT_GRID_SIZE,
            snap_threshold: DEFAULT_SNAP_THRESHOLD,
            anchor_snap_radius: DEFAULT_SNAP_THRESHOLD,
            adjacency_gap: DEFAULT_ADJACENCY_GAP,
            adjacency_mode: AdjacencyMode::default(),
            show_grid: true,
        }
    }
}

impl SnapConfig {
    /// Reject configurations the snapping functions cannot work with.
    pub fn validate(&self) -> ConfigResult<()> {
        if !self.grid_size.is_finite() || self.grid_size <= 0.0 {
            return Err(ConfigError::InvalidGridSize(self.grid_size));
        }
        for (field, value) in [
            ("snapThreshold", self.snap_threshold),
            ("anchorSnapRadius", self.anchor_snap_radius),
            ("adjacencyGap", self.adjacency_gap),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field });
            }
            if value < 0.0 {
                return Err(ConfigError::Negative { field, value });
            }
        }
        Ok(())
    }

    /// Clearance applied by adjacency snapping.
    pub fn effective_gap(&self) -> f64 {
        match self.adjacency_mode {
            AdjacencyMode::Contact => 0.0,
            AdjacencyMode::Gap => self.adjacency_gap,
        }
    }

    /// Apply a partial update and validate the result.
    pub fn merged(&self, update: SnapConfigUpdate) -> ConfigResult<Self> {
        let config = Self {
            enabled: update.enabled.unwrap_or(self.enabled),
            mode: update.mode.unwrap_or(self.mode),
            grid_size: update.grid_size.unwrap_or(self.grid_size),
            snap_threshold: update.snap_threshold.unwrap_or(self.snap_threshold),
            anchor_snap_radius: update.anchor_snap_radius.unwrap_or(self.anchor_snap_radius),
            adjacency_gap: update.adjacency_gap.unwrap_or(self.adjacency_gap),
            adjacency_mode: update.adjacency_mode.unwrap_or(self.adjacency_mode),
            show_grid: update.show_grid.unwrap_or(self.show_grid),
        };
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the configuration to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// A partial configuration change, as sent by the snap controls.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SnapConfigUpdate {
    pub enabled: Option<bool>,
    pub mode: Option<SnapMode>,
    pub grid_size: Option<f64>,
    pub snap_threshold: Option<f64>,
    pub anchor_snap_radius: Option<f64>,
    pub adjacency_gap: Option<f64>,
    pub adjacency_mode: Option<AdjacencyMode>,
    pub show_grid: Option<bool>,
}

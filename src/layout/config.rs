//! Configuration for the layout engine

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::InputError;

use super::error::LayoutError;
use super::types::Edge;

/// Largest number of fan-out steps tried on each side of the ideal position
pub const MAX_FAN_OUT_STEPS: usize = 10_000;

/// Tuning for collision resolution and placement search
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AdjustConfig {
    /// Minimum distance between boxes (reserved, not consulted by the resolver)
    pub min_distance: f64,

    /// Upper bound on resolver iterations
    pub max_iterations: usize,

    /// Increment used to fan candidate positions out along an edge
    pub step_size: f64,

    /// Largest offset from the ideal position tried along an edge
    pub fan_out_range: f64,

    /// Keep-out distance from the container edges
    pub margin_from_bounds: f64,

    /// Margin used when placing a brand-new annotation at its default position
    pub default_placement_margin: f64,

    /// Edge trial order hint. Placement search orders edges by distance to the
    /// leader anchor instead.
    pub preferred_directions: Vec<Edge>,
}

impl Default for AdjustConfig {
    fn default() -> Self {
        Self {
            min_distance: 10.0,
            max_iterations: 50,
            step_size: 5.0,
            fan_out_range: 100.0,
            margin_from_bounds: 15.0,
            default_placement_margin: 10.0,
            preferred_directions: vec![Edge::Right, Edge::Bottom, Edge::Top, Edge::Left],
        }
    }
}

impl AdjustConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse overrides from TOML. Omitted keys keep their defaults.
    pub fn from_toml(source: &str) -> Result<Self, InputError> {
        toml::from_str(source).map_err(InputError::from)
    }

    /// Load overrides from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, InputError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|e| InputError::io(path, e))?;
        Self::from_toml(&source)
    }

    /// Set the iteration budget
    pub fn with_max_iterations(mut self, iterations: usize) -> Self {
        self.max_iterations = iterations;
        self
    }

    /// Set the fan-out step
    pub fn with_step_size(mut self, step: f64) -> Self {
        self.step_size = step;
        self
    }

    /// Set the fan-out range
    pub fn with_fan_out_range(mut self, range: f64) -> Self {
        self.fan_out_range = range;
        self
    }

    /// Set the keep-out margin from the container edges
    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin_from_bounds = margin;
        self
    }

    /// Set the margin for default placement of new annotations
    pub fn with_default_placement_margin(mut self, margin: f64) -> Self {
        self.default_placement_margin = margin;
        self
    }

    /// Number of fan-out steps on each side of the ideal position, at most
    /// [`MAX_FAN_OUT_STEPS`]
    pub fn fan_out_steps(&self) -> usize {
        if self.step_size > 0.0 && self.fan_out_range.is_finite() && self.fan_out_range > 0.0 {
            let steps = (self.fan_out_range / self.step_size).floor();
            if steps >= MAX_FAN_OUT_STEPS as f64 {
                MAX_FAN_OUT_STEPS
            } else {
                steps as usize
            }
        } else {
            0
        }
    }

    /// Reject settings that would make placement search meaningless
    pub fn validate(&self) -> Result<(), LayoutError> {
        if !(self.step_size.is_finite() && self.step_size > 0.0) {
            return Err(LayoutError::invalid_config(
                "step_size",
                format!("must be a positive number, got {}", self.step_size),
            ));
        }
        if !(self.fan_out_range.is_finite() && self.fan_out_range >= 0.0) {
            return Err(LayoutError::invalid_config(
                "fan_out_range",
                format!("must be zero or positive, got {}", self.fan_out_range),
            ));
        }
        if self.fan_out_range / self.step_size > MAX_FAN_OUT_STEPS as f64 {
            return Err(LayoutError::invalid_config(
                "step_size",
                format!(
                    "fan_out_range / step_size must not exceed {}, got {} / {}",
                    MAX_FAN_OUT_STEPS, self.fan_out_range, self.step_size
                ),
            ));
        }
        for (field, margin) in [
            ("margin_from_bounds", self.margin_from_bounds),
            ("default_placement_margin", self.default_placement_margin),
        ] {
            if !(margin.is_finite() && margin >= 0.0) {
                return Err(LayoutError::invalid_config(
                    field,
                    format!("must be zero or positive, got {}", margin),
                ));
            }
        }
        if self.max_iterations == 0 {
            return Err(LayoutError::invalid_config(
                "max_iterations",
                "must allow at least one iteration",
            ));
        }
        Ok(())
    }
}

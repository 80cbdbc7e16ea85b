//! Registration options.

use crate::error::{DragError, DragResult};
use crate::geometry::SizeBound;
use crate::gesture::DEFAULT_THRESHOLD_PX;
use crate::handles::HandleLabel;
use crate::strategy::{ResizeParams, Strategy, StrategyKind};
use crate::target::TargetId;
use serde::{Deserialize, Serialize};

/// Options passed to [`crate::DragManager::attach`].
///
/// Deserializes from the same shape hosts write by hand, e.g.
/// `{"strategy": "resize", "handle_label": "se", "aspect_lock": true}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DragOptions {
    pub strategy: StrategyKind,
    /// Compass handle driven by a `resize` registration.
    pub handle_label: Option<HandleLabel>,
    /// Element that receives the press instead of the target itself
    /// (a title bar, a resize handle).
    pub grip: Option<TargetId>,
    /// Containment reference, re-queried on every move.
    pub bounds: Option<TargetId>,
    pub min_size: SizeBound,
    pub max_size: SizeBound,
    pub aspect_lock: bool,
    pub shift_locks_aspect: bool,
    pub threshold_px: f64,
}

impl Default for DragOptions {
    fn default() -> Self {
        Self {
            strategy: StrategyKind::default(),
            handle_label: None,
            grip: None,
            bounds: None,
            min_size: SizeBound::unbounded(),
            max_size: SizeBound::unbounded(),
            aspect_lock: false,
            shift_locks_aspect: false,
            threshold_px: DEFAULT_THRESHOLD_PX,
        }
    }
}

impl DragOptions {
    /// Options for a given strategy with everything else defaulted.
    pub fn new(strategy: StrategyKind) -> Self {
        Self {
            strategy,
            ..Self::default()
        }
    }

    /// Options for a resize handle.
    pub fn resize(handle: HandleLabel) -> Self {
        Self {
            strategy: StrategyKind::Resize,
            handle_label: Some(handle),
            ..Self::default()
        }
    }

    pub fn with_grip(mut self, grip: TargetId) -> Self {
        self.grip = Some(grip);
        self
    }

    pub fn with_bounds(mut self, bounds: TargetId) -> Self {
        self.bounds = Some(bounds);
        self
    }

    pub fn with_threshold(mut self, threshold_px: f64) -> Self {
        self.threshold_px = threshold_px;
        self
    }

    pub fn with_aspect_lock(mut self, aspect_lock: bool) -> Self {
        self.aspect_lock = aspect_lock;
        self
    }

    pub fn with_size_limits(mut self, min_size: SizeBound, max_size: SizeBound) -> Self {
        self.min_size = min_size;
        self.max_size = max_size;
        self
    }

    /// Parse options from JSON. Unknown strategy names and handle labels
    /// surface as the matching [`DragError`] rather than a generic parse error
    /// when the document is otherwise well-formed.
    pub fn from_json(json: &str) -> DragResult<Self> {
        let raw: serde_json::Value =
            serde_json::from_str(json).map_err(|e| DragError::Config(e.to_string()))?;
        if let Some(name) = raw.get("strategy").and_then(|v| v.as_str()) {
            name.parse::<StrategyKind>()?;
        }
        if let Some(label) = raw.get("handle_label").and_then(|v| v.as_str()) {
            label.parse::<HandleLabel>()?;
        }
        serde_json::from_value(raw).map_err(|e| DragError::Config(e.to_string()))
    }

    /// Validate the options and build the strategy they describe.
    pub fn build_strategy(&self) -> DragResult<Strategy> {
        if !self.threshold_px.is_finite() || self.threshold_px < 0.0 {
            return Err(DragError::InvalidThreshold(self.threshold_px));
        }
        let inverted = |min: Option<f64>, max: Option<f64>| matches!((min, max), (Some(lo), Some(hi)) if lo > hi);
        if inverted(self.min_size.width, self.max_size.width)
            || inverted(self.min_size.height, self.max_size.height)
        {
            return Err(DragError::InvertedSizeBounds);
        }

        Ok(match self.strategy {
            StrategyKind::Translate => Strategy::Translate,
            StrategyKind::XOnly => Strategy::XOnly,
            StrategyKind::YOnly => Strategy::YOnly,
            StrategyKind::WithinParent => Strategy::WithinParent,
            StrategyKind::Move => Strategy::Move,
            StrategyKind::Resize => {
                let handle = self.handle_label.ok_or(DragError::MissingHandleLabel)?;
                Strategy::Resize(ResizeParams {
                    handle,
                    aspect_lock: self.aspect_lock,
                    shift_locks_aspect: self.shift_locks_aspect,
                    min_size: self.min_size,
                    max_size: self.max_size,
                })
            }
        })
    }
}

//! Scenario file format.

use crate::error::ReplayResult;
use dragkit_core::{DragOptions, Modifiers};
use kurbo::{Point, Size};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A named rectangle in the scene. Declaration order is stacking order:
/// later frames sit above earlier ones when resolving hits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameSpec {
    pub name: String,
    #[serde(default)]
    pub position: Option<Point>,
    #[serde(default)]
    pub size: Option<Size>,
    /// Name of the parent frame, used by `within-parent`.
    #[serde(default)]
    pub parent: Option<String>,
    #[serde(default = "default_true")]
    pub reports_bounds: bool,
}

fn default_true() -> bool {
    true
}

/// Wires one frame for dragging.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attachment {
    pub target: String,
    /// Name of the press surface. A name that is not a frame becomes a
    /// standalone grip element.
    #[serde(default)]
    pub grip: Option<String>,
    /// Name of the frame that bounds movement.
    #[serde(default)]
    pub bounds: Option<String>,
    #[serde(default)]
    pub options: DragOptions,
}

/// One scripted input step.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "kebab-case")]
pub enum Step {
    /// Press at `at`. Without `on` the element is found by hit testing.
    Press {
        at: Point,
        #[serde(default)]
        on: Option<String>,
        #[serde(default)]
        touch: Option<u64>,
    },
    Move {
        to: Point,
        #[serde(default)]
        touch: Option<u64>,
    },
    Release {
        at: Point,
        #[serde(default)]
        touch: Option<u64>,
    },
    Modifiers(Modifiers),
    /// The window lost focus.
    Blur,
    Detach {
        target: String,
    },
}

/// A complete replay scenario.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub frames: Vec<FrameSpec>,
    #[serde(default)]
    pub attach: Vec<Attachment>,
    #[serde(default)]
    pub script: Vec<Step>,
}

impl Scenario {
    pub fn from_json(json: &str) -> ReplayResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a scenario from disk.
    pub fn load(path: &Path) -> ReplayResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}

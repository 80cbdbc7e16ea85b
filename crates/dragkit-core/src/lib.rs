//! dragkit core library
//!
//! Platform-agnostic pointer-driven drag and resize engine: gesture
//! recognition, movement strategies and listener lifecycle.

pub mod config;
pub mod error;
pub mod events;
pub mod geometry;
pub mod gesture;
pub mod handles;
pub mod input;
pub mod manager;
pub mod scene;
pub mod session;
pub mod strategy;
pub mod target;
#[cfg(feature = "winit")]
pub mod winit_input;

pub use config::DragOptions;
pub use error::{DragError, DragResult};
pub use events::DragEvent;
pub use geometry::{Axis, Placement, SizeBound};
pub use gesture::{DEFAULT_THRESHOLD_PX, GesturePhase, GestureRecognizer, GestureSignal};
pub use handles::{Handle, HandleLabel, handles_for_rect, hit_test_handles};
pub use input::{Modifiers, MouseButton, PointerEvent, PointerId, PointerInput, PointerTracker};
pub use manager::{Attached, DragManager};
pub use scene::{Frame, Scene};
pub use session::DragSession;
pub use strategy::{ResizeParams, Strategy, StrategyKind};
pub use target::{ListenerScope, Target, TargetHost, TargetId};

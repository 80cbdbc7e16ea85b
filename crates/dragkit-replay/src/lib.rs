//! dragkit replay
//!
//! Loads a JSON scenario (frames, attachments and a pointer script), drives
//! it through the drag engine against an in-memory scene and reports every
//! event raised along with the final geometry.

mod error;
mod replay;
mod scenario;

pub use error::{ReplayError, ReplayResult};
pub use replay::{Record, Replay, replay};
pub use scenario::{Attachment, FrameSpec, Scenario, Step};

//! Test helpers shared across permflow crates.

pub mod platform;
pub mod sinks;

pub use platform::FakePlatform;
pub use sinks::{RecordingOutcomeSink, RecordingTraceSink};

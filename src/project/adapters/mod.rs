//! Listener implementations shipped with the crate.

pub mod logging;
pub mod recording;

pub use logging::LoggingListener;
pub use recording::RecordingListener;

//! Sorting visualizer core
//!
//! Array generation, eager frame recording of bubble sort, and timer-driven
//! playback of the recorded frames. Nothing in here touches the terminal.

pub mod array;
pub mod frame;
pub mod playback;
pub mod recorder;
mod state;

pub use array::{clamp_size, generate, MAX_SIZE, MAX_VALUE, MIN_SIZE, MIN_VALUE};
pub use frame::{Frame, Recording};
pub use playback::{
    clamp_interval_ms, PlaybackController, PlaybackState, PlaybackTick, DEFAULT_INTERVAL_MS,
    MAX_INTERVAL_MS, MIN_INTERVAL_MS,
};
pub use recorder::record_bubble_sort;
pub use state::{ControlState, DisplayFrame, Visualizer, VisualizerSettings};

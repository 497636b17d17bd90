//! Deterministic fixtures
//!
//! Everything here is seeded so that arrays, recordings and rendered
//! output are identical across runs.

use sortviz::visualizer::{PlaybackTick, Visualizer, VisualizerSettings};
use sortviz::Config;
use tokio::sync::mpsc;

pub const TEST_SEED: u64 = 0x5eed;

pub fn settings(size: usize) -> VisualizerSettings {
    VisualizerSettings {
        size,
        interval_ms: 8,
        seed: Some(TEST_SEED),
    }
}

/// A seeded visualizer plus the receiving end of its tick channel
pub fn visualizer(size: usize) -> (Visualizer, mpsc::UnboundedReceiver<PlaybackTick>) {
    let (tx, rx) = mpsc::unbounded_channel();
    (Visualizer::new(settings(size), tx), rx)
}

/// Default config with a seeded visualizer of `size` bars
pub fn config(size: usize) -> Config {
    Config::default().with_size(size).with_seed(TEST_SEED)
}

use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::sync::mpsc;

use super::array::{self, clamp_size, MAX_SIZE, MIN_SIZE};
use super::playback::{
    clamp_interval_ms, PlaybackController, PlaybackState, PlaybackTick, MAX_INTERVAL_MS,
    MIN_INTERVAL_MS,
};
use super::recorder::record_bubble_sort;

/// Starting parameters for a [`Visualizer`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisualizerSettings {
    /// Number of bars
    pub size: usize,
    /// Playback interval in milliseconds
    pub interval_ms: u64,
    /// Seed for array generation (None = seeded from the OS)
    pub seed: Option<u64>,
}

impl Default for VisualizerSettings {
    fn default() -> Self {
        Self {
            size: 100,
            interval_ms: super::playback::DEFAULT_INTERVAL_MS,
            seed: None,
        }
    }
}

/// Which user controls are currently usable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlState {
    pub new_array: bool,
    pub run_sort: bool,
    pub play: bool,
    pub pause: bool,
    pub stop: bool,
    pub step: bool,
    pub adjust_size: bool,
    pub adjust_speed: bool,
}

/// What the renderer should draw right now
#[derive(Debug, Clone, Copy)]
pub struct DisplayFrame<'a> {
    pub values: &'a [u32],
    pub active: &'a [usize],
    pub swapped: &'a [usize],
}

/// Single owner of the array, the recording and playback.
///
/// Every user action maps to one method here. Actions that are disabled in
/// the current state are no-ops and return `false`.
pub struct Visualizer {
    array: Vec<u32>,
    size: usize,
    interval_ms: u64,
    playback: PlaybackController,
    rng: StdRng,
}

impl Visualizer {
    pub fn new(
        settings: VisualizerSettings,
        tick_tx: mpsc::UnboundedSender<PlaybackTick>,
    ) -> Self {
        let rng = match settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let interval_ms = clamp_interval_ms(settings.interval_ms);

        let mut visualizer = Self {
            array: Vec::new(),
            size: clamp_size(settings.size),
            interval_ms,
            playback: PlaybackController::new(Duration::from_millis(interval_ms), tick_tx),
            rng,
        };
        visualizer.regenerate();
        visualizer
    }

    pub fn array(&self) -> &[u32] {
        &self.array
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    pub fn playback(&self) -> &PlaybackController {
        &self.playback
    }

    pub fn state(&self) -> PlaybackState {
        self.playback.state()
    }

    pub fn cursor(&self) -> usize {
        self.playback.cursor()
    }

    /// `(cursor, last frame index)` for the position indicator
    pub fn position(&self) -> (usize, usize) {
        (self.playback.cursor(), self.playback.last_index())
    }

    /// Replace the array with fresh random values at the current size
    pub fn new_array(&mut self) -> bool {
        if self.playback.is_playing() {
            return false;
        }
        self.regenerate();
        true
    }

    /// Change the number of bars, regenerating the array on change
    pub fn set_size(&mut self, size: usize) -> bool {
        let size = clamp_size(size);
        if self.playback.is_playing() || size == self.size {
            return false;
        }
        self.size = size;
        self.regenerate();
        true
    }

    /// Grow or shrink the array by `delta` bars
    pub fn adjust_size(&mut self, delta: isize) -> bool {
        let target = self
            .size
            .saturating_add_signed(delta)
            .clamp(MIN_SIZE, MAX_SIZE);
        self.set_size(target)
    }

    /// Change the playback interval
    pub fn set_interval_ms(&mut self, ms: u64) -> bool {
        let ms = clamp_interval_ms(ms);
        if ms == self.interval_ms || !self.playback.set_interval(Duration::from_millis(ms)) {
            return false;
        }
        self.interval_ms = ms;
        true
    }

    /// Shorten (`delta < 0`, faster) or lengthen the playback interval
    pub fn adjust_interval(&mut self, delta: i64) -> bool {
        let target = self
            .interval_ms
            .saturating_add_signed(delta)
            .clamp(MIN_INTERVAL_MS, MAX_INTERVAL_MS);
        self.set_interval_ms(target)
    }

    /// Record a bubble sort of the current array, replacing any recording
    pub fn run_sort(&mut self) -> bool {
        if self.playback.is_playing() {
            return false;
        }
        let recording = record_bubble_sort(&self.array);
        tracing::info!(
            size = self.array.len(),
            frames = recording.len(),
            "Recorded new sort"
        );
        self.playback.load(recording);
        true
    }

    pub fn play(&mut self) -> bool {
        self.playback.play()
    }

    pub fn pause(&mut self) -> bool {
        self.playback.pause()
    }

    pub fn toggle_play(&mut self) -> bool {
        self.playback.toggle_play()
    }

    pub fn stop(&mut self) -> bool {
        if !self.playback.has_recording() {
            return false;
        }
        self.playback.stop();
        true
    }

    pub fn step_forward(&mut self) -> bool {
        self.playback.step_forward()
    }

    pub fn step_backward(&mut self) -> bool {
        self.playback.step_backward()
    }

    /// Feed a tick from the playback timer
    pub fn on_tick(&mut self, tick: PlaybackTick) -> bool {
        self.playback.on_tick(tick)
    }

    /// Cancel any running playback timer before the view goes away
    pub fn shutdown(&mut self) {
        self.playback.shutdown();
    }

    /// Values and highlights to draw: the frame under the cursor, or the raw
    /// array when nothing has been recorded.
    pub fn display(&self) -> DisplayFrame<'_> {
        match self.playback.current_frame() {
            Some(frame) => DisplayFrame {
                values: frame.values(),
                active: frame.active(),
                swapped: frame.swapped(),
            },
            None => DisplayFrame {
                values: &self.array,
                active: &[],
                swapped: &[],
            },
        }
    }

    pub fn controls(&self) -> ControlState {
        let playing = self.playback.is_playing();
        let recorded = self.playback.has_recording();
        ControlState {
            new_array: !playing,
            run_sort: !playing,
            play: !playing && recorded,
            pause: playing,
            stop: recorded,
            step: !playing && recorded,
            adjust_size: !playing,
            adjust_speed: !playing,
        }
    }

    fn regenerate(&mut self) {
        self.array = array::generate(&mut self.rng, self.size);
        self.playback.clear();
        tracing::info!(size = self.size, "Generated new array");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::visualizer::array::{MAX_VALUE, MIN_VALUE};

    fn visualizer(size: usize) -> (Visualizer, mpsc::UnboundedReceiver<PlaybackTick>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let settings = VisualizerSettings {
            size,
            interval_ms: 8,
            seed: Some(42),
        };
        (Visualizer::new(settings, tx), rx)
    }

    #[test]
    fn test_initial_array() {
        let (viz, _rx) = visualizer(20);
        assert_eq!(viz.array().len(), 20);
        assert!(viz.array().iter().all(|v| (MIN_VALUE..=MAX_VALUE).contains(v)));
        assert_eq!(viz.state(), PlaybackState::Idle);
        assert_eq!(viz.position(), (0, 0));
    }

    #[test]
    fn test_size_is_clamped() {
        let (mut viz, _rx) = visualizer(1);
        assert_eq!(viz.size(), MIN_SIZE);
        viz.set_size(10_000);
        assert_eq!(viz.array().len(), MAX_SIZE);
        assert!(!viz.adjust_size(1));
    }

    #[test]
    fn test_display_falls_back_to_array() {
        let (viz, _rx) = visualizer(10);
        let display = viz.display();
        assert_eq!(display.values, viz.array());
        assert!(display.active.is_empty());
        assert!(display.swapped.is_empty());
    }

    #[test]
    fn test_run_sort_loads_recording() {
        let (mut viz, _rx) = visualizer(10);
        let original = viz.array().to_vec();
        assert!(viz.run_sort());

        let recording = viz.playback().recording().unwrap();
        assert_eq!(recording.first().values(), original.as_slice());
        assert_eq!(viz.display().values, original.as_slice());
        assert_eq!(viz.position(), (0, recording.last_index()));
        // The source array is untouched by recording
        assert_eq!(viz.array(), original.as_slice());
    }

    #[test]
    fn test_new_array_discards_recording() {
        let (mut viz, _rx) = visualizer(10);
        viz.run_sort();
        viz.step_forward();
        assert!(viz.new_array());
        assert!(viz.playback().recording().is_none());
        assert_eq!(viz.cursor(), 0);
    }

    #[test]
    fn test_size_change_regenerates() {
        let (mut viz, _rx) = visualizer(10);
        viz.run_sort();
        assert!(viz.adjust_size(5));
        assert_eq!(viz.array().len(), 15);
        assert!(viz.playback().recording().is_none());
        // Same size is not a change
        assert!(!viz.set_size(15));
    }

    #[test]
    fn test_speed_adjustment_is_clamped() {
        let (mut viz, _rx) = visualizer(10);
        assert!(viz.adjust_interval(-1));
        assert_eq!(viz.interval_ms(), 7);
        viz.set_interval_ms(1);
        assert_eq!(viz.interval_ms(), MIN_INTERVAL_MS);
        assert!(!viz.adjust_interval(-1));
        viz.set_interval_ms(500);
        assert_eq!(viz.interval_ms(), MAX_INTERVAL_MS);
    }

    #[test]
    fn test_controls_without_recording() {
        let (viz, _rx) = visualizer(10);
        let controls = viz.controls();
        assert!(controls.new_array && controls.run_sort);
        assert!(!controls.play && !controls.pause && !controls.stop && !controls.step);
    }

    #[test]
    fn test_stop_without_recording_is_noop() {
        let (mut viz, _rx) = visualizer(10);
        assert!(!viz.stop());
    }

    #[tokio::test(start_paused = true)]
    async fn test_controls_locked_while_playing() {
        let (mut viz, _rx) = visualizer(10);
        viz.run_sort();
        assert!(viz.play());

        let controls = viz.controls();
        assert!(!controls.new_array && !controls.run_sort && !controls.play);
        assert!(controls.pause && controls.stop);
        assert!(!controls.adjust_size && !controls.adjust_speed);

        let array = viz.array().to_vec();
        assert!(!viz.new_array());
        assert!(!viz.run_sort());
        assert!(!viz.adjust_size(1));
        assert!(!viz.adjust_interval(1));
        assert!(!viz.step_forward());
        assert_eq!(viz.array(), array.as_slice());
        assert_eq!(viz.state(), PlaybackState::Playing);

        viz.shutdown();
        assert_eq!(viz.state(), PlaybackState::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_full_playback_ends_sorted() {
        let (mut viz, mut rx) = visualizer(12);
        viz.run_sort();
        viz.play();

        while viz.state() == PlaybackState::Playing {
            let tick = rx.recv().await.unwrap();
            viz.on_tick(tick);
        }

        let mut sorted = viz.array().to_vec();
        sorted.sort_unstable();
        assert_eq!(viz.display().values, sorted.as_slice());
        assert!(viz.display().active.is_empty());
        let (cursor, last) = viz.position();
        assert_eq!(cursor, last);
    }
}

//! Timer-driven playback of a recording
//!
//! The controller owns the recording, the frame cursor and the single
//! playback timer. The timer runs as a tokio task that only emits
//! [`PlaybackTick`] messages; the cursor is advanced by whoever owns the
//! controller when it feeds those ticks back through [`PlaybackController::on_tick`].

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use super::frame::{Frame, Recording};

/// Fastest allowed playback interval
pub const MIN_INTERVAL_MS: u64 = 2;
/// Slowest allowed playback interval
pub const MAX_INTERVAL_MS: u64 = 40;
/// Interval used when nothing else is configured
pub const DEFAULT_INTERVAL_MS: u64 = 8;

/// Clamp a requested interval (in milliseconds) into the supported range
pub fn clamp_interval_ms(ms: u64) -> u64 {
    ms.clamp(MIN_INTERVAL_MS, MAX_INTERVAL_MS)
}

/// Playback state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    #[default]
    Idle,
    Playing,
    Paused,
}

impl PlaybackState {
    pub fn label(self) -> &'static str {
        match self {
            PlaybackState::Idle => "idle",
            PlaybackState::Playing => "playing",
            PlaybackState::Paused => "paused",
        }
    }
}

/// Message emitted by the playback timer on every interval
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackTick {
    /// Generation of the timer that produced this tick
    pub generation: u64,
}

/// The live timer task and the generation it was started with
struct PlaybackTimer {
    handle: JoinHandle<()>,
    generation: u64,
}

impl PlaybackTimer {
    fn spawn(
        interval: Duration,
        generation: u64,
        tick_tx: mpsc::UnboundedSender<PlaybackTick>,
    ) -> Self {
        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            // Skip the first immediate tick
            ticker.tick().await;

            loop {
                ticker.tick().await;
                if tick_tx.send(PlaybackTick { generation }).is_err() {
                    break;
                }
            }
        });

        Self { handle, generation }
    }

    fn cancel(self) {
        self.handle.abort();
    }
}

/// Owns the recording, the cursor into it and the playback timer
pub struct PlaybackController {
    recording: Option<Recording>,
    cursor: usize,
    /// State to report whenever no timer is running
    rest_state: PlaybackState,
    interval: Duration,
    timer: Option<PlaybackTimer>,
    next_generation: u64,
    tick_tx: mpsc::UnboundedSender<PlaybackTick>,
}

impl PlaybackController {
    pub fn new(interval: Duration, tick_tx: mpsc::UnboundedSender<PlaybackTick>) -> Self {
        Self {
            recording: None,
            cursor: 0,
            rest_state: PlaybackState::Idle,
            interval,
            timer: None,
            next_generation: 0,
            tick_tx,
        }
    }

    /// Current state; `Playing` exactly when a timer is live
    pub fn state(&self) -> PlaybackState {
        if self.timer.is_some() {
            PlaybackState::Playing
        } else {
            self.rest_state
        }
    }

    pub fn is_playing(&self) -> bool {
        self.timer.is_some()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn recording(&self) -> Option<&Recording> {
        self.recording.as_ref()
    }

    pub fn has_recording(&self) -> bool {
        self.recording.is_some()
    }

    /// Frame under the cursor, if a recording is loaded
    pub fn current_frame(&self) -> Option<&Frame> {
        self.recording.as_ref().and_then(|r| r.get(self.cursor))
    }

    /// Highest cursor position, or 0 without a recording
    pub fn last_index(&self) -> usize {
        self.recording.as_ref().map_or(0, Recording::last_index)
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Change the tick interval. Ignored while playing.
    pub fn set_interval(&mut self, interval: Duration) -> bool {
        if self.is_playing() {
            return false;
        }
        self.interval = interval;
        true
    }

    /// Replace the recording, halting playback and rewinding to frame 0
    pub fn load(&mut self, recording: Recording) {
        self.cancel_timer();
        self.recording = Some(recording);
        self.cursor = 0;
        self.rest_state = PlaybackState::Idle;
    }

    /// Drop the recording, halting playback and rewinding to frame 0
    pub fn clear(&mut self) {
        self.cancel_timer();
        self.recording = None;
        self.cursor = 0;
        self.rest_state = PlaybackState::Idle;
    }

    /// Start the playback timer. No-op while playing or without a recording.
    pub fn play(&mut self) -> bool {
        if self.is_playing() || self.recording.is_none() {
            return false;
        }

        let generation = self.next_generation;
        self.next_generation = self.next_generation.wrapping_add(1);
        self.timer = Some(PlaybackTimer::spawn(
            self.interval,
            generation,
            self.tick_tx.clone(),
        ));

        tracing::debug!(
            cursor = self.cursor,
            interval_ms = self.interval.as_millis() as u64,
            generation,
            "Playback started"
        );
        true
    }

    /// Cancel the timer and keep the cursor. Stays idle if nothing was running.
    pub fn pause(&mut self) -> bool {
        if !self.cancel_timer() {
            return false;
        }
        self.rest_state = PlaybackState::Paused;
        tracing::debug!(cursor = self.cursor, "Playback paused");
        true
    }

    /// Pause when playing, play otherwise
    pub fn toggle_play(&mut self) -> bool {
        if self.is_playing() {
            self.pause()
        } else {
            self.play()
        }
    }

    /// Cancel the timer and rewind to frame 0
    pub fn stop(&mut self) {
        self.cancel_timer();
        self.cursor = 0;
        self.rest_state = PlaybackState::Idle;
        tracing::debug!("Playback stopped");
    }

    /// Advance the cursor for a tick from the live timer.
    ///
    /// Ticks from cancelled timers are ignored. Reaching the end of the
    /// recording cancels the timer and returns to idle with the cursor left
    /// on the last frame. Returns whether anything changed.
    pub fn on_tick(&mut self, tick: PlaybackTick) -> bool {
        let live = self
            .timer
            .as_ref()
            .is_some_and(|timer| timer.generation == tick.generation);
        if !live {
            return false;
        }

        let next = self.cursor + 1;
        if next > self.last_index() {
            self.cancel_timer();
            self.rest_state = PlaybackState::Idle;
            tracing::debug!(cursor = self.cursor, "Playback finished");
        } else {
            self.cursor = next;
        }
        true
    }

    /// Move one frame forward. No-op while playing or without a recording.
    pub fn step_forward(&mut self) -> bool {
        if self.is_playing() || self.recording.is_none() || self.cursor >= self.last_index() {
            return false;
        }
        self.cursor += 1;
        true
    }

    /// Move one frame back. No-op while playing or without a recording.
    pub fn step_backward(&mut self) -> bool {
        if self.is_playing() || self.recording.is_none() || self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Cancel any live timer; the controller stays usable afterwards
    pub fn shutdown(&mut self) {
        if self.cancel_timer() {
            tracing::debug!("Playback timer cancelled on shutdown");
        }
    }

    fn cancel_timer(&mut self) -> bool {
        match self.timer.take() {
            Some(timer) => {
                timer.cancel();
                true
            }
            None => false,
        }
    }
}

impl Drop for PlaybackController {
    fn drop(&mut self) {
        self.cancel_timer();
    }
}

use crate::visualizer::PlaybackTick;

/// Application-level events
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Terminal input event
    Input(crossterm::event::Event),

    /// Tick from the playback timer
    Playback(PlaybackTick),
}

/// Input mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Visualizer controls are live
    #[default]
    Normal,
    /// Showing help overlay
    ShowingHelp,
}

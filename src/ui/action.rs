//! Actions that can be triggered by keybindings
//!
//! Each action represents a single, atomic operation in the UI.

use serde::{Deserialize, Serialize};

/// All mappable UI actions
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    // ========== Global Actions ==========
    /// Quit the application
    Quit,
    /// Open the help overlay
    ShowHelp,
    /// Close the help overlay
    CloseHelp,

    // ========== Array ==========
    /// Regenerate the array at the current size
    NewArray,
    /// Record a bubble sort of the current array
    RunSort,
    /// Add N bars (regenerates the array)
    GrowArray(u8),
    /// Remove N bars (regenerates the array)
    ShrinkArray(u8),

    // ========== Playback ==========
    /// Start playback
    Play,
    /// Pause playback, keeping the current frame
    Pause,
    /// Pause when playing, play otherwise
    TogglePlay,
    /// Stop playback and rewind to the first frame
    Stop,
    /// Show the next frame
    StepForward,
    /// Show the previous frame
    StepBackward,
    /// Shorten the playback interval by 1 ms
    Faster,
    /// Lengthen the playback interval by 1 ms
    Slower,
}

impl Action {
    /// Short description used by the help overlay
    pub fn description(&self) -> String {
        match self {
            Action::Quit => "Quit".to_string(),
            Action::ShowHelp => "Show help".to_string(),
            Action::CloseHelp => "Close help".to_string(),
            Action::NewArray => "New random array".to_string(),
            Action::RunSort => "Record bubble sort".to_string(),
            Action::GrowArray(n) => format!("Add {} bar{}", n, plural(*n)),
            Action::ShrinkArray(n) => format!("Remove {} bar{}", n, plural(*n)),
            Action::Play => "Play".to_string(),
            Action::Pause => "Pause".to_string(),
            Action::TogglePlay => "Play / pause".to_string(),
            Action::Stop => "Stop and rewind".to_string(),
            Action::StepForward => "Next frame".to_string(),
            Action::StepBackward => "Previous frame".to_string(),
            Action::Faster => "Faster (-1 ms)".to_string(),
            Action::Slower => "Slower (+1 ms)".to_string(),
        }
    }
}

fn plural(n: u8) -> &'static str {
    if n == 1 {
        ""
    } else {
        "s"
    }
}

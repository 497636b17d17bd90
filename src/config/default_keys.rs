//! Default keybindings
//!
//! This module defines the default keybindings that are used
//! when no user configuration is present.

use std::collections::HashMap;

use super::keys::{KeyCombo, KeyContext, KeybindingConfig};
use crate::ui::action::Action;

/// Helper to insert a keybinding
fn bind(map: &mut HashMap<KeyCombo, Action>, key: &str, action: Action) {
    if let Ok(combo) = key.parse() {
        map.insert(combo, action);
    }
}

/// Create the default keybindings configuration
pub fn default_keybindings() -> KeybindingConfig {
    let mut config = KeybindingConfig::new();

    // ========== Global Keybindings ==========
    bind(&mut config.global, "C-q", Action::Quit);
    bind(&mut config.global, "C-c", Action::Quit);
    bind(&mut config.global, "?", Action::ShowHelp);

    // ========== Visualizer ==========
    let viz = config.context.entry(KeyContext::Visualizer).or_default();

    bind(viz, "q", Action::Quit);

    // Array
    bind(viz, "n", Action::NewArray);
    bind(viz, "s", Action::RunSort);
    bind(viz, "b", Action::RunSort);
    bind(viz, "+", Action::GrowArray(1));
    bind(viz, "=", Action::GrowArray(1));
    bind(viz, "-", Action::ShrinkArray(1));
    bind(viz, "]", Action::GrowArray(10));
    bind(viz, "[", Action::ShrinkArray(10));

    // Playback
    bind(viz, "<Space>", Action::TogglePlay);
    bind(viz, "p", Action::Play);
    bind(viz, "P", Action::Pause);
    bind(viz, "x", Action::Stop);
    bind(viz, "<Right>", Action::StepForward);
    bind(viz, "l", Action::StepForward);
    bind(viz, "<Left>", Action::StepBackward);
    bind(viz, "h", Action::StepBackward);
    bind(viz, "<Up>", Action::Faster);
    bind(viz, "k", Action::Faster);
    bind(viz, "<Down>", Action::Slower);
    bind(viz, "j", Action::Slower);

    // ========== Help Overlay ==========
    let help = config.context.entry(KeyContext::Help).or_default();

    bind(help, "<Esc>", Action::CloseHelp);
    bind(help, "q", Action::CloseHelp);
    bind(help, "?", Action::CloseHelp);
    bind(help, "<CR>", Action::CloseHelp);

    config
}

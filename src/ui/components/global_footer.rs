use ratatui::{buffer::Buffer, layout::Rect};

use crate::config::{KeyContext, KeybindingConfig};
use crate::ui::action::Action;
use crate::ui::components::{render_key_hints, KeyHintBarStyle, FOOTER_BG, KEY_HINT_BG};
use crate::ui::events::InputMode;
use crate::visualizer::PlaybackState;

/// Context for determining which footer hints to show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FooterContext {
    /// Nothing is playing
    #[default]
    Idle,
    /// Playback timer is running
    Playing,
    /// Help overlay is open
    Help,
}

impl FooterContext {
    pub fn from_state(input_mode: InputMode, state: PlaybackState) -> Self {
        match (input_mode, state) {
            (InputMode::ShowingHelp, _) => FooterContext::Help,
            (InputMode::Normal, PlaybackState::Playing) => FooterContext::Playing,
            (InputMode::Normal, _) => FooterContext::Idle,
        }
    }

    fn key_context(self) -> KeyContext {
        match self {
            FooterContext::Idle | FooterContext::Playing => KeyContext::Visualizer,
            FooterContext::Help => KeyContext::Help,
        }
    }

    fn hinted_actions(self) -> Vec<(Action, &'static str)> {
        match self {
            FooterContext::Idle => vec![
                (Action::NewArray, "new"),
                (Action::RunSort, "sort"),
                (Action::TogglePlay, "play"),
                (Action::StepForward, "step"),
                (Action::GrowArray(1), "size"),
                (Action::Faster, "speed"),
                (Action::ShowHelp, "help"),
                (Action::Quit, "quit"),
            ],
            FooterContext::Playing => vec![
                (Action::TogglePlay, "pause"),
                (Action::Stop, "stop"),
                (Action::Quit, "quit"),
            ],
            FooterContext::Help => vec![(Action::CloseHelp, "close"), (Action::Quit, "quit")],
        }
    }
}

/// Global footer showing keyboard shortcuts in minimal style
pub struct GlobalFooter {
    hints: Vec<(String, &'static str)>,
}

impl GlobalFooter {
    /// Create footer for a specific context, labelled with the keys
    /// currently bound in `keys`. Actions without a binding are left out.
    pub fn for_context(context: FooterContext, keys: &KeybindingConfig) -> Self {
        let key_context = context.key_context();
        let hints = context
            .hinted_actions()
            .into_iter()
            .filter_map(|(action, label)| {
                // Shortest notation reads best in a one-line footer
                keys.keys_for(&action, key_context)
                    .into_iter()
                    .min_by_key(|key| key.chars().count())
                    .map(|key| (key, label))
            })
            .collect();

        Self { hints }
    }

    pub fn from_state(
        input_mode: InputMode,
        state: PlaybackState,
        keys: &KeybindingConfig,
    ) -> Self {
        Self::for_context(FooterContext::from_state(input_mode, state), keys)
    }

    pub fn hints(&self) -> &[(String, &'static str)] {
        &self.hints
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        let hints: Vec<(&str, &str)> = self
            .hints
            .iter()
            .map(|(key, label)| (key.as_str(), *label))
            .collect();
        render_key_hints(
            area,
            buf,
            &hints,
            KeyHintBarStyle::footer_bar(KEY_HINT_BG, FOOTER_BG),
        );
    }
}

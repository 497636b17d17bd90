use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::config::{KeyContext, KeybindingConfig};
use crate::ui::action::Action;
use crate::ui::components::{ACCENT_PRIMARY, CONTROL_BAR_BG, TEXT_BRIGHT, TEXT_FAINT};
use crate::visualizer::ControlState;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Button {
    key: Option<String>,
    label: &'static str,
    enabled: bool,
}

/// Row of buttons mirroring the visualizer controls. Disabled buttons are dimmed.
pub struct ControlBar {
    buttons: Vec<Button>,
}

impl ControlBar {
    pub fn new(controls: ControlState, keys: &KeybindingConfig) -> Self {
        let button = |action: Action, label: &'static str, enabled: bool| Button {
            key: keys
                .keys_for(&action, KeyContext::Visualizer)
                .into_iter()
                .next(),
            label,
            enabled,
        };

        Self {
            buttons: vec![
                button(Action::NewArray, "New Array", controls.new_array),
                button(Action::RunSort, "Bubble Sort", controls.run_sort),
                button(Action::Play, "Play", controls.play),
                button(Action::Pause, "Pause", controls.pause),
                button(Action::Stop, "Stop", controls.stop),
                button(Action::StepBackward, "Back", controls.step),
                button(Action::StepForward, "Step", controls.step),
            ],
        }
    }

    /// Labels of the buttons that are currently enabled
    pub fn enabled_labels(&self) -> Vec<&'static str> {
        self.buttons
            .iter()
            .filter(|b| b.enabled)
            .map(|b| b.label)
            .collect()
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![Span::raw(" ")];

        for (i, button) in self.buttons.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }

            let (key_style, label_style) = if button.enabled {
                (
                    Style::default().fg(ACCENT_PRIMARY),
                    Style::default().fg(TEXT_BRIGHT).add_modifier(Modifier::BOLD),
                )
            } else {
                let dimmed = Style::default().fg(TEXT_FAINT).add_modifier(Modifier::DIM);
                (dimmed, dimmed)
            };

            if let Some(key) = &button.key {
                spans.push(Span::styled(format!("[{}] ", key), key_style));
            }
            spans.push(Span::styled(button.label, label_style));
        }

        Paragraph::new(Line::from(spans))
            .style(Style::default().bg(CONTROL_BAR_BG))
            .render(area, buf);
    }
}

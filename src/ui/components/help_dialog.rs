//! Help overlay listing the active keybindings
//!
//! Entries are built from the live [`KeybindingConfig`], so remapped keys
//! show up here without any extra wiring.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use crate::config::{KeyContext, KeybindingConfig};
use crate::ui::action::Action;
use crate::ui::components::{
    ACCENT_PRIMARY, ACCENT_WARNING, DIALOG_BG, TEXT_MUTED, TEXT_PRIMARY,
};

/// A keybinding entry for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeybindingEntry {
    pub key_display: String,
    pub action_description: String,
}

/// Category for grouping keybindings in the help dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelpCategory {
    Array,
    Playback,
    General,
}

impl HelpCategory {
    pub fn title(&self) -> &'static str {
        match self {
            HelpCategory::Array => "ARRAY",
            HelpCategory::Playback => "PLAYBACK",
            HelpCategory::General => "GENERAL",
        }
    }

    fn actions(&self) -> Vec<Action> {
        match self {
            HelpCategory::Array => vec![
                Action::NewArray,
                Action::RunSort,
                Action::GrowArray(1),
                Action::ShrinkArray(1),
                Action::GrowArray(10),
                Action::ShrinkArray(10),
            ],
            HelpCategory::Playback => vec![
                Action::TogglePlay,
                Action::Play,
                Action::Pause,
                Action::Stop,
                Action::StepForward,
                Action::StepBackward,
                Action::Faster,
                Action::Slower,
            ],
            HelpCategory::General => vec![Action::ShowHelp, Action::Quit],
        }
    }
}

const CATEGORIES: [HelpCategory; 3] = [
    HelpCategory::Array,
    HelpCategory::Playback,
    HelpCategory::General,
];

/// Help dialog widget
pub struct HelpDialog {
    entries: Vec<(HelpCategory, Vec<KeybindingEntry>)>,
}

impl HelpDialog {
    pub fn new(config: &KeybindingConfig) -> Self {
        let entries = CATEGORIES
            .iter()
            .map(|category| {
                let items = category
                    .actions()
                    .into_iter()
                    .filter_map(|action| {
                        let keys = config.keys_for(&action, KeyContext::Visualizer);
                        if keys.is_empty() {
                            return None;
                        }
                        Some(KeybindingEntry {
                            key_display: keys.join(" "),
                            action_description: action.description(),
                        })
                    })
                    .collect::<Vec<_>>();
                (*category, items)
            })
            .filter(|(_, items)| !items.is_empty())
            .collect();

        Self { entries }
    }

    pub fn entries(&self) -> &[(HelpCategory, Vec<KeybindingEntry>)] {
        &self.entries
    }

    fn lines(&self) -> Vec<Line<'_>> {
        let key_width = self
            .entries
            .iter()
            .flat_map(|(_, items)| items.iter())
            .map(|e| e.key_display.chars().count())
            .max()
            .unwrap_or(8);

        let mut lines = Vec::new();
        for (i, (category, items)) in self.entries.iter().enumerate() {
            if i > 0 {
                lines.push(Line::default());
            }
            lines.push(Line::from(Span::styled(
                category.title(),
                Style::default()
                    .fg(ACCENT_WARNING)
                    .add_modifier(Modifier::BOLD),
            )));
            for entry in items {
                lines.push(Line::from(vec![
                    Span::styled(
                        format!("{:>width$}", entry.key_display, width = key_width),
                        Style::default().fg(ACCENT_PRIMARY),
                    ),
                    Span::raw("  "),
                    Span::styled(
                        entry.action_description.as_str(),
                        Style::default().fg(TEXT_PRIMARY),
                    ),
                ]));
            }
        }
        lines
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        let lines = self.lines();
        let content_width = lines.iter().map(|l| l.width()).max().unwrap_or(0) as u16;

        let width = (content_width + 6).min(area.width);
        let height = (lines.len() as u16 + 4).min(area.height);
        let dialog_area = Rect {
            x: area.x + (area.width.saturating_sub(width)) / 2,
            y: area.y + (area.height.saturating_sub(height)) / 2,
            width,
            height,
        };

        Clear.render(dialog_area, buf);

        let block = Block::default()
            .title(" Help - Keybindings ")
            .title_bottom(Line::from(" Esc/q close ").alignment(Alignment::Right))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(ACCENT_PRIMARY))
            .style(Style::default().bg(DIALOG_BG).fg(TEXT_MUTED));
        let inner = block.inner(dialog_area);
        block.render(dialog_area, buf);

        let content = Rect {
            x: inner.x.saturating_add(2),
            y: inner.y.saturating_add(1),
            width: inner.width.saturating_sub(4),
            height: inner.height.saturating_sub(1),
        };
        Paragraph::new(lines).render(content, buf);
    }
}

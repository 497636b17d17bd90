use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::ui::components::{
    ACCENT_SUCCESS, ACCENT_WARNING, STATUS_BAR_BG, TEXT_MUTED, TEXT_PRIMARY, TEXT_SECONDARY,
};
use crate::visualizer::{PlaybackState, Visualizer};

/// Status line: playback state, array size, speed and frame position
pub struct StatusBar {
    state: PlaybackState,
    size: usize,
    interval_ms: u64,
    cursor: usize,
    last_index: usize,
    /// `(comparisons, swaps)` of the loaded recording
    counts: Option<(usize, usize)>,
}

impl StatusBar {
    pub fn from_visualizer(visualizer: &Visualizer) -> Self {
        let (cursor, last_index) = visualizer.position();
        Self {
            state: visualizer.state(),
            size: visualizer.size(),
            interval_ms: visualizer.interval_ms(),
            cursor,
            last_index,
            counts: visualizer
                .playback()
                .recording()
                .map(|r| (r.comparison_count(), r.swap_count())),
        }
    }

    /// `Frame <cursor>/<last index>`
    pub fn position_label(&self) -> String {
        format!("Frame {}/{}", self.cursor, self.last_index)
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        let state_color = match self.state {
            PlaybackState::Playing => ACCENT_SUCCESS,
            PlaybackState::Paused => ACCENT_WARNING,
            PlaybackState::Idle => TEXT_MUTED,
        };
        let label = Style::default().fg(TEXT_MUTED);
        let value = Style::default().fg(TEXT_PRIMARY);
        let sep = Span::styled("  │  ", Style::default().fg(TEXT_SECONDARY));

        let mut spans = vec![
            Span::raw(" "),
            Span::styled(
                format!("● {}", self.state.label()),
                Style::default().fg(state_color).add_modifier(Modifier::BOLD),
            ),
            sep.clone(),
            Span::styled("Size ", label),
            Span::styled(self.size.to_string(), value),
            sep.clone(),
            Span::styled("Speed ", label),
            Span::styled(format!("{} ms", self.interval_ms), value),
            sep.clone(),
            Span::styled(self.position_label(), value),
        ];

        if let Some((comparisons, swaps)) = self.counts {
            spans.push(sep);
            spans.push(Span::styled(
                format!("{} comparisons, {} swaps", comparisons, swaps),
                label,
            ));
        }

        Paragraph::new(Line::from(spans))
            .style(Style::default().bg(STATUS_BAR_BG))
            .render(area, buf);
    }
}

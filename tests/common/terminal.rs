//! TUI testing utilities using Ratatui's TestBackend
//!
//! Provides helpers for rendering the app to a test buffer
//! and converting the output to strings for snapshot testing.

use ratatui::{backend::TestBackend, buffer::Buffer, layout::Rect, style::Color, Terminal};
use sortviz::App;

/// Create a test terminal with custom dimensions
pub fn create_test_terminal_sized(width: u16, height: u16) -> Terminal<TestBackend> {
    let backend = TestBackend::new(width, height);
    Terminal::new(backend).expect("Failed to create test terminal")
}

/// Draw `app` once and return the resulting buffer
pub fn render_app(app: &App, width: u16, height: u16) -> Buffer {
    let mut terminal = create_test_terminal_sized(width, height);
    terminal
        .draw(|f| app.draw(f))
        .expect("Failed to draw app");
    terminal.backend().buffer().clone()
}

/// Convert a buffer to a string for snapshot testing
///
/// Preserves exact spacing and newlines for accurate comparison.
pub fn buffer_to_string(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut output = String::new();

    for y in area.y..area.y + area.height {
        for x in area.x..area.x + area.width {
            if let Some(cell) = buffer.cell((x, y)) {
                output.push_str(cell.symbol());
            }
        }
        output.push('\n');
    }

    output
}

/// Convert buffer to string, trimming trailing whitespace per line
pub fn buffer_to_trimmed_string(buffer: &Buffer) -> String {
    buffer_to_string(buffer)
        .lines()
        .map(|line| line.trim_end())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Extract a single row of the buffer as a string
pub fn row_to_string(buffer: &Buffer, y: u16) -> String {
    let area = Rect::new(buffer.area.x, y, buffer.area.width, 1);
    (area.x..area.x + area.width)
        .filter_map(|x| buffer.cell((x, y)))
        .map(|cell| cell.symbol())
        .collect()
}

/// Check if the buffer contains a string anywhere
pub fn buffer_contains(buffer: &Buffer, text: &str) -> bool {
    buffer_to_string(buffer).contains(text)
}

/// Number of cells whose foreground is `color`
pub fn count_fg(buffer: &Buffer, color: Color) -> usize {
    buffer.content().iter().filter(|cell| cell.fg == color).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::widgets::Paragraph;

    #[test]
    fn test_buffer_to_string() {
        let mut terminal = create_test_terminal_sized(10, 3);
        terminal
            .draw(|f| {
                let para = Paragraph::new("Hello");
                f.render_widget(para, f.area());
            })
            .unwrap();

        let output = buffer_to_trimmed_string(terminal.backend().buffer());
        assert!(output.starts_with("Hello"));
        assert_eq!(row_to_string(terminal.backend().buffer(), 0), "Hello     ");
    }
}

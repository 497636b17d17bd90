//! Bar chart for the array under visualization.
//!
//! Each value becomes a vertical bar whose height is proportional to
//! [`MAX_VALUE`]. Heights are drawn in eighth-cell steps using the lower
//! block glyphs. When there are more bars than terminal columns, adjacent
//! bars are folded into one column that shows the tallest value and the
//! strongest highlight in the group.

use ratatui::{buffer::Buffer, layout::Rect, style::Color};

use super::BarPalette;
use crate::visualizer::array::MAX_VALUE;
use crate::visualizer::DisplayFrame;

const PARTIAL_BLOCKS: [&str; 8] = [" ", "▁", "▂", "▃", "▄", "▅", "▆", "▇"];
const FULL_BLOCK: &str = "█";

/// How a bar is colored. Ordered so that `max` picks the strongest one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Highlight {
    Default,
    Compare,
    Swap,
}

impl Highlight {
    /// Swap wins over compare when an index is in both sets.
    pub fn for_index(index: usize, active: &[usize], swapped: &[usize]) -> Self {
        if swapped.contains(&index) {
            Highlight::Swap
        } else if active.contains(&index) {
            Highlight::Compare
        } else {
            Highlight::Default
        }
    }

    pub fn color(self, palette: &BarPalette) -> Color {
        match self {
            Highlight::Default => palette.bar,
            Highlight::Compare => palette.compare,
            Highlight::Swap => palette.swap,
        }
    }
}

/// One drawn column group of the chart
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    /// Offset from the left edge of the chart area
    pub x: u16,
    pub width: u16,
    pub value: u32,
    pub highlight: Highlight,
}

/// Lay out `frame` across `width` terminal columns.
pub fn layout_columns(frame: &DisplayFrame<'_>, width: u16) -> Vec<Column> {
    let count = frame.values.len();
    let available = usize::from(width);
    if count == 0 || available == 0 {
        return Vec::new();
    }

    if count <= available {
        let bar_width = available / count;
        // Leave a one-cell gap once bars are wide enough to afford it
        let gap = usize::from(bar_width >= 3);
        return frame
            .values
            .iter()
            .enumerate()
            .map(|(i, &value)| Column {
                x: (i * bar_width) as u16,
                width: (bar_width - gap) as u16,
                value,
                highlight: Highlight::for_index(i, frame.active, frame.swapped),
            })
            .collect();
    }

    (0..available)
        .map(|col| {
            let start = col * count / available;
            let end = ((col + 1) * count / available).max(start + 1);
            let value = frame.values[start..end].iter().copied().max().unwrap_or(0);
            let highlight = (start..end)
                .map(|i| Highlight::for_index(i, frame.active, frame.swapped))
                .max()
                .unwrap_or(Highlight::Default);
            Column {
                x: col as u16,
                width: 1,
                value,
                highlight,
            }
        })
        .collect()
}

/// Height of `value` in eighths of a cell for a chart `rows` tall.
///
/// Any positive value gets at least one eighth so small bars stay visible.
pub fn bar_eighths(value: u32, rows: u16) -> u32 {
    let max_eighths = u32::from(rows) * 8;
    if value == 0 || max_eighths == 0 {
        return 0;
    }
    let scaled = (u64::from(value) * u64::from(max_eighths) + u64::from(MAX_VALUE) / 2)
        / u64::from(MAX_VALUE);
    (scaled as u32).clamp(1, max_eighths)
}

pub struct BarChart<'a> {
    frame: DisplayFrame<'a>,
    palette: BarPalette,
}

impl<'a> BarChart<'a> {
    pub fn new(frame: DisplayFrame<'a>, palette: BarPalette) -> Self {
        Self { frame, palette }
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let bottom = area.y + area.height - 1;
        for column in layout_columns(&self.frame, area.width) {
            let color = column.highlight.color(&self.palette);
            let eighths = bar_eighths(column.value, area.height);
            let full_rows = (eighths / 8) as u16;
            let remainder = (eighths % 8) as usize;

            for dx in 0..column.width {
                let x = area.x + column.x + dx;
                for row in 0..full_rows {
                    buf[(x, bottom - row)].set_symbol(FULL_BLOCK).set_fg(color);
                }
                if remainder > 0 && full_rows < area.height {
                    buf[(x, bottom - full_rows)]
                        .set_symbol(PARTIAL_BLOCKS[remainder])
                        .set_fg(color);
                }
            }
        }
    }
}

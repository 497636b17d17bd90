mod bar_chart;
mod control_bar;
mod global_footer;
mod help_dialog;
mod key_hints;
mod status_bar;
mod theme;

pub use bar_chart::{bar_eighths, layout_columns, BarChart, Column, Highlight};
pub use control_bar::ControlBar;
pub use global_footer::{FooterContext, GlobalFooter};
pub use help_dialog::{HelpCategory, HelpDialog, KeybindingEntry};
pub use key_hints::{render_key_hints, KeyHintBarStyle};
pub use status_bar::StatusBar;
pub use theme::*;

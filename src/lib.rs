pub mod cli;
pub mod config;
pub mod ui;
pub mod util;
pub mod visualizer;

pub use cli::Cli;
pub use config::Config;
pub use ui::App;
pub use visualizer::{Recording, Visualizer};

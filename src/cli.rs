//! Command-line arguments

use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;
use crate::visualizer::{MAX_INTERVAL_MS, MAX_SIZE, MIN_INTERVAL_MS, MIN_SIZE};

#[derive(Debug, Parser)]
#[command(
    name = "sortviz",
    about = "Animated bubble sort in the terminal",
    version
)]
pub struct Cli {
    /// Number of bars to sort
    #[arg(long, value_parser = clap::value_parser!(u64).range(MIN_SIZE as u64..=MAX_SIZE as u64))]
    pub size: Option<u64>,

    /// Milliseconds between frames during playback (smaller is faster)
    #[arg(long, value_parser = clap::value_parser!(u64).range(MIN_INTERVAL_MS..=MAX_INTERVAL_MS))]
    pub speed: Option<u64>,

    /// Seed for array generation, for reproducible runs
    #[arg(long)]
    pub seed: Option<u64>,

    /// Config file to load instead of <data dir>/config.toml
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Directory for the config file and logs (default: ~/.sortviz)
    #[arg(long = "data-dir")]
    pub data_dir: Option<PathBuf>,

    /// Print an example config file and exit
    #[arg(long)]
    pub print_config: bool,
}

impl Cli {
    /// Apply command-line overrides on top of a loaded config
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(size) = self.size {
            config = config.with_size(size as usize);
        }
        if let Some(speed) = self.speed {
            config = config.with_speed_ms(speed);
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_apply_over_config() {
        let cli = Cli::try_parse_from(["sortviz", "--size", "42", "--speed", "20", "--seed", "9"])
            .unwrap();
        let config = cli.apply(Config::default());
        assert_eq!(config.visualizer.size, 42);
        assert_eq!(config.visualizer.interval_ms, 20);
        assert_eq!(config.visualizer.seed, Some(9));
    }

    #[test]
    fn test_missing_flags_keep_config() {
        let cli = Cli::try_parse_from(["sortviz"]).unwrap();
        let config = cli.apply(Config::default().with_size(30));
        assert_eq!(config.visualizer.size, 30);
        assert_eq!(config.visualizer.seed, None);
    }

    #[test]
    fn test_out_of_range_values_rejected() {
        assert!(Cli::try_parse_from(["sortviz", "--size", "4"]).is_err());
        assert!(Cli::try_parse_from(["sortviz", "--size", "245"]).is_err());
        assert!(Cli::try_parse_from(["sortviz", "--speed", "1"]).is_err());
        assert!(Cli::try_parse_from(["sortviz", "--speed", "41"]).is_err());
        assert!(Cli::try_parse_from(["sortviz", "--speed", "2"]).is_ok());
    }
}

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::ui::action::Action;
use crate::ui::components::{parse_hex_color, BarPalette};
use crate::util::paths::config_path;
use crate::visualizer::VisualizerSettings;

use super::default_keys::default_keybindings;
use super::keys::{parse_key_notation, KeyCombo, KeyContext, KeyParseError, KeybindingConfig};

/// Example configuration file contents (bundled with the binary)
pub const EXAMPLE_CONFIG: &str = include_str!("config.toml.example");

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Initial array size, speed and seed
    pub visualizer: VisualizerSettings,
    /// Bar highlight colors
    pub palette: BarPalette,
    /// Keybinding configuration
    pub keybindings: KeybindingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            visualizer: VisualizerSettings::default(),
            palette: BarPalette::default(),
            keybindings: default_keybindings(),
        }
    }
}

/// Errors while loading the config file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid color for `{field}`: {value}")]
    InvalidColor { field: &'static str, value: String },
    #[error("invalid key `{key}` for `{action}`: {source}")]
    InvalidKey {
        action: String,
        key: String,
        #[source]
        source: KeyParseError,
    },
    #[error("unknown action `{0}`")]
    UnknownAction(String),
}

/// TOML representation of the `[visualizer]` table
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlVisualizerConfig {
    pub size: Option<usize>,
    pub speed_ms: Option<u64>,
    pub seed: Option<u64>,
}

/// TOML representation of the `[colors]` table
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlColorConfig {
    pub bar: Option<String>,
    pub compare: Option<String>,
    pub swap: Option<String>,
}

/// TOML representation of keybinding configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlKeybindings {
    /// Global keybindings (apply to all contexts)
    #[serde(flatten)]
    pub global: HashMap<String, toml::Value>,

    /// Visualizer screen keybindings
    pub visualizer: Option<HashMap<String, String>>,

    /// Help overlay keybindings
    pub help: Option<HashMap<String, String>>,
}

/// TOML representation of the config file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    pub visualizer: Option<TomlVisualizerConfig>,
    pub colors: Option<TomlColorConfig>,
    pub keys: Option<TomlKeybindings>,
}

impl TomlKeybindings {
    /// Convert TOML keybindings to KeybindingConfig
    fn to_keybinding_config(&self) -> Result<KeybindingConfig, ConfigError> {
        let mut config = KeybindingConfig::new();

        for (action_name, value) in &self.global {
            // Context tables are deserialized into their own fields
            let Some(key_str) = value.as_str() else {
                continue;
            };
            let (combo, action) = parse_binding(action_name, key_str)?;
            config.global.insert(combo, action);
        }

        if let Some(bindings) = &self.visualizer {
            parse_context_bindings(&mut config, KeyContext::Visualizer, bindings)?;
        }
        if let Some(bindings) = &self.help {
            parse_context_bindings(&mut config, KeyContext::Help, bindings)?;
        }

        Ok(config)
    }
}

fn parse_binding(action_name: &str, key_str: &str) -> Result<(KeyCombo, Action), ConfigError> {
    let action =
        parse_action(action_name).ok_or_else(|| ConfigError::UnknownAction(action_name.into()))?;
    let combo = parse_key_notation(key_str).map_err(|source| ConfigError::InvalidKey {
        action: action_name.to_string(),
        key: key_str.to_string(),
        source,
    })?;
    Ok((combo, action))
}

/// Parse context-specific keybindings
fn parse_context_bindings(
    config: &mut KeybindingConfig,
    context: KeyContext,
    bindings: &HashMap<String, String>,
) -> Result<(), ConfigError> {
    let context_map = config.context.entry(context).or_default();
    for (action_name, key_str) in bindings {
        let (combo, action) = parse_binding(action_name, key_str)?;
        context_map.insert(combo, action);
    }
    Ok(())
}

/// Parse an action name string into an Action
pub fn parse_action(name: &str) -> Option<Action> {
    match name {
        "quit" => Some(Action::Quit),
        "show_help" | "help" => Some(Action::ShowHelp),
        "close_help" => Some(Action::CloseHelp),

        "new_array" => Some(Action::NewArray),
        "run_sort" | "bubble_sort" => Some(Action::RunSort),
        "grow_array" => Some(Action::GrowArray(1)),
        "shrink_array" => Some(Action::ShrinkArray(1)),
        "grow_array_large" => Some(Action::GrowArray(10)),
        "shrink_array_large" => Some(Action::ShrinkArray(10)),

        "play" => Some(Action::Play),
        "pause" => Some(Action::Pause),
        "toggle_play" => Some(Action::TogglePlay),
        "stop" => Some(Action::Stop),
        "step_forward" => Some(Action::StepForward),
        "step_backward" => Some(Action::StepBackward),
        "faster" => Some(Action::Faster),
        "slower" => Some(Action::Slower),

        _ => None,
    }
}

fn parse_color(field: &'static str, value: &str) -> Result<ratatui::style::Color, ConfigError> {
    parse_hex_color(value).ok_or_else(|| ConfigError::InvalidColor {
        field,
        value: value.to_string(),
    })
}

impl Config {
    /// Load configuration from the default config path, falling back to
    /// defaults when the file is missing or broken
    pub fn load() -> Self {
        Self::load_or_default(&config_path())
    }

    /// Load configuration from `path`, falling back to defaults when the file
    /// is missing or broken
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Config::default();
        }

        match Self::load_from(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(error = %e, "Ignoring invalid config file");
                Config::default()
            }
        }
    }

    /// Load configuration from `path`, merging it on top of the defaults
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let toml_config: TomlConfig =
            toml::from_str(&contents).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        Config::default().merge_toml(toml_config)
    }

    /// Merge a parsed config file on top of this configuration
    pub fn merge_toml(mut self, toml_config: TomlConfig) -> Result<Self, ConfigError> {
        if let Some(viz) = toml_config.visualizer {
            if let Some(size) = viz.size {
                self.visualizer.size = size;
            }
            if let Some(speed) = viz.speed_ms {
                self.visualizer.interval_ms = speed;
            }
            if viz.seed.is_some() {
                self.visualizer.seed = viz.seed;
            }
        }

        if let Some(colors) = toml_config.colors {
            if let Some(bar) = colors.bar {
                self.palette.bar = parse_color("bar", &bar)?;
            }
            if let Some(compare) = colors.compare {
                self.palette.compare = parse_color("compare", &compare)?;
            }
            if let Some(swap) = colors.swap {
                self.palette.swap = parse_color("swap", &swap)?;
            }
        }

        // Merge user keybindings on top of defaults
        if let Some(keys) = toml_config.keys {
            let user_bindings = keys.to_keybinding_config()?;
            self.keybindings.merge(user_bindings);
        }

        Ok(self)
    }

    pub fn with_size(mut self, size: usize) -> Self {
        self.visualizer.size = size;
        self
    }

    pub fn with_speed_ms(mut self, speed_ms: u64) -> Self {
        self.visualizer.interval_ms = speed_ms;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.visualizer.seed = Some(seed);
        self
    }
}

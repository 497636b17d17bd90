//! Keybinding configuration types and parsing
//!
//! This module provides types for representing keyboard shortcuts and
//! parsing vim-style key notation (e.g., "C-x", "S-p", "<Space>").

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crossterm::event::{KeyCode, KeyModifiers};
use thiserror::Error;

use crate::ui::action::Action;
use crate::ui::events::InputMode;

/// A key combination (key code + modifiers)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyCombo {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Create a KeyCombo from a crossterm KeyEvent
    ///
    /// This normalizes the key event to match the canonical form used by config parsing:
    /// - Uppercase characters are converted to lowercase + SHIFT modifier
    /// - Shifted symbols (`?`, `+`, `]`...) drop SHIFT, since the character already carries it
    pub fn from_key_event(event: &crossterm::event::KeyEvent) -> Self {
        match event.code {
            KeyCode::Char(c) if c.is_ascii_uppercase() => Self {
                code: KeyCode::Char(c.to_ascii_lowercase()),
                modifiers: event.modifiers | KeyModifiers::SHIFT,
            },
            KeyCode::Char(c) if !c.is_ascii_alphabetic() => Self {
                code: event.code,
                modifiers: event.modifiers - KeyModifiers::SHIFT,
            },
            _ => Self {
                code: event.code,
                modifiers: event.modifiers,
            },
        }
    }
}

impl fmt::Display for KeyCombo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();

        if self.modifiers.contains(KeyModifiers::CONTROL) {
            parts.push("C");
        }
        if self.modifiers.contains(KeyModifiers::ALT) {
            parts.push("M");
        }
        if self.modifiers.contains(KeyModifiers::SHIFT) {
            parts.push("S");
        }

        let key_str = match self.code {
            KeyCode::Char(' ') => "<Space>".to_string(),
            KeyCode::Char(c) => c.to_string(),
            KeyCode::Enter => "<CR>".to_string(),
            KeyCode::Esc => "<Esc>".to_string(),
            KeyCode::Tab => "<Tab>".to_string(),
            KeyCode::Backspace => "<BS>".to_string(),
            KeyCode::Up => "<Up>".to_string(),
            KeyCode::Down => "<Down>".to_string(),
            KeyCode::Left => "<Left>".to_string(),
            KeyCode::Right => "<Right>".to_string(),
            KeyCode::Home => "<Home>".to_string(),
            KeyCode::End => "<End>".to_string(),
            KeyCode::F(n) => format!("<F{}>", n),
            _ => format!("{:?}", self.code),
        };

        if parts.is_empty() {
            write!(f, "{}", key_str)
        } else {
            parts.push(&key_str);
            write!(f, "{}", parts.join("-"))
        }
    }
}

/// Context for keybindings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyContext {
    /// Main visualizer screen
    Visualizer,
    /// Help overlay
    Help,
}

impl KeyContext {
    /// Convert from InputMode to KeyContext
    pub fn from_input_mode(mode: InputMode) -> Self {
        match mode {
            InputMode::Normal => KeyContext::Visualizer,
            InputMode::ShowingHelp => KeyContext::Help,
        }
    }
}

/// Configuration for all keybindings
#[derive(Debug, Clone, Default)]
pub struct KeybindingConfig {
    /// Global keybindings (apply to all contexts unless overridden)
    pub global: HashMap<KeyCombo, Action>,
    /// Context-specific keybindings
    pub context: HashMap<KeyContext, HashMap<KeyCombo, Action>>,
}

impl KeybindingConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up an action for a key combo in a given context
    /// First checks context-specific bindings, then falls back to global
    pub fn get_action(&self, key: &KeyCombo, context: KeyContext) -> Option<&Action> {
        if let Some(context_bindings) = self.context.get(&context) {
            if let Some(action) = context_bindings.get(key) {
                return Some(action);
            }
        }

        self.global.get(key)
    }

    /// Merge user configuration on top of defaults
    pub fn merge(&mut self, other: KeybindingConfig) {
        for (key, action) in other.global {
            self.global.insert(key, action);
        }

        for (ctx, bindings) in other.context {
            let entry = self.context.entry(ctx).or_default();
            for (key, action) in bindings {
                entry.insert(key, action);
            }
        }
    }

    /// All keys bound to `action` in `context` (including global ones),
    /// sorted by their notation for stable display.
    pub fn keys_for(&self, action: &Action, context: KeyContext) -> Vec<String> {
        let mut keys: Vec<String> = self
            .context
            .get(&context)
            .into_iter()
            .flat_map(|bindings| bindings.iter())
            .chain(self.global.iter())
            .filter(|(_, bound)| *bound == action)
            .map(|(combo, _)| combo.to_string())
            .collect();
        keys.sort();
        keys.dedup();
        keys
    }
}

/// Parse a vim-style key notation string into a KeyCombo
///
/// Supported notation:
/// - `C-x` for Ctrl+x, `M-x` for Alt+x, `S-x` for Shift+x
/// - an uppercase letter (`P`) for Shift + that letter
/// - `<CR>`, `<Esc>`, `<Tab>`, `<BS>`, `<Space>`, `<Minus>`
/// - `<Up>`, `<Down>`, `<Left>`, `<Right>`, `<Home>`, `<End>`
/// - `<F1>` through `<F12>`
/// - any other single character (`?`, `+`, `-`, `[`) as itself
pub fn parse_key_notation(s: &str) -> Result<KeyCombo, KeyParseError> {
    let s = s.trim();

    if s.is_empty() {
        return Err(KeyParseError::Empty);
    }

    // A lone dash would otherwise be read as a modifier separator
    if s == "-" {
        return Ok(KeyCombo::new(KeyCode::Char('-'), KeyModifiers::NONE));
    }

    if s.starts_with('<') && s.ends_with('>') && s.len() > 2 {
        return parse_special_key(s);
    }

    let parts: Vec<&str> = s.split('-').collect();

    let mut modifiers = KeyModifiers::NONE;
    let mut key_part = None;

    for (i, part) in parts.iter().enumerate() {
        let is_last = i == parts.len() - 1;
        match *part {
            "C" if !is_last => modifiers |= KeyModifiers::CONTROL,
            "M" if !is_last => modifiers |= KeyModifiers::ALT,
            "S" if !is_last => modifiers |= KeyModifiers::SHIFT,
            _ if is_last => key_part = Some(*part),
            other => return Err(KeyParseError::InvalidModifier(other.to_string())),
        }
    }

    let key_str = key_part.ok_or(KeyParseError::NoKey)?;
    let (code, needs_shift) = parse_key_code(key_str)?;

    // Uppercase letters imply SHIFT ("P" -> lowercase p + SHIFT)
    if needs_shift {
        modifiers |= KeyModifiers::SHIFT;
    }

    Ok(KeyCombo::new(code, modifiers))
}

/// Parse a special key notation like <CR>, <Esc>, etc.
fn parse_special_key(s: &str) -> Result<KeyCombo, KeyParseError> {
    let inner = &s[1..s.len() - 1];

    // Modifiers inside brackets, like <C-Space>
    let parts: Vec<&str> = inner.split('-').collect();

    let mut modifiers = KeyModifiers::NONE;
    let mut key_name = inner;

    if parts.len() > 1 {
        for part in &parts[..parts.len() - 1] {
            match *part {
                "C" => modifiers |= KeyModifiers::CONTROL,
                "M" => modifiers |= KeyModifiers::ALT,
                "S" => modifiers |= KeyModifiers::SHIFT,
                _ => return Err(KeyParseError::InvalidModifier(part.to_string())),
            }
        }
        key_name = parts[parts.len() - 1];
    }

    let code = match key_name.to_uppercase().as_str() {
        "CR" | "ENTER" | "RETURN" => KeyCode::Enter,
        "ESC" | "ESCAPE" => KeyCode::Esc,
        "TAB" => KeyCode::Tab,
        "BS" | "BACKSPACE" => KeyCode::Backspace,
        "UP" => KeyCode::Up,
        "DOWN" => KeyCode::Down,
        "LEFT" => KeyCode::Left,
        "RIGHT" => KeyCode::Right,
        "HOME" => KeyCode::Home,
        "END" => KeyCode::End,
        "SPACE" => KeyCode::Char(' '),
        "MINUS" => KeyCode::Char('-'),
        name if name.starts_with('F') && name.len() > 1 => {
            let num: u8 = name[1..]
                .parse()
                .map_err(|_| KeyParseError::InvalidSpecialKey(key_name.to_string()))?;
            if num == 0 || num > 12 {
                return Err(KeyParseError::InvalidSpecialKey(key_name.to_string()));
            }
            KeyCode::F(num)
        }
        _ => return Err(KeyParseError::InvalidSpecialKey(key_name.to_string())),
    };

    Ok(KeyCombo::new(code, modifiers))
}

/// Parse a single key code (not a special key)
/// Returns the KeyCode and whether SHIFT should be added (for uppercase chars)
fn parse_key_code(s: &str) -> Result<(KeyCode, bool), KeyParseError> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok((
            KeyCode::Char(c.to_ascii_lowercase()),
            c.is_ascii_uppercase(),
        )),
        _ => match s.to_uppercase().as_str() {
            "SPACE" => Ok((KeyCode::Char(' '), false)),
            "TAB" => Ok((KeyCode::Tab, false)),
            "ENTER" | "CR" | "RETURN" => Ok((KeyCode::Enter, false)),
            "ESC" | "ESCAPE" => Ok((KeyCode::Esc, false)),
            _ => Err(KeyParseError::InvalidKey(s.to_string())),
        },
    }
}

/// Error type for key parsing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyParseError {
    #[error("empty key notation")]
    Empty,
    #[error("no key specified")]
    NoKey,
    #[error("invalid key: {0}")]
    InvalidKey(String),
    #[error("invalid modifier: {0}")]
    InvalidModifier(String),
    #[error("invalid special key: {0}")]
    InvalidSpecialKey(String),
}

impl FromStr for KeyCombo {
    type Err = KeyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_key_notation(s)
    }
}

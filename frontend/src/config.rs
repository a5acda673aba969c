//! Key-binding overrides persisted as TOML under the platform config
//! directory. The file holds `button name -> SDL scancode name` pairs;
//! anything not listed falls back to [`crate::input::default_key_map`].

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct KeyBindings {
    /// Button name (as in `InputButton::name`) -> SDL scancode name (e.g. "Left").
    #[serde(default)]
    pub bindings: BTreeMap<String, String>,
}

fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("invaders").join("keybindings.toml"))
}

/// Load saved overrides, if a config file exists and parses. Missing or
/// unreadable config is not an error: it just means "use the defaults".
pub fn load() -> KeyBindings {
    let Some(path) = config_path() else {
        return KeyBindings::default();
    };
    match std::fs::read_to_string(&path) {
        Ok(text) => toml::from_str(&text).unwrap_or_else(|e| {
            log::warn!("ignoring malformed key binding config at {}: {e}", path.display());
            KeyBindings::default()
        }),
        Err(_) => KeyBindings::default(),
    }
}

/// Write `bindings` to the platform config directory, creating it if needed.
pub fn save(bindings: &KeyBindings) -> std::io::Result<()> {
    let Some(path) = config_path() else {
        return Ok(());
    };
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let text = toml::to_string_pretty(bindings).unwrap_or_default();
    std::fs::write(path, text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bindings_is_empty() {
        let bindings = KeyBindings::default();
        assert!(bindings.bindings.is_empty());
    }

    #[test]
    fn round_trips_through_toml() {
        let mut bindings = KeyBindings::default();
        bindings.bindings.insert("Coin".to_string(), "Num5".to_string());
        let text = toml::to_string_pretty(&bindings).unwrap();
        let parsed: KeyBindings = toml::from_str(&text).unwrap();
        assert_eq!(parsed.bindings.get("Coin"), Some(&"Num5".to_string()));
    }
}

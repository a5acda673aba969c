use std::collections::HashMap;

use invaders_core::prelude::InputButton;
use sdl2::keyboard::Scancode;

use crate::config::KeyBindings;

/// Maps SDL scancodes to cabinet button IDs.
pub struct KeyMap {
    map: HashMap<Scancode, u8>,
}

impl KeyMap {
    pub fn new() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    /// Bind a scancode to a cabinet button ID.
    pub fn bind(&mut self, scancode: Scancode, button_id: u8) {
        self.map.insert(scancode, button_id);
    }

    /// Look up the cabinet button ID for a scancode.
    pub fn get(&self, scancode: Scancode) -> Option<u8> {
        self.map.get(&scancode).copied()
    }
}

/// Build the default key map for the cabinet's input buttons.
pub fn default_key_map(buttons: &[InputButton]) -> KeyMap {
    let mut km = KeyMap::new();

    for button in buttons {
        let scancode = match button.name {
            "P1 Left" => Some(Scancode::Left),
            "P1 Right" => Some(Scancode::Right),
            "P1 Fire" => Some(Scancode::LCtrl),
            "P1 Start" => Some(Scancode::Num1),

            "P2 Left" => Some(Scancode::A),
            "P2 Right" => Some(Scancode::D),
            "P2 Fire" => Some(Scancode::E),
            "P2 Start" => Some(Scancode::Num2),

            "Coin" => Some(Scancode::Num5),

            _ => None,
        };

        if let Some(sc) = scancode {
            km.bind(sc, button.id);
        }
    }

    km
}

/// Apply saved overrides on top of a default key map. An override whose
/// button name or scancode name doesn't resolve is logged and skipped.
pub fn apply_overrides(key_map: &mut KeyMap, buttons: &[InputButton], overrides: &KeyBindings) {
    for (button_name, scancode_name) in &overrides.bindings {
        let Some(button) = buttons.iter().find(|b| b.name == button_name) else {
            log::warn!("key binding config references unknown button {button_name:?}");
            continue;
        };
        let Some(scancode) = Scancode::from_name(scancode_name) else {
            log::warn!("key binding config has unrecognized scancode {scancode_name:?}");
            continue;
        };
        key_map.bind(scancode, button.id);
    }
}

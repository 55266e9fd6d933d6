//! Key bindings and input events.

use serde::{Deserialize, Serialize};
use weft_types::constants::REFERENCE_RESOLUTIONS;
use weft_types::{WeftError, WeftResult};

/// A host request decoded from a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Make the instance with this resolution active.
    Select { resolution: usize },
    /// Switch between solid and wireframe display.
    ToggleWireframe,
    /// Stop the frame loop.
    Quit,
}

/// One key that selects a cloth instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectBinding {
    pub key: char,
    pub resolution: usize,
}

/// Key map from host key presses to [`InputEvent`]s.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub toggle_wireframe: char,
    pub quit: char,
    pub select: Vec<SelectBinding>,
}

impl Default for KeyBindings {
    /// `y/u/i/o` select 8/24/64/256, `c` toggles wireframe, `q` quits.
    fn default() -> Self {
        let select = ['y', 'u', 'i', 'o']
            .into_iter()
            .zip(REFERENCE_RESOLUTIONS)
            .map(|(key, resolution)| SelectBinding { key, resolution })
            .collect();
        Self {
            toggle_wireframe: 'c',
            quit: 'q',
            select,
        }
    }
}

impl KeyBindings {
    /// Decodes a key press. Unbound keys give `None`.
    pub fn resolve(&self, key: char) -> Option<InputEvent> {
        if key == self.quit {
            return Some(InputEvent::Quit);
        }
        if key == self.toggle_wireframe {
            return Some(InputEvent::ToggleWireframe);
        }
        self.select
            .iter()
            .find(|binding| binding.key == key)
            .map(|binding| InputEvent::Select {
                resolution: binding.resolution,
            })
    }

    /// Key bound to selecting `resolution`, if any.
    pub fn key_for(&self, resolution: usize) -> Option<char> {
        self.select
            .iter()
            .find(|binding| binding.resolution == resolution)
            .map(|binding| binding.key)
    }

    /// Rejects keys bound to more than one action.
    pub fn validate(&self) -> WeftResult<()> {
        let mut keys = vec![self.toggle_wireframe, self.quit];
        keys.extend(self.select.iter().map(|binding| binding.key));
        for (n, key) in keys.iter().enumerate() {
            if keys[..n].contains(key) {
                return Err(WeftError::InvalidConfig(format!(
                    "Key '{}' is bound more than once",
                    key
                )));
            }
        }
        Ok(())
    }
}

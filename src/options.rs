//! Controller options.
//!
//! Options can be loaded from JSON or set one at a time by name, the way a
//! driver forwards `setoption`-style commands.

use serde::{Deserialize, Serialize};

use crate::error::GameError;

/// Tunable rules for a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GameOptions {
    /// Reject moves whose destination is not adjacent to the mover.
    #[serde(default)]
    pub enforce_adjacency: bool,
    /// Hand occupied supply centers to the occupier when Fall ends.
    #[serde(default = "default_true")]
    pub capture_supply_centers: bool,
}

fn default_true() -> bool {
    true
}

impl Default for GameOptions {
    fn default() -> Self {
        GameOptions {
            enforce_adjacency: false,
            capture_supply_centers: true,
        }
    }
}

impl GameOptions {
    /// Parses options from a JSON object. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Sets a single option by name. Boolean values accept `true`/`false`;
    /// an absent value means `true`.
    pub fn set(&mut self, name: &str, value: Option<&str>) -> Result<(), GameError> {
        let flag = match value.map(str::trim) {
            None | Some("true") => true,
            Some("false") => false,
            Some(_) => return Err(GameError::InvalidOption(name.to_string())),
        };
        match name {
            "EnforceAdjacency" => self.enforce_adjacency = flag,
            "CaptureSupplyCenters" => self.capture_supply_centers = flag,
            _ => return Err(GameError::InvalidOption(name.to_string())),
        }
        Ok(())
    }
}

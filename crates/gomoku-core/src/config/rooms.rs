//! Room manager configuration.

use serde::{Deserialize, Serialize};

/// Tunables for room creation and joining.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomsConfig {
    /// How many random invite codes to try before giving up on a create.
    #[serde(default = "default_code_attempts")]
    pub code_attempts: u32,
    /// Maximum display-name length in characters.
    #[serde(default = "default_max_player_name_len")]
    pub max_player_name_len: usize,
}

impl Default for RoomsConfig {
    fn default() -> Self {
        Self {
            code_attempts: default_code_attempts(),
            max_player_name_len: default_max_player_name_len(),
        }
    }
}

fn default_code_attempts() -> u32 {
    10
}

fn default_max_player_name_len() -> usize {
    20
}

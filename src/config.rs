//! Engine configuration and introspection types.
//!
//! `GameConfig` is the serializable description of a game's parameters: a
//! small serde struct plus a validating constructor. No file or network
//! I/O is implemented here, or anywhere in this crate: this type only
//! lets an external driver build or inspect game parameters as data.

use serde::{Deserialize, Serialize};

use crate::error::GammaError;

/// The four parameters `Game::new` accepts, bundled for (de)serialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub width: u32,
    pub height: u32,
    pub players_num: u32,
    pub max_areas: u32,
}

impl GameConfig {
    pub fn new(width: u32, height: u32, players_num: u32, max_areas: u32) -> Self {
        Self {
            width,
            height,
            players_num,
            max_areas,
        }
    }

    /// Checks that all four fields are at least 1. Does not check for
    /// allocation feasibility; that is the board store's job
    /// (`GammaError::DimensionsTooLarge`).
    pub fn validate(&self) -> Result<(), GammaError> {
        if self.width < 1 {
            return Err(GammaError::InvalidArgument {
                message: "width must be at least 1".to_string(),
            });
        }
        if self.height < 1 {
            return Err(GammaError::InvalidArgument {
                message: "height must be at least 1".to_string(),
            });
        }
        if self.players_num < 1 {
            return Err(GammaError::InvalidArgument {
                message: "players_num must be at least 1".to_string(),
            });
        }
        if self.max_areas < 1 {
            return Err(GammaError::InvalidArgument {
                message: "max_areas must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

/// A read-only snapshot of the board's owner grid, 0 meaning empty.
///
/// Rows are ordered low-y first (`snapshot[0]` is the bottom row), unlike
/// `board_string()`'s high-y-first text rendering, since this is meant for
/// programmatic consumption rather than terminal display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardSnapshot {
    pub width: u32,
    pub height: u32,
    pub rows: Vec<Vec<u32>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_config_passes() {
        let cfg = GameConfig::new(4, 2, 2, 3);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn zero_width_rejected() {
        let cfg = GameConfig::new(0, 2, 2, 3);
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn zero_max_areas_rejected() {
        let cfg = GameConfig::new(4, 2, 2, 0);
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn config_round_trips_through_json() {
        let cfg = GameConfig::new(10, 10, 12, 5);
        let json = serde_json::to_string(&cfg).unwrap();
        let back: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(cfg, back);
    }
}

//! Player identity and per-player statistics.

use serde::Serialize;
use std::fmt;

/// A player identifier, `1..=players_num`. There is no player 0: an empty
/// cell is `Option<PlayerId>::None`, not `PlayerId(0)`.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct PlayerId(u32);

impl PlayerId {
    /// Constructs a player id. Panics if `id == 0`; callers at the public
    /// API boundary validate `1 <= player <= players_num` themselves and
    /// never construct a `PlayerId` from an out-of-range value.
    pub(crate) fn new(id: u32) -> Self {
        debug_assert!(id >= 1, "PlayerId must be >= 1");
        PlayerId(id)
    }

    pub fn id(&self) -> u32 {
        self.0
    }

    /// The zero-based index into the player table.
    pub(crate) fn index(&self) -> usize {
        (self.0 - 1) as usize
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The per-player record the engine maintains incrementally.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct PlayerStats {
    pub occupied_fields: u64,
    pub areas: u32,
    pub border_empty_fields: u64,
    pub golden_move_done: bool,
}

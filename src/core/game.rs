//! The engine façade: move engine, golden-move engine, and query layer.

use tracing::{debug, warn};

use crate::config::{BoardSnapshot, GameConfig};
use crate::core::board::Board;
use crate::core::player::{PlayerId, PlayerStats};
use crate::error::GammaError;

/// The mutable state of one game of Gamma.
///
/// Owns the board and the per-player table; ordinary `Drop` releases both
/// when a `Game` goes out of scope, and constructor failure never leaves
/// a partially built `Game` behind (see `Game::new`).
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    max_areas: u32,
    occupied_fields: u64,
    players: Vec<PlayerStats>,
}

impl Game {
    /// Allocates a new game. Fails if any of `width, height, players_num,
    /// max_areas` is zero, or if the board cannot be allocated.
    pub fn new(width: u32, height: u32, players_num: u32, max_areas: u32) -> Result<Self, GammaError> {
        Self::from_config(GameConfig::new(width, height, players_num, max_areas))
    }

    pub fn from_config(config: GameConfig) -> Result<Self, GammaError> {
        config.validate()?;
        let board = Board::new(config.width, config.height)?;
        Ok(Game {
            board,
            max_areas: config.max_areas,
            occupied_fields: 0,
            players: vec![PlayerStats::default(); config.players_num as usize],
        })
    }

    pub fn board_width(&self) -> u32 {
        self.board.width
    }

    pub fn board_height(&self) -> u32 {
        self.board.height
    }

    pub fn players_number(&self) -> u32 {
        self.players.len() as u32
    }

    fn player_id(&self, player: u32) -> Option<PlayerId> {
        if player < 1 || player > self.players.len() as u32 {
            return None;
        }
        Some(PlayerId::new(player))
    }

    fn stats(&self, p: PlayerId) -> &PlayerStats {
        &self.players[p.index()]
    }

    fn stats_mut(&mut self, p: PlayerId) -> &mut PlayerStats {
        &mut self.players[p.index()]
    }

    /// `players[p].areas == max_areas` and no neighbor of `(x, y)` is
    /// already owned by `p` — placing there would start a brand new area
    /// and push `p` over the limit.
    fn would_exceed_areas_limit(&self, p: PlayerId, x: u32, y: u32) -> bool {
        let stats = self.stats(p);
        if stats.areas < self.max_areas {
            return false;
        }
        !self
            .board
            .neighbor_indices(x, y)
            .any(|n| self.owner_at_index(n) == Some(p))
    }

    fn owner_at_index(&self, idx: u64) -> Option<PlayerId> {
        let (x, y) = self.board.coords_of(idx);
        self.board.owner_at(x, y)
    }

    /// The number of empty neighbors of `(x, y)` that currently have *no*
    /// neighbor owned by `player` — the cells that would become (or cease
    /// to be) a border-empty cell of `player` as a side effect of a change
    /// at `(x, y)`, depending on when the caller invokes this relative to
    /// the mutation.
    fn new_border_empty_count(&self, x: u32, y: u32, player: PlayerId) -> u64 {
        self.board
            .neighbor_indices(x, y)
            .filter(|&n| {
                let (nx, ny) = self.board.coords_of(n);
                self.board.owner_at(nx, ny).is_none()
                    && !self
                        .board
                        .neighbor_indices(nx, ny)
                        .any(|m| self.owner_at_index(m) == Some(player))
            })
            .count() as u64
    }

    fn in_bounds_u32(&self, x: i64, y: i64) -> Option<(u32, u32)> {
        if self.board.is_within_board(x, y) {
            Some((x as u32, y as u32))
        } else {
            None
        }
    }

    /// Places `player`'s piece at `(x, y)`. Returns `true` iff the move was
    /// legal and applied; on any rejection, state is left bitwise
    /// unchanged.
    pub fn make_move(&mut self, player: u32, x: i64, y: i64) -> bool {
        let Some(p) = self.player_id(player) else {
            return false;
        };
        let Some((x, y)) = self.in_bounds_u32(x, y) else {
            return false;
        };
        if self.board.owner_at(x, y).is_some() {
            return false;
        }
        if self.would_exceed_areas_limit(p, x, y) {
            return false;
        }

        let delta = self.new_border_empty_count(x, y, p);
        let cell_idx = self.board.cell_index(x, y);

        self.board.set_owner(x, y, p);
        self.occupied_fields += 1;
        self.stats_mut(p).occupied_fields += 1;
        self.stats_mut(p).areas += 1;

        let neighbors: Vec<u64> = self.board.neighbor_indices(x, y).collect();
        let mut merges = 0u32;
        let mut touched_owners: Vec<PlayerId> = Vec::new();
        for n in &neighbors {
            if let Some(owner) = self.owner_at_index(*n) {
                if owner == p && self.board.union_cells(cell_idx, *n) {
                    merges += 1;
                }
                if !touched_owners.contains(&owner) {
                    touched_owners.push(owner);
                }
            }
        }
        self.stats_mut(p).areas -= merges;
        self.stats_mut(p).border_empty_fields += delta;

        for owner in touched_owners {
            self.stats_mut(owner).border_empty_fields -= 1;
        }

        debug!(player, x, y, merges, "applied move");
        true
    }

    /// Replaces the owner of an already-occupied cell with `player`,
    /// rejecting the move (and leaving all state unchanged) unless every
    /// player's area count stays within `max_areas` after a full
    /// recomputation.
    pub fn golden_move(&mut self, player: u32, x: i64, y: i64) -> bool {
        let Some(p) = self.player_id(player) else {
            return false;
        };
        let Some((x, y)) = self.in_bounds_u32(x, y) else {
            return false;
        };
        let Some(previous) = self.board.owner_at(x, y) else {
            return false;
        };
        if previous == p {
            return false;
        }
        if self.stats(p).golden_move_done {
            return false;
        }
        if self.would_exceed_areas_limit(p, x, y) {
            return false;
        }

        let delta_gain = self.new_border_empty_count(x, y, p);

        self.board.set_owner(x, y, p);
        self.reindex();

        if self.players.iter().any(|s| s.areas > self.max_areas) {
            warn!(player, x, y, "golden move violates area limit, reverting");
            self.board.set_owner(x, y, previous);
            self.reindex();
            return false;
        }

        self.stats_mut(p).occupied_fields += 1;
        self.stats_mut(p).border_empty_fields += delta_gain;
        self.stats_mut(p).golden_move_done = true;

        let delta_lose = self.new_border_empty_count(x, y, previous);
        self.stats_mut(previous).occupied_fields -= 1;
        self.stats_mut(previous).border_empty_fields -= delta_lose;

        debug!(player, x, y, previous = previous.id(), "applied golden move");
        true
    }

    /// Rebuilds every player's area count and the disjoint-set forest from
    /// scratch: the only O(width * height) operation in the engine,
    /// confined to the golden move.
    fn reindex(&mut self) {
        for stats in &mut self.players {
            stats.areas = 0;
        }
        self.board.reset_disjoint_sets();

        let total = self.board.total_cells();
        for idx in 0..total {
            if let Some(owner) = self.owner_at_index(idx) {
                self.stats_mut(owner).areas += 1;
            }
        }

        for idx in 0..total {
            let Some(owner) = self.owner_at_index(idx) else {
                continue;
            };
            let (x, y) = self.board.coords_of(idx);
            let neighbors: Vec<u64> = self.board.neighbor_indices(x, y).collect();
            for n in neighbors {
                if self.owner_at_index(n) == Some(owner) && self.board.union_cells(idx, n) {
                    self.stats_mut(owner).areas -= 1;
                }
            }
        }
    }

    /// `players[p].occupied_fields`, or 0 for an invalid player id.
    pub fn busy_fields(&self, player: u32) -> u64 {
        match self.player_id(player) {
            Some(p) => self.stats(p).occupied_fields,
            None => 0,
        }
    }

    /// The number of cells `player` could legally place on right now: the
    /// total empty-cell count while below the area cap, or just the
    /// border-empty count once at the cap. The below-cap count is the raw
    /// empty-cell total, unfiltered by any other reason a particular cell
    /// might be unplaceable.
    pub fn free_fields(&self, player: u32) -> u64 {
        let Some(p) = self.player_id(player) else {
            return 0;
        };
        let stats = self.stats(p);
        if stats.areas < self.max_areas {
            self.board.total_cells() - self.occupied_fields
        } else {
            stats.border_empty_fields
        }
    }

    /// `true` iff `player` has not yet used their golden move and at least
    /// one other player currently owns a cell. This is necessary but not
    /// sufficient for a concrete `golden_move` call to succeed: it does
    /// not check that any legal target exists.
    pub fn golden_possible(&self, player: u32) -> bool {
        let Some(p) = self.player_id(player) else {
            return false;
        };
        if self.stats(p).golden_move_done {
            return false;
        }
        self.players
            .iter()
            .enumerate()
            .any(|(idx, stats)| idx != p.index() && stats.occupied_fields > 0)
    }

    /// A copy of `player`'s full stat record, or `None` for an invalid
    /// player id. Supplements `busy_fields`/`free_fields`/
    /// `golden_possible`, which each expose one derived field of this
    /// record, with the whole thing for introspection and testing.
    pub fn player_stats(&self, player: u32) -> Option<PlayerStats> {
        self.player_id(player).map(|p| *self.stats(p))
    }

    /// A read-only snapshot of the owner grid, low-y-first (see
    /// `config::BoardSnapshot`).
    pub fn snapshot(&self) -> BoardSnapshot {
        let mut rows = Vec::with_capacity(self.board.height as usize);
        for y in 0..self.board.height {
            let mut row = Vec::with_capacity(self.board.width as usize);
            for x in 0..self.board.width {
                row.push(self.board.owner_at(x, y).map_or(0, |p| p.id()));
            }
            rows.push(row);
        }
        BoardSnapshot {
            width: self.board.width,
            height: self.board.height,
            rows,
        }
    }

    pub(crate) fn board(&self) -> &Board {
        &self.board
    }
}

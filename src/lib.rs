//! Engine for Gamma, a multi-player territorial board game played on a
//! rectangular grid of square cells.
//!
//! The public surface is [`core::game::Game`]: a constructor, an ordinary
//! [`core::game::Game::make_move`], a once-per-player
//! [`core::game::Game::golden_move`], the query layer
//! ([`core::game::Game::busy_fields`], [`core::game::Game::free_fields`],
//! [`core::game::Game::golden_possible`]), and text rendering
//! ([`core::game::Game::board_string`], [`core::game::Game::render_cell`]).
//!
//! This crate implements only the engine: the tokenised text-command
//! reader, the batch and interactive drivers, and the top-level mode
//! selector are external collaborators that drive a [`Game`] through this
//! surface and are out of scope here.

pub mod config;
pub mod core;
pub mod error;

pub use config::{BoardSnapshot, GameConfig};
pub use core::board::Cell;
pub use core::game::Game;
pub use core::player::{PlayerId, PlayerStats};
pub use error::GammaError;

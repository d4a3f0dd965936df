//! Error types for the Gamma engine.
//!
//! Most engine operations never return an error: spec-mandated invalid
//! arguments and illegal moves are reported as `false`/`0` (see
//! [`crate::core::game::Game`]). `GammaError` exists for the handful of
//! operations that can genuinely fail to construct something: the game
//! constructor and the renderer.

use thiserror::Error;

/// Errors the engine can report from its constructor and renderer.
#[derive(Debug, Error)]
pub enum GammaError {
    /// An operation was called with arguments violating its validity
    /// predicate, for an API that reports failure as a typed error rather
    /// than a sentinel return value (only `Game::new`).
    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },

    /// `width as u64 * height as u64` does not fit the range the board
    /// store can represent, or would not fit in a `usize` on this target.
    #[error("board dimensions {width}x{height} are too large to allocate")]
    DimensionsTooLarge { width: u32, height: u32 },

    /// Allocation failed while building the board or player table, or
    /// while rendering the board to a string.
    ///
    /// Unreachable through ordinary `Vec`/`String` growth on a production
    /// allocator (which aborts the process instead of returning), but kept
    /// so a caller wiring in a fallible allocator gets a typed error
    /// instead of an abort; see DESIGN.md's Open Question decisions.
    #[error("out of memory")]
    OutOfMemory,
}

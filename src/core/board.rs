//! Dense board store: a `width x height` grid of cells plus the disjoint-set
//! bookkeeping arrays the move/golden-move engines drive.
//!
//! The board only ever has one shape, a square grid with 4-connectivity,
//! so there is no topology abstraction here — just a fixed neighbor-offset
//! list every neighbor-iterating operation shares.

use crate::core::player::PlayerId;
use crate::error::GammaError;

/// The four neighbor offsets, in a fixed canonical order. Every
/// neighbor-iterating operation in this crate uses this list, so
/// traversal order is deterministic.
pub const NEIGHBOR_OFFSETS: [(i64, i64); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Flat cell index. Widened to `u64` rather than `u32`: `width` and
/// `height` are each allowed up to `2^32 - 1`, so `width * height` can
/// exceed `u32::MAX` even though no such board could actually be
/// allocated in practice.
pub type CellIndex = u64;

/// One square of the grid.
///
/// `owner` is `None` for an empty cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub owner: Option<PlayerId>,
}

impl Cell {
    const fn empty() -> Self {
        Cell { owner: None }
    }

    pub fn is_empty(&self) -> bool {
        self.owner.is_none()
    }
}

/// The board store: a dense grid of cells plus the disjoint-set arrays
/// used by the move and golden-move engines.
///
/// `parent`/`rank` are the cells' disjoint-set metadata, one entry per
/// cell index: a cell's union-find parent is a back-reference to another
/// cell's index, not a pointer, so there is no lifetime to manage — cells
/// are pinned for the board's lifetime inside one `Vec`.
#[derive(Debug, Clone)]
pub struct Board {
    pub width: u32,
    pub height: u32,
    cells: Vec<Cell>,
    pub(crate) parents: Vec<CellIndex>,
    pub(crate) ranks: Vec<u8>,
}

impl Board {
    /// Allocates a `width x height` board of empty cells. Allocation is
    /// atomic: there is no partially-initialized board to free on failure
    /// because `Vec::with_capacity`/`resize` either succeeds fully or the
    /// process aborts (see `GammaError::OutOfMemory`'s documentation).
    pub fn new(width: u32, height: u32) -> Result<Self, GammaError> {
        let total = (width as u64)
            .checked_mul(height as u64)
            .ok_or(GammaError::DimensionsTooLarge { width, height })?;
        // No allocation can exceed isize::MAX bytes regardless of element
        // size, so this bound is conservative for any non-zero-sized cell
        // and keeps a pathological width*height from attempting a doomed
        // allocation (which would panic rather than return an error).
        if total > isize::MAX as u64 {
            return Err(GammaError::DimensionsTooLarge { width, height });
        }
        let total_usize: usize = total
            .try_into()
            .map_err(|_| GammaError::DimensionsTooLarge { width, height })?;

        let cells = vec![Cell::empty(); total_usize];
        let parents: Vec<CellIndex> = (0..total).collect();
        let ranks = vec![1u8; total_usize];

        Ok(Board {
            width,
            height,
            cells,
            parents,
            ranks,
        })
    }

    pub fn total_cells(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// `0 <= x < width && 0 <= y < height`, over signed coordinates so
    /// callers may pass `x - 1`/`y - 1` at the boundary without wrapping.
    pub fn is_within_board(&self, x: i64, y: i64) -> bool {
        x >= 0 && x < self.width as i64 && y >= 0 && y < self.height as i64
    }

    fn index(&self, x: u32, y: u32) -> CellIndex {
        y as u64 * self.width as u64 + x as u64
    }

    pub fn coords_of(&self, index: CellIndex) -> (u32, u32) {
        ((index % self.width as u64) as u32, (index / self.width as u64) as u32)
    }

    /// Returns the cell at `(x, y)`, or `None` if out of bounds.
    pub fn get_field(&self, x: i64, y: i64) -> Option<&Cell> {
        if !self.is_within_board(x, y) {
            return None;
        }
        let idx = self.index(x as u32, y as u32);
        self.cells.get(idx as usize)
    }

    pub fn owner_at(&self, x: u32, y: u32) -> Option<PlayerId> {
        self.cells[self.index(x, y) as usize].owner
    }

    pub(crate) fn set_owner(&mut self, x: u32, y: u32, owner: PlayerId) {
        let idx = self.index(x, y) as usize;
        self.cells[idx].owner = Some(owner);
    }

    /// In-bounds neighbor cell indices of `(x, y)`, in `NEIGHBOR_OFFSETS`
    /// order.
    pub fn neighbor_indices(&self, x: u32, y: u32) -> impl Iterator<Item = CellIndex> + '_ {
        NEIGHBOR_OFFSETS.iter().filter_map(move |&(dx, dy)| {
            let nx = x as i64 + dx;
            let ny = y as i64 + dy;
            if self.is_within_board(nx, ny) {
                Some(self.index(nx as u32, ny as u32))
            } else {
                None
            }
        })
    }

    pub fn cell_index(&self, x: u32, y: u32) -> CellIndex {
        self.index(x, y)
    }

    /// Resets every cell's disjoint-set metadata to a fresh singleton
    /// (self-parent, rank 1). Used only by the golden move's full reindex,
    /// the one O(W*H) operation in the system.
    pub(crate) fn reset_disjoint_sets(&mut self) {
        for (i, parent) in self.parents.iter_mut().enumerate() {
            *parent = i as CellIndex;
        }
        self.ranks.fill(1);
    }

    pub fn find_root(&mut self, cell: CellIndex) -> CellIndex {
        crate::core::disjoint_set::find(&mut self.parents, cell)
    }

    pub fn union_cells(&mut self, a: CellIndex, b: CellIndex) -> bool {
        crate::core::disjoint_set::union(&mut self.parents, &mut self.ranks, a, b)
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

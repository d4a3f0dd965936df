//! Disjoint-set forest over board cells.
//!
//! A cell's union-find state lives directly in the board's `parent`/`rank`
//! arrays (one entry per cell, flat-indexed); these free functions operate
//! on those arrays rather than on a separate `Vec<DisjointSet>` per set, so
//! a singleton cell costs nothing beyond its own array slot.
//!
//! Iterative path halving keeps trees shallow without recursion, and
//! union by rank keeps them shallow as they grow, so `find` stays close
//! to constant time even on a board with hundreds of thousands of cells.

use crate::core::board::CellIndex;

/// Finds the representative of `cell`'s set, applying path halving: every
/// other node visited on the way to the root is re-parented to its
/// grandparent. Iterative; no recursion.
pub fn find(parents: &mut [CellIndex], cell: CellIndex) -> CellIndex {
    let mut node = cell;
    while parents[node as usize] != node {
        let grandparent = parents[parents[node as usize] as usize];
        parents[node as usize] = grandparent;
        node = parents[node as usize];
    }
    node
}

/// Merges the sets containing `a` and `b` using union by rank, attaching
/// the second argument's root under the first's on a tie and incrementing
/// the first root's rank. Returns `true` if a merge occurred, `false` if
/// `a` and `b` were already in the same set.
pub fn union(parents: &mut [CellIndex], ranks: &mut [u8], a: CellIndex, b: CellIndex) -> bool {
    let root_a = find(parents, a);
    let root_b = find(parents, b);
    if root_a == root_b {
        return false;
    }

    let (root_a, root_b) = if ranks[root_a as usize] < ranks[root_b as usize] {
        (root_b, root_a)
    } else {
        (root_a, root_b)
    };

    parents[root_b as usize] = root_a;
    if ranks[root_a as usize] == ranks[root_b as usize] {
        ranks[root_a as usize] += 1;
    }
    true
}

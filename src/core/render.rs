//! Deterministic text rendering of the board and of single cells.
//!
//! Builds the string with `std::fmt::Write`, iterating rows high-to-low
//! and delegating each cell to a small per-cell formatting helper that
//! also reports the cell's owner.

use std::fmt::Write as _;

use crate::core::game::Game;

fn decimal_width(n: u32) -> usize {
    n.to_string().len()
}

impl Game {
    fn max_owner_id(&self) -> Option<u32> {
        self.board()
            .cells()
            .iter()
            .filter_map(|c| c.owner)
            .map(|p| p.id())
            .max()
    }

    fn max_owner_id_in_column(&self, x: u32) -> Option<u32> {
        (0..self.board_height())
            .filter_map(|y| self.board().owner_at(x, y))
            .map(|p| p.id())
            .max()
    }

    /// The field width `render_cell`/`board_string` use for column `x`:
    /// uniform width 1 if the widest on-board player id is a single
    /// digit; otherwise every column but 0 is `w_id + 1`, and column 0
    /// uses the width of the widest id appearing in column 0 (or 1 if
    /// none).
    fn column_width(&self, x: u32, w_id_digits: usize) -> usize {
        if w_id_digits == 1 {
            return 1;
        }
        if x == 0 {
            self.max_owner_id_in_column(0).map(decimal_width).unwrap_or(1)
        } else {
            w_id_digits + 1
        }
    }

    /// Renders one cell into a `field_width`-wide, right-aligned field,
    /// returning the rendered text, its length in characters, and the
    /// cell's owner id (0 if empty) — so a caller (e.g. an interactive
    /// driver) can colour per cell without re-deriving ownership from the
    /// text.
    ///
    /// Out-of-range `(x, y)` never panics: it renders as an empty cell,
    /// the same as a valid but unoccupied one.
    pub fn render_cell(&self, x: u32, y: u32, field_width: usize) -> (String, usize, u32) {
        let in_bounds = x < self.board_width() && y < self.board_height();
        let owner_id = if in_bounds {
            self.board().owner_at(x, y).map_or(0, |p| p.id())
        } else {
            0
        };
        let content = if owner_id == 0 {
            ".".to_string()
        } else {
            owner_id.to_string()
        };
        let width = field_width.max(content.len());
        let text = format!("{content:>width$}");
        let written = text.chars().count();
        (text, written, owner_id)
    }

    /// Renders the board as text: `height` lines, high-y first, each
    /// terminated by `\n`.
    pub fn board_string(&self) -> String {
        let w_id_digits = self.max_owner_id().map(decimal_width).unwrap_or(1);
        let widths: Vec<usize> = (0..self.board_width())
            .map(|x| self.column_width(x, w_id_digits))
            .collect();

        let mut out = String::new();
        for y in (0..self.board_height()).rev() {
            for x in 0..self.board_width() {
                let (text, _, _) = self.render_cell(x, y, widths[x as usize]);
                out.push_str(&text);
            }
            writeln!(out).expect("writing to a String never fails");
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_rendering_matches_placed_pieces() {
        let mut g = Game::new(4, 2, 2, 3).unwrap();
        g.make_move(1, 0, 0);
        g.make_move(2, 3, 1);
        g.make_move(1, 1, 0);
        assert_eq!(g.board_string(), "...2\n11..\n");
    }

    #[test]
    fn empty_board_is_all_dots() {
        let g = Game::new(3, 2, 2, 2).unwrap();
        assert_eq!(g.board_string(), "...\n...\n");
    }

    #[test]
    fn row_count_matches_height_and_every_row_ends_in_newline() {
        let mut g = Game::new(10, 10, 12, 5).unwrap();
        g.make_move(11, 0, 0);
        let s = g.board_string();
        let rows: Vec<&str> = s.lines().collect();
        assert_eq!(rows.len(), 10);
        assert!(s.ends_with('\n'));
        assert_eq!(s.matches('\n').count(), 10);
    }

    #[test]
    fn wide_ids_pad_columns_other_than_zero() {
        let mut g = Game::new(10, 10, 12, 5).unwrap();
        g.make_move(11, 0, 0);
        let s = g.board_string();
        let top_row = s.lines().next().unwrap();
        // Column 0 is 2 wide (max id in column 0 is "11"); every other
        // column is w_id_digits(2) + 1 = 3 wide.
        assert_eq!(&top_row[0..2], " .");
        assert_eq!(&top_row[2..5], "  .");

        // Row y=0 (last line, since rows are high-y first) holds the
        // piece: "11" padded to width 2, followed by nine empty "  ."
        // cells.
        let bottom_row = s.lines().last().unwrap();
        let expected: String = std::iter::once("11".to_string())
            .chain(std::iter::repeat_n("  .".to_string(), 9))
            .collect();
        assert_eq!(bottom_row, expected);
    }

    #[test]
    fn render_cell_reports_owner_and_padded_text() {
        let mut g = Game::new(4, 2, 2, 3).unwrap();
        g.make_move(2, 3, 1);
        let (text, written, owner) = g.render_cell(3, 1, 1);
        assert_eq!(text, "2");
        assert_eq!(written, 1);
        assert_eq!(owner, 2);

        let (text, _, owner) = g.render_cell(0, 0, 1);
        assert_eq!(text, ".");
        assert_eq!(owner, 0);
    }

    #[test]
    fn render_cell_out_of_bounds_is_empty_instead_of_panicking() {
        let g = Game::new(4, 2, 2, 3).unwrap();
        let (text, _, owner) = g.render_cell(4, 0, 1);
        assert_eq!(text, ".");
        assert_eq!(owner, 0);

        let (text, _, owner) = g.render_cell(0, 2, 1);
        assert_eq!(text, ".");
        assert_eq!(owner, 0);
    }

    #[test]
    fn single_digit_ids_render_uniform_width_one() {
        let mut g = Game::new(3, 1, 9, 3).unwrap();
        g.make_move(9, 2, 0);
        assert_eq!(g.board_string(), "..9\n");
    }
}

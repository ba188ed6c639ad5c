//! Plain-text views of the session for logs and tooling.

use super::*;
use crate::cell::PLAYER_SYMBOL;

impl Engine {
    /// One line per grid row, with the player drawn over its cell.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.grid.height * (self.grid.width + 1));
        for row in 0..self.grid.height {
            for col in 0..self.grid.width {
                let pos = Pos { row: row as i32, col: col as i32 };
                if pos == self.player.pos {
                    out.push(PLAYER_SYMBOL);
                } else if let Some(cell) = self.grid.cell_at(pos) {
                    out.push(cell.symbol());
                }
            }
            out.push('\n');
        }
        out
    }

    pub fn status_line(&self) -> String {
        format!("HP: {}, Gold: {}, Steps: {}", self.player.health, self.player.gold, self.steps)
    }
}

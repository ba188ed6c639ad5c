//! Stable snapshot hashing for deterministic verification.

use std::hash::Hasher;

use xxhash_rust::xxh3::Xxh3;

use super::*;

impl Engine {
    pub fn snapshot_hash(&self) -> u64 {
        let mut hasher = Xxh3::new();
        hasher.write_u64(self.rng.seed());
        hasher.write_u64(self.rng.draws());
        hasher.write_u8(self.level);
        hasher.write_i32(self.difficulty);
        hasher.write_u32(self.steps);
        hasher.write_u8(u8::from(self.won));
        hasher.write_u8(u8::from(self.exit_reached));

        hasher.write_i32(self.player.pos.row);
        hasher.write_i32(self.player.pos.col);
        hasher.write_i32(self.player.health);
        hasher.write_i32(self.player.gold);
        hasher.write_u32(self.player.steps);

        hasher.write_u64(self.grid.height as u64);
        hasher.write_u64(self.grid.width as u64);
        for cell in &self.grid.cells {
            write_cell(&mut hasher, *cell);
        }
        hasher.finish()
    }
}

fn write_cell(hasher: &mut Xxh3, cell: Cell) {
    match cell {
        Cell::Empty => hasher.write_u8(0),
        Cell::Wall => hasher.write_u8(1),
        Cell::Entry => hasher.write_u8(2),
        Cell::Exit => hasher.write_u8(3),
        Cell::Gold { value, collected } => {
            hasher.write_u8(4);
            hasher.write_i32(value);
            hasher.write_u8(u8::from(collected));
        }
        Cell::HealthPotion { collected } => {
            hasher.write_u8(5);
            hasher.write_u8(u8::from(collected));
        }
        Cell::Trap { triggered } => {
            hasher.write_u8(6);
            hasher.write_u8(u8::from(triggered));
        }
        Cell::MeleeMutant { defeated } => {
            hasher.write_u8(7);
            hasher.write_u8(u8::from(defeated));
        }
        Cell::RangedMutant { defeated } => {
            hasher.write_u8(8);
            hasher.write_u8(u8::from(defeated));
        }
        Cell::Ladder => hasher.write_u8(9),
    }
}

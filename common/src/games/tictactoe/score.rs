use serde::{Deserialize, Serialize};

use super::types::{Mark, Outcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Score {
    pub x: u32,
    pub o: u32,
    pub draws: u32,
}

impl Score {
    pub fn record(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Win(line) => match line.mark {
                Mark::X => self.x += 1,
                Mark::O => self.o += 1,
                Mark::Empty => {}
            },
            Outcome::Draw => self.draws += 1,
            Outcome::Ongoing => {}
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn rounds_played(&self) -> u32 {
        self.x + self.o + self.draws
    }
}

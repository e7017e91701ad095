use crate::clues::ClueScorer;
use crate::grid::{Grid, Line, Operators};
use crate::letters::{LetterGrid, Mapping};
use serde::{Deserialize, Serialize};

/// An accepted puzzle: the numeric grid, its operators, the cipher shown to
/// the solver and the letter-to-digit answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Puzzle {
    pub grid: Grid,
    #[serde(flatten)]
    pub ops: Operators,
    pub letter_grid: LetterGrid,
    pub mapping: Mapping,
}

impl Puzzle {
    /// The six numeric equations, rows first
    pub fn equations(&self) -> [Line; 6] {
        self.grid.lines(&self.ops)
    }

    /// Number of distinct letters in the cipher
    pub fn letter_count(&self) -> usize {
        self.mapping.len()
    }

    /// Clue labels for diagnostics
    pub fn clue_labels(&self, allow_zero: bool) -> Vec<String> {
        ClueScorer::new(allow_zero).labels(&self.grid, &self.ops)
    }
}

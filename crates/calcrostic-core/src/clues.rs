//! Heuristic "foothold" detection.
//!
//! A clue is an arithmetic pattern a solver can spot without knowing any
//! digits yet. Clues only rate puzzle quality; they never affect correctness.

use crate::arith::Op;
use crate::grid::{Grid, Line, Operators};
use serde::{Deserialize, Serialize};

/// Recognized foothold patterns, in detection priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ClueKind {
    /// Two single-digit addends summing to 10 or more
    AdditionCarry,
    /// Multiplying by zero gives zero
    ZeroAnnihilator,
    /// `a - a = 0`
    SelfSubtraction,
    /// `a / 1 = a`
    DivideByOne,
    /// `a / a = 1`
    SelfDivision,
    /// Exact division other than the two identities above
    Divisibility,
    /// Product below ten
    SingleDigitProduct,
    /// `a x a` in {0, 1, 4, 9}
    SmallSquare,
}

impl ClueKind {
    /// Human-readable description used in diagnostics
    pub fn label(&self) -> &'static str {
        match self {
            ClueKind::AdditionCarry => "carry in addition (tens=1)",
            ClueKind::ZeroAnnihilator => "annihilator (x0->0)",
            ClueKind::SelfSubtraction => "a-a=0",
            ClueKind::DivideByOne => "/1 identity",
            ClueKind::SelfDivision => "a/a=1",
            ClueKind::Divisibility => "divisibility",
            ClueKind::SingleDigitProduct => "single-digit product",
            ClueKind::SmallSquare => "small square",
        }
    }
}

impl std::fmt::Display for ClueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Counts lines that offer at least one foothold
#[derive(Debug, Clone, Copy)]
pub struct ClueScorer {
    allow_zero: bool,
}

impl ClueScorer {
    pub fn new(allow_zero: bool) -> Self {
        Self { allow_zero }
    }

    /// First matching clue on a line, checked in priority order.
    pub fn detect(&self, line: &Line) -> Option<ClueKind> {
        let Line { a, op, b, c, .. } = *line;
        match op {
            Op::Add if a < 10 && b < 10 && a + b >= 10 => Some(ClueKind::AdditionCarry),
            Op::Mul if self.allow_zero && (a == 0 || b == 0) && c == 0 => {
                Some(ClueKind::ZeroAnnihilator)
            }
            Op::Sub if self.allow_zero && a == b && c == 0 => Some(ClueKind::SelfSubtraction),
            Op::Div if b == 1 && c == a => Some(ClueKind::DivideByOne),
            Op::Div if a == b && b != 0 && c == 1 => Some(ClueKind::SelfDivision),
            Op::Div if b > 1 && a != b && a % b == 0 => Some(ClueKind::Divisibility),
            Op::Mul if c <= 9 => Some(ClueKind::SingleDigitProduct),
            Op::Mul if a == b && matches!(c, 0 | 1 | 4 | 9) => Some(ClueKind::SmallSquare),
            _ => None,
        }
    }

    /// Number of lines with at least one clue (at most one counted per line)
    pub fn score_lines(&self, lines: &[Line]) -> usize {
        lines.iter().filter(|line| self.detect(line).is_some()).count()
    }

    pub fn score(&self, grid: &Grid, ops: &Operators) -> usize {
        self.score_lines(&grid.lines(ops))
    }

    /// Labels such as `"Row1: carry in addition (tens=1)"`, one per clued line
    pub fn labels(&self, grid: &Grid, ops: &Operators) -> Vec<String> {
        grid.lines(ops)
            .iter()
            .filter_map(|line| self.detect(line).map(|kind| format!("{}: {}", line.id, kind)))
            .collect()
    }
}

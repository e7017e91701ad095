//! Exact solver for letter puzzles.
//!
//! Backtracks over letter-to-digit assignments in first-appearance order.
//! After each tentative digit, every equation that just became fully
//! assigned is checked, so dead branches are cut as early as possible.

use crate::arith::{evaluate_bounded, Bounds, Op};
use crate::grid::{LineId, Operators};
use crate::letters::{LetterGrid, Mapping};
use std::collections::BTreeMap;
use std::ops::ControlFlow;

/// Most letters a puzzle can use (one per decimal digit)
pub const MAX_LETTERS: usize = 10;

/// Digits bound so far, indexed by letter position
type Assignment = [u8; MAX_LETTERS];

/// Bit set of digits still free to use
#[derive(Debug, Clone, Copy)]
struct DigitSet(u16);

impl DigitSet {
    fn from_bounds(bounds: Bounds) -> Self {
        Self(bounds.digit_pool().fold(0, |bits, d| bits | (1 << d)))
    }

    fn without(self, digit: u8) -> Self {
        Self(self.0 & !(1 << digit))
    }

    fn iter(self) -> impl Iterator<Item = u8> {
        (0..10u8).filter(move |d| self.0 & (1 << d) != 0)
    }
}

/// An equation over letter indices
#[derive(Debug, Clone)]
struct WordLine {
    a: Vec<usize>,
    op: Op,
    b: Vec<usize>,
    c: Vec<usize>,
    /// Number of bound letters after which every letter of this line is known
    ready_at: usize,
}

impl WordLine {
    fn word_value(word: &[usize], assign: &Assignment) -> u32 {
        word.iter().fold(0u32, |acc, &idx| {
            acc.saturating_mul(10).saturating_add(u32::from(assign[idx]))
        })
    }

    fn holds(&self, assign: &Assignment, bounds: Bounds) -> bool {
        let a = Self::word_value(&self.a, assign);
        let b = Self::word_value(&self.b, assign);
        let c = Self::word_value(&self.c, assign);
        evaluate_bounded(a, self.op, b, bounds) == Some(c)
    }
}

/// A letter grid compiled for search
struct Problem {
    letters: Vec<char>,
    lines: Vec<WordLine>,
    bounds: Bounds,
}

impl Problem {
    /// `None` when the grid cannot have a solution: too many letters, or an
    /// empty word in any cell.
    fn compile(grid: &LetterGrid, ops: &Operators, bounds: Bounds) -> Option<Self> {
        let letters = grid.letters();
        if letters.len() > MAX_LETTERS {
            return None;
        }
        if grid.rows().iter().flatten().any(|word| word.is_empty()) {
            return None;
        }
        let index = |word: &str| -> Vec<usize> {
            word.chars()
                .filter_map(|ch| letters.iter().position(|&l| l == ch))
                .collect()
        };

        let lines = LineId::ALL
            .iter()
            .map(|&id| {
                let [(ar, ac), (br, bc), (cr, cc)] = id.cells();
                let a = index(grid.get(ar, ac));
                let b = index(grid.get(br, bc));
                let c = index(grid.get(cr, cc));
                let ready_at = a.iter().chain(&b).chain(&c).max().map_or(0, |&m| m + 1);
                WordLine {
                    a,
                    op: id.op(ops),
                    b,
                    c,
                    ready_at,
                }
            })
            .collect();

        Some(Self {
            letters,
            lines,
            bounds,
        })
    }

    /// Check the lines completed by binding the letter at `depth - 1`
    fn consistent(&self, assign: &Assignment, depth: usize) -> bool {
        self.lines
            .iter()
            .filter(|line| line.ready_at == depth)
            .all(|line| line.holds(assign, self.bounds))
    }

    /// Visit every complete assignment; the visitor may stop the search.
    fn search<F>(&self, assign: Assignment, depth: usize, free: DigitSet, visit: &mut F) -> ControlFlow<()>
    where
        F: FnMut(&Assignment) -> ControlFlow<()>,
    {
        if depth == self.letters.len() {
            return visit(&assign);
        }
        for digit in free.iter() {
            let mut next = assign;
            next[depth] = digit;
            if self.consistent(&next, depth + 1) {
                self.search(next, depth + 1, free.without(digit), visit)?;
            }
        }
        ControlFlow::Continue(())
    }

    fn run<F>(&self, mut visit: F)
    where
        F: FnMut(&Assignment) -> ControlFlow<()>,
    {
        let _ = self.search(
            [0; MAX_LETTERS],
            0,
            DigitSet::from_bounds(self.bounds),
            &mut visit,
        );
    }

    fn mapping(&self, assign: &Assignment) -> Mapping {
        let entries: BTreeMap<char, u8> = self
            .letters
            .iter()
            .enumerate()
            .map(|(i, &letter)| (letter, assign[i]))
            .collect();
        Mapping::new(entries)
    }
}

/// Solver for letter puzzles under a fixed set of range rules.
///
/// Stateless apart from the bounds; all search state is per call.
#[derive(Debug, Clone, Copy, Default)]
pub struct Solver {
    bounds: Bounds,
}

impl Solver {
    /// Create a solver using the given range rules
    pub fn new(bounds: Bounds) -> Self {
        Self { bounds }
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Count injective letter-to-digit assignments satisfying all six lines,
    /// stopping once `limit` is reached.
    pub fn count_solutions(&self, grid: &LetterGrid, ops: &Operators, limit: usize) -> usize {
        if limit == 0 {
            return 0;
        }
        let Some(problem) = Problem::compile(grid, ops, self.bounds) else {
            return 0;
        };
        let mut count = 0;
        problem.run(|_| {
            count += 1;
            if count >= limit {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        });
        count
    }

    /// Check if the puzzle has exactly one solution
    pub fn has_unique_solution(&self, grid: &LetterGrid, ops: &Operators) -> bool {
        self.count_solutions(grid, ops, 2) == 1
    }

    /// First solution found, if any
    pub fn solve(&self, grid: &LetterGrid, ops: &Operators) -> Option<Mapping> {
        let problem = Problem::compile(grid, ops, self.bounds)?;
        let mut found = None;
        problem.run(|assign| {
            found = Some(problem.mapping(assign));
            ControlFlow::Break(())
        });
        found
    }
}

//! Calcrostic puzzle engine.
//!
//! Generates 3x3 arithmetic grids where every row and column reads
//! `A op B = C`, hides the digits behind a letter cipher, and certifies
//! that the letter puzzle has exactly one solution.
//!
//! ```no_run
//! use calcrostic_core::{generate, GeneratorConfig};
//!
//! let puzzle = generate(&GeneratorConfig::single_digit()).expect("puzzle");
//! println!("{}", puzzle.grid);
//! ```

mod arith;
mod clues;
mod error;
mod generator;
mod grid;
mod letters;
mod mirror;
mod puzzle;
mod rng;
mod sampler;
mod solver;

pub use arith::{evaluate, evaluate_bounded, is_valid_value, Bounds, Op};
pub use clues::{ClueKind, ClueScorer};
pub use error::{ConfigError, GenerateError};
pub use generator::{generate, Generator, GeneratorConfig, GridSolver};
pub use grid::{Grid, Line, LineId, Operators};
pub use letters::{map_letters, LetterGrid, Mapping};
pub use mirror::{are_mirrored, find_mirrored_pair, find_zero_identity, has_mirrored_lines};
pub use puzzle::Puzzle;
pub use rng::PuzzleRng;
pub use sampler::{sample_value, OpWeights, OperatorPicker};
pub use solver::{Solver, MAX_LETTERS};

use crate::arith::{evaluate, Bounds};
use crate::clues::ClueScorer;
use crate::error::{ConfigError, GenerateError};
use crate::grid::{Grid, Operators};
use crate::letters::map_letters;
use crate::mirror::{find_mirrored_pair, find_zero_identity};
use crate::puzzle::Puzzle;
use crate::rng::PuzzleRng;
use crate::sampler::{sample_value, OpWeights, OperatorPicker};
use crate::solver::Solver;
use log::{debug, trace, warn};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Configuration for puzzle generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Allow the value and digit 0
    pub allow_zero: bool,
    /// Allow values up to 99
    pub allow_two_digit: bool,
    /// Fewest distinct letters in the cipher
    pub letters_min: usize,
    /// Most distinct letters in the cipher
    pub letters_max: usize,
    /// Operator weights (uniform when absent)
    pub op_weights: Option<OpWeights>,
    /// Minimum number of clued lines; no gate when absent
    pub min_clue_score: Option<usize>,
    /// Reject lines like `X + 0 = X` and `X - 0 = X`
    pub reject_zero_identities: bool,
    /// Maximum attempts before giving up
    pub max_attempts: usize,
    /// Grid samples drawn per attempt
    pub max_trials: usize,
    /// Fixed seed for reproducible output
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            allow_zero: true,
            allow_two_digit: true,
            letters_min: 5,
            letters_max: 6,
            op_weights: None,
            min_clue_score: None,
            reject_zero_identities: false,
            max_attempts: 20_000,
            max_trials: 2_000,
            seed: None,
        }
    }
}

impl GeneratorConfig {
    /// Values 1..9 only, for younger solvers
    pub fn single_digit() -> Self {
        Self {
            allow_zero: false,
            allow_two_digit: false,
            letters_min: 4,
            letters_max: 6,
            ..Self::default()
        }
    }

    /// Values 0..99
    pub fn two_digit() -> Self {
        Self::default()
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.allow_zero, self.allow_two_digit)
    }

    /// Reject parameter combinations the search cannot honor
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.letters_min == 0 {
            return Err(ConfigError::NoLetters);
        }
        if self.letters_min > self.letters_max {
            return Err(ConfigError::LetterRangeInverted {
                min: self.letters_min,
                max: self.letters_max,
            });
        }
        let available = self.bounds().digit_pool_size();
        if self.letters_max > available {
            return Err(ConfigError::TooManyLetters {
                max: self.letters_max,
                available,
            });
        }
        if let Some(score) = self.min_clue_score {
            if score > 6 {
                return Err(ConfigError::ClueScoreTooHigh(score));
            }
        }
        if self.max_attempts == 0 {
            return Err(ConfigError::ZeroBudget("max_attempts"));
        }
        if self.max_trials == 0 {
            return Err(ConfigError::ZeroBudget("max_trials"));
        }
        Ok(())
    }
}

/// Samples grids whose rows and columns all evaluate exactly.
///
/// The top-left 2x2 block is drawn at random; the remaining cells follow
/// from the operators. The corner cell is derived once from the right
/// column and once from the bottom row, and the grid is kept only when both
/// agree.
#[derive(Debug, Clone)]
pub struct GridSolver {
    bounds: Bounds,
    picker: OperatorPicker,
    max_trials: usize,
}

impl GridSolver {
    pub fn new(bounds: Bounds, weights: Option<&OpWeights>, max_trials: usize) -> Self {
        Self {
            bounds,
            picker: OperatorPicker::new(weights),
            max_trials,
        }
    }

    /// Return a consistent grid, or `None` once the trial budget is spent
    pub fn solve<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<(Grid, Operators)> {
        (0..self.max_trials).find_map(|_| self.trial(rng))
    }

    fn trial<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<(Grid, Operators)> {
        let rows = self.picker.pick_three(rng);
        let cols = self.picker.pick_three(rng);

        let [a, b, d, e] = std::array::from_fn(|_| sample_value(rng, self.bounds));

        let c = evaluate(a, rows[0], b)?;
        let f = evaluate(d, rows[1], e)?;
        let g = evaluate(a, cols[0], d)?;
        let h = evaluate(b, cols[1], e)?;
        let corner = evaluate(c, cols[2], f)?;
        if evaluate(g, rows[2], h)? != corner {
            return None;
        }

        let grid = Grid::new([[a, b, c], [d, e, f], [g, h, corner]]);
        if !grid.values().all(|v| self.bounds.contains(v)) {
            return None;
        }
        Some((grid, Operators::new(rows, cols)))
    }
}

/// Calcrostic puzzle generator
pub struct Generator {
    config: GeneratorConfig,
    rng: PuzzleRng,
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator {
    /// Create a new generator with default configuration
    pub fn new() -> Self {
        Self::with_config(GeneratorConfig::default())
    }

    /// Create a generator with custom configuration.
    ///
    /// Uses `config.seed` when present, otherwise seeds from the OS.
    pub fn with_config(config: GeneratorConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => PuzzleRng::with_seed(seed),
            None => PuzzleRng::new(),
        };
        Self { config, rng }
    }

    /// Create a generator with a specific seed for reproducibility
    pub fn with_seed(seed: u64) -> Self {
        Self::with_config(GeneratorConfig {
            seed: Some(seed),
            ..GeneratorConfig::default()
        })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate a puzzle with a unique solution
    pub fn generate(&mut self) -> Result<Puzzle, GenerateError> {
        self.config.validate()?;

        let config = &self.config;
        let bounds = config.bounds();
        let grid_solver = GridSolver::new(bounds, config.op_weights.as_ref(), config.max_trials);
        let scorer = ClueScorer::new(config.allow_zero);
        let solver = Solver::new(bounds);
        let letter_range = config.letters_min..=config.letters_max;

        for attempt in 1..=config.max_attempts {
            let Some((grid, ops)) = grid_solver.solve(&mut self.rng) else {
                trace!("attempt {}: no consistent grid in {} trials", attempt, config.max_trials);
                continue;
            };

            let letters = grid.distinct_digit_count();
            if !letter_range.contains(&letters) {
                trace!("attempt {}: {} letters outside {:?}", attempt, letters, letter_range);
                continue;
            }

            let lines = grid.lines(&ops);
            if config.reject_zero_identities {
                if let Some(id) = find_zero_identity(&lines) {
                    trace!("attempt {}: {} is a zero identity", attempt, id);
                    continue;
                }
            }
            if let Some((first, second)) = find_mirrored_pair(&lines) {
                trace!("attempt {}: {} mirrors {}", attempt, first, second);
                continue;
            }

            let score = scorer.score_lines(&lines);
            if let Some(min) = config.min_clue_score {
                if score < min {
                    trace!("attempt {}: clue score {} below {}", attempt, score, min);
                    continue;
                }
            }

            let (letter_grid, mapping) = map_letters(&grid);
            let solutions = solver.count_solutions(&letter_grid, &ops, 2);
            if solutions != 1 {
                trace!("attempt {}: {} solutions", attempt, solutions);
                continue;
            }

            debug!(
                "accepted puzzle on attempt {} ({} letters, clue score {})",
                attempt, letters, score
            );
            return Ok(Puzzle {
                grid,
                ops,
                letter_grid,
                mapping,
            });
        }

        warn!("gave up after {} attempts", config.max_attempts);
        Err(GenerateError::Exhausted {
            attempts: config.max_attempts,
        })
    }
}

/// Generate one puzzle from a parameter bundle.
pub fn generate(config: &GeneratorConfig) -> Result<Puzzle, GenerateError> {
    Generator::with_config(config.clone()).generate()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arith::Op;
    use crate::mirror::has_mirrored_lines;

    fn assert_accepted(puzzle: &Puzzle, config: &GeneratorConfig) {
        let bounds = config.bounds();
        assert!(puzzle.equations().iter().all(|line| line.holds()));
        assert!(puzzle.grid.values().all(|v| bounds.contains(v)));
        let letters = puzzle.grid.distinct_digit_count();
        assert!(letters >= config.letters_min && letters <= config.letters_max);
        assert!(!has_mirrored_lines(&puzzle.equations()));
        assert_eq!(puzzle.mapping.decode(&puzzle.letter_grid), Some(puzzle.grid));
        assert_eq!(
            Solver::new(bounds).count_solutions(&puzzle.letter_grid, &puzzle.ops, 2),
            1
        );
    }

    #[test]
    fn test_generate_default() {
        let mut generator = Generator::with_seed(42);
        let puzzle = generator.generate().expect("default config yields a puzzle");
        assert_accepted(&puzzle, generator.config());
    }

    #[test]
    fn test_generate_single_digit() {
        let config = GeneratorConfig {
            seed: Some(7),
            ..GeneratorConfig::single_digit()
        };
        let puzzle = generate(&config).expect("single-digit config yields a puzzle");
        assert_accepted(&puzzle, &config);
        assert!(puzzle.grid.values().all(|v| (1..=9).contains(&v)));
    }

    #[test]
    fn test_same_seed_same_puzzle() {
        let a = Generator::with_seed(1234).generate().unwrap();
        let b = Generator::with_seed(1234).generate().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_clue_gate() {
        let config = GeneratorConfig {
            min_clue_score: Some(2),
            seed: Some(99),
            ..GeneratorConfig::default()
        };
        let puzzle = generate(&config).expect("clue-gated config yields a puzzle");
        assert_accepted(&puzzle, &config);
        assert!(ClueScorer::new(true).score(&puzzle.grid, &puzzle.ops) >= 2);
    }

    #[test]
    fn test_zero_identity_filter() {
        let config = GeneratorConfig {
            reject_zero_identities: true,
            seed: Some(5),
            ..GeneratorConfig::default()
        };
        let puzzle = generate(&config).expect("filtered config yields a puzzle");
        assert_eq!(find_zero_identity(&puzzle.equations()), None);
    }

    #[test]
    fn test_operator_weights_respected() {
        let config = GeneratorConfig {
            op_weights: Some(OpWeights::default().without(Op::Div)),
            seed: Some(17),
            ..GeneratorConfig::default()
        };
        let puzzle = generate(&config).expect("no-division config yields a puzzle");
        assert!(!puzzle.ops.rows.contains(&Op::Div));
        assert!(!puzzle.ops.cols.contains(&Op::Div));
    }

    #[test]
    fn test_grid_solver_consistency() {
        let mut rng = PuzzleRng::with_seed(3);
        let bounds = Bounds::new(true, true);
        let solver = GridSolver::new(bounds, None, 200_000);
        for _ in 0..20 {
            let (grid, ops) = solver.solve(&mut rng).expect("grid within budget");
            assert!(grid.lines(&ops).iter().all(|line| line.holds()));
            assert!(grid.values().all(|v| bounds.contains(v)));
        }
    }

    #[test]
    fn test_grid_solver_exhaustion() {
        let solver = GridSolver::new(Bounds::new(true, true), None, 0);
        let mut rng = PuzzleRng::with_seed(1);
        assert_eq!(solver.solve(&mut rng), None);
    }

    #[test]
    fn test_grid_solver_division_only() {
        let weights = OpWeights {
            add: 0,
            sub: 0,
            mul: 0,
            div: 1,
        };
        let bounds = Bounds::new(false, false);
        let solver = GridSolver::new(bounds, Some(&weights), 100_000);
        let mut rng = PuzzleRng::with_seed(21);
        let (grid, ops) = solver.solve(&mut rng).expect("division-only grids exist");
        assert_eq!(ops, Operators::uniform(Op::Div));
        assert!(grid.lines(&ops).iter().all(|line| line.holds()));
    }

    #[test]
    fn test_validate() {
        assert_eq!(GeneratorConfig::default().validate(), Ok(()));
        assert_eq!(GeneratorConfig::single_digit().validate(), Ok(()));

        let inverted = GeneratorConfig {
            letters_min: 7,
            letters_max: 5,
            ..GeneratorConfig::default()
        };
        assert_eq!(
            inverted.validate(),
            Err(ConfigError::LetterRangeInverted { min: 7, max: 5 })
        );

        let too_many = GeneratorConfig {
            letters_max: 10,
            ..GeneratorConfig::single_digit()
        };
        assert_eq!(
            too_many.validate(),
            Err(ConfigError::TooManyLetters {
                max: 10,
                available: 9
            })
        );

        let no_budget = GeneratorConfig {
            max_attempts: 0,
            ..GeneratorConfig::default()
        };
        assert_eq!(
            no_budget.validate(),
            Err(ConfigError::ZeroBudget("max_attempts"))
        );

        let gate = GeneratorConfig {
            min_clue_score: Some(7),
            ..GeneratorConfig::default()
        };
        assert_eq!(gate.validate(), Err(ConfigError::ClueScoreTooHigh(7)));
    }

    #[test]
    fn test_invalid_config_rejected_before_search() {
        let config = GeneratorConfig {
            letters_min: 0,
            ..GeneratorConfig::default()
        };
        assert_eq!(
            generate(&config),
            Err(GenerateError::InvalidConfig(ConfigError::NoLetters))
        );
    }

    #[test]
    fn test_exhaustion_is_reported() {
        // Ten distinct letters cannot appear in a single-digit grid of nine cells
        let config = GeneratorConfig {
            allow_zero: true,
            allow_two_digit: false,
            letters_min: 10,
            letters_max: 10,
            max_attempts: 50,
            max_trials: 50,
            seed: Some(8),
            ..GeneratorConfig::default()
        };
        assert_eq!(
            generate(&config),
            Err(GenerateError::Exhausted { attempts: 50 })
        );
    }
}

mod render;
mod settings;
mod theme;

use anyhow::{bail, Result};
use calcrostic_core::{GenerateError, Generator, GeneratorConfig, Op, Solver};
use clap::{ArgAction, Parser};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use std::io::{self, Write};
use std::path::PathBuf;
use theme::Theme;

/// Generate 3x3 arithmetic letter puzzles with exactly one solution
#[derive(Debug, Parser)]
#[command(name = "calcrostic", version, about)]
struct Cli {
    /// JSON config file (defaults to the per-user config when present)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Allow the value and digit 0
    #[arg(long, value_name = "BOOL")]
    allow_zero: Option<bool>,

    /// Allow values up to 99
    #[arg(long, value_name = "BOOL")]
    allow_two_digit: Option<bool>,

    /// Fewest distinct letters
    #[arg(long, value_name = "N")]
    letters_min: Option<usize>,

    /// Most distinct letters
    #[arg(long, value_name = "N")]
    letters_max: Option<usize>,

    /// Require at least this many clued lines
    #[arg(long, value_name = "N")]
    min_clue_score: Option<usize>,

    /// Attempts before giving up
    #[arg(long, value_name = "N")]
    max_attempts: Option<usize>,

    /// Seed for a reproducible puzzle
    #[arg(long)]
    seed: Option<u64>,

    /// Never use division
    #[arg(long)]
    no_division: bool,

    /// Reject lines like X + 0 = X
    #[arg(long)]
    reject_zero_identities: bool,

    /// Print the puzzle record as JSON
    #[arg(long)]
    json: bool,

    /// Print the numeric equations, clues, and solution count
    #[arg(long)]
    debug: bool,

    /// Re-solve the puzzle and check the certified solution against its mapping
    #[arg(long)]
    verify: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    /// Layer command-line overrides on top of a loaded config
    fn apply(&self, mut config: GeneratorConfig) -> GeneratorConfig {
        if let Some(v) = self.allow_zero {
            config.allow_zero = v;
        }
        if let Some(v) = self.allow_two_digit {
            config.allow_two_digit = v;
        }
        if let Some(v) = self.letters_min {
            config.letters_min = v;
        }
        if let Some(v) = self.letters_max {
            config.letters_max = v;
        }
        if let Some(v) = self.min_clue_score {
            config.min_clue_score = Some(v);
        }
        if let Some(v) = self.max_attempts {
            config.max_attempts = v;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if self.no_division {
            config.op_weights = Some(config.op_weights.unwrap_or_default().without(Op::Div));
        }
        if self.reject_zero_identities {
            config.reject_zero_identities = true;
        }
        config
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let _ = TermLogger::init(level, Config::default(), TerminalMode::Stderr, ColorChoice::Auto);
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = cli.apply(settings::load(cli.config.as_deref())?);
    config.validate()?;

    let mut generator = Generator::with_config(config.clone());
    let puzzle = match generator.generate() {
        Ok(puzzle) => puzzle,
        Err(GenerateError::Exhausted { attempts }) => bail!(
            "temporarily unable to satisfy constraints after {} attempts; try a wider letter range",
            attempts
        ),
        Err(e) => return Err(e.into()),
    };

    let solver = Solver::new(config.bounds());
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.json {
        let certified = cli
            .verify
            .then(|| solver.solve(&puzzle.letter_grid, &puzzle.ops));
        if certified.is_some_and(|found| found.as_ref() != Some(&puzzle.mapping)) {
            bail!("certified solution does not match the puzzle mapping");
        }
        serde_json::to_writer_pretty(&mut out, &puzzle)?;
        writeln!(out)?;
        return Ok(());
    }

    let theme = if cli.no_color { Theme::plain() } else { Theme::dark() };
    render::render_puzzle(&mut out, &puzzle, &theme)?;
    render::render_solution(&mut out, &puzzle, &theme)?;
    if cli.debug {
        render::render_debug(&mut out, &puzzle, &solver, &theme)?;
    }
    if cli.verify && !render::render_verification(&mut out, &puzzle, &solver, &theme)? {
        bail!("certified solution does not match the puzzle mapping");
    }

    Ok(())
}

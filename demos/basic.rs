//! Basic example of using the calcrostic engine

use calcrostic_core::{ClueScorer, Generator, GeneratorConfig, Solver};

fn main() {
    // Generate a puzzle
    println!("Generating a two-digit puzzle...\n");
    let mut generator = Generator::with_config(GeneratorConfig::two_digit());
    let puzzle = match generator.generate() {
        Ok(puzzle) => puzzle,
        Err(e) => {
            println!("No puzzle this time: {}", e);
            return;
        }
    };

    println!("Letter grid:");
    for row in puzzle.letter_grid.rows() {
        println!("  {:>3} {:>3} {:>3}", row[0], row[1], row[2]);
    }
    println!(
        "Row operators: {} {} {}",
        puzzle.ops.rows[0], puzzle.ops.rows[1], puzzle.ops.rows[2]
    );
    println!(
        "Column operators: {} {} {}\n",
        puzzle.ops.cols[0], puzzle.ops.cols[1], puzzle.ops.cols[2]
    );

    // Show the equations and clues
    for line in puzzle.equations() {
        println!("{}", line);
    }
    let scorer = ClueScorer::new(generator.config().allow_zero);
    println!("\nClue score: {}", scorer.score(&puzzle.grid, &puzzle.ops));
    for label in scorer.labels(&puzzle.grid, &puzzle.ops) {
        println!("  {}", label);
    }

    // Solve it
    let solver = Solver::new(generator.config().bounds());
    println!(
        "\nNumber of solutions (up to 2): {}",
        solver.count_solutions(&puzzle.letter_grid, &puzzle.ops, 2)
    );
    if let Some(mapping) = solver.solve(&puzzle.letter_grid, &puzzle.ops) {
        println!("Solution: {}", mapping);
    }

    // Single-digit puzzles for younger solvers
    println!("\n--- Single-digit puzzle ---\n");
    let mut generator = Generator::with_config(GeneratorConfig::single_digit());
    if let Ok(puzzle) = generator.generate() {
        println!("{}", puzzle.grid);
        println!("Mapping: {}", puzzle.mapping);
    }
}

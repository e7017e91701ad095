use crate::theme::Theme;
use calcrostic_core::{Op, Operators, Puzzle, Solver};
use crossterm::{
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
};
use std::io::{self, Write};

fn styled<W: Write>(out: &mut W, text: &str, color: Option<Color>) -> io::Result<()> {
    match color {
        Some(color) => queue!(out, SetForegroundColor(color), Print(text), ResetColor),
        None => queue!(out, Print(text)),
    }
}

fn header<W: Write>(out: &mut W, title: &str, theme: &Theme) -> io::Result<()> {
    writeln!(out)?;
    styled(out, &format!("--- {} ---", title), theme.header)?;
    writeln!(out)?;
    writeln!(out)
}

/// Width of each column: its widest letter word
pub fn column_widths(puzzle: &Puzzle) -> [usize; 3] {
    std::array::from_fn(|col| {
        (0..3)
            .map(|row| puzzle.letter_grid.get(row, col).chars().count())
            .max()
            .unwrap_or(1)
    })
}

/// Print a 3x3 block of words with the row operators between cells and the
/// column operators between rows, each column centered to `widths`.
fn render_block<W: Write>(
    out: &mut W,
    cells: &[[String; 3]; 3],
    ops: &Operators,
    widths: [usize; 3],
    cell_color: Option<Color>,
    theme: &Theme,
) -> io::Result<()> {
    let centered = |text: &str, col: usize| format!("{:^w$}", text, w = widths[col]);

    let equation_row = |out: &mut W, row: usize| -> io::Result<()> {
        styled(out, &centered(&cells[row][0], 0), cell_color)?;
        styled(out, &format!(" {} ", ops.rows[row]), theme.op)?;
        styled(out, &centered(&cells[row][1], 1), cell_color)?;
        styled(out, " = ", theme.op)?;
        styled(out, &centered(&cells[row][2], 2), cell_color)?;
        writeln!(out)
    };
    let between_row = |out: &mut W, symbols: [String; 3]| -> io::Result<()> {
        let text = (0..3)
            .map(|col| centered(&symbols[col], col))
            .collect::<Vec<_>>()
            .join("   ");
        styled(out, &text, theme.op)?;
        writeln!(out)
    };

    equation_row(out, 0)?;
    between_row(out, ops.cols.map(|op: Op| op.to_string()))?;
    equation_row(out, 1)?;
    between_row(out, ["=", "=", "="].map(String::from))?;
    equation_row(out, 2)?;
    out.flush()
}

/// Print the letter puzzle
pub fn render_puzzle<W: Write>(out: &mut W, puzzle: &Puzzle, theme: &Theme) -> io::Result<()> {
    header(out, "Puzzle", theme)?;
    render_block(
        out,
        puzzle.letter_grid.rows(),
        &puzzle.ops,
        column_widths(puzzle),
        theme.letter,
        theme,
    )
}

/// Print the numeric solution aligned with the puzzle, then the mapping
pub fn render_solution<W: Write>(out: &mut W, puzzle: &Puzzle, theme: &Theme) -> io::Result<()> {
    header(out, "Solution", theme)?;
    let numbers = puzzle.grid.rows().map(|row| row.map(|v| v.to_string()));
    render_block(
        out,
        &numbers,
        &puzzle.ops,
        column_widths(puzzle),
        theme.digit,
        theme,
    )?;
    writeln!(out)?;
    styled(
        out,
        &format!("Letter -> Digit mapping: {}", puzzle.mapping),
        theme.info,
    )?;
    writeln!(out)?;
    out.flush()
}

/// Print the six numeric equations, detected clues, and the solution count
pub fn render_debug<W: Write>(
    out: &mut W,
    puzzle: &Puzzle,
    solver: &Solver,
    theme: &Theme,
) -> io::Result<()> {
    header(out, "Debug: Six Numeric Equations", theme)?;
    for line in puzzle.equations() {
        styled(out, &line.to_string(), theme.info)?;
        writeln!(out)?;
    }

    header(out, "Debug: Detected Clues", theme)?;
    let clues = puzzle.clue_labels(solver.bounds().allow_zero);
    if clues.is_empty() {
        writeln!(out, "(none)")?;
    }
    for clue in clues {
        styled(out, &format!("- {}", clue), theme.info)?;
        writeln!(out)?;
    }

    let count = solver.count_solutions(&puzzle.letter_grid, &puzzle.ops, 2);
    writeln!(out)?;
    styled(out, &format!("Solutions (up to 2): {}", count), theme.info)?;
    writeln!(out)?;
    out.flush()
}

/// Re-solve the letter puzzle from scratch and print the certified mapping.
///
/// Returns whether the solver's mapping agrees with the puzzle's own.
pub fn render_verification<W: Write>(
    out: &mut W,
    puzzle: &Puzzle,
    solver: &Solver,
    theme: &Theme,
) -> io::Result<bool> {
    header(out, "Verification", theme)?;
    let certified = solver.solve(&puzzle.letter_grid, &puzzle.ops);
    let matches = certified.as_ref() == Some(&puzzle.mapping);
    match &certified {
        Some(mapping) => styled(out, &format!("Certified solution: {}", mapping), theme.info)?,
        None => styled(out, "Certified solution: (none)", theme.info)?,
    }
    writeln!(out)?;
    let verdict = if matches {
        "Matches puzzle mapping"
    } else {
        "Does NOT match puzzle mapping"
    };
    writeln!(out, "{}", verdict)?;
    out.flush()?;
    Ok(matches)
}

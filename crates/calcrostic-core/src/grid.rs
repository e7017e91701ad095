use crate::arith::{evaluate, Op};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Operator sequences for the three rows and the three columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Operators {
    #[serde(rename = "row_ops")]
    pub rows: [Op; 3],
    #[serde(rename = "col_ops")]
    pub cols: [Op; 3],
}

impl Operators {
    pub fn new(rows: [Op; 3], cols: [Op; 3]) -> Self {
        Self { rows, cols }
    }

    /// Same operator on every row and column
    pub fn uniform(op: Op) -> Self {
        Self {
            rows: [op; 3],
            cols: [op; 3],
        }
    }
}

/// Identifies one of the six equations of a grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LineId {
    Row(usize),
    Col(usize),
}

impl LineId {
    /// All six lines, rows first
    pub const ALL: [LineId; 6] = [
        LineId::Row(0),
        LineId::Row(1),
        LineId::Row(2),
        LineId::Col(0),
        LineId::Col(1),
        LineId::Col(2),
    ];

    /// Cell coordinates of the `A`, `B` and `C` positions of this line
    pub fn cells(self) -> [(usize, usize); 3] {
        match self {
            LineId::Row(r) => [(r, 0), (r, 1), (r, 2)],
            LineId::Col(c) => [(0, c), (1, c), (2, c)],
        }
    }

    /// The operator governing this line
    pub fn op(self, ops: &Operators) -> Op {
        match self {
            LineId::Row(r) => ops.rows[r],
            LineId::Col(c) => ops.cols[c],
        }
    }
}

impl std::fmt::Display for LineId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LineId::Row(r) => write!(f, "Row{}", r + 1),
            LineId::Col(c) => write!(f, "Col{}", c + 1),
        }
    }
}

/// A single equation `A op B = C` read off a grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Line {
    pub id: LineId,
    pub a: u32,
    pub op: Op,
    pub b: u32,
    pub c: u32,
}

impl Line {
    /// Whether the equation evaluates exactly
    pub fn holds(&self) -> bool {
        evaluate(self.a, self.op, self.b) == Some(self.c)
    }

    /// The three values as an unordered set
    pub fn value_set(&self) -> BTreeSet<u32> {
        [self.a, self.b, self.c].into_iter().collect()
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {} {} {} = {}", self.id, self.a, self.op, self.b, self.c)
    }
}

/// A 3x3 grid of non-negative cell values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Grid {
    cells: [[u32; 3]; 3],
}

impl Grid {
    pub fn new(cells: [[u32; 3]; 3]) -> Self {
        Self { cells }
    }

    pub fn get(&self, row: usize, col: usize) -> u32 {
        self.cells[row][col]
    }

    pub fn rows(&self) -> &[[u32; 3]; 3] {
        &self.cells
    }

    /// Cell values in row-major order
    pub fn values(&self) -> impl Iterator<Item = u32> + '_ {
        self.cells.iter().flat_map(|row| row.iter().copied())
    }

    /// The equation for one row or column
    pub fn line(&self, id: LineId, ops: &Operators) -> Line {
        let [(ar, ac), (br, bc), (cr, cc)] = id.cells();
        Line {
            id,
            a: self.cells[ar][ac],
            op: id.op(ops),
            b: self.cells[br][bc],
            c: self.cells[cr][cc],
        }
    }

    /// All six equations, rows first
    pub fn lines(&self, ops: &Operators) -> [Line; 6] {
        LineId::ALL.map(|id| self.line(id, ops))
    }

    /// Distinct decimal digit characters appearing anywhere in the grid
    pub fn digit_chars(&self) -> BTreeSet<char> {
        self.values().flat_map(|v| v.to_string().into_bytes()).map(char::from).collect()
    }

    /// Number of letters the cipher for this grid will need
    pub fn distinct_digit_count(&self) -> usize {
        self.digit_chars().len()
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{:>2} {:>2} {:>2}", row[0], row[1], row[2])?;
        }
        Ok(())
    }
}

use serde::{Deserialize, Serialize};

/// One of the four grid operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Op {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Sub,
    #[serde(rename = "x")]
    Mul,
    #[serde(rename = "/")]
    Div,
}

impl Op {
    /// All operators in canonical order
    pub const ALL: [Op; 4] = [Op::Add, Op::Sub, Op::Mul, Op::Div];

    /// Symbol shown in puzzle printouts
    pub fn symbol(self) -> char {
        match self {
            Op::Add => '+',
            Op::Sub => '-',
            Op::Mul => 'x',
            Op::Div => '/',
        }
    }

    /// The operator that undoes this one (+/- and x//)
    pub fn inverse(self) -> Op {
        match self {
            Op::Add => Op::Sub,
            Op::Sub => Op::Add,
            Op::Mul => Op::Div,
            Op::Div => Op::Mul,
        }
    }

    /// Parse a symbol, accepting the common alternates for x and /.
    pub fn from_symbol(symbol: char) -> Option<Op> {
        match symbol {
            '+' => Some(Op::Add),
            '-' | '−' => Some(Op::Sub),
            'x' | 'X' | '*' | '×' => Some(Op::Mul),
            '/' | '÷' => Some(Op::Div),
            _ => None,
        }
    }
}

impl std::fmt::Display for Op {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Exact integer evaluation of `a op b`.
///
/// Returns `None` for a negative difference, division by zero, a division
/// that leaves a remainder, or overflow.
pub fn evaluate(a: u32, op: Op, b: u32) -> Option<u32> {
    match op {
        Op::Add => a.checked_add(b),
        Op::Sub => a.checked_sub(b),
        Op::Mul => a.checked_mul(b),
        Op::Div => {
            if b == 0 || a % b != 0 {
                return None;
            }
            Some(a / b)
        }
    }
}

/// Value range rules for cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bounds {
    /// Allow the value 0 (and the digit 0)
    pub allow_zero: bool,
    /// Allow values up to 99 instead of 9
    pub allow_two_digit: bool,
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            allow_zero: true,
            allow_two_digit: true,
        }
    }
}

impl Bounds {
    pub fn new(allow_zero: bool, allow_two_digit: bool) -> Self {
        Self {
            allow_zero,
            allow_two_digit,
        }
    }

    /// Smallest legal cell value
    pub fn lo(&self) -> u32 {
        if self.allow_zero {
            0
        } else {
            1
        }
    }

    /// Largest legal cell value
    pub fn hi(&self) -> u32 {
        if self.allow_two_digit {
            99
        } else {
            9
        }
    }

    /// Check if a value lies within `[lo, hi]`
    pub fn contains(&self, value: u32) -> bool {
        (self.lo()..=self.hi()).contains(&value)
    }

    /// Digits a letter may stand for
    pub fn digit_pool(&self) -> impl Iterator<Item = u8> {
        let lo = if self.allow_zero { 0 } else { 1 };
        lo..=9u8
    }

    /// Number of digits a letter may stand for
    pub fn digit_pool_size(&self) -> usize {
        if self.allow_zero {
            10
        } else {
            9
        }
    }
}

/// Evaluate with the range rules applied to the result.
pub fn evaluate_bounded(a: u32, op: Op, b: u32, bounds: Bounds) -> Option<u32> {
    evaluate(a, op, b).filter(|&v| bounds.contains(v))
}

/// Check a single cell value against the range rules.
pub fn is_valid_value(value: u32, allow_two_digit: bool, allow_zero: bool) -> bool {
    Bounds::new(allow_zero, allow_two_digit).contains(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_division_guards() {
        assert_eq!(evaluate(6, Op::Div, 0), None);
        assert_eq!(evaluate(7, Op::Div, 2), None);
        assert_eq!(evaluate(8, Op::Div, 2), Some(4));
        assert_eq!(evaluate(0, Op::Div, 5), Some(0));
    }

    #[test]
    fn test_no_negative_results() {
        assert_eq!(evaluate(3, Op::Sub, 5), None);
        assert_eq!(evaluate(5, Op::Sub, 5), Some(0));
        assert_eq!(evaluate(9, Op::Sub, 4), Some(5));
    }

    #[test]
    fn test_add_and_mul() {
        assert_eq!(evaluate(3, Op::Add, 4), Some(7));
        assert_eq!(evaluate(6, Op::Mul, 7), Some(42));
        assert_eq!(evaluate(u32::MAX, Op::Add, 1), None);
    }

    #[test]
    fn test_value_ranges() {
        assert!(!is_valid_value(100, true, true));
        assert!(!is_valid_value(0, false, false));
        assert!(is_valid_value(0, false, true));
        assert!(is_valid_value(99, true, false));
        assert!(!is_valid_value(10, false, true));
        assert!(!is_valid_value(0, true, false));
    }

    #[test]
    fn test_evaluate_bounded() {
        let single = Bounds::new(true, false);
        assert_eq!(evaluate_bounded(5, Op::Add, 4, single), Some(9));
        assert_eq!(evaluate_bounded(5, Op::Add, 5, single), None);

        let no_zero = Bounds::new(false, false);
        assert_eq!(evaluate_bounded(3, Op::Sub, 3, no_zero), None);
    }

    #[test]
    fn test_digit_pool() {
        assert_eq!(Bounds::new(true, true).digit_pool().count(), 10);
        assert_eq!(Bounds::new(false, true).digit_pool().next(), Some(1));
        assert_eq!(Bounds::new(false, false).digit_pool_size(), 9);
    }

    #[test]
    fn test_inverse_and_symbols() {
        for op in Op::ALL {
            assert_eq!(op.inverse().inverse(), op);
            assert_eq!(Op::from_symbol(op.symbol()), Some(op));
        }
        assert_eq!(Op::from_symbol('÷'), Some(Op::Div));
        assert_eq!(Op::from_symbol('?'), None);
    }
}

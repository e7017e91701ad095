//! Detection of redundant equations.
//!
//! Two lines are mirrors when they state the same fact through inverse
//! operators, e.g. `3 + 4 = 7` alongside `7 - 3 = 4`. Such a pair gives the
//! solver one clue where the puzzle appears to offer two.

use crate::arith::{evaluate, Op};
use crate::grid::{Line, LineId};

/// Whether `inverse` (a `-` or `/` line) restates `forward` (a `+` or `x` line).
fn restates(forward: &Line, inverse: &Line) -> bool {
    if inverse.a != forward.c {
        return false;
    }
    let swapped = inverse.b == forward.a && inverse.c == forward.b;
    let straight = inverse.b == forward.b && inverse.c == forward.a;
    // evaluate() guards the zero divisor
    (swapped || straight) && evaluate(inverse.a, inverse.op, inverse.b) == Some(inverse.c)
}

/// Check whether two lines encode the same algebraic fact.
///
/// The comparison is on values, not positions. Lines sharing an operator are
/// never mirrors.
pub fn are_mirrored(first: &Line, second: &Line) -> bool {
    if first.value_set() != second.value_set() {
        return false;
    }
    match (first.op, second.op) {
        (Op::Add, Op::Sub) | (Op::Mul, Op::Div) => restates(first, second),
        (Op::Sub, Op::Add) | (Op::Div, Op::Mul) => restates(second, first),
        _ => false,
    }
}

/// First mirrored pair among the lines, if any.
pub fn find_mirrored_pair(lines: &[Line]) -> Option<(LineId, LineId)> {
    lines.iter().enumerate().find_map(|(i, first)| {
        lines[i + 1..]
            .iter()
            .find(|second| are_mirrored(first, second))
            .map(|second| (first.id, second.id))
    })
}

pub fn has_mirrored_lines(lines: &[Line]) -> bool {
    find_mirrored_pair(lines).is_some()
}

/// First line of the form `X + 0 = X`, `0 + X = X` or `X - 0 = X`.
pub fn find_zero_identity(lines: &[Line]) -> Option<LineId> {
    lines
        .iter()
        .find(|line| match line.op {
            Op::Add => (line.b == 0 && line.c == line.a) || (line.a == 0 && line.c == line.b),
            Op::Sub => line.b == 0 && line.c == line.a,
            _ => false,
        })
        .map(|line| line.id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(id: LineId, a: u32, op: Op, b: u32, c: u32) -> Line {
        Line { id, a, op, b, c }
    }

    #[test]
    fn test_add_sub_mirror() {
        let add = line(LineId::Row(0), 3, Op::Add, 4, 7);
        let sub = line(LineId::Col(2), 7, Op::Sub, 3, 4);
        assert!(are_mirrored(&add, &sub));
        assert!(are_mirrored(&sub, &add));

        let other = line(LineId::Col(1), 7, Op::Sub, 4, 3);
        assert!(are_mirrored(&add, &other));
    }

    #[test]
    fn test_mul_div_mirror() {
        let mul = line(LineId::Row(1), 2, Op::Mul, 3, 6);
        let div = line(LineId::Col(0), 6, Op::Div, 2, 3);
        assert!(are_mirrored(&mul, &div));
        assert!(are_mirrored(&div, &mul));
    }

    #[test]
    fn test_zero_product_mirror() {
        let mul = line(LineId::Row(0), 0, Op::Mul, 5, 0);
        let div = line(LineId::Row(1), 0, Op::Div, 5, 0);
        assert!(are_mirrored(&mul, &div));
    }

    #[test]
    fn test_same_operator_not_mirrored() {
        let a = line(LineId::Row(0), 3, Op::Add, 4, 7);
        let b = line(LineId::Col(0), 4, Op::Add, 3, 7);
        assert!(!are_mirrored(&a, &b));
    }

    #[test]
    fn test_different_values_not_mirrored() {
        let add = line(LineId::Row(0), 3, Op::Add, 4, 7);
        let sub = line(LineId::Row(1), 8, Op::Sub, 3, 5);
        assert!(!are_mirrored(&add, &sub));
    }

    #[test]
    fn test_repeated_values() {
        let add = line(LineId::Row(0), 2, Op::Add, 2, 4);
        let sub = line(LineId::Row(1), 4, Op::Sub, 2, 2);
        assert!(are_mirrored(&add, &sub));

        let mul = line(LineId::Row(2), 2, Op::Mul, 2, 4);
        assert!(!are_mirrored(&add, &mul));
    }

    #[test]
    fn test_find_mirrored_pair() {
        let lines = [
            line(LineId::Row(0), 1, Op::Add, 1, 2),
            line(LineId::Row(1), 5, Op::Mul, 1, 5),
            line(LineId::Col(0), 9, Op::Sub, 1, 8),
            line(LineId::Col(1), 6, Op::Div, 3, 2),
        ];
        assert_eq!(find_mirrored_pair(&lines), None);
        assert!(!has_mirrored_lines(&lines));

        let lines = [
            line(LineId::Row(0), 1, Op::Add, 1, 2),
            line(LineId::Row(1), 5, Op::Mul, 1, 5),
            line(LineId::Col(1), 5, Op::Div, 1, 5),
        ];
        assert_eq!(
            find_mirrored_pair(&lines),
            Some((LineId::Row(1), LineId::Col(1)))
        );
    }

    #[test]
    fn test_zero_identity() {
        let lines = [
            line(LineId::Row(0), 3, Op::Add, 4, 7),
            line(LineId::Row(1), 0, Op::Add, 6, 6),
        ];
        assert_eq!(find_zero_identity(&lines), Some(LineId::Row(1)));

        let lines = [line(LineId::Col(0), 6, Op::Sub, 0, 6)];
        assert_eq!(find_zero_identity(&lines), Some(LineId::Col(0)));

        let lines = [line(LineId::Col(0), 6, Op::Mul, 1, 6)];
        assert_eq!(find_zero_identity(&lines), None);
    }
}

use crate::grid::Grid;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The grid as shown to the solver, each digit replaced by its letter
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LetterGrid {
    cells: [[String; 3]; 3],
}

impl LetterGrid {
    pub fn new(cells: [[String; 3]; 3]) -> Self {
        Self { cells }
    }

    pub fn get(&self, row: usize, col: usize) -> &str {
        &self.cells[row][col]
    }

    pub fn rows(&self) -> &[[String; 3]; 3] {
        &self.cells
    }

    /// Distinct letters in first-appearance order (row-major, left to right)
    pub fn letters(&self) -> Vec<char> {
        let mut seen = Vec::new();
        for ch in self.cells.iter().flatten().flat_map(|word| word.chars()) {
            if !seen.contains(&ch) {
                seen.push(ch);
            }
        }
        seen
    }
}

/// Letter to digit solution of a puzzle
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Mapping(BTreeMap<char, u8>);

impl Mapping {
    pub fn new(entries: BTreeMap<char, u8>) -> Self {
        Self(entries)
    }

    pub fn get(&self, letter: char) -> Option<u8> {
        self.0.get(&letter).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, u8)> + '_ {
        self.0.iter().map(|(&letter, &digit)| (letter, digit))
    }

    /// Value of a word under this mapping; leading zeros are dropped numerically
    pub fn word_value(&self, word: &str) -> Option<u32> {
        word.chars().try_fold(0u32, |acc, letter| {
            let digit = self.get(letter)?;
            acc.checked_mul(10)?.checked_add(u32::from(digit))
        })
    }

    /// Substitute digits back into a letter grid
    pub fn decode(&self, letters: &LetterGrid) -> Option<Grid> {
        let mut cells = [[0u32; 3]; 3];
        for (r, row) in letters.rows().iter().enumerate() {
            for (c, word) in row.iter().enumerate() {
                cells[r][c] = self.word_value(word)?;
            }
        }
        Some(Grid::new(cells))
    }
}

impl std::fmt::Display for Mapping {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (i, (letter, digit)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", letter, digit)?;
        }
        write!(f, "}}")
    }
}

/// Encode a grid with a substitution cipher.
///
/// Digits get letters from `a` onward in the order they are first seen,
/// scanning cells row-major and each cell's digits left to right.
pub fn map_letters(grid: &Grid) -> (LetterGrid, Mapping) {
    let mut digit_to_letter: BTreeMap<u8, char> = BTreeMap::new();
    let mut next_letter = b'a';

    let cells = grid.rows().map(|row| {
        row.map(|value| {
            value
                .to_string()
                .bytes()
                .map(|ch| {
                    let digit = ch - b'0';
                    *digit_to_letter.entry(digit).or_insert_with(|| {
                        let letter = char::from(next_letter);
                        next_letter += 1;
                        letter
                    })
                })
                .collect::<String>()
        })
    });

    let mapping = digit_to_letter
        .into_iter()
        .map(|(digit, letter)| (letter, digit))
        .collect();
    (LetterGrid::new(cells), Mapping::new(mapping))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(rows: [[&str; 3]; 3]) -> LetterGrid {
        LetterGrid::new(rows.map(|row| row.map(String::from)))
    }

    #[test]
    fn test_first_appearance_order() {
        let grid = Grid::new([[1, 2, 3], [4, 5, 9], [5, 7, 12]]);
        let (letters, mapping) = map_letters(&grid);

        assert_eq!(
            letters,
            words([["a", "b", "c"], ["d", "e", "f"], ["e", "g", "ab"]])
        );
        let expected: Vec<(char, u8)> = vec![
            ('a', 1),
            ('b', 2),
            ('c', 3),
            ('d', 4),
            ('e', 5),
            ('f', 9),
            ('g', 7),
        ];
        assert_eq!(mapping.iter().collect::<Vec<_>>(), expected);
    }

    #[test]
    fn test_round_trip() {
        let grid = Grid::new([[10, 5, 2], [2, 5, 7], [12, 10, 22]]);
        let (letters, mapping) = map_letters(&grid);
        assert_eq!(letters.get(0, 0), "ab");
        assert_eq!(mapping.get('b'), Some(0));
        assert_eq!(mapping.decode(&letters), Some(grid));
    }

    #[test]
    fn test_letters_in_scan_order() {
        let letters = words([["ba", "c", "a"], ["d", "b", "e"], ["f", "g", "h"]]);
        assert_eq!(letters.letters(), vec!['b', 'a', 'c', 'd', 'e', 'f', 'g', 'h']);
    }

    #[test]
    fn test_word_value() {
        let mapping = Mapping::new([('a', 0), ('b', 7)].into_iter().collect());
        assert_eq!(mapping.word_value("ab"), Some(7));
        assert_eq!(mapping.word_value("ba"), Some(70));
        assert_eq!(mapping.word_value("bz"), None);
    }

    #[test]
    fn test_display() {
        let mapping = Mapping::new([('a', 1), ('b', 2)].into_iter().collect());
        assert_eq!(mapping.to_string(), "{a: 1, b: 2}");
        assert_eq!(Mapping::default().to_string(), "{}");
    }
}

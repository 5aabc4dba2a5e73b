use std::fmt;

use bio::scores::blosum62;
use derive_getters::Getters;

use crate::align::{
    alphabet::{index_or_err, ALPHABET_SIZE, AMINO_ACIDS},
    error::AlignError,
};

/// A square table of substitution scores over the amino-acid alphabet, e.g. BLOSUM62.
///
/// The table is immutable once built, so a single table may be shared read-only across any number
/// of alignments.  Symmetry is not assumed: `score(a, b)` reads row `a` and column `b`.
#[derive(Clone, Debug, PartialEq, Eq, Getters)]
pub struct SubstitutionTable {
    /// The name of the table (e.g. `BLOSUM62`).
    name: String,
    /// The scores, row-major, `ALPHABET_SIZE * ALPHABET_SIZE` long.
    #[getter(skip)]
    scores: Vec<i32>,
}

impl SubstitutionTable {
    /// Creates a table from row-major scores.  Panics if the number of scores is not the square of
    /// the alphabet size.
    pub fn new(name: &str, scores: Vec<i32>) -> Self {
        assert_eq!(
            scores.len(),
            ALPHABET_SIZE * ALPHABET_SIZE,
            "a substitution table must have {} scores",
            ALPHABET_SIZE * ALPHABET_SIZE
        );
        Self {
            name: name.to_string(),
            scores,
        }
    }

    /// Creates a table by evaluating the scoring function for every pair of alphabet symbols.
    pub fn from_fn<F: Fn(u8, u8) -> i32>(name: &str, f: F) -> Self {
        let scores = AMINO_ACIDS
            .iter()
            .flat_map(|&a| AMINO_ACIDS.iter().map(move |&b| (a, b)))
            .map(|(a, b)| f(a, b))
            .collect();
        Self::new(name, scores)
    }

    /// The built-in BLOSUM62 table.
    pub fn blosum62() -> Self {
        Self::from_fn("BLOSUM62", blosum62)
    }

    /// Returns the score for aligning symbol `a` against symbol `b`.
    pub fn score(&self, a: u8, b: u8) -> Result<i32, AlignError> {
        Ok(self.score_by_index(index_or_err(a)?, index_or_err(b)?))
    }

    /// Returns the score for the symbols with the given alphabet indexes.
    #[inline(always)]
    pub fn score_by_index(&self, i: usize, j: usize) -> i32 {
        debug_assert!(i < ALPHABET_SIZE);
        debug_assert!(j < ALPHABET_SIZE);
        self.scores[i * ALPHABET_SIZE + j]
    }

    /// True if the score of `(a, b)` equals the score of `(b, a)` for all symbols.
    pub fn is_symmetric(&self) -> bool {
        (0..ALPHABET_SIZE).all(|i| {
            (i + 1..ALPHABET_SIZE).all(|j| self.score_by_index(i, j) == self.score_by_index(j, i))
        })
    }
}

impl Default for SubstitutionTable {
    fn default() -> Self {
        Self::blosum62()
    }
}

/// Writes the table in the NCBI text format read by
/// [`read_substitution_matrix`](crate::align::io::read_substitution_matrix).
impl fmt::Display for SubstitutionTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.name)?;
        write!(f, " ")?;
        for &symbol in &AMINO_ACIDS {
            write!(f, " {:>3}", symbol as char)?;
        }
        writeln!(f)?;
        for (i, &symbol) in AMINO_ACIDS.iter().enumerate() {
            write!(f, "{}", symbol as char)?;
            for j in 0..ALPHABET_SIZE {
                write!(f, " {:>3}", self.score_by_index(i, j))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
pub mod tests {
    use rstest::rstest;

    use super::SubstitutionTable;
    use crate::align::{
        alphabet::{ALPHABET_SIZE, AMINO_ACIDS},
        error::AlignError,
    };

    #[rstest]
    fn test_blosum62_matches_bio() {
        let table = SubstitutionTable::blosum62();
        assert_eq!(table.name(), "BLOSUM62");
        for &a in &AMINO_ACIDS {
            for &b in &AMINO_ACIDS {
                assert_eq!(
                    table.score(a, b).unwrap(),
                    bio::scores::blosum62(a, b),
                    "{}{}",
                    a as char,
                    b as char
                );
            }
        }
    }

    #[rstest]
    #[case(b'A', b'A', 4)]
    #[case(b'W', b'W', 11)]
    #[case(b'H', b'H', 8)]
    #[case(b'A', b'W', -3)]
    #[case(b'B', b'N', 3)]
    #[case(b'*', b'*', 1)]
    #[case(b'*', b'A', -4)]
    #[case(b'e', b'e', 5)]
    fn test_blosum62_scores(#[case] a: u8, #[case] b: u8, #[case] expected: i32) {
        assert_eq!(SubstitutionTable::blosum62().score(a, b), Ok(expected));
    }

    #[rstest]
    fn test_score_unknown_symbol() {
        let table = SubstitutionTable::blosum62();
        assert_eq!(
            table.score(b'A', b'J'),
            Err(AlignError::UnknownSymbol {
                symbol: 'J',
                position: None
            })
        );
        assert_eq!(
            table.score(b'-', b'A'),
            Err(AlignError::UnknownSymbol {
                symbol: '-',
                position: None
            })
        );
    }

    #[rstest]
    fn test_asymmetric_table() {
        // rows score by the first symbol only
        let table = SubstitutionTable::from_fn("rows", |a, _| if a == b'A' { 5 } else { -1 });
        assert!(!table.is_symmetric());
        assert_eq!(table.score(b'A', b'R'), Ok(5));
        assert_eq!(table.score(b'R', b'A'), Ok(-1));
        assert!(SubstitutionTable::blosum62().is_symmetric());
    }

    #[rstest]
    #[should_panic(expected = "a substitution table must have 576 scores")]
    fn test_new_wrong_size() {
        SubstitutionTable::new("bad", vec![0; ALPHABET_SIZE]);
    }

    #[rstest]
    fn test_display() {
        let text = SubstitutionTable::blosum62().to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), ALPHABET_SIZE + 2);
        assert_eq!(lines[0], "# BLOSUM62");
        assert!(lines[1].trim_start().starts_with("A   R   N"));
        assert!(lines[2].starts_with("A   4  -1  -2  -2   0"));
    }
}

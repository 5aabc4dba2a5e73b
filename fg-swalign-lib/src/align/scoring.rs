use derive_getters::Getters;

use crate::align::{alphabet::encode, error::AlignError, substitution::SubstitutionTable};

/// The local alignment dynamic-programming matrix.
///
/// Has `len(a) + 1` rows and `len(b) + 1` columns, stored contiguously in row-major order.  Row
/// zero and column zero are always zero, and no cell is ever negative.
#[derive(Default, Clone, Eq, PartialEq, Debug)]
pub struct ScoringMatrix {
    rows: usize,
    cols: usize,
    matrix: Vec<i32>,
}

/// The highest scoring cell in a [`ScoringMatrix`].
#[derive(Default, Copy, Clone, Eq, PartialEq, Debug)]
pub struct BestCell {
    pub score: i32,
    pub i: usize,
    pub j: usize,
}

/// The result of [`fill`]: the matrix and its best cell.
#[derive(Clone, Eq, PartialEq, Debug, Getters)]
pub struct FilledMatrix {
    matrix: ScoringMatrix,
    best: BestCell,
}

impl FilledMatrix {
    pub fn into_parts(self) -> (ScoringMatrix, BestCell) {
        (self.matrix, self.best)
    }
}

impl ScoringMatrix {
    /// Allocates a zero-filled matrix for sequences of length `m` and `n`.
    pub fn zeroed(m: usize, n: usize) -> Result<Self, AlignError> {
        let rows = m.saturating_add(1);
        let cols = n.saturating_add(1);
        let too_large = AlignError::MatrixTooLarge { rows, cols };
        let size = rows.checked_mul(cols).ok_or(too_large.clone())?;
        let mut matrix: Vec<i32> = Vec::new();
        matrix.try_reserve_exact(size).map_err(|_| too_large)?;
        matrix.resize(size, 0);
        Ok(Self { rows, cols, matrix })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline(always)]
    pub fn get(&self, i: usize, j: usize) -> i32 {
        debug_assert!(i < self.rows);
        debug_assert!(j < self.cols);
        self.matrix[i * self.cols + j]
    }

    #[inline(always)]
    fn set(&mut self, i: usize, j: usize, v: i32) {
        debug_assert!(i < self.rows);
        debug_assert!(j < self.cols);
        self.matrix[i * self.cols + j] = v;
    }
}

/// Fills the local alignment matrix for `seq_a` (rows) versus `seq_b` (columns).
///
/// Each cell is `max(0, diag + score(a, b), up + gap_penalty, left + gap_penalty)`.  The best cell
/// is the first cell, scanning rows then columns, with the maximum score; it is `(0, 0)` with a
/// score of zero when no pair of symbols scores positively.
///
/// # Arguments
///
/// * `seq_a` - the first sequence, over the amino-acid alphabet
/// * `seq_b` - the second sequence, over the amino-acid alphabet
/// * `table` - the substitution scores
/// * `gap_penalty` - the score of each gap position (should not be positive)
pub fn fill(
    seq_a: &[u8],
    seq_b: &[u8],
    table: &SubstitutionTable,
    gap_penalty: i32,
) -> Result<FilledMatrix, AlignError> {
    if gap_penalty > 0 {
        return Err(AlignError::PositiveGapPenalty(gap_penalty));
    }
    let a = encode(seq_a)?;
    let b = encode(seq_b)?;

    let mut matrix = ScoringMatrix::zeroed(a.len(), b.len())?;
    let mut best = BestCell::default();

    for i in 1..matrix.rows {
        for j in 1..matrix.cols {
            // cells are never negative and the gap penalty is never positive, so only the diagonal
            // can overflow
            let diag = matrix
                .get(i - 1, j - 1)
                .checked_add(table.score_by_index(a[i - 1], b[j - 1]))
                .ok_or(AlignError::ScoreOverflow { i, j })?;
            let up = matrix.get(i - 1, j) + gap_penalty;
            let left = matrix.get(i, j - 1) + gap_penalty;
            let score = diag.max(up).max(left).max(0);
            matrix.set(i, j, score);
            // NB: strictly greater keeps the first maximum in row-major order
            if score > best.score {
                best = BestCell { score, i, j };
            }
        }
    }

    Ok(FilledMatrix { matrix, best })
}

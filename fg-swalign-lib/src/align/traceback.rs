use crate::align::{
    aligners::constants::GAP, error::AlignError, scoring::ScoringMatrix,
    substitution::SubstitutionTable,
};

/// The aligned symbols recovered by [`traceback`], with the cell at which the walk stopped.
#[derive(Default, Clone, Eq, PartialEq, Debug)]
pub struct TracebackPath {
    /// The aligned symbols of the first sequence, with [`GAP`] for gaps.
    pub aligned_a: Vec<u8>,
    /// The aligned symbols of the second sequence, with [`GAP`] for gaps.
    pub aligned_b: Vec<u8>,
    /// The row of the zero-scoring cell where the walk stopped.
    pub stop_i: usize,
    /// The column of the zero-scoring cell where the walk stopped.
    pub stop_j: usize,
}

/// Walks back from `(start_i, start_j)` until a zero-scoring cell, recovering the aligned symbols.
///
/// At each cell the move that produced its score is taken, preferring the diagonal, then up (a
/// symbol of `seq_a` against a gap), then left (a gap against a symbol of `seq_b`).  The matrix
/// must have been filled by [`fill`](crate::align::scoring::fill) with the same sequences, table
/// and gap penalty.
pub fn traceback(
    matrix: &ScoringMatrix,
    seq_a: &[u8],
    seq_b: &[u8],
    table: &SubstitutionTable,
    gap_penalty: i32,
    start_i: usize,
    start_j: usize,
) -> Result<TracebackPath, AlignError> {
    debug_assert_eq!(matrix.rows(), seq_a.len() + 1);
    debug_assert_eq!(matrix.cols(), seq_b.len() + 1);

    let mut aligned_a: Vec<u8> = Vec::with_capacity(start_i + start_j);
    let mut aligned_b: Vec<u8> = Vec::with_capacity(start_i + start_j);
    let mut i = start_i;
    let mut j = start_j;

    while matrix.get(i, j) != 0 {
        let score = matrix.get(i, j);
        let diag = matrix
            .get(i - 1, j - 1)
            .checked_add(table.score(seq_a[i - 1], seq_b[j - 1])?);
        if diag == Some(score) {
            aligned_a.push(seq_a[i - 1]);
            aligned_b.push(seq_b[j - 1]);
            i -= 1;
            j -= 1;
        } else if matrix.get(i - 1, j) + gap_penalty == score {
            aligned_a.push(seq_a[i - 1]);
            aligned_b.push(GAP);
            i -= 1;
        } else {
            debug_assert_eq!(matrix.get(i, j - 1) + gap_penalty, score);
            aligned_a.push(GAP);
            aligned_b.push(seq_b[j - 1]);
            j -= 1;
        }
    }

    aligned_a.reverse();
    aligned_b.reverse();
    Ok(TracebackPath {
        aligned_a,
        aligned_b,
        stop_i: i,
        stop_j: j,
    })
}

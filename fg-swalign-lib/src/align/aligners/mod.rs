pub mod constants;

pub use constants::{AlignmentOperation, DEFAULT_BLOCK_WIDTH, DEFAULT_GAP_PENALTY};

use anyhow::{ensure, Result};
use derive_builder::Builder;

use crate::align::{
    alignment::Alignment,
    error::AlignError,
    scoring::fill,
    substitution::SubstitutionTable,
    traceback::{traceback, TracebackPath},
};

/// Finds the best local alignment of `seq_a` versus `seq_b`.
///
/// Fills the scoring matrix, then walks back from its best cell.  When no pair of symbols scores
/// positively the alignment is empty with a score of zero.  Deterministic: ties are broken as
/// described in [`fill`] and [`traceback`].
///
/// # Arguments
///
/// * `seq_a` - the first sequence, over the amino-acid alphabet
/// * `seq_b` - the second sequence, over the amino-acid alphabet
/// * `table` - the substitution scores
/// * `gap_penalty` - the score of each gap position (should not be positive)
pub fn align(
    seq_a: &[u8],
    seq_b: &[u8],
    table: &SubstitutionTable,
    gap_penalty: i32,
) -> Result<Alignment, AlignError> {
    let (matrix, best) = fill(seq_a, seq_b, table, gap_penalty)?.into_parts();
    let TracebackPath {
        aligned_a,
        aligned_b,
        stop_i,
        stop_j,
    } = traceback(
        &matrix, seq_a, seq_b, table, gap_penalty, best.i, best.j,
    )?;
    Ok(Alignment {
        score: best.score,
        aligned_a,
        aligned_b,
        astart: stop_i,
        aend: best.i,
        bstart: stop_j,
        bend: best.j,
        alen: seq_a.len(),
        blen: seq_b.len(),
    })
}

#[derive(Copy, Clone, Debug, Builder)]
#[builder(name = "Builder", build_fn(name = "build_options"))]
pub struct Options {
    #[builder(default = "DEFAULT_GAP_PENALTY")]
    gap_penalty: i32,
    #[builder(default = "DEFAULT_BLOCK_WIDTH")]
    block_width: usize,
}

impl Options {
    pub fn gap_penalty(&self) -> i32 {
        self.gap_penalty
    }

    pub fn block_width(&self) -> usize {
        self.block_width
    }
}

impl Builder {
    /// Builds an aligner that scores with the given table, which is shared, not copied.
    pub fn build_aligner<'a>(&self, table: &'a SubstitutionTable) -> Result<Aligner<'a>> {
        let opts = self.build_options()?;
        ensure!(
            opts.gap_penalty <= 0,
            AlignError::PositiveGapPenalty(opts.gap_penalty)
        );
        ensure!(opts.block_width > 0, "Block width must be greater than zero");
        Ok(Aligner { table, opts })
    }
}

/// Aligns pairs of sequences with a fixed substitution table and options.
pub struct Aligner<'a> {
    table: &'a SubstitutionTable,
    opts: Options,
}

impl Aligner<'_> {
    pub fn table(&self) -> &SubstitutionTable {
        self.table
    }

    pub fn options(&self) -> &Options {
        &self.opts
    }

    pub fn align(&self, seq_a: &[u8], seq_b: &[u8]) -> Result<Alignment, AlignError> {
        align(seq_a, seq_b, self.table, self.opts.gap_penalty)
    }

    /// Returns the aligned symbols of the alignment laid out in blocks.
    pub fn format_blocks(&self, alignment: &Alignment) -> String {
        alignment.format_blocks(self.opts.block_width)
    }
}

use std::fmt;

use itertools::Itertools;

use super::aligners::constants::{AlignmentOperation, GAP};

/// A local alignment between two sequences `a` and `b`, consisting of a score, the aligned
/// symbols of both sequences (with gaps), and the span of the alignment on each sequence.
///
/// The spans are 0-based half-open intervals of the original sequences.  Equivalently, the
/// starts are the matrix cell at which traceback stopped, and the ends are the best-scoring
/// matrix cell.
#[derive(Debug, Eq, PartialEq, Clone, Default)]
pub struct Alignment {
    /// Smith-Waterman alignment score
    pub score: i32,

    /// The aligned symbols of `a`, with `-` for gaps
    pub aligned_a: Vec<u8>,

    /// The aligned symbols of `b`, with `-` for gaps
    pub aligned_b: Vec<u8>,

    /// Start position of alignment in `a` (0-based)
    pub astart: usize,

    /// End position of alignment in `a` (0-based exclusive)
    pub aend: usize,

    /// Start position of alignment in `b` (0-based)
    pub bstart: usize,

    /// End position of alignment in `b` (0-based exclusive)
    pub bend: usize,

    /// Length of `a` (the original length, not the aligned length)
    pub alen: usize,

    /// Length of `b` (the original length, not the aligned length)
    pub blen: usize,
}

impl Alignment {
    /// The matrix cell at which the alignment starts.
    pub fn start_position(&self) -> (usize, usize) {
        (self.astart, self.bstart)
    }

    /// The matrix cell at which the alignment ends (the best scoring cell).
    pub fn end_position(&self) -> (usize, usize) {
        (self.aend, self.bend)
    }

    pub fn is_empty(&self) -> bool {
        self.aligned_a.is_empty()
    }

    /// The number of alignment columns, including gaps.
    pub fn length(&self) -> usize {
        self.aligned_a.len()
    }

    /// The alignment operation for every column.
    pub fn operations(&self) -> Vec<AlignmentOperation> {
        self.aligned_a
            .iter()
            .zip(self.aligned_b.iter())
            .filter_map(|(&a, &b)| AlignmentOperation::from_column(a, b))
            .collect_vec()
    }

    /// The CIGAR string of the alignment using `=`, `X`, `I` and `D`.
    pub fn cigar(&self) -> String {
        self.operations()
            .into_iter()
            .dedup_with_count()
            .map(|(len, op)| format!("{len}{}", op.as_char()))
            .join("")
    }

    /// The number of columns with identical symbols.
    pub fn num_identities(&self) -> usize {
        self.operations()
            .iter()
            .filter(|op| **op == AlignmentOperation::Match)
            .count()
    }

    /// The number of columns with a gap in either sequence.
    pub fn num_gaps(&self) -> usize {
        self.operations().iter().filter(|op| op.is_gap()).count()
    }

    /// The percentage of columns with identical symbols, or zero for an empty alignment.
    pub fn identity_pct(&self) -> f64 {
        pct(self.num_identities(), self.length())
    }

    /// The percentage of columns with a gap, or zero for an empty alignment.
    pub fn gaps_pct(&self) -> f64 {
        pct(self.num_gaps(), self.length())
    }

    // Validate that the spans agree with the aligned symbols.
    pub fn validate(&self) {
        assert_eq!(self.aligned_a.len(), self.aligned_b.len(), "aligned length");
        assert!(self.astart <= self.aend && self.aend <= self.alen, "a-span");
        assert!(self.bstart <= self.bend && self.bend <= self.blen, "b-span");
        let alength: usize = self.operations().iter().map(|op| op.length_on_a()).sum();
        let blength: usize = self.operations().iter().map(|op| op.length_on_b()).sum();
        assert_eq!(self.aend - self.astart, alength, "aend");
        assert_eq!(self.bend - self.bstart, blength, "bend");
        if self.is_empty() {
            assert_eq!(self.score, 0, "score");
        }
    }

    /// Returns the aligned symbols laid out in blocks of `width` columns.
    pub fn format_blocks(&self, width: usize) -> String {
        format_blocks(&self.aligned_a, &self.aligned_b, width)
    }
}

fn pct(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        100.0 * count as f64 / total as f64
    }
}

/// Lays out two aligned sequences as pairs of lines with at most `width` columns each, one pair
/// per block, with blocks separated by an empty line.  Returns an empty string when both are
/// empty.
pub fn format_blocks(aligned_a: &[u8], aligned_b: &[u8], width: usize) -> String {
    assert!(width > 0, "width must be greater than zero");
    debug_assert_eq!(aligned_a.len(), aligned_b.len());
    aligned_a
        .chunks(width)
        .zip(aligned_b.chunks(width))
        .map(|(a, b)| {
            format!(
                "{}\n{}\n",
                String::from_utf8_lossy(a),
                String::from_utf8_lossy(b)
            )
        })
        .join("\n")
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "a-span: {}-{}/{} b-span: {}-{}/{} score: {} cigar: {} aln-len: {}",
            self.astart,
            self.aend,
            self.alen,
            self.bstart,
            self.bend,
            self.blen,
            self.score,
            self.cigar(),
            self.length()
        )
    }
}

/// Removes the gaps from aligned symbols.
pub fn ungapped(aligned: &[u8]) -> Vec<u8> {
    aligned.iter().copied().filter(|&c| c != GAP).collect_vec()
}

#[cfg(test)]
pub mod tests {
    use rstest::rstest;

    use super::{format_blocks, ungapped, Alignment};
    use crate::align::aligners::constants::AlignmentOperation::{Del, Ins, Match, Subst};

    fn empty_alignment() -> Alignment {
        Alignment {
            alen: 10,
            blen: 7,
            ..Alignment::default()
        }
    }

    /// HEAGAWGHEE versus PAWHEAE
    fn gapped_alignment() -> Alignment {
        Alignment {
            score: 29,
            aligned_a: b"AWGHE-E".to_vec(),
            aligned_b: b"AW-HEAE".to_vec(),
            astart: 4,
            aend: 10,
            bstart: 1,
            bend: 7,
            alen: 10,
            blen: 7,
        }
    }

    #[rstest]
    fn test_empty() {
        let alignment = empty_alignment();
        alignment.validate();
        assert!(alignment.is_empty());
        assert_eq!(alignment.length(), 0);
        assert!(alignment.operations().is_empty());
        assert_eq!(alignment.cigar(), "");
        assert_eq!(alignment.num_identities(), 0);
        assert_eq!(alignment.num_gaps(), 0);
        assert!(alignment.identity_pct().abs() < f64::EPSILON);
        assert!(alignment.gaps_pct().abs() < f64::EPSILON);
        assert_eq!(alignment.format_blocks(60), "");
    }

    #[rstest]
    fn test_gapped() {
        let alignment = gapped_alignment();
        alignment.validate();
        assert!(!alignment.is_empty());
        assert_eq!(alignment.start_position(), (4, 1));
        assert_eq!(alignment.end_position(), (10, 7));
        assert_eq!(alignment.length(), 7);
        assert_eq!(
            alignment.operations(),
            vec![Match, Match, Ins, Match, Match, Del, Match]
        );
        assert_eq!(alignment.cigar(), "2=1I2=1D1=");
        assert_eq!(alignment.num_identities(), 5);
        assert_eq!(alignment.num_gaps(), 2);
        assert!((alignment.identity_pct() - 500.0 / 7.0).abs() < 1e-9);
        assert!((alignment.gaps_pct() - 200.0 / 7.0).abs() < 1e-9);
    }

    #[rstest]
    fn test_cigar_with_substitutions() {
        let alignment = Alignment {
            score: 9,
            aligned_a: b"KLMNP".to_vec(),
            aligned_b: b"KIMNA".to_vec(),
            astart: 0,
            aend: 5,
            bstart: 0,
            bend: 5,
            alen: 5,
            blen: 5,
        };
        alignment.validate();
        assert_eq!(
            alignment.operations(),
            vec![Match, Subst, Match, Match, Subst]
        );
        assert_eq!(alignment.cigar(), "1=1X2=1X");
    }

    #[rstest]
    #[should_panic(expected = "aend")]
    fn test_validate_bad_span() {
        let alignment = Alignment {
            aend: 9,
            ..gapped_alignment()
        };
        alignment.validate();
    }

    #[rstest]
    fn test_display() {
        assert_eq!(
            gapped_alignment().to_string(),
            "a-span: 4-10/10 b-span: 1-7/7 score: 29 cigar: 2=1I2=1D1= aln-len: 7"
        );
    }

    #[rstest]
    fn test_format_blocks_single_block() {
        assert_eq!(
            format_blocks(b"AWGHE-E", b"AW-HEAE", 60),
            "AWGHE-E\nAW-HEAE\n"
        );
    }

    #[rstest]
    fn test_format_blocks_multiple_blocks() {
        assert_eq!(
            format_blocks(b"AWGHE-E", b"AW-HEAE", 3),
            "AWG\nAW-\n\nHE-\nHEA\n\nE\nE\n"
        );
        assert_eq!(format_blocks(b"AWG", b"AW-", 3), "AWG\nAW-\n");
    }

    #[rstest]
    fn test_format_blocks_default_width() {
        let a = vec![b'A'; 130];
        let b = vec![b'W'; 130];
        let text = format_blocks(&a, &b, 60);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3 * 2 + 2);
        assert_eq!(lines[0].len(), 60);
        assert_eq!(lines[1], "W".repeat(60));
        assert_eq!(lines[2], "");
        assert_eq!(lines[6].len(), 10);
        assert_eq!(lines[7].len(), 10);
    }

    #[rstest]
    #[should_panic(expected = "width must be greater than zero")]
    fn test_format_blocks_zero_width() {
        format_blocks(b"A", b"A", 0);
    }

    #[rstest]
    fn test_ungapped() {
        assert_eq!(ungapped(b"AW-HEAE"), b"AWHEAE".to_vec());
        assert_eq!(ungapped(b"---"), Vec::<u8>::new());
    }
}

/// The symbol written in an aligned sequence opposite a symbol of the other sequence.
pub const GAP: u8 = b'-';

/// The default score of each gap position.
pub const DEFAULT_GAP_PENALTY: i32 = -2;

/// The default number of columns per line when displaying an alignment.
pub const DEFAULT_BLOCK_WIDTH: usize = 60;

/// Alignment operations are match, substitution, insertion and deletion.  The first sequence
/// (`a`) is treated as the query: an insertion consumes a symbol of `a` only, while a deletion
/// consumes a symbol of `b` only.
#[derive(Eq, PartialEq, Debug, Copy, Clone, Hash)]
pub enum AlignmentOperation {
    Match, // Consumes one a and one b symbol, which are identical
    Subst, // Consumes one a and one b symbol, which differ
    Ins,   // Consumes a single a symbol
    Del,   // Consumes a single b symbol
}

impl AlignmentOperation {
    /// Returns the operation for one column of an alignment, or `None` if both are gaps.
    pub fn from_column(a: u8, b: u8) -> Option<Self> {
        match (a == GAP, b == GAP) {
            (true, true) => None,
            (false, true) => Some(AlignmentOperation::Ins),
            (true, false) => Some(AlignmentOperation::Del),
            (false, false) if a.eq_ignore_ascii_case(&b) => Some(AlignmentOperation::Match),
            (false, false) => Some(AlignmentOperation::Subst),
        }
    }

    /// The CIGAR operator, using `=` and `X` for matches and substitutions.
    pub fn as_char(&self) -> char {
        match *self {
            AlignmentOperation::Match => '=',
            AlignmentOperation::Subst => 'X',
            AlignmentOperation::Ins => 'I',
            AlignmentOperation::Del => 'D',
        }
    }

    pub fn length_on_a(&self) -> usize {
        use crate::align::aligners::constants::AlignmentOperation::{Del, Ins, Match, Subst};
        match *self {
            Match | Subst | Ins => 1,
            Del => 0,
        }
    }

    pub fn length_on_b(&self) -> usize {
        use crate::align::aligners::constants::AlignmentOperation::{Del, Ins, Match, Subst};
        match *self {
            Match | Subst | Del => 1,
            Ins => 0,
        }
    }

    pub fn is_gap(&self) -> bool {
        matches!(self, AlignmentOperation::Ins | AlignmentOperation::Del)
    }
}

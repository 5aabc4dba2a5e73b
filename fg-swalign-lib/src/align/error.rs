use thiserror::Error;

/// Errors raised by the alignment engine.
///
/// These are recoverable: the caller decides whether to abort or to skip the offending input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AlignError {
    /// A symbol outside of the amino-acid alphabet was found.  The position is the 0-based offset
    /// in the sequence being encoded, when known.
    #[error("{}", unknown_symbol_message(.symbol, .position))]
    UnknownSymbol {
        symbol: char,
        position: Option<usize>,
    },

    /// The gap penalty is subtracted per gap position and so must not be positive.
    #[error("gap penalty must not be positive, found: {0}")]
    PositiveGapPenalty(i32),

    /// The scoring matrix for the two sequences cannot be allocated.
    #[error("cannot allocate a scoring matrix with {rows} rows and {cols} columns")]
    MatrixTooLarge { rows: usize, cols: usize },

    /// A cell score does not fit in an `i32`, as can happen with very large substitution scores.
    #[error("alignment score overflows at cell ({i}, {j})")]
    ScoreOverflow { i: usize, j: usize },
}

fn unknown_symbol_message(symbol: &char, position: &Option<usize>) -> String {
    match position {
        Some(position) => format!("unknown symbol '{symbol}' at position {position}"),
        None => format!("unknown symbol '{symbol}'"),
    }
}

impl AlignError {
    /// Sets the position of an [`AlignError::UnknownSymbol`]; other errors are returned as-is.
    pub(crate) fn at_position(self, position: usize) -> Self {
        match self {
            AlignError::UnknownSymbol { symbol, .. } => AlignError::UnknownSymbol {
                symbol,
                position: Some(position),
            },
            other => other,
        }
    }
}

#[cfg(test)]
pub mod tests {
    use rstest::rstest;

    use super::AlignError;

    #[rstest]
    #[case(AlignError::UnknownSymbol { symbol: 'J', position: None }, "unknown symbol 'J'")]
    #[case(
        AlignError::UnknownSymbol { symbol: 'O', position: Some(3) },
        "unknown symbol 'O' at position 3"
    )]
    #[case(
        AlignError::PositiveGapPenalty(2),
        "gap penalty must not be positive, found: 2"
    )]
    #[case(
        AlignError::MatrixTooLarge { rows: 3, cols: 4 },
        "cannot allocate a scoring matrix with 3 rows and 4 columns"
    )]
    #[case(
        AlignError::ScoreOverflow { i: 2, j: 5 },
        "alignment score overflows at cell (2, 5)"
    )]
    fn test_display(#[case] error: AlignError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    fn test_at_position() {
        let error = AlignError::UnknownSymbol {
            symbol: 'J',
            position: None,
        };
        assert_eq!(
            error.at_position(7),
            AlignError::UnknownSymbol {
                symbol: 'J',
                position: Some(7)
            }
        );
        assert_eq!(
            AlignError::PositiveGapPenalty(1).at_position(7),
            AlignError::PositiveGapPenalty(1)
        );
    }
}

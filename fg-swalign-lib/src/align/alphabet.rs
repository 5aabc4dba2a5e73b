use lazy_static::lazy_static;

use crate::align::error::AlignError;

/// The amino-acid alphabet, in the row/column order of NCBI substitution matrices.
pub const AMINO_ACIDS: [u8; 24] = *b"ARNDCQEGHILKMFPSTWYVBZX*";

/// The number of symbols in the alphabet, and so the dimension of a substitution table.
pub const ALPHABET_SIZE: usize = AMINO_ACIDS.len();

/// Marks a byte as not belonging to the alphabet in [`INDEX`].
const ABSENT: u8 = u8::MAX;

lazy_static! {
    /// An array-based look up of the alphabet index for each byte, for both upper and lower case.
    static ref INDEX: [u8; 256] = {
        let mut index = [ABSENT; 256];
        for (i, &symbol) in AMINO_ACIDS.iter().enumerate() {
            index[symbol as usize] = i as u8;
            index[symbol.to_ascii_lowercase() as usize] = i as u8;
        }
        index
    };
}

/// Returns the row/column index of the given symbol, or `None` if not in the alphabet.
#[inline(always)]
pub fn index(symbol: u8) -> Option<usize> {
    match INDEX[symbol as usize] {
        ABSENT => None,
        i => Some(i as usize),
    }
}

pub fn is_valid(symbol: u8) -> bool {
    index(symbol).is_some()
}

/// Returns the index of the given symbol, failing with [`AlignError::UnknownSymbol`] otherwise.
pub fn index_or_err(symbol: u8) -> Result<usize, AlignError> {
    index(symbol).ok_or(AlignError::UnknownSymbol {
        symbol: symbol as char,
        position: None,
    })
}

/// Converts a sequence to alphabet indexes.  Fails on the first symbol not in the alphabet.
pub fn encode(seq: &[u8]) -> Result<Vec<usize>, AlignError> {
    seq.iter()
        .enumerate()
        .map(|(position, &symbol)| index_or_err(symbol).map_err(|e| e.at_position(position)))
        .collect()
}

#[cfg(test)]
pub mod tests {
    use rstest::rstest;

    use super::{encode, index, is_valid, ALPHABET_SIZE, AMINO_ACIDS};
    use crate::align::error::AlignError;

    #[rstest]
    fn test_alphabet_size() {
        assert_eq!(ALPHABET_SIZE, 24);
    }

    #[rstest]
    fn test_index_of_every_symbol() {
        for (i, &symbol) in AMINO_ACIDS.iter().enumerate() {
            assert_eq!(index(symbol), Some(i), "{}", symbol as char);
        }
    }

    #[rstest]
    #[case(b'A', Some(0))]
    #[case(b'a', Some(0))]
    #[case(b'r', Some(1))]
    #[case(b'V', Some(19))]
    #[case(b'*', Some(23))]
    #[case(b'J', None)]
    #[case(b'O', None)]
    #[case(b'U', None)]
    #[case(b'-', None)]
    #[case(b' ', None)]
    #[case(b'1', None)]
    fn test_index(#[case] symbol: u8, #[case] expected: Option<usize>) {
        assert_eq!(index(symbol), expected);
        assert_eq!(is_valid(symbol), expected.is_some());
    }

    #[rstest]
    fn test_encode() {
        assert_eq!(encode(b"").unwrap(), Vec::<usize>::new());
        assert_eq!(encode(b"ARNd*").unwrap(), vec![0, 1, 2, 3, 23]);
    }

    #[rstest]
    fn test_encode_unknown_symbol() {
        assert_eq!(
            encode(b"ARJN"),
            Err(AlignError::UnknownSymbol {
                symbol: 'J',
                position: Some(2)
            })
        );
    }
}

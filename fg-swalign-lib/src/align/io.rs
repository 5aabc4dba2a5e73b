use std::{io::BufRead, path::Path};

use anyhow::{bail, ensure, Context, Result};
use fgoxide::io::Io;

use crate::align::{
    alphabet::{index, ALPHABET_SIZE, AMINO_ACIDS},
    substitution::SubstitutionTable,
};

/// The buffer size used when reading inputs.
pub const BUFFER_SIZE: usize = 1024 * 1024;

/// Lines beginning with this byte are sequence headers.
pub const HEADER_PREFIX: u8 = b'>';

/// Lines beginning with this character are comments in a substitution matrix file.
pub const COMMENT_PREFIX: char = '#';

fn new_io() -> Io {
    Io::new(5, BUFFER_SIZE)
}

/// Reads a protein sequence from a FASTA-like file, which may be GZIP compressed.
///
/// Header lines (beginning with `>`) are skipped, and the alphabetic symbols (and `*`) on all
/// other lines are concatenated and upper-cased.  Everything else, including whitespace, is
/// dropped.  Multiple records are concatenated into one sequence.
pub fn read_sequence<P: AsRef<Path>>(path: &P) -> Result<Vec<u8>> {
    let path = path.as_ref();
    let reader = new_io()
        .new_reader(&path.to_path_buf())
        .with_context(|| format!("Error opening sequence file: {}", path.display()))?;

    let mut seq: Vec<u8> = Vec::new();
    for line in reader.split(b'\n') {
        let line =
            line.with_context(|| format!("Error reading sequence file: {}", path.display()))?;
        if line.first() == Some(&HEADER_PREFIX) {
            continue;
        }
        seq.extend(
            line.iter()
                .filter(|b| b.is_ascii_alphabetic() || **b == b'*')
                .map(u8::to_ascii_uppercase),
        );
    }
    Ok(seq)
}

/// Reads a substitution matrix in the NCBI text format, which may be GZIP compressed.  The table is
/// named after the file stem.  See [`parse_substitution_matrix`] for the format.
pub fn read_substitution_matrix<P: AsRef<Path>>(path: &P) -> Result<SubstitutionTable> {
    let path = path.as_ref();
    let reader = new_io()
        .new_reader(&path.to_path_buf())
        .with_context(|| format!("Error opening substitution matrix: {}", path.display()))?;
    let lines: Vec<String> = reader
        .lines()
        .collect::<std::io::Result<Vec<String>>>()
        .with_context(|| format!("Error reading substitution matrix: {}", path.display()))?;
    let name = path
        .file_stem()
        .map_or_else(|| "custom".to_string(), |s| s.to_string_lossy().to_string());
    parse_substitution_matrix(&name, lines)
        .with_context(|| format!("Invalid substitution matrix: {}", path.display()))
}

/// Returns the alphabet index of a row or column label, or `None` if not in the alphabet.
fn label_index(label: &str, line_number: usize) -> Result<Option<usize>> {
    match label.as_bytes() {
        [symbol] => Ok(index(*symbol)),
        _ => bail!("Invalid label '{label}' on line {line_number}"),
    }
}

/// Parses a substitution matrix in the NCBI text format:
///
/// ```text
/// # comments and blank lines are skipped
///    A  R  N ...
/// A  4 -1 -2 ...
/// R -1  5  0 ...
/// ```
///
/// The first line that is neither blank nor a comment holds the column labels, and every following
/// line a row label and one score per column.  Rows and columns may be in any order, and labels not
/// in the amino-acid alphabet are ignored, but every symbol in the alphabet must have both a row and
/// a column.
pub fn parse_substitution_matrix<I, S>(name: &str, lines: I) -> Result<SubstitutionTable>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut lines = lines
        .into_iter()
        .enumerate()
        .map(|(offset, line)| (offset + 1, line))
        .filter(|(_, line)| {
            let line = line.as_ref().trim();
            !line.is_empty() && !line.starts_with(COMMENT_PREFIX)
        });

    let (header_number, header) = lines
        .next()
        .context("Found no column labels in the substitution matrix")?;
    let columns: Vec<Option<usize>> = header
        .as_ref()
        .split_whitespace()
        .map(|label| label_index(label, header_number))
        .collect::<Result<_>>()?;

    let mut seen_columns = [false; ALPHABET_SIZE];
    for &column in columns.iter().flatten() {
        ensure!(
            !seen_columns[column],
            "Duplicate column '{}' on line {header_number}",
            AMINO_ACIDS[column] as char
        );
        seen_columns[column] = true;
    }

    let mut scores = vec![0; ALPHABET_SIZE * ALPHABET_SIZE];
    let mut seen_rows = [false; ALPHABET_SIZE];
    for (line_number, line) in lines {
        let mut fields = line.as_ref().split_whitespace();
        let label = fields.next().context("Bug: blank lines are skipped")?;
        let values: Vec<i32> = fields
            .map(|field| {
                field
                    .parse::<i32>()
                    .with_context(|| format!("Invalid score '{field}' on line {line_number}"))
            })
            .collect::<Result<_>>()?;
        ensure!(
            values.len() == columns.len(),
            "Expected {} scores on line {line_number}, found {}",
            columns.len(),
            values.len()
        );
        if let Some(row) = label_index(label, line_number)? {
            ensure!(
                !seen_rows[row],
                "Duplicate row '{label}' on line {line_number}"
            );
            seen_rows[row] = true;
            for (column, value) in columns.iter().zip(values) {
                if let Some(column) = column {
                    scores[row * ALPHABET_SIZE + column] = value;
                }
            }
        }
    }

    for (i, &symbol) in AMINO_ACIDS.iter().enumerate() {
        ensure!(
            seen_columns[i],
            "Missing column for '{}' in the substitution matrix",
            symbol as char
        );
        ensure!(
            seen_rows[i],
            "Missing row for '{}' in the substitution matrix",
            symbol as char
        );
    }

    Ok(SubstitutionTable::new(name, scores))
}

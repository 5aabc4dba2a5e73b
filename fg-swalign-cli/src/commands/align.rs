use super::command::Command;
use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};
use std::{
    io,
    io::Write,
    path::{Path, PathBuf},
};
use swalign::{
    align::{
        io::{read_sequence, read_substitution_matrix},
        Alignment, Builder, SubstitutionTable,
    },
    util::version::version,
};

/// Finds the best local alignment between two protein sequences.
///
/// The alignment is the Smith-Waterman local alignment with a linear gap penalty: every position
/// aligned against a gap scores `--gap-penalty`, and every pair of aligned amino acids scores
/// the value in the substitution matrix.  The best scoring alignment is reported; when no
/// alignment scores positively, the alignment is empty with a score of zero.
///
/// Each sequence file is FASTA-like: lines starting with `>` are ignored and the letters on all
/// other lines are concatenated.  Files may be GZIP compressed.
///
/// ## Substitution matrix
///
/// The substitution matrix is BLOSUM62 unless `--matrix` is given, in which case it is read from a
/// file in the NCBI text format (e.g. as distributed with BLAST), with rows and columns for the
/// symbols `ARNDCQEGHILKMFPSTWYVBZX*`.
#[derive(Parser, Debug, Clone)]
#[clap(version = version(), term_width=0)]
pub struct Align {
    /// The path to the first protein sequence.
    #[clap(long, short = 'a', default_value = "seq1.txt", display_order = 1)]
    seq_a: PathBuf,

    /// The path to the second protein sequence.
    #[clap(long, short = 'b', default_value = "seq2.txt", display_order = 2)]
    seq_b: PathBuf,

    /// The path to the substitution matrix, otherwise BLOSUM62 is used.
    #[clap(long, short = 'm', display_order = 3)]
    matrix: Option<PathBuf>,

    /// Score for each gap position (must not be positive).
    #[clap(
        long,
        short = 'g',
        default_value = "-2",
        allow_hyphen_values = true,
        display_order = 4
    )]
    gap_penalty: i32,

    /// The number of columns per line when displaying the alignment.
    #[clap(long, short = 'w', default_value = "60", display_order = 5)]
    width: usize,
}

impl Align {
    /// Executes the align command, writing the alignment to the given writer.
    pub fn run<W: Write>(&self, writer: &mut W) -> Result<()> {
        info!("Starting alignment...");
        let table = match &self.matrix {
            Some(path) => {
                info!("Reading substitution matrix from {}", path.display());
                read_substitution_matrix(path)?
            }
            None => SubstitutionTable::blosum62(),
        };
        info!("Using the {} substitution matrix", table.name());

        let seq_a = self.read_sequence(&self.seq_a)?;
        let seq_b = self.read_sequence(&self.seq_b)?;

        let mut builder = Builder::default();
        builder.gap_penalty(self.gap_penalty).block_width(self.width);
        let aligner = builder.build_aligner(&table)?;
        info!("Aligning with gap penalty {}", self.gap_penalty);
        debug!(
            "Scoring matrix has {} rows and {} columns",
            seq_a.len() + 1,
            seq_b.len() + 1
        );

        let alignment = aligner
            .align(&seq_a, &seq_b)
            .context("Error aligning sequences")?;
        info!("Found alignment: {alignment}");

        write_report(writer, &alignment, table.name(), self.gap_penalty)?;
        writeln!(writer)?;
        write!(writer, "{}", aligner.format_blocks(&alignment))?;
        writer.flush()?;

        info!("Done.");
        Ok(())
    }

    fn read_sequence(&self, path: &Path) -> Result<Vec<u8>> {
        info!("Reading sequence from {}", path.display());
        let seq = read_sequence(&path)?;
        info!("Read {} amino acids from {}", seq.len(), path.display());
        Ok(seq)
    }
}

/// Writes the summary of the alignment, one `key: value` per line.
fn write_report<W: Write>(
    writer: &mut W,
    alignment: &Alignment,
    matrix_name: &str,
    gap_penalty: i32,
) -> io::Result<()> {
    let length = alignment.length();
    writeln!(writer, "Matrix:      {matrix_name}")?;
    writeln!(writer, "Gap penalty: {gap_penalty}")?;
    writeln!(writer, "Length:      {length}")?;
    writeln!(
        writer,
        "Identity:    {}/{length} ({:.1}%)",
        alignment.num_identities(),
        alignment.identity_pct()
    )?;
    writeln!(
        writer,
        "Gaps:        {}/{length} ({:.1}%)",
        alignment.num_gaps(),
        alignment.gaps_pct()
    )?;
    writeln!(writer, "Score:       {}", alignment.score)?;
    writeln!(
        writer,
        "Span A:      {}-{}/{}",
        alignment.astart, alignment.aend, alignment.alen
    )?;
    writeln!(
        writer,
        "Span B:      {}-{}/{}",
        alignment.bstart, alignment.bend, alignment.blen
    )?;
    writeln!(writer, "CIGAR:       {}", alignment.cigar())
}

impl Command for Align {
    fn execute(&self) -> anyhow::Result<()> {
        let mut stdout = io::stdout().lock();
        self.run(&mut stdout)
    }
}

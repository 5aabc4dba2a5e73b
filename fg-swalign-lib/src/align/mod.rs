pub mod aligners;
pub mod alignment;
pub mod alphabet;
pub mod error;
pub mod io;
pub mod scoring;
pub mod substitution;
pub mod traceback;

pub use aligners::{align, Aligner, Builder, Options};
pub use alignment::{format_blocks, Alignment};
pub use error::AlignError;
pub use substitution::SubstitutionTable;

//! Word frequency counting: read a text file, tokenize it, print the top N.
mod cli;
mod count_types;
mod error;
mod logging;
mod reader;
mod report;
mod wc;

pub use cli::{Args, RunConfig, DEFAULT_TOP_N};
pub use count_types::WordCounts;
pub use error::WordCountError;
pub use logging::{initialize as initialize_logging, initialize_for_tests};
pub use reader::read_lowercased;
pub use report::{display_word_counts, NO_WORDS_MESSAGE};
pub use wc::{count_words, count_words_in_file, tokenize};

use std::io::Write;

/// Count the configured file and write its report to `out`.
///
/// A missing input file is announced on `out` before the error propagates.
pub fn run<W: Write>(config: &RunConfig, out: &mut W) -> anyhow::Result<()> {
    let counts = match count_words_in_file(&config.filepath) {
        Ok(counts) => counts,
        Err(err @ WordCountError::FileNotFound { .. }) => {
            writeln!(
                out,
                "Error: file '{}' was not found.",
                config.filepath.display()
            )?;
            return Err(err.into());
        }
        Err(err) => return Err(err.into()),
    };
    display_word_counts(&counts, config.top_n, out)?;
    Ok(())
}

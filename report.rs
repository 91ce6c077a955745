use std::io::{self, Write};

use crate::count_types::WordCounts;

pub const NO_WORDS_MESSAGE: &str = "No words were counted.";

/// Print the `top_n` most frequent tokens as `token: count` lines.
///
/// An empty mapping prints only [`NO_WORDS_MESSAGE`]. The header names the
/// requested count even when fewer tokens exist.
pub fn display_word_counts<W: Write>(
    counts: &WordCounts,
    top_n: usize,
    out: &mut W,
) -> io::Result<()> {
    if counts.is_empty() {
        writeln!(out, "{NO_WORDS_MESSAGE}")?;
        return Ok(());
    }

    writeln!(out, "\n--- Top {top_n} word frequencies ---")?;
    for (word, count) in counts.ranked().into_iter().take(top_n) {
        writeln!(out, "{word}: {count}")?;
    }
    out.flush()
}

use std::path::Path;

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::count_types::WordCounts;
use crate::error::WordCountError;
use crate::reader::read_lowercased;

// 英数字、ひらがな、カタカナを単語として認識
static TOKEN_RUN_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[\p{L}\p{N}_\u3040-\u309F\u30A0-\u30FF]+").expect("token pattern compiles")
});
// Word characters: letters, any numeric (including ² and ①) and underscore.
static WORD_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\p{L}\p{N}_]+").expect("word pattern compiles"));

/// Tokens of `text` in the order they appear.
///
/// A token must start and end on a word boundary. Kana-range characters that
/// are not word characters (such as `・`) never sit on a boundary, so they
/// are trimmed from the edges of each run and kept only inside it.
pub fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    TOKEN_RUN_REGEX
        .find_iter(text)
        .filter_map(|m| trim_to_word_chars(m.as_str()))
}

fn trim_to_word_chars(run: &str) -> Option<&str> {
    let mut words = WORD_REGEX.find_iter(run);
    let first = words.next()?;
    let last = words.last().unwrap_or(first);
    Some(&run[first.start()..last.end()])
}

/// Count every token of already lower-cased text.
pub fn count_words(text: &str) -> WordCounts {
    tokenize(text).collect()
}

/// Read `path` and count its words.
pub fn count_words_in_file(path: &Path) -> Result<WordCounts, WordCountError> {
    let text = read_lowercased(path)?;
    let counts = count_words(&text);
    debug!(
        "{}: {} tokens, {} distinct",
        path.display(),
        counts.total(),
        counts.len()
    );
    Ok(counts)
}

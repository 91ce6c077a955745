use std::path::PathBuf;

use clap::Parser;

pub const DEFAULT_TOP_N: usize = 10;

/// Count word frequencies in a text file.
#[derive(Parser, Debug)]
#[command(name = "word-freq", version, about)]
pub struct Args {
    /// Path to the text file to analyze
    pub filepath: PathBuf,

    /// Number of top words to display (negative values are rejected)
    #[arg(short = 'n', long = "top_n", default_value_t = DEFAULT_TOP_N)]
    pub top_n: usize,
}

/// Settings for one run of the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub filepath: PathBuf,
    pub top_n: usize,
}

impl From<Args> for RunConfig {
    fn from(args: Args) -> Self {
        Self {
            filepath: args.filepath,
            top_n: args.top_n,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Result<RunConfig, clap::Error> {
        Args::try_parse_from(argv).map(RunConfig::from)
    }

    #[test]
    fn top_n_defaults_to_ten() {
        let config = parse(&["word-freq", "input.txt"]).unwrap();
        assert_eq!(config.filepath, PathBuf::from("input.txt"));
        assert_eq!(config.top_n, 10);
    }

    #[test]
    fn short_and_long_top_n() {
        assert_eq!(parse(&["word-freq", "a.txt", "-n", "3"]).unwrap().top_n, 3);
        assert_eq!(parse(&["word-freq", "--top_n", "7", "a.txt"]).unwrap().top_n, 7);
    }

    #[test]
    fn rejects_bad_arguments() {
        assert!(parse(&["word-freq"]).is_err());
        assert!(parse(&["word-freq", "a.txt", "-n", "-1"]).is_err());
        assert!(parse(&["word-freq", "a.txt", "-n", "many"]).is_err());
    }
}

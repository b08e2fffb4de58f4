//! Command-line argument definitions for the Ordbok CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Data locations default to the `[paths]` section of the
//! configuration file when not given here.

use std::path::PathBuf;

use clap::Parser;

/// Command-line arguments for the Ordbok article renderer
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Ids of the articles to render
    #[arg(required = true, value_name = "ARTICLE_IDS")]
    pub article_ids: Vec<u64>,

    /// Directory holding `{id}.json` article documents
    #[arg(long)]
    pub articles_dir: Option<PathBuf>,

    /// Directory receiving `{id}.html` entries, created if missing
    #[arg(long)]
    pub entries_dir: Option<PathBuf>,

    /// Path to the concept table (JSON)
    #[arg(long)]
    pub concepts: Option<PathBuf>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_command_is_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_ids_and_overrides() {
        let args = Args::try_parse_from([
            "ordbok",
            "--entries-dir",
            "out",
            "--log-level",
            "debug",
            "12",
            "4242",
        ])
        .unwrap();

        assert_eq!(args.article_ids, [12, 4242]);
        assert_eq!(args.entries_dir, Some(PathBuf::from("out")));
        assert_eq!(args.articles_dir, None);
        assert_eq!(args.log_level, "debug");
    }

    #[test]
    fn test_ids_are_required() {
        assert!(Args::try_parse_from(["ordbok"]).is_err());
    }

    #[test]
    fn test_ids_must_be_numbers() {
        assert!(Args::try_parse_from(["ordbok", "foo"]).is_err());
    }
}

//! moyu - Entry Point

use clap::{CommandFactory, Parser};
use moyu::model::ContentIdentity;
use moyu::persistence::ProgressStore;
use moyu::state::Reader;
use moyu::view::{ColorConfig, DecoyFeed, SessionOptions};
use std::path::PathBuf;
use tracing::info;

/// moyu - read a text file a few lines at a time, disguised as log output
#[derive(Parser, Debug)]
#[command(name = "moyu")]
#[command(version)]
#[command(about = "Paginated terminal reader disguised as a diagnostics console")]
pub struct Args {
    /// Path to the text file to read
    pub content: Option<PathBuf>,

    /// Optional file of decoy log lines shown above the status line
    pub feed: Option<PathBuf>,

    /// Initial reading pane height when no progress is recorded (1-12)
    #[arg(long, value_parser = clap::value_parser!(u16).range(1..=12))]
    pub height: Option<u16>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Nothing to read: show usage and leave successfully
    let Some(content) = args.content.clone() else {
        Args::command().print_help()?;
        println!();
        return Ok(());
    };

    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = moyu::config::load_config_with_precedence(args.config.clone())?;
        let merged = moyu::config::merge_config(config_file);
        let with_env = moyu::config::apply_env_overrides(merged);
        moyu::config::apply_cli_overrides(with_env, args.height)
    };

    // Guard flushes buffered log records on drop
    let _log_guard = moyu::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    let identity = ContentIdentity::resolve(&content);
    let store = ProgressStore::new(&config.progress_file);
    let mut progress_map = store.load();

    let raw_lines = moyu::source::load_content(&content);
    let width = crossterm::terminal::size()
        .map(|(width, _)| width)
        .unwrap_or(80);

    let mut reader = Reader::new(raw_lines, width).with_view_height(config.view_height);
    if let Some(progress) = progress_map.get(&identity) {
        reader.restore(*progress);
    }
    info!(
        identity = %identity,
        fragments = reader.fragments().len(),
        current = reader.current(),
        view_height = reader.view_height(),
        "Session starting"
    );

    let feed = args
        .feed
        .as_deref()
        .map(DecoyFeed::from_file)
        .unwrap_or_default();

    let options = SessionOptions {
        feed_advance_chance: config.feed_advance_chance,
        colors: ColorConfig::from_env_and_args(args.no_color),
    };

    let progress = moyu::view::run_session(reader, feed, options)?;
    store.save(&identity, progress, &mut progress_map);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_help_does_not_error() {
        // Help returns Err with DisplayHelp, which is success
        let result = Args::try_parse_from(["moyu", "--help"]);
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_version_does_not_error() {
        let err = Args::try_parse_from(["moyu", "--version"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_no_args_defaults() {
        let args = Args::parse_from(["moyu"]);
        assert_eq!(args.content, None);
        assert_eq!(args.feed, None);
        assert_eq!(args.height, None);
        assert!(!args.no_color);
        assert_eq!(args.config, None);
    }

    #[test]
    fn test_positional_content_and_feed() {
        let args = Args::parse_from(["moyu", "book.txt", "decoy.log"]);
        assert_eq!(args.content, Some(PathBuf::from("book.txt")));
        assert_eq!(args.feed, Some(PathBuf::from("decoy.log")));
    }

    #[test]
    fn test_content_only() {
        let args = Args::parse_from(["moyu", "book.txt"]);
        assert_eq!(args.content, Some(PathBuf::from("book.txt")));
        assert_eq!(args.feed, None);
    }

    #[test]
    fn test_height_accepts_range_bounds() {
        assert_eq!(Args::parse_from(["moyu", "--height", "1"]).height, Some(1));
        assert_eq!(Args::parse_from(["moyu", "--height", "12"]).height, Some(12));
    }

    #[test]
    fn test_height_rejects_zero() {
        let err = Args::try_parse_from(["moyu", "--height", "0"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn test_height_rejects_above_twelve() {
        let err = Args::try_parse_from(["moyu", "--height", "13"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn test_no_color_flag() {
        assert!(Args::parse_from(["moyu", "--no-color"]).no_color);
    }

    #[test]
    fn test_config_path() {
        let args = Args::parse_from(["moyu", "--config", "/custom/config.toml"]);
        assert_eq!(args.config, Some(PathBuf::from("/custom/config.toml")));
    }

    #[test]
    fn test_combined_flags() {
        let args = Args::parse_from([
            "moyu",
            "--height",
            "6",
            "book.txt",
            "--no-color",
            "feed.log",
        ]);
        assert_eq!(args.content, Some(PathBuf::from("book.txt")));
        assert_eq!(args.feed, Some(PathBuf::from("feed.log")));
        assert_eq!(args.height, Some(6));
        assert!(args.no_color);
    }

    #[test]
    fn test_height_flows_through_config_precedence_chain() {
        use moyu::config::{ConfigFile, apply_cli_overrides, merge_config};

        let merged = merge_config(Some(ConfigFile {
            view_height: Some(8),
            ..ConfigFile::default()
        }));
        assert_eq!(merged.view_height, 8, "Config file should override default");

        let with_cli = apply_cli_overrides(merged, Some(2));
        assert_eq!(
            with_cli.view_height, 2,
            "CLI height should override all other sources"
        );
    }
}

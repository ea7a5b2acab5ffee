use std::ffi::OsString;
use std::path::PathBuf;

use clap::{CommandFactory, Parser};
use colored::Colorize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use sharedconf::commands;

#[derive(Parser, Debug)]
#[command(
    name = "sharedconf",
    version,
    about = "Copy shared configuration files into your project",
    long_about = "Copies the bundled shared configuration files and directories into a project, \
                  asking before each one unless --yes is given."
)]
struct Cli {
    /// Items to copy from the shared directory (default: everything)
    items: Vec<String>,

    /// Copy without prompting
    #[arg(short, long)]
    yes: bool,

    /// Directory to copy into (default: current directory)
    #[arg(short, long, value_name = "DIR")]
    target: Option<PathBuf>,

    /// Use a different shared directory
    #[arg(long, value_name = "DIR")]
    source: Option<PathBuf>,

    /// Only copy files, skip directories
    #[arg(long)]
    files_only: bool,

    /// List the shared items instead of copying
    #[arg(short, long)]
    list: bool,

    /// Print the copied paths (or the listing) as JSON
    #[arg(long)]
    json: bool,

    /// Show the resolved configuration
    #[arg(long)]
    show_config: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

/// Drop dash-prefixed arguments the CLI does not define.
///
/// Returns the arguments to parse and the ones that were dropped.
fn split_known_args<I, T>(args: I, command: &clap::Command) -> (Vec<OsString>, Vec<OsString>)
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut longs = vec!["help".to_string(), "version".to_string()];
    // (flag, takes a value)
    let mut shorts = vec![('h', false), ('V', false)];
    for arg in command.get_arguments() {
        if let Some(long) = arg.get_long() {
            longs.push(long.to_string());
        }
        if let Some(short) = arg.get_short() {
            shorts.push((short, arg.get_action().takes_values()));
        }
    }

    let mut kept = Vec::new();
    let mut dropped = Vec::new();
    let mut after_separator = false;

    for (idx, arg) in args.into_iter().map(Into::into).enumerate() {
        // argv[0], anything after `--`, and plain values pass through
        let keep = {
            let text = arg.to_string_lossy();
            if idx == 0 || after_separator || !text.starts_with('-') || text == "-" {
                true
            } else if text == "--" {
                after_separator = true;
                true
            } else if let Some(long) = text.strip_prefix("--") {
                let name = long.split('=').next().unwrap_or(long);
                longs.iter().any(|l| l == name)
            } else {
                is_known_short_cluster(&text[1..], &shorts)
            }
        };

        if keep {
            kept.push(arg);
        } else {
            dropped.push(arg);
        }
    }

    (kept, dropped)
}

/// A cluster like `-yv` is known only if every flag in it is. Once a flag that
/// takes a value is reached, the rest of the cluster is its value (`-t/tmp`).
fn is_known_short_cluster(cluster: &str, shorts: &[(char, bool)]) -> bool {
    for c in cluster.chars() {
        match shorts.iter().find(|(short, _)| *short == c) {
            Some((_, true)) => return true,
            Some((_, false)) => {}
            None => return false,
        }
    }
    !cluster.is_empty()
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "sharedconf=debug" } else { "off" };
    let filter = EnvFilter::try_from_env("SHAREDCONF_LOG")
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn main() {
    let (args, ignored) = split_known_args(std::env::args_os(), &Cli::command());
    let cli = Cli::parse_from(args);

    init_tracing(cli.verbose);
    for arg in &ignored {
        debug!(arg = %arg.to_string_lossy(), "Ignoring unrecognized flag");
    }

    // The only place the ambient working directory is consulted
    let target = match cli.target.clone() {
        Some(dir) => dir,
        None => match std::env::current_dir() {
            Ok(dir) => dir,
            Err(e) => {
                eprintln!("{}", format!("Cannot determine current directory: {e}").red());
                std::process::exit(1);
            }
        },
    };

    if cli.show_config {
        if let Err(e) = commands::config::run(&target, cli.source.as_deref()) {
            eprintln!("Config error: {}", e);
            std::process::exit(1);
        }
        return;
    }

    if cli.list {
        if let Err(e) =
            commands::list::run(&target, cli.source.as_deref(), cli.files_only, cli.json)
        {
            eprintln!("{}", format!("List error: {e}").red());
            std::process::exit(1);
        }
        return;
    }

    let options = commands::copy::CopyOptions {
        items: &cli.items,
        target_dir: &target,
        source: cli.source.as_deref(),
        yes: cli.yes,
        files_only: cli.files_only,
    };
    let copied = match commands::copy::run(options) {
        Ok(copied) => copied,
        Err(e) => {
            eprintln!("{}", format!("Error: {e}").red());
            std::process::exit(1);
        }
    };

    if cli.json {
        match commands::copy::paths_to_json(&copied) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("{}", format!("Error: {e}").red());
                std::process::exit(1);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(args: &[&str]) -> (Vec<String>, Vec<String>) {
        let (kept, dropped) = split_known_args(args.iter().copied(), &Cli::command());
        let to_strings = |v: Vec<OsString>| {
            v.into_iter()
                .map(|s| s.to_string_lossy().to_string())
                .collect::<Vec<_>>()
        };
        (to_strings(kept), to_strings(dropped))
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_unknown_flags_are_dropped() {
        let (kept, dropped) = split(&["sharedconf", "--force", "biome.json", "-x", ".prettierrc"]);
        assert_eq!(kept, ["sharedconf", "biome.json", ".prettierrc"]);
        assert_eq!(dropped, ["--force", "-x"]);
    }

    #[test]
    fn test_known_flags_survive() {
        let (kept, dropped) = split(&[
            "sharedconf",
            "-y",
            "--target=/tmp/project",
            "--files-only",
            "-v",
            "tsconfig.json",
        ]);
        assert_eq!(
            kept,
            [
                "sharedconf",
                "-y",
                "--target=/tmp/project",
                "--files-only",
                "-v",
                "tsconfig.json"
            ]
        );
        assert!(dropped.is_empty());
    }

    #[test]
    fn test_items_after_separator_are_kept() {
        let (kept, dropped) = split(&["sharedconf", "--", "-weird-name"]);
        assert_eq!(kept, ["sharedconf", "--", "-weird-name"]);
        assert!(dropped.is_empty());
    }

    #[test]
    fn test_parse_items_and_flags() {
        let (args, _) = split_known_args(
            ["sharedconf", "--unknown", "-y", "biome.json", ".cursor"],
            &Cli::command(),
        );
        let cli = Cli::parse_from(args);
        assert!(cli.yes);
        assert_eq!(cli.items, ["biome.json", ".cursor"]);
        assert!(cli.target.is_none());
    }

    #[test]
    fn test_json_on_copy_and_list() {
        let cli = Cli::try_parse_from(["sharedconf", "-y", "--json", "biome.json"]).unwrap();
        assert!(cli.json);
        assert!(!cli.list);
        assert_eq!(cli.items, ["biome.json"]);

        let cli = Cli::try_parse_from(["sharedconf", "--list", "--json"]).unwrap();
        assert!(cli.json && cli.list);
    }

    #[test]
    fn test_short_clusters_need_every_flag_known() {
        let (kept, dropped) = split(&["sharedconf", "-yx", "-yv", "biome.json"]);
        assert_eq!(kept, ["sharedconf", "-yv", "biome.json"]);
        assert_eq!(dropped, ["-yx"]);

        let (args, _) = split_known_args(["sharedconf", "-yx", "biome.json"], &Cli::command());
        let cli = Cli::try_parse_from(args).unwrap();
        assert!(!cli.yes);
        assert_eq!(cli.items, ["biome.json"]);
    }

    #[test]
    fn test_short_cluster_with_attached_value() {
        let (kept, dropped) = split(&["sharedconf", "-yt/tmp/project"]);
        assert_eq!(kept, ["sharedconf", "-yt/tmp/project"]);
        assert!(dropped.is_empty());

        let (args, _) = split_known_args(["sharedconf", "-yt/tmp/project"], &Cli::command());
        let cli = Cli::try_parse_from(args).unwrap();
        assert!(cli.yes);
        assert_eq!(cli.target, Some(PathBuf::from("/tmp/project")));
    }
}

//! Axion - terminal front-end for the document session
//!
//! Entry point. Handles CLI argument parsing, logging initialization,
//! configuration loading, and renders the shell once.

use anyhow::{bail, Context};
use axion_editor::config::Config;
use axion_editor::sample::{sample_session, sample_tree};
use axion_editor::state::{DocumentDescriptor, Session};
use axion_editor::ui::{self, FileTree, SessionSnapshot};
use std::path::PathBuf;

/// Application name for logging
const APP_NAME: &str = "axion";

/// Parsed command line
#[derive(Debug, Default, PartialEq)]
struct Flags {
    help: bool,
    version: bool,
    /// Start without the sample workspace
    empty: bool,
    /// Print a JSON snapshot instead of the text shell
    json: bool,
    /// Print the file explorer above the shell
    explorer: bool,
    /// Explicit configuration file
    config: Option<PathBuf>,
    /// Documents to open, by logical path
    files: Vec<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    init_logging();

    let flags = parse_args(std::env::args().skip(1))?;
    if flags.help {
        print_help();
        return Ok(());
    }
    if flags.version {
        println!("{} {}", APP_NAME, env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    log::info!("Starting Axion");

    let config = match &flags.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("loading configuration from {}", path.display()))?,
        None => Config::load().unwrap_or_else(|e| {
            log::warn!("{}", e.user_message());
            Config::default()
        }),
    };

    let mut tree = sample_tree();
    let session = build_session(&flags, &config, &mut tree);

    if flags.json {
        let json = SessionSnapshot::from_session(&session)
            .to_json()
            .context("rendering session snapshot")?;
        println!("{}", json);
    } else {
        if flags.explorer {
            println!("{}\n", tree.render());
        }
        println!("{}", ui::view(&session, &config.ui));
    }

    Ok(())
}

/// Initialize the logging system
fn init_logging() {
    // Set default log level if not specified
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info,axion_editor=debug");
    }

    env_logger::Builder::from_default_env()
        .format_timestamp_millis()
        .init();
}

/// Seed the session and open the documents named on the command line
///
/// Paths found in the explorer are clicked there, so files get selected
/// and folders toggle; anything else opens directly.
fn build_session(flags: &Flags, config: &Config, tree: &mut FileTree) -> Session {
    let mut session = if flags.empty || !config.session.seed_sample {
        Session::with_config(&config.session)
    } else {
        sample_session(&config.session)
    };

    for path in &flags.files {
        let logical = path.to_string_lossy();
        if !tree.contains(&logical) {
            session.open(DocumentDescriptor::for_path(path));
        } else if let Some(message) = tree.click(&logical) {
            session.update(message.into());
        }
    }

    log::debug!(
        "Session ready with {} documents, {} modified",
        session.len(),
        session.modified_count()
    );
    session
}

/// Parse command line arguments
fn parse_args(args: impl IntoIterator<Item = String>) -> anyhow::Result<Flags> {
    let mut flags = Flags::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => flags.help = true,
            "-v" | "--version" => flags.version = true,
            "--empty" => flags.empty = true,
            "--json" => flags.json = true,
            "--explorer" => flags.explorer = true,
            "-c" | "--config" => match args.next() {
                Some(path) => flags.config = Some(PathBuf::from(path)),
                None => bail!("--config requires a path argument"),
            },
            other if other.starts_with('-') => {
                bail!(
                    "Unknown option: {}\nUse --help for usage information",
                    other
                )
            }
            _ => flags.files.push(PathBuf::from(&arg)),
        }
    }

    Ok(flags)
}

/// Print help message
fn print_help() {
    println!(
        r#"Axion - code editor shell

USAGE:
    axion [OPTIONS] [FILES...]

OPTIONS:
    -h, --help          Show this help message
    -v, --version       Show version information
    -c, --config PATH   Read configuration from PATH
        --empty         Start without the sample workspace
        --json          Print the session as JSON
        --explorer      Show the file explorer above the shell

FILES are opened as new tabs; their language is taken from the extension.
Paths in the sample explorer are opened through it. Nothing is read from disk.
"#
    );
}

//! CLI for looking up sound files on a music box storage card.
//!
//! ## Usage
//!
//! ```bash
//! # List the symbolic sounds in both folders
//! soundfiles list
//!
//! # Path of announcement number 12 in the mp3 folder
//! soundfiles path mp3 12
//!
//! # Path of a symbolic sound below a mounted card
//! soundfiles path advert FREEZE_INTRO --root /media/sd
//!
//! # Generate shell completions
//! source <(COMPLETE=bash soundfiles)
//! ```

use std::io;
use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand, ValueHint};
use clap_complete::Shell;
use serde::Serialize;
use strum::IntoEnumIterator;
use thiserror::Error;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use soundfiles::{resolve, symbolic_sounds, Folder, SoundEntry, SoundFile, SoundfileError};

/// Environment variable holding the default storage root.
const ROOT_ENV: &str = "SOUNDFILES_ROOT";

/// Look up sound files by announcement number or symbolic name
#[derive(Parser)]
#[command(name = "soundfiles", version, about, long_about = None)]
#[command(after_help = AFTER_HELP)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List symbolic sounds and their files
    List {
        /// Only list sounds in this folder (advert or mp3)
        #[arg(short, long, value_parser = parse_folder)]
        folder: Option<Folder>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Print the path of a sound file
    Path {
        /// Folder holding the sound (advert or mp3)
        #[arg(value_parser = parse_folder)]
        folder: Folder,

        /// Announcement number (1-255) or symbolic name
        #[arg(value_name = "NUMBER|NAME")]
        sound: String,

        /// Storage root to prefix (defaults to $SOUNDFILES_ROOT)
        #[arg(short, long, value_name = "DIR", value_hint = ValueHint::DirPath)]
        root: Option<PathBuf>,

        /// Print JSON instead of a bare path
        #[arg(long)]
        json: bool,
    },
}

const AFTER_HELP: &str = "\
SHELL COMPLETIONS:
  Bash (~/.bashrc):
    source <(COMPLETE=bash soundfiles)

  Zsh (~/.zshrc):
    source <(COMPLETE=zsh soundfiles)

  Fish (~/.config/fish/config.fish):
    COMPLETE=fish soundfiles | source

EXAMPLES:
  soundfiles list                          # all symbolic sounds
  soundfiles list --folder mp3 --json      # mp3 folder as JSON
  soundfiles path mp3 12                   # mp3/0012.mp3
  soundfiles path advert FREEZE_INTRO      # advert/0300.mp3
  soundfiles path mp3 OK --root /media/sd  # /media/sd/mp3/0400.mp3
";

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Lookup(#[from] SoundfileError),

    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Serialize)]
struct ResolvedPath<'a> {
    #[serde(flatten)]
    file: &'a SoundFile,
    file_name: String,
    path: PathBuf,
}

fn main() {
    // Check for shell completion generation before parsing args
    if let Ok(shell_name) = std::env::var("COMPLETE") {
        generate_completions(&shell_name);
        return;
    }

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

/// Initialize tracing on stderr. `RUST_LOG` overrides the verbosity flags.
fn init_tracing(verbose: u8) {
    let base_filter = match std::env::var("RUST_LOG") {
        Ok(filter) => filter,
        Err(_) => match verbose {
            0 => "warn".to_string(),
            1 => "warn,soundfiles=info".to_string(),
            2 => "info,soundfiles=debug".to_string(),
            _ => "debug,soundfiles=trace".to_string(),
        },
    };

    let filter = EnvFilter::try_new(&base_filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .compact()
        .init();
}

fn run(command: Command) -> Result<(), CliError> {
    match command {
        Command::List { folder, json } => list(folder, json),
        Command::Path {
            folder,
            sound,
            root,
            json,
        } => path(folder, &sound, root, json),
    }
}

fn list(folder: Option<Folder>, json: bool) -> Result<(), CliError> {
    let folders = match folder {
        Some(folder) => vec![folder],
        None => Folder::iter().collect(),
    };
    let entries: Vec<SoundEntry> = folders.into_iter().flat_map(symbolic_sounds).collect();
    info!(count = entries.len(), "listing symbolic sounds");

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        print!("{}", format_table(&entries));
    }
    Ok(())
}

fn path(folder: Folder, sound: &str, root: Option<PathBuf>, json: bool) -> Result<(), CliError> {
    let file = resolve(folder, sound)?;
    let root = root.or_else(|| std::env::var_os(ROOT_ENV).map(PathBuf::from));
    debug!(root = ?root, "storage root");

    let path = match root {
        Some(root) => file.path_in(root),
        None => file.relative_path(),
    };

    if json {
        let resolved = ResolvedPath {
            file: &file,
            file_name: file.file_name(),
            path,
        };
        println!("{}", serde_json::to_string_pretty(&resolved)?);
    } else {
        println!("{}", path.display());
    }
    Ok(())
}

/// Render entries as a fixed-width table.
fn format_table(entries: &[SoundEntry]) -> String {
    let name_width = entries
        .iter()
        .map(|entry| entry.name.len())
        .chain(std::iter::once("NAME".len()))
        .max()
        .unwrap_or_default();

    let mut out = format!(
        "{:<6}  {:<name_width$}  {:>5}  FILE\n",
        "FOLDER", "NAME", "INDEX"
    );
    for entry in entries {
        out.push_str(&format!(
            "{:<6}  {:<name_width$}  {:>5}  {}\n",
            entry.folder.name(),
            entry.name,
            entry.index,
            entry.file_name
        ));
    }
    out
}

/// Parse a folder name, reporting the library's error text.
fn parse_folder(value: &str) -> Result<Folder, String> {
    value.parse().map_err(|_| {
        SoundfileError::UnknownFolder {
            name: value.to_string(),
        }
        .to_string()
    })
}

/// Generate shell completions for the given shell.
fn generate_completions(shell_name: &str) {
    let shell = match shell_name.to_lowercase().as_str() {
        "bash" => Shell::Bash,
        "zsh" => Shell::Zsh,
        "fish" => Shell::Fish,
        "powershell" | "pwsh" => Shell::PowerShell,
        "elvish" => Shell::Elvish,
        _ => {
            eprintln!("Unsupported shell: {shell_name}");
            eprintln!("Supported shells: bash, zsh, fish, powershell, elvish");
            std::process::exit(1);
        }
    };

    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "soundfiles", &mut io::stdout());
}

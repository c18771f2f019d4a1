//! Command-line interface implementation

use clap::Parser;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::build::progress::{ConsoleProgress, NullProgress, ProgressReporter};
use crate::build::{default_jobs, SpriteBuild};
use crate::characters::Character;
use crate::config::loader::{
    check, load_config, merge_cli_overrides, project_root, resolve_path, CliOverrides, ConfigError,
};
use crate::config::SpritesConfig;

pub(crate) const EXIT_SUCCESS: u8 = 0;
pub(crate) const EXIT_ERROR: u8 = 1;
pub(crate) const EXIT_INVALID_ARGS: u8 = 2;

/// Generate the desktop-pet sprite sets (bunny, kitten, blob, ghost) as PNG files
#[derive(Parser, Debug)]
#[command(name = "shimeji-sprites")]
#[command(version)]
pub struct Cli {
    /// Config file; without it only built-in defaults and flags apply
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output root; each character gets its own subdirectory
    #[arg(short, long, value_name = "DIR")]
    pub out: Option<PathBuf>,

    /// Number of parallel jobs (default: available parallelism)
    #[arg(short, long)]
    pub jobs: Option<usize>,

    /// Generate only this character (repeatable)
    #[arg(short, long = "character", value_name = "NAME")]
    pub characters: Vec<Character>,

    /// Suppress status output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// List every file written
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            out: self.out.clone(),
            jobs: self.jobs,
            characters: if self.characters.is_empty() {
                None
            } else {
                Some(self.characters.iter().map(|c| c.name().to_string()).collect())
            },
        }
    }

    fn reporter(&self) -> Box<dyn ProgressReporter> {
        if self.quiet {
            Box::new(NullProgress::new())
        } else {
            Box::new(ConsoleProgress::new().with_verbose(self.verbose))
        }
    }
}

/// Parse arguments and run
pub fn run() -> ExitCode {
    run_with(Cli::parse())
}

/// Run with already-parsed arguments
pub fn run_with(cli: Cli) -> ExitCode {
    let config = match resolve_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_INVALID_ARGS);
        }
    };

    let build = SpriteBuild::new(config.output.dir.clone())
        .with_jobs(config.build.jobs.unwrap_or_else(default_jobs))
        .with_characters(config.selected_characters())
        .with_reporter(cli.reporter());

    match build.run() {
        Ok(_) => ExitCode::from(EXIT_SUCCESS),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Load the `--config` file if one was given, resolve its output directory
/// against the file's location, then apply CLI overrides.
///
/// No file is looked up implicitly: a bare run uses the built-in defaults.
fn resolve_config(cli: &Cli) -> Result<SpritesConfig, ConfigError> {
    let mut config = match &cli.config {
        Some(path) => {
            if cli.verbose {
                eprintln!("Using config: {}", path.display());
            }
            let mut config = load_config(path)?;
            let root = project_root(path).unwrap_or(Path::new(""));
            config.output.dir = resolve_path(root, &config.output.dir);
            config
        }
        None => SpritesConfig::default(),
    };

    merge_cli_overrides(&mut config, &cli.overrides());
    check(&config)?;
    Ok(config)
}

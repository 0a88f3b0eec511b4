use std::path::PathBuf;

use thiserror::Error;

use brandkit_io::config::{BrandConfig, ConfigError};
use brandkit_io::emit::DirEmitter;
use brandkit_io::glyph::TtfLoader;

use crate::pipeline::{self, PipelineError};

pub const USAGE: &str = "\
Usage: brandkit [lockups|explore|all] [--config <file.json>] [--print-config]

Commands:
  lockups   Generate horizontal, vertical and logotype SVGs in every color
  explore   Render the logotype font exploration sheet
  all       Both of the above (default)

Options:
  --config <file>   Load settings from a JSON file
  --print-config    Print the effective settings as JSON and exit
  -h, --help        Show this message";

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}\n\n{usage}", usage = USAGE)]
    Usage(String),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Pipeline(#[from] PipelineError),

    #[error("Failed to serialize config: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Command {
    Lockups,
    Explore,
    #[default]
    All,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Cli {
    pub command: Command,
    pub config: Option<PathBuf>,
    pub print_config: bool,
    pub help: bool,
}

impl Cli {
    pub fn parse<I>(args: I) -> Result<Self, AppError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut cli = Cli::default();
        let mut command_seen = false;
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-h" | "--help" => cli.help = true,
                "--print-config" => cli.print_config = true,
                "--config" => {
                    let path = args
                        .next()
                        .ok_or_else(|| AppError::Usage("--config requires a path".into()))?;
                    cli.config = Some(PathBuf::from(path));
                }
                "lockups" | "explore" | "all" if !command_seen => {
                    cli.command = match arg.as_str() {
                        "lockups" => Command::Lockups,
                        "explore" => Command::Explore,
                        _ => Command::All,
                    };
                    command_seen = true;
                }
                other => return Err(AppError::Usage(format!("Unexpected argument '{other}'"))),
            }
        }
        Ok(cli)
    }

    pub fn load_config(&self) -> Result<BrandConfig, AppError> {
        match &self.config {
            Some(path) => Ok(BrandConfig::load(path)?),
            None => Ok(BrandConfig::default()),
        }
    }
}

/// Executes a parsed command line against the real filesystem.
pub fn run(cli: &Cli) -> Result<(), AppError> {
    if cli.help {
        println!("{USAGE}");
        return Ok(());
    }

    let config = cli.load_config()?;
    if cli.print_config {
        println!("{}", config.to_json()?);
        return Ok(());
    }

    let loader = TtfLoader;
    if matches!(cli.command, Command::Lockups | Command::All) {
        let mut emitter = DirEmitter::new(&config.output_dir);
        let summary = pipeline::generate_lockups(&config, &loader, &mut emitter)?;
        log::info!(
            "Lockups written to {}: {} files",
            emitter.dir().display(),
            summary.written.len()
        );
    }
    if matches!(cli.command, Command::Explore | Command::All) {
        let mut emitter = DirEmitter::new(&config.exploration.output_dir);
        let report = pipeline::write_exploration(&config, &loader, &mut emitter)?;
        log::info!(
            "Exploration written to {}: {} of {} fonts",
            emitter.dir().display(),
            report.entries.len(),
            report.candidate_count()
        );
    }
    Ok(())
}

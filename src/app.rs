use crate::config::{self, ConfigError};
use crate::transforms::Rewriter;
use clap::Parser;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

const USAGE: &str = "Usage: classname-migrate <file>";

/// Rewrites Tailwind `className` attributes in a TSX file into `sx` props
/// and inline styles, printing the result to stdout.
#[derive(Parser)]
#[command(name = "classname-migrate")]
#[command(about = "Rewrite Tailwind className attributes into sx props", long_about = None)]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    /// File to rewrite. It is never modified; the result goes to stdout.
    #[arg(value_name = "FILE", allow_hyphen_values = true)]
    file: Option<PathBuf>,

    #[arg(hide = true, allow_hyphen_values = true)]
    extra: Vec<String>,
}

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write output: {0}")]
    Write(#[source] io::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();
}

pub fn run() -> Result<ExitCode, AppError> {
    init_logging();
    let cli = Cli::parse();

    let Some(path) = cli.file else {
        println!("{USAGE}");
        return Ok(ExitCode::from(1));
    };
    if !cli.extra.is_empty() {
        log::warn!("ignoring extra arguments: {}", cli.extra.join(" "));
    }

    let rewriter = Rewriter::new(config::load_defaults()?);
    let text = fs::read_to_string(&path).map_err(|source| AppError::Read {
        path: path.clone(),
        source,
    })?;
    log::debug!("read {} ({} bytes)", path.display(), text.len());

    let output = rewriter.rewrite(&text);
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{output}").map_err(AppError::Write)?;
    stdout.flush().map_err(AppError::Write)?;
    Ok(ExitCode::SUCCESS)
}

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

mod commands;

#[derive(Parser)]
#[command(name = "lessonsync")]
#[command(
    about = "Sync lessons from a workspace into the skill lessons reference",
    long_about = None
)]
struct Cli {
    /// Workspace root; lessons are read from <PATH>/tasks/lessons.md
    #[arg(long, value_name = "PATH")]
    workspace: Option<PathBuf>,

    /// Show what would be written without modifying files
    #[arg(long)]
    dry_run: bool,

    /// Config file (defaults to ~/.lessonsync/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the lessons section of a merged lessons document
    Extract { path: Option<PathBuf> },
    /// Add the self-improvement reminder to an agent bootstrap event read from stdin
    Hook,
}

impl Cli {
    /// `--workspace` and `--dry-run` only apply to the sync.
    fn check_sync_flags(&self) -> Result<(), clap::Error> {
        if self.command.is_none() {
            return Ok(());
        }

        let flag = if self.workspace.is_some() {
            "--workspace"
        } else if self.dry_run {
            "--dry-run"
        } else {
            return Ok(());
        };

        Err(Cli::command().error(
            clap::error::ErrorKind::ArgumentConflict,
            format!("{} cannot be used with a subcommand", flag),
        ))
    }
}

fn init_tracing(verbose: u8) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match verbose {
        0 => "lessonsync=warn,lessonsync_core=warn",
        1 => "lessonsync=debug,lessonsync_core=debug",
        _ => "lessonsync=trace,lessonsync_core=trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    if let Err(e) = cli.check_sync_flags() {
        e.exit();
    }
    init_tracing(cli.verbose);

    let config_path = cli
        .config
        .unwrap_or_else(lessonsync_core::config::get_config_path);
    let config = lessonsync_core::load_config(&config_path)?;

    let code = match cli.command {
        None => commands::sync(&config, cli.workspace, cli.dry_run)?,
        Some(Commands::Extract { path }) => commands::extract(&config, path)?,
        Some(Commands::Hook) => commands::hook()?,
    };

    Ok(ExitCode::from(code))
}

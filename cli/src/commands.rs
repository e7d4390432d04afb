use anyhow::{Context, Result};
use console::style;
use lessonsync_core::sync::{self, SyncOptions, SyncOutcome};
use lessonsync_core::{Config, extract_lessons_section, inject_reminder, load_file};
use std::io::{Read, Write};
use std::path::PathBuf;

pub fn sync(config: &Config, workspace: Option<PathBuf>, dry_run: bool) -> Result<u8> {
    let options = SyncOptions::new(config.resolve_workspace(workspace))
        .with_skill_lessons_path(&config.skill_lessons_path)
        .with_dry_run(dry_run)
        .with_preview_chars(config.preview_chars);

    let outcome = sync::run(&options)?;

    match &outcome {
        SyncOutcome::MissingSource { workspace_path } => {
            eprintln!(
                "{} Workspace lessons not found: {}",
                style("❌").red(),
                workspace_path.display()
            );
        }
        SyncOutcome::Preview {
            skill_path,
            preview,
        } => {
            println!(
                "{} Dry run: Would update {}",
                style("📋").cyan(),
                skill_path.display()
            );
            println!("\n---\n");
            println!("{}", preview);
        }
        SyncOutcome::Written {
            skill_path,
            workspace_path,
        } => {
            println!(
                "{} Updated {}",
                style("✅").green().bold(),
                skill_path.display()
            );
            println!("📚 Synced lessons from {}", workspace_path.display());
        }
    }

    Ok(outcome.exit_code())
}

pub fn extract(config: &Config, path: Option<PathBuf>) -> Result<u8> {
    let path = path.unwrap_or_else(|| config.skill_lessons_path.clone());
    let content = load_file(&path)?;

    match extract_lessons_section(&content) {
        Some(section) => {
            println!("{}", section);
            Ok(0)
        }
        None => {
            eprintln!(
                "{} No lessons section found in {}",
                style("!").yellow(),
                path.display()
            );
            Ok(1)
        }
    }
}

pub fn hook() -> Result<u8> {
    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .context("Failed to read event from stdin")?;

    let mut event: serde_json::Value =
        serde_json::from_str(&input).context("Failed to parse event JSON")?;

    if inject_reminder(&mut event) {
        tracing::debug!("Reminder injected into bootstrap event");
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer(&mut out, &event).context("Failed to write event JSON")?;
    writeln!(out)?;

    Ok(0)
}

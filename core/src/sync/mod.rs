use anyhow::Result;
use std::path::PathBuf;

use crate::config::DEFAULT_PREVIEW_CHARS;
use crate::lessons::{
    SKILL_LESSONS_FILE, load_file, merge_lessons, save_file, workspace_lessons_path,
};

pub const PREVIEW_ELLIPSIS: &str = "\n...";

#[derive(Debug, Clone)]
pub struct SyncOptions {
    pub workspace_dir: PathBuf,
    pub skill_lessons_path: PathBuf,
    pub dry_run: bool,
    pub preview_chars: usize,
}

impl SyncOptions {
    pub fn new(workspace_dir: impl Into<PathBuf>) -> Self {
        Self {
            workspace_dir: workspace_dir.into(),
            skill_lessons_path: PathBuf::from(SKILL_LESSONS_FILE),
            dry_run: false,
            preview_chars: DEFAULT_PREVIEW_CHARS,
        }
    }

    pub fn with_skill_lessons_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.skill_lessons_path = path.into();
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn with_preview_chars(mut self, chars: usize) -> Self {
        self.preview_chars = chars;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    /// Workspace lessons file missing or empty. Nothing was written.
    MissingSource { workspace_path: PathBuf },
    /// Dry run. Nothing was written.
    Preview {
        skill_path: PathBuf,
        preview: String,
    },
    Written {
        skill_path: PathBuf,
        workspace_path: PathBuf,
    },
}

impl SyncOutcome {
    pub fn exit_code(&self) -> u8 {
        match self {
            SyncOutcome::MissingSource { .. } => 1,
            SyncOutcome::Preview { .. } | SyncOutcome::Written { .. } => 0,
        }
    }
}

/// Merges `<workspace>/tasks/lessons.md` into the skill lessons file.
pub fn run(options: &SyncOptions) -> Result<SyncOutcome> {
    let workspace_path = workspace_lessons_path(&options.workspace_dir);
    let skill_path = options.skill_lessons_path.clone();

    let workspace_content = load_file(&workspace_path)?;
    let skill_content = load_file(&skill_path)?;

    if workspace_content.is_empty() {
        tracing::warn!(path = %workspace_path.display(), "Workspace lessons missing or empty");
        return Ok(SyncOutcome::MissingSource { workspace_path });
    }

    let merged = merge_lessons(&workspace_content, &skill_content);

    if options.dry_run {
        return Ok(SyncOutcome::Preview {
            skill_path,
            preview: preview(&merged, options.preview_chars),
        });
    }

    save_file(&skill_path, &merged)?;
    tracing::info!(
        skill = %skill_path.display(),
        workspace = %workspace_path.display(),
        bytes = merged.len(),
        "Skill lessons updated"
    );

    Ok(SyncOutcome::Written {
        skill_path,
        workspace_path,
    })
}

/// `text` unchanged when it fits in `limit` characters, otherwise its first
/// `limit` characters followed by an ellipsis line.
pub fn preview(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((cut, _)) => format!("{}{}", &text[..cut], PREVIEW_ELLIPSIS),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn workspace_with(tmp: &TempDir, lessons: &str) -> PathBuf {
        let workspace = tmp.path().join("workspace");
        fs::create_dir_all(workspace.join("tasks")).unwrap();
        fs::write(workspace.join("tasks/lessons.md"), lessons).unwrap();
        workspace
    }

    #[test]
    fn writes_merged_lessons() {
        let tmp = TempDir::new().unwrap();
        let workspace = workspace_with(&tmp, "## Foo\nDo X.\n");
        let skill_path = tmp.path().join("skill/references/lessons.md");

        let options = SyncOptions::new(&workspace).with_skill_lessons_path(&skill_path);
        let outcome = run(&options).unwrap();

        assert_eq!(
            outcome,
            SyncOutcome::Written {
                skill_path: skill_path.clone(),
                workspace_path: workspace.join("tasks/lessons.md"),
            }
        );
        assert_eq!(outcome.exit_code(), 0);

        let written = fs::read_to_string(&skill_path).unwrap();
        assert!(written.contains("## Foo\nDo X.\n"));
        assert!(written.starts_with("# Lessons in Markdown"));
    }

    #[test]
    fn crlf_workspace_merges_with_unix_endings() {
        let tmp = TempDir::new().unwrap();
        let workspace = workspace_with(&tmp, "## Foo\r\nDo X.\r\n## Bar\r\nDid Y.\r\n");
        let skill_path = tmp.path().join("references/lessons.md");

        let options = SyncOptions::new(&workspace).with_skill_lessons_path(&skill_path);
        run(&options).unwrap();

        let written = fs::read_to_string(&skill_path).unwrap();
        assert!(!written.contains('\r'));
        assert!(written.contains("## Foo\nDo X.\n## Bar\nDid Y.\n"));
    }

    #[test]
    fn missing_source_fails_without_writing() {
        let tmp = TempDir::new().unwrap();
        let skill_path = tmp.path().join("references/lessons.md");

        let options = SyncOptions::new(tmp.path().join("absent"))
            .with_skill_lessons_path(&skill_path);
        let outcome = run(&options).unwrap();

        assert_eq!(outcome.exit_code(), 1);
        assert_eq!(
            outcome,
            SyncOutcome::MissingSource {
                workspace_path: tmp.path().join("absent/tasks/lessons.md"),
            }
        );
        assert!(!skill_path.exists());
    }

    #[test]
    fn empty_source_leaves_destination_untouched() {
        let tmp = TempDir::new().unwrap();
        let workspace = workspace_with(&tmp, "");
        let skill_path = tmp.path().join("lessons.md");
        fs::write(&skill_path, "previous").unwrap();

        let options = SyncOptions::new(&workspace).with_skill_lessons_path(&skill_path);
        let outcome = run(&options).unwrap();

        assert!(matches!(outcome, SyncOutcome::MissingSource { .. }));
        assert_eq!(fs::read_to_string(&skill_path).unwrap(), "previous");
    }

    #[test]
    fn dry_run_never_writes() {
        let tmp = TempDir::new().unwrap();
        let workspace = workspace_with(&tmp, "## Foo\nDo X.\n");
        let skill_path = tmp.path().join("references/lessons.md");

        let options = SyncOptions::new(&workspace)
            .with_skill_lessons_path(&skill_path)
            .with_dry_run(true);
        let outcome = run(&options).unwrap();

        match outcome {
            SyncOutcome::Preview { preview, .. } => {
                assert!(preview.starts_with("# Lessons in Markdown"));
                assert!(preview.ends_with(PREVIEW_ELLIPSIS));
            }
            other => panic!("expected preview, got {:?}", other),
        }
        assert!(!skill_path.exists());
        assert!(!tmp.path().join("references").exists());
    }

    #[test]
    fn dry_run_keeps_existing_destination() {
        let tmp = TempDir::new().unwrap();
        let workspace = workspace_with(&tmp, "## Foo\n");
        let skill_path = tmp.path().join("lessons.md");
        fs::write(&skill_path, "previous").unwrap();

        let options = SyncOptions::new(&workspace)
            .with_skill_lessons_path(&skill_path)
            .with_dry_run(true)
            .with_preview_chars(10_000);
        let outcome = run(&options).unwrap();

        match outcome {
            SyncOutcome::Preview { preview, .. } => assert!(preview.contains("## Foo")),
            other => panic!("expected preview, got {:?}", other),
        }
        assert_eq!(fs::read_to_string(&skill_path).unwrap(), "previous");
    }

    #[test]
    fn preview_truncates_long_text() {
        let text = "a".repeat(1000);
        let shown = preview(&text, 500);

        assert_eq!(shown, format!("{}\n...", "a".repeat(500)));
    }

    #[test]
    fn preview_keeps_text_at_limit() {
        let text = "b".repeat(500);
        assert_eq!(preview(&text, 500), text);
        assert_eq!(preview("short", 500), "short");
    }

    #[test]
    fn preview_counts_characters_not_bytes() {
        let text = "é".repeat(501);
        let shown = preview(&text, 500);

        assert_eq!(shown.chars().filter(|c| *c == 'é').count(), 500);
        assert!(shown.ends_with("\n..."));
    }
}

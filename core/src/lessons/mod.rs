pub mod extract;
pub mod files;
pub mod merge;
pub mod templates;

pub use extract::extract_lessons_section;
pub use files::{load_file, normalize_newlines, save_file};
pub use merge::{merge_lessons, merge_lessons_on};

use std::path::{Path, PathBuf};

/// Heading that closes the philosophy intro; never starts a capture.
pub const PORTABLE_HEADING: &str = "## Keeping It Portable";
pub const PORTABLE_TITLE: &str = "Keeping It Portable";
pub const SECTION_PREFIX: &str = "## ";

pub const WORKSPACE_LESSONS_FILE: &str = "tasks/lessons.md";
pub const SKILL_LESSONS_FILE: &str = "references/lessons.md";

pub fn workspace_lessons_path(workspace_dir: &Path) -> PathBuf {
    workspace_dir.join(WORKSPACE_LESSONS_FILE)
}

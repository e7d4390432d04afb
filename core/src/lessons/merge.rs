use chrono::NaiveDate;

use super::templates::{CLOSING_LINE, NO_LESSONS_PLACEHOLDER, PHILOSOPHY_INTRO, TIMESTAMP_PLACEHOLDER};
use super::{PORTABLE_TITLE, SECTION_PREFIX};

/// Builds the skill lessons document from the workspace lessons, stamped
/// with today's local date.
pub fn merge_lessons(workspace_lessons: &str, skill_lessons: &str) -> String {
    merge_lessons_on(
        workspace_lessons,
        skill_lessons,
        chrono::Local::now().date_naive(),
    )
}

/// Same as [`merge_lessons`] with an explicit date.
///
/// Capture starts at the first `## ` heading that is not the portable
/// heading and runs to the end of the input. `skill_lessons` is replaced
/// wholesale and does not contribute to the result.
pub fn merge_lessons_on(workspace_lessons: &str, skill_lessons: &str, date: NaiveDate) -> String {
    if !skill_lessons.is_empty() {
        tracing::debug!(
            bytes = skill_lessons.len(),
            "Existing skill lessons will be replaced"
        );
    }

    let mut capturing = false;
    let captured: Vec<&str> = workspace_lessons
        .split('\n')
        .filter(|line| {
            if line.starts_with(SECTION_PREFIX) && !line.contains(PORTABLE_TITLE) {
                capturing = true;
            }
            capturing
        })
        .collect();

    let timestamp = date.format("%Y-%m-%d").to_string();
    let mut merged = PHILOSOPHY_INTRO.replace(TIMESTAMP_PLACEHOLDER, &timestamp);

    if captured.is_empty() {
        merged.push_str(NO_LESSONS_PLACEHOLDER);
    } else {
        merged.push_str(&captured.join("\n"));
    }

    merged.push_str("\n\n");
    merged.push_str(CLOSING_LINE);

    merged
}

use super::{PORTABLE_HEADING, SECTION_PREFIX};

/// Minimum distance, in lines, between the portable heading and the section
/// that follows it. Skips the bullet list and closing paragraph of the intro.
const MIN_SECTION_GAP: usize = 5;

/// Returns everything from the first section heading that sits more than
/// [`MIN_SECTION_GAP`] lines below `## Keeping It Portable`, or `None` when
/// the document has no such pair.
pub fn extract_lessons_section(content: &str) -> Option<String> {
    let lines: Vec<&str> = content.split('\n').collect();

    for (i, line) in lines.iter().enumerate() {
        if *line != PORTABLE_HEADING {
            continue;
        }

        let next_section = lines
            .iter()
            .enumerate()
            .skip(i + MIN_SECTION_GAP + 1)
            .find(|(_, l)| l.starts_with(SECTION_PREFIX))
            .map(|(j, _)| j);

        if let Some(j) = next_section {
            return Some(lines[j..].join("\n"));
        }
    }

    None
}

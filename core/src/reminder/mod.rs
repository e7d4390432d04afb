use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const REMINDER_FILE: &str = "PI_WORKFLOW_REMINDER.md";
const SUBAGENT_MARKER: &str = ":subagent:";

pub const REMINDER_CONTENT: &str = r#"## 🧠 Self-Improvement Reminder

After completing tasks, evaluate if any learnings should be captured using Phase 1+2 format.

### Log Lessons (Corrections & Insights)
Capture to: `tasks/lessons.md`

When to log:
- User corrects you ("That's wrong...")
- You discover a better pattern
- You learn something new about the system

Format: `[LRN-YYYYMMDD-XXX] lesson_name (category)` with metadata: Priority, Status, Area, Pattern-Key, Recurrence-Count

### Log Errors (Failures & Diagnosis)
Capture to: `tasks/errors.md`

When to log:
- Command returns error / API fails
- Exception thrown unexpectedly
- Tool integration breaks

Format: `[ERR-YYYYMMDD-XXX] service_name` with Error Output, Context, Suggested Fix

### Log Features (Capability Gaps)
Capture to: `tasks/feature_requests.md`

When to log:
- "I wish Tool X could do Y"
- Missing integration or workflow
- Blocker for desired functionality

Format: `[FEAT-YYYYMMDD-XXX] capability_name` with Complexity Estimate, Suggested Implementation

### Tracking Recurring Patterns
- Increment `Recurrence-Count` when you see same issue again
- When count ≥ 3 over 30 days → consider promoting to permanent rule in AGENTS.md

### Promotion Path
When a lesson becomes broadly applicable:
- **Behavioral patterns** → `SOUL.md`
- **Workflow improvements** → `AGENTS.md`
- **Tool gotchas** → `TOOLS.md`

See `references/phase1-phase2-enhanced-lessons.md` for detailed guide."#;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BootstrapFile {
    pub path: String,
    pub content: String,
    #[serde(rename = "virtual")]
    pub is_virtual: bool,
}

impl BootstrapFile {
    pub fn reminder() -> Self {
        Self {
            path: REMINDER_FILE.to_string(),
            content: REMINDER_CONTENT.to_string(),
            is_virtual: true,
        }
    }
}

/// Appends the reminder to `context.bootstrapFiles` of an agent bootstrap
/// event. Returns `false` and leaves the event alone for anything else,
/// including sub-agent sessions.
pub fn inject_reminder(event: &mut Value) -> bool {
    let Some(event) = event.as_object_mut() else {
        return false;
    };

    let is_bootstrap = event.get("type").and_then(Value::as_str) == Some("agent")
        && event.get("action").and_then(Value::as_str) == Some("bootstrap");
    if !is_bootstrap {
        return false;
    }

    let session_key = event
        .get("sessionKey")
        .and_then(Value::as_str)
        .unwrap_or_default();
    if session_key.contains(SUBAGENT_MARKER) {
        tracing::debug!(session_key, "Skipping sub-agent session");
        return false;
    }

    let Some(files) = event
        .get_mut("context")
        .and_then(Value::as_object_mut)
        .and_then(|context| context.get_mut("bootstrapFiles"))
        .and_then(Value::as_array_mut)
    else {
        return false;
    };

    match serde_json::to_value(BootstrapFile::reminder()) {
        Ok(file) => {
            files.push(file);
            true
        }
        Err(e) => {
            tracing::warn!("Failed to encode reminder: {}", e);
            false
        }
    }
}

pub mod config;
pub mod lessons;
pub mod reminder;
pub mod sync;

pub use config::{Config, load_config};
pub use lessons::{extract_lessons_section, load_file, merge_lessons, save_file};
pub use reminder::inject_reminder;
pub use sync::{SyncOptions, SyncOutcome};

pub const TIMESTAMP_PLACEHOLDER: &str = "{timestamp}";

pub const PHILOSOPHY_INTRO: &str = r#"# Lessons in Markdown

## The Quiet Power of Plain Text

Markdown thrives on simplicity. A few hashes for headings, asterisks for emphasis, dashes for lists—no flashy code or hidden tricks. It's text you can read raw, anywhere, on any device. In a world of bloated apps and endless scrolls, .md files remind us: truth doesn't need embellishment. It's there, unadorned, waiting to be seen.

Life's lessons work the same way. They arrive in raw moments—a quiet talk with a friend, a walk under rain-soaked trees, the weight of a small regret. No fanfare, just plain experience. We often dress them up with excuses or distractions, but strip them back, and they sharpen into something enduring.

## Rendering Wisdom

Open a .md file in a viewer, and it transforms: headings bolden, paragraphs flow, structure emerges. Our minds do this too. A jumbled day becomes a lesson when reflected upon. That argument with a loved one? It renders as patience. A missed chance? Gratitude for what's here.

In 2026, as screens multiply and noise amplifies, this rendering matters more. We preview life's drafts daily, tweaking for clarity. Markdown teaches us to version our growth—save, edit, share—without losing the source.

## Keeping It Portable

- Write lessons lightly, like notes in a pocket notebook.
- Share them openly, letting others render their meaning.
- Revisit old files; they age well, gaining depth.

Lessons.md isn't a vault of secrets. It's an invitation to live simply, thoughtfully.

---

## Lessons Learned (Updated {timestamp})

"#;

pub const NO_LESSONS_PLACEHOLDER: &str =
    "(No lessons captured yet. Lessons from your work will appear here.)";

pub const CLOSING_LINE: &str =
    "*In the end, the best lessons render themselves, if we learn to look plainly.*";

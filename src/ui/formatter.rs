//! Pure formatting functions for UI output.
//!
//! Everything here returns strings so the layout can be tested; printing
//! happens in the parent module.

use crate::git::CommitRange;
use crate::release_note::{ReleaseNote, SUMMARY_INSTRUCTIONS};

/// Describes the range being analyzed, or `None` when a notice covers it.
pub fn format_range(range: &CommitRange) -> Option<String> {
    range
        .boundary()
        .map(|tag| format!("Analyzing commits from {} to HEAD", tag))
}

/// Summary instructions block shown after the commit data.
pub fn format_instructions() -> String {
    let mut lines = vec!["=== Summary Instructions ===".to_string()];
    lines.extend(SUMMARY_INSTRUCTIONS.iter().map(|line| line.to_string()));
    lines.join("\n")
}

/// Primary result: suggestion, tag message and the commands to run by hand.
pub fn format_release(note: &ReleaseNote, remote: &str) -> String {
    format!(
        "{suggestion}\n\n\
         === Tag Message ===\n\n\
         {message}\n\n\
         === Tag Command ===\n\n\
         Copy the following command to create the tag:\n\n\
         ```bash\n{tag}\n```\n\n\
         Then push the tag to the remote:\n\n\
         ```bash\n{push}\n```\n\n\
         Neither command has been run.",
        suggestion = note.suggestion,
        message = note.message,
        tag = note.tag_command(),
        push = note.push_command(remote),
    )
}

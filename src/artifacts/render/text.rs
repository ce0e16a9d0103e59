use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::reflog::reflog_entry::ReflogEntry;
use colored::Colorize;

/// Render reflog entries as plain text for terminal display
pub fn render_document(branch: &BranchName, entries: &[ReflogEntry]) -> String {
    let mut output = String::new();

    for entry in entries {
        output.push_str(&format!(
            "{}\n",
            format!("reflog {} -> {} ({})", entry.previous_ref, entry.new_ref, branch).yellow()
        ));
        output.push_str(&format!("Author: {}\n", entry.author));
        output.push_str(&format!(
            "Date:   {} ({})\n",
            entry.readable_timestamp(),
            entry.timezone
        ));
        output.push('\n');
        for message_line in entry.message.lines() {
            output.push_str(&format!("    {}\n", message_line));
        }
        output.push('\n');
    }

    output
}

use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::reflog::reflog_entry::ReflogEntry;

/// Render reflog entries as a self-contained HTML document
///
/// One block per entry, in input order, inside a fixed document shell. Zero
/// entries still produce the complete shell.
pub fn render_document(branch: &BranchName, entries: &[ReflogEntry]) -> String {
    let blocks = entries
        .iter()
        .map(render_entry)
        .collect::<Vec<_>>()
        .join("");

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>Reflog for {branch}</title>
    <style>
        body {{ font-family: Arial, sans-serif; padding: 20px; }}
        div.entry {{ background: #f9f9f9; padding: 15px; margin-bottom: 10px; border-radius: 5px; }}
        p {{ margin: 5px 0; color: #000; }}
        strong {{ color: #333; }}
    </style>
</head>
<body>
    <h1>Reflog for {branch}</h1>
{blocks}</body>
</html>
"#,
        branch = escape(branch.as_ref()),
        blocks = blocks,
    )
}

fn render_entry(entry: &ReflogEntry) -> String {
    format!(
        r#"    <div class="entry">
        <p><strong>Author:</strong> {}</p>
        <p><strong>Date:</strong> {} ({})</p>
        <p><strong>Commit Message:</strong> {}</p>
    </div>
"#,
        escape(&entry.author),
        entry.readable_timestamp(),
        escape(&entry.timezone),
        escape(&entry.message),
    )
}

/// Minimal HTML escaping for interpolated field values
fn escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

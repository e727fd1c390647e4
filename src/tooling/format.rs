//! Format browse results and acknowledgements for the terminal.

use crate::browser::Entry;
use crate::mutation::Mutation;
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use serde_json::json;

/// Format a browse result as pretty JSON in the `is_folder` / `is_file` shape.
pub fn format_entry_json(entry: &Entry) -> String {
    let value = entry
        .to_json()
        .unwrap_or_else(|| json!({ "detail": "File or folder not found" }));
    serde_json::to_string_pretty(&value).unwrap_or_else(|_| "{}".to_string())
}

/// Format a browse result as human-readable text.
pub fn format_entry_text(path: &str, entry: &Entry) -> String {
    let shown = if path.is_empty() { "/" } else { path };
    match entry {
        Entry::Folder { listing } => {
            if listing.is_empty() {
                return format!("Folder {} is empty\n", shown);
            }
            let mut table = Table::new();
            table.load_preset(UTF8_BORDERS_ONLY);
            table.set_header(vec!["Name"]);
            for name in listing {
                table.add_row(vec![name.clone()]);
            }
            format!("Folder {} ({} entries)\n\n{}\n", shown, listing.len(), table)
        }
        Entry::File { metadata, content } => {
            let mut table = Table::new();
            table.load_preset(UTF8_BORDERS_ONLY);
            table.set_header(vec!["Name", "Owner", "Size", "Permissions"]);
            table.add_row(vec![
                metadata.name.clone(),
                metadata.owner.to_string(),
                metadata.size.to_string(),
                metadata.permissions.clone(),
            ]);
            format!("File {}\n\n{}\n\n{}", shown, table, content)
        }
        Entry::Missing => format!("Nothing at {}\n", shown),
    }
}

/// Format a mutation acknowledgement as `{"detail": ...}`.
pub fn format_mutation_json(mutation: Mutation) -> String {
    let out = json!({ "detail": mutation.detail() });
    serde_json::to_string_pretty(&out).unwrap_or_else(|_| "{}".to_string())
}

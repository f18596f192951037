use comfy_table::Table;

use crate::descriptor::{Descriptor, ValueKind};
use crate::store::ConfigStore;

/// Longest rendering shown for a default or current value.
const MAX_DISPLAY_WIDTH: usize = 50;
/// Fixed mask for kinds whose rendering length would leak little anyway.
const FIXED_MASK: &str = "****";

/// Render the registry as a table sorted by variable name, masking
/// sensitive values and truncating long ones.
pub fn render(store: &ConfigStore) -> String {
    let mut table = Table::new();
    table.set_header(vec![
        "ENV VAR",
        "Type",
        "Default",
        "Provided",
        "Current Value",
    ]);

    for descriptor in store.snapshot() {
        table.add_row(vec![
            descriptor.key.clone(),
            descriptor.kind.to_string(),
            sanitized_default(descriptor),
            descriptor.provided.to_string(),
            masked(descriptor, &truncated(&descriptor.value.to_string())),
        ]);
    }

    table.to_string()
}

/// Write the rendered table to stdout.
pub fn print(store: &ConfigStore) {
    println!("{}", render(store));
}

fn sanitized_default(descriptor: &Descriptor) -> String {
    match &descriptor.default {
        None => "-".to_string(),
        Some(default) => truncated(&default.to_string()),
    }
}

fn masked(descriptor: &Descriptor, rendered: &str) -> String {
    if !descriptor.sensitive {
        return rendered.to_string();
    }
    match descriptor.kind {
        ValueKind::String | ValueKind::Int => "*".repeat(rendered.chars().count()),
        ValueKind::Bool | ValueKind::StringList => FIXED_MASK.to_string(),
    }
}

fn truncated(rendered: &str) -> String {
    if rendered.chars().count() <= MAX_DISPLAY_WIDTH {
        return rendered.to_string();
    }
    let mut cut: String = rendered.chars().take(MAX_DISPLAY_WIDTH - 3).collect();
    cut.push_str("...");
    cut
}

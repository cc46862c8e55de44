//! Markdown rendering of the server directory.

use crate::knowledge::{Category, KnowledgeBase};

/// Heading placed above the full directory listing.
pub const ALL_CATEGORIES_HEADING: &str = "# Available MCP Servers by Category";

/// `command_line` → `Command Line`.
pub fn title_case(key: &str) -> String {
    key.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Render one category as `## {icon} {Title}` followed by a bullet per entry.
pub fn category_section(icon: &str, category: &Category) -> String {
    let mut out = format!("## {icon} {}\n\n", title_case(category.key));
    let bullets: Vec<String> = category
        .entries
        .iter()
        .map(|entry| format!("- {entry}"))
        .collect();
    out.push_str(&bullets.join("\n"));
    out
}

/// Render every category, in definition order, under a single heading.
pub fn all_categories(kb: &KnowledgeBase) -> String {
    let sections: Vec<String> = kb
        .categories()
        .iter()
        .map(|category| category_section(kb.icon(category.key), category))
        .collect();
    format!("{ALL_CATEGORIES_HEADING}\n\n{}", sections.join("\n\n"))
}

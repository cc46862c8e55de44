use crate::format;
use crate::knowledge::KnowledgeBase;
use crate::protocol::ListServersParams;

use super::Resolution;

/// Category value that selects the whole directory.
pub const ALL: &str = "all";

/// Handle a `list_servers` tool call.
///
/// `all` renders every category in definition order under one heading; a
/// known category renders just its own section, byte-identical to the way it
/// appears in the full listing.
pub fn handle(params: ListServersParams, kb: &KnowledgeBase) -> Resolution {
    let category = params.category.to_lowercase();

    if category == ALL {
        return Resolution::Resolved(format::all_categories(kb));
    }

    match kb.category(&category) {
        Some(found) => Resolution::Resolved(format::category_section(kb.icon(found.key), found)),
        None => {
            let available: Vec<&str> = kb.categories().iter().map(|c| c.key).collect();
            Resolution::NotFoundAdvisory(format!(
                "Unknown category: \"{category}\". Available categories: {}, or \"{ALL}\" for every category",
                available.join(", ")
            ))
        }
    }
}

use crate::knowledge::KnowledgeBase;
use crate::protocol::ShowExampleParams;

use super::Resolution;

/// Handle a `show_example` tool call.
pub fn handle(params: ShowExampleParams, kb: &KnowledgeBase) -> Resolution {
    let feature = params.feature.to_lowercase();

    match kb.features().get(&feature) {
        Some(text) => Resolution::Resolved(text.to_string()),
        None => {
            let available: Vec<&str> = kb.features().keys().collect();
            Resolution::NotFoundAdvisory(format!(
                "I don't have an example for \"{feature}\" yet. Available examples: {}",
                available.join(", ")
            ))
        }
    }
}

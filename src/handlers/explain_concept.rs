use crate::knowledge::KnowledgeBase;
use crate::protocol::ExplainConceptParams;

use super::Resolution;

/// Handle an `explain_concept` tool call.
///
/// The concept name is lower-cased before lookup. An unknown concept is not
/// an error: the reply names every concept the guide can explain.
pub fn handle(params: ExplainConceptParams, kb: &KnowledgeBase) -> Resolution {
    let concept = params.concept.to_lowercase();

    match kb.concepts().get(&concept) {
        Some(text) => Resolution::Resolved(text.to_string()),
        None => {
            let available: Vec<&str> = kb.concepts().keys().collect();
            Resolution::NotFoundAdvisory(format!(
                "I don't have an explanation for \"{concept}\" yet. Available concepts: {}",
                available.join(", ")
            ))
        }
    }
}

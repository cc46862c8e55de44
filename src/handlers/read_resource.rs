use crate::knowledge::KnowledgeBase;
use crate::protocol::{ProtocolError, ReadResourceParams, ReadResourceResult, ResourceContents};

/// Handle a `resources/read` request.
///
/// URIs match exactly. Guides form an enumerable namespace, so an unknown
/// URI is a client error rather than advisory content.
pub fn handle(
    params: ReadResourceParams,
    kb: &KnowledgeBase,
) -> Result<ReadResourceResult, ProtocolError> {
    let guide = kb
        .guide(&params.uri)
        .ok_or_else(|| ProtocolError::ResourceNotFound(params.uri.clone()))?;

    Ok(ReadResourceResult {
        contents: vec![ResourceContents {
            uri: params.uri,
            mime_type: guide.mime_type().into(),
            text: guide.body.into(),
        }],
    })
}

use crate::knowledge::KnowledgeBase;
use crate::protocol::{
    GetPromptParams, GetPromptResult, PromptMessage, ProtocolError, Role, TextContent,
};

/// Handle a `prompts/get` request.
///
/// Missing arguments are never an error; the template substitutes its
/// defaults. Only an unknown prompt name fails.
pub fn handle(
    params: GetPromptParams,
    kb: &KnowledgeBase,
) -> Result<GetPromptResult, ProtocolError> {
    let template = kb
        .prompt(&params.name)
        .ok_or_else(|| ProtocolError::UnknownPrompt(params.name.clone()))?;

    let arguments = params.arguments.unwrap_or_default();
    let text = template.render(&arguments);

    Ok(GetPromptResult {
        description: template.description.into(),
        messages: vec![PromptMessage {
            role: Role::User,
            content: TextContent::new(text),
        }],
    })
}

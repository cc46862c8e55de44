//! Static catalogs returned by the `*/list` methods. None of them can fail.

use crate::knowledge::KnowledgeBase;
use crate::protocol::{
    ListPromptsResult, ListResourcesResult, ListToolsResult, PromptArgument, PromptDescriptor,
    ResourceDescriptor,
};

use super::tools::Tool;

pub fn list_tools(kb: &KnowledgeBase) -> ListToolsResult {
    ListToolsResult {
        tools: Tool::ALL.iter().map(|tool| tool.descriptor(kb)).collect(),
    }
}

pub fn list_resources(kb: &KnowledgeBase) -> ListResourcesResult {
    ListResourcesResult {
        resources: kb
            .guides()
            .iter()
            .map(|guide| ResourceDescriptor {
                uri: guide.uri.into(),
                name: guide.name.into(),
                description: guide.description.into(),
                mime_type: guide.mime_type().into(),
            })
            .collect(),
    }
}

pub fn list_prompts(kb: &KnowledgeBase) -> ListPromptsResult {
    ListPromptsResult {
        prompts: kb
            .prompts()
            .iter()
            .map(|prompt| PromptDescriptor {
                name: prompt.name.into(),
                description: prompt.description.into(),
                arguments: prompt
                    .arguments
                    .iter()
                    .map(|arg| PromptArgument {
                        name: arg.name.into(),
                        description: arg.description.into(),
                        required: arg.required,
                    })
                    .collect(),
            })
            .collect(),
    }
}

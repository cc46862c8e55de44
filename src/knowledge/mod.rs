//! Immutable knowledge tables served by the guide.
//!
//! Everything here is built once by [`KnowledgeBase::builtin`] and then only
//! read. Concept, feature and category lookups are case-insensitive; guide
//! URIs and prompt names match exactly.

mod concepts;
mod features;
mod guides;
pub mod prompts;
mod servers;

pub use prompts::{PromptArgumentSpec, PromptKind, PromptTemplate};

/// Glyph used for categories that have no icon of their own.
pub const DEFAULT_ICON: &str = "📦";

/// MIME type of every guide document.
pub const GUIDE_MIME_TYPE: &str = "text/markdown";

/// Ordered `(key, text)` table with case-insensitive lookup.
#[derive(Debug, Clone)]
pub struct Table {
    entries: Vec<(&'static str, &'static str)>,
}

impl Table {
    fn from_static(entries: &[(&'static str, &'static str)]) -> Self {
        Self {
            entries: entries.to_vec(),
        }
    }

    /// Look up `key` after lower-casing it.
    pub fn get(&self, key: &str) -> Option<&'static str> {
        let key = key.to_lowercase();
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, text)| *text)
    }

    /// Keys in definition order.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(k, _)| *k)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One listed MCP server, displayed as `identifier - description`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    pub identifier: &'static str,
    pub description: &'static str,
}

impl DirectoryEntry {
    /// Split a `"identifier - description"` line on its first separator.
    pub fn parse(line: &'static str) -> Self {
        match line.split_once(" - ") {
            Some((identifier, description)) => Self {
                identifier,
                description,
            },
            None => Self {
                identifier: line,
                description: "",
            },
        }
    }
}

impl std::fmt::Display for DirectoryEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.description.is_empty() {
            f.write_str(self.identifier)
        } else {
            write!(f, "{} - {}", self.identifier, self.description)
        }
    }
}

/// A server category and its entries in display order.
#[derive(Debug, Clone)]
pub struct Category {
    pub key: &'static str,
    pub entries: Vec<DirectoryEntry>,
}

/// A readable documentation resource.
#[derive(Debug, Clone)]
pub struct GuideDocument {
    pub uri: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub body: &'static str,
}

impl GuideDocument {
    pub fn mime_type(&self) -> &'static str {
        GUIDE_MIME_TYPE
    }
}

#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    concepts: Table,
    features: Table,
    categories: Vec<Category>,
    icons: Vec<(&'static str, &'static str)>,
    guides: Vec<GuideDocument>,
    prompts: Vec<PromptTemplate>,
}

impl KnowledgeBase {
    /// Build the knowledge base shipped with the server.
    pub fn builtin() -> Self {
        let categories = servers::CATEGORIES
            .iter()
            .map(|&(key, lines)| Category {
                key,
                entries: lines.iter().copied().map(DirectoryEntry::parse).collect(),
            })
            .collect();

        let guides = guides::DOCUMENTS
            .iter()
            .map(|&(uri, name, description, body)| GuideDocument {
                uri,
                name,
                description,
                body,
            })
            .collect();

        Self {
            concepts: Table::from_static(concepts::EXPLANATIONS),
            features: Table::from_static(features::EXAMPLES),
            categories,
            icons: servers::ICONS.to_vec(),
            guides,
            prompts: PromptKind::ALL.iter().map(|kind| kind.template()).collect(),
        }
    }

    pub fn concepts(&self) -> &Table {
        &self.concepts
    }

    pub fn features(&self) -> &Table {
        &self.features
    }

    /// Categories in definition order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Case-insensitive category lookup.
    pub fn category(&self, key: &str) -> Option<&Category> {
        let key = key.to_lowercase();
        self.categories.iter().find(|c| c.key == key)
    }

    /// Icon for a category key, or [`DEFAULT_ICON`] when none is assigned.
    pub fn icon(&self, key: &str) -> &'static str {
        self.icons
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, icon)| *icon)
            .unwrap_or(DEFAULT_ICON)
    }

    pub fn guides(&self) -> &[GuideDocument] {
        &self.guides
    }

    /// Exact-match guide lookup by URI.
    pub fn guide(&self, uri: &str) -> Option<&GuideDocument> {
        self.guides.iter().find(|g| g.uri == uri)
    }

    pub fn prompts(&self) -> &[PromptTemplate] {
        &self.prompts
    }

    /// Exact-match prompt lookup by name.
    pub fn prompt(&self, name: &str) -> Option<&PromptTemplate> {
        let kind = PromptKind::from_name(name)?;
        self.prompts.iter().find(|p| p.kind == kind)
    }
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self::builtin()
    }
}

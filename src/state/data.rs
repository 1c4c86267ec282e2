//! Shared data structures for the portfolio catalog
//!
//! These structs represent the data model that flows between
//! the store and the presentation layer.

use serde::{Deserialize, Serialize};

/// Installation text shown when a project does not provide one
pub const DEFAULT_INSTALLATION: &str = "npm install";

/// Usage text shown when a project does not provide one
pub const DEFAULT_USAGE: &str = "Run the application.";

/// Represents a single project in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectRecord {
    /// Human-readable title, unique across the store (doubles as the identifier)
    pub title: String,
    /// Short summary
    pub description: String,
    /// Technology tags, in display order
    #[serde(default)]
    pub tags: Vec<String>,
    /// Category name (e.g. "AI & ML"), used for grouping and icon selection
    pub category: String,
    /// Shown in the home page highlight list
    #[serde(default)]
    pub featured: bool,
    /// Preformatted directory tree, passed through untouched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_structure: Option<String>,
    /// Long-form details for the detail page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<ProjectDetails>,
    /// Position in the store (0 = newest), assigned once at store construction
    #[serde(skip)]
    pub(crate) sequence_index: usize,
}

/// Optional long-form project details
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overview: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub installation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<String>,
}

impl ProjectRecord {
    /// Create a record with no file structure or details
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        tags: Vec<String>,
        category: impl Into<String>,
        featured: bool,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            tags,
            category: category.into(),
            featured,
            file_structure: None,
            details: None,
            sequence_index: 0,
        }
    }

    /// Attach long-form details
    pub fn with_details(mut self, details: ProjectDetails) -> Self {
        self.details = Some(details);
        self
    }

    /// Attach a preformatted file tree
    pub fn with_file_structure(mut self, tree: impl Into<String>) -> Self {
        self.file_structure = Some(tree.into());
        self
    }

    /// Position in the store's canonical order (0 = newest)
    pub fn sequence_index(&self) -> usize {
        self.sequence_index
    }

    /// The first `limit` tags plus how many were left out
    ///
    /// List views show a few tags and a "+N" badge for the rest.
    pub fn tag_preview(&self, limit: usize) -> (&[String], usize) {
        let shown = self.tags.len().min(limit);
        (&self.tags[..shown], self.tags.len() - shown)
    }

    /// Resolve the detail page content, applying fallbacks for missing fields
    pub fn detail_view(&self) -> DetailView<'_> {
        let details = self.details.as_ref();
        DetailView {
            project: self,
            overview: details
                .and_then(|d| d.overview.as_deref())
                .unwrap_or(&self.description),
            features: details.map(|d| d.features.as_slice()).unwrap_or(&[]),
            installation: details
                .and_then(|d| d.installation.as_deref())
                .unwrap_or(DEFAULT_INSTALLATION),
            usage: details
                .and_then(|d| d.usage.as_deref())
                .unwrap_or(DEFAULT_USAGE),
            file_structure: self.file_structure.as_deref(),
        }
    }
}

/// Detail page content with every fallback already applied
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetailView<'a> {
    pub project: &'a ProjectRecord,
    pub overview: &'a str,
    pub features: &'a [String],
    pub installation: &'a str,
    pub usage: &'a str,
    pub file_structure: Option<&'a str>,
}

/// A skills showcase tile on the home page; selecting it opens its category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillTile {
    pub category: String,
    #[serde(default)]
    pub skills: Vec<String>,
}

/// The on-disk data set: skill tiles plus projects in canonical order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PortfolioData {
    #[serde(default)]
    pub skills: Vec<SkillTile>,
    #[serde(default)]
    pub projects: Vec<ProjectRecord>,
}

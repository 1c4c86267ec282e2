//! Category table: the recognised categories and the icon token for each.
//!
//! Category names are free text everywhere else in the crate. This table is
//! only a rendering hint; an unknown name maps to the default icon.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Reserved filter value meaning "no category filter"
pub const ALL_CATEGORIES: &str = "All";

/// Rendering token for a category icon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CategoryIcon {
    Brain,
    Smartphone,
    Database,
    Wifi,
    /// Fallback for unrecognised categories
    Code,
}

/// One row of the category table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryStyle {
    pub name: &'static str,
    pub icon: CategoryIcon,
    /// Accent color name for the presentation layer
    pub accent: &'static str,
}

const DEFAULT_STYLE: CategoryStyle = CategoryStyle {
    name: "",
    icon: CategoryIcon::Code,
    accent: "neutral",
};

/// Recognised categories, in filter-control order
pub const KNOWN_CATEGORIES: [CategoryStyle; 4] = [
    CategoryStyle {
        name: "AI & ML",
        icon: CategoryIcon::Brain,
        accent: "blue",
    },
    CategoryStyle {
        name: "App Development",
        icon: CategoryIcon::Smartphone,
        accent: "purple",
    },
    CategoryStyle {
        name: "Backend & DB",
        icon: CategoryIcon::Database,
        accent: "green",
    },
    CategoryStyle {
        name: "IoT & Hardware",
        icon: CategoryIcon::Wifi,
        accent: "orange",
    },
];

/// Look up the style for a category name (exact match, default otherwise)
pub fn style_for(category: &str) -> CategoryStyle {
    KNOWN_CATEGORIES
        .iter()
        .copied()
        .find(|style| style.name == category)
        .unwrap_or(DEFAULT_STYLE)
}

pub fn icon_for(category: &str) -> CategoryIcon {
    style_for(category).icon
}

/// Category selection for the archive view: the "All" sentinel or one name
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    /// Parse a filter control value; `"All"` is the sentinel
    pub fn parse(value: &str) -> Self {
        if value == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(value.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Only(name) => name,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, CategoryFilter::All)
    }
}

impl From<&str> for CategoryFilter {
    fn from(value: &str) -> Self {
        CategoryFilter::parse(value)
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options for the archive filter control: "All" then every known category
pub fn filter_options() -> Vec<CategoryFilter> {
    std::iter::once(CategoryFilter::All)
        .chain(
            KNOWN_CATEGORIES
                .iter()
                .map(|style| CategoryFilter::Only(style.name.to_string())),
        )
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_categories_map_to_icons() {
        assert_eq!(icon_for("AI & ML"), CategoryIcon::Brain);
        assert_eq!(icon_for("App Development"), CategoryIcon::Smartphone);
        assert_eq!(icon_for("Backend & DB"), CategoryIcon::Database);
        assert_eq!(icon_for("IoT & Hardware"), CategoryIcon::Wifi);
    }

    #[test]
    fn test_unknown_category_degrades_to_default() {
        assert_eq!(icon_for("Game Dev"), CategoryIcon::Code);
        assert_eq!(icon_for("ai & ml"), CategoryIcon::Code);
        assert_eq!(style_for("").accent, "neutral");
    }

    #[test]
    fn test_filter_parse_recognises_sentinel() {
        assert_eq!(CategoryFilter::parse("All"), CategoryFilter::All);
        assert_eq!(CategoryFilter::parse("all"), CategoryFilter::Only("all".to_string()));
        assert_eq!(CategoryFilter::from("AI & ML").to_string(), "AI & ML");
    }

    #[test]
    fn test_filter_options_start_with_all() {
        let options = filter_options();
        assert_eq!(options.len(), 5);
        assert_eq!(options[0], CategoryFilter::All);
        assert_eq!(options[4].as_str(), "IoT & Hardware");
    }
}

//! Archive view parameters
//!
//! The full project archive is driven by three independent controls: the
//! search box, the category filter and the sort order. Changing any of them
//! replaces the parameters and keeps the archive open.

use serde::{Deserialize, Serialize};

use crate::catalog::category::CategoryFilter;
use crate::catalog::query::SortOrder;

/// All parameters for the archive view
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ArchiveParams {
    /// Free-text search, matched case-insensitively; empty = no search
    pub search_query: String,

    /// Category filter; `All` = no filter
    pub category: CategoryFilter,

    pub sort_order: SortOrder,
}

impl ArchiveParams {
    /// Create default parameters (everything, newest first)
    pub fn new() -> Self {
        Self::default()
    }

    /// True when neither search nor category narrows the list
    pub fn is_unfiltered(&self) -> bool {
        self.search_query.is_empty() && self.category.is_all()
    }

    /// Drop search text and category filter, keeping the sort order
    pub fn clear_filters(&mut self) {
        self.search_query.clear();
        self.category = CategoryFilter::All;
    }

    pub fn with_search(self, search_query: impl Into<String>) -> Self {
        Self {
            search_query: search_query.into(),
            ..self
        }
    }

    pub fn with_category(self, category: CategoryFilter) -> Self {
        Self { category, ..self }
    }

    pub fn with_sort(self, sort_order: SortOrder) -> Self {
        Self { sort_order, ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unfiltered() {
        let params = ArchiveParams::default();
        assert!(params.is_unfiltered());
        assert_eq!(params.sort_order, SortOrder::Newest);
    }

    #[test]
    fn test_clear_filters_keeps_sort() {
        let mut params = ArchiveParams::new()
            .with_search("flutter")
            .with_category(CategoryFilter::parse("App Development"))
            .with_sort(SortOrder::NameDesc);

        assert!(!params.is_unfiltered());

        params.clear_filters();

        assert!(params.is_unfiltered());
        assert_eq!(params.sort_order, SortOrder::NameDesc);
    }

    #[test]
    fn test_sort_alone_is_unfiltered() {
        let params = ArchiveParams::new().with_sort(SortOrder::Oldest);
        assert!(params.is_unfiltered());
    }
}

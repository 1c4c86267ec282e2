//! Query engine: pure derivations of display lists from the store.
//!
//! Every function takes a slice of borrowed records and returns a new list
//! of borrows; nothing here mutates the store or keeps state between calls.
//! The archive view composes them in a fixed order: category filter, then
//! search, then sort.

use std::cmp::{Ordering, Reverse};
use std::fmt;

use feruca::{Collator, Locale, Tailoring};
use serde::{Deserialize, Serialize};

use super::category::CategoryFilter;
use crate::state::archive::ArchiveParams;
use crate::state::data::ProjectRecord;

/// Archive sort order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortOrder {
    /// Store order (index 0 first)
    #[default]
    Newest,
    /// Reverse store order
    Oldest,
    NameAsc,
    NameDesc,
}

impl SortOrder {
    pub const ALL: [SortOrder; 4] = [
        SortOrder::Newest,
        SortOrder::Oldest,
        SortOrder::NameAsc,
        SortOrder::NameDesc,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SortOrder::Newest => "Date (Newest)",
            SortOrder::Oldest => "Date (Oldest)",
            SortOrder::NameAsc => "Name (A-Z)",
            SortOrder::NameDesc => "Name (Z-A)",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Keep records in the selected category; `All` returns the input unchanged
pub fn filter_by_category<'a>(
    records: &[&'a ProjectRecord],
    filter: &CategoryFilter,
) -> Vec<&'a ProjectRecord> {
    match filter {
        CategoryFilter::All => records.to_vec(),
        CategoryFilter::Only(category) => by_category(records, category),
    }
}

/// Keep records whose category equals `category` exactly (no sentinel)
pub fn by_category<'a>(records: &[&'a ProjectRecord], category: &str) -> Vec<&'a ProjectRecord> {
    records
        .iter()
        .copied()
        .filter(|record| record.category == category)
        .collect()
}

/// Case-insensitive substring search over title, description and tags
///
/// An empty query returns the input unchanged.
pub fn filter_by_search<'a>(records: &[&'a ProjectRecord], query: &str) -> Vec<&'a ProjectRecord> {
    if query.is_empty() {
        return records.to_vec();
    }
    let needle = query.to_lowercase();
    records
        .iter()
        .copied()
        .filter(|record| matches_search(record, &needle))
        .collect()
}

/// `needle` must already be lowercased
fn matches_search(record: &ProjectRecord, needle: &str) -> bool {
    record.title.to_lowercase().contains(needle)
        || record.description.to_lowercase().contains(needle)
        || record
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(needle))
}

/// Stable sort; equal keys keep their relative input order
pub fn sort<'a>(records: &[&'a ProjectRecord], order: SortOrder) -> Vec<&'a ProjectRecord> {
    let mut sorted = records.to_vec();
    match order {
        SortOrder::Newest => sorted.sort_by_key(|record| record.sequence_index()),
        SortOrder::Oldest => sorted.sort_by_key(|record| Reverse(record.sequence_index())),
        SortOrder::NameAsc => {
            let mut collator = collator();
            sorted.sort_by(|a, b| collator.collate(a.title.as_str(), b.title.as_str()));
        }
        SortOrder::NameDesc => {
            let mut collator = collator();
            sorted.sort_by(|a, b| collator.collate(b.title.as_str(), a.title.as_str()));
        }
    }
    sorted
}

/// Records flagged for the home page, in input order
pub fn featured<'a>(records: &[&'a ProjectRecord]) -> Vec<&'a ProjectRecord> {
    records.iter().copied().filter(|record| record.featured).collect()
}

/// The archive view's list: category filter, then search, then sort
pub fn archive<'a>(
    records: &[&'a ProjectRecord],
    params: &ArchiveParams,
) -> Vec<&'a ProjectRecord> {
    let scoped = filter_by_category(records, &params.category);
    let matched = filter_by_search(&scoped, &params.search_query);
    sort(&matched, params.sort_order)
}

/// Locale-aware string ordering for titles
///
/// CLDR root collation with punctuation and spaces weighted (not ignored):
/// accents and case only break ties between otherwise equal letters, and
/// lowercase sorts before uppercase.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    collator().collate(a, b)
}

fn collator() -> Collator {
    Collator::new(Tailoring::Cldr(Locale::Root), false, true)
}

//! View state controller.
//!
//! The current screen is a single sum type whose variants carry exactly the
//! parameters that screen needs. Navigation actions replace it wholesale
//! through a pure transition function; the controller only owns the
//! current value.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::archive::ArchiveParams;
use crate::catalog::category::CategoryFilter;
use crate::catalog::query::SortOrder;

/// Which screen is active
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "view", rename_all = "camelCase")]
pub enum ViewState {
    /// Biography, skill tiles and featured projects.
    #[default]
    Home,
    /// The full, searchable project archive.
    Archive(ArchiveParams),
    /// Projects of one category.
    Category { category_name: String },
    /// One project's detail page.
    Detail { project_title: String },
}

/// Navigation actions raised by the presentation layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavAction {
    /// "View all projects".
    ViewArchive,
    /// A skill tile or category link.
    SelectCategory { category_name: String },
    /// Any project card.
    SelectProject { project_title: String },
    /// Back button or logo.
    GoHome,
    /// Archive search box edited.
    SetSearch { query: String },
    /// Archive category filter changed.
    SetCategoryFilter { category: CategoryFilter },
    /// Archive sort order changed.
    SetSortOrder { order: SortOrder },
    /// Archive "clear filters".
    ClearFilters,
}

impl ViewState {
    pub fn is_home(&self) -> bool {
        matches!(self, ViewState::Home)
    }

    /// Archive parameters, when the archive is open
    pub fn archive_params(&self) -> Option<&ArchiveParams> {
        match self {
            ViewState::Archive(params) => Some(params),
            _ => None,
        }
    }

    /// Short name for logs
    pub fn name(&self) -> &'static str {
        match self {
            ViewState::Home => "home",
            ViewState::Archive(_) => "archive",
            ViewState::Category { .. } => "category",
            ViewState::Detail { .. } => "detail",
        }
    }
}

/// Pure view state transition.
///
/// Screen changes (`ViewArchive`, `SelectCategory`, `SelectProject`,
/// `GoHome`) are accepted from any state. Archive edits only apply while the
/// archive is open and are ignored elsewhere.
pub fn transition(state: ViewState, action: NavAction) -> ViewState {
    match (state, action) {
        (_, NavAction::ViewArchive) => ViewState::Archive(ArchiveParams::default()),
        (_, NavAction::SelectCategory { category_name }) => ViewState::Category { category_name },
        (_, NavAction::SelectProject { project_title }) => ViewState::Detail { project_title },
        (_, NavAction::GoHome) => ViewState::Home,
        (ViewState::Archive(params), NavAction::SetSearch { query }) => {
            ViewState::Archive(params.with_search(query))
        }
        (ViewState::Archive(params), NavAction::SetCategoryFilter { category }) => {
            ViewState::Archive(params.with_category(category))
        }
        (ViewState::Archive(params), NavAction::SetSortOrder { order }) => {
            ViewState::Archive(params.with_sort(order))
        }
        (ViewState::Archive(mut params), NavAction::ClearFilters) => {
            params.clear_filters();
            ViewState::Archive(params)
        }
        (state, action) => {
            debug!(view = state.name(), ?action, "archive action outside the archive ignored");
            state
        }
    }
}

/// Owns the current view state for the session
///
/// Starts at `Home`; there is no terminal state and nothing is persisted.
#[derive(Debug, Clone, Default)]
pub struct ViewController {
    current: ViewState,
}

impl ViewController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a given state (e.g. a deep link)
    pub fn starting_at(state: ViewState) -> Self {
        Self { current: state }
    }

    pub fn current(&self) -> &ViewState {
        &self.current
    }

    /// Apply an action and return the new state
    pub fn dispatch(&mut self, action: NavAction) -> &ViewState {
        let from = self.current.name();
        let previous = std::mem::take(&mut self.current);
        self.current = transition(previous, action);
        debug!(from, to = self.current.name(), "view transition");
        &self.current
    }
}

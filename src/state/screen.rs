//! Screen resolution: what the presentation layer renders for a view state.

use super::archive::ArchiveParams;
use super::data::{DetailView, ProjectRecord, SkillTile};
use super::view::ViewState;
use crate::catalog::navigator::Navigator;
use crate::catalog::query;
use crate::error::NotFound;

/// Fully resolved content for the active view
#[derive(Debug, Clone, PartialEq)]
pub enum Screen<'a> {
    Home {
        featured: Vec<&'a ProjectRecord>,
        skills: &'a [SkillTile],
        project_count: usize,
    },
    Archive {
        params: &'a ArchiveParams,
        /// Empty means "no matches", not "still loading"
        projects: Vec<&'a ProjectRecord>,
    },
    Category {
        category_name: &'a str,
        projects: Vec<&'a ProjectRecord>,
    },
    /// `Err` renders the not-found page with a link back to the archive
    Detail(Result<DetailView<'a>, NotFound>),
}

impl<'a> Screen<'a> {
    pub fn resolve(view: &'a ViewState, navigator: &Navigator<'a>) -> Self {
        let store = navigator.store();
        match view {
            ViewState::Home => Screen::Home {
                featured: query::featured(&store.records()),
                skills: store.skills(),
                project_count: store.len(),
            },
            ViewState::Archive(params) => Screen::Archive {
                params,
                projects: query::archive(&store.records(), params),
            },
            ViewState::Category { category_name } => Screen::Category {
                category_name: category_name.as_str(),
                projects: navigator.resolve_category(category_name),
            },
            ViewState::Detail { project_title } => Screen::Detail(navigator.detail(project_title)),
        }
    }
}

//! Path routes for deep links and the host's history.
//!
//! `/` home, `/projects` archive, `/category/<segment>` category,
//! `/project/<identifier>` detail. Unknown paths and category segments that
//! do not decode fall back to home. A project identifier is kept encoded
//! until `open`, where the navigator reports a bad one as not found.

use tracing::debug;

use super::navigator::{decode_title, encode_title, Navigator};
use crate::error::NotFound;
use crate::state::view::ViewState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Projects,
    /// Decoded category name
    Category(String),
    /// Encoded project identifier, as it appeared in the path
    Project(String),
}

impl Route {
    /// Parse a path; unknown paths map to `Home`
    pub fn parse(path: &str) -> Self {
        let trimmed = path.trim_matches('/');
        let mut segments = trimmed.splitn(2, '/');
        let route = match (segments.next(), segments.next()) {
            (Some(""), None) => Some(Route::Home),
            (Some("projects"), None) => Some(Route::Projects),
            (Some("category"), Some(segment)) if !segment.contains('/') => {
                decode_title(segment).ok().map(Route::Category)
            }
            (Some("project"), Some(segment)) if !segment.contains('/') => {
                Some(Route::Project(segment.to_string()))
            }
            _ => None,
        };

        route.unwrap_or_else(|| {
            debug!(path, "unrouted path, falling back to home");
            Route::Home
        })
    }

    pub fn to_path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Projects => "/projects".to_string(),
            Route::Category(name) => format!("/category/{}", encode_title(name)),
            Route::Project(identifier) => format!("/project/{identifier}"),
        }
    }

    /// The route a view state is reachable at
    ///
    /// Archive parameters are not part of the path.
    pub fn from_view(view: &ViewState) -> Self {
        match view {
            ViewState::Home => Route::Home,
            ViewState::Archive(_) => Route::Projects,
            ViewState::Category { category_name } => Route::Category(category_name.clone()),
            ViewState::Detail { project_title } => Route::Project(encode_title(project_title)),
        }
    }

    /// The view state this route opens, with default archive parameters
    ///
    /// A project identifier goes through `Navigator::resolve_detail`, so a
    /// malformed escape and an unknown title both come back as `NotFound`.
    pub fn open(self, navigator: &Navigator<'_>) -> Result<ViewState, NotFound> {
        match self {
            Route::Home => Ok(ViewState::Home),
            Route::Projects => Ok(ViewState::Archive(Default::default())),
            Route::Category(category_name) => Ok(ViewState::Category { category_name }),
            Route::Project(identifier) => navigator
                .resolve_detail(&identifier)
                .map(|project| ViewState::Detail {
                    project_title: project.title.clone(),
                }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::data::ProjectRecord;
    use crate::state::library::ProjectStore;

    fn store() -> ProjectStore {
        let record = |title: &str| ProjectRecord::new(title, "", Vec::new(), "AI & ML", false);
        ProjectStore::from_records(vec![
            record("Legal RAG System"),
            record("ExoSeek (Exo_Planet)"),
            record("100%"),
        ])
        .unwrap()
    }

    #[test]
    fn test_parse_known_paths() {
        assert_eq!(Route::parse("/"), Route::Home);
        assert_eq!(Route::parse(""), Route::Home);
        assert_eq!(Route::parse("/projects"), Route::Projects);
        assert_eq!(Route::parse("/projects/"), Route::Projects);
        assert_eq!(
            Route::parse("/category/AI%20%26%20ML"),
            Route::Category("AI & ML".to_string())
        );
        assert_eq!(
            Route::parse("/project/Legal%20RAG%20System"),
            Route::Project("Legal%20RAG%20System".to_string())
        );
    }

    #[test]
    fn test_unknown_paths_fall_back_home() {
        assert_eq!(Route::parse("/about"), Route::Home);
        assert_eq!(Route::parse("/project/"), Route::Home);
        assert_eq!(Route::parse("/project/a/b"), Route::Home);
        assert_eq!(Route::parse("/category/100%"), Route::Home);
    }

    #[test]
    fn test_open_project_resolves_through_navigator() {
        let store = store();
        let navigator = Navigator::new(&store);

        assert_eq!(
            Route::parse("/project/Legal%20RAG%20System").open(&navigator),
            Ok(ViewState::Detail {
                project_title: "Legal RAG System".to_string()
            })
        );
        assert_eq!(
            Route::parse("/project/100%25").open(&navigator),
            Ok(ViewState::Detail {
                project_title: "100%".to_string()
            })
        );
    }

    #[test]
    fn test_malformed_project_identifier_opens_as_not_found() {
        let store = store();
        let navigator = Navigator::new(&store);

        // same outcome as an unknown title, never home
        assert_eq!(
            Route::parse("/project/100%").open(&navigator),
            Err(NotFound::new("100%"))
        );
        assert_eq!(
            Route::parse("/project/nonexistent").open(&navigator),
            Err(NotFound::new("nonexistent"))
        );
    }

    #[test]
    fn test_path_for_view_round_trips() {
        let store = store();
        let navigator = Navigator::new(&store);
        let views = [
            ViewState::Home,
            ViewState::Archive(Default::default()),
            ViewState::Category {
                category_name: "Backend & DB".to_string(),
            },
            ViewState::Detail {
                project_title: "ExoSeek (Exo_Planet)".to_string(),
            },
        ];
        for view in views {
            let path = Route::from_view(&view).to_path();
            assert_eq!(Route::parse(&path).open(&navigator), Ok(view), "path {path}");
        }
    }
}

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::data::{PortfolioData, ProjectRecord, SkillTile};
use crate::error::{LoadError, NotFound};

/// The data set compiled into the binary
const BUNDLED_DATA: &str = include_str!("../../data/portfolio.json");

/// Where a store's data set came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    Bundled,
    File(PathBuf),
    /// Built directly from records (tests, embedding)
    Memory,
}

/// The ProjectStore holds the canonical, ordered list of projects.
///
/// It is built once at startup and is read-only afterwards: there are no
/// update or delete operations. Index 0 is the newest project, and each
/// record carries that position as its `sequence_index`.
pub struct ProjectStore {
    projects: Vec<ProjectRecord>,
    skills: Vec<SkillTile>,
    by_title: HashMap<String, usize>,
    source: DataSource,
}

impl ProjectStore {
    /// Build a store from records in canonical order
    ///
    /// Fails fast on an empty or duplicated title, since titles are the
    /// lookup key for detail pages.
    pub fn from_records(projects: Vec<ProjectRecord>) -> Result<Self, LoadError> {
        Self::build(
            PortfolioData {
                skills: Vec::new(),
                projects,
            },
            DataSource::Memory,
        )
    }

    /// Build a store from a parsed data set
    pub fn from_data(data: PortfolioData) -> Result<Self, LoadError> {
        Self::build(data, DataSource::Memory)
    }

    /// Load the data set that ships with the binary
    pub fn bundled() -> Result<Self, LoadError> {
        let data: PortfolioData = serde_json::from_str(BUNDLED_DATA)?;
        Self::build(data, DataSource::Bundled)
    }

    /// Load a JSON data set from disk
    pub fn load_from_path(path: &Path) -> Result<Self, LoadError> {
        let raw = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let data: PortfolioData = serde_json::from_str(&raw)?;
        Self::build(data, DataSource::File(path.to_path_buf()))
    }

    /// Load from `path` when given, otherwise the bundled data set
    pub fn load(path: Option<&Path>) -> Result<Self, LoadError> {
        match path {
            Some(path) => Self::load_from_path(path),
            None => Self::bundled(),
        }
    }

    fn build(data: PortfolioData, source: DataSource) -> Result<Self, LoadError> {
        let PortfolioData { skills, mut projects } = data;
        let mut by_title = HashMap::with_capacity(projects.len());

        for (position, project) in projects.iter_mut().enumerate() {
            if project.title.is_empty() {
                return Err(LoadError::EmptyTitle { position });
            }
            if let Some(&first) = by_title.get(&project.title) {
                return Err(LoadError::DuplicateTitle {
                    title: project.title.clone(),
                    first,
                    second: position,
                });
            }
            project.sequence_index = position;
            by_title.insert(project.title.clone(), position);
        }

        let store = ProjectStore {
            projects,
            skills,
            by_title,
            source,
        };

        info!(
            projects = store.len(),
            featured = store.featured_count(),
            source = ?store.source,
            "project catalog loaded"
        );

        Ok(store)
    }

    /// All projects in canonical order
    pub fn all(&self) -> &[ProjectRecord] {
        &self.projects
    }

    /// All projects as borrowed references, ready to feed the query engine
    pub fn records(&self) -> Vec<&ProjectRecord> {
        self.projects.iter().collect()
    }

    /// Exact, case-sensitive title lookup
    pub fn by_title(&self, title: &str) -> Result<&ProjectRecord, NotFound> {
        match self.by_title.get(title) {
            Some(&index) => Ok(&self.projects[index]),
            None => {
                debug!(title, "no project with this title");
                Err(NotFound::new(title))
            }
        }
    }

    /// Skills showcase tiles, in data set order
    pub fn skills(&self) -> &[SkillTile] {
        &self.skills
    }

    /// Number of projects in the store
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Number of projects flagged for the home page
    pub fn featured_count(&self) -> usize {
        self.projects.iter().filter(|p| p.featured).count()
    }

    /// Where the data set was loaded from
    pub fn source(&self) -> &DataSource {
        &self.source
    }
}

// Implement Debug without dumping every record
impl std::fmt::Debug for ProjectStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProjectStore")
            .field("projects", &self.projects.len())
            .field("skills", &self.skills.len())
            .field("source", &self.source)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn record(title: &str, category: &str) -> ProjectRecord {
        ProjectRecord::new(
            title,
            format!("{title} description"),
            vec!["Rust".to_string()],
            category,
            false,
        )
    }

    #[test]
    fn test_sequence_index_follows_insertion_order() {
        let store = ProjectStore::from_records(vec![
            record("Fuel Tracker", "App Development"),
            record("Pokedex Pro", "App Development"),
            record("Legal RAG System", "AI & ML"),
        ])
        .unwrap();

        let indices: Vec<usize> = store.all().iter().map(|p| p.sequence_index()).collect();
        assert_eq!(indices, vec![0, 1, 2]);
        assert_eq!(store.all()[2].title, "Legal RAG System");
    }

    #[test]
    fn test_all_is_stable_across_calls() {
        let store =
            ProjectStore::from_records(vec![record("A", "AI & ML"), record("B", "AI & ML")])
                .unwrap();
        assert_eq!(store.all(), store.all());
        assert_eq!(store.records(), store.records());
    }

    #[test]
    fn test_by_title_is_exact_and_case_sensitive() {
        let store =
            ProjectStore::from_records(vec![record("RecipeMedia", "App Development")]).unwrap();

        assert_eq!(store.by_title("RecipeMedia").unwrap().title, "RecipeMedia");
        assert_eq!(store.by_title("recipemedia"), Err(NotFound::new("recipemedia")));
        assert!(store.by_title("Recipe").is_err());
    }

    #[test]
    fn test_duplicate_titles_fail_fast() {
        let result = ProjectStore::from_records(vec![
            record("Session", "Backend & DB"),
            record("Session Site", "Backend & DB"),
            record("Session", "AI & ML"),
        ]);

        match result {
            Err(LoadError::DuplicateTitle { title, first, second }) => {
                assert_eq!(title, "Session");
                assert_eq!(first, 0);
                assert_eq!(second, 2);
            }
            other => panic!("expected duplicate title error, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_title_is_rejected() {
        let result =
            ProjectStore::from_records(vec![record("Lab", "Backend & DB"), record("", "AI & ML")]);
        assert!(matches!(result, Err(LoadError::EmptyTitle { position: 1 })));
    }

    #[test]
    fn test_bundled_data_set_loads() {
        let store = ProjectStore::bundled().unwrap();

        assert!(!store.is_empty());
        assert_eq!(store.source(), &DataSource::Bundled);
        assert_eq!(store.all()[0].title, "Fuel Tracker");
        assert_eq!(store.skills().len(), 4);
        assert!(store.featured_count() > 0);
    }

    #[test]
    fn test_load_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let data = serde_json::json!({
            "projects": [{
                "title": "Wallie",
                "description": "Wallie IoT project.",
                "tags": ["Python"],
                "category": "IoT & Hardware",
                "featured": false
            }]
        });
        write!(file, "{data}").unwrap();

        let store = ProjectStore::load(Some(file.path())).unwrap();
        assert_eq!(store.len(), 1);
        assert!(store.skills().is_empty());
        assert_eq!(store.source(), &DataSource::File(file.path().to_path_buf()));
    }

    #[test]
    fn test_load_reports_missing_file_and_bad_json() {
        let missing = ProjectStore::load_from_path(Path::new("/nonexistent/portfolio.json"));
        assert!(matches!(missing, Err(LoadError::Io { .. })));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        assert!(matches!(ProjectStore::load_from_path(file.path()), Err(LoadError::Parse(_))));
    }
}

//! Project catalog for a personal portfolio.
//!
//! A read-only store of project records loaded once at startup, pure query
//! functions over it, a navigator that resolves external identifiers, and
//! a small view state machine for the screens that present them.

pub mod catalog;
pub mod config;
pub mod error;
pub mod logging;
pub mod state;

pub use catalog::category::CategoryFilter;
pub use catalog::navigator::{decode_title, encode_title, Navigator};
pub use catalog::query::SortOrder;
pub use catalog::route::Route;
pub use config::{ConfigSource, PortfolioConfig};
pub use error::{ConfigError, DecodeError, LoadError, NotFound};
pub use state::archive::ArchiveParams;
pub use state::data::{DetailView, ProjectDetails, ProjectRecord, SkillTile};
pub use state::library::ProjectStore;
pub use state::screen::Screen;
pub use state::view::{NavAction, ViewController, ViewState};

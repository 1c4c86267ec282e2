/// State management module
///
/// This module holds everything the catalog knows at runtime:
/// - Shared data structures (data.rs)
/// - The read-only project store (library.rs)
/// - Archive search/filter/sort parameters (archive.rs)
/// - The view state controller (view.rs)
/// - Screen resolution for the presentation layer (screen.rs)
pub mod archive;
pub mod data;
pub mod library;
pub mod screen;
pub mod view;

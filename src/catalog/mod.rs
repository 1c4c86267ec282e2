/// Catalog module
///
/// Everything that derives lists or records from the store:
/// - `query.rs` - filtering, search and sorting
/// - `navigator.rs` - identifier encoding and lookups
/// - `category.rs` - recognised categories and their icons
/// - `route.rs` - path routes for deep links
pub mod category;
pub mod navigator;
pub mod query;
pub mod route;

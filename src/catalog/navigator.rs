//! Catalog navigator: turns external references into store contents.
//!
//! Projects are referenced from outside by their title, percent-encoded the
//! way URI components are (unreserved characters `A-Z a-z 0-9 - _ . ! ~ * ' ( )`
//! pass through, everything else becomes `%XX` over UTF-8). Decoding is the
//! exact inverse and rejects malformed escapes instead of guessing.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use tracing::{debug, warn};

use super::query;
use crate::error::{DecodeError, NotFound};
use crate::state::data::{DetailView, ProjectRecord};
use crate::state::library::ProjectStore;

/// Characters escaped in a URI component
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a title (or any path segment) for transport
pub fn encode_title(title: &str) -> String {
    utf8_percent_encode(title, COMPONENT).to_string()
}

/// Invert `encode_title`
pub fn decode_title(encoded: &str) -> Result<String, DecodeError> {
    let bytes = encoded.as_bytes();
    for (position, &byte) in bytes.iter().enumerate() {
        if byte == b'%' {
            let escape = bytes.get(position + 1..position + 3);
            let valid = escape.is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit));
            if !valid {
                return Err(DecodeError::InvalidEscape { position });
            }
        }
    }

    percent_decode_str(encoded)
        .decode_utf8()
        .map(|decoded| decoded.into_owned())
        .map_err(|_| DecodeError::InvalidUtf8)
}

/// Resolves detail and category references against an injected store
#[derive(Debug, Clone, Copy)]
pub struct Navigator<'a> {
    store: &'a ProjectStore,
}

impl<'a> Navigator<'a> {
    pub fn new(store: &'a ProjectStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &'a ProjectStore {
        self.store
    }

    /// Decode an external identifier and look the project up
    ///
    /// Malformed identifiers are reported as `NotFound`, same as a miss.
    pub fn resolve_detail(&self, encoded_title: &str) -> Result<&'a ProjectRecord, NotFound> {
        let title = decode_title(encoded_title).map_err(|err| {
            warn!(identifier = encoded_title, error = %err, "malformed project identifier");
            NotFound::new(encoded_title)
        })?;
        self.resolve_title(&title)
    }

    /// Look a project up by its plain (decoded) title
    pub fn resolve_title(&self, title: &str) -> Result<&'a ProjectRecord, NotFound> {
        self.store.by_title(title)
    }

    /// Detail page content for a plain title
    pub fn detail(&self, title: &str) -> Result<DetailView<'a>, NotFound> {
        self.resolve_title(title).map(ProjectRecord::detail_view)
    }

    /// Projects in a category; an unknown name yields an empty list
    pub fn resolve_category(&self, category: &str) -> Vec<&'a ProjectRecord> {
        let projects = query::by_category(&self.store.records(), category);
        debug!(category, count = projects.len(), "resolved category");
        projects
    }
}

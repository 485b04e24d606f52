//! evgate-resolver
//!
//! Import rewriting for JS snippets emitted next to the compiled module.
//!
//! Snippets are copied into a directory such as
//! `pkg/snippets/<crate>-<hash>/path/in/crate.js`. Exports of the compiled
//! module live at the package root instead, so a snippet cannot know the
//! relative path to them. Snippets write [`MARKER`] in place of that path and
//! the bundler asks this resolver to fix the request up.

use serde::{Deserialize, Serialize};

/// Placeholder for the module root in snippet imports
pub const MARKER: &str = "#RUST#";

/// Directory the snippets are copied into
pub const SNIPPETS_DIR: &str = "snippets";

/// Resolution error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    #[error("Import {request:?} uses {marker} before a module root was recorded", marker = MARKER)]
    ModuleRootUnknown { request: String },
}

/// A bundler import request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportRequest {
    /// Directory of the importing file
    pub path: String,
    /// Import specifier as written
    pub request: String,
}

impl ImportRequest {
    pub fn new(path: impl Into<String>, request: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            request: request.into(),
        }
    }

    /// Byte offset of the snippets directory in the issuer path
    fn snippets_offset(&self) -> Option<usize> {
        self.path.find(SNIPPETS_DIR)
    }

    /// Check if the request must be rewritten
    pub fn is_marked(&self) -> bool {
        self.snippets_offset().is_some() && self.request.contains(MARKER)
    }
}

/// Rewrites marked snippet imports
#[derive(Debug, Clone, Default)]
pub struct SnippetResolver {
    module_root: Option<String>,
}

impl SnippetResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remember the module root file, e.g. the `module` entry of the
    /// package description. A later call replaces the previous root.
    pub fn record_module_root(&mut self, module_root: impl Into<String>) {
        let module_root = module_root.into();
        tracing::debug!(module_root = %module_root, "module root recorded");
        self.module_root = Some(module_root);
    }

    pub fn module_root(&self) -> Option<&str> {
        self.module_root.as_deref()
    }

    /// Rewrite a request.
    ///
    /// Returns `Ok(None)` for requests that are not marked snippet imports;
    /// the bundler resolves those normally.
    pub fn resolve(&self, request: &ImportRequest) -> Result<Option<ImportRequest>, ResolveError> {
        let Some(offset) = request.snippets_offset() else {
            return Ok(None);
        };
        if !request.request.contains(MARKER) {
            return Ok(None);
        }

        let module_root = self
            .module_root
            .as_deref()
            .ok_or_else(|| ResolveError::ModuleRootUnknown {
                request: request.request.clone(),
            })?;

        let resolved = ImportRequest {
            path: request.path[..offset].to_string(),
            request: request.request.replacen(MARKER, module_root, 1),
        };
        tracing::trace!(from = %request.request, to = %resolved.request, "snippet import rewritten");
        Ok(Some(resolved))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> SnippetResolver {
        let mut resolver = SnippetResolver::new();
        resolver.record_module_root("game.js");
        resolver
    }

    #[test]
    fn test_marked_request_rewritten() {
        let request = ImportRequest::new("/app/pkg/snippets/paddle-0123456789abcdef/src/js", "#RUST#");
        let resolved = resolver().resolve(&request).unwrap().unwrap();
        assert_eq!(resolved, ImportRequest::new("/app/pkg/", "game.js"));
    }

    #[test]
    fn test_unmarked_passes_through() {
        let resolver = resolver();
        let plain = ImportRequest::new("/app/pkg/snippets/x", "./enums.js");
        assert_eq!(resolver.resolve(&plain), Ok(None));
        assert!(!plain.is_marked());

        let outside = ImportRequest::new("/app/src", "#RUST#");
        assert_eq!(resolver.resolve(&outside), Ok(None));
    }

    #[test]
    fn test_marker_before_root() {
        let request = ImportRequest::new("/pkg/snippets/a", "#RUST#");
        assert_eq!(
            SnippetResolver::new().resolve(&request),
            Err(ResolveError::ModuleRootUnknown { request: "#RUST#".to_string() })
        );
    }

    #[test]
    fn test_root_replaced() {
        let mut resolver = resolver();
        resolver.record_module_root("other.js");
        assert_eq!(resolver.module_root(), Some("other.js"));
    }
}

//! Named path registry for storing and resolving path templates

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

use crate::error::PathError;
use crate::params::Params;

use super::resolver::replace;

/// Registry mapping path names to path templates
///
/// All reads and writes of the name map go through a single lock, so a
/// registry can be shared freely between threads (e.g. behind an `Arc`).
#[derive(Debug, Default)]
pub struct PathRegistry {
    paths: Mutex<HashMap<String, String>>,
    /// When set, parameters that fill no placeholder are dropped instead
    /// of becoming URL query parameters
    ignore_extra_params: AtomicBool,
}

impl PathRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-wide registry, created on first use
    pub fn global() -> &'static PathRegistry {
        static GLOBAL: OnceLock<PathRegistry> = OnceLock::new();
        GLOBAL.get_or_init(PathRegistry::new)
    }

    /// Set whether extra parameters are ignored, builder style
    pub fn with_ignore_extra_params(self, ignore: bool) -> Self {
        self.set_ignore_extra_params(ignore);
        self
    }

    /// Set whether extra parameters are ignored
    ///
    /// Takes effect for every resolution that starts after the call.
    pub fn set_ignore_extra_params(&self, ignore: bool) {
        self.ignore_extra_params.store(ignore, Ordering::Relaxed);
    }

    pub fn ignore_extra_params(&self) -> bool {
        self.ignore_extra_params.load(Ordering::Relaxed)
    }

    /// Register a path template under a name, replacing any previous one
    pub fn register(&self, name: impl Into<String>, template: impl Into<String>) {
        let name = name.into();
        let template = template.into();
        tracing::debug!(name = %name, template = %template, "registering path");
        if let Some(previous) = self.lock().insert(name.clone(), template) {
            tracing::debug!(name = %name, previous = %previous, "replaced existing path");
        }
    }

    /// Resolve a named path, or return `PathError::NotFound`
    ///
    /// `params` of `None` returns the registered template unchanged.
    ///
    /// # Example
    ///
    /// ```rust
    /// use named_paths::{Params, PathError, PathRegistry};
    ///
    /// let registry = PathRegistry::new();
    /// registry.register("show_dog", "/dogs/:id");
    ///
    /// let params = Params::new().with("id", 123);
    /// assert_eq!(registry.resolve_strict("show_dog", Some(&params)).unwrap(), "/dogs/123");
    /// assert!(matches!(
    ///     registry.resolve_strict("edit_dog", None),
    ///     Err(PathError::NotFound { .. })
    /// ));
    /// ```
    pub fn resolve_strict(&self, name: &str, params: Option<&Params>) -> Result<String, PathError> {
        let template = self.template(name).ok_or_else(|| PathError::NotFound {
            name: name.to_string(),
        })?;
        Ok(replace(&template, params, !self.ignore_extra_params()))
    }

    /// Resolve a named path, returning an empty string when the name is unknown
    pub fn resolve(&self, name: &str, params: Option<&Params>) -> String {
        match self.resolve_strict(name, params) {
            Ok(path) => path,
            Err(err) => {
                tracing::debug!(error = %err, "path resolution failed, returning empty path");
                String::new()
            }
        }
    }

    /// Get the template registered under a name
    pub fn template(&self, name: &str) -> Option<String> {
        self.lock().get(name).cloned()
    }

    /// Check if a name is registered
    pub fn contains(&self, name: &str) -> bool {
        self.lock().contains_key(name)
    }

    /// Get all registered names, sorted
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.lock().keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // Poisoning is ignored: every map update is a single insert.
    fn lock(&self) -> MutexGuard<'_, HashMap<String, String>> {
        self.paths.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

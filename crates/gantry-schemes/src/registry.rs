//! Scheme registry

use std::sync::Arc;

use tracing::debug;

use gantry_core::error::{Result, VersionError};

use crate::pep440::Pep440Scheme;
use crate::semver::SemverScheme;
use crate::traits::VersionScheme;

/// Registry of available version schemes
pub struct SchemeRegistry {
    schemes: Vec<Arc<dyn VersionScheme>>,
}

impl SchemeRegistry {
    /// Create a new registry with all built-in schemes
    pub fn new() -> Self {
        Self {
            schemes: vec![Arc::new(Pep440Scheme::new()), Arc::new(SemverScheme::new())],
        }
    }

    /// Create an empty registry
    pub fn empty() -> Self {
        Self {
            schemes: Vec::new(),
        }
    }

    /// Register a scheme
    pub fn register<S: VersionScheme + 'static>(&mut self, scheme: S) {
        self.schemes.push(Arc::new(scheme));
    }

    /// Get scheme by name
    pub fn get(&self, name: &str) -> Option<Arc<dyn VersionScheme>> {
        let result = self.schemes.iter().find(|s| s.name() == name).cloned();
        debug!(
            scheme = name,
            found = result.is_some(),
            "scheme registry lookup"
        );
        result
    }

    /// Get scheme by name, failing on unknown names
    pub fn resolve(&self, name: &str) -> Result<Arc<dyn VersionScheme>> {
        self.get(name)
            .ok_or_else(|| VersionError::UnknownScheme(name.to_string()).into())
    }

    /// Get all registered schemes
    pub fn all(&self) -> &[Arc<dyn VersionScheme>] {
        &self.schemes
    }

    /// Get scheme names
    pub fn names(&self) -> Vec<&'static str> {
        self.schemes.iter().map(|s| s.name()).collect()
    }
}

impl Default for SchemeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

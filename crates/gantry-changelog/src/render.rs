//! Changelog rendering

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use minijinja::Environment;
use serde::Serialize;
use tracing::debug;

use gantry_core::config::ChangelogConfig;
use gantry_core::error::{ChangelogError, Result};

use crate::parser::DEFAULT_TEMPLATE;
use crate::types::Release;

/// Name under which the bundled default template resolves
pub const DEFAULT_TEMPLATE_NAME: &str = "CHANGELOG.md.j2";

/// Trait for template sources
pub trait TemplateLoader: Send + Sync {
    /// Get the source text of a template by name
    fn get_source(&self, name: &str) -> Option<String>;
}

/// Loads templates from a directory
pub struct DirLoader {
    root: PathBuf,
}

impl DirLoader {
    /// Create a loader rooted at a directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl TemplateLoader for DirLoader {
    fn get_source(&self, name: &str) -> Option<String> {
        fs::read_to_string(self.root.join(name)).ok()
    }
}

/// Renders a release tree to changelog text
///
/// The template resolves in override order: an explicit loader first, then
/// a file with the template's name in the working directory, finally the
/// grammar's bundled default. Rendering is pure; the same tree and template
/// produce identical text on every call.
pub struct ChangelogRenderer {
    loader: Option<Box<dyn TemplateLoader>>,
    template: String,
    workdir: PathBuf,
    extra: BTreeMap<String, minijinja::Value>,
}

impl ChangelogRenderer {
    /// Create a renderer for the bundled default template
    pub fn new() -> Self {
        Self {
            loader: None,
            template: DEFAULT_TEMPLATE_NAME.to_string(),
            workdir: PathBuf::from("."),
            extra: BTreeMap::new(),
        }
    }

    /// Create a renderer from a configuration
    pub fn from_config(config: &ChangelogConfig) -> Self {
        let mut renderer = Self::new();
        if let Some(template) = &config.template {
            renderer.template = template.clone();
        }
        renderer
    }

    /// Use an explicit template loader, consulted before any other source
    pub fn with_loader<L: TemplateLoader + 'static>(mut self, loader: L) -> Self {
        self.loader = Some(Box::new(loader));
        self
    }

    /// Render a different template name
    pub fn with_template(mut self, name: impl Into<String>) -> Self {
        self.template = name.into();
        self
    }

    /// Resolve working-directory overrides against a different directory
    pub fn with_workdir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.workdir = dir.into();
        self
    }

    /// Inject an extra value into the render context, verbatim
    pub fn with_context(mut self, key: impl Into<String>, value: impl Serialize) -> Self {
        self.extra
            .insert(key.into(), minijinja::Value::from_serialize(&value));
        self
    }

    /// Render the tree with the resolved template
    pub fn render(&self, tree: &[Release]) -> Result<String> {
        let source = self.resolve_template()?;

        let mut context = self.extra.clone();
        context.insert("tree".to_string(), minijinja::Value::from_serialize(tree));

        let env = Environment::new();
        env.render_str(&source, context)
            .map_err(|e| ChangelogError::RenderFailed(e.to_string()).into())
    }

    fn resolve_template(&self) -> Result<String> {
        if let Some(loader) = &self.loader {
            if let Some(source) = loader.get_source(&self.template) {
                debug!(template = %self.template, "template resolved from loader override");
                return Ok(source);
            }
        }

        let candidate = self.workdir.join(&self.template);
        if candidate.is_file() {
            debug!(path = %candidate.display(), "template resolved from working directory");
            return Ok(fs::read_to_string(candidate)?);
        }

        if self.template == DEFAULT_TEMPLATE_NAME {
            debug!("template resolved from bundled default");
            return Ok(DEFAULT_TEMPLATE.to_string());
        }

        Err(ChangelogError::TemplateNotFound(self.template.clone()).into())
    }
}

impl Default for ChangelogRenderer {
    fn default() -> Self {
        Self::new()
    }
}

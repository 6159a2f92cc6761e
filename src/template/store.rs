//! Presentation templates keyed by resource type.
//!
//! A template directory holds one file per resource type, e.g.
//! `valueset.liquid` or `Patient.v2.liquid`. The key is the file name up to
//! its first `.`, lower-cased, so both resolve as `valueset` and `patient`.
//!
//! # Lifecycle
//!
//! ```text
//! new() ──► load(dir)* ──► resolve(type)*
//!              ▲                │
//!              └── clear() ◄────┘
//! ```
//!
//! `load` never resets the store; call `clear` first to drop old entries.

use super::error::TemplateError;
use super::keyed::CaseInsensitiveMap;
use crate::config::defaults;
use crate::log;
use crate::resource::Resource;
use std::fs;
use std::path::Path;

/// Supplies the presentation template for a resource.
pub trait TemplateProvider {
    fn find_template(&self, resource: &dyn Resource) -> Option<&str>;
}

/// Loaded templates, keyed case-insensitively by resource type.
#[derive(Debug, Clone)]
pub struct TemplateStore {
    templates: CaseInsensitiveMap<String>,
    extension: String,
}

impl Default for TemplateStore {
    fn default() -> Self {
        Self::with_extension(defaults::templates::extension())
    }
}

impl TemplateStore {
    /// Store accepting files with the default `.liquid` suffix.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store accepting files whose name ends with `extension`.
    pub fn with_extension(extension: impl Into<String>) -> Self {
        Self {
            templates: CaseInsensitiveMap::new(),
            extension: extension.into(),
        }
    }

    /// Drop every loaded template.
    pub fn clear(&mut self) {
        self.templates.clear();
    }

    /// Load every template file directly inside `dir`.
    ///
    /// Subdirectories are not descended into. Files are processed in file-name
    /// order, so when two files derive the same key (`patient.liquid` and
    /// `patient.v2.liquid`) the one sorting last wins.
    ///
    /// Returns the number of files read.
    pub fn load(&mut self, dir: &Path) -> Result<usize, TemplateError> {
        let mut files = Vec::new();
        let entries = fs::read_dir(dir).map_err(|err| TemplateError::Io(dir.to_path_buf(), err))?;
        for entry in entries {
            let entry = entry.map_err(|err| TemplateError::Io(dir.to_path_buf(), err))?;
            let path = entry.path();
            if path.is_dir() {
                continue;
            }
            let Some(name) = entry.file_name().to_str().map(str::to_owned) else {
                log!("templates"; "skipping non UTF-8 file name {}", path.display());
                continue;
            };
            if name.ends_with(&self.extension) {
                files.push((name, path));
            }
        }
        files.sort_unstable_by(|a, b| a.0.cmp(&b.0));

        for (name, path) in &files {
            let content =
                fs::read_to_string(path).map_err(|err| TemplateError::Io(path.clone(), err))?;
            self.templates.insert(template_key(name), content);
        }

        log!("templates"; "loaded {} templates from {}", files.len(), dir.display());
        Ok(files.len())
    }

    /// Template text for a resource type name, compared case-insensitively.
    pub fn resolve(&self, resource_type: &str) -> Option<&str> {
        self.templates.get(resource_type).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Loaded keys, sorted.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<_> = self.templates.keys().collect();
        keys.sort_unstable();
        keys
    }
}

impl TemplateProvider for TemplateStore {
    fn find_template(&self, resource: &dyn Resource) -> Option<&str> {
        self.resolve(resource.resource_type())
    }
}

/// File name up to the first `.`.
///
/// `patient.liquid` → `patient`, `Patient.v2.liquid` → `Patient`.
fn template_key(file_name: &str) -> &str {
    file_name
        .split_once('.')
        .map_or(file_name, |(stem, _)| stem)
}

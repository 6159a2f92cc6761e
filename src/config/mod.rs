//! Configuration management for `igdoc.toml`.
//!
//! # Sections
//!
//! | Section       | Purpose                                          |
//! |---------------|--------------------------------------------------|
//! | `[templates]` | Template directory and file suffix               |
//! | `[corpus]`    | Resource directory and render path prefix        |
//! | `[render]`    | Language, translations, change summary fragment  |
//!
//! # Example
//!
//! ```toml
//! [templates]
//! dir = "template/liquid"
//!
//! [corpus]
//! dir = "input/resources"
//!
//! [render]
//! language = "en"
//! change_summary = "fragments/changes.html"
//! ```

mod corpus;
pub mod defaults;
mod error;
mod render;
mod templates;

pub use corpus::CorpusConfig;
pub use error::ConfigError;
pub use render::RenderConfig;
pub use templates::TemplatesConfig;

use crate::cli::Cli;
use anyhow::{Result, bail};
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// Root Configuration
// ============================================================================

/// Root configuration structure representing igdoc.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct IgConfig {
    /// Project root all relative paths are resolved against
    #[serde(skip)]
    pub root: PathBuf,

    /// Absolute path to the config file (set after loading)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Template store settings
    #[serde(default)]
    pub templates: TemplatesConfig,

    /// Resource corpus settings
    #[serde(default)]
    pub corpus: CorpusConfig,

    /// Fragment rendering settings
    #[serde(default)]
    pub render: RenderConfig,
}

impl IgConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content).map_err(|err| ConfigError::Toml(path.to_path_buf(), err))
    }

    /// Load the config named by the CLI, then apply CLI overrides and validate.
    ///
    /// A missing default `igdoc.toml` means default settings; a missing file
    /// given with `--config` is an error.
    pub fn load(cli: &Cli) -> Result<Self> {
        let root = cli.root.as_deref().unwrap_or(Path::new("./"));
        let config_path = root.join(cli.config_name());

        let mut config = if config_path.exists() {
            Self::from_path(&config_path)?
        } else if cli.config.is_some() {
            bail!(ConfigError::NotFound(config_path));
        } else {
            Self::default()
        };
        config.update_with_cli(cli);
        config.validate()?;

        Ok(config)
    }

    /// Update configuration with CLI arguments
    pub fn update_with_cli(&mut self, cli: &Cli) {
        Self::update_option(&mut self.templates.dir, cli.templates.as_ref());
        Self::update_option(&mut self.corpus.dir, cli.corpus.as_ref());
        Self::update_option(&mut self.corpus.path_prefix, cli.path_prefix.as_ref());

        let root = cli.root.as_deref().unwrap_or(Path::new("./"));
        self.update_path_with_root(root, cli.config_name());
    }

    /// Update config option if CLI value is provided
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Resolve all paths against `root` and normalize them to absolute paths
    fn update_path_with_root(&mut self, root: &Path, config_name: &Path) {
        let root = Self::normalize_path(root);

        self.config_path = Self::normalize_path(&root.join(config_name));
        self.templates.dir = Self::resolve(&root, &self.templates.dir);
        self.corpus.dir = Self::resolve(&root, &self.corpus.dir);
        if let Some(path) = &self.render.change_summary {
            self.render.change_summary = Some(Self::resolve(&root, path));
        }

        self.root = root;
    }

    /// Expand `~` and join relative paths onto `root`
    fn resolve(root: &Path, path: &Path) -> PathBuf {
        let expanded = PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).into_owned());
        if expanded.is_relative() {
            Self::normalize_path(&root.join(expanded))
        } else {
            Self::normalize_path(&expanded)
        }
    }

    /// Normalize a path to absolute, using canonicalize if the path exists
    fn normalize_path(path: &Path) -> PathBuf {
        path.canonicalize().unwrap_or_else(|_| {
            // For non-existent paths, manually make them absolute
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                std::env::current_dir()
                    .map(|cwd| cwd.join(path))
                    .unwrap_or_else(|_| path.to_path_buf())
            }
        })
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.templates.extension.is_empty() {
            bail!(ConfigError::Validation {
                field: "templates.extension",
                reason: "must not be empty".into(),
            });
        }

        if let Some(path) = &self.render.change_summary
            && !path.is_file()
        {
            bail!(ConfigError::Validation {
                field: "render.change_summary",
                reason: format!("`{}` is not a file", path.display()),
            });
        }

        Ok(())
    }

    /// Read the change summary fragment, or an empty string if none is set.
    pub fn change_summary(&self) -> Result<String, ConfigError> {
        match &self.render.change_summary {
            Some(path) => {
                fs::read_to_string(path).map_err(|err| ConfigError::Io(path.clone(), err))
            }
            None => Ok(String::new()),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

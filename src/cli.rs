//! Command-line interface definitions.
//!
//! Defines all CLI arguments and subcommands using clap.

use crate::config::defaults;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

/// Rendering support for implementation guide pages
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Project root directory (default: current directory)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Config file name (default: igdoc.toml, optional)
    #[arg(short = 'C', long)]
    pub config: Option<PathBuf>,

    /// Template directory path (relative to project root)
    #[arg(short, long)]
    pub templates: Option<PathBuf>,

    /// Resource directory path (relative to project root)
    #[arg(short, long)]
    pub corpus: Option<PathBuf>,

    /// Prefix for generated value set page paths
    #[arg(long = "path-prefix")]
    pub path_prefix: Option<String>,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Print the template for a resource type
    Template {
        /// Resource type name, matched case-insensitively (e.g. `ValueSet`)
        resource_type: String,
    },

    /// List the resource types that have a template
    ListTemplates,

    /// Print the "used by" fragment for a NamingSystem
    Xref {
        /// Path to the NamingSystem JSON file
        subject: PathBuf,
    },
}

impl Cli {
    /// Config file name, relative to the root
    pub fn config_name(&self) -> &Path {
        self.config
            .as_deref()
            .unwrap_or(Path::new(defaults::CONFIG_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_xref() {
        let cli = Cli::try_parse_from([
            "igdoc", "--root", "ig", "-c", "input", "xref", "ns.json",
        ])
        .unwrap();

        assert_eq!(cli.root, Some(PathBuf::from("ig")));
        assert_eq!(cli.corpus, Some(PathBuf::from("input")));
        assert_eq!(cli.config, None);
        assert_eq!(cli.config_name(), Path::new("igdoc.toml"));
        assert!(matches!(cli.command, Commands::Xref { ref subject } if subject == &PathBuf::from("ns.json")));
    }

    #[test]
    fn test_parse_template() {
        let cli = Cli::try_parse_from(["igdoc", "-t", "liquid", "template", "ValueSet"]).unwrap();

        assert_eq!(cli.templates, Some(PathBuf::from("liquid")));
        assert!(matches!(cli.command, Commands::Template { ref resource_type } if resource_type == "ValueSet"));
    }

    #[test]
    fn test_parse_list_templates() {
        let cli = Cli::try_parse_from(["igdoc", "list-templates"]).unwrap();
        assert!(matches!(cli.command, Commands::ListTemplates));
    }

    #[test]
    fn test_explicit_config_name() {
        let cli = Cli::try_parse_from(["igdoc", "-C", "ig.toml", "list-templates"]).unwrap();
        assert_eq!(cli.config_name(), Path::new("ig.toml"));
    }

    #[test]
    fn test_command_required() {
        assert!(Cli::try_parse_from(["igdoc"]).is_err());
    }
}

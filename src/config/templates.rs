//! `[templates]` section configuration.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[templates]` section in igdoc.toml - where page templates live.
///
/// # Example
/// ```toml
/// [templates]
/// dir = "template/liquid"
/// extension = ".liquid"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct TemplatesConfig {
    /// Directory holding one template file per resource type.
    #[serde(default = "defaults::templates::dir")]
    #[educe(Default = defaults::templates::dir())]
    pub dir: PathBuf,

    /// Suffix a file name must end with to be loaded as a template.
    #[serde(default = "defaults::templates::extension")]
    #[educe(Default = defaults::templates::extension())]
    pub extension: String,
}

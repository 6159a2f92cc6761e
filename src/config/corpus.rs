//! `[corpus]` section configuration.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[corpus]` section in igdoc.toml - the local resources to cross-reference.
///
/// # Example
/// ```toml
/// [corpus]
/// dir = "input/resources"
/// path_prefix = "en/"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct CorpusConfig {
    /// Directory scanned recursively for `*.json` resources.
    #[serde(default = "defaults::corpus::dir")]
    #[educe(Default = defaults::corpus::dir())]
    pub dir: PathBuf,

    /// Prepended to generated render paths (`{prefix}ValueSet-{id}.html`).
    #[serde(default = "defaults::corpus::path_prefix")]
    #[educe(Default = defaults::corpus::path_prefix())]
    pub path_prefix: String,
}

//! `[render]` section configuration.
//!
//! Page-level inputs of the cross-reference fragment.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// `[render]` section in igdoc.toml.
///
/// # Example
/// ```toml
/// [render]
/// language = "de"
/// change_summary = "fragments/changes.html"
///
/// [render.translations.de]
/// "Color Codes" = "Farbcodes"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct RenderConfig {
    /// BCP 47 language of the generated pages.
    #[serde(default = "defaults::render::language")]
    #[educe(Default = defaults::render::language())]
    pub language: String,

    /// HTML fragment appended verbatim after every cross-reference list.
    #[serde(default = "defaults::render::change_summary")]
    #[educe(Default = defaults::render::change_summary())]
    pub change_summary: Option<PathBuf>,

    /// Localized display names: language tag -> resource name -> translation.
    /// Only the table of `language` is used when rendering.
    #[serde(default)]
    pub translations: BTreeMap<String, BTreeMap<String, String>>,
}

//! Typed views of the resources the renderers consume.
//!
//! Only the elements needed for template lookup and cross-referencing are
//! modelled. Everything else in the JSON is ignored on deserialization.

use serde::Deserialize;

/// A resource with a declared type name (the JSON `resourceType`).
pub trait Resource {
    fn resource_type(&self) -> &str;
}

/// Any resource, known only by its declared type.
///
/// Enough for template resolution of kinds this crate doesn't model.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceHeader {
    pub resource_type: String,

    #[serde(default)]
    pub id: Option<String>,
}

impl Resource for ResourceHeader {
    fn resource_type(&self) -> &str {
        &self.resource_type
    }
}

// ============================================================================
// NamingSystem
// ============================================================================

/// Identifier-defining resource: declares the URIs of a code system.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NamingSystem {
    #[serde(default)]
    pub id: Option<String>,

    #[serde(default)]
    pub url: Option<String>,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub unique_id: Vec<UniqueId>,
}

/// One `uniqueId` entry of a NamingSystem.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UniqueId {
    /// Identifier kind (`uri`, `oid`, `uuid`, `other`)
    #[serde(default, rename = "type")]
    pub kind: Option<String>,

    #[serde(default)]
    pub value: Option<String>,

    #[serde(default)]
    pub preferred: Option<bool>,
}

impl UniqueId {
    pub fn uri(value: &str) -> Self {
        Self {
            kind: Some("uri".into()),
            value: Some(value.into()),
            preferred: None,
        }
    }

    /// The value, if present and non-empty.
    pub fn non_empty_value(&self) -> Option<&str> {
        self.value.as_deref().filter(|v| !v.is_empty())
    }
}

impl Resource for NamingSystem {
    fn resource_type(&self) -> &str {
        "NamingSystem"
    }
}

// ============================================================================
// ValueSet
// ============================================================================

/// Candidate resource searched for references to code system URIs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueSet {
    #[serde(default)]
    pub id: Option<String>,

    #[serde(default)]
    pub url: Option<String>,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub compose: Compose,

    /// Where this value set's page lands in the generated site.
    #[serde(default)]
    pub web_path: Option<String>,
}

/// `ValueSet.compose`: the include and exclude groups.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Compose {
    #[serde(default)]
    pub include: Vec<ConceptSet>,

    #[serde(default)]
    pub exclude: Vec<ConceptSet>,
}

/// One include or exclude entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ConceptSet {
    #[serde(default)]
    pub system: Option<String>,

    #[serde(default)]
    pub version: Option<String>,
}

impl ConceptSet {
    pub fn system(system: &str) -> Self {
        Self {
            system: Some(system.into()),
            version: None,
        }
    }

    /// The system URI, if present and non-empty.
    pub fn non_empty_system(&self) -> Option<&str> {
        self.system.as_deref().filter(|s| !s.is_empty())
    }
}

impl ValueSet {
    pub fn render_path(&self) -> Option<&str> {
        self.web_path.as_deref()
    }
}

impl Resource for ValueSet {
    fn resource_type(&self) -> &str {
        "ValueSet"
    }
}

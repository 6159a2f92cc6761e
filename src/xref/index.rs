//! Reference index over a corpus snapshot.
//!
//! Finds the ValueSets whose `compose.include` or `compose.exclude` entries
//! name one of a NamingSystem's identifiers as their `system`.

use crate::resource::{NamingSystem, ValueSet};
use rustc_hash::FxHashSet;

/// Distinct identifier URIs, in order of first appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdentifierSet {
    uris: Vec<String>,
}

impl IdentifierSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect the non-empty `uniqueId` values of a NamingSystem.
    pub fn from_naming_system(naming_system: &NamingSystem) -> Self {
        naming_system
            .unique_id
            .iter()
            .filter_map(|uid| uid.non_empty_value())
            .collect()
    }

    /// Add a URI unless already present. Returns whether it was added.
    pub fn insert(&mut self, uri: &str) -> bool {
        if self.contains(uri) {
            return false;
        }
        self.uris.push(uri.to_owned());
        true
    }

    /// Exact string membership.
    pub fn contains(&self, uri: &str) -> bool {
        self.uris.iter().any(|u| u == uri)
    }

    pub fn is_empty(&self) -> bool {
        self.uris.is_empty()
    }

    pub fn len(&self) -> usize {
        self.uris.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.uris.iter().map(String::as_str)
    }
}

impl<'a> FromIterator<&'a str> for IdentifierSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut set = Self::new();
        for uri in iter {
            set.insert(uri);
        }
        set
    }
}

/// Which compose group produced a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchGroup {
    Include,
    Exclude,
}

/// A ValueSet referencing one of the identifiers.
///
/// At most one record exists per render path (an absent path counts as one
/// path), and `group`/`system` describe the first matching entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchRecord<'a> {
    pub value_set: &'a ValueSet,
    pub render_path: Option<&'a str>,
    pub group: MatchGroup,
    pub system: &'a str,
}

/// Scan `corpus` in order for ValueSets referencing any of `ids`.
///
/// Within a ValueSet, include entries are checked before exclude entries.
/// Both count as a reference.
pub fn find_references<'a>(corpus: &'a [ValueSet], ids: &IdentifierSet) -> Vec<MatchRecord<'a>> {
    let mut processed: FxHashSet<Option<&'a str>> = FxHashSet::default();
    let mut matches = Vec::new();

    if ids.is_empty() {
        return matches;
    }

    for value_set in corpus {
        let compose = &value_set.compose;
        let entries = compose
            .include
            .iter()
            .map(|set| (MatchGroup::Include, set))
            .chain(compose.exclude.iter().map(|set| (MatchGroup::Exclude, set)));

        for (group, concept_set) in entries {
            let Some(system) = concept_set.non_empty_system() else {
                continue;
            };
            if !ids.contains(system) {
                continue;
            }

            let render_path = value_set.render_path();
            if processed.insert(render_path) {
                matches.push(MatchRecord {
                    value_set,
                    render_path,
                    group,
                    system,
                });
            }
        }
    }

    matches
}

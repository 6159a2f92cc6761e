//! Cross-references from NamingSystems to the ValueSets that use them.
//!
//! # Architecture
//!
//! ```text
//! NamingSystem ──► IdentifierSet ──┐
//!                                  ├──► find_references() ──► render_reference_list()
//! Corpus::value_sets() ────────────┘          │                        │
//!                                      Vec<MatchRecord>          HTML fragment
//! ```
//!
//! `find_references` is pure over a corpus snapshot; `XrefRenderer` ties the
//! pieces together and appends the page's change summary.

mod index;
mod render;

pub use index::{IdentifierSet, MatchGroup, MatchRecord, find_references};
pub use render::{
    NO_IDENTIFIERS, NOT_USED, PageContext, StaticPageContext, XrefRenderer,
    default_display_name, render_reference_list,
};

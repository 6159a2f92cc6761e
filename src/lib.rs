//! igdoc - rendering support for implementation guide documentation pages.
//!
//! Two services used while a build pipeline renders resource pages:
//!
//! - [`template::TemplateStore`]: page templates loaded from a directory,
//!   resolved by resource type without regard to case.
//! - [`xref::XrefRenderer`]: the "used by" list of a NamingSystem page,
//!   naming every local ValueSet that references one of its identifiers.

pub mod cli;
pub mod config;
pub mod logger;
pub mod resource;
pub mod template;
pub mod xref;

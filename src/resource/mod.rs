//! Resource model and the local corpus.
//!
//! # Architecture
//!
//! ```text
//! resources/*.json ──► DirectoryCorpus ──┐
//!                                        ├──► Corpus::value_sets() ──► xref
//! Vec<ValueSet> ─────► MemoryCorpus ─────┘
//! ```

mod corpus;
mod error;
mod types;

pub use corpus::{Corpus, DirectoryCorpus, MemoryCorpus, load_naming_system};
pub use error::CorpusError;
pub use types::{
    Compose, ConceptSet, NamingSystem, Resource, ResourceHeader, UniqueId, ValueSet,
};

//! Template resolution for resource pages.

mod error;
mod keyed;
mod store;

pub use error::TemplateError;
pub use keyed::CaseInsensitiveMap;
pub use store::{TemplateProvider, TemplateStore};

//! Profile model types and loading.
//!
//! A profile model is a flat set of classes with two kinds of parent edges:
//! generalization ("is-a") edges and extension edges to externally defined
//! base classes, the latter expressed through an owned association end named
//! `baseClass`. Only children know their parents; there is no reverse index.

mod cache;
mod error;
mod loader;
mod model;

pub use cache::ModelCache;
pub use error::{Error, Result, SourceContext};
pub use loader::{BASE_CLASS_END, parse_model};
pub use model::{ClassId, Model, ModelAttribute, ModelClass};

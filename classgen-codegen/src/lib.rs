//! Dependency-ordered code generation from profile models.
//!
//! The pipeline is strictly sequential: build the per-class parent lists,
//! find which classes are referenced, select traversal roots, schedule
//! candidates breadth-first over the reverse parent relation, then emit
//! class definitions gated on parent satisfaction. The model itself only
//! records "child knows parent" edges; everything else is derived here.

mod builder;
mod diagnostic;
mod emitter;
mod error;
mod generator;
mod graph;
mod schedule;
mod type_mapper;

pub use builder::{CodeBuilder, Indent};
pub use diagnostic::{Diagnostic, Severity};
pub use error::{Error, Result, UnresolvedClass};
pub use generator::{GenerateReport, GeneratedModule, Generator, check_overrides, generate};
pub use graph::{ClassTree, class_tree, find_roots, referenced_classes};
pub use schedule::breadth_first;
pub use type_mapper::{PythonTypeMapper, TypeMapper};

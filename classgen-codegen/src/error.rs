use std::{fmt, path::PathBuf};

use miette::Diagnostic;
use thiserror::Error;

/// Result type for code generation operations.
pub type Result<T> = std::result::Result<T, Error>;

/// A class left unresolved once emission stopped making progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnresolvedClass {
    pub name: String,
    /// Parent names still absent from the output.
    pub missing: Vec<String>,
}

impl fmt::Display for UnresolvedClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (missing: {})", self.name, self.missing.join(", "))
    }
}

fn list_unresolved(unresolved: &[UnresolvedClass]) -> String {
    unresolved
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    /// Emission reached its fixed point with classes still waiting on
    /// parents; an inheritance cycle, or a chain hanging off one.
    #[error(
        "cyclic inheritance left {} class(es) unresolved: {}",
        .unresolved.len(),
        list_unresolved(.unresolved)
    )]
    #[diagnostic(
        code(classgen::codegen::cyclic_inheritance),
        help("break the cycle by removing one of the listed parent edges")
    )]
    CyclicInheritance { unresolved: Vec<UnresolvedClass> },

    #[error("overrides file '{path}' does not exist")]
    #[diagnostic(
        code(classgen::codegen::overrides_not_found),
        help("the overrides option is reserved; when passed, the file must exist")
    )]
    OverridesNotFound { path: PathBuf },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Model(classgen_model::Error),

    #[error(transparent)]
    Write(#[from] classgen_core::WriteError),
}

impl From<Box<classgen_model::Error>> for Error {
    fn from(err: Box<classgen_model::Error>) -> Self {
        Error::Model(*err)
    }
}

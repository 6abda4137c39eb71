use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for model loading (boxed to keep the happy path small).
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Carries the model file content and display name so error factories can
/// attach miette source snippets without threading both through every call.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Span of the first occurrence of `needle` in the source, if any.
    ///
    /// Good enough for pointing at class and attribute names; semantic
    /// errors stay readable even when the lookup misses.
    fn span_of(&self, needle: &str) -> Option<SourceSpan> {
        self.src
            .find(needle)
            .map(|offset| SourceSpan::from((offset, needle.len())))
    }

    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    pub fn duplicate_class_error(&self, name: impl Into<String>) -> Box<Error> {
        let name = name.into();
        Box::new(Error::DuplicateClass {
            src: self.named_source(),
            span: self.span_of(&name),
            name,
        })
    }

    pub fn unknown_parent_error(
        &self,
        class: impl Into<String>,
        target: impl Into<String>,
        edge: impl Into<String>,
    ) -> Box<Error> {
        let target = target.into();
        Box::new(Error::UnknownParent {
            src: self.named_source(),
            span: self.span_of(&target),
            class: class.into(),
            target,
            edge: edge.into(),
        })
    }

    pub fn untyped_base_class_error(&self, class: impl Into<String>) -> Box<Error> {
        let class = class.into();
        Box::new(Error::UntypedBaseClass {
            src: self.named_source(),
            span: self.span_of(&class),
            class,
        })
    }

    pub fn validation_error(&self, message: impl Into<String>) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span: None,
            message: message.into(),
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(code(classgen::model::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse profile model")]
    #[diagnostic(code(classgen::model::parse))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("duplicate class '{name}'")]
    #[diagnostic(
        code(classgen::model::duplicate_class),
        help("class names must be unique within one model")
    )]
    DuplicateClass {
        #[source_code]
        src: NamedSource<String>,
        #[label("declared more than once")]
        span: Option<SourceSpan>,
        name: String,
    },

    #[error("class '{class}' names unknown {edge} target '{target}'")]
    #[diagnostic(
        code(classgen::model::unknown_parent),
        help("every parent must be declared as a class in the same model file")
    )]
    UnknownParent {
        #[source_code]
        src: NamedSource<String>,
        #[label("not declared in this model")]
        span: Option<SourceSpan>,
        class: String,
        target: String,
        edge: String,
    },

    #[error("class '{class}' owns a baseClass association without a type")]
    #[diagnostic(
        code(classgen::model::untyped_base_class),
        help("a baseClass association end must name the extended class in its 'type'")
    )]
    UntypedBaseClass {
        #[source_code]
        src: NamedSource<String>,
        #[label("extension end declared here")]
        span: Option<SourceSpan>,
        class: String,
    },

    #[error("{message}")]
    #[diagnostic(code(classgen::model::validation))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },
}

//! Generation facade: orchestrates graph analysis, scheduling, emission,
//! and the atomic output commit.

use std::path::Path;

use classgen_core::OutputFile;
use classgen_model::Model;

use crate::{
    diagnostic::Diagnostic,
    emitter::Emitter,
    error::{Error, Result},
    graph::{class_tree, find_roots, referenced_classes},
    schedule::breadth_first,
    type_mapper::{PythonTypeMapper, TypeMapper},
};

/// A fully rendered module plus the report describing it.
#[derive(Debug)]
pub struct GeneratedModule {
    pub source: String,
    pub report: GenerateReport,
}

/// Summary of one generation run.
#[derive(Debug)]
pub struct GenerateReport {
    /// Generated class names, in commit order.
    pub emitted: Vec<String>,
    /// Predefined class names imported by reference.
    pub imported: Vec<String>,
    /// Non-fatal findings (omitted orphans, untyped attributes).
    pub diagnostics: Vec<Diagnostic>,
}

/// One-shot generator over an immutable model snapshot.
///
/// Every call derives fresh graph state; nothing is carried between runs.
pub struct Generator<'a> {
    model: &'a Model,
    mapper: PythonTypeMapper,
}

impl<'a> Generator<'a> {
    pub fn new(model: &'a Model) -> Self {
        Self {
            model,
            mapper: PythonTypeMapper,
        }
    }

    /// Render the module without touching the filesystem.
    pub fn preview(&self) -> Result<GeneratedModule> {
        let tree = class_tree(self.model);
        let referenced = referenced_classes(self.model);
        let roots = find_roots(&tree, &referenced);
        let schedule = breadth_first(&tree, &roots);
        tracing::debug!(
            language = self.mapper.language(),
            roots = roots.len(),
            scheduled = schedule.len(),
            "emission candidates scheduled"
        );
        Emitter::new(self.model, &tree, &referenced, &self.mapper).render(&schedule)
    }

    /// Render the module and commit it atomically to `output_path`.
    ///
    /// A failed render leaves the destination untouched, including output
    /// from a previous run.
    pub fn generate(&self, output_path: &Path) -> Result<GenerateReport> {
        let module = self.preview()?;
        OutputFile::new(output_path, module.source).commit()?;
        tracing::info!(
            path = %output_path.display(),
            classes = module.report.emitted.len(),
            "module committed"
        );
        Ok(module.report)
    }
}

/// Validate the reserved overrides path: when given, the file must exist.
///
/// The overrides mechanism itself is not implemented yet; passing an
/// existing file changes nothing about the output.
pub fn check_overrides(overrides_path: Option<&Path>) -> Result<()> {
    if let Some(path) = overrides_path {
        if !path.exists() {
            return Err(Error::OverridesNotFound {
                path: path.to_path_buf(),
            });
        }
    }
    Ok(())
}

/// Generate a Python data model from the profile model at `model_path`.
///
/// This is the one-call surface: load, analyze, emit, commit. The
/// `overrides_path` is reserved for future per-class customization.
pub fn generate(
    model_path: &Path,
    output_path: &Path,
    overrides_path: Option<&Path>,
) -> Result<GenerateReport> {
    check_overrides(overrides_path)?;
    let model = Model::from_file(model_path)?;
    Generator::new(&model).generate(output_path)
}

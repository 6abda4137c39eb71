//! Ordered emission of class definitions.

use classgen_core::Version;
use classgen_model::{BASE_CLASS_END, ClassId, Model, ModelAttribute};
use indexmap::IndexSet;

use crate::{
    builder::CodeBuilder,
    diagnostic::Diagnostic,
    error::{Error, Result, UnresolvedClass},
    generator::{GenerateReport, GeneratedModule},
    graph::ClassTree,
    type_mapper::TypeMapper,
};

/// Module the generated code imports its property markers and predefined
/// classes from.
const RUNTIME_MODULE: &str = "modelbase";

/// Walks the scheduled order and writes each class only once every parent
/// is already written. Classes that are not yet satisfiable are retried in
/// passes over the deferred list until a pass makes no progress; whatever
/// is left then is reported as unresolved instead of being emitted as a
/// forward reference.
pub(crate) struct Emitter<'a> {
    model: &'a Model,
    tree: &'a ClassTree,
    referenced: &'a IndexSet<ClassId>,
    mapper: &'a dyn TypeMapper,
    /// Class names already committed to the output, pre-seeded with the
    /// predefined vocabulary.
    written: IndexSet<String>,
    emitted: Vec<String>,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> Emitter<'a> {
    pub fn new(
        model: &'a Model,
        tree: &'a ClassTree,
        referenced: &'a IndexSet<ClassId>,
        mapper: &'a dyn TypeMapper,
    ) -> Self {
        Self {
            model,
            tree,
            referenced,
            mapper,
            written: IndexSet::new(),
            emitted: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    pub fn render(mut self, schedule: &[ClassId]) -> Result<GeneratedModule> {
        let mut builder = CodeBuilder::python();
        builder.push_line(&format!(
            "# Generated by classgen {}. DO NOT EDIT.",
            Version::current()
        ));
        builder.push_blank();
        builder.push_line("from __future__ import annotations");
        builder.push_blank();
        builder.push_line(&format!(
            "from {}.properties import attribute, operation, relation_one",
            RUNTIME_MODULE
        ));

        // The whole predefined vocabulary satisfies parent checks, but only
        // classes actually used as a parent get an import line.
        let model = self.model;
        let mut imported = Vec::new();
        for (id, class) in model.iter().filter(|(_, c)| c.predefined) {
            self.written.insert(class.name.clone());
            if self.referenced.contains(&id) {
                imported.push(class.name.clone());
            }
        }
        if !imported.is_empty() {
            builder.push_blank();
            for name in &imported {
                builder.push_line(&format!("from {} import {}", RUNTIME_MODULE, name));
            }
        }

        let mut deferred: Vec<ClassId> = Vec::new();
        for &id in schedule {
            if self.written.contains(self.model.class(id).name.as_str()) {
                continue;
            }
            if self.parents_written(id) {
                self.emit_class(&mut builder, id);
            } else {
                deferred.push(id);
            }
        }

        // Retry the deferred list until a pass stops making progress.
        while !deferred.is_empty() {
            let before = self.written.len();
            let mut still_deferred = Vec::new();
            for id in deferred {
                if self.parents_written(id) {
                    self.emit_class(&mut builder, id);
                } else {
                    still_deferred.push(id);
                }
            }
            deferred = still_deferred;
            if self.written.len() == before {
                break;
            }
        }

        self.check_resolution()?;

        Ok(GeneratedModule {
            source: builder.build(),
            report: GenerateReport {
                emitted: self.emitted,
                imported,
                diagnostics: self.diagnostics,
            },
        })
    }

    fn parents_written(&self, id: ClassId) -> bool {
        self.tree[&id]
            .iter()
            .all(|p| self.written.contains(self.model.class(*p).name.as_str()))
    }

    fn emit_class(&mut self, builder: &mut CodeBuilder, id: ClassId) {
        let model = self.model;
        let class = model.class(id);
        let parents: Vec<&str> = self.tree[&id]
            .iter()
            .map(|p| model.class(*p).name.as_str())
            .collect();

        builder.push_blank();
        if parents.is_empty() {
            builder.push_line(&format!("class {}:", class.name));
        } else {
            builder.push_line(&format!("class {}({}):", class.name, parents.join(", ")));
        }
        builder.push_indent();

        let mut body_lines = 0;
        for attr in class.attributes.iter().filter(|a| !a.association) {
            let line = match self.map_attribute(&class.name, attr) {
                Some(ty) => format!("{}: attribute[{}]", attr.name, ty),
                None => format!("{}: attribute", attr.name),
            };
            builder.push_line(&line);
            body_lines += 1;
        }
        for attr in class
            .attributes
            .iter()
            .filter(|a| a.association && a.name != BASE_CLASS_END)
        {
            let line = match self.map_attribute(&class.name, attr) {
                Some(ty) => format!("{}: relation_one[{}]", attr.name, ty),
                None => format!("{}: relation_one", attr.name),
            };
            builder.push_line(&line);
            body_lines += 1;
        }
        for operation in &class.operations {
            builder.push_line(&format!("{}: operation", operation));
            body_lines += 1;
        }
        if body_lines == 0 {
            builder.push_line("pass");
        }
        builder.push_dedent();

        self.written.insert(class.name.clone());
        self.emitted.push(class.name.clone());
    }

    /// Resolve an attribute's emitted type, recording lenient conditions.
    fn map_attribute(&mut self, class_name: &str, attr: &ModelAttribute) -> Option<String> {
        let mapped = self.mapper.map_type(attr.type_name.as_deref());
        if mapped.is_none() {
            let location = format!("{}.{}", class_name, attr.name);
            match attr.type_name.as_deref() {
                None => {
                    tracing::debug!(attribute = %location, "attribute has no declared type");
                    self.diagnostics.push(
                        Diagnostic::info("emit", "attribute has no declared type; emitted untyped")
                            .at(location),
                    );
                }
                Some(raw) => {
                    tracing::debug!(attribute = %location, raw, "enumeration type not supported");
                    self.diagnostics.push(
                        Diagnostic::info(
                            "emit",
                            format!("enumeration type '{}' is not supported; emitted untyped", raw),
                        )
                        .at(location),
                    );
                }
            }
        }
        mapped
    }

    /// Post-emission sweep over the whole model.
    ///
    /// Classes still waiting on a parent fail the run; parentless classes
    /// nobody references are omitted (preserved legacy behavior) and only
    /// reported.
    fn check_resolution(&mut self) -> Result<()> {
        let model = self.model;
        let mut unresolved = Vec::new();
        for (id, class) in model.iter() {
            if class.predefined || self.written.contains(class.name.as_str()) {
                continue;
            }
            let parents = &self.tree[&id];
            if parents.is_empty() {
                if !self.referenced.contains(&id) {
                    tracing::warn!(class = %class.name, "orphan class omitted from output");
                    self.diagnostics.push(
                        Diagnostic::warning(
                            "emit",
                            format!(
                                "class '{}' has no parents and no referencing class; omitted from output",
                                class.name
                            ),
                        )
                        .at(class.name.clone()),
                    );
                }
                continue;
            }
            let missing: Vec<String> = parents
                .iter()
                .filter(|p| !self.written.contains(model.class(**p).name.as_str()))
                .map(|p| model.class(*p).name.clone())
                .collect();
            unresolved.push(UnresolvedClass {
                name: class.name.clone(),
                missing,
            });
        }

        if unresolved.is_empty() {
            Ok(())
        } else {
            Err(Error::CyclicInheritance { unresolved })
        }
    }
}

//! Model loading from profile TOML files.

use std::{collections::HashMap, path::Path, str::FromStr};

use serde::Deserialize;

use crate::{
    ClassId, Model, ModelAttribute, ModelClass,
    error::{Error, Result, SourceContext},
};

/// Association-end name that marks an extension edge to a base class.
pub const BASE_CLASS_END: &str = "baseClass";

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawModel {
    model: Option<RawMeta>,
    #[serde(default)]
    classes: Vec<RawClass>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawMeta {
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawClass {
    name: String,
    #[serde(default)]
    predefined: bool,
    #[serde(default)]
    generalizes: Vec<String>,
    #[serde(default)]
    attributes: Vec<RawAttribute>,
    #[serde(default)]
    operations: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawAttribute {
    name: String,
    #[serde(rename = "type")]
    type_name: Option<String>,
    #[serde(default)]
    association: bool,
}

impl FromStr for Model {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_model(s, "model.toml")
    }
}

impl Model {
    /// Load and resolve a profile model from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_model(&content, &path.display().to_string())
    }

    /// Parse a model from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_model(content, filename)
    }
}

/// Parse and resolve a model from content with the given filename for
/// error reporting.
pub fn parse_model(content: &str, filename: &str) -> Result<Model> {
    let ctx = SourceContext::new(content, filename);
    let raw: RawModel = toml::from_str(content).map_err(|e| ctx.parse_error(e))?;
    resolve(raw, &ctx)
}

fn resolve(raw: RawModel, ctx: &SourceContext) -> Result<Model> {
    // Scratch classes (leading '~') never reach the graph.
    let kept: Vec<RawClass> = raw
        .classes
        .into_iter()
        .filter(|c| !c.name.starts_with('~'))
        .collect();

    let mut ids: HashMap<&str, ClassId> = HashMap::with_capacity(kept.len());
    for (index, class) in kept.iter().enumerate() {
        if class.name.is_empty() {
            return Err(ctx.validation_error("class with an empty name"));
        }
        if ids.insert(&class.name, ClassId(index)).is_some() {
            return Err(ctx.duplicate_class_error(&class.name));
        }
    }

    let mut classes = Vec::with_capacity(kept.len());
    for class in &kept {
        let mut generalizations = Vec::with_capacity(class.generalizes.len());
        for target in &class.generalizes {
            let id = ids.get(target.as_str()).copied().ok_or_else(|| {
                ctx.unknown_parent_error(&class.name, target, "generalization")
            })?;
            generalizations.push(id);
        }

        let mut extensions = Vec::new();
        for attr in &class.attributes {
            if attr.association && attr.name == BASE_CLASS_END {
                let target = attr
                    .type_name
                    .as_deref()
                    .ok_or_else(|| ctx.untyped_base_class_error(&class.name))?;
                let id = ids.get(target).copied().ok_or_else(|| {
                    ctx.unknown_parent_error(&class.name, target, "extension")
                })?;
                extensions.push(id);
            }
        }

        // Predefined classes are imported by reference; a parent edge on one
        // could never be honored in the output.
        if class.predefined && !(generalizations.is_empty() && extensions.is_empty()) {
            return Err(ctx.validation_error(format!(
                "predefined class '{}' may not declare parents",
                class.name
            )));
        }

        let attributes = class
            .attributes
            .iter()
            .map(|a| ModelAttribute {
                name: a.name.clone(),
                type_name: a.type_name.clone(),
                association: a.association,
            })
            .collect();

        classes.push(ModelClass {
            name: class.name.clone(),
            predefined: class.predefined,
            attributes,
            operations: class.operations.clone(),
            generalizations,
            extensions,
        });
    }

    tracing::debug!(
        classes = classes.len(),
        file = ctx.filename(),
        "profile model resolved"
    );

    Ok(Model {
        name: raw.model.and_then(|m| m.name),
        classes,
    })
}

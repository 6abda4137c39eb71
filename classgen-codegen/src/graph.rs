//! Class graph construction: parent lists, reference analysis, root
//! selection.

use classgen_model::{ClassId, Model};
use indexmap::{IndexMap, IndexSet};

/// Combined parent list per class: generalization targets first, then
/// extension targets, both in model-declared order. One entry per input
/// class, including classes with no parents. Built once per run and
/// read-only afterwards.
pub type ClassTree = IndexMap<ClassId, Vec<ClassId>>;

/// Build the parent lists for every class in the model.
pub fn class_tree(model: &Model) -> ClassTree {
    model
        .iter()
        .map(|(id, class)| {
            let mut parents =
                Vec::with_capacity(class.generalizations.len() + class.extensions.len());
            parents.extend_from_slice(&class.generalizations);
            parents.extend_from_slice(&class.extensions);
            (id, parents)
        })
        .collect()
}

/// Classes that occur in any class's generalization or extension list.
///
/// Used only to validate root candidates; reference counts play no part in
/// ordering.
pub fn referenced_classes(model: &Model) -> IndexSet<ClassId> {
    let mut referenced = IndexSet::new();
    for (_, class) in model.iter() {
        referenced.extend(class.generalizations.iter().copied());
        referenced.extend(class.extensions.iter().copied());
    }
    referenced
}

/// Traversal seeds: classes with no parents of their own that are used as a
/// parent by someone else.
///
/// Requiring a reference keeps unrelated standalone classes from seeding
/// the traversal; such classes are also never reached by it (see the
/// emitter's orphan diagnostic).
pub fn find_roots(tree: &ClassTree, referenced: &IndexSet<ClassId>) -> Vec<ClassId> {
    tree.iter()
        .filter(|(id, parents)| parents.is_empty() && referenced.contains(*id))
        .map(|(id, _)| *id)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model(toml: &str) -> Model {
        toml.parse().unwrap()
    }

    #[test]
    fn test_tree_orders_generalizations_before_extensions() {
        let model = model(
            r#"
            [[classes]]
            name = "Meta"
            predefined = true

            [[classes]]
            name = "Base"

            [[classes]]
            name = "Block"
            generalizes = ["Base"]

            [[classes.attributes]]
            name = "baseClass"
            type = "Meta"
            association = true
        "#,
        );
        let tree = class_tree(&model);

        let block = model.class_named("Block").unwrap();
        let base = model.class_named("Base").unwrap();
        let meta = model.class_named("Meta").unwrap();
        assert_eq!(tree[&block], vec![base, meta]);
        // One entry per class, parentless ones included.
        assert_eq!(tree.len(), 3);
        assert!(tree[&base].is_empty());
    }

    #[test]
    fn test_referenced_covers_both_edge_kinds() {
        let model = model(
            r#"
            [[classes]]
            name = "Meta"
            predefined = true

            [[classes]]
            name = "Base"

            [[classes]]
            name = "Block"
            generalizes = ["Base"]

            [[classes.attributes]]
            name = "baseClass"
            type = "Meta"
            association = true
        "#,
        );
        let referenced = referenced_classes(&model);

        assert!(referenced.contains(&model.class_named("Base").unwrap()));
        assert!(referenced.contains(&model.class_named("Meta").unwrap()));
        assert!(!referenced.contains(&model.class_named("Block").unwrap()));
    }

    #[test]
    fn test_roots_require_reference() {
        let model = model(
            r#"
            [[classes]]
            name = "Base"

            [[classes]]
            name = "Loner"

            [[classes]]
            name = "Child"
            generalizes = ["Base"]
        "#,
        );
        let tree = class_tree(&model);
        let referenced = referenced_classes(&model);

        let roots = find_roots(&tree, &referenced);
        assert_eq!(roots, vec![model.class_named("Base").unwrap()]);
    }
}

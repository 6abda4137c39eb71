//! Breadth-first scheduling over the reverse parent relation.

use std::collections::VecDeque;

use classgen_model::ClassId;
use indexmap::IndexSet;

use crate::graph::ClassTree;

/// Produce the candidate emission order: a breadth-first walk from the
/// roots over the "has child" relation derived from the tree.
///
/// Roots are enqueued in order without deduplication; a node may sit in the
/// queue several times before its first visit, and the visited check
/// filters the repeats. Children are discovered in tree iteration order.
/// For single-parent chains this yields ancestors before descendants; a
/// multi-parent class may still be scheduled before one of its parents, so
/// the emitter gates on parent satisfaction rather than trusting this
/// order.
pub fn breadth_first(tree: &ClassTree, roots: &[ClassId]) -> Vec<ClassId> {
    let mut order = Vec::new();
    let mut visited: IndexSet<ClassId> = IndexSet::new();
    let mut queue: VecDeque<ClassId> = roots.iter().copied().collect();

    while let Some(node) = queue.pop_front() {
        if !visited.insert(node) {
            continue;
        }
        order.push(node);
        for (child, parents) in tree {
            if parents.contains(&node) {
                queue.push_back(*child);
            }
        }
    }
    order
}

#[cfg(test)]
mod tests {
    use classgen_model::Model;

    use super::*;
    use crate::graph::{class_tree, find_roots, referenced_classes};

    fn schedule(toml: &str) -> (Model, Vec<ClassId>) {
        let model: Model = toml.parse().unwrap();
        let tree = class_tree(&model);
        let referenced = referenced_classes(&model);
        let roots = find_roots(&tree, &referenced);
        let order = breadth_first(&tree, &roots);
        (model, order)
    }

    fn names(model: &Model, order: &[ClassId]) -> Vec<String> {
        order.iter().map(|id| model.class(*id).name.clone()).collect()
    }

    #[test]
    fn test_chain_is_scheduled_ancestors_first() {
        let (model, order) = schedule(
            r#"
            [[classes]]
            name = "C"
            generalizes = ["B"]

            [[classes]]
            name = "B"
            generalizes = ["A"]

            [[classes]]
            name = "A"
        "#,
        );
        assert_eq!(names(&model, &order), ["A", "B", "C"]);
    }

    #[test]
    fn test_diamond_schedules_every_class_once() {
        let (model, order) = schedule(
            r#"
            [[classes]]
            name = "Top"

            [[classes]]
            name = "Left"
            generalizes = ["Top"]

            [[classes]]
            name = "Right"
            generalizes = ["Top"]

            [[classes]]
            name = "Bottom"
            generalizes = ["Left", "Right"]
        "#,
        );
        // Bottom is enqueued twice (once per parent) but visited once.
        assert_eq!(names(&model, &order), ["Top", "Left", "Right", "Bottom"]);
    }

    #[test]
    fn test_unreferenced_parentless_class_is_never_scheduled() {
        let (model, order) = schedule(
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
        assert_eq!(names(&model, &order), ["Base", "Child"]);
    }

    #[test]
    fn test_cycle_without_roots_is_never_scheduled() {
        let (_, order) = schedule(
            r#"
            [[classes]]
            name = "A"
            generalizes = ["B"]

            [[classes]]
            name = "B"
            generalizes = ["A"]
        "#,
        );
        assert!(order.is_empty());
    }
}

use crate::{
    prelude::*,
    resolve::{InheritedClass, NodeIndex, ResolvedClass},
};

/// Resolve parent ids into display names and enforce the target's
/// inheritance cardinality, failing on the first offending edge.
pub fn resolve_parents(
    index: &NodeIndex,
    target: Target,
    classes: &mut [ResolvedClass],
) -> Result<(), SchemaError> {
    let policy = target.inheritance_policy();

    for (node, class) in index.request().class_nodes.iter().zip(classes.iter_mut()) {
        let mut base_classes = 0usize;

        for parent_ref in &node.parents {
            if parent_ref.id == node.id {
                return Err(StructuralError::SelfInheritance {
                    class: node.name().to_string(),
                }
                .into());
            }

            let (_, parent) = index
                .class(&parent_ref.id)
                .ok_or_else(|| ReferenceError::UnknownParent {
                    class: node.name().to_string(),
                    id: parent_ref.id.clone(),
                })?;

            if !parent.is_interface {
                if node.is_interface && !policy.interfaces_may_extend_classes {
                    return Err(StructuralError::InterfaceExtendsClass {
                        interface: node.name().to_string(),
                        parent: parent.name().to_string(),
                    }
                    .into());
                }

                base_classes += 1;
                if let Some(limit) = policy.max_base_classes
                    && base_classes > limit
                {
                    return Err(StructuralError::TooManyBaseClasses {
                        class: node.name().to_string(),
                        limit,
                    }
                    .into());
                }
            }

            class.parents.push(InheritedClass {
                name: parent.name().to_string(),
                access: parent_ref.access,
                is_interface: parent.is_interface,
            });
        }
    }

    Ok(())
}

//! Graph resolution.
//!
//! Every pass reads the request through one [`NodeIndex`] and writes into a
//! fresh arena of [`ResolvedClass`] values, one per class node and at the
//! same position. The request itself is never mutated.

mod flatten;
mod index;
mod inheritance;
mod lifecycle;
mod model;
mod packaging;
mod synthetic;

pub use index::{NodeIndex, NodeRef};
pub use model::*;

use crate::prelude::*;
use tracing::debug;

/// Run every resolution pass over a validated request.
pub fn resolve(request: &GenerationRequest) -> Result<ResolvedModel, SchemaError> {
    let index = NodeIndex::build(request)?;
    let target = request.language;

    let mut classes: Vec<ResolvedClass> = request.class_nodes.iter().map(seed).collect();

    inheritance::resolve_parents(&index, target, &mut classes)?;
    flatten::flatten_interfaces(&index, target, &mut classes);
    resolve_friends(&index, &mut classes)?;
    synthetic::synthesize_length_fields(target, &mut classes);
    lifecycle::resolve_lifecycle(request, target, &mut classes)?;
    let packages = packaging::resolve_packages(&index, target, &mut classes)?;

    debug!(
        classes = classes.len(),
        packages = packages.len(),
        %target,
        "request resolved"
    );

    Ok(ResolvedModel {
        target,
        classes,
        packages,
    })
}

// Copy the node-local parts of a class; cross-node parts are filled by the passes.
fn seed(node: &ClassNode) -> ResolvedClass {
    let class = &node.class_data;

    ResolvedClass {
        id: node.id.clone(),
        name: class.name.clone(),
        is_interface: node.is_interface,
        properties: class
            .properties
            .iter()
            .map(ResolvedProperty::declared)
            .collect(),
        methods: class.methods.clone(),
        overridden_methods: Vec::new(),
        constructors: Vec::new(),
        destructor: None,
        parents: Vec::new(),
        friend_classes: Vec::new(),
        template_parameters: class.template_parameters.clone(),
        package_path: None,
        generate_copy_constructor: class.generate_copy_constructor,
        generate_copy_assign_operator: class.generate_copy_assign_operator,
    }
}

fn resolve_friends(index: &NodeIndex, classes: &mut [ResolvedClass]) -> Result<(), SchemaError> {
    for (node, class) in index.request().class_nodes.iter().zip(classes.iter_mut()) {
        for id in &node.class_data.friend_class_ids {
            let (_, friend) = index.class(id).ok_or_else(|| ReferenceError::UnknownFriend {
                class: node.name().to_string(),
                id: id.clone(),
            })?;

            class.friend_classes.push(friend.name().to_string());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests;

use crate::{
    prelude::*,
    resolve::{NodeIndex, ResolvedClass, ResolvedProperty},
};
use std::collections::BTreeSet;

/// Copy interface members down into every implementing class.
///
/// The walk follows interface parents only, each interface at most once per
/// implementer. Parents are pushed in reverse so pops follow declaration
/// order. Parent ids were checked by the inheritance pass.
pub fn flatten_interfaces(index: &NodeIndex, target: Target, classes: &mut [ResolvedClass]) {
    let with_properties = target.flattens_interface_properties();

    for (node, class) in index.request().class_nodes.iter().zip(classes.iter_mut()) {
        if node.is_interface {
            continue;
        }

        let mut visited = BTreeSet::new();
        let mut stack: Vec<(usize, &ClassNode)> = interface_parents(index, node).collect();
        stack.reverse();

        while let Some((position, interface)) = stack.pop() {
            if !visited.insert(position) {
                continue;
            }

            class.overridden_methods.extend(
                interface
                    .class_data
                    .methods
                    .iter()
                    .filter(|method| method.access == AccessModifier::Public)
                    .cloned(),
            );

            if with_properties {
                class.properties.extend(
                    interface
                        .class_data
                        .properties
                        .iter()
                        .map(ResolvedProperty::flattened),
                );
            }

            let mut parents: Vec<_> = interface_parents(index, interface).collect();
            parents.reverse();
            stack.extend(parents);
        }
    }
}

fn interface_parents<'a>(
    index: &'a NodeIndex<'a>,
    node: &'a ClassNode,
) -> impl Iterator<Item = (usize, &'a ClassNode)> + 'a {
    node.parents
        .iter()
        .filter_map(|parent| index.class(&parent.id))
        .filter(|(_, parent)| parent.is_interface)
}

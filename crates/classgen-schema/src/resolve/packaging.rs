use crate::{
    prelude::*,
    resolve::{NodeIndex, NodeRef, ResolvedClass, ResolvedPackage},
};
use std::collections::VecDeque;

/// Assign fully-qualified paths with a breadth-first walk from every root
/// package. Classes are leaves; unreachable nodes keep no path.
pub fn resolve_packages(
    index: &NodeIndex,
    target: Target,
    classes: &mut [ResolvedClass],
) -> Result<Vec<ResolvedPackage>, SchemaError> {
    let request = index.request();
    let separator = target.package_separator();
    let children = children_of(index)?;

    let mut packages: Vec<ResolvedPackage> = request
        .package_nodes
        .iter()
        .map(|node| ResolvedPackage {
            id: node.id.clone(),
            name: node.package_data.name.clone(),
            path: None,
        })
        .collect();

    let mut queue: VecDeque<usize> = request
        .package_nodes
        .iter()
        .enumerate()
        .filter(|(_, node)| node.is_root())
        .map(|(i, _)| i)
        .collect();

    for &root in &queue {
        packages[root].path = Some(packages[root].name.clone());
    }

    while let Some(current) = queue.pop_front() {
        let node = &request.package_nodes[current];
        let path = packages[current].path.clone().unwrap_or_default();

        for child in &children[current] {
            match index.get(child) {
                Some(NodeRef::Package(i)) => {
                    if packages[i].path.is_some() {
                        return Err(StructuralError::PackageRevisited {
                            package: packages[i].name.clone(),
                        }
                        .into());
                    }
                    packages[i].path = Some(format!("{path}{separator}{}", packages[i].name));
                    queue.push_back(i);
                }
                Some(NodeRef::Class(i)) => {
                    let class = &mut classes[i];
                    if class.package_path.is_some() {
                        return Err(StructuralError::ClassInMultiplePackages {
                            class: class.name.clone(),
                        }
                        .into());
                    }
                    class.package_path = Some(path.clone());
                }
                None => {
                    return Err(ReferenceError::UnknownPackageChild {
                        package: node.package_data.name.clone(),
                        id: child.to_string(),
                    }
                    .into());
                }
            }
        }
    }

    Ok(packages)
}

// Declared children plus classes naming the package as owner, without repeats.
fn children_of<'a>(index: &NodeIndex<'a>) -> Result<Vec<Vec<&'a str>>, ReferenceError> {
    let request = index.request();

    let mut children: Vec<Vec<&str>> = request
        .package_nodes
        .iter()
        .map(|node| {
            let mut ids: Vec<&str> = Vec::new();
            for id in &node.package_data.children_ids {
                if !ids.contains(&id.as_str()) {
                    ids.push(id);
                }
            }
            ids
        })
        .collect();

    for node in &request.package_nodes {
        if !node.is_root() && index.package(&node.parent_package_id).is_none() {
            return Err(ReferenceError::UnknownParentPackage {
                package: node.package_data.name.clone(),
                id: node.parent_package_id.clone(),
            });
        }
    }

    for class in &request.class_nodes {
        let Some(package_id) = &class.package_id else {
            continue;
        };
        let (i, _) = index
            .package(package_id)
            .ok_or_else(|| ReferenceError::UnknownOwningPackage {
                class: class.name().to_string(),
                id: package_id.clone(),
            })?;

        if !children[i].contains(&class.id.as_str()) {
            children[i].push(&class.id);
        }
    }

    Ok(children)
}

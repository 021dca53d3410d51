use crate::prelude::*;
use std::collections::BTreeMap;

///
/// NodeRef
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NodeRef {
    Class(usize),
    Package(usize),
}

///
/// NodeIndex
///
/// Single id namespace shared by classes and packages, borrowed from the
/// request. Built once up front so later passes never scan.
///

#[derive(Debug)]
pub struct NodeIndex<'a> {
    request: &'a GenerationRequest,
    ids: BTreeMap<&'a str, NodeRef>,
}

impl<'a> NodeIndex<'a> {
    pub fn build(request: &'a GenerationRequest) -> Result<Self, ReferenceError> {
        let mut ids = BTreeMap::new();

        let classes = request
            .class_nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (node.id.as_str(), NodeRef::Class(i)));
        let packages = request
            .package_nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (node.id.as_str(), NodeRef::Package(i)));

        for (id, node) in classes.chain(packages) {
            if ids.insert(id, node).is_some() {
                return Err(ReferenceError::DuplicateId { id: id.to_string() });
            }
        }

        Ok(Self { request, ids })
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<NodeRef> {
        self.ids.get(id).copied()
    }

    #[must_use]
    pub fn class(&self, id: &str) -> Option<(usize, &'a ClassNode)> {
        match self.get(id)? {
            NodeRef::Class(i) => Some((i, &self.request.class_nodes[i])),
            NodeRef::Package(_) => None,
        }
    }

    #[must_use]
    pub fn package(&self, id: &str) -> Option<(usize, &'a PackageNode)> {
        match self.get(id)? {
            NodeRef::Package(i) => Some((i, &self.request.package_nodes[i])),
            NodeRef::Class(_) => None,
        }
    }

    #[must_use]
    pub const fn request(&self) -> &'a GenerationRequest {
        self.request
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classes_and_packages_share_one_namespace() {
        let request = GenerationRequest::new(Target::Java)
            .with_class(ClassNode::new("shared", ClassModel::new("A")))
            .with_package(PackageNode::new("shared", "pkg"));

        let err = NodeIndex::build(&request).unwrap_err();
        assert!(matches!(err, ReferenceError::DuplicateId { ref id } if id == "shared"));
    }

    #[test]
    fn lookups_are_kind_checked() {
        let request = GenerationRequest::new(Target::Java)
            .with_class(ClassNode::new("c1", ClassModel::new("A")))
            .with_package(PackageNode::new("p1", "pkg"));
        let index = NodeIndex::build(&request).unwrap();

        assert_eq!(index.class("c1").map(|(i, _)| i), Some(0));
        assert!(index.class("p1").is_none());
        assert!(index.package("c1").is_none());
        assert_eq!(index.get("p1"), Some(NodeRef::Package(0)));
    }
}

use crate::prelude::*;

///
/// GenerationRequest
/// One complete submission: every class and package node plus the target.
///

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    #[serde(default)]
    pub class_nodes: Vec<ClassNode>,

    #[serde(default)]
    pub package_nodes: Vec<PackageNode>,

    pub language: Target,
}

impl GenerationRequest {
    #[must_use]
    pub const fn new(language: Target) -> Self {
        Self {
            class_nodes: Vec::new(),
            package_nodes: Vec::new(),
            language,
        }
    }

    #[must_use]
    pub fn with_class(mut self, node: ClassNode) -> Self {
        self.class_nodes.push(node);
        self
    }

    #[must_use]
    pub fn with_package(mut self, node: PackageNode) -> Self {
        self.package_nodes.push(node);
        self
    }
}

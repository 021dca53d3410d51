use crate::prelude::*;

///
/// PackageNode
///

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageNode {
    pub id: String,

    /// Empty (or absent) for a root package.
    #[serde(default)]
    pub parent_package_id: String,

    pub package_data: PackageModel,
}

impl PackageNode {
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            parent_package_id: String::new(),
            package_data: PackageModel {
                name: name.into(),
                children_ids: Vec::new(),
            },
        }
    }

    #[must_use]
    pub fn with_parent(mut self, parent_id: impl Into<String>) -> Self {
        self.parent_package_id = parent_id.into();
        self
    }

    #[must_use]
    pub fn with_child(mut self, child_id: impl Into<String>) -> Self {
        self.package_data.children_ids.push(child_id.into());
        self
    }

    #[must_use]
    pub fn is_root(&self) -> bool {
        self.parent_package_id.is_empty()
    }
}

///
/// PackageModel
/// Children may be packages or classes.
///

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageModel {
    pub name: String,

    #[serde(default)]
    pub children_ids: Vec<String>,
}

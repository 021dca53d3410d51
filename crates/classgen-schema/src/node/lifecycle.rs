use crate::prelude::*;

///
/// ConstructorModel
///

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConstructorModel {
    #[serde(default)]
    pub name: String,

    /// Property ids this constructor initializes, in parameter order.
    #[serde(default)]
    pub initialized_fields_ids: Vec<String>,

    #[serde(default)]
    pub body_code: Option<String>,

    #[serde(default)]
    pub is_copy_constructor: bool,
}

impl ConstructorModel {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn initializing(mut self, property_id: impl Into<String>) -> Self {
        self.initialized_fields_ids.push(property_id.into());
        self
    }
}

///
/// DestructorModel
///

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DestructorModel {
    /// Property ids whose owned memory the destructor releases.
    #[serde(default)]
    pub deleted_fields_ids: Vec<String>,
}

impl DestructorModel {
    #[must_use]
    pub fn releasing<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            deleted_fields_ids: ids.into_iter().map(Into::into).collect(),
        }
    }
}

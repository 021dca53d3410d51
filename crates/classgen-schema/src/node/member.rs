use crate::prelude::*;

///
/// PropertyModel
///

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyModel {
    pub id: String,
    pub name: String,

    #[serde(rename = "type")]
    pub ty: DataType,

    #[serde(default, rename = "accessModifier")]
    pub access: AccessModifier,

    #[serde(default)]
    pub is_static: bool,

    #[serde(default)]
    pub generate_getter: bool,

    #[serde(default)]
    pub generate_setter: bool,
}

impl PropertyModel {
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, ty: DataType) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ty,
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn with_access(mut self, access: AccessModifier) -> Self {
        self.access = access;
        self
    }

    #[must_use]
    pub const fn with_setter(mut self) -> Self {
        self.generate_setter = true;
        self
    }

    #[must_use]
    pub const fn with_getter(mut self) -> Self {
        self.generate_getter = true;
        self
    }

    #[must_use]
    pub const fn with_static(mut self) -> Self {
        self.is_static = true;
        self
    }
}

///
/// MethodModel
///

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodModel {
    pub name: String,

    #[serde(default, rename = "accessModifier")]
    pub access: AccessModifier,

    pub return_type: DataType,

    #[serde(default)]
    pub parameters: Vec<ParameterModel>,

    #[serde(default)]
    pub is_virtual: bool,

    #[serde(default)]
    pub is_static: bool,
}

impl MethodModel {
    #[must_use]
    pub fn new(name: impl Into<String>, return_type: DataType) -> Self {
        Self {
            name: name.into(),
            return_type,
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn with_access(mut self, access: AccessModifier) -> Self {
        self.access = access;
        self
    }

    #[must_use]
    pub fn with_parameter(mut self, parameter: ParameterModel) -> Self {
        self.parameters.push(parameter);
        self
    }
}

///
/// ParameterModel
///

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterModel {
    #[serde(default)]
    pub id: String,

    pub name: String,

    #[serde(rename = "type")]
    pub ty: DataType,

    #[serde(default)]
    pub is_ref: bool,

    #[serde(default)]
    pub is_const: bool,
}

impl ParameterModel {
    #[must_use]
    pub fn new(name: impl Into<String>, ty: DataType) -> Self {
        Self {
            name: name.into(),
            ty,
            ..Self::default()
        }
    }
}

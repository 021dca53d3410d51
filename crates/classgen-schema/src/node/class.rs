use crate::prelude::*;

///
/// ClassNode
///
/// A class or interface addressed by a caller-assigned id. Every edge to
/// another node is an id; nothing here is resolved.
///

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassNode {
    pub id: String,

    /// Owning package; equivalent to being listed among that package's children.
    #[serde(default)]
    pub package_id: Option<String>,

    #[serde(default)]
    pub parents: Vec<ParentRef>,

    #[serde(default)]
    pub is_interface: bool,

    pub class_data: ClassModel,
}

impl ClassNode {
    #[must_use]
    pub fn new(id: impl Into<String>, class_data: ClassModel) -> Self {
        Self {
            id: id.into(),
            class_data,
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn interface(mut self) -> Self {
        self.is_interface = true;
        self
    }

    #[must_use]
    pub fn with_parent(self, id: impl Into<String>) -> Self {
        self.with_parent_access(id, AccessModifier::Public)
    }

    #[must_use]
    pub fn with_parent_access(mut self, id: impl Into<String>, access: AccessModifier) -> Self {
        self.parents.push(ParentRef {
            id: id.into(),
            access,
        });
        self
    }

    #[must_use]
    pub fn in_package(mut self, package_id: impl Into<String>) -> Self {
        self.package_id = Some(package_id.into());
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.class_data.name
    }
}

///
/// ParentRef
/// Inheritance or implementation edge, with the access specifier the native target renders.
///

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ParentRef {
    pub id: String,

    #[serde(default)]
    pub access: AccessModifier,
}

///
/// ClassModel
///

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassModel {
    pub name: String,

    #[serde(default)]
    pub properties: Vec<PropertyModel>,

    #[serde(default)]
    pub methods: Vec<MethodModel>,

    #[serde(default)]
    pub constructors: Vec<ConstructorModel>,

    #[serde(default)]
    pub destructor: Option<DestructorModel>,

    #[serde(default)]
    pub friend_class_ids: Vec<String>,

    /// Non-empty means the class is a template / generic.
    #[serde(default)]
    pub template_parameters: Vec<String>,

    #[serde(default)]
    pub generate_copy_constructor: bool,

    #[serde(default)]
    pub generate_copy_assign_operator: bool,
}

impl ClassModel {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_property(mut self, property: PropertyModel) -> Self {
        self.properties.push(property);
        self
    }

    #[must_use]
    pub fn with_method(mut self, method: MethodModel) -> Self {
        self.methods.push(method);
        self
    }

    #[must_use]
    pub fn with_constructor(mut self, constructor: ConstructorModel) -> Self {
        self.constructors.push(constructor);
        self
    }

    #[must_use]
    pub fn with_destructor(mut self, destructor: DestructorModel) -> Self {
        self.destructor = Some(destructor);
        self
    }

    #[must_use]
    pub fn with_friend(mut self, class_id: impl Into<String>) -> Self {
        self.friend_class_ids.push(class_id.into());
        self
    }

    #[must_use]
    pub fn with_template_parameter(mut self, name: impl Into<String>) -> Self {
        self.template_parameters.push(name.into());
        self
    }

    #[must_use]
    pub const fn with_copy_machinery(mut self, constructor: bool, assign: bool) -> Self {
        self.generate_copy_constructor = constructor;
        self.generate_copy_assign_operator = assign;
        self
    }
}

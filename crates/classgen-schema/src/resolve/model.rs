use crate::prelude::*;

///
/// ResolvedModel
///
/// Output of resolution: every class is self-contained, with parents,
/// friends and packages replaced by names and paths. Nothing in here
/// points back into the request.
///

#[derive(Clone, Debug, Serialize)]
pub struct ResolvedModel {
    pub target: Target,
    pub classes: Vec<ResolvedClass>,
    pub packages: Vec<ResolvedPackage>,
}

impl ResolvedModel {
    #[must_use]
    pub fn class(&self, id: &str) -> Option<&ResolvedClass> {
        self.classes.iter().find(|class| class.id == id)
    }

    #[must_use]
    pub fn package(&self, id: &str) -> Option<&ResolvedPackage> {
        self.packages.iter().find(|package| package.id == id)
    }
}

///
/// ResolvedPackage
///

#[derive(Clone, Debug, Serialize)]
pub struct ResolvedPackage {
    pub id: String,
    pub name: String,

    /// Fully-qualified path; `None` when no root reaches the package.
    pub path: Option<String>,
}

///
/// ResolvedClass
///

#[derive(Clone, Debug, Serialize)]
pub struct ResolvedClass {
    pub id: String,
    pub name: String,
    pub is_interface: bool,

    /// Declared properties with synthesized length fields interleaved,
    /// followed by properties flattened in from interfaces.
    pub properties: Vec<ResolvedProperty>,
    pub methods: Vec<MethodModel>,

    /// Public methods of every ancestor interface, in first-visit order.
    pub overridden_methods: Vec<MethodModel>,

    pub constructors: Vec<ResolvedConstructor>,
    pub destructor: Option<ResolvedDestructor>,

    /// Direct parents in declaration order.
    pub parents: Vec<InheritedClass>,
    pub friend_classes: Vec<String>,
    pub template_parameters: Vec<String>,
    pub package_path: Option<String>,

    pub generate_copy_constructor: bool,
    pub generate_copy_assign_operator: bool,
}

impl ResolvedClass {
    pub fn base_classes(&self) -> impl Iterator<Item = &InheritedClass> {
        self.parents.iter().filter(|parent| !parent.is_interface)
    }

    pub fn interfaces(&self) -> impl Iterator<Item = &InheritedClass> {
        self.parents.iter().filter(|parent| parent.is_interface)
    }

    #[must_use]
    pub fn property(&self, name: &str) -> Option<&ResolvedProperty> {
        self.properties.iter().find(|property| property.name == name)
    }

    /// Properties selected by index, in the order given.
    pub fn select<'a>(
        &'a self,
        indices: &'a [usize],
    ) -> impl Iterator<Item = &'a ResolvedProperty> {
        indices.iter().filter_map(|&index| self.properties.get(index))
    }
}

///
/// InheritedClass
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct InheritedClass {
    pub name: String,
    pub access: AccessModifier,
    pub is_interface: bool,
}

///
/// ResolvedProperty
///

#[derive(Clone, Debug, Serialize)]
pub struct ResolvedProperty {
    pub id: String,
    pub name: String,
    pub ty: DataType,
    pub access: AccessModifier,
    pub is_static: bool,
    pub generate_getter: bool,
    pub generate_setter: bool,

    /// Setter parameters: the property itself, then any length fields it owns.
    pub setter_parameters: Vec<ParameterModel>,
    pub origin: PropertyOrigin,
}

impl ResolvedProperty {
    /// Carry a declared property over, with its own value as the sole setter parameter.
    #[must_use]
    pub fn declared(property: &PropertyModel) -> Self {
        Self::from_model(property, PropertyOrigin::Declared)
    }

    #[must_use]
    pub fn flattened(property: &PropertyModel) -> Self {
        Self::from_model(property, PropertyOrigin::Flattened)
    }

    fn from_model(property: &PropertyModel, origin: PropertyOrigin) -> Self {
        Self {
            id: property.id.clone(),
            name: property.name.clone(),
            ty: property.ty.clone(),
            access: property.access,
            is_static: property.is_static,
            generate_getter: property.generate_getter,
            generate_setter: property.generate_setter,
            setter_parameters: vec![ParameterModel::new(&property.name, property.ty.clone())],
            origin,
        }
    }

    #[must_use]
    pub const fn is_synthetic(&self) -> bool {
        matches!(self.origin, PropertyOrigin::Synthetic { .. })
    }
}

///
/// PropertyOrigin
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub enum PropertyOrigin {
    Declared,
    /// Length field generated for an array-shaped property.
    Synthetic { owner: String },
    /// Copied down from an ancestor interface.
    Flattened,
}

///
/// ResolvedConstructor
///

#[derive(Clone, Debug, Serialize)]
pub struct ResolvedConstructor {
    pub name: String,

    /// Indices into the owning class's `properties`, in parameter order.
    pub fields: Vec<usize>,
    pub body_code: Option<String>,
    pub is_copy_constructor: bool,

    /// Comma-joined parameter type spellings.
    pub signature: String,
}

///
/// ResolvedDestructor
///

#[derive(Clone, Debug, Serialize)]
pub struct ResolvedDestructor {
    /// Indices into the owning class's `properties`.
    pub fields: Vec<usize>,
}

use thiserror::Error as ThisError;

///
/// SchemaError
///
/// Every way a request can be rejected before rendering. Messages name the
/// offending class, member, or id verbatim.
///

#[derive(Debug, ThisError)]
pub enum SchemaError {
    #[error(transparent)]
    Naming(#[from] NamingError),

    #[error(transparent)]
    Structural(#[from] StructuralError),

    #[error(transparent)]
    Reference(#[from] ReferenceError),
}

///
/// NamingError
/// An identifier or type name does not match the accepted pattern.
///

#[derive(Debug, ThisError)]
pub enum NamingError {
    #[error("the name of the class '{class}' is not valid")]
    Class { class: String },

    #[error("the name of the property '{property}', from the class '{class}', is not valid")]
    Property { class: String, property: String },

    #[error(
        "the type name '{ty}' of the property '{property}', from the class '{class}', is not valid"
    )]
    PropertyType {
        class: String,
        property: String,
        ty: String,
    },

    #[error(
        "the array length field '{field}' of the property '{property}', from the class '{class}', is not valid"
    )]
    LengthField {
        class: String,
        property: String,
        field: String,
    },

    #[error("the name of the method '{method}', from the class '{class}', is not valid")]
    Method { class: String, method: String },

    #[error(
        "the return type name '{ty}' of the method '{method}', from the class '{class}', is not valid"
    )]
    ReturnType {
        class: String,
        method: String,
        ty: String,
    },

    #[error(
        "the name of the parameter '{parameter}', from the class '{class}', method '{method}', is not valid"
    )]
    Parameter {
        class: String,
        method: String,
        parameter: String,
    },

    #[error(
        "the type name '{ty}' of the parameter '{parameter}', from the class '{class}', method '{method}', is not valid"
    )]
    ParameterType {
        class: String,
        method: String,
        parameter: String,
        ty: String,
    },

    #[error("the template parameter '{parameter}', from the class '{class}', is not valid")]
    TemplateParameter { class: String, parameter: String },

    #[error("the name of the package '{package}' is not valid")]
    Package { package: String },
}

///
/// StructuralError
/// The graph or a class body violates a per-target structural rule.
///

#[derive(Debug, ThisError)]
pub enum StructuralError {
    #[error(
        "class '{class}' inherits more than {limit} regular class(es); the chosen language does not allow this type of inheritance"
    )]
    TooManyBaseClasses { class: String, limit: usize },

    #[error(
        "interface '{interface}' inherits the regular class '{parent}'; the chosen language does not allow this type of inheritance"
    )]
    InterfaceExtendsClass { interface: String, parent: String },

    #[error("class '{class}' lists itself as a parent")]
    SelfInheritance { class: String },

    #[error(
        "private property '{property}' found in the interface '{interface}'; interfaces may not declare private properties"
    )]
    PrivateInterfaceProperty { interface: String, property: String },

    #[error("class '{class}' declares two constructors with the signature ({signature})")]
    DuplicateConstructorSignature { class: String, signature: String },

    #[error("package '{package}' is reachable through more than one parent")]
    PackageRevisited { package: String },

    #[error("class '{class}' is contained in more than one package")]
    ClassInMultiplePackages { class: String },
}

///
/// ReferenceError
/// An id does not resolve to a known node, or is not unique.
///

#[derive(Debug, ThisError)]
pub enum ReferenceError {
    #[error("node id '{id}' is used by more than one node")]
    DuplicateId { id: String },

    #[error("class '{class}' references unknown parent id '{id}'")]
    UnknownParent { class: String, id: String },

    #[error("class '{class}' references unknown friend class id '{id}'")]
    UnknownFriend { class: String, id: String },

    #[error(
        "constructor '{constructor}' of class '{class}' initializes unknown property id '{id}'"
    )]
    UnknownInitializedField {
        class: String,
        constructor: String,
        id: String,
    },

    #[error("destructor of class '{class}' releases unknown property id '{id}'")]
    UnknownDeletedField { class: String, id: String },

    #[error("package '{package}' lists unknown child id '{id}'")]
    UnknownPackageChild { package: String, id: String },

    #[error("package '{package}' references unknown parent package id '{id}'")]
    UnknownParentPackage { package: String, id: String },

    #[error("class '{class}' references unknown package id '{id}'")]
    UnknownOwningPackage { class: String, id: String },
}

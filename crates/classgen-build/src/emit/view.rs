//! Flat, serializable views handed to the class skeletons.
//!
//! Field names are the attribute names the skeletons read.

use classgen_schema::{
    node::{MethodModel, ParameterModel},
    resolve::{PropertyOrigin, ResolvedClass, ResolvedConstructor, ResolvedProperty},
    types::{AccessModifier, DataType},
};
use serde::Serialize;

///
/// Spelling
/// Target-specific spelling of types and accessor names.
///

pub trait Spelling {
    /// Type text and the suffix written after the declared name.
    fn spell(&self, ty: &DataType) -> SpelledType;

    fn spell_parameter(&self, parameter: &ParameterModel) -> SpelledType {
        self.spell(&parameter.ty)
    }

    /// Return type of a generated getter.
    fn getter_type(&self, ty: &DataType) -> String {
        self.spell(ty).ty
    }

    fn getter_name(&self, property: &str) -> String;
    fn setter_name(&self, property: &str) -> String;
}

///
/// SpelledType
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SpelledType {
    pub ty: String,
    pub array_suffix: String,
}

///
/// ParameterView
///

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ParameterView {
    pub name: String,
    #[serde(rename = "Type")]
    pub ty: String,
    pub array_suffix: String,
}

impl ParameterView {
    pub fn new(spelling: &impl Spelling, parameter: &ParameterModel) -> Self {
        let SpelledType { ty, array_suffix } = spelling.spell_parameter(parameter);

        Self {
            name: parameter.name.clone(),
            ty,
            array_suffix,
        }
    }

    fn of_property(spelling: &impl Spelling, property: &ResolvedProperty) -> Self {
        let SpelledType { ty, array_suffix } = spelling.spell(&property.ty);

        Self {
            name: property.name.clone(),
            ty,
            array_suffix,
        }
    }
}

///
/// PropertyView
///

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PropertyView {
    pub name: String,
    #[serde(rename = "Type")]
    pub ty: String,
    pub array_suffix: String,
    pub access: String,
    pub is_static: bool,

    /// Interface property carried into an implementer.
    pub is_auto_property: bool,
    pub getter: Option<String>,
    pub getter_type: String,
    pub setter: Option<String>,
    pub setter_parameters: Vec<ParameterView>,
}

impl PropertyView {
    pub fn new(spelling: &impl Spelling, property: &ResolvedProperty) -> Self {
        let SpelledType { ty, array_suffix } = spelling.spell(&property.ty);

        Self {
            name: property.name.clone(),
            ty,
            array_suffix,
            access: property.access.to_string(),
            is_static: property.is_static,
            is_auto_property: property.origin == PropertyOrigin::Flattened,
            getter: property
                .generate_getter
                .then(|| spelling.getter_name(&property.name)),
            getter_type: spelling.getter_type(&property.ty),
            setter: property
                .generate_setter
                .then(|| spelling.setter_name(&property.name)),
            setter_parameters: property
                .setter_parameters
                .iter()
                .map(|parameter| ParameterView::new(spelling, parameter))
                .collect(),
        }
    }
}

///
/// MethodView
///

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct MethodView {
    pub name: String,
    pub return_type: String,
    pub parameters: Vec<ParameterView>,
    pub is_virtual: bool,
    pub is_static: bool,
}

impl MethodView {
    pub fn new(spelling: &impl Spelling, method: &MethodModel) -> Self {
        let SpelledType { ty, array_suffix } = spelling.spell(&method.return_type);

        Self {
            name: method.name.clone(),
            return_type: format!("{ty}{array_suffix}"),
            parameters: method
                .parameters
                .iter()
                .map(|parameter| ParameterView::new(spelling, parameter))
                .collect(),
            is_virtual: method.is_virtual,
            is_static: method.is_static,
        }
    }
}

///
/// InitializerView
///

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct InitializerView {
    pub name: String,
    pub source: String,
}

///
/// ConstructorView
///

#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ConstructorView {
    pub is_copy: bool,
    pub parameters: Vec<ParameterView>,
    pub initializers: Vec<InitializerView>,

    /// Body lines, unindented.
    pub body: Vec<String>,
}

impl ConstructorView {
    /// A declared constructor: one parameter and one initializer per field.
    /// A copy constructor takes no field parameters and reads from `other`.
    pub fn declared(
        spelling: &impl Spelling,
        class: &ResolvedClass,
        constructor: &ResolvedConstructor,
    ) -> Self {
        let fields: Vec<&ResolvedProperty> = class.select(&constructor.fields).collect();
        let is_copy = constructor.is_copy_constructor;

        Self {
            is_copy,
            parameters: if is_copy {
                Vec::new()
            } else {
                fields
                    .iter()
                    .map(|property| ParameterView::of_property(spelling, property))
                    .collect()
            },
            initializers: fields
                .iter()
                .map(|property| InitializerView {
                    name: property.name.clone(),
                    source: if is_copy {
                        format!("other.{}", property.name)
                    } else {
                        property.name.clone()
                    },
                })
                .collect(),
            body: constructor
                .body_code
                .as_deref()
                .map(lines)
                .unwrap_or_default(),
        }
    }
}

///
/// Members
/// Properties and methods partitioned by access modifier.
///

#[derive(Debug, Default)]
pub struct Members {
    pub properties: Vec<PropertyView>,
    pub public_properties: Vec<PropertyView>,
    pub protected_properties: Vec<PropertyView>,
    pub private_properties: Vec<PropertyView>,
    pub public_methods: Vec<MethodView>,
    pub protected_methods: Vec<MethodView>,
    pub private_methods: Vec<MethodView>,
    pub overridden_methods: Vec<MethodView>,
}

impl Members {
    pub fn partition(spelling: &impl Spelling, class: &ResolvedClass) -> Self {
        let mut members = Self::default();

        for property in &class.properties {
            let view = PropertyView::new(spelling, property);
            members.properties.push(view.clone());
            match property.access {
                AccessModifier::Public => members.public_properties.push(view),
                AccessModifier::Protected => members.protected_properties.push(view),
                AccessModifier::Private => members.private_properties.push(view),
            }
        }

        for method in &class.methods {
            let view = MethodView::new(spelling, method);
            match method.access {
                AccessModifier::Public => members.public_methods.push(view),
                AccessModifier::Protected => members.protected_methods.push(view),
                AccessModifier::Private => members.private_methods.push(view),
            }
        }

        members.overridden_methods = class
            .overridden_methods
            .iter()
            .map(|method| MethodView::new(spelling, method))
            .collect();

        members
    }
}

/// Split rendered code into lines, dropping trailing blank lines.
#[must_use]
pub fn lines(code: &str) -> Vec<String> {
    let mut out: Vec<String> = code.lines().map(ToString::to_string).collect();
    while out.last().is_some_and(|line| line.trim().is_empty()) {
        out.pop();
    }

    out
}

use crate::{
    node::{ClassNode, MethodModel, PropertyModel},
    prelude::*,
    validate::naming::{is_identifier, is_type_name},
};

/// Validate one class node: naming first, then interface constraints.
pub fn validate_class(node: &ClassNode, target: Target) -> Result<(), SchemaError> {
    let class = &node.class_data;

    if !is_identifier(&class.name) {
        return Err(NamingError::Class {
            class: class.name.clone(),
        }
        .into());
    }

    for parameter in &class.template_parameters {
        if !is_identifier(parameter) {
            return Err(NamingError::TemplateParameter {
                class: class.name.clone(),
                parameter: parameter.clone(),
            }
            .into());
        }
    }

    for property in &class.properties {
        validate_property(&class.name, property, target)?;
    }

    for method in &class.methods {
        validate_method(&class.name, method, target)?;
    }

    if node.is_interface {
        validate_interface(node)?;
    }

    Ok(())
}

fn validate_property(
    class: &str,
    property: &PropertyModel,
    target: Target,
) -> Result<(), NamingError> {
    if !is_identifier(&property.name) {
        return Err(NamingError::Property {
            class: class.to_string(),
            property: property.name.clone(),
        });
    }

    if !is_type_name(&property.ty.name, target) {
        return Err(NamingError::PropertyType {
            class: class.to_string(),
            property: property.name.clone(),
            ty: property.ty.name.clone(),
        });
    }

    // length fields become real members once resolution synthesizes them
    if let Some(field) = property
        .ty
        .array_length_fields()
        .find(|field| !is_identifier(field))
    {
        return Err(NamingError::LengthField {
            class: class.to_string(),
            property: property.name.clone(),
            field: field.to_string(),
        });
    }

    Ok(())
}

fn validate_method(class: &str, method: &MethodModel, target: Target) -> Result<(), NamingError> {
    if !is_identifier(&method.name) {
        return Err(NamingError::Method {
            class: class.to_string(),
            method: method.name.clone(),
        });
    }

    if !is_type_name(&method.return_type.name, target) {
        return Err(NamingError::ReturnType {
            class: class.to_string(),
            method: method.name.clone(),
            ty: method.return_type.name.clone(),
        });
    }

    for parameter in &method.parameters {
        if !is_identifier(&parameter.name) {
            return Err(NamingError::Parameter {
                class: class.to_string(),
                method: method.name.clone(),
                parameter: parameter.name.clone(),
            });
        }

        if !is_type_name(&parameter.ty.name, target) {
            return Err(NamingError::ParameterType {
                class: class.to_string(),
                method: method.name.clone(),
                parameter: parameter.name.clone(),
                ty: parameter.ty.name.clone(),
            });
        }
    }

    Ok(())
}

// Interfaces expose a contract only; private state has no place in it.
fn validate_interface(node: &ClassNode) -> Result<(), StructuralError> {
    let class = &node.class_data;

    match class
        .properties
        .iter()
        .find(|property| property.access == AccessModifier::Private)
    {
        Some(property) => Err(StructuralError::PrivateInterfaceProperty {
            interface: class.name.clone(),
            property: property.name.clone(),
        }),
        None => Ok(()),
    }
}

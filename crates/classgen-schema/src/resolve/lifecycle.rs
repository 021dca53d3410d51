use crate::{
    prelude::*,
    resolve::{PropertyOrigin, ResolvedClass, ResolvedConstructor, ResolvedDestructor},
};
use std::collections::BTreeSet;

/// Map constructor and destructor ids onto property positions and reject
/// duplicate constructor signatures.
pub fn resolve_lifecycle(
    request: &GenerationRequest,
    target: Target,
    classes: &mut [ResolvedClass],
) -> Result<(), SchemaError> {
    for (node, class) in request.class_nodes.iter().zip(classes.iter_mut()) {
        let model = &node.class_data;
        let mut signatures = BTreeSet::new();

        if target.has_manual_memory() && !class.is_interface && class.generate_copy_constructor {
            signatures.insert(copy_signature(&class.name));
        }

        let mut constructors = Vec::with_capacity(model.constructors.len());
        for constructor in &model.constructors {
            let fields = constructor_fields(class, constructor)?;

            let signature = if constructor.is_copy_constructor {
                copy_signature(&class.name)
            } else {
                class
                    .select(&fields)
                    .map(|property| property.ty.signature_spelling())
                    .collect::<Vec<_>>()
                    .join(", ")
            };

            if !signatures.insert(signature.clone()) {
                return Err(StructuralError::DuplicateConstructorSignature {
                    class: class.name.clone(),
                    signature,
                }
                .into());
            }

            constructors.push(ResolvedConstructor {
                name: constructor.name.clone(),
                fields,
                body_code: constructor.body_code.clone(),
                is_copy_constructor: constructor.is_copy_constructor,
                signature,
            });
        }
        class.constructors = constructors;

        if let Some(destructor) = &model.destructor {
            let fields = destructor
                .deleted_fields_ids
                .iter()
                .map(|id| {
                    position(class, id).ok_or_else(|| ReferenceError::UnknownDeletedField {
                        class: class.name.clone(),
                        id: id.clone(),
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;

            class.destructor = Some(ResolvedDestructor { fields });
        }
    }

    Ok(())
}

// Initialized fields in parameter order, then the length fields of every
// initialized owner so the signature covers the expanded property set.
fn constructor_fields(
    class: &ResolvedClass,
    constructor: &ConstructorModel,
) -> Result<Vec<usize>, ReferenceError> {
    let mut fields = constructor
        .initialized_fields_ids
        .iter()
        .map(|id| {
            position(class, id).ok_or_else(|| ReferenceError::UnknownInitializedField {
                class: class.name.clone(),
                constructor: constructor.name.clone(),
                id: id.clone(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let owners: Vec<&str> = fields
        .iter()
        .map(|&i| class.properties[i].id.as_str())
        .collect();

    for owner in owners {
        for (i, property) in class.properties.iter().enumerate() {
            let owned = matches!(
                &property.origin,
                PropertyOrigin::Synthetic { owner: o } if o == owner
            );
            if owned && !fields.contains(&i) {
                fields.push(i);
            }
        }
    }

    Ok(fields)
}

fn position(class: &ResolvedClass, id: &str) -> Option<usize> {
    class.properties.iter().position(|property| property.id == id)
}

fn copy_signature(class: &str) -> String {
    format!("const {class}&")
}

use crate::{
    prelude::*,
    resolve::{PropertyOrigin, ResolvedClass, ResolvedProperty},
};

/// Give every array-shaped level of every property a length field.
///
/// The property list is rebuilt from a snapshot, so synthesized fields are
/// never themselves expanded. Each length field lands right after its owner,
/// in shape traversal order.
pub fn synthesize_length_fields(target: Target, classes: &mut [ResolvedClass]) {
    for class in classes.iter_mut() {
        let snapshot = std::mem::take(&mut class.properties);
        let mut properties = Vec::with_capacity(snapshot.len());

        for mut owner in snapshot {
            let fields: Vec<ResolvedProperty> = owner
                .ty
                .array_length_fields()
                .map(|field| length_field(target, &owner, field))
                .collect();

            if owner.generate_setter {
                owner.setter_parameters.extend(
                    fields
                        .iter()
                        .map(|field| ParameterModel::new(&field.name, field.ty.clone())),
                );
            }

            properties.push(owner);
            properties.extend(fields);
        }

        class.properties = properties;
    }
}

fn length_field(target: Target, owner: &ResolvedProperty, name: &str) -> ResolvedProperty {
    ResolvedProperty {
        id: format!("{}.{name}", owner.id),
        name: name.to_string(),
        ty: DataType::named(target.length_type()),
        access: owner.access,
        is_static: owner.is_static,
        generate_getter: false,
        generate_setter: false,
        setter_parameters: Vec::new(),
        origin: PropertyOrigin::Synthetic {
            owner: owner.id.clone(),
        },
    }
}

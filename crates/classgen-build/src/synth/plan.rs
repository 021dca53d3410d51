use crate::synth::{Fragment, copy_fragments, release_fragments};
use classgen_schema::resolve::ResolvedClass;

///
/// CopyPlan
///
/// Implicit copy of a whole class. Plain fields are copied through the
/// initializer list; every shaped field gets a deep-copy fragment from
/// `other`. Static fields are not part of an instance and are skipped.
///

#[derive(Debug, Default)]
pub struct CopyPlan {
    pub initializers: Vec<String>,
    pub body: Vec<Fragment>,
}

impl CopyPlan {
    #[must_use]
    pub fn for_class(class: &ResolvedClass) -> Self {
        let mut plan = Self::default();

        for property in class.properties.iter().filter(|p| !p.is_static) {
            if property.ty.is_plain() {
                plan.initializers.push(property.name.clone());
            } else {
                plan.body.extend(copy_fragments(
                    &property.name,
                    &format!("other.{}", property.name),
                    &property.ty,
                ));
            }
        }

        plan
    }
}

/// Release fragments for every field the destructor lists, in listed order.
#[must_use]
pub fn release_plan(class: &ResolvedClass) -> Vec<Fragment> {
    class
        .destructor
        .iter()
        .flat_map(|destructor| class.select(&destructor.fields))
        .flat_map(|property| release_fragments(&property.name, &property.ty))
        .collect()
}

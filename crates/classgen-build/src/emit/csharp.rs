use crate::{
    emit::{
        ConstructorView, Emitter, Members, Spelling, SpelledType, bind_members, capitalize,
        class_instance, wrap_namespace,
    },
    render::{RenderError, TemplateGroup},
    templates::{Skeletons, class as instances},
};
use classgen_schema::{
    node::ParameterModel,
    resolve::ResolvedClass,
    types::{DataType, Target},
};

///
/// CSharpEmitter
///

#[derive(Debug)]
pub struct CSharpEmitter {
    group: TemplateGroup,
}

impl CSharpEmitter {
    pub fn new(class_skeleton: &str) -> Result<Self, RenderError> {
        Ok(Self {
            group: TemplateGroup::new(
                Skeletons::group_name(Target::CSharp),
                class_skeleton,
                instances::MANAGED_INSTANCES,
            )?,
        })
    }
}

impl Emitter for CSharpEmitter {
    fn emit(&self, class: &ResolvedClass) -> Result<String, RenderError> {
        let members = Members::partition(self, class);

        // the base class must precede the interfaces
        let inherited: Vec<&str> = class
            .base_classes()
            .chain(class.interfaces())
            .map(|parent| parent.name.as_str())
            .collect();

        let mut instance = bind_members(class_instance(&self.group, class)?, class, &members)?
            .bind("InheritedClasses", &inherited)?;

        if !class.is_interface {
            let constructors: Vec<ConstructorView> = class
                .constructors
                .iter()
                .map(|constructor| ConstructorView::declared(self, class, constructor))
                .collect();
            instance = instance.bind("Constructors", &constructors)?;
        }

        wrap_namespace(&self.group, class, instance.render()?)
    }
}

impl Spelling for CSharpEmitter {
    fn spell(&self, ty: &DataType) -> SpelledType {
        SpelledType {
            ty: managed_type(ty),
            array_suffix: String::new(),
        }
    }

    fn spell_parameter(&self, parameter: &ParameterModel) -> SpelledType {
        let mut spelled = self.spell(&parameter.ty);
        if parameter.is_ref {
            spelled.ty.insert_str(0, "ref ");
        }

        spelled
    }

    fn getter_name(&self, property: &str) -> String {
        format!("Get{}", capitalize(property))
    }

    fn setter_name(&self, property: &str) -> String {
        format!("Set{}", capitalize(property))
    }
}

/// Managed spelling: every array level becomes `[]`; plain pointers are references already.
pub(super) fn managed_type(ty: &DataType) -> String {
    let arrays = ty.array_dimensions.len() + ty.pointers.iter().filter(|p| p.is_array).count();

    format!("{}{}", ty.name, "[]".repeat(arrays))
}

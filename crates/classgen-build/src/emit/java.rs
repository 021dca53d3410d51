use crate::{
    emit::{
        ConstructorView, Emitter, Members, Spelling, SpelledType, bind_members, capitalize,
        class_instance, csharp::managed_type, wrap_namespace,
    },
    render::{RenderError, TemplateGroup},
    templates::{Skeletons, class as instances},
};
use classgen_schema::{
    resolve::{InheritedClass, ResolvedClass},
    types::{DataType, Target},
};

///
/// JavaEmitter
///

#[derive(Debug)]
pub struct JavaEmitter {
    group: TemplateGroup,
}

impl JavaEmitter {
    pub fn new(class_skeleton: &str) -> Result<Self, RenderError> {
        Ok(Self {
            group: TemplateGroup::new(
                Skeletons::group_name(Target::Java),
                class_skeleton,
                instances::MANAGED_INSTANCES,
            )?,
        })
    }
}

impl Emitter for JavaEmitter {
    fn emit(&self, class: &ResolvedClass) -> Result<String, RenderError> {
        let members = Members::partition(self, class);
        let mut instance = bind_members(class_instance(&self.group, class)?, class, &members)?
            .bind("BaseClasses", &names(class.base_classes()))?
            .bind("Interfaces", &names(class.interfaces()))?;

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

// Java separates `extends` from `implements`.
fn names<'a>(parents: impl Iterator<Item = &'a InheritedClass>) -> Vec<&'a str> {
    parents.map(|parent| parent.name.as_str()).collect()
}

impl Spelling for JavaEmitter {
    fn spell(&self, ty: &DataType) -> SpelledType {
        SpelledType {
            ty: managed_type(ty),
            array_suffix: String::new(),
        }
    }

    fn getter_name(&self, property: &str) -> String {
        format!("get{}", capitalize(property))
    }

    fn setter_name(&self, property: &str) -> String {
        format!("set{}", capitalize(property))
    }
}

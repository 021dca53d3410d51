use crate::{
    emit::{
        ConstructorView, Emitter, InitializerView, Members, Spelling, SpelledType, bind_members,
        capitalize, class_instance, lines, wrap_namespace,
    },
    render::{RenderError, TemplateGroup},
    synth::{CopyPlan, MemoryIdioms, release_plan},
    templates::{Skeletons, class as instances},
};
use classgen_schema::{
    node::ParameterModel,
    resolve::ResolvedClass,
    types::{DataType, Target},
};
use std::fmt::Write as _;

///
/// CppEmitter
///
/// The manual-memory target. Besides the class body it synthesizes the
/// destructor contents, the implicit copy constructor and the copy
/// assignment operator.
///

#[derive(Debug)]
pub struct CppEmitter {
    group: TemplateGroup,
    memory: MemoryIdioms,
}

impl CppEmitter {
    pub fn new(class_skeleton: &str, memory_skeleton: &str) -> Result<Self, RenderError> {
        Ok(Self {
            group: TemplateGroup::new(
                Skeletons::group_name(Target::Cpp),
                class_skeleton,
                instances::NATIVE_INSTANCES,
            )?,
            memory: MemoryIdioms::new(memory_skeleton)?,
        })
    }

    fn constructors(&self, class: &ResolvedClass) -> Result<Vec<ConstructorView>, RenderError> {
        let mut views: Vec<ConstructorView> = class
            .constructors
            .iter()
            .map(|constructor| ConstructorView::declared(self, class, constructor))
            .collect();

        if class.generate_copy_constructor {
            let plan = CopyPlan::for_class(class);
            views.push(ConstructorView {
                is_copy: true,
                parameters: Vec::new(),
                initializers: plan
                    .initializers
                    .iter()
                    .map(|name| InitializerView {
                        name: name.clone(),
                        source: format!("other.{name}"),
                    })
                    .collect(),
                body: lines(&self.memory.render(&plan.body)?),
            });
        }

        Ok(views)
    }

    fn copy_assign_operator(
        &self,
        class: &ResolvedClass,
        release: &str,
    ) -> Result<String, RenderError> {
        if !class.generate_copy_assign_operator {
            return Ok(String::new());
        }

        let plan = CopyPlan::for_class(class);

        self.group
            .instance(instances::COPY_ASSIGN_OPERATOR)?
            .bind("ClassName", &class.name)?
            .bind("ReleaseBodyCode", &lines(release))?
            .bind("Properties", &plan.initializers)?
            .bind("DynamicAllocationBodyCode", &lines(&self.memory.render(&plan.body)?))?
            .render()
    }
}

impl Emitter for CppEmitter {
    fn emit(&self, class: &ResolvedClass) -> Result<String, RenderError> {
        let members = Members::partition(self, class);
        let inherited: Vec<String> = class
            .parents
            .iter()
            .map(|parent| format!("{} {}", parent.access, parent.name))
            .collect();

        let instance = bind_members(class_instance(&self.group, class)?, class, &members)?
            .bind("InheritedClasses", &inherited)?;

        let code = if class.is_interface {
            instance.render()?
        } else {
            let release = self.memory.render(&release_plan(class))?;

            instance
                .bind("Constructors", &self.constructors(class)?)?
                .bind("HasDestructor", &(class.destructor.is_some() && !release.is_empty()))?
                .bind("DestructorContents", &lines(&release))?
                .bind(
                    "CopyAssignOperator",
                    &self.copy_assign_operator(class, &release)?,
                )?
                .render()?
        };

        wrap_namespace(&self.group, class, code)
    }
}

impl Spelling for CppEmitter {
    fn spell(&self, ty: &DataType) -> SpelledType {
        let mut spelled = String::new();
        if ty.is_const {
            spelled.push_str("const ");
        }
        spelled.push_str(&ty.name);
        for pointer in &ty.pointers {
            spelled.push('*');
            if pointer.is_const {
                spelled.push_str(" const");
            }
        }

        let mut array_suffix = String::new();
        for dimension in &ty.array_dimensions {
            let _ = write!(array_suffix, "[{}]", dimension.max_length);
        }

        SpelledType {
            ty: spelled,
            array_suffix,
        }
    }

    fn spell_parameter(&self, parameter: &ParameterModel) -> SpelledType {
        let mut spelled = self.spell(&parameter.ty);
        if parameter.is_const && !parameter.ty.is_const {
            spelled.ty.insert_str(0, "const ");
        }
        if parameter.is_ref {
            spelled.ty.push('&');
        }

        spelled
    }

    // Static arrays cannot be returned by value.
    fn getter_type(&self, ty: &DataType) -> String {
        if ty.array_dimensions.is_empty() {
            self.spell(ty).ty
        } else {
            String::from("const auto&")
        }
    }

    fn getter_name(&self, property: &str) -> String {
        format!("get{}", capitalize(property))
    }

    fn setter_name(&self, property: &str) -> String {
        format!("set{}", capitalize(property))
    }
}

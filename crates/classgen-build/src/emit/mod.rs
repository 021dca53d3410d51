//! Per-target emitters.
//!
//! An emitter maps one resolved class onto the attribute set its class
//! skeleton expects and renders it, wrapping the result in the namespace
//! instance when the class has a package path.

mod cpp;
mod csharp;
mod java;
mod view;

pub use cpp::CppEmitter;
pub use csharp::CSharpEmitter;
pub use java::JavaEmitter;
pub use view::*;

use crate::{
    BuildError,
    render::{Instance, RenderError, TemplateGroup},
    templates::{Skeletons, class as instances},
};
use classgen_schema::{resolve::ResolvedClass, types::Target};

///
/// Emitter
///

pub trait Emitter {
    fn emit(&self, class: &ResolvedClass) -> Result<String, RenderError>;
}

///
/// TargetEmitter
///

#[derive(Debug)]
pub enum TargetEmitter {
    Cpp(CppEmitter),
    CSharp(CSharpEmitter),
    Java(JavaEmitter),
}

impl TargetEmitter {
    /// Build the emitter for `target` from its skeletons.
    pub fn new(target: Target, skeletons: &Skeletons) -> Result<Self, BuildError> {
        let emitter = match target {
            Target::Cpp => {
                let memory = skeletons
                    .memory
                    .as_deref()
                    .ok_or(BuildError::MissingSkeleton { target })?;

                Self::Cpp(CppEmitter::new(&skeletons.class, memory)?)
            }
            Target::CSharp => Self::CSharp(CSharpEmitter::new(&skeletons.class)?),
            Target::Java => Self::Java(JavaEmitter::new(&skeletons.class)?),
        };

        Ok(emitter)
    }
}

impl Emitter for TargetEmitter {
    fn emit(&self, class: &ResolvedClass) -> Result<String, RenderError> {
        match self {
            Self::Cpp(emitter) => emitter.emit(class),
            Self::CSharp(emitter) => emitter.emit(class),
            Self::Java(emitter) => emitter.emit(class),
        }
    }
}

/// Instance for `class`: the interface template for interfaces, else the class template.
fn class_instance<'a>(
    group: &'a TemplateGroup,
    class: &ResolvedClass,
) -> Result<Instance<'a>, RenderError> {
    let name = if class.is_interface {
        instances::INTERFACE
    } else {
        instances::CLASS
    };

    group.instance(name)?.bind("ClassName", &class.name)
}

/// Bind the member partitions, friends and template parameters.
fn bind_members<'a>(
    instance: Instance<'a>,
    class: &ResolvedClass,
    members: &Members,
) -> Result<Instance<'a>, RenderError> {
    instance
        .bind("Properties", &members.properties)?
        .bind("PublicProperties", &members.public_properties)?
        .bind("ProtectedProperties", &members.protected_properties)?
        .bind("PrivateProperties", &members.private_properties)?
        .bind("PublicMethods", &members.public_methods)?
        .bind("ProtectedMethods", &members.protected_methods)?
        .bind("PrivateMethods", &members.private_methods)?
        .bind("OverriddenMethods", &members.overridden_methods)?
        .bind("FriendClasses", &class.friend_classes)?
        .bind("TemplateTypesData", &class.template_parameters)
}

/// Wrap rendered class code in the namespace instance when packaged.
fn wrap_namespace(
    group: &TemplateGroup,
    class: &ResolvedClass,
    code: String,
) -> Result<String, RenderError> {
    match &class.package_path {
        Some(path) => group
            .instance(instances::NAMESPACE)?
            .bind("FullPackagePath", path)?
            .bind("ClassCode", &code)?
            .render(),
        None => Ok(code),
    }
}

fn capitalize(name: &str) -> String {
    use convert_case::{Case, Casing};

    name.to_case(Case::Pascal)
}

#[cfg(test)]
mod tests;

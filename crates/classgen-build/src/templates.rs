//! Template groups and the skeletons bundled with the crate.

use classgen_schema::types::Target;

pub mod class {
    /// Class or struct definition.
    pub const CLASS: &str = "class";
    pub const INTERFACE: &str = "interface";
    /// Wraps an already rendered class in its package.
    pub const NAMESPACE: &str = "namespace";
    pub const COPY_ASSIGN_OPERATOR: &str = "copyAssignOperator";

    pub const MANAGED_INSTANCES: &[&str] = &[CLASS, INTERFACE, NAMESPACE];
    pub const NATIVE_INSTANCES: &[&str] = &[CLASS, INTERFACE, NAMESPACE, COPY_ASSIGN_OPERATOR];
}

pub mod memory {
    pub const GROUP: &str = "memory";

    pub const POINTER_ALLOCATE: &str = "pointerAllocate";
    pub const ALLOCATE_THEN_ITERATE: &str = "allocateThenIterate";
    pub const ITERATE_THEN_DELETE: &str = "iterateThenDelete";
    pub const POINTER_DELETE: &str = "pointerDelete";
    pub const ITERATE_ARRAY: &str = "iterateArray";

    pub const INSTANCES: &[&str] = &[
        POINTER_ALLOCATE,
        ALLOCATE_THEN_ITERATE,
        ITERATE_THEN_DELETE,
        POINTER_DELETE,
        ITERATE_ARRAY,
    ];
}

const CPP_CLASS: &str = include_str!("../templates/cpp.tera");
const CPP_MEMORY: &str = include_str!("../templates/cpp_memory.tera");
const CSHARP_CLASS: &str = include_str!("../templates/csharp.tera");
const JAVA_CLASS: &str = include_str!("../templates/java.tera");

///
/// Skeletons
/// Template text for one target, read once per request.
///

#[derive(Clone, Debug)]
pub struct Skeletons {
    pub class: String,

    /// Memory-management idioms; required by the native target only.
    pub memory: Option<String>,
}

impl Skeletons {
    /// The skeletons shipped with this crate.
    #[must_use]
    pub fn bundled(target: Target) -> Self {
        match target {
            Target::Cpp => Self {
                class: CPP_CLASS.to_string(),
                memory: Some(CPP_MEMORY.to_string()),
            },
            Target::CSharp => Self {
                class: CSHARP_CLASS.to_string(),
                memory: None,
            },
            Target::Java => Self {
                class: JAVA_CLASS.to_string(),
                memory: None,
            },
        }
    }

    #[must_use]
    pub const fn group_name(target: Target) -> &'static str {
        match target {
            Target::Cpp => "cpp",
            Target::CSharp => "csharp",
            Target::Java => "java",
        }
    }
}

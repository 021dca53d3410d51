//! Object-model schema for classgen: the wire shapes a client submits, the
//! ownership-shape grammar, validation, and graph resolution into
//! self-contained per-class models.

pub mod error;
pub mod node;
pub mod resolve;
pub mod types;
pub mod validate;

use crate::{node::GenerationRequest, resolve::ResolvedModel};

pub use error::SchemaError;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        error::{NamingError, ReferenceError, SchemaError, StructuralError},
        node::*,
        types::{AccessModifier, ArrayDimension, DataType, Level, Pointer, Target},
    };
    pub use serde::{Deserialize, Serialize};
}

/// Validate every node of the request, then run all resolution passes.
///
/// Validation is fail-fast and completes for the whole node set before any
/// resolution starts; resolution completes for the whole node set before the
/// caller may render anything.
pub fn prepare(request: &GenerationRequest) -> Result<ResolvedModel, SchemaError> {
    validate::validate_request(request)?;

    resolve::resolve(request)
}

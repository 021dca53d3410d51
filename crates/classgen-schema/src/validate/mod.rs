//! Request validation: identifier syntax and per-target class constraints.
//!
//! Validation is fail-fast: the first violation aborts the whole request.

pub mod class;
pub mod naming;

use crate::{
    error::{NamingError, SchemaError},
    node::GenerationRequest,
};
use tracing::debug;

/// Validate every class node and package name in declaration order.
pub fn validate_request(request: &GenerationRequest) -> Result<(), SchemaError> {
    let target = request.language;

    for node in &request.class_nodes {
        class::validate_class(node, target)?;
    }

    for package in &request.package_nodes {
        let name = &package.package_data.name;
        if !naming::is_identifier(name) {
            return Err(NamingError::Package {
                package: name.clone(),
            }
            .into());
        }
    }

    debug!(
        classes = request.class_nodes.len(),
        packages = request.package_nodes.len(),
        %target,
        "request validated"
    );

    Ok(())
}

//! Rendering side of classgen: template groups, ownership synthesis for the
//! native target, per-target emitters and the request orchestrator.

pub mod emit;
pub mod render;
pub mod synth;
pub mod templates;

use crate::{
    emit::{Emitter, TargetEmitter},
    render::RenderError,
    templates::Skeletons,
};
use classgen_schema::{SchemaError, node::GenerationRequest, types::Target};
use std::collections::BTreeMap;
use thiserror::Error as ThisError;
use tracing::{debug, info, info_span};

///
/// BuildError
///

#[derive(Debug, ThisError)]
pub enum BuildError {
    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("class '{class}' could not be rendered: {source}")]
    Emit { class: String, source: RenderError },

    #[error("no memory-management skeleton configured for target {target}")]
    MissingSkeleton { target: Target },
}

/// Validate, resolve and render a whole request.
///
/// Either every class node renders and the map holds one entry per node id,
/// or the first failure is returned and nothing is.
pub fn generate(
    request: &GenerationRequest,
    skeletons: &Skeletons,
) -> Result<BTreeMap<String, String>, BuildError> {
    let span = info_span!("generate", target = %request.language);
    let _enter = span.enter();

    let model = classgen_schema::prepare(request)?;
    let emitter = TargetEmitter::new(model.target, skeletons)?;

    let mut sources = BTreeMap::new();
    for class in &model.classes {
        let code = emitter.emit(class).map_err(|source| BuildError::Emit {
            class: class.name.clone(),
            source,
        })?;
        debug!(class = %class.name, bytes = code.len(), "class rendered");

        sources.insert(class.id.clone(), code);
    }

    info!(classes = sources.len(), "request generated");

    Ok(sources)
}

//! classgen turns a graph-shaped object model (classes, interfaces and
//! packages addressed by id) into C++, C# or Java class sources.
//!
//! ```no_run
//! use classgen::{Config, prelude::*};
//!
//! let request = GenerationRequest::new(Target::Java)
//!     .with_class(ClassNode::new("p", ClassModel::new("Point")));
//!
//! let sources = classgen::generate(&request, &Config::default()).unwrap();
//! println!("{}", sources["p"]);
//! ```

mod error;

pub use classgen_build as build;
pub use classgen_config::{Config, ConfigError};
pub use classgen_schema as schema;
pub use error::{Error, ErrorKind};

use classgen_schema::{node::GenerationRequest, resolve::ResolvedModel};
use std::collections::BTreeMap;
use tracing::info;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{Config, Error, ErrorKind};
    pub use classgen_schema::prelude::*;
}

/// Generate source text for every class node, keyed by node id.
///
/// Skeletons are read once, before any validation. The first error anywhere
/// fails the whole request.
pub fn generate(
    request: &GenerationRequest,
    config: &Config,
) -> Result<BTreeMap<String, String>, Error> {
    let skeletons = config.skeletons(request.language)?;
    let sources = classgen_build::generate(request, &skeletons)?;

    Ok(sources)
}

/// Validate and resolve without rendering.
pub fn check(request: &GenerationRequest) -> Result<ResolvedModel, Error> {
    let model = classgen_schema::prepare(request)?;
    info!(
        classes = model.classes.len(),
        packages = model.packages.len(),
        "request checked"
    );

    Ok(model)
}

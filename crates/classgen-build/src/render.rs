//! Seam to the template engine.
//!
//! A [`TemplateGroup`] is one skeleton exposing named macros. Each macro is
//! reachable as an *instance*; binding attributes builds the single `a`
//! argument the macro receives.

use serde::Serialize;
use serde_json::{Map, Value};
use std::error::Error as StdError;
use tera::{Context, Tera};
use thiserror::Error as ThisError;

///
/// RenderError
///

#[derive(Debug, ThisError)]
pub enum RenderError {
    #[error("template group '{group}' could not be built: {reason}")]
    Group { group: String, reason: String },

    #[error("template group '{group}' has no instance '{instance}'")]
    UnknownInstance { group: String, instance: String },

    #[error("attribute '{attribute}' could not be bound: {reason}")]
    Attribute { attribute: String, reason: String },

    #[error("instance '{group}/{instance}' failed to render: {reason}")]
    Render {
        group: String,
        instance: String,
        reason: String,
    },
}

///
/// TemplateGroup
///

#[derive(Debug)]
pub struct TemplateGroup {
    name: String,
    instances: Vec<String>,
    tera: Tera,
}

impl TemplateGroup {
    /// Register `skeleton` under `name` plus one entry template per instance.
    pub fn new(name: &str, skeleton: &str, instances: &[&str]) -> Result<Self, RenderError> {
        let mut templates = vec![(name.to_string(), skeleton.to_string())];
        templates.extend(instances.iter().map(|instance| {
            (
                entry_name(name, instance),
                format!("{{% import \"{name}\" as group %}}{{{{ group::{instance}(a=a) }}}}"),
            )
        }));

        let mut tera = Tera::default();
        tera.add_raw_templates(templates)
            .map_err(|err| RenderError::Group {
                group: name.to_string(),
                reason: chain(&err),
            })?;

        Ok(Self {
            name: name.to_string(),
            instances: instances.iter().map(ToString::to_string).collect(),
            tera,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn instance(&self, instance: &str) -> Result<Instance<'_>, RenderError> {
        if !self.instances.iter().any(|known| known == instance) {
            return Err(RenderError::UnknownInstance {
                group: self.name.clone(),
                instance: instance.to_string(),
            });
        }

        Ok(Instance {
            group: self,
            name: instance.to_string(),
            attributes: Map::new(),
        })
    }
}

///
/// Instance
///

#[derive(Debug)]
pub struct Instance<'a> {
    group: &'a TemplateGroup,
    name: String,
    attributes: Map<String, Value>,
}

impl Instance<'_> {
    /// Bind one named attribute; a later bind of the same name replaces it.
    pub fn bind(mut self, attribute: &str, value: &impl Serialize) -> Result<Self, RenderError> {
        let value = serde_json::to_value(value).map_err(|err| RenderError::Attribute {
            attribute: attribute.to_string(),
            reason: err.to_string(),
        })?;
        self.attributes.insert(attribute.to_string(), value);

        Ok(self)
    }

    pub fn render(self) -> Result<String, RenderError> {
        let mut context = Context::new();
        context.insert("a", &self.attributes);

        self.group
            .tera
            .render(&entry_name(&self.group.name, &self.name), &context)
            .map_err(|err| RenderError::Render {
                group: self.group.name.clone(),
                instance: self.name.clone(),
                reason: chain(&err),
            })
    }
}

fn entry_name(group: &str, instance: &str) -> String {
    format!("{group}/{instance}")
}

// Tera nests the useful message in the source chain.
fn chain(err: &tera::Error) -> String {
    let mut reason = err.to_string();
    let mut source = err.source();
    while let Some(inner) = source {
        reason.push_str(": ");
        reason.push_str(&inner.to_string());
        source = inner.source();
    }

    reason
}

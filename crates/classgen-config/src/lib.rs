//! classgen configuration: where the template skeletons live.
//!
//! Every path is optional; an omitted path selects the skeleton bundled with
//! `classgen-build`. Relative paths resolve against the directory of the
//! configuration file.

use classgen_build::templates::Skeletons;
use classgen_schema::types::Target;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error as ThisError;
use tracing::debug;

///
/// ConfigError
///

#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {reason}")]
    Read { path: PathBuf, reason: String },

    #[error("failed to parse config: {reason}")]
    Parse { reason: String },

    #[error("failed to read template skeleton '{path}': {reason}")]
    Skeleton { path: PathBuf, reason: String },
}

///
/// Config
///

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub templates: TemplatePaths,

    #[serde(skip)]
    base_dir: Option<PathBuf>,
}

///
/// TemplatePaths
///

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TemplatePaths {
    pub cpp_class: Option<PathBuf>,
    pub cpp_memory: Option<PathBuf>,
    pub csharp_class: Option<PathBuf>,
    pub java_class: Option<PathBuf>,
}

impl Config {
    /// Parse configuration text; relative paths resolve against the working directory.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|err| ConfigError::Parse {
            reason: err.to_string(),
        })
    }

    /// Read and parse a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|err| ConfigError::Read {
            path: path.to_path_buf(),
            reason: err.to_string(),
        })?;

        let mut config = Self::from_toml_str(&content)?;
        config.base_dir = path.parent().map(Path::to_path_buf);
        debug!(path = %path.display(), "config loaded");

        Ok(config)
    }

    /// Skeleton text for `target`; only the files that target needs are read.
    pub fn skeletons(&self, target: Target) -> Result<Skeletons, ConfigError> {
        let bundled = Skeletons::bundled(target);
        let paths = &self.templates;

        let (class, memory) = match target {
            Target::Cpp => (&paths.cpp_class, Some(&paths.cpp_memory)),
            Target::CSharp => (&paths.csharp_class, None),
            Target::Java => (&paths.java_class, None),
        };

        let class = match class {
            Some(path) => self.read(path)?,
            None => bundled.class,
        };

        let memory = match memory {
            Some(Some(path)) => Some(self.read(path)?),
            Some(None) => bundled.memory,
            None => None,
        };

        Ok(Skeletons { class, memory })
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        match &self.base_dir {
            Some(base) if path.is_relative() => base.join(path),
            _ => path.to_path_buf(),
        }
    }

    fn read(&self, path: &Path) -> Result<String, ConfigError> {
        let path = self.resolve(path);
        debug!(path = %path.display(), "reading skeleton");

        fs::read_to_string(&path).map_err(|err| ConfigError::Skeleton {
            path,
            reason: err.to_string(),
        })
    }
}

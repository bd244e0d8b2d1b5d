//! Error types for rock generation

use std::path::PathBuf;

use thiserror::Error;

use crate::scene::SceneError;

pub type Result<T, E = RockError> = std::result::Result<T, E>;

#[derive(Error, Debug)]
pub enum RockError {
    #[error("Invalid base shape: '{0}' (expected cube, icosphere or uv_sphere)")]
    InvalidShapeId(String),

    #[error("Unknown recipe: '{0}' (expected generic, eroded, boulder or toon)")]
    UnknownRecipeId(String),

    /// Host failures pass through untranslated.
    #[error(transparent)]
    Scene(#[from] SceneError),

    #[error("Nothing to regenerate: no rock has been generated in this session")]
    NoPreviousRequest,

    #[error("Invalid generator config: {0}")]
    InvalidGeneratorConfig(String),

    #[error("Failed to parse rock config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

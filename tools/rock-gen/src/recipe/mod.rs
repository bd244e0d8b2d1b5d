//! Rock recipes
//!
//! A recipe is a fixed sequence of smoothing and noise-displacement steps with
//! some numeric knobs drawn fresh on every generation. The sequence shape never
//! changes: two smoothing passes, the recipe's displacements, one final
//! smoothing pass. Subdivision must come before displacement so the noise acts
//! on the final vertex density.
//!
//! # Example
//! ```no_run
//! use rock_gen::recipe::*;
//! use rand::SeedableRng;
//!
//! let mut rng = rand_pcg::Pcg32::seed_from_u64(7);
//! for op in build_operations(RecipeId::Boulder, &mut rng) {
//!     println!("{}: {}", op.name(), op);
//! }
//! ```

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::Serialize;

use crate::error::RockError;

mod library;
mod ops;
mod sample;
mod textures;

pub use library::{
    CloudsTemplate, DisplaceTemplate, FINAL_SMOOTH, LEADING_SMOOTH, MusgraveTemplate,
    RecipeTemplate, TextureTemplate, VoronoiTemplate,
};
pub use ops::{DEFAULT_MID_LEVEL, DEFAULT_STRENGTH, Operation};
pub use sample::{Pick, Sample, SampleInt};
pub use textures::{
    CloudsParams, ColorMode, DistanceMetric, MusgraveKind, MusgraveParams, NoiseBasis,
    NoiseTexture, NoiseType, TextureKind, VoronoiParams,
};

/// Named rock style
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecipeId {
    #[default]
    Generic,
    Eroded,
    Boulder,
    Toon,
}

impl RecipeId {
    pub const ALL: [RecipeId; 4] = [
        RecipeId::Generic,
        RecipeId::Eroded,
        RecipeId::Boulder,
        RecipeId::Toon,
    ];

    /// Identifier accepted by [`FromStr`]
    pub fn id(&self) -> &'static str {
        match self {
            RecipeId::Generic => "generic",
            RecipeId::Eroded => "eroded",
            RecipeId::Boulder => "boulder",
            RecipeId::Toon => "toon",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RecipeId::Generic => "Generic",
            RecipeId::Eroded => "Eroded",
            RecipeId::Boulder => "Boulder",
            RecipeId::Toon => "Toon",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            RecipeId::Generic => "Generates generic rock forms",
            RecipeId::Eroded => "Generates eroded rocks",
            RecipeId::Boulder => "Generates boulder rocks",
            RecipeId::Toon => "Generates simplistic rocks with hard edges",
        }
    }

    pub fn template(&self) -> &'static RecipeTemplate {
        match self {
            RecipeId::Generic => &library::GENERIC,
            RecipeId::Eroded => &library::ERODED,
            RecipeId::Boulder => &library::BOULDER,
            RecipeId::Toon => &library::TOON,
        }
    }
}

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for RecipeId {
    type Err = RockError;

    /// Accepts the short ids (`generic`, `eroded`, ...) as well as the
    /// host-side identifiers (`GenericRecipe`, `ErodedRecipe`, ...).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        let key = lower.strip_suffix("recipe").unwrap_or(&lower);

        match key {
            "generic" => Ok(RecipeId::Generic),
            "eroded" => Ok(RecipeId::Eroded),
            "boulder" => Ok(RecipeId::Boulder),
            "toon" => Ok(RecipeId::Toon),
            _ => Err(RockError::UnknownRecipeId(s.to_string())),
        }
    }
}

/// Sample the ordered operation list for `recipe`
pub fn build_operations<R: Rng + ?Sized>(recipe: RecipeId, rng: &mut R) -> Vec<Operation> {
    let ops = recipe.template().sample(rng);
    for op in &ops {
        tracing::debug!(recipe = recipe.id(), name = op.name(), "Sampled {}", op);
    }
    ops
}

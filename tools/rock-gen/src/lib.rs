//! Procedural rock generation for 3D hosts
//!
//! This library builds a seed polyhedron (cube, icosphere or UV sphere) and
//! describes the smoothing and noise-displacement stack a host evaluates on top
//! of it. Each rock style is a *recipe*: a fixed template of operations whose
//! numeric knobs are sampled once per generation.
//!
//! Subdivision, noise synthesis and decimation are never evaluated here. The
//! host does that; this crate only decides which operations go on the stack and
//! with which parameters. [`scene::MemoryScene`] is an in-memory host used by
//! the CLI and the tests.
//!
//! # Example
//! ```no_run
//! use rock_gen::prelude::*;
//! use rand::SeedableRng;
//!
//! let mut scene = MemoryScene::new();
//! let mut generator = RockGenerator::new(GeneratorConfig::default())?;
//! let mut rng = rand_pcg::Pcg32::seed_from_u64(42);
//!
//! let request = GenerationRequest::new(RecipeId::Eroded, BaseShape::Icosphere)
//!     .with_low_poly(true);
//! let rock = generator.generate(&mut scene, &request, &mut rng)?;
//!
//! assert!(rock.low_poly.is_some());
//! # Ok::<(), rock_gen::RockError>(())
//! ```

pub mod config;
pub mod error;
pub mod generator;
pub mod mesh;
pub mod recipe;
pub mod request;
pub mod scene;

pub use error::{Result, RockError};

/// Common imports for driving a generation
pub mod prelude {
    pub use crate::config::{CleanupPolicy, GeneratorConfig, RockConfig};
    pub use crate::error::{Result, RockError};
    pub use crate::generator::{GeneratedRock, GeneratorSession, RockGenerator};
    pub use crate::mesh::{BaseShape, MeshData, create_base};
    pub use crate::recipe::{NoiseTexture, Operation, RecipeId, build_operations};
    pub use crate::request::{GenerationRequest, RequestConfig, ResolvedParams};
    pub use crate::scene::{MemoryScene, ObjectId, Scene, SceneError};
}

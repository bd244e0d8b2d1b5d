//! Rock generator
//!
//! Runs one generation against a [`Scene`]:
//!
//! 1. Remove the rocks generated earlier (unhide, select, delete as one batch)
//! 2. Fill unset proportions with random defaults
//! 3. Build the seed mesh and sample the recipe's operations
//! 4. Link the rock, push its operations, make it the active selection
//! 5. Optionally add a hidden, decimated low-poly copy for map baking
//!
//! Nothing is rolled back on failure. The old rocks are already gone by the
//! time the new one is built, so an error part-way can leave no rock at all.

use rand::Rng;
use serde::Serialize;

use crate::config::{CleanupPolicy, GeneratorConfig};
use crate::error::{Result, RockError};
use crate::mesh::{BaseShape, create_base};
use crate::recipe::{FINAL_SMOOTH, Operation, RecipeId, build_operations};
use crate::request::{GenerationRequest, RequestConfig, ResolvedParams};
use crate::scene::{ObjectId, Scene};

/// Name of the decimation step on the low-poly copy
pub const DECIMATE_NAME: &str = "Decimation";

/// Objects a generator created, plus the request that created them
#[derive(Debug, Clone, Default)]
pub struct GeneratorSession {
    owned: Vec<ObjectId>,
    last_request: Option<GenerationRequest>,
}

impl GeneratorSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ids of live objects this session created, oldest first
    pub fn owned(&self) -> &[ObjectId] {
        &self.owned
    }

    pub fn owns(&self, id: ObjectId) -> bool {
        self.owned.contains(&id)
    }

    pub fn last_request(&self) -> Option<&GenerationRequest> {
        self.last_request.as_ref()
    }
}

/// Result of one generation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratedRock {
    pub rock: ObjectId,
    pub low_poly: Option<ObjectId>,
    pub recipe: RecipeId,
    pub base: BaseShape,
    pub params: ResolvedParams,
    /// Operations pushed onto the rock, in order
    pub operations: Vec<Operation>,
}

pub struct RockGenerator {
    config: GeneratorConfig,
    session: GeneratorSession,
}

impl Default for RockGenerator {
    fn default() -> Self {
        Self {
            config: GeneratorConfig::default(),
            session: GeneratorSession::new(),
        }
    }
}

impl RockGenerator {
    /// Create a generator; fails if `config` does not validate
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            session: GeneratorSession::new(),
        })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn session(&self) -> &GeneratorSession {
        &self.session
    }

    /// Validate a raw request, then generate
    ///
    /// Bad identifiers fail here, before the scene is touched.
    pub fn generate_from_config<S, R>(
        &mut self,
        scene: &mut S,
        config: &RequestConfig,
        rng: &mut R,
    ) -> Result<GeneratedRock>
    where
        S: Scene + ?Sized,
        R: Rng + ?Sized,
    {
        let request = GenerationRequest::parse(config)?;
        self.generate(scene, &request, rng)
    }

    /// Re-run the last request; unset proportions are drawn again
    pub fn regenerate<S, R>(&mut self, scene: &mut S, rng: &mut R) -> Result<GeneratedRock>
    where
        S: Scene + ?Sized,
        R: Rng + ?Sized,
    {
        let request = self.session.last_request.ok_or(RockError::NoPreviousRequest)?;
        self.generate(scene, &request, rng)
    }

    /// Replace any previous rock with a new one built from `request`
    pub fn generate<S, R>(
        &mut self,
        scene: &mut S,
        request: &GenerationRequest,
        rng: &mut R,
    ) -> Result<GeneratedRock>
    where
        S: Scene + ?Sized,
        R: Rng + ?Sized,
    {
        self.clear_rocks(scene)?;
        self.session.last_request = Some(*request);

        let params = request.resolve(rng);
        let mesh = create_base(
            request.base,
            params.size,
            params.direction(),
            params.scale_factor,
        );
        let operations = build_operations(request.recipe, rng);

        let rock = scene.add_mesh_object(&self.config.prefix, mesh)?;
        self.session.owned.push(rock);

        for op in &operations {
            scene.push_operation(rock, op.clone())?;
        }
        scene.set_active(rock)?;
        scene.set_selected(rock, true)?;

        let low_poly = if request.low_poly {
            Some(self.add_low_poly(scene, rock)?)
        } else {
            None
        };

        tracing::info!(
            recipe = request.recipe.id(),
            base = request.base.id(),
            size = params.size,
            scale_factor = params.scale_factor,
            %rock,
            low_poly = low_poly.is_some(),
            "Generated rock"
        );

        Ok(GeneratedRock {
            rock,
            low_poly,
            recipe: request.recipe,
            base: request.base,
            params,
            operations,
        })
    }

    /// Delete every rock eligible under the cleanup policy; returns the count
    pub fn clear_rocks<S: Scene + ?Sized>(&mut self, scene: &mut S) -> Result<usize> {
        let targets: Vec<ObjectId> = match self.config.cleanup {
            CleanupPolicy::Session => self
                .session
                .owned
                .iter()
                .copied()
                .filter(|&id| scene.contains(id))
                .collect(),
            CleanupPolicy::Prefix => scene
                .object_ids()
                .into_iter()
                .filter(|&id| {
                    scene
                        .object_name(id)
                        .is_ok_and(|name| name.starts_with(&self.config.prefix))
                })
                .collect(),
        };

        // Only the targets may be selected when the delete runs
        scene.deselect_all();

        for &id in &targets {
            // Hidden objects are invisible to the delete operator
            if scene.is_hidden(id)? {
                scene.set_hidden(id, false)?;
            }
            scene.set_selected(id, true)?;
        }

        let removed = if targets.is_empty() {
            0
        } else {
            scene.delete_selected()
        };
        self.session.owned.retain(|&id| scene.contains(id));

        if removed > 0 {
            tracing::info!(removed, "Cleared previous rocks");
        }
        Ok(removed)
    }

    fn add_low_poly<S: Scene + ?Sized>(&mut self, scene: &mut S, rock: ObjectId) -> Result<ObjectId> {
        let copy = scene.duplicate(rock, &self.config.low_poly_name())?;
        self.session.owned.push(copy);

        let final_smooth = scene
            .operations(copy)?
            .iter()
            .rposition(|op| op.name() == FINAL_SMOOTH.0);
        if let Some(index) = final_smooth {
            scene.remove_operation(copy, index)?;
        }

        scene.push_operation(
            copy,
            Operation::decimate(DECIMATE_NAME, self.config.decimate_ratio, true),
        )?;
        scene.set_hidden(copy, true)?;

        tracing::debug!(%copy, ratio = self.config.decimate_ratio, "Added low-poly copy");
        Ok(copy)
    }
}

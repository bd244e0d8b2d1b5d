//! Generation requests and default-fill
//!
//! A [`GenerationRequest`] is built once per invocation and never mutated.
//! Proportions the caller leaves unset are drawn by [`GenerationRequest::resolve`]
//! into a separate [`ResolvedParams`] value.

use glam::Vec3;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::mesh::BaseShape;
use crate::recipe::RecipeId;

/// Range for a randomized overall size
pub const SIZE_RANGE: (f32, f32) = (1.0, 5.0);
/// Range for each component of a randomized scale direction
pub const SCALE_COMPONENT_RANGE: (f32, f32) = (1.0, 3.0);
/// Range for a randomized scale factor
pub const SCALE_FACTOR_RANGE: (f32, f32) = (0.3, 3.0);

/// Unvalidated request as it comes from a config file or command line
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RequestConfig {
    /// Recipe identifier (default: generic)
    pub recipe: Option<String>,
    /// Base shape identifier (default: cube)
    pub base: Option<String>,
    /// Overall size of the rock
    pub size: Option<f32>,
    /// Direction to apply the scaling
    pub scale_direction: Option<[f32; 3]>,
    /// Amount of scaling along the direction
    pub scale_factor: Option<f32>,
    /// Also produce a hidden decimated copy for map baking
    pub low_poly: bool,
}

/// Validated, immutable description of one rock to generate
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GenerationRequest {
    pub recipe: RecipeId,
    pub base: BaseShape,
    pub size: Option<f32>,
    pub scale_direction: Option<[f32; 3]>,
    pub scale_factor: Option<f32>,
    pub low_poly: bool,
}

/// Proportions after default-fill
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ResolvedParams {
    pub size: f32,
    pub scale_direction: [f32; 3],
    pub scale_factor: f32,
}

impl ResolvedParams {
    pub fn direction(&self) -> Vec3 {
        Vec3::from(self.scale_direction)
    }
}

impl Default for GenerationRequest {
    fn default() -> Self {
        Self::new(RecipeId::default(), BaseShape::default())
    }
}

impl GenerationRequest {
    /// Request with every proportion left to default-fill
    pub fn new(recipe: RecipeId, base: BaseShape) -> Self {
        Self {
            recipe,
            base,
            size: None,
            scale_direction: None,
            scale_factor: None,
            low_poly: false,
        }
    }

    pub fn with_size(mut self, size: f32) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_scale_direction(mut self, direction: [f32; 3]) -> Self {
        self.scale_direction = Some(direction);
        self
    }

    pub fn with_scale_factor(mut self, factor: f32) -> Self {
        self.scale_factor = Some(factor);
        self
    }

    pub fn with_low_poly(mut self, low_poly: bool) -> Self {
        self.low_poly = low_poly;
        self
    }

    /// Validate identifiers and build a request
    ///
    /// The base shape is checked before the recipe. Missing identifiers fall
    /// back to cube / generic.
    pub fn parse(config: &RequestConfig) -> Result<Self> {
        let base = match &config.base {
            Some(id) => id.parse::<BaseShape>()?,
            None => BaseShape::default(),
        };
        let recipe = match &config.recipe {
            Some(id) => id.parse::<RecipeId>()?,
            None => RecipeId::default(),
        };

        Ok(Self {
            recipe,
            base,
            size: config.size,
            scale_direction: config.scale_direction,
            scale_factor: config.scale_factor,
            low_poly: config.low_poly,
        })
    }

    /// Fill unset proportions with random values
    ///
    /// A field counts as unset when it is `None` or exactly zero. Zero is kept
    /// as "unset" because host property forms cannot leave a number blank and
    /// a zero size or factor collapses the mesh anyway. The direction is unset
    /// only when all three components are zero.
    pub fn resolve<R: Rng + ?Sized>(&self, rng: &mut R) -> ResolvedParams {
        let size = match self.size {
            Some(size) if size != 0.0 => size,
            _ => rng.random_range(SIZE_RANGE.0..=SIZE_RANGE.1),
        };

        let scale_direction = match self.scale_direction {
            Some(dir) if dir.iter().any(|&c| c != 0.0) => dir,
            _ => {
                let (lo, hi) = SCALE_COMPONENT_RANGE;
                [
                    rng.random_range(lo..=hi),
                    rng.random_range(lo..=hi),
                    rng.random_range(lo..=hi),
                ]
            }
        };

        let scale_factor = match self.scale_factor {
            Some(factor) if factor != 0.0 => factor,
            _ => rng.random_range(SCALE_FACTOR_RANGE.0..=SCALE_FACTOR_RANGE.1),
        };

        ResolvedParams {
            size,
            scale_direction,
            scale_factor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RockError;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn in_range(v: f32, (lo, hi): (f32, f32)) -> bool {
        (lo..=hi).contains(&v)
    }

    #[test]
    fn test_resolve_fills_unset() {
        let mut rng = Pcg32::seed_from_u64(3);
        let request = GenerationRequest::default();

        for _ in 0..200 {
            let params = request.resolve(&mut rng);
            assert!(in_range(params.size, SIZE_RANGE));
            assert!(params.scale_direction.iter().all(|&c| in_range(c, SCALE_COMPONENT_RANGE)));
            assert!(in_range(params.scale_factor, SCALE_FACTOR_RANGE));
        }
    }

    #[test]
    fn test_resolve_treats_zero_as_unset() {
        let mut rng = Pcg32::seed_from_u64(4);
        let request = GenerationRequest::default()
            .with_size(0.0)
            .with_scale_direction([0.0; 3])
            .with_scale_factor(0.0);

        let params = request.resolve(&mut rng);
        assert!(in_range(params.size, SIZE_RANGE));
        assert!(params.scale_direction.iter().all(|&c| in_range(c, SCALE_COMPONENT_RANGE)));
        assert!(in_range(params.scale_factor, SCALE_FACTOR_RANGE));
    }

    #[test]
    fn test_resolve_keeps_set_fields() {
        let mut rng = Pcg32::seed_from_u64(5);
        let request = GenerationRequest::default()
            .with_size(7.5)
            .with_scale_direction([0.0, 0.0, 2.0])
            .with_scale_factor(0.1);

        let params = request.resolve(&mut rng);
        assert_eq!(params.size, 7.5);
        assert_eq!(params.scale_direction, [0.0, 0.0, 2.0]);
        assert_eq!(params.scale_factor, 0.1);
    }

    #[test]
    fn test_resolve_fields_independent() {
        let mut rng = Pcg32::seed_from_u64(6);
        let request = GenerationRequest::default().with_scale_factor(1.25);

        let params = request.resolve(&mut rng);
        assert_eq!(params.scale_factor, 1.25);
        assert!(in_range(params.size, SIZE_RANGE));
    }

    #[test]
    fn test_parse_defaults() {
        let request = GenerationRequest::parse(&RequestConfig::default()).unwrap();
        assert_eq!(request, GenerationRequest::default());
    }

    #[test]
    fn test_parse_ids() {
        let config = RequestConfig {
            recipe: Some("ToonRecipe".into()),
            base: Some("icosphere".into()),
            size: Some(2.5),
            low_poly: true,
            ..Default::default()
        };

        let request = GenerationRequest::parse(&config).unwrap();
        assert_eq!(request.recipe, RecipeId::Toon);
        assert_eq!(request.base, BaseShape::Icosphere);
        assert_eq!(request.size, Some(2.5));
        assert!(request.low_poly);
    }

    #[test]
    fn test_parse_rejects_bad_ids() {
        let bad_shape = RequestConfig {
            base: Some("pyramid".into()),
            ..Default::default()
        };
        assert!(matches!(
            GenerationRequest::parse(&bad_shape),
            Err(RockError::InvalidShapeId(_))
        ));

        let bad_recipe = RequestConfig {
            recipe: Some("marble".into()),
            ..Default::default()
        };
        assert!(matches!(
            GenerationRequest::parse(&bad_recipe),
            Err(RockError::UnknownRecipeId(_))
        ));
    }
}

//! Recipe tables
//!
//! Each rock style is pure data: a list of displacement templates. The
//! smoothing steps that bracket them are shared by every recipe and added by
//! [`RecipeTemplate::sample`], so a new style never has to restate them.

use rand::Rng;

use super::ops::{DEFAULT_MID_LEVEL, Operation};
use super::sample::{Pick, Sample, SampleInt};
use super::textures::{
    CloudsParams, ColorMode, DEFAULT_NABLA, DEFAULT_NOISE_DEPTH, DEFAULT_NOISE_SCALE,
    DistanceMetric, MusgraveKind, MusgraveParams, NoiseBasis, NoiseTexture, NoiseType,
    VoronoiParams,
};

/// Smoothing applied before any displacement, as (name, levels)
pub const LEADING_SMOOTH: [(&str, u32); 2] = [("Subdivide 1", 2), ("Subdivide 2", 4)];
/// Smoothing applied after all displacement
pub const FINAL_SMOOTH: (&str, u32) = ("Final smooth", 2);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VoronoiTemplate {
    pub distance_metric: Pick<DistanceMetric>,
    pub color_mode: Pick<ColorMode>,
    pub weights: [Sample; 4],
    pub intensity: Sample,
    pub scale: Sample,
    pub nabla: Sample,
}

impl VoronoiTemplate {
    pub const DEFAULT: Self = Self {
        distance_metric: Pick::Fixed(DistanceMetric::Distance),
        color_mode: Pick::Fixed(ColorMode::Intensity),
        weights: [
            Sample::Fixed(1.0),
            Sample::Fixed(0.0),
            Sample::Fixed(0.0),
            Sample::Fixed(0.0),
        ],
        intensity: Sample::Fixed(1.0),
        scale: Sample::Fixed(DEFAULT_NOISE_SCALE),
        nabla: Sample::Fixed(DEFAULT_NABLA),
    };

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> VoronoiParams {
        VoronoiParams {
            distance_metric: self.distance_metric.sample(rng),
            color_mode: self.color_mode.sample(rng),
            weights: [
                self.weights[0].sample(rng),
                self.weights[1].sample(rng),
                self.weights[2].sample(rng),
                self.weights[3].sample(rng),
            ],
            intensity: self.intensity.sample(rng),
            scale: self.scale.sample(rng),
            nabla: self.nabla.sample(rng),
        }
    }

    pub fn contains(&self, p: &VoronoiParams) -> bool {
        self.distance_metric.contains(p.distance_metric)
            && self.color_mode.contains(p.color_mode)
            && self.weights.iter().zip(p.weights).all(|(slot, w)| slot.contains(w))
            && self.intensity.contains(p.intensity)
            && self.scale.contains(p.scale)
            && self.nabla.contains(p.nabla)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CloudsTemplate {
    pub basis: Pick<NoiseBasis>,
    pub noise_type: Pick<NoiseType>,
    pub depth: SampleInt,
    pub scale: Sample,
}

impl CloudsTemplate {
    pub const DEFAULT: Self = Self {
        basis: Pick::Fixed(NoiseBasis::BlenderOriginal),
        noise_type: Pick::Fixed(NoiseType::SoftNoise),
        depth: SampleInt::Fixed(DEFAULT_NOISE_DEPTH),
        scale: Sample::Fixed(DEFAULT_NOISE_SCALE),
    };

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> CloudsParams {
        CloudsParams {
            basis: self.basis.sample(rng),
            noise_type: self.noise_type.sample(rng),
            depth: self.depth.sample(rng),
            scale: self.scale.sample(rng),
        }
    }

    pub fn contains(&self, p: &CloudsParams) -> bool {
        self.basis.contains(p.basis)
            && self.noise_type.contains(p.noise_type)
            && self.depth.contains(p.depth)
            && self.scale.contains(p.scale)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MusgraveTemplate {
    pub kind: Pick<MusgraveKind>,
    pub basis: Pick<NoiseBasis>,
    pub octaves: Sample,
    pub lacunarity: Sample,
    pub dimension_max: Sample,
    pub offset: Sample,
    pub scale: Sample,
}

impl MusgraveTemplate {
    pub const DEFAULT: Self = Self {
        kind: Pick::Fixed(MusgraveKind::Multifractal),
        basis: Pick::Fixed(NoiseBasis::BlenderOriginal),
        octaves: Sample::Fixed(2.0),
        lacunarity: Sample::Fixed(2.0),
        dimension_max: Sample::Fixed(1.0),
        offset: Sample::Fixed(1.0),
        scale: Sample::Fixed(DEFAULT_NOISE_SCALE),
    };

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> MusgraveParams {
        MusgraveParams {
            kind: self.kind.sample(rng),
            basis: self.basis.sample(rng),
            octaves: self.octaves.sample(rng),
            lacunarity: self.lacunarity.sample(rng),
            dimension_max: self.dimension_max.sample(rng),
            offset: self.offset.sample(rng),
            scale: self.scale.sample(rng),
        }
    }

    pub fn contains(&self, p: &MusgraveParams) -> bool {
        self.kind.contains(p.kind)
            && self.basis.contains(p.basis)
            && self.octaves.contains(p.octaves)
            && self.lacunarity.contains(p.lacunarity)
            && self.dimension_max.contains(p.dimension_max)
            && self.offset.contains(p.offset)
            && self.scale.contains(p.scale)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TextureTemplate {
    Voronoi(VoronoiTemplate),
    Clouds(CloudsTemplate),
    Musgrave(MusgraveTemplate),
    Noise,
}

impl TextureTemplate {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> NoiseTexture {
        match self {
            TextureTemplate::Voronoi(t) => NoiseTexture::Voronoi(t.sample(rng)),
            TextureTemplate::Clouds(t) => NoiseTexture::Clouds(t.sample(rng)),
            TextureTemplate::Musgrave(t) => NoiseTexture::Musgrave(t.sample(rng)),
            TextureTemplate::Noise => NoiseTexture::Noise,
        }
    }

    pub fn contains(&self, texture: &NoiseTexture) -> bool {
        match (self, texture) {
            (TextureTemplate::Voronoi(t), NoiseTexture::Voronoi(p)) => t.contains(p),
            (TextureTemplate::Clouds(t), NoiseTexture::Clouds(p)) => t.contains(p),
            (TextureTemplate::Musgrave(t), NoiseTexture::Musgrave(p)) => t.contains(p),
            (TextureTemplate::Noise, NoiseTexture::Noise) => true,
            _ => false,
        }
    }
}

/// One displacement step of a recipe
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplaceTemplate {
    pub name: &'static str,
    pub texture: TextureTemplate,
    pub strength: Sample,
    pub mid_level: Sample,
}

impl DisplaceTemplate {
    const fn new(name: &'static str, texture: TextureTemplate, strength: Sample) -> Self {
        Self {
            name,
            texture,
            strength,
            mid_level: Sample::Fixed(DEFAULT_MID_LEVEL),
        }
    }

    const fn with_mid_level(mut self, mid_level: Sample) -> Self {
        self.mid_level = mid_level;
        self
    }

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Operation {
        // Texture knobs first, then the modifier's own
        let texture = self.texture.sample(rng);
        Operation::Displace {
            name: self.name.to_string(),
            texture,
            strength: self.strength.sample(rng),
            mid_level: self.mid_level.sample(rng),
        }
    }

    /// Whether `op` is a displacement this template could have produced
    pub fn contains(&self, op: &Operation) -> bool {
        match op {
            Operation::Displace {
                name,
                texture,
                strength,
                mid_level,
            } => {
                name == self.name
                    && self.texture.contains(texture)
                    && self.strength.contains(*strength)
                    && self.mid_level.contains(*mid_level)
            }
            _ => false,
        }
    }
}

/// Template of a whole rock style
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecipeTemplate {
    pub displacements: &'static [DisplaceTemplate],
}

impl RecipeTemplate {
    /// Draw concrete operations: leading smoothing, displacements, final smoothing
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<Operation> {
        let mut ops = Vec::with_capacity(self.displacements.len() + LEADING_SMOOTH.len() + 1);

        ops.extend(
            LEADING_SMOOTH
                .iter()
                .map(|&(name, levels)| Operation::subdivide(name, levels)),
        );
        ops.extend(self.displacements.iter().map(|d| d.sample(rng)));
        ops.push(Operation::subdivide(FINAL_SMOOTH.0, FINAL_SMOOTH.1));

        ops
    }
}

pub static GENERIC: RecipeTemplate = RecipeTemplate {
    displacements: &[
        DisplaceTemplate::new(
            "Basic voronoi",
            TextureTemplate::Voronoi(VoronoiTemplate {
                color_mode: Pick::Fixed(ColorMode::Intensity),
                weights: [
                    Sample::Fixed(1.0),
                    Sample::Uniform(0.2, 0.8),
                    Sample::Uniform(0.0, 1.0),
                    Sample::Fixed(0.0),
                ],
                intensity: Sample::Fixed(1.0),
                nabla: Sample::Fixed(0.3),
                scale: Sample::Uniform(1.0, 1.5),
                ..VoronoiTemplate::DEFAULT
            }),
            Sample::Uniform(0.5, 1.0),
        ),
        DisplaceTemplate::new(
            "Basic simplex",
            TextureTemplate::Clouds(CloudsTemplate {
                depth: SampleInt::Range(6, 8),
                scale: Sample::Uniform(0.8, 1.0),
                ..CloudsTemplate::DEFAULT
            }),
            Sample::Uniform(0.2, 0.4),
        ),
        DisplaceTemplate::new("Noise", TextureTemplate::Noise, Sample::Fixed(0.01)),
    ],
};

pub static ERODED: RecipeTemplate = RecipeTemplate {
    displacements: &[
        DisplaceTemplate::new(
            "Cellular shape",
            TextureTemplate::Voronoi(VoronoiTemplate {
                distance_metric: Pick::OneOf(&[
                    DistanceMetric::Distance,
                    DistanceMetric::DistanceSquared,
                    DistanceMetric::MinkowskiFour,
                ]),
                intensity: Sample::Uniform(0.8, 1.0),
                scale: Sample::Uniform(0.7, 1.0),
                ..VoronoiTemplate::DEFAULT
            }),
            Sample::Fixed(0.2),
        )
        .with_mid_level(Sample::Fixed(0.5)),
        DisplaceTemplate::new(
            "Base noise",
            TextureTemplate::Clouds(CloudsTemplate {
                basis: Pick::OneOf(&[
                    NoiseBasis::VoronoiF1,
                    NoiseBasis::VoronoiF2,
                    NoiseBasis::BlenderOriginal,
                    NoiseBasis::ImprovedPerlin,
                ]),
                depth: SampleInt::Fixed(2),
                scale: Sample::Fixed(0.2),
                ..CloudsTemplate::DEFAULT
            }),
            Sample::Fixed(0.02),
        ),
        DisplaceTemplate::new(
            "Cracks",
            TextureTemplate::Voronoi(VoronoiTemplate {
                distance_metric: Pick::Fixed(DistanceMetric::MinkowskiFour),
                intensity: Sample::Fixed(0.8),
                scale: Sample::Uniform(0.8, 1.0),
                ..VoronoiTemplate::DEFAULT
            }),
            Sample::Fixed(0.1),
        ),
    ],
};

pub static BOULDER: RecipeTemplate = RecipeTemplate {
    displacements: &[
        DisplaceTemplate::new(
            "Cellular shape",
            TextureTemplate::Voronoi(VoronoiTemplate {
                distance_metric: Pick::Fixed(DistanceMetric::DistanceSquared),
                weights: [Sample::Fixed(2.0); 4],
                intensity: Sample::Fixed(1.0),
                scale: Sample::Fixed(1.0),
                ..VoronoiTemplate::DEFAULT
            }),
            Sample::Uniform(0.5, 0.7),
        )
        .with_mid_level(Sample::Uniform(0.6, 0.8)),
        DisplaceTemplate::new(
            "Cracks",
            TextureTemplate::Musgrave(MusgraveTemplate {
                kind: Pick::Fixed(MusgraveKind::HeteroTerrain),
                basis: Pick::Fixed(NoiseBasis::VoronoiCrackle),
                octaves: Sample::Fixed(2.0),
                lacunarity: Sample::Fixed(2.0),
                dimension_max: Sample::Fixed(1.0),
                offset: Sample::Fixed(1.2),
                scale: Sample::Fixed(7.0),
            }),
            Sample::Fixed(0.05),
        ),
        DisplaceTemplate::new(
            "Detailing",
            TextureTemplate::Clouds(CloudsTemplate {
                basis: Pick::Fixed(NoiseBasis::ImprovedPerlin),
                noise_type: Pick::Fixed(NoiseType::HardNoise),
                depth: SampleInt::Fixed(2),
                scale: Sample::Uniform(0.4, 0.5),
            }),
            Sample::Fixed(0.05),
        )
        .with_mid_level(Sample::Fixed(0.5)),
    ],
};

pub static TOON: RecipeTemplate = RecipeTemplate {
    displacements: &[DisplaceTemplate::new(
        "Cellular shape",
        TextureTemplate::Voronoi(VoronoiTemplate {
            distance_metric: Pick::Fixed(DistanceMetric::DistanceSquared),
            intensity: Sample::Uniform(1.0, 1.2),
            scale: Sample::Fixed(1.0),
            ..VoronoiTemplate::DEFAULT
        }),
        Sample::Fixed(0.2),
    )
    .with_mid_level(Sample::Fixed(0.5))],
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipe::textures::TextureKind;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_sample_brackets_displacements() {
        let mut rng = Pcg32::seed_from_u64(5);
        let ops = TOON.sample(&mut rng);

        assert_eq!(ops.len(), 4);
        assert_eq!(ops[0], Operation::subdivide("Subdivide 1", 2));
        assert_eq!(ops[1], Operation::subdivide("Subdivide 2", 4));
        assert!(ops[2].is_displace());
        assert_eq!(ops[3], Operation::subdivide("Final smooth", 2));
    }

    #[test]
    fn test_defaults_match_params_default() {
        let mut rng = Pcg32::seed_from_u64(0);
        assert_eq!(VoronoiTemplate::DEFAULT.sample(&mut rng), VoronoiParams::default());
        assert_eq!(CloudsTemplate::DEFAULT.sample(&mut rng), CloudsParams::default());
        assert_eq!(MusgraveTemplate::DEFAULT.sample(&mut rng), MusgraveParams::default());
    }

    #[test]
    fn test_generic_noise_step_is_fixed() {
        let mut rng = Pcg32::seed_from_u64(11);
        let ops = GENERIC.sample(&mut rng);
        let noise = &ops[4];

        assert_eq!(noise.name(), "Noise");
        assert_eq!(noise.texture().map(|t| t.kind()), Some(TextureKind::Noise));
        assert!(matches!(noise, Operation::Displace { strength, .. } if *strength == 0.01));
    }

    #[test]
    fn test_boulder_cracks_fixed() {
        let mut rng = Pcg32::seed_from_u64(2);
        let ops = BOULDER.sample(&mut rng);

        let Some(NoiseTexture::Musgrave(cracks)) = ops[3].texture() else {
            panic!("expected musgrave cracks, got {:?}", ops[3]);
        };
        assert_eq!(cracks.kind, MusgraveKind::HeteroTerrain);
        assert_eq!(cracks.basis, NoiseBasis::VoronoiCrackle);
        assert_eq!(cracks.offset, 1.2);
        assert_eq!(cracks.scale, 7.0);
    }

    #[test]
    fn test_template_rejects_foreign_ops() {
        let template = &TOON.displacements[0];
        assert!(!template.contains(&Operation::subdivide("Cellular shape", 2)));

        let wrong_texture = Operation::Displace {
            name: "Cellular shape".into(),
            texture: NoiseTexture::Noise,
            strength: 0.2,
            mid_level: 0.5,
        };
        assert!(!template.contains(&wrong_texture));
    }
}

//! Procedural texture descriptors driving displacement
//!
//! These mirror the host's procedural texture types. Only the knobs the
//! recipes touch are modelled; everything else is left at host defaults.

use std::fmt;

use serde::Serialize;

/// Host default for `noise_scale` on every procedural texture
pub const DEFAULT_NOISE_SCALE: f32 = 0.25;
/// Host default Voronoi gradient step
pub const DEFAULT_NABLA: f32 = 0.025;
/// Host default noise depth for Clouds
pub const DEFAULT_NOISE_DEPTH: u32 = 2;

/// Distance metric for cellular (Voronoi) noise
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DistanceMetric {
    #[default]
    Distance,
    DistanceSquared,
    Manhattan,
    Chebychev,
    MinkowskiHalf,
    MinkowskiFour,
    Minkowski,
}

/// How a Voronoi texture turns cell distances into a value
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ColorMode {
    #[default]
    Intensity,
    Position,
    PositionOutline,
    PositionOutlineIntensity,
}

/// Underlying noise function for Clouds and Musgrave textures
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NoiseBasis {
    #[default]
    BlenderOriginal,
    OriginalPerlin,
    ImprovedPerlin,
    VoronoiF1,
    VoronoiF2,
    VoronoiF3,
    VoronoiF4,
    VoronoiF2F1,
    VoronoiCrackle,
    CellNoise,
}

/// Soft (smooth) or hard (absolute-value, creased) noise
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NoiseType {
    #[default]
    SoftNoise,
    HardNoise,
}

/// Fractal flavour of a Musgrave texture
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MusgraveKind {
    #[default]
    Multifractal,
    RidgedMultifractal,
    HybridMultifractal,
    Fbm,
    HeteroTerrain,
}

/// Cellular noise
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VoronoiParams {
    pub distance_metric: DistanceMetric,
    pub color_mode: ColorMode,
    /// Feature weights 1-4
    pub weights: [f32; 4],
    pub intensity: f32,
    pub scale: f32,
    pub nabla: f32,
}

impl Default for VoronoiParams {
    fn default() -> Self {
        Self {
            distance_metric: DistanceMetric::default(),
            color_mode: ColorMode::default(),
            weights: [1.0, 0.0, 0.0, 0.0],
            intensity: 1.0,
            scale: DEFAULT_NOISE_SCALE,
            nabla: DEFAULT_NABLA,
        }
    }
}

/// Fractal cloud noise
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CloudsParams {
    pub basis: NoiseBasis,
    pub noise_type: NoiseType,
    pub depth: u32,
    pub scale: f32,
}

impl Default for CloudsParams {
    fn default() -> Self {
        Self {
            basis: NoiseBasis::default(),
            noise_type: NoiseType::default(),
            depth: DEFAULT_NOISE_DEPTH,
            scale: DEFAULT_NOISE_SCALE,
        }
    }
}

/// Musgrave fractal noise
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MusgraveParams {
    pub kind: MusgraveKind,
    pub basis: NoiseBasis,
    pub octaves: f32,
    pub lacunarity: f32,
    pub dimension_max: f32,
    pub offset: f32,
    pub scale: f32,
}

impl Default for MusgraveParams {
    fn default() -> Self {
        Self {
            kind: MusgraveKind::default(),
            basis: NoiseBasis::default(),
            octaves: 2.0,
            lacunarity: 2.0,
            dimension_max: 1.0,
            offset: 1.0,
            scale: DEFAULT_NOISE_SCALE,
        }
    }
}

/// Texture sampled by a displacement step
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NoiseTexture {
    Voronoi(VoronoiParams),
    Clouds(CloudsParams),
    Musgrave(MusgraveParams),
    /// Uniform white noise, no parameters
    Noise,
}

/// Texture kind without parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TextureKind {
    Voronoi,
    Clouds,
    Musgrave,
    Noise,
}

impl NoiseTexture {
    pub fn kind(&self) -> TextureKind {
        match self {
            NoiseTexture::Voronoi(_) => TextureKind::Voronoi,
            NoiseTexture::Clouds(_) => TextureKind::Clouds,
            NoiseTexture::Musgrave(_) => TextureKind::Musgrave,
            NoiseTexture::Noise => TextureKind::Noise,
        }
    }
}

impl fmt::Display for TextureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TextureKind::Voronoi => "Voronoi",
            TextureKind::Clouds => "Clouds",
            TextureKind::Musgrave => "Musgrave",
            TextureKind::Noise => "Noise",
        };
        f.write_str(name)
    }
}

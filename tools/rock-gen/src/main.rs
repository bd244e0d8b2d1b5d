//! rock-o-matic - procedural rock generator
//!
//! # Commands
//!
//! - `rock-o-matic generate` - Generate a rock into an in-memory scene and print it
//! - `rock-o-matic recipes` - List recipes and base shapes
//!
//! # Usage
//!
//! ```bash
//! # Random proportions, generic recipe on a cube
//! rock-o-matic generate
//!
//! # Reproducible eroded boulder with a low-poly bake copy
//! rock-o-matic generate --recipe eroded --base icosphere --low-poly --seed 7
//!
//! # Settings from a file, CLI flags win
//! rock-o-matic generate --config rock.toml --size 3 --json
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::Serialize;

use rock_gen::mesh::write_obj;
use rock_gen::prelude::*;
use rock_gen::scene::SceneObject;

#[derive(Parser)]
#[command(name = "rock-o-matic")]
#[command(about = "Procedural rock generator")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a rock and print the resulting scene
    Generate(GenerateArgs),

    /// List available recipes and base shapes
    Recipes,
}

#[derive(Args)]
struct GenerateArgs {
    /// Path to a rock.toml config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Recipe id (generic, eroded, boulder, toon)
    #[arg(short, long)]
    recipe: Option<String>,

    /// Base shape id (cube, icosphere, uv_sphere)
    #[arg(short, long)]
    base: Option<String>,

    /// Overall size of the rock (0 = random)
    #[arg(long)]
    size: Option<f32>,

    /// Direction to apply the scaling, as X,Y,Z (0,0,0 = random)
    #[arg(long, value_parser = parse_vec3)]
    scale_direction: Option<[f32; 3]>,

    /// Amount of scaling along the direction (0 = random)
    #[arg(long)]
    scale_factor: Option<f32>,

    /// Also create a hidden, decimated copy for map baking
    #[arg(long, overrides_with = "no_low_poly")]
    low_poly: bool,

    /// Skip the low-poly copy even if the config file asks for one
    #[arg(long, overrides_with = "low_poly")]
    no_low_poly: bool,

    /// RNG seed (random if omitted)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Write the seed mesh of the rock to an OBJ file
    #[arg(long)]
    obj: Option<PathBuf>,

    /// Print the scene as JSON
    #[arg(long)]
    json: bool,

    /// Number of generations to run in the same scene
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    repeat: u32,
}

impl GenerateArgs {
    /// `Some` when either low-poly flag was given; the last one wins
    fn low_poly_override(&self) -> Option<bool> {
        if self.low_poly {
            Some(true)
        } else if self.no_low_poly {
            Some(false)
        } else {
            None
        }
    }
}

/// JSON report printed by `generate --json`
#[derive(Serialize)]
struct Report<'a> {
    seed: u64,
    rock: &'a GeneratedRock,
    objects: Vec<&'a SceneObject>,
}

fn parse_vec3(s: &str) -> Result<[f32; 3], String> {
    let parts = s
        .split(',')
        .map(|part| part.trim().parse::<f32>().map_err(|e| format!("{:?}: {}", part, e)))
        .collect::<Result<Vec<_>, _>>()?;

    <[f32; 3]>::try_from(parts).map_err(|parts| format!("expected 3 components, got {}", parts.len()))
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate(args) => generate(args),
        Commands::Recipes => {
            list_recipes();
            Ok(())
        }
    }
}

fn generate(args: GenerateArgs) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => RockConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => RockConfig::default(),
    };

    // CLI flags override the file
    let request = &mut config.rock;
    if args.recipe.is_some() {
        request.recipe = args.recipe.clone();
    }
    if args.base.is_some() {
        request.base = args.base.clone();
    }
    if args.size.is_some() {
        request.size = args.size;
    }
    if args.scale_direction.is_some() {
        request.scale_direction = args.scale_direction;
    }
    if args.scale_factor.is_some() {
        request.scale_factor = args.scale_factor;
    }
    if let Some(low_poly) = args.low_poly_override() {
        request.low_poly = low_poly;
    }

    let seed = args.seed.or(config.seed).unwrap_or_else(rand::random);
    tracing::info!(seed, "Seeding RNG");
    let mut rng = Pcg32::seed_from_u64(seed);

    let mut scene = MemoryScene::new();
    let mut generator =
        RockGenerator::new(config.generator.clone()).context("Invalid generator settings")?;

    let mut rock = generator
        .generate_from_config(&mut scene, &config.rock, &mut rng)
        .context("Rock generation failed")?;
    for _ in 1..args.repeat {
        rock = generator
            .regenerate(&mut scene, &mut rng)
            .context("Rock regeneration failed")?;
    }

    if let Some(path) = &args.obj {
        let object = scene
            .object(rock.rock)
            .with_context(|| format!("Rock {} missing from scene", rock.rock))?;
        write_obj(&object.mesh, path, &object.name)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        tracing::info!("Wrote seed mesh to {:?}", path);
    }

    if args.json {
        let report = Report {
            seed,
            rock: &rock,
            objects: scene.objects().collect(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_scene(&scene, &rock, seed);
    }

    Ok(())
}

fn print_scene(scene: &MemoryScene, rock: &GeneratedRock, seed: u64) {
    let params = &rock.params;
    println!("Recipe: {} on {}", rock.recipe, rock.base);
    println!("Seed: {}", seed);
    println!(
        "Size: {:.3}  Scale: {:.3} along ({:.3}, {:.3}, {:.3})",
        params.size,
        params.scale_factor,
        params.scale_direction[0],
        params.scale_direction[1],
        params.scale_direction[2]
    );

    for object in scene.objects() {
        let mut flags = Vec::new();
        if scene.active() == Some(object.id) {
            flags.push("active");
        }
        if object.selected {
            flags.push("selected");
        }
        if object.hidden {
            flags.push("hidden");
        }

        println!();
        println!(
            "{} {:?} ({} vertices) [{}]",
            object.id,
            object.name,
            object.mesh.vertex_count(),
            flags.join(", ")
        );
        for (i, op) in object.operations.iter().enumerate() {
            println!("  {}. {:<14} {}", i + 1, op.name(), op);
        }
    }
}

fn list_recipes() {
    println!("Recipes:");
    for recipe in RecipeId::ALL {
        println!("  {:<10} {}", recipe.id(), recipe.description());
    }

    println!();
    println!("Base shapes:");
    for shape in BaseShape::ALL {
        println!("  {:<10} {}", shape.id(), shape.description());
    }
}

//! Recipe invariants across many seeded draws

use rand::SeedableRng;
use rand_pcg::Pcg32;
use rock_gen::recipe::{FINAL_SMOOTH, LEADING_SMOOTH, Operation, RecipeId, TextureKind, build_operations};

const DRAWS: u64 = 64;

fn kinds(ops: &[Operation]) -> Vec<TextureKind> {
    ops.iter().filter_map(|op| op.texture()).map(|t| t.kind()).collect()
}

/// Every recipe opens with 2 then 4 levels of smoothing and closes with one 2-level smooth
#[test]
fn test_smoothing_frame() {
    for recipe in RecipeId::ALL {
        for seed in 0..DRAWS {
            let ops = build_operations(recipe, &mut Pcg32::seed_from_u64(seed));

            assert_eq!(ops[0].subdivide_levels(), Some(LEADING_SMOOTH[0].1));
            assert_eq!(ops[1].subdivide_levels(), Some(LEADING_SMOOTH[1].1));
            assert_eq!(LEADING_SMOOTH.map(|(_, levels)| levels), [2, 4]);

            let last = ops.last().expect("recipe produced no operations");
            assert_eq!(last.subdivide_levels(), Some(2));
            assert_eq!(last.name(), FINAL_SMOOTH.0);
            assert_eq!(
                ops.iter().filter(|op| op.name() == FINAL_SMOOTH.0).count(),
                1,
                "{} has more than one final smooth",
                recipe
            );
        }
    }
}

/// Displacement count and texture order are fixed per recipe
#[test]
fn test_displacement_layout() {
    let expected = [
        (
            RecipeId::Generic,
            vec![TextureKind::Voronoi, TextureKind::Clouds, TextureKind::Noise],
        ),
        (
            RecipeId::Eroded,
            vec![TextureKind::Voronoi, TextureKind::Clouds, TextureKind::Voronoi],
        ),
        (
            RecipeId::Boulder,
            vec![TextureKind::Voronoi, TextureKind::Musgrave, TextureKind::Clouds],
        ),
        (RecipeId::Toon, vec![TextureKind::Voronoi]),
    ];

    for (recipe, layout) in expected {
        for seed in 0..DRAWS {
            let ops = build_operations(recipe, &mut Pcg32::seed_from_u64(seed));
            assert_eq!(kinds(&ops), layout, "{} seed {}", recipe, seed);
            assert_eq!(ops.len(), layout.len() + 3);
            assert!(ops[2..ops.len() - 1].iter().all(Operation::is_displace));
        }
    }
}

/// Every sampled displacement lies inside the template it came from
#[test]
fn test_sampled_values_within_template() {
    for recipe in RecipeId::ALL {
        let template = recipe.template();
        let mut rng = Pcg32::seed_from_u64(2024);

        for _ in 0..DRAWS {
            let ops = build_operations(recipe, &mut rng);
            let displaces: Vec<_> = ops.iter().filter(|op| op.is_displace()).collect();
            assert_eq!(displaces.len(), template.displacements.len());

            for (op, step) in displaces.iter().zip(template.displacements) {
                assert!(step.contains(op), "{} produced {:?}", recipe, op);
            }
        }
    }
}

#[test]
fn test_toon_stack_display() {
    let ops = build_operations(RecipeId::Toon, &mut Pcg32::seed_from_u64(0));
    let shown: Vec<String> = ops.iter().map(ToString::to_string).collect();

    assert_eq!(shown[0], "Subdivide(2)");
    assert_eq!(shown[1], "Subdivide(4)");
    assert!(shown[2].starts_with("Displace(Voronoi"), "{}", shown[2]);
    assert_eq!(shown[3], "Subdivide(2)");
}

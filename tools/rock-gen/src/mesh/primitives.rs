//! Seed primitives (cube, icosphere, UV sphere)
//!
//! Topology and orientation match the host's own primitive operators (Z up)
//! so the recipes produce the same vertex density they were tuned against.

use std::collections::HashMap;
use std::f32::consts::PI;

use glam::Vec3;

use super::MeshData;

/// Generate an axis-aligned cube centered on the origin
///
/// # Arguments
/// * `size` - Edge length
///
/// # Returns
/// Mesh with 8 shared vertices and 12 triangles (two per face, CCW from outside)
pub fn generate_cube(size: f32) -> MeshData {
    let h = size * 0.5;
    let mut mesh = MeshData::new();

    for &(x, y, z) in &[
        (-h, -h, -h),
        (h, -h, -h),
        (h, h, -h),
        (-h, h, -h),
        (-h, -h, h),
        (h, -h, h),
        (h, h, h),
        (-h, h, h),
    ] {
        mesh.add_vertex(Vec3::new(x, y, z));
    }

    const FACES: [[u32; 4]; 6] = [
        [0, 3, 2, 1], // -Z
        [4, 5, 6, 7], // +Z
        [0, 4, 7, 3], // -X
        [1, 2, 6, 5], // +X
        [0, 1, 5, 4], // -Y
        [3, 7, 6, 2], // +Y
    ];

    for [a, b, c, d] in FACES {
        mesh.add_triangle(a, b, c);
        mesh.add_triangle(a, c, d);
    }

    mesh
}

/// Generate an icosphere by midpoint subdivision of an icosahedron
///
/// # Arguments
/// * `radius` - Distance of every vertex from the origin
/// * `subdivisions` - Host subdivision level. Level 1 (and 0) is the bare
///   icosahedron; each level above that is one midpoint pass, quadrupling
///   the triangles.
///
/// # Returns
/// Level 1: 12 vertices and 20 triangles. Level 2: 42 and 80.
pub fn generate_icosphere(radius: f32, subdivisions: u32) -> MeshData {
    let t = (1.0 + 5.0_f32.sqrt()) * 0.5;

    let mut positions: Vec<Vec3> = [
        (-1.0, t, 0.0),
        (1.0, t, 0.0),
        (-1.0, -t, 0.0),
        (1.0, -t, 0.0),
        (0.0, -1.0, t),
        (0.0, 1.0, t),
        (0.0, -1.0, -t),
        (0.0, 1.0, -t),
        (t, 0.0, -1.0),
        (t, 0.0, 1.0),
        (-t, 0.0, -1.0),
        (-t, 0.0, 1.0),
    ]
    .iter()
    .map(|&(x, y, z)| Vec3::new(x, y, z).normalize())
    .collect();

    let mut faces: Vec<[u32; 3]> = vec![
        [0, 11, 5],
        [0, 5, 1],
        [0, 1, 7],
        [0, 7, 10],
        [0, 10, 11],
        [1, 5, 9],
        [5, 11, 4],
        [11, 10, 2],
        [10, 7, 6],
        [7, 1, 8],
        [3, 9, 4],
        [3, 4, 2],
        [3, 2, 6],
        [3, 6, 8],
        [3, 8, 9],
        [4, 9, 5],
        [2, 4, 11],
        [6, 2, 10],
        [8, 6, 7],
        [9, 8, 1],
    ];

    for _ in 1..subdivisions {
        faces = subdivide_sphere_once(&mut positions, &faces);
    }

    let mut mesh = MeshData::new();
    for p in positions {
        mesh.add_vertex(p * radius);
    }
    for [a, b, c] in faces {
        mesh.add_triangle(a, b, c);
    }
    mesh
}

/// Split every triangle into four, pushing new midpoints onto the unit sphere
fn subdivide_sphere_once(positions: &mut Vec<Vec3>, faces: &[[u32; 3]]) -> Vec<[u32; 3]> {
    // Edge key: sorted pair of vertex indices
    type EdgeKey = (u32, u32);
    fn make_edge_key(a: u32, b: u32) -> EdgeKey {
        if a < b { (a, b) } else { (b, a) }
    }

    let mut edge_midpoints: HashMap<EdgeKey, u32> = HashMap::new();
    let mut midpoint = |a: u32, b: u32, positions: &mut Vec<Vec3>| -> u32 {
        *edge_midpoints.entry(make_edge_key(a, b)).or_insert_with(|| {
            let mid = (positions[a as usize] + positions[b as usize]).normalize();
            positions.push(mid);
            (positions.len() - 1) as u32
        })
    };

    let mut out = Vec::with_capacity(faces.len() * 4);
    for &[a, b, c] in faces {
        let ab = midpoint(a, b, positions);
        let bc = midpoint(b, c, positions);
        let ca = midpoint(c, a, positions);

        out.push([a, ab, ca]);
        out.push([ab, b, bc]);
        out.push([ca, bc, c]);
        out.push([ab, bc, ca]);
    }
    out
}

/// Generate a UV sphere with single pole vertices on the Z axis
///
/// # Arguments
/// * `radius` - Sphere radius
/// * `segments` - Longitudinal divisions (min 3)
/// * `rings` - Latitudinal divisions (min 2)
///
/// # Returns
/// Mesh with `2 + (rings - 1) × segments` vertices and `2 × segments × (rings - 1)` triangles
pub fn generate_uv_sphere(radius: f32, segments: u32, rings: u32) -> MeshData {
    let segments = segments.max(3);
    let rings = rings.max(2);

    let mut mesh = MeshData::new();
    let top = mesh.add_vertex(Vec3::new(0.0, 0.0, radius));

    // Interior rings, north to south
    for ring in 1..rings {
        let phi = (ring as f32 / rings as f32) * PI;
        let z = radius * phi.cos();
        let ring_radius = radius * phi.sin();

        for seg in 0..segments {
            let theta = (seg as f32 / segments as f32) * 2.0 * PI;
            mesh.add_vertex(Vec3::new(ring_radius * theta.cos(), ring_radius * theta.sin(), z));
        }
    }

    let bottom = mesh.add_vertex(Vec3::new(0.0, 0.0, -radius));
    let ring_vertex = |ring: u32, seg: u32| 1 + ring * segments + seg % segments;

    for seg in 0..segments {
        mesh.add_triangle(top, ring_vertex(0, seg), ring_vertex(0, seg + 1));
    }

    for ring in 0..rings - 2 {
        for seg in 0..segments {
            let i0 = ring_vertex(ring, seg);
            let i1 = ring_vertex(ring, seg + 1);
            let i2 = ring_vertex(ring + 1, seg);
            let i3 = ring_vertex(ring + 1, seg + 1);

            mesh.add_triangle(i0, i2, i3);
            mesh.add_triangle(i0, i3, i1);
        }
    }

    let last = rings - 2;
    for seg in 0..segments {
        mesh.add_triangle(ring_vertex(last, seg), bottom, ring_vertex(last, seg + 1));
    }

    mesh
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_radius(mesh: &MeshData, radius: f32) {
        for p in &mesh.positions {
            let r = Vec3::from(*p).length();
            assert!((r - radius).abs() < 1e-4, "vertex at distance {} != {}", r, radius);
        }
    }

    fn assert_faces_outward(mesh: &MeshData) {
        for tri in mesh.indices.chunks(3) {
            let p0 = Vec3::from(mesh.positions[tri[0] as usize]);
            let p1 = Vec3::from(mesh.positions[tri[1] as usize]);
            let p2 = Vec3::from(mesh.positions[tri[2] as usize]);
            let normal = (p1 - p0).cross(p2 - p0);
            let center = (p0 + p1 + p2) / 3.0;
            assert!(normal.dot(center) > 0.0);
        }
    }

    fn assert_indices_in_range(mesh: &MeshData) {
        let count = mesh.vertex_count() as u32;
        assert!(mesh.indices.iter().all(|&i| i < count));
        assert_eq!(mesh.indices.len() % 3, 0);
    }

    #[test]
    fn test_cube() {
        let mesh = generate_cube(2.0);

        assert_eq!(mesh.vertex_count(), 8);
        assert_eq!(mesh.triangle_count(), 12);
        assert_indices_in_range(&mesh);

        let (min, max) = mesh.bounds().unwrap();
        assert_eq!(min, Vec3::splat(-1.0));
        assert_eq!(max, Vec3::splat(1.0));
    }

    #[test]
    fn test_cube_faces_point_outward() {
        assert_faces_outward(&generate_cube(1.0));
    }

    #[test]
    fn test_icosphere_level_one_is_icosahedron() {
        for level in [0, 1] {
            let mesh = generate_icosphere(1.5, level);
            assert_eq!(mesh.vertex_count(), 12);
            assert_eq!(mesh.triangle_count(), 20);
            assert_radius(&mesh, 1.5);
            assert_faces_outward(&mesh);
        }
    }

    #[test]
    fn test_icosphere_level_two() {
        let mesh = generate_icosphere(2.0, 2);
        assert_eq!(mesh.vertex_count(), 42);
        assert_eq!(mesh.triangle_count(), 80);
        assert_indices_in_range(&mesh);
        assert_radius(&mesh, 2.0);
        assert_faces_outward(&mesh);
    }

    #[test]
    fn test_uv_sphere() {
        let mesh = generate_uv_sphere(1.0, 5, 5);
        assert_eq!(mesh.vertex_count(), 22);
        assert_eq!(mesh.triangle_count(), 40);
        assert_indices_in_range(&mesh);
        assert_radius(&mesh, 1.0);
        assert_faces_outward(&mesh);
    }

    #[test]
    fn test_uv_sphere_poles_on_z() {
        let mesh = generate_uv_sphere(2.0, 5, 5);
        let first = Vec3::from(mesh.positions[0]);
        let last = Vec3::from(mesh.positions[mesh.vertex_count() - 1]);

        assert_eq!(first, Vec3::new(0.0, 0.0, 2.0));
        assert_eq!(last, Vec3::new(0.0, 0.0, -2.0));

        let (min, max) = mesh.bounds().unwrap();
        assert_eq!(min.z, -2.0);
        assert_eq!(max.z, 2.0);
    }

    #[test]
    fn test_uv_sphere_clamps_parameters() {
        let mesh = generate_uv_sphere(1.0, 1, 1);
        // 3 segments, 2 rings: two poles plus one ring
        assert_eq!(mesh.vertex_count(), 5);
        assert_eq!(mesh.triangle_count(), 6);
    }
}

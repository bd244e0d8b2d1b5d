//! Wavefront OBJ export of seed meshes

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::MeshData;

/// Write a mesh to an OBJ file
///
/// Only positions and faces are written; the host rebuilds normals anyway.
pub fn write_obj(mesh: &MeshData, path: &Path, name: &str) -> std::io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_obj_to(mesh, &mut writer, name)?;
    writer.flush()
}

/// Write a mesh as OBJ text into any writer
pub fn write_obj_to<W: Write>(mesh: &MeshData, writer: &mut W, name: &str) -> std::io::Result<()> {
    writeln!(writer, "# rock-o-matic seed mesh")?;
    writeln!(
        writer,
        "# {} vertices, {} triangles",
        mesh.vertex_count(),
        mesh.triangle_count()
    )?;
    writeln!(writer, "o {}", name)?;

    for [x, y, z] in &mesh.positions {
        writeln!(writer, "v {:.6} {:.6} {:.6}", x, y, z)?;
    }

    // OBJ indices are 1-based
    for tri in mesh.indices.chunks_exact(3) {
        writeln!(writer, "f {} {} {}", tri[0] + 1, tri[1] + 1, tri[2] + 1)?;
    }

    Ok(())
}

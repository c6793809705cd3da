//! Procedural mesh kinds and the mesh provider seam.

/// The procedural shapes the scene layer can ask the host to draw.
///
/// One mesh per kind is loaded during scene preparation no matter how many
/// objects later draw it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MeshKind {
    Plane,
    Box,
    Cylinder,
    Sphere,
    Torus,
    TaperedCylinder,
}

/// Host-side provider of procedural mesh geometry.
///
/// `load` creates the GPU-side geometry for a kind and must be called before
/// any `draw` of that kind; calling it once per kind is enough. `draw` issues
/// a draw call and assumes the currently bound shader and model-matrix state.
pub trait MeshProvider {
    fn load(&mut self, kind: MeshKind);
    fn draw(&mut self, kind: MeshKind);
}

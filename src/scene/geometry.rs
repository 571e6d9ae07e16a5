use crate::model::dimensions::MeterDims;

/// Box faces in material-slot order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Face {
    /// +X.
    Right,
    /// -X.
    Left,
    /// +Y.
    Top,
    /// -Y.
    Bottom,
    /// +Z, the face that carries the photo.
    Front,
    /// -Z.
    Back,
}

impl Face {
    /// All faces in slot order: right, left, top, bottom, front, back.
    pub const ALL: [Face; 6] = [
        Face::Right,
        Face::Left,
        Face::Top,
        Face::Bottom,
        Face::Front,
        Face::Back,
    ];

    /// Material slot index of this face.
    pub fn slot(self) -> usize {
        match self {
            Face::Right => 0,
            Face::Left => 1,
            Face::Top => 2,
            Face::Bottom => 3,
            Face::Front => 4,
            Face::Back => 5,
        }
    }

    /// Outward unit normal.
    pub fn normal(self) -> [f32; 3] {
        self.basis().normal
    }

    fn basis(self) -> FaceBasis {
        const X: [f32; 3] = [1.0, 0.0, 0.0];
        const NX: [f32; 3] = [-1.0, 0.0, 0.0];
        const Y: [f32; 3] = [0.0, 1.0, 0.0];
        const NY: [f32; 3] = [0.0, -1.0, 0.0];
        const Z: [f32; 3] = [0.0, 0.0, 1.0];
        const NZ: [f32; 3] = [0.0, 0.0, -1.0];

        // `right x up == normal` keeps every face counter-clockwise from outside.
        let (normal, right, up) = match self {
            Face::Right => (X, NZ, Y),
            Face::Left => (NX, Z, Y),
            Face::Top => (Y, X, NZ),
            Face::Bottom => (NY, X, Z),
            Face::Front => (Z, X, Y),
            Face::Back => (NZ, NX, Y),
        };
        FaceBasis { normal, right, up }
    }
}

#[derive(Clone, Copy)]
struct FaceBasis {
    normal: [f32; 3],
    right: [f32; 3],
    up: [f32; 3],
}

/// Contiguous run of indices drawn with one face's material.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IndexGroup {
    /// Face drawn by this run.
    pub face: Face,
    /// First index in [`BoxMesh::indices`].
    pub start: usize,
    /// Number of indices.
    pub count: usize,
}

/// Indexed triangle mesh of an axis-aligned box centred on the origin.
#[derive(Clone, Debug)]
pub struct BoxMesh {
    /// Vertex positions in metres, four per face.
    pub positions: Vec<[f32; 3]>,
    /// Per-vertex outward normals.
    pub normals: Vec<[f32; 3]>,
    /// Texture coordinates, origin at the top-left of the image.
    pub uvs: Vec<[f32; 2]>,
    /// Triangle list indices.
    pub indices: Vec<u16>,
    /// One group per face, in [`Face::ALL`] order.
    pub groups: [IndexGroup; 6],
}

impl BoxMesh {
    /// Component-wise minimum and maximum of all positions.
    pub fn position_bounds(&self) -> ([f32; 3], [f32; 3]) {
        let mut min = [f32::INFINITY; 3];
        let mut max = [f32::NEG_INFINITY; 3];
        for p in &self.positions {
            for i in 0..3 {
                min[i] = min[i].min(p[i]);
                max[i] = max[i].max(p[i]);
            }
        }
        (min, max)
    }
}

/// Build the prism mesh for `dims`.
///
/// Each face maps the full texture with `(0, 0)` at its top-left corner as seen from outside,
/// so the front face shows the image upright.
pub fn build_box_mesh(dims: MeterDims) -> BoxMesh {
    let (w, h, d) = (dims.width as f32, dims.height as f32, dims.depth as f32);

    let mut positions = Vec::with_capacity(24);
    let mut normals = Vec::with_capacity(24);
    let mut uvs = Vec::with_capacity(24);
    let mut indices = Vec::with_capacity(36);
    let mut groups = [IndexGroup {
        face: Face::Right,
        start: 0,
        count: 0,
    }; 6];

    for face in Face::ALL {
        let FaceBasis { normal, right, up } = face.basis();
        let extent = |axis: [f32; 3]| axis[0].abs() * w + axis[1].abs() * h + axis[2].abs() * d;
        let half_depth = extent(normal) / 2.0;
        let (su, sv) = (extent(right), extent(up));

        let base = positions.len() as u16;
        for (tu, tv) in [(0.0f32, 0.0f32), (1.0, 0.0), (0.0, 1.0), (1.0, 1.0)] {
            let ou = (tu - 0.5) * su;
            let ov = (0.5 - tv) * sv;
            positions.push([
                normal[0] * half_depth + right[0] * ou + up[0] * ov,
                normal[1] * half_depth + right[1] * ou + up[1] * ov,
                normal[2] * half_depth + right[2] * ou + up[2] * ov,
            ]);
            normals.push(normal);
            uvs.push([tu, tv]);
        }

        let start = indices.len();
        indices.extend([2, 3, 1, 2, 1, 0].map(|i| base + i));
        groups[face.slot()] = IndexGroup {
            face,
            start,
            count: 6,
        };
    }

    BoxMesh {
        positions,
        normals,
        uvs,
        indices,
        groups,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/geometry.rs"]
mod tests;

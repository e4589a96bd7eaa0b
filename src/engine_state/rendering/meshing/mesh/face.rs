use cgmath::Point3;

use crate::engine_state::voxels::block::{block_side::BlockSide, BlockTypeSize};

/// Number of vertices emitted per visible face (two triangles).
pub const VERTICES_PER_FACE: usize = 6;

/// Texture coordinates for the six vertices of every face, in emission order.
pub const FACE_UVS: [[f32; 2]; VERTICES_PER_FACE] = [
    [0.0, 1.0],
    [1.0, 1.0],
    [1.0, 0.0],
    [0.0, 1.0],
    [1.0, 0.0],
    [0.0, 0.0],
];

/// Represents a single quad face of a voxel in the mesh.
///
/// A face is defined by four corner points (lower-left, lower-right, upper-right,
/// upper-left) in chunk-local block units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Face {
    /// Lower-right corner of the face in chunk coordinates
    pub lr: Point3<i32>,
    /// Lower-left corner of the face in chunk coordinates
    pub ll: Point3<i32>,
    /// Upper-right corner of the face in chunk coordinates
    pub ur: Point3<i32>,
    /// Upper-left corner of the face in chunk coordinates
    pub ul: Point3<i32>,
    /// The block-id the face belongs to
    pub block: BlockTypeSize,
    /// Which side of the block this face represents
    pub block_side: BlockSide,
}

impl Face {
    /// Creates the face on `block_side` of the voxel at `pos`.
    pub fn new(pos: Point3<i32>, block: BlockTypeSize, block_side: BlockSide) -> Self {
        let (i, j, k) = (pos.x, pos.y, pos.z);
        match block_side {
            BlockSide::FRONT => Face {
                ll: Point3::new(i, j, k),
                lr: Point3::new(i, j, k + 1),
                ul: Point3::new(i, j + 1, k),
                ur: Point3::new(i, j + 1, k + 1),
                block,
                block_side,
            },

            BlockSide::BACK => Face {
                ll: Point3::new(i + 1, j, k + 1),
                lr: Point3::new(i + 1, j, k),
                ul: Point3::new(i + 1, j + 1, k + 1),
                ur: Point3::new(i + 1, j + 1, k),
                block,
                block_side,
            },

            BlockSide::BOTTOM => Face {
                ll: Point3::new(i, j, k + 1),
                lr: Point3::new(i, j, k),
                ul: Point3::new(i + 1, j, k + 1),
                ur: Point3::new(i + 1, j, k),
                block,
                block_side,
            },

            BlockSide::TOP => Face {
                ll: Point3::new(i, j + 1, k),
                lr: Point3::new(i, j + 1, k + 1),
                ul: Point3::new(i + 1, j + 1, k),
                ur: Point3::new(i + 1, j + 1, k + 1),
                block,
                block_side,
            },

            BlockSide::LEFT => Face {
                ll: Point3::new(i + 1, j, k),
                lr: Point3::new(i, j, k),
                ul: Point3::new(i + 1, j + 1, k),
                ur: Point3::new(i, j + 1, k),
                block,
                block_side,
            },

            BlockSide::RIGHT => Face {
                ll: Point3::new(i, j, k + 1),
                lr: Point3::new(i + 1, j, k + 1),
                ul: Point3::new(i, j + 1, k + 1),
                ur: Point3::new(i + 1, j + 1, k + 1),
                block,
                block_side,
            },
        }
    }

    /// The face's two triangles as six positions, matching [`FACE_UVS`] order.
    pub fn vertices(&self) -> [[f32; 3]; VERTICES_PER_FACE] {
        let corner = |p: Point3<i32>| [p.x as f32, p.y as f32, p.z as f32];
        [
            corner(self.ll),
            corner(self.lr),
            corner(self.ur),
            corner(self.ll),
            corner(self.ur),
            corner(self.ul),
        ]
    }
}

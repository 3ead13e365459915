//! Subdivided plane in the XY plane, facing +z.

/// Separate position/uv arrays for an indexed triangle list.
#[derive(Clone, Debug, PartialEq)]
pub struct PlaneGeometry {
    pub width: f32,
    pub height: f32,
    pub width_segments: u32,
    pub height_segments: u32,
    /// xyz triples.
    pub positions: Vec<f32>,
    /// uv pairs, v = 1 at the top edge.
    pub uvs: Vec<f32>,
    pub indices: Vec<u16>,
}

impl PlaneGeometry {
    /// Builds a `width` x `height` plane centered on the origin.
    ///
    /// Rows run top to bottom, columns left to right; each cell is split into
    /// two counter-clockwise triangles.
    pub fn new(width: f32, height: f32, width_segments: u32, height_segments: u32) -> Self {
        let grid_x = width_segments.max(1);
        let grid_y = height_segments.max(1);
        let grid_x1 = grid_x + 1;
        let grid_y1 = grid_y + 1;
        debug_assert!(grid_x1 * grid_y1 <= u32::from(u16::MAX) + 1);

        let seg_w = width / grid_x as f32;
        let seg_h = height / grid_y as f32;
        let half_w = width / 2.0;
        let half_h = height / 2.0;

        let count = (grid_x1 * grid_y1) as usize;
        let mut positions = Vec::with_capacity(count * 3);
        let mut uvs = Vec::with_capacity(count * 2);
        for iy in 0..grid_y1 {
            let y = iy as f32 * seg_h - half_h;
            for ix in 0..grid_x1 {
                let x = ix as f32 * seg_w - half_w;
                positions.extend_from_slice(&[x, -y, 0.0]);
                uvs.extend_from_slice(&[ix as f32 / grid_x as f32, 1.0 - iy as f32 / grid_y as f32]);
            }
        }

        let mut indices = Vec::with_capacity((grid_x * grid_y * 6) as usize);
        for iy in 0..grid_y {
            for ix in 0..grid_x {
                let a = (ix + grid_x1 * iy) as u16;
                let b = (ix + grid_x1 * (iy + 1)) as u16;
                let c = (ix + 1 + grid_x1 * (iy + 1)) as u16;
                let d = (ix + 1 + grid_x1 * iy) as u16;
                indices.extend_from_slice(&[a, b, d, b, c, d]);
            }
        }

        Self {
            width,
            height,
            width_segments: grid_x,
            height_segments: grid_y,
            positions,
            uvs,
            indices,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }
}

//! Construction-time index buffers for a square cloth grid.
//!
//! Vertices are numbered row-major, `index(i, j) = i * resolution + j`.
//! Both buffers depend only on the resolution and are built once per
//! cloth instance.

/// Flat vertex index of grid point `(i, j)`.
#[inline]
fn vid(i: usize, j: usize, resolution: usize) -> u32 {
    (i * resolution + j) as u32
}

/// Number of quads in a grid of `resolution × resolution` points.
#[inline]
pub fn quad_count(resolution: usize) -> usize {
    let cells = resolution.saturating_sub(1);
    cells * cells
}

/// Triangle list covering every grid cell with two triangles.
///
/// Cell `(i, j)` emits `[(i,j), (i+1,j), (i,j+1)]` and
/// `[(i+1,j+1), (i,j+1), (i+1,j)]`, i.e. 6 indices at `quad_id * 6`
/// where `quad_id = i * (resolution - 1) + j`.
///
/// # Example
/// ```
/// use weft_mesh::generators::triangle_indices;
/// let idx = triangle_indices(2);
/// assert_eq!(idx, vec![0, 2, 1, 3, 1, 2]);
/// ```
pub fn triangle_indices(resolution: usize) -> Vec<u32> {
    let cells = resolution.saturating_sub(1);
    let mut indices = Vec::with_capacity(quad_count(resolution) * 6);

    for i in 0..cells {
        for j in 0..cells {
            // First triangle of the quad
            indices.push(vid(i, j, resolution));
            indices.push(vid(i + 1, j, resolution));
            indices.push(vid(i, j + 1, resolution));

            // Second triangle of the quad
            indices.push(vid(i + 1, j + 1, resolution));
            indices.push(vid(i, j + 1, resolution));
            indices.push(vid(i + 1, j, resolution));
        }
    }

    indices
}

/// Line list drawing the 6 edges of every cell, both diagonals included.
///
/// Cell `(i, j)` emits 12 indices at `quad_id * 12`. Edges shared by
/// neighboring cells are emitted once per cell.
pub fn wireframe_indices(resolution: usize) -> Vec<u32> {
    let cells = resolution.saturating_sub(1);
    let mut indices = Vec::with_capacity(quad_count(resolution) * 12);

    for i in 0..cells {
        for j in 0..cells {
            let tl = vid(i, j, resolution);
            let tr = vid(i, j + 1, resolution);
            let bl = vid(i + 1, j, resolution);
            let br = vid(i + 1, j + 1, resolution);

            indices.extend_from_slice(&[
                tl, tr, // top
                tl, bl, // left
                tl, br, // diagonal
                bl, tr, // anti-diagonal
                br, bl, // bottom
                br, tr, // right
            ]);
        }
    }

    indices
}

//! Spring topology.
//!
//! Every grid point is connected to the points reached by a fixed set of
//! integer offsets `(di, dj)` with `0 < |di| + |dj| <= 2`. The same set
//! applies to every point; offsets that leave the grid are skipped, so
//! boundary points simply have fewer springs.
//!
//! ```text
//!             (-2, 0)
//!     (-1,-1) (-1, 0) (-1, 1)
//! (0,-2) (0,-1)  ·  (0, 1) (0, 2)
//!     ( 1,-1) ( 1, 0) ( 1, 1)
//!             ( 2, 0)
//! ```

use serde::{Deserialize, Serialize};
use weft_types::GridCoord;

/// Taxicab radius of the spring neighborhood.
pub const SPRING_REACH: i32 = 2;

/// Class of a spring, determined by its offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpringKind {
    /// Axis-aligned, distance 1.
    Structural,
    /// Diagonal, distance 1 in each axis.
    Shear,
    /// Axis-aligned, distance 2.
    Bend,
}

impl SpringKind {
    pub fn name(&self) -> &'static str {
        match self {
            SpringKind::Structural => "structural",
            SpringKind::Shear => "shear",
            SpringKind::Bend => "bend",
        }
    }
}

/// Integer grid displacement to a spring neighbor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpringOffset {
    pub di: i32,
    pub dj: i32,
}

impl SpringOffset {
    #[inline]
    pub const fn new(di: i32, dj: i32) -> Self {
        Self { di, dj }
    }

    /// `|di| + |dj|`.
    #[inline]
    pub fn taxicab(&self) -> i32 {
        self.di.abs() + self.dj.abs()
    }

    /// Euclidean norm of the offset. Rest length = `quad_size * norm()`.
    #[inline]
    pub fn norm(&self) -> f32 {
        ((self.di * self.di + self.dj * self.dj) as f32).sqrt()
    }

    pub fn kind(&self) -> SpringKind {
        match (self.di.abs(), self.dj.abs()) {
            (1, 1) => SpringKind::Shear,
            _ if self.taxicab() == 1 => SpringKind::Structural,
            _ => SpringKind::Bend,
        }
    }

    /// The neighbor of `coord` along this offset, if it lies inside the grid.
    #[inline]
    pub fn neighbor(&self, coord: GridCoord, resolution: usize) -> Option<GridCoord> {
        coord.offset(self.di, self.dj, resolution)
    }
}

/// The immutable set of spring offsets shared by every point of a cloth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpringTopology {
    offsets: Vec<SpringOffset>,
}

impl SpringTopology {
    /// Build the offset set `{ (di, dj) : 0 < |di| + |dj| <= 2 }`.
    pub fn build() -> Self {
        let mut offsets = Vec::with_capacity(Self::expected_len());
        for di in -SPRING_REACH..=SPRING_REACH {
            for dj in -SPRING_REACH..=SPRING_REACH {
                let offset = SpringOffset::new(di, dj);
                if (di, dj) != (0, 0) && offset.taxicab() <= SPRING_REACH {
                    offsets.push(offset);
                }
            }
        }
        tracing::debug!(offsets = offsets.len(), "spring topology built");
        Self { offsets }
    }

    /// Size of the taxicab ball of radius `SPRING_REACH`, minus the origin.
    pub const fn expected_len() -> usize {
        let r = SPRING_REACH as usize;
        2 * r * (r + 1)
    }

    #[inline]
    pub fn offsets(&self) -> &[SpringOffset] {
        &self.offsets
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SpringOffset> {
        self.offsets.iter()
    }

    /// Offsets of a single class.
    pub fn of_kind(&self, kind: SpringKind) -> impl Iterator<Item = &SpringOffset> {
        self.offsets.iter().filter(move |o| o.kind() == kind)
    }

    /// In-bounds neighbors of `coord`, paired with the offset that reaches them.
    pub fn neighbors(
        &self,
        coord: GridCoord,
        resolution: usize,
    ) -> impl Iterator<Item = (SpringOffset, GridCoord)> + '_ {
        self.offsets
            .iter()
            .filter_map(move |o| o.neighbor(coord, resolution).map(|n| (*o, n)))
    }

    /// Number of (directed) point–neighbor pairs active in a grid.
    ///
    /// Each undirected spring is counted once from each endpoint.
    pub fn active_pair_count(&self, resolution: usize) -> usize {
        let n = resolution as i64;
        self.offsets
            .iter()
            .map(|o| {
                let rows = (n - o.di.abs() as i64).max(0);
                let cols = (n - o.dj.abs() as i64).max(0);
                (rows * cols) as usize
            })
            .sum()
    }
}

impl Default for SpringTopology {
    fn default() -> Self {
        Self::build()
    }
}

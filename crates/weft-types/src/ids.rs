//! Strongly-typed identifiers.
//!
//! Newtype wrappers keep grid coordinates, flat point indices and cloth
//! instance handles from being mixed up.

use serde::{Deserialize, Serialize};

/// Integer coordinates `(i, j)` of a point in a square grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridCoord {
    pub i: usize,
    pub j: usize,
}

/// Handle to a cloth instance owned by the simulation driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InstanceId(pub u32);

impl GridCoord {
    #[inline]
    pub fn new(i: usize, j: usize) -> Self {
        Self { i, j }
    }

    /// Row-major flat index `i * resolution + j`.
    #[inline]
    pub fn flat(self, resolution: usize) -> usize {
        self.i * resolution + self.j
    }

    /// Inverse of [`GridCoord::flat`].
    #[inline]
    pub fn from_flat(index: usize, resolution: usize) -> Self {
        Self {
            i: index / resolution,
            j: index % resolution,
        }
    }

    /// Applies an integer offset, returning `None` outside `[0, resolution)²`.
    #[inline]
    pub fn offset(self, di: i32, dj: i32, resolution: usize) -> Option<Self> {
        let i = self.i as i64 + di as i64;
        let j = self.j as i64 + dj as i64;
        let n = resolution as i64;
        if (0..n).contains(&i) && (0..n).contains(&j) {
            Some(Self {
                i: i as usize,
                j: j as usize,
            })
        } else {
            None
        }
    }
}

impl InstanceId {
    /// Returns the raw index as `usize` for slot lookup.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for InstanceId {
    fn from(val: u32) -> Self {
        Self(val)
    }
}

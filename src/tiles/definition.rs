//! Tile identity and edge connectivity.
//!
//! A tile is a square with two edge-points per side. Points are numbered
//! clockwise starting at the left point of the top side:
//!
//! ```text
//!      0   1
//!    +-------+
//!  7 |       | 2
//!  6 |       | 3
//!    +-------+
//!      5   4
//! ```
//!
//! `Edges` maps each point to the point its path exits through.

use serde::{Deserialize, Serialize};

/// Number of edge-points on a tile.
pub const EDGE_POINTS: usize = 8;

/// Identifier for a catalogue tile (1-based).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TileId(pub u32);

impl TileId {
    /// Create a tile ID. Validity is checked by the catalogue, not here.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for TileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "tile{}", self.0)
    }
}

/// Side of a square tile or cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

impl Side {
    pub const ALL: [Side; 4] = [Side::Top, Side::Right, Side::Bottom, Side::Left];

    /// The side an edge-point sits on.
    ///
    /// Panics if `point >= 8`.
    #[must_use]
    pub fn of(point: usize) -> Side {
        assert!(point < EDGE_POINTS, "Edge point {} out of range", point);
        Side::ALL[point / 2]
    }

    /// The two edge-points on this side, in clockwise order.
    #[must_use]
    pub fn points(self) -> [usize; 2] {
        let base = self as usize * 2;
        [base, base + 1]
    }
}

/// Fixed-point-free involution over the 8 edge-points.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edges(pub [u8; EDGE_POINTS]);

impl Edges {
    #[must_use]
    pub const fn new(points: [u8; EDGE_POINTS]) -> Self {
        Self(points)
    }

    /// Where a path entering at `point` leaves the tile.
    ///
    /// Panics if `point >= 8`.
    #[must_use]
    pub fn exit(&self, point: usize) -> usize {
        self.0[point] as usize
    }

    /// True when every point pairs with a different point, symmetrically.
    #[must_use]
    pub fn is_involution(&self) -> bool {
        (0..EDGE_POINTS).all(|p| {
            let q = self.0[p] as usize;
            q < EDGE_POINTS && q != p && self.0[q] as usize == p
        })
    }

    /// The four paths through the tile as `(low, high)` point pairs.
    #[must_use]
    pub fn pairs(&self) -> Vec<(usize, usize)> {
        (0..EDGE_POINTS)
            .filter_map(|p| {
                let q = self.exit(p);
                (p < q).then_some((p, q))
            })
            .collect()
    }

    #[must_use]
    pub fn as_array(&self) -> [u8; EDGE_POINTS] {
        self.0
    }
}

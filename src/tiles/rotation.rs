//! Quarter-turn rotation of tiles.
//!
//! Turning a tile 90 degrees clockwise moves every edge-point two places
//! along the perimeter (top points land on the right side, and so on).
//! With `R(p) = p + 2 mod 8`, the rotated mapping is `R ∘ edges ∘ R⁻¹`,
//! and four quarter turns are the identity.
//!
//! Orientation lives on hand entries and grid cells; the catalogue is never
//! rewritten.

use serde::{Deserialize, Serialize};

use super::definition::{Edges, EDGE_POINTS};
use crate::core::error::GameError;

/// Points shifted per quarter turn.
const POINTS_PER_TURN: usize = EDGE_POINTS / 4;

/// Clockwise rotation in quarter turns (0..=3).
///
/// Decoding rejects values above 3.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Orientation(u8);

impl Orientation {
    pub const NORTH: Orientation = Orientation(0);
    pub const EAST: Orientation = Orientation(1);
    pub const SOUTH: Orientation = Orientation(2);
    pub const WEST: Orientation = Orientation(3);

    /// Orientation after `quarter_turns` clockwise turns from 0.
    #[must_use]
    pub const fn new(quarter_turns: u8) -> Self {
        Self(quarter_turns % 4)
    }

    #[must_use]
    pub const fn quarter_turns(self) -> u8 {
        self.0
    }

    #[must_use]
    pub const fn degrees(self) -> u16 {
        self.0 as u16 * 90
    }

    /// One more quarter turn clockwise.
    #[must_use]
    pub const fn rotated_cw(self) -> Self {
        Self::new(self.0 % 4 + 1)
    }
}

impl TryFrom<u8> for Orientation {
    type Error = GameError;

    fn try_from(quarter_turns: u8) -> Result<Self, Self::Error> {
        if quarter_turns < 4 {
            Ok(Self(quarter_turns))
        } else {
            Err(GameError::InvalidOrientation(quarter_turns))
        }
    }
}

impl From<Orientation> for u8 {
    fn from(orientation: Orientation) -> u8 {
        orientation.0
    }
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}°", self.degrees())
    }
}

fn shift(point: usize, turns: usize) -> usize {
    (point + turns * POINTS_PER_TURN) % EDGE_POINTS
}

impl Edges {
    /// Effective connectivity of this tile under `orientation`.
    #[must_use]
    pub fn rotated(&self, orientation: Orientation) -> Edges {
        let turns = orientation.quarter_turns() as usize;
        let mut out = [0u8; EDGE_POINTS];
        for p in 0..EDGE_POINTS {
            out[shift(p, turns)] = shift(self.exit(p), turns) as u8;
        }
        Edges(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orientation_wraps() {
        assert_eq!(Orientation::new(5), Orientation::EAST);
        assert_eq!(Orientation::WEST.rotated_cw(), Orientation::NORTH);
        assert_eq!(Orientation::SOUTH.degrees(), 180);
        assert_eq!(Orientation::EAST.to_string(), "90°");
    }

    #[test]
    fn test_decode_rejects_out_of_range() {
        assert_eq!(Orientation::try_from(3), Ok(Orientation::WEST));
        assert_eq!(
            Orientation::try_from(255),
            Err(GameError::InvalidOrientation(255))
        );

        assert_eq!(serde_json::to_string(&Orientation::SOUTH).unwrap(), "2");
        assert_eq!(
            serde_json::from_str::<Orientation>("1").unwrap(),
            Orientation::EAST
        );
        assert!(serde_json::from_str::<Orientation>("255").is_err());
        assert!(bincode::deserialize::<Orientation>(&[4]).is_err());
    }

    #[test]
    fn test_rotate_identity() {
        let edges = Edges::new([3, 6, 5, 0, 7, 2, 1, 4]);
        assert_eq!(edges.rotated(Orientation::NORTH), edges);
    }

    #[test]
    fn test_rotate_quarter_turn() {
        let edges = Edges::new([1, 0, 3, 2, 5, 4, 7, 6]);
        // Every side is a U-turn, so rotation leaves it unchanged.
        assert_eq!(edges.rotated(Orientation::EAST), edges);

        // 0<->3 (top-left to right-bottom) becomes 2<->5 after a quarter turn.
        let edges = Edges::new([3, 6, 5, 0, 7, 2, 1, 4]);
        let turned = edges.rotated(Orientation::EAST);
        assert_eq!(turned.exit(2), 5);
        assert_eq!(turned.exit(5), 2);
        assert!(turned.is_involution());
    }

    #[test]
    fn test_composition_matches_single_rotation() {
        let edges = Edges::new([5, 3, 7, 1, 6, 0, 4, 2]);
        let twice = edges
            .rotated(Orientation::EAST)
            .rotated(Orientation::EAST);
        assert_eq!(twice, edges.rotated(Orientation::SOUTH));
    }
}

//! Tile system: identity, edge connectivity, rotation, catalogue.
//!
//! ## Key Types
//!
//! - `TileId`: Catalogue identifier (1..=35)
//! - `Edges`: 8-point connectivity, a fixed-point-free involution
//! - `Orientation`: Quarter turns clockwise, 0..=3
//! - `TileCatalogue`: The immutable tile table

pub mod catalogue;
pub mod definition;
pub mod rotation;

pub use catalogue::{TileCatalogue, TILE_COUNT};
pub use definition::{Edges, Side, TileId, EDGE_POINTS};
pub use rotation::Orientation;

//! Hexgrid is a coordinate kit for hexagon-tiled grids. It provides integer
//! and fractional cube coordinates, the adjacency and corner geometry of a
//! tile, and a [Layout] that maps grid coordinates to 2D screen space and
//! back. Storage, rendering and input handling are left to the caller.
//!
//! ```
//! use hexgrid::{Hex, Layout, Point2};
//!
//! let layout = Layout::pointy(Point2::new(32.0, 32.0), Point2::ZERO).unwrap();
//! let hex = Hex::new(1, 2, -3).unwrap();
//! let center = layout.hex_to_screen(hex);
//! // Picking goes the other way, then narrows to a tile explicitly
//! let picked = layout.screen_to_hex(center).round();
//! assert_eq!(picked, hex);
//! ```
//!
//! See [LayoutConfig] for describing a layout in a config file.

mod config;
mod error;
mod hex;
mod layout;
mod util;

pub use crate::{
    config::{LayoutConfig, OrientationKind},
    error::HexError,
    hex::{Hex, HexF},
    layout::{Layout, Orientation, Point2},
};

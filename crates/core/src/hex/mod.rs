//! This module holds the coordinate types of the hexagon grid.
//!
//! ## Coordinate Systems
//!
//! ### Grid Coordinates
//!
//! Grid coordinates (AKA hex coordinates) use the [cube coordinate system
//! defined by Amit Patel](https://www.redblobgames.com/grids/hexagons/#coordinates-cube).
//! Each coordinate has three components (`q`, `r`, and `s`), and **for every
//! valid coordinate, `q + r + s = 0`.** A hex grid is two dimensional, but
//! viewing it as the plane `q + r + s = 0` inside a 3D space makes distance,
//! adjacency and rotation plain vector arithmetic.
//!
//! There are two flavors of grid coordinate:
//!
//! - [Hex] has integer components and always refers to the center of a tile.
//!   Use it as the address of a tile, e.g. as a map key.
//! - [HexF] has float components and can refer to any point on the grid:
//!   tile vertices, points along a line between two tiles, or wherever the
//!   user clicked. Its invariant is only checked within a small tolerance,
//!   since these values come out of float math.
//!
//! The two convert into each other. `Hex -> HexF` is lossless, while
//! `HexF -> Hex` ([HexF::round]) picks the tile that contains the point.
//!
//! ### Screen Coordinates
//!
//! Screen coordinates are plain 2D cartesian coordinates, used for rendering
//! and picking. See [crate::Layout] for the mapping between the two systems.
//!
//! ## Directions and Corners
//!
//! The six neighbors of a tile are numbered `0..6`, starting from `+q/-s` and
//! walking around the tile in a consistent rotation. Any integer is accepted
//! as a direction index and is wrapped with a floor modulo, so `-1` is the
//! same as `5` and `6` is the same as `0`. This makes "turn by N sixths" a
//! plain addition on the index.
//!
//! Corners use the same numbering. Corner `i` is the vertex shared by the
//! tile and its neighbors in directions `i` and `i + 1`.

mod cube;
mod direction;
mod fractional;

pub use self::{cube::Hex, fractional::HexF};

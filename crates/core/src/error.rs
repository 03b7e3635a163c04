use derive_more::Display;
use std::error::Error;

/// Everything that can go wrong in the coordinate layer. All of these are
/// raised at construction or access time; arithmetic and layout transforms
/// can't fail once their inputs are built.
#[derive(Copy, Clone, Debug, Display, PartialEq)]
pub enum HexError {
    /// The three components of a cube coordinate don't sum to zero (exactly
    /// for [Hex](crate::Hex), within tolerance for [HexF](crate::HexF))
    #[display(
        fmt = "invalid coordinate ({}, {}, {}); q + r + s must equal 0",
        q,
        r,
        s
    )]
    InvalidCoordinate { q: f64, r: f64, s: f64 },

    /// Component index outside of `0..=2`
    #[display(fmt = "component index {} out of range; must be 0, 1 or 2", index)]
    IndexOutOfRange { index: usize },

    /// An orientation matrix has no inverse, so screen points can't be mapped
    /// back onto the grid
    #[display(fmt = "orientation matrix is singular")]
    SingularMatrix,

    /// A layout size with a zero or non-finite component. Zero collapses the
    /// grid onto a line, so screen points can't be mapped back.
    #[display(
        fmt = "invalid layout size ({}, {}); both components must be finite and non-zero",
        x,
        y
    )]
    InvalidSize { x: f64, y: f64 },

    /// A layout origin with a non-finite component
    #[display(
        fmt = "invalid layout origin ({}, {}); both components must be finite",
        x,
        y
    )]
    InvalidOrigin { x: f64, y: f64 },
}

impl Error for HexError {}

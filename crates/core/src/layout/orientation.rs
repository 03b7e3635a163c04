use crate::{util::SQRT_3, HexError};
use lazy_static::lazy_static;
use log::trace;
use nalgebra::Matrix2;
use std::f64::consts::FRAC_PI_3;

lazy_static! {
    static ref POINTY: Orientation = Orientation::preset(
        Matrix2::new(SQRT_3, SQRT_3 / 2.0, 0.0, 3.0 / 2.0),
        0.5
    );
    static ref FLAT: Orientation = Orientation::preset(
        Matrix2::new(3.0 / 2.0, 0.0, SQRT_3 / 2.0, SQRT_3),
        0.0
    );
}

/// The linear part of the mapping between the hex grid and screen space,
/// for a tile of unit size. The forward matrix maps an axial `(q, r)` column
/// vector onto screen `(x, y)`, and the backward matrix is its inverse.
///
/// There are two standard orientations, [Self::pointy] (a vertex at the top
/// of each tile) and [Self::flat] (a side at the top). You rarely need to
/// build a custom one.
///
/// See this page for where the matrices come from:
/// https://www.redblobgames.com/grids/hexagons/#hex-to-pixel
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Orientation {
    forward: Matrix2<f64>,
    backward: Matrix2<f64>,
    /// Angle of the first corner, in multiples of 60°
    start_angle: f64,
}

impl Orientation {
    /// Create a new orientation, computing the inverse of the given matrix.
    /// Returns an error if the matrix can't be inverted.
    pub fn new(forward: Matrix2<f64>, start_angle: f64) -> Result<Self, HexError> {
        let backward = forward.try_inverse().ok_or(HexError::SingularMatrix)?;
        trace!("Inverted orientation matrix {:?} => {:?}", forward, backward);
        Ok(Self {
            forward,
            backward,
            start_angle,
        })
    }

    /// Build one of the constant orientations
    fn preset(forward: Matrix2<f64>, start_angle: f64) -> Self {
        // Both preset matrices have a non-zero determinant, so this can't fail
        Self::new(forward, start_angle).unwrap()
    }

    /// Tiles with a vertex pointing straight up, and rows of tiles running
    /// along the x axis
    pub fn pointy() -> &'static Self {
        &POINTY
    }

    /// Tiles with a flat side on top, and columns of tiles running along the
    /// y axis
    pub fn flat() -> &'static Self {
        &FLAT
    }

    /// Matrix that maps axial `(q, r)` onto unscaled screen `(x, y)`
    pub fn forward(&self) -> &Matrix2<f64> {
        &self.forward
    }

    /// Matrix that maps unscaled screen `(x, y)` onto axial `(q, r)`
    pub fn backward(&self) -> &Matrix2<f64> {
        &self.backward
    }

    /// Angle of the first corner of a tile, in multiples of 60°
    pub fn start_angle(&self) -> f64 {
        self.start_angle
    }

    /// Angle (in radians, from the +x axis) between the center of a tile and
    /// one of its corners in screen space
    pub fn corner_angle(&self, corner: i32) -> f64 {
        FRAC_PI_3 * (self.start_angle + f64::from(corner))
    }
}

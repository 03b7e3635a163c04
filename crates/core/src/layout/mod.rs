//! This module maps the hex grid onto 2D screen space and back.
//!
//! ## Screen Coordinates
//!
//! Screen coordinates are plain 2D cartesian coordinates. They're what you'd
//! use to draw the grid or to find out which tile is under the cursor. How
//! the grid lands on the screen is defined by a [Layout], which has three
//! parts:
//!
//! - An [Orientation], which says whether tiles are pointy-topped or
//!   flat-topped. This is a linear map from axial `(q, r)` onto a tile of unit
//!   size.
//! - A size, which scales each axis independently. With a size of `(1, 1)`,
//!   the distance from a tile's center to any of its vertices is 1.
//! - An origin, which is the screen position of the center of
//!   [Hex::ORIGIN](crate::Hex::ORIGIN).
//!
//! The three are composed into one affine transform for each direction when
//! the layout is created, so converting a point is a single matrix multiply.
//! Nothing is recomputed per call.
//!
//! The grid to screen direction accepts any grid point, including fractional
//! ones. The screen to grid direction always gives a [HexF](crate::HexF),
//! since an arbitrary screen point is rarely a tile center. Narrowing it down
//! to a tile is up to the caller, via [HexF::round](crate::HexF::round).

mod orientation;
mod unit;

pub use self::{orientation::Orientation, unit::Point2};

use crate::{HexError, HexF, LayoutConfig};
use log::{debug, trace};
use nalgebra::{Matrix3, Vector2};
use validator::Validate;

/// A full mapping between the hex grid and screen space. Build one, then use
/// [Self::hex_to_screen] for rendering and [Self::screen_to_hex] for
/// picking.
///
/// Layouts are immutable and cheap to copy. Each size component must be
/// finite and non-zero, and the origin must be finite, otherwise the
/// transforms would produce `NaN`s. Every constructor checks this.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Layout {
    orientation: Orientation,
    size: Point2,
    origin: Point2,
    /// Homogeneous transform: grid => screen
    forward: Matrix3<f64>,
    /// Homogeneous transform: screen => grid
    backward: Matrix3<f64>,
}

impl Layout {
    /// Create a layout. Returns an error if a size component is zero or
    /// non-finite, or the origin is non-finite.
    pub fn new(
        orientation: Orientation,
        size: Point2,
        origin: Point2,
    ) -> Result<Self, HexError> {
        if !(size.x.is_finite() && size.y.is_finite())
            || size.x == 0.0
            || size.y == 0.0
        {
            return Err(HexError::InvalidSize {
                x: size.x,
                y: size.y,
            });
        }
        if !(origin.x.is_finite() && origin.y.is_finite()) {
            return Err(HexError::InvalidOrigin {
                x: origin.x,
                y: origin.y,
            });
        }

        let scale: Vector2<f64> = size.into();
        let translation: Vector2<f64> = origin.into();

        // Remember, these apply right-to-left. Rotate/skew into screen space,
        // then scale, then shift.
        let forward = Matrix3::new_translation(&translation)
            * Matrix3::new_nonuniform_scaling(&scale)
            * orientation.forward().to_homogeneous();
        // Exact opposite steps in the opposite order
        let backward = orientation.backward().to_homogeneous()
            * Matrix3::new_nonuniform_scaling(&scale.map(f64::recip))
            * Matrix3::new_translation(&-translation);
        trace!("Layout transforms: forward={:?} backward={:?}", forward, backward);

        Ok(Self {
            orientation,
            size,
            origin,
            forward,
            backward,
        })
    }

    /// Shortcut for a layout of pointy-topped tiles
    pub fn pointy(size: Point2, origin: Point2) -> Result<Self, HexError> {
        Self::new(*Orientation::pointy(), size, origin)
    }

    /// Shortcut for a layout of flat-topped tiles
    pub fn flat(size: Point2, origin: Point2) -> Result<Self, HexError> {
        Self::new(*Orientation::flat(), size, origin)
    }

    /// Build a layout from a config. Returns an error if the config is
    /// invalid.
    pub fn from_config(config: &LayoutConfig) -> anyhow::Result<Self> {
        config.validate()?;
        debug!(
            "Building {} layout with size {} and origin {}",
            config.orientation, config.size, config.origin
        );
        Ok(Self::new(
            *config.orientation.orientation(),
            config.size,
            config.origin,
        )?)
    }

    pub fn orientation(&self) -> &Orientation {
        &self.orientation
    }

    pub fn size(&self) -> Point2 {
        self.size
    }

    pub fn origin(&self) -> Point2 {
        self.origin
    }

    /// The composed grid => screen transform, as a homogeneous 3x3 matrix
    /// over `(q, r, 1)`. Useful for handing straight to a renderer.
    pub fn forward_transform(&self) -> &Matrix3<f64> {
        &self.forward
    }

    /// The composed screen => grid transform, as a homogeneous 3x3 matrix
    /// over `(x, y, 1)`
    pub fn backward_transform(&self) -> &Matrix3<f64> {
        &self.backward
    }

    /// Convert a point from the hex grid to screen space. `s` is redundant
    /// and isn't used, only `q` and `r` go through the transform.
    pub fn hex_to_screen(&self, hex: impl Into<HexF>) -> Point2 {
        let hex: HexF = hex.into();
        self.forward
            .transform_point(&nalgebra::Point2::new(hex.q(), hex.r()))
            .into()
    }

    /// Convert a point from screen space to the hex grid. This never rounds,
    /// call [HexF::round] on the result to get the tile under the point.
    pub fn screen_to_hex(&self, point: Point2) -> HexF {
        let axial = self.backward.transform_point(&point.into());
        HexF::new_qr(axial.x, axial.y)
    }

    /// Offset in screen space from the center of any tile to one of its
    /// corners. Any index is valid, it wraps around every 6.
    pub fn corner_offset(&self, corner: i32) -> Point2 {
        let angle = self.orientation.corner_angle(corner);
        Point2::new(self.size.x * angle.cos(), self.size.y * angle.sin())
    }

    /// Get the 6 corners of a tile in screen space, e.g. to draw it as a
    /// polygon. These are the same points as
    /// [Hex::corners](crate::Hex::corners) mapped through
    /// [Self::hex_to_screen], but the winding starts from the orientation's
    /// start angle instead of direction 0.
    pub fn polygon_corners(&self, hex: impl Into<HexF>) -> [Point2; 6] {
        let center = self.hex_to_screen(hex);
        let mut corners = [Point2::ZERO; 6];
        for (i, corner) in corners.iter_mut().enumerate() {
            *corner = center + self.corner_offset(i as i32);
        }
        corners
    }
}

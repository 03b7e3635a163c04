use crate::{Orientation, Point2};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};
use validator::{Validate, ValidationError};

/// Serializable description of a [Layout](crate::Layout). This is what you'd
/// put in a config file; call
/// [Layout::from_config](crate::Layout::from_config) to turn it into
/// something that can convert coordinates.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct LayoutConfig {
    /// Which way the tiles point
    pub orientation: OrientationKind,

    /// Screen-space scale of a tile along each axis. With `(1, 1)`, the
    /// distance from a tile's center to each of its vertices is 1. Negative
    /// values mirror the grid along that axis, but zero is invalid.
    #[validate(custom = "validate_size")]
    pub size: Point2,

    /// Screen position of the center of the origin tile
    #[validate(custom = "validate_origin")]
    pub origin: Point2,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            orientation: OrientationKind::Pointy,
            size: Point2::splat(1.0),
            origin: Point2::ZERO,
        }
    }
}

/// The named orientations, for picking one in a config file or on the
/// command line
#[derive(
    Copy,
    Clone,
    Debug,
    Display,
    EnumIter,
    EnumString,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum OrientationKind {
    /// See [Orientation::pointy]
    Pointy,
    /// See [Orientation::flat]
    Flat,
}

impl OrientationKind {
    pub fn orientation(self) -> &'static Orientation {
        match self {
            Self::Pointy => Orientation::pointy(),
            Self::Flat => Orientation::flat(),
        }
    }
}

fn validate_size(size: &Point2) -> Result<(), ValidationError> {
    if !size.x.is_finite() || !size.y.is_finite() {
        Err(ValidationError::new("size_not_finite"))
    } else if size.x == 0.0 || size.y == 0.0 {
        // A zero scale collapses the grid, so there's no way back from screen
        // space
        Err(ValidationError::new("size_zero"))
    } else {
        Ok(())
    }
}

fn validate_origin(origin: &Point2) -> Result<(), ValidationError> {
    if origin.x.is_finite() && origin.y.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::new("origin_not_finite"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_default_is_valid() {
        assert!(LayoutConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_size() {
        assert!(validate_size(&Point2::new(1.0, -3.0)).is_ok());
        assert_eq!(
            validate_size(&Point2::new(0.0, 1.0)).unwrap_err().code,
            "size_zero"
        );
        assert_eq!(
            validate_size(&Point2::new(1.0, f64::NAN)).unwrap_err().code,
            "size_not_finite"
        );
        assert!(validate_origin(&Point2::new(-1e9, 1e9)).is_ok());
        assert!(validate_origin(&Point2::new(f64::INFINITY, 0.0)).is_err());
    }

    #[test]
    fn test_orientation_kind() {
        assert_eq!(
            OrientationKind::from_str("pointy").unwrap(),
            OrientationKind::Pointy
        );
        assert_eq!(OrientationKind::Flat.to_string(), "flat");
        assert!(OrientationKind::from_str("diagonal").is_err());
        assert_eq!(OrientationKind::iter().count(), 2);
        assert_eq!(OrientationKind::Flat.orientation(), Orientation::flat());
    }
}

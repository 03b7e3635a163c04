use crate::{
    hex::Hex,
    util::{approx_eq, EPSILON},
    HexError,
};
use derive_more::{Add, AddAssign, Display, Neg, Sub, SubAssign};
use serde::{Deserialize, Serialize};
use std::{array, convert::TryFrom, ops};

/// A point anywhere in the hex grid, not just at a tile center. This is the
/// float version of [Hex], used for screen positions mapped back onto the
/// grid, tile vertices, interpolation, etc.
///
/// Float math drifts, so the invariant `q + r + s = 0` is only enforced
/// within a small tolerance, and equality compares each component within
/// that same tolerance. Because of that this type is **not** `Hash`; round
/// it to a [Hex] first if you need a key.
#[derive(
    Copy,
    Clone,
    Debug,
    Display,
    Add,
    Sub,
    Neg,
    AddAssign,
    SubAssign,
    Serialize,
    Deserialize,
)]
#[display(fmt = "({}, {}, {})", "self.q", "self.r", "self.s")]
#[serde(try_from = "UncheckedHexF", into = "UncheckedHexF")]
pub struct HexF {
    q: f64,
    r: f64,
    s: f64,
}

impl HexF {
    /// Construct a new point from all three components. Returns an error if
    /// they don't sum to (nearly) zero.
    pub fn new(q: f64, r: f64, s: f64) -> Result<Self, HexError> {
        if (q + r + s).abs() < EPSILON {
            Ok(Self { q, r, s })
        } else {
            Err(HexError::InvalidCoordinate { q, r, s })
        }
    }

    /// Construct a new point with the given q and r, deriving s. Always
    /// valid.
    pub fn new_qr(q: f64, r: f64) -> Self {
        Self { q, r, s: -q - r }
    }

    /// Skip validation. Only for values that are valid by construction, like
    /// the static corner table.
    pub(crate) const fn new_unchecked(q: f64, r: f64, s: f64) -> Self {
        Self { q, r, s }
    }

    pub fn q(&self) -> f64 {
        self.q
    }

    pub fn r(&self) -> f64 {
        self.r
    }

    pub fn s(&self) -> f64 {
        self.s
    }

    /// Get a component by index: `0` is q, `1` is r and `2` is s
    pub fn get(&self, index: usize) -> Result<f64, HexError> {
        match index {
            0 => Ok(self.q),
            1 => Ok(self.r),
            2 => Ok(self.s),
            _ => Err(HexError::IndexOutOfRange { index }),
        }
    }

    /// Iterate over the three components, in the order `q, r, s`
    pub fn components(self) -> array::IntoIter<f64, 3> {
        [self.q, self.r, self.s].into_iter()
    }

    /// Find the tile that contains this point. See [Hex::nearest].
    pub fn round(self) -> Hex {
        Hex::nearest(self)
    }

    /// Linearly interpolate between this point and another one. `t = 0.0`
    /// gives `self`, `t = 1.0` gives `other`.
    pub fn lerp(self, other: HexF, t: f64) -> HexF {
        self + (other - self) * t
    }
}

impl PartialEq for HexF {
    fn eq(&self, other: &Self) -> bool {
        approx_eq(self.q, other.q)
            && approx_eq(self.r, other.r)
            && approx_eq(self.s, other.s)
    }
}

impl From<Hex> for HexF {
    fn from(hex: Hex) -> Self {
        Self::new_unchecked(hex.q().into(), hex.r().into(), hex.s().into())
    }
}

impl IntoIterator for HexF {
    type Item = f64;
    type IntoIter = array::IntoIter<f64, 3>;

    fn into_iter(self) -> Self::IntoIter {
        self.components()
    }
}

impl ops::Mul<f64> for HexF {
    type Output = HexF;

    fn mul(self, rhs: f64) -> Self::Output {
        Self::new_unchecked(self.q * rhs, self.r * rhs, self.s * rhs)
    }
}

impl ops::Mul<HexF> for f64 {
    type Output = HexF;

    fn mul(self, rhs: HexF) -> Self::Output {
        rhs * self
    }
}

impl ops::Add<HexF> for Hex {
    type Output = HexF;

    fn add(self, rhs: HexF) -> Self::Output {
        HexF::from(self) + rhs
    }
}

impl ops::Add<Hex> for HexF {
    type Output = HexF;

    fn add(self, rhs: Hex) -> Self::Output {
        self + HexF::from(rhs)
    }
}

/// Serialized form of [HexF], re-validated on the way in
#[derive(Copy, Clone, Debug, Serialize, Deserialize)]
#[serde(rename = "HexF")]
struct UncheckedHexF {
    q: f64,
    r: f64,
    s: f64,
}

impl TryFrom<UncheckedHexF> for HexF {
    type Error = HexError;

    fn try_from(value: UncheckedHexF) -> Result<Self, Self::Error> {
        Self::new(value.q, value.r, value.s)
    }
}

impl From<HexF> for UncheckedHexF {
    fn from(point: HexF) -> Self {
        Self {
            q: point.q,
            r: point.r,
            s: point.s,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn test_new() {
        let p = HexF::new(1.4, 2.3, -3.7).unwrap();
        assert_approx_eq!(p.q(), 1.4);
        assert_approx_eq!(p.r(), 2.3);
        assert_approx_eq!(p.s(), -3.7);

        assert!(HexF::new(1.2, 2.3, -3.5).is_ok());
        assert_eq!(
            HexF::new(1.2, 2.3, 0.0),
            Err(HexError::InvalidCoordinate {
                q: 1.2,
                r: 2.3,
                s: 0.0
            })
        );
        // Tiny drift is tolerated
        assert!(HexF::new(1.0, 2.0, -3.000_001).is_ok());
        assert!(HexF::new(1.0, 2.0, -3.0001).is_err());

        let p = HexF::new_qr(-1.4, -2.3);
        assert_approx_eq!(p.s(), 3.7);
    }

    #[test]
    fn test_get() {
        let p = HexF::new_qr(0.5, 1.5);
        assert_eq!(p.get(0), Ok(0.5));
        assert_eq!(p.get(1), Ok(1.5));
        assert_eq!(p.get(2), Ok(-2.0));
        assert_eq!(p.get(10), Err(HexError::IndexOutOfRange { index: 10 }));
        assert_eq!(p.components().collect::<Vec<_>>(), vec![0.5, 1.5, -2.0]);
        assert_eq!(p.into_iter().count(), 3);
    }

    #[test]
    fn test_eq() {
        assert_eq!(
            HexF::new(1.0, 2.0, -3.0).unwrap(),
            HexF::new(1.0, 2.0, -3.0).unwrap()
        );
        assert_ne!(
            HexF::new(1.0, 2.0, -3.0).unwrap(),
            HexF::new(1.0, 1.0, -2.0).unwrap()
        );
        // Matrix math round trips aren't exact, but should still compare equal
        assert_eq!(HexF::new_qr(0.1 + 0.2, 0.0), HexF::new_qr(0.3, 0.0));
    }

    #[test]
    fn test_arithmetic() {
        let a = HexF::new_qr(1.5, -0.5);
        let b = HexF::new_qr(0.25, 0.25);
        assert_eq!(a + b, HexF::new_qr(1.75, -0.25));
        assert_eq!(a - b, HexF::new_qr(1.25, -0.75));
        assert_eq!(a * 2.0, HexF::new_qr(3.0, -1.0));
        assert_eq!(2.0 * a, HexF::new_qr(3.0, -1.0));
        assert_eq!(-a, HexF::new_qr(-1.5, 0.5));

        let h = Hex::new_qr(1, 2);
        assert_eq!(h + b, HexF::new_qr(1.25, 2.25));
        assert_eq!(b + h, HexF::new_qr(1.25, 2.25));
        assert_eq!(HexF::from(h), HexF::new(1.0, 2.0, -3.0).unwrap());

        let sum = (a + b) * 3.3 + h;
        assert!((sum.q() + sum.r() + sum.s()).abs() < EPSILON);
    }

    #[test]
    fn test_round() {
        assert_eq!(HexF::new_qr(1.1, 1.8).round(), Hex::new_qr(1, 2));
        assert_eq!(HexF::new_qr(-0.1, -0.1).round(), Hex::ORIGIN);
        assert_eq!(HexF::new_qr(2.6, -0.7).round(), Hex::new_qr(3, -1));
    }

    #[test]
    fn test_lerp() {
        let a = HexF::from(Hex::ORIGIN);
        let b = HexF::from(Hex::new_qr(3, -3));
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 1.0 / 3.0), HexF::new_qr(1.0, -1.0));
    }

    #[test]
    fn test_serde() {
        let p = HexF::new_qr(0.5, 1.0);
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, r#"{"q":0.5,"r":1.0,"s":-1.5}"#);
        assert_eq!(serde_json::from_str::<HexF>(&json).unwrap(), p);

        let err =
            serde_json::from_str::<HexF>(r#"{"q":1.2,"r":2.3,"s":0.0}"#)
                .unwrap_err();
        assert!(err.to_string().starts_with("invalid coordinate"));
    }
}

use crate::{
    hex::{
        direction::{wrap_index, CORNER_OFFSETS, DIRECTIONS},
        HexF,
    },
    HexError,
};
use derive_more::{Add, AddAssign, Display, Neg, Sub, SubAssign};
use serde::{Deserialize, Serialize};
use std::{array, cmp, convert::TryFrom, iter, ops};

/// A point in the hex grid that refers to a whole tile (via its center
/// point). See the module-level docs for a description of the coordinate
/// system.
///
/// ## Implementation
///
/// Since `q + r + s = 0` for every tile, this only stores `q` and `r` and
/// derives `s` as needed. That makes it impossible to hold an invalid value
/// once constructed, and arithmetic never needs to re-check the invariant
/// because it's linear in all three components.
///
/// Equality and hashing are structural, so this can be used directly as the
/// key of a map of tiles.
///
/// ## Range
///
/// All three components have to fit in an `i32`. [Self::new] checks that,
/// but [Self::new_qr] can't, so it's up to the caller to keep `q + r` within
/// `-i32::MAX..=i32::MAX`. Arithmetic follows the usual integer overflow
/// rules.
#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Display,
    Add,
    Sub,
    Neg,
    AddAssign,
    SubAssign,
    Serialize,
    Deserialize,
)]
#[display(fmt = "({}, {}, {})", "self.q()", "self.r()", "self.s()")]
#[serde(try_from = "UncheckedHex", into = "UncheckedHex")]
pub struct Hex {
    q: i32,
    r: i32,
}

impl Hex {
    /// The tile at the center of the grid
    pub const ORIGIN: Self = Self::new_qr(0, 0);

    /// Construct a new tile coordinate from all three components. Returns an
    /// error if they don't fall on the plane `q + r + s = 0`.
    pub fn new(q: i32, r: i32, s: i32) -> Result<Self, HexError> {
        // Widen so extreme components can't overflow into a false zero
        if i64::from(q) + i64::from(r) + i64::from(s) != 0 {
            Err(HexError::InvalidCoordinate {
                q: q.into(),
                r: r.into(),
                s: s.into(),
            })
        } else {
            Ok(Self::new_qr(q, r))
        }
    }

    /// Construct a new tile coordinate with the given q and r. Since
    /// `q + r + s = 0`, s is derived from the other two. `q + r` must be in
    /// `-i32::MAX..=i32::MAX` so that s fits in an `i32`, see the type docs.
    pub const fn new_qr(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    pub const fn q(&self) -> i32 {
        self.q
    }

    pub const fn r(&self) -> i32 {
        self.r
    }

    pub const fn s(&self) -> i32 {
        (-(self.q as i64 + self.r as i64)) as i32
    }

    /// Get a component by index: `0` is q, `1` is r and `2` is s
    pub fn get(&self, index: usize) -> Result<i32, HexError> {
        match index {
            0 => Ok(self.q()),
            1 => Ok(self.r()),
            2 => Ok(self.s()),
            _ => Err(HexError::IndexOutOfRange { index }),
        }
    }

    /// Iterate over the three components, in the order `q, r, s`
    pub fn components(self) -> array::IntoIter<i32, 3> {
        [self.q(), self.r(), self.s()].into_iter()
    }

    /// Number of steps from the origin to this tile. Each component only
    /// counts once (not the sum), since the three absolute values are tied
    /// together by `q + r + s = 0`.
    pub fn distance_from_origin(self) -> usize {
        self.components().map(i32::unsigned_abs).fold(0, cmp::max) as usize
    }

    /// Calculate the path distance between two tiles, meaning the number of
    /// hops it takes to get from one to the other. 0 if the tiles are equal,
    /// 1 if they are adjacent, 2 if there is 1 tile between them, etc.
    pub fn distance(self, other: Hex) -> usize {
        // Widened, since the difference of two valid tiles can leave i32
        let q = i64::from(self.q) - i64::from(other.q);
        let r = i64::from(self.r) - i64::from(other.r);
        let s = -q - r;
        q.unsigned_abs().max(r.unsigned_abs()).max(s.unsigned_abs()) as usize
    }

    /// Get the unit vector that points at the neighbor in the given
    /// direction. Any index is valid, it wraps around every 6.
    pub fn direction(dir: i32) -> Hex {
        DIRECTIONS[wrap_index(dir)]
    }

    /// Get the tile adjacent to this one in the given direction
    pub fn neighbor(self, dir: i32) -> Hex {
        self + Self::direction(dir)
    }

    /// Get an iterator of all the tiles directly adjacent to this one, in
    /// direction order. The iterator will always contain exactly 6 values.
    pub fn neighbors(self) -> impl Iterator<Item = Hex> + Clone {
        DIRECTIONS.into_iter().map(move |dir| self + dir)
    }

    /// Get the offset from the center of any tile to its vertex in the given
    /// direction. Wraps the same way as [Self::direction].
    pub fn corner_offset(dir: i32) -> HexF {
        CORNER_OFFSETS[wrap_index(dir)]
    }

    /// Get the location of a particular vertex of this tile
    pub fn corner(self, dir: i32) -> HexF {
        self + Self::corner_offset(dir)
    }

    /// Get all 6 vertices of this tile, in direction order
    pub fn corners(self) -> impl Iterator<Item = HexF> + Clone {
        CORNER_OFFSETS.into_iter().map(move |offset| self + offset)
    }

    /// Same as [Self::corners], but the first vertex is repeated at the end,
    /// which closes the polygon. Always yields 7 values.
    pub fn corners_wrapping(self) -> impl Iterator<Item = HexF> + Clone {
        self.corners().chain(iter::once(self.corner(0)))
    }

    /// Find the tile that contains a fractional point.
    ///
    /// Rounding each component on its own can land off the plane
    /// `q + r + s = 0`, e.g. `(0.3, 0.3, -0.6)` would become `(0, 0, -1)`. To
    /// stay valid, the component that moved the furthest while rounding is
    /// thrown away and re-derived from the other two.
    ///
    /// Tiles only exist within the `i32` range, so a point beyond it is
    /// clamped onto the outermost tile along each axis. `NaN` components
    /// count as 0.
    pub fn nearest(point: HexF) -> Hex {
        let q = point.q().round();
        let r = point.r().round();
        let s = point.s().round();

        let q_diff = (q - point.q()).abs();
        let r_diff = (r - point.r()).abs();
        let s_diff = (s - point.s()).abs();

        let (q, r) = if q_diff > r_diff && q_diff > s_diff {
            (-r - s, r)
        } else if r_diff > s_diff {
            (q, -q - s)
        } else {
            // s is derived anyway
            (q, r)
        };
        // Keep q + r in range too, so s stays representable
        let q = clamp_component(q);
        let r = clamp_component(r)
            .max(-i32::MAX - q.min(0))
            .min(i32::MAX - q.max(0));
        Self::new_qr(q, r)
    }
}

/// Convert a rounded float to a tile component, clamping to the `i32` range
fn clamp_component(value: f64) -> i32 {
    if value.is_nan() {
        0
    } else {
        value.clamp(f64::from(-i32::MAX), f64::from(i32::MAX)) as i32
    }
}

impl IntoIterator for Hex {
    type Item = i32;
    type IntoIter = array::IntoIter<i32, 3>;

    fn into_iter(self) -> Self::IntoIter {
        self.components()
    }
}

impl ops::Mul<i32> for Hex {
    type Output = Hex;

    fn mul(self, rhs: i32) -> Self::Output {
        Self::new_qr(self.q * rhs, self.r * rhs)
    }
}

impl ops::Mul<Hex> for i32 {
    type Output = Hex;

    fn mul(self, rhs: Hex) -> Self::Output {
        rhs * self
    }
}

/// Serialized form of [Hex]. All three components are written out so the
/// format is self-describing, which means they have to be re-validated on
/// the way back in.
#[derive(Copy, Clone, Debug, Serialize, Deserialize)]
#[serde(rename = "Hex")]
struct UncheckedHex {
    q: i32,
    r: i32,
    s: i32,
}

impl TryFrom<UncheckedHex> for Hex {
    type Error = HexError;

    fn try_from(value: UncheckedHex) -> Result<Self, Self::Error> {
        Self::new(value.q, value.r, value.s)
    }
}

impl From<Hex> for UncheckedHex {
    fn from(hex: Hex) -> Self {
        Self {
            q: hex.q(),
            r: hex.r(),
            s: hex.s(),
        }
    }
}

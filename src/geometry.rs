//! Points, extents and bounding regions shared by both patterns.

use std::fmt;

use serde::Deserialize;

use crate::error::PatternError;

pub type Coord = f64;

#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
pub struct Point {
    pub x: Coord,
    pub y: Coord,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: Coord, y: Coord) -> Self {
        Point { x, y }
    }

    pub fn offset(self, dx: Coord, dy: Coord) -> Self {
        Point::new(self.x + dx, self.y + dy)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Width and height of something laid out on screen. Never negative.
///
/// Every construction path, deserialization included, goes through
/// [`Extent::new`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(try_from = "RawExtent")]
pub struct Extent {
    width: Coord,
    height: Coord,
}

#[derive(Deserialize)]
struct RawExtent {
    width: Coord,
    height: Coord,
}

impl TryFrom<RawExtent> for Extent {
    type Error = PatternError;

    fn try_from(raw: RawExtent) -> Result<Self, Self::Error> {
        Extent::new(raw.width, raw.height)
    }
}

impl Extent {
    pub fn new(width: Coord, height: Coord) -> Result<Self, PatternError> {
        let valid = |side: Coord| side.is_finite() && side >= 0.0;
        if !valid(width) || !valid(height) {
            return Err(PatternError::InvalidExtent { width, height });
        }
        Ok(Extent { width, height })
    }

    pub fn width(&self) -> Coord {
        self.width
    }

    pub fn height(&self) -> Coord {
        self.height
    }

    /// Shrinks both sides by `inset` on each edge, stopping at zero.
    pub fn shrink(self, inset: Coord) -> Self {
        Extent {
            width: (self.width - 2.0 * inset).max(0.0),
            height: (self.height - 2.0 * inset).max(0.0),
        }
    }

    /// Grows both sides by `inset` on each edge. Undoes [`Extent::shrink`]
    /// unless that one stopped at zero.
    pub fn grow(self, inset: Coord) -> Self {
        Extent {
            width: self.width + 2.0 * inset.max(0.0),
            height: self.height + 2.0 * inset.max(0.0),
        }
    }
}

impl fmt::Display for Extent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Axis-aligned bounding box.
///
/// `top_right` is expected to dominate `bottom_left` in both axes. Only
/// [`Region::try_new`] enforces it; regions derived from an empty extent are
/// degenerate and report `false` from [`Region::is_proper`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    pub bottom_left: Point,
    pub top_right: Point,
}

impl Region {
    /// Checked constructor for callers that need a proper region. Adapter
    /// bounding boxes come from [`Region::from_origin_extent`] instead, since
    /// an empty view may have a zero extent.
    pub fn try_new(bottom_left: Point, top_right: Point) -> Result<Self, PatternError> {
        let region = Region {
            bottom_left,
            top_right,
        };
        if !region.is_proper() {
            return Err(PatternError::ImproperRegion {
                bottom_left,
                top_right,
            });
        }
        Ok(region)
    }

    /// x pairs with width and y with height.
    pub fn from_origin_extent(origin: Point, extent: Extent) -> Self {
        Region {
            bottom_left: origin,
            top_right: origin.offset(extent.width, extent.height),
        }
    }

    pub fn is_proper(&self) -> bool {
        self.top_right.x > self.bottom_left.x && self.top_right.y > self.bottom_left.y
    }

    pub fn width(&self) -> Coord {
        self.top_right.x - self.bottom_left.x
    }

    pub fn height(&self) -> Coord {
        self.top_right.y - self.bottom_left.y
    }

    pub fn translate(self, dx: Coord, dy: Coord) -> Self {
        Region {
            bottom_left: self.bottom_left.offset(dx, dy),
            top_right: self.top_right.offset(dx, dy),
        }
    }

    /// Smallest region containing both.
    pub fn union(self, other: Region) -> Self {
        Region {
            bottom_left: Point::new(
                self.bottom_left.x.min(other.bottom_left.x),
                self.bottom_left.y.min(other.bottom_left.y),
            ),
            top_right: Point::new(
                self.top_right.x.max(other.top_right.x),
                self.top_right.y.max(other.top_right.y),
            ),
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} .. {}]", self.bottom_left, self.top_right)
    }
}

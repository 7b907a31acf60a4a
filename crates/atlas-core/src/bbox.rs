//! Axis-aligned geographic bounding box.
//!
//! Boxes follow the upper-left / lower-right convention: `ul` is the corner
//! with minimum longitude and **maximum** latitude.  All box operations in
//! the engine — viewport clamping, quadrant descent, kd pruning — go through
//! this type; nothing else in the workspace does box math.

use crate::geo::{Axis, GeoPoint};

/// One quadrant of a box, in the fixed child order used by the tile index.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Quadrant {
    NorthWest,
    NorthEast,
    SouthWest,
    SouthEast,
}

impl Quadrant {
    pub const ALL: [Quadrant; 4] = [
        Quadrant::NorthWest,
        Quadrant::NorthEast,
        Quadrant::SouthWest,
        Quadrant::SouthEast,
    ];

    /// Child-array slot for this quadrant.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Quadrant::NorthWest => 0,
            Quadrant::NorthEast => 1,
            Quadrant::SouthWest => 2,
            Quadrant::SouthEast => 3,
        }
    }
}

/// An axis-aligned box from `ul` (upper-left) to `lr` (lower-right).
///
/// Invariant: `ul.lon <= lr.lon` and `ul.lat >= lr.lat` for every box built
/// from well-formed input.  [`clamped`](Self::clamped) may produce an
/// inverted box when the input lies entirely outside `self`; such a box
/// intersects nothing, which is exactly the behavior callers want.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingBox {
    pub ul: GeoPoint,
    pub lr: GeoPoint,
}

impl BoundingBox {
    #[inline]
    pub fn new(ul: GeoPoint, lr: GeoPoint) -> Self {
        Self { ul, lr }
    }

    /// Construct from the four corner coordinates in `(ul_lon, ul_lat,
    /// lr_lon, lr_lat)` order.
    #[inline]
    pub fn from_corners(ul_lon: f64, ul_lat: f64, lr_lon: f64, lr_lat: f64) -> Self {
        Self {
            ul: GeoPoint::new(ul_lon, ul_lat),
            lr: GeoPoint::new(lr_lon, lr_lat),
        }
    }

    /// Longitudinal extent.
    #[inline]
    pub fn width(&self) -> f64 {
        self.lr.lon - self.ul.lon
    }

    /// Latitudinal extent.
    #[inline]
    pub fn height(&self) -> f64 {
        self.ul.lat - self.lr.lat
    }

    #[inline]
    pub fn mid_lon(&self) -> f64 {
        (self.ul.lon + self.lr.lon) / 2.0
    }

    #[inline]
    pub fn mid_lat(&self) -> f64 {
        (self.ul.lat + self.lr.lat) / 2.0
    }

    /// `true` unless one box is strictly to the side of, or strictly
    /// above/below, the other.  Boxes sharing only an edge intersect.
    #[inline]
    pub fn intersects(&self, other: &BoundingBox) -> bool {
        if self.ul.lon > other.lr.lon || other.ul.lon > self.lr.lon {
            return false;
        }
        if self.ul.lat < other.lr.lat || other.ul.lat < self.lr.lat {
            return false;
        }
        true
    }

    /// `true` if `p` lies inside the box (boundary inclusive).
    #[inline]
    pub fn contains(&self, p: GeoPoint) -> bool {
        p.lon >= self.ul.lon && p.lon <= self.lr.lon
            && p.lat <= self.ul.lat && p.lat >= self.lr.lat
    }

    /// Squared Euclidean distance from `p` to the nearest point of the box;
    /// zero when `p` is inside.  This is the kd-tree pruning bound.
    pub fn distance2_to_point(&self, p: GeoPoint) -> f64 {
        let mut dlon = 0.0;
        let mut dlat = 0.0;

        if p.lon < self.ul.lon {
            dlon = self.ul.lon - p.lon;
        } else if p.lon > self.lr.lon {
            dlon = p.lon - self.lr.lon;
        }

        if p.lat > self.ul.lat {
            dlat = p.lat - self.ul.lat;
        } else if p.lat < self.lr.lat {
            dlat = self.lr.lat - p.lat;
        }

        dlon * dlon + dlat * dlat
    }

    /// Clamp a point into the box, coordinate by coordinate.
    ///
    /// Out-of-range query coordinates are policy-clamped before index
    /// queries rather than rejected.
    #[inline]
    pub fn clamp(&self, p: GeoPoint) -> GeoPoint {
        GeoPoint::new(
            p.lon.clamp(self.ul.lon, self.lr.lon),
            p.lat.clamp(self.lr.lat, self.ul.lat),
        )
    }

    /// Clamp another box into this one, corner by corner.
    ///
    /// A box entirely outside `self` comes back inverted (negative extent)
    /// and will intersect nothing.
    pub fn clamped(&self, other: &BoundingBox) -> BoundingBox {
        BoundingBox::from_corners(
            other.ul.lon.max(self.ul.lon),
            other.ul.lat.min(self.ul.lat),
            other.lr.lon.min(self.lr.lon),
            other.lr.lat.max(self.lr.lat),
        )
    }

    /// Split at `value` on `axis` into the half containing smaller
    /// coordinates and the half containing larger ones.
    ///
    /// On the latitude axis the "smaller" half is the *bottom* of the box.
    /// The splitting plane belongs to both halves.
    pub fn split(&self, axis: Axis, value: f64) -> (BoundingBox, BoundingBox) {
        match axis {
            Axis::Longitude => (
                BoundingBox::from_corners(self.ul.lon, self.ul.lat, value, self.lr.lat),
                BoundingBox::from_corners(value, self.ul.lat, self.lr.lon, self.lr.lat),
            ),
            Axis::Latitude => (
                BoundingBox::from_corners(self.ul.lon, value, self.lr.lon, self.lr.lat),
                BoundingBox::from_corners(self.ul.lon, self.ul.lat, self.lr.lon, value),
            ),
        }
    }

    /// The quarter of this box covering `quadrant`.  Adjacent quadrants
    /// share their boundary edge exactly.
    pub fn quadrant(&self, quadrant: Quadrant) -> BoundingBox {
        let mid_lon = self.mid_lon();
        let mid_lat = self.mid_lat();
        match quadrant {
            Quadrant::NorthWest => {
                BoundingBox::from_corners(self.ul.lon, self.ul.lat, mid_lon, mid_lat)
            }
            Quadrant::NorthEast => {
                BoundingBox::from_corners(mid_lon, self.ul.lat, self.lr.lon, mid_lat)
            }
            Quadrant::SouthWest => {
                BoundingBox::from_corners(self.ul.lon, mid_lat, mid_lon, self.lr.lat)
            }
            Quadrant::SouthEast => {
                BoundingBox::from_corners(mid_lon, mid_lat, self.lr.lon, self.lr.lat)
            }
        }
    }
}

impl std::fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{} .. {}]", self.ul, self.lr)
    }
}

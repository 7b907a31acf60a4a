//! Geographic coordinate type and planar distance.
//!
//! `GeoPoint` uses `f64` (double-precision) longitude/latitude.  The tile
//! pyramid's quadrant boundaries are produced by repeated halving of the
//! root box, and the halves must compare exactly equal during quadrant
//! descent — single precision would accumulate rounding at depth.
//!
//! All distances are plain Euclidean over `(lon, lat)` treated as planar
//! coordinates.  Route costs and the route-search heuristic use the same
//! metric, which is what makes the heuristic consistent.

/// Splitting axis for space partitioning, alternated by tree depth.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Axis {
    Longitude,
    Latitude,
}

impl Axis {
    /// The axis used at `depth` in a 2-d partition: longitude on even
    /// levels, latitude on odd.
    #[inline]
    pub fn at_depth(depth: usize) -> Axis {
        if depth % 2 == 0 { Axis::Longitude } else { Axis::Latitude }
    }
}

/// A geographic coordinate.  Longitude is the x-axis, latitude the y-axis;
/// latitude increases upward.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lon: f64,
    pub lat: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// The coordinate on `axis` — the single comparator shared by both
    /// split directions.
    #[inline]
    pub fn coord(self, axis: Axis) -> f64 {
        match axis {
            Axis::Longitude => self.lon,
            Axis::Latitude  => self.lat,
        }
    }

    /// Squared Euclidean distance.  Cheaper than [`distance`](Self::distance)
    /// and order-preserving, so all nearest-neighbor comparisons use it.
    #[inline]
    pub fn distance2(self, other: GeoPoint) -> f64 {
        let dlon = self.lon - other.lon;
        let dlat = self.lat - other.lat;
        dlon * dlon + dlat * dlat
    }

    /// Euclidean distance, used for route edge costs and the straight-line
    /// estimate to the route target.
    #[inline]
    pub fn distance(self, other: GeoPoint) -> f64 {
        self.distance2(other).sqrt()
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lon, self.lat)
    }
}

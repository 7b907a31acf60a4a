//! Raster composition: tile grid assembly and route overlay.

use image::{Rgba, RgbaImage};
use imageproc::drawing::draw_line_segment_mut;

use atlas_core::{BoundingBox, GeoPoint};
use atlas_tiles::TileHit;

use crate::error::{RasterError, RasterResult};
use crate::store::TileStore;

/// Route stroke width: roads are rarely wider than 5 px at any zoom.
pub const ROUTE_STROKE_WIDTH_PX: f32 = 5.0;

/// Route stroke color: cyan at ~78 % opacity.
pub const ROUTE_STROKE_COLOR: Rgba<u8> = Rgba([108, 181, 230, 200]);

/// Knobs for [`compose`].  `Default` matches the reference tile pyramid:
/// 256 px tiles and the standard route stroke.
#[derive(Clone, Debug)]
pub struct ComposeOptions {
    /// Edge length of every tile image, in pixels.
    pub tile_size: u32,
    pub stroke_width: f32,
    pub stroke_color: Rgba<u8>,
}

impl Default for ComposeOptions {
    fn default() -> Self {
        Self {
            tile_size:    256,
            stroke_width: ROUTE_STROKE_WIDTH_PX,
            stroke_color: ROUTE_STROKE_COLOR,
        }
    }
}

/// A composed raster and the metadata the gateway serializes alongside it.
#[derive(Debug)]
pub struct Raster {
    pub image: RgbaImage,
    /// Geographic box actually covered by the canvas (the union of the
    /// selected tiles — generally larger than the query viewport).
    pub bounds: BoundingBox,
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Zoom depth of the selected tiles (quadrant digits; root = 0).
    pub depth: u32,
    /// `false` when any tile fetch failed and its cell was left blank.
    pub complete: bool,
}

/// Compose a row-major tile selection into a single canvas, drawing the
/// route polyline over it when one is active.
///
/// `tiles` must be the ordered output of tile selection: upper-left
/// latitude descending, ties by longitude ascending, forming a complete
/// rectangular grid.
///
/// # Errors
///
/// [`RasterError::EmptyTileSet`] for an empty selection and
/// [`RasterError::NonRectangularGrid`] when the selection does not tile a
/// rectangle — both defects of the caller, not of the store.  Store
/// failures for individual tiles are *not* errors: the cell stays blank
/// and the result is flagged incomplete.
pub fn compose<S: TileStore + ?Sized>(
    tiles: &[TileHit],
    store: &S,
    route: Option<&[GeoPoint]>,
    opts: &ComposeOptions,
) -> RasterResult<Raster> {
    let (rows, cols) = grid_shape(tiles)?;
    let ts = opts.tile_size;

    let width = cols as u32 * ts;
    let height = rows as u32 * ts;
    let mut canvas = RgbaImage::new(width, height);
    let mut complete = true;

    for (i, pixels) in fetch_all(tiles, store).into_iter().enumerate() {
        let x = (i % cols) as i64 * ts as i64;
        let y = (i / cols) as i64 * ts as i64;
        match pixels {
            Some(tile) => image::imageops::replace(&mut canvas, &tile, x, y),
            None => {
                // Cell stays blank; the degradation is visible in the flag.
                log::warn!("tile {} unavailable, leaving blank cell", tiles[i].tile);
                complete = false;
            }
        }
    }

    let bounds = BoundingBox::new(tiles[0].bounds.ul, tiles[tiles.len() - 1].bounds.lr);

    if let Some(points) = route {
        draw_route(&mut canvas, bounds, points, opts);
    }

    Ok(Raster {
        image: canvas,
        bounds,
        width,
        height,
        depth: tiles[0].tile.depth(),
        complete,
    })
}

// ── Grid geometry ─────────────────────────────────────────────────────────────

/// Validate the row-major selection and return `(rows, cols)`.
///
/// Rows are runs of equal upper-left latitude; every run must have the
/// length of the first.
fn grid_shape(tiles: &[TileHit]) -> RasterResult<(usize, usize)> {
    if tiles.is_empty() {
        return Err(RasterError::EmptyTileSet);
    }

    let first_lat = tiles[0].bounds.ul.lat;
    let cols = tiles
        .iter()
        .take_while(|h| h.bounds.ul.lat == first_lat)
        .count();

    let rows = tiles.len() / cols;
    let rectangular = tiles.len() % cols == 0
        && tiles.chunks(cols).all(|row| {
            let lat = row[0].bounds.ul.lat;
            row.iter().all(|h| h.bounds.ul.lat == lat)
        })
        && tiles
            .chunks(cols)
            .map(|row| row[0].bounds.ul.lat)
            .is_sorted_by(|a, b| a > b);
    if !rectangular {
        return Err(RasterError::NonRectangularGrid { tiles: tiles.len(), rows });
    }
    Ok((rows, cols))
}

// ── Tile fetch ────────────────────────────────────────────────────────────────

#[cfg(feature = "parallel")]
fn fetch_all<S: TileStore + ?Sized>(tiles: &[TileHit], store: &S) -> Vec<Option<RgbaImage>> {
    use rayon::prelude::*;
    tiles
        .par_iter()
        .map(|hit| store.fetch(&hit.tile).ok())
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn fetch_all<S: TileStore + ?Sized>(tiles: &[TileHit], store: &S) -> Vec<Option<RgbaImage>> {
    tiles.iter().map(|hit| store.fetch(&hit.tile).ok()).collect()
}

// ── Route overlay ─────────────────────────────────────────────────────────────

fn draw_route(canvas: &mut RgbaImage, bounds: BoundingBox, points: &[GeoPoint], opts: &ComposeOptions) {
    let project = |p: GeoPoint| -> (f32, f32) {
        let x = (p.lon - bounds.ul.lon) / bounds.width() * canvas.width() as f64;
        let y = (bounds.ul.lat - p.lat) / bounds.height() * canvas.height() as f64;
        (x as f32, y as f32)
    };
    let projected: Vec<(f32, f32)> = points.iter().map(|&p| project(p)).collect();

    for pair in projected.windows(2) {
        draw_stroke(canvas, pair[0], pair[1], opts.stroke_width, opts.stroke_color);
    }
}

/// `draw_line_segment_mut` is single-pixel; a stroke is that segment
/// repeated at unit offsets perpendicular to its dominant axis.
fn draw_stroke(canvas: &mut RgbaImage, a: (f32, f32), b: (f32, f32), width: f32, color: Rgba<u8>) {
    let reach = (width / 2.0).floor() as i32;
    let steep = (b.1 - a.1).abs() > (b.0 - a.0).abs();

    for off in -reach..=reach {
        let off = off as f32;
        if steep {
            draw_line_segment_mut(canvas, (a.0 + off, a.1), (b.0 + off, b.1), color);
        } else {
            draw_line_segment_mut(canvas, (a.0, a.1 + off), (b.0, b.1 + off), color);
        }
    }
}

//! berkeley — smallest end-to-end demo of the rust_atlas map engine.
//!
//! Stands in for the API gateway: builds a synthetic downtown network over
//! the reference Berkeley tile extent, then runs one of each public
//! operation — snap, route, prefix search, name lookup, and a raster with
//! the active route drawn on it.  Tiles are generated in memory (flat
//! colors), so no scraped `img/` directory is needed.

mod network;

use anyhow::Result;
use image::{Rgba, RgbaImage};

use atlas_core::BoundingBox;
use atlas_engine::EngineBuilder;
use atlas_raster::MemoryTileStore;
use atlas_tiles::TileManifest;

use network::{DURANT_AND_TELEGRAPH, UNIVERSITY_AND_SHATTUCK, build_network};

// ── Constants ─────────────────────────────────────────────────────────────────

// Root bounding box of the scraped Berkeley tile pyramid.
const ROOT_UL_LON: f64 = -122.2998046875;
const ROOT_UL_LAT: f64 = 37.892195547244356;
const ROOT_LR_LON: f64 = -122.2119140625;
const ROOT_LR_LAT: f64 = 37.82280243352756;

/// Each tile is 256×256 pixels.
const TILE_SIZE: u32 = 256;
/// Zoom levels below the root tile.
const PYRAMID_DEPTH: u32 = 3;

const RASTER_OUT: &str = "berkeley_raster.png";

fn main() -> Result<()> {
    env_logger::init();

    let root = BoundingBox::from_corners(ROOT_UL_LON, ROOT_UL_LAT, ROOT_LR_LON, ROOT_LR_LAT);
    let manifest = TileManifest::new(root, TILE_SIZE, PYRAMID_DEPTH);
    let store = flat_color_store(&manifest);

    let engine = EngineBuilder::new(build_network()?, manifest).build()?;

    // ── Snap ──────────────────────────────────────────────────────────────
    let snapped = engine.nearest_node(-122.2679, 37.8714)?;
    println!("snap (-122.2679, 37.8714) -> {} {:?}", snapped.id, snapped.name);

    // ── Route ─────────────────────────────────────────────────────────────
    let path = engine.shortest_path(UNIVERSITY_AND_SHATTUCK, DURANT_AND_TELEGRAPH)?;
    println!(
        "route University&Shattuck -> Durant&Telegraph: {} nodes: {:?}",
        path.len(),
        path.iter().map(|n| n.0).collect::<Vec<_>>()
    );

    // ── Search ────────────────────────────────────────────────────────────
    println!("suggest 'dur' -> {:?}", engine.suggest_prefix("dur"));
    for loc in engine.locations_by_name("Durant Deli") {
        println!("location: {} at ({:.4}, {:.4})", loc.name, loc.lon, loc.lat);
    }

    // ── Raster with the active route ──────────────────────────────────────
    let viewport = BoundingBox::from_corners(-122.2750, 37.8740, -122.2550, 37.8650);
    let raster = engine.raster(&viewport, 512, Some(&path), &store)?;
    println!(
        "raster: {}x{} px, depth {}, bounds {}, complete: {}",
        raster.width, raster.height, raster.depth, raster.bounds, raster.complete
    );
    raster.image.save(RASTER_OUT)?;
    println!("wrote {RASTER_OUT}");

    Ok(())
}

/// One flat-colored image per manifest tile, shaded by zoom depth so grid
/// seams are visible in the output.
fn flat_color_store(manifest: &TileManifest) -> MemoryTileStore {
    let mut store = MemoryTileStore::new();
    for (id, _) in manifest.tiles() {
        let shade = 200u8.saturating_sub(40 * id.depth() as u8);
        let pixels = RgbaImage::from_pixel(
            manifest.tile_size,
            manifest.tile_size,
            Rgba([shade, shade, 255, 255]),
        );
        store.insert(id, pixels);
    }
    store
}

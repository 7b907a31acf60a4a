//! Synthetic downtown Berkeley road network.
//!
//! A dozen hand-placed intersections inside the reference root box, laid
//! out as two east–west avenues crossed by three north–south streets,
//! with a few named storefront nodes.  Coordinates are real downtown
//! lon/lats rounded to four decimals — close enough that snapping and
//! rasters land where a map reader expects them.

use atlas_core::{GeoPoint, NodeId};
use atlas_graph::{GraphResult, MapNode, RoadGraph, RoadGraphBuilder};

/// Node ids used by `main` for demo queries.
pub const UNIVERSITY_AND_SHATTUCK: NodeId = NodeId(10);
pub const DURANT_AND_TELEGRAPH:    NodeId = NodeId(22);

pub fn build_network() -> GraphResult<RoadGraph> {
    let mut b = RoadGraphBuilder::new();

    // University Ave (north avenue), west to east.
    let u_mlk = b.add_node(node(9, -122.2730, 37.8715));
    let u_shattuck = b.add_node(
        named(UNIVERSITY_AND_SHATTUCK.0, -122.2680, 37.8716, "University and Shattuck"),
    );
    let u_oxford = b.add_node(node(11, -122.2660, 37.8717));

    // Durant Ave (south avenue), west to east.
    let d_mlk = b.add_node(node(20, -122.2728, 37.8674));
    let d_shattuck = b.add_node(node(21, -122.2678, 37.8675));
    let d_telegraph = b.add_node(
        named(DURANT_AND_TELEGRAPH.0, -122.2590, 37.8677, "Durant and Telegraph"),
    );

    // Storefronts hanging off their nearest intersection.
    let bakery = b.add_node(named(30, -122.2682, 37.8700, "Bancroft Bakery"));
    let cafe = b.add_node(named(31, -122.2662, 37.8690, "Strada Cafe"));
    let deli = b.add_node(named(32, -122.2592, 37.8680, "Durant Deli"));

    // Avenues.
    b.add_edge(u_mlk, u_shattuck)?;
    b.add_edge(u_shattuck, u_oxford)?;
    b.add_edge(d_mlk, d_shattuck)?;
    b.add_edge(d_shattuck, d_telegraph)?;

    // Cross streets.
    b.add_edge(u_mlk, d_mlk)?;
    b.add_edge(u_shattuck, d_shattuck)?;

    // Storefront spurs.
    b.add_edge(bakery, u_shattuck)?;
    b.add_edge(cafe, u_oxford)?;
    b.add_edge(deli, d_telegraph)?;

    Ok(b.build())
}

fn node(id: u64, lon: f64, lat: f64) -> MapNode {
    MapNode::new(NodeId(id), GeoPoint::new(lon, lat)).routable()
}

fn named(id: u64, lon: f64, lat: f64, name: &str) -> MapNode {
    node(id, lon, lat).with_name(name)
}

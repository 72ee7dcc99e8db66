use bbox_bridge::{Rectangle, convert};
use geo::{Contains, Geometry, Intersects, coord, line_string, point, polygon};
use rstar::{AABB, RTree};

fn features() -> Vec<Geometry<f64>> {
	vec![
		Geometry::Point(point!(x: 1.0, y: 1.0)),
		Geometry::LineString(line_string![(x: 2.0, y: 2.0), (x: 6.0, y: 3.0)]),
		Geometry::Polygon(polygon![(x: 10.0, y: 10.0), (x: 14.0, y: 10.0), (x: 12.0, y: 13.0)]),
		Geometry::Point(point!(x: -5.0, y: 7.5)),
	]
}

#[test]
fn rectangles_key_an_rtree() {
	let tree = RTree::bulk_load(features().iter().map(convert::geometry_to_rectangle).collect());
	assert_eq!(tree.size(), 4);

	let window = AABB::from_corners([0.0, 0.0], [5.0, 5.0]);
	let mut hits: Vec<[f32; 4]> = tree
		.locate_in_envelope_intersecting(&window)
		.map(Rectangle::as_array)
		.collect();
	hits.sort_by(|a, b| a[0].total_cmp(&b[0]));
	assert_eq!(hits, vec![[1.0, 1.0, 1.0, 1.0], [2.0, 2.0, 6.0, 3.0]]);
}

#[test]
fn query_window_from_polygon_round_trip() {
	let tree = RTree::bulk_load(features().iter().map(convert::geometry_to_rectangle).collect());

	let query = Rectangle::new(9.0, 9.0, 15.0, 15.0).unwrap();
	let hits: Vec<&Rectangle> = tree.locate_in_envelope(&AABB::from(query)).collect();
	assert_eq!(hits.len(), 1);

	let outline = convert::rectangle_to_polygon(hits[0]);
	let features = features();
	assert!(outline.intersects(&features[2]));
	assert!(outline.contains(&coord! { x: 12.0, y: 11.0 }));
}

#[test]
fn segment_rectangles_are_symmetric_in_a_tree() {
	let forward = convert::segment_to_rectangle(coord! { x: 5.0, y: 5.0 }, coord! { x: 1.0, y: 9.0 });
	let backward = convert::segment_to_rectangle(coord! { x: 1.0, y: 9.0 }, coord! { x: 5.0, y: 5.0 });
	let mut tree = RTree::new();
	tree.insert(forward);
	assert!(tree.contains(&backward));
}

#[test]
fn std_conversions_agree_with_functions() {
	let rectangle = Rectangle::new(-2.5, 0.5, 3.0, 8.0).unwrap();
	let rect: geo::Rect<f64> = rectangle.into();
	assert_eq!(rect, convert::rectangle_to_rect(&rectangle));
	assert_eq!(Rectangle::from(rect), rectangle);

	let polygon: geo::Polygon<f64> = rectangle.into();
	assert_eq!(polygon, convert::rectangle_to_polygon(&rectangle));
}

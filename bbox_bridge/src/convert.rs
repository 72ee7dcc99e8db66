//! Conversions between [`Rectangle`], `geo` envelopes and `geo` polygons.
//!
//! All functions are pure and total. Converting from `f64` to `f32` rounds to the
//! nearest representable value (ties to even), and values beyond the `f32` range
//! become infinite. Rounding is monotonic, so the ordering `min <= max` is kept
//! on both axes. Callers that need full precision must keep the `f64` value.

use crate::{HasExtent, Rectangle};
use geo_types::{Coord, Line, LineString, Polygon, Rect};
use log::{debug, trace};

/// Widens a [`Rectangle`] into a `geo` envelope. The conversion is exact.
///
/// # Examples
/// ```
/// use bbox_bridge::{Rectangle, convert::rectangle_to_rect};
///
/// let rect = rectangle_to_rect(&Rectangle::new(1.0, 2.0, 3.0, 4.0).unwrap());
/// assert_eq!((rect.min().x, rect.min().y), (1.0, 2.0));
/// assert_eq!((rect.max().x, rect.max().y), (3.0, 4.0));
/// ```
#[must_use]
pub fn rectangle_to_rect(rectangle: &Rectangle) -> Rect<f64> {
	Rect::new(
		Coord {
			x: f64::from(rectangle.x_min()),
			y: f64::from(rectangle.y_min()),
		},
		Coord {
			x: f64::from(rectangle.x_max()),
			y: f64::from(rectangle.y_max()),
		},
	)
}

/// Narrows a `geo` envelope into a [`Rectangle`]. This loses precision.
#[must_use]
pub fn rect_to_rectangle(rect: &Rect<f64>) -> Rectangle {
	let (min, max) = (rect.min(), rect.max());
	Rectangle::new_unchecked(narrow(min.x), narrow(min.y), narrow(max.x), narrow(max.y))
}

/// Returns the envelope of any geometry as a [`Rectangle`].
///
/// Points and other zero-area geometries give a degenerate rectangle.
/// Empty geometries have no envelope and give the zero-size rectangle at the origin.
///
/// # Examples
/// ```
/// use bbox_bridge::convert::geometry_to_rectangle;
/// use geo::line_string;
///
/// let line = line_string![(x: 3.0, y: 1.0), (x: -1.0, y: 2.0), (x: 0.0, y: 7.5)];
/// assert_eq!(geometry_to_rectangle(&line).as_array(), [-1.0, 1.0, 3.0, 7.5]);
/// ```
#[must_use]
pub fn geometry_to_rectangle<G: HasExtent + ?Sized>(geometry: &G) -> Rectangle {
	if let Some(rect) = geometry.extent() {
		rect_to_rectangle(&rect)
	} else {
		trace!("empty geometry has no extent, using the origin");
		Rectangle::new_unchecked(0.0, 0.0, 0.0, 0.0)
	}
}

/// Returns the bounding box of the segment between two points.
///
/// The points may be given in any order. A NaN coordinate is ignored in favour of the
/// other point; if both points are NaN on an axis, that axis of the result is NaN.
///
/// # Examples
/// ```
/// use bbox_bridge::convert::segment_to_rectangle;
/// use geo::coord;
///
/// let rectangle = segment_to_rectangle(coord! { x: 5.0, y: 5.0 }, coord! { x: 1.0, y: 9.0 });
/// assert_eq!(rectangle.as_array(), [1.0, 5.0, 5.0, 9.0]);
/// ```
#[must_use]
pub fn segment_to_rectangle(p0: Coord<f64>, p1: Coord<f64>) -> Rectangle {
	Rectangle::new_unchecked(
		narrow(p0.x.min(p1.x)),
		narrow(p0.y.min(p1.y)),
		narrow(p0.x.max(p1.x)),
		narrow(p0.y.max(p1.y)),
	)
}

/// Returns the bounding box of a line segment, see [`segment_to_rectangle`].
#[must_use]
pub fn line_to_rectangle(line: &Line<f64>) -> Rectangle {
	segment_to_rectangle(line.start, line.end)
}

/// Builds the polygon covering a [`Rectangle`].
///
/// The exterior ring runs counter-clockwise from the bottom-left corner:
/// `(x_min, y_min)`, `(x_max, y_min)`, `(x_max, y_max)`, `(x_min, y_max)` and back to
/// `(x_min, y_min)`. The polygon has no holes. A degenerate rectangle gives a
/// zero-area polygon that still has all five ring coordinates.
///
/// # Examples
/// ```
/// use bbox_bridge::{Rectangle, convert::rectangle_to_polygon};
///
/// let polygon = rectangle_to_polygon(&Rectangle::new(0.0, 0.0, 10.0, 5.0).unwrap());
/// let ring: Vec<(f64, f64)> = polygon.exterior().coords().map(|c| (c.x, c.y)).collect();
/// assert_eq!(ring, vec![(0.0, 0.0), (10.0, 0.0), (10.0, 5.0), (0.0, 5.0), (0.0, 0.0)]);
/// ```
#[must_use]
pub fn rectangle_to_polygon(rectangle: &Rectangle) -> Polygon<f64> {
	let x_min = f64::from(rectangle.x_min());
	let y_min = f64::from(rectangle.y_min());
	let x_max = f64::from(rectangle.x_max());
	let y_max = f64::from(rectangle.y_max());
	Polygon::new(
		LineString::from(vec![
			(x_min, y_min),
			(x_max, y_min),
			(x_max, y_max),
			(x_min, y_max),
			(x_min, y_min),
		]),
		vec![],
	)
}

fn narrow(value: f64) -> f32 {
	let narrowed = value as f32;
	if value.is_finite() && narrowed.is_infinite() {
		debug!("coordinate {value} exceeds the f32 range and becomes {narrowed}");
	}
	narrowed
}

//! The capability of exposing an envelope.
//!
//! [`HasExtent`] is the only thing [`crate::convert::geometry_to_rectangle`] requires of a
//! geometry, so the conversions stay independent of any concrete geometry type. It is
//! implemented for all `geo` geometries in double precision and for [`Rectangle`].

use crate::Rectangle;
use geo::{
	BoundingRect, Coord, Geometry, GeometryCollection, Line, LineString, MultiLineString, MultiPoint, MultiPolygon,
	Point, Polygon, Rect, Triangle,
};

/// A geometry that can report its minimal axis-aligned bounding box.
pub trait HasExtent {
	/// Returns the envelope of the geometry, or `None` if the geometry is empty.
	fn extent(&self) -> Option<Rect<f64>>;
}

macro_rules! impl_has_extent {
	($($t:ty),*) => {$(
		impl HasExtent for $t {
			fn extent(&self) -> Option<Rect<f64>> {
				self.bounding_rect().into()
			}
		}
	)*}
}

impl_has_extent!(
	Point<f64>,
	Line<f64>,
	LineString<f64>,
	Polygon<f64>,
	MultiPoint<f64>,
	MultiLineString<f64>,
	MultiPolygon<f64>,
	Rect<f64>,
	Triangle<f64>,
	Geometry<f64>,
	GeometryCollection<f64>
);

impl HasExtent for Coord<f64> {
	fn extent(&self) -> Option<Rect<f64>> {
		Some(Rect::new(*self, *self))
	}
}

impl HasExtent for Rectangle {
	/// Widens the rectangle, see [`crate::convert::rectangle_to_rect`].
	fn extent(&self) -> Option<Rect<f64>> {
		Some(crate::convert::rectangle_to_rect(self))
	}
}

use anyhow::{Context, Result, ensure};
use geo_types::{Polygon, Rect};
use rstar::{AABB, RTreeObject};
use std::fmt::Debug;

/// An axis-aligned rectangle in single precision, as used for spatial index keys.
///
/// The rectangle is defined by four `f32` values:
/// - `x_min`: Minimum x coordinate.
/// - `y_min`: Minimum y coordinate.
/// - `x_max`: Maximum x coordinate.
/// - `y_max`: Maximum y coordinate.
///
/// The fields are read through accessors, so a `Rectangle` cannot be changed after
/// construction. It satisfies `x_min <= x_max` and `y_min <= y_max` unless it was built
/// from NaN coordinates by one of the total conversions, see [`Rectangle::from_corners`].
/// It can be stored directly in an [`rstar::RTree`], and converted to and from
/// [`geo::Rect<f64>`] through the functions in [`crate::convert`].
///
/// # Examples
///
/// ```
/// use bbox_bridge::Rectangle;
///
/// let rectangle = Rectangle::new(0.0, 0.0, 10.0, 5.0).unwrap();
/// assert_eq!(rectangle.as_tuple(), (0.0, 0.0, 10.0, 5.0));
/// assert_eq!(rectangle.width(), 10.0);
/// ```
///
/// The fields cannot be written:
///
/// ```compile_fail
/// use bbox_bridge::Rectangle;
///
/// let mut rectangle = Rectangle::new(0.0, 0.0, 10.0, 5.0).unwrap();
/// rectangle.x_min = 20.0;
/// ```
#[derive(Clone, Copy, PartialEq)]
pub struct Rectangle {
	x_min: f32,
	y_min: f32,
	x_max: f32,
	y_max: f32,
}

impl Rectangle {
	/// Creates a new `Rectangle` from `x_min, y_min, x_max, y_max`.
	///
	/// Fails if a minimum is greater than its maximum, or if any value is NaN.
	///
	/// # Examples
	/// ```
	/// use bbox_bridge::Rectangle;
	///
	/// assert!(Rectangle::new(1.0, 2.0, 3.0, 4.0).is_ok());
	/// assert!(Rectangle::new(3.0, 2.0, 1.0, 4.0).is_err());
	/// ```
	#[must_use = "Rectangle::new returns a Result; handle the error or unwrap"]
	pub fn new(x_min: f32, y_min: f32, x_max: f32, y_max: f32) -> Result<Rectangle> {
		Rectangle::new_unchecked(x_min, y_min, x_max, y_max).checked()
	}

	/// Creates a `Rectangle` spanning two arbitrary corners.
	///
	/// The corners may be given in any order; minimum and maximum are computed per axis.
	/// A NaN on one side of an axis is ignored. If both values of an axis are NaN, the
	/// rectangle holds NaN on that axis and does not satisfy `min <= max` there.
	///
	/// # Examples
	/// ```
	/// use bbox_bridge::Rectangle;
	///
	/// let rectangle = Rectangle::from_corners(5.0, 5.0, 1.0, 9.0);
	/// assert_eq!(rectangle.as_array(), [1.0, 5.0, 5.0, 9.0]);
	/// ```
	#[must_use]
	pub fn from_corners(x0: f32, y0: f32, x1: f32, y1: f32) -> Rectangle {
		Rectangle::new_unchecked(x0.min(x1), y0.min(y1), x0.max(x1), y0.max(y1))
	}

	/// Builds a rectangle from fields that are already ordered.
	pub(crate) fn new_unchecked(x_min: f32, y_min: f32, x_max: f32, y_max: f32) -> Rectangle {
		Rectangle {
			x_min,
			y_min,
			x_max,
			y_max,
		}
	}

	#[must_use]
	pub fn x_min(&self) -> f32 {
		self.x_min
	}

	#[must_use]
	pub fn y_min(&self) -> f32 {
		self.y_min
	}

	#[must_use]
	pub fn x_max(&self) -> f32 {
		self.x_max
	}

	#[must_use]
	pub fn y_max(&self) -> f32 {
		self.y_max
	}

	/// Returns the rectangle as `[x_min, y_min, x_max, y_max]`.
	#[must_use]
	pub fn as_array(&self) -> [f32; 4] {
		[self.x_min, self.y_min, self.x_max, self.y_max]
	}

	/// Returns the rectangle as a tuple `(x_min, y_min, x_max, y_max)`.
	#[must_use]
	pub fn as_tuple(&self) -> (f32, f32, f32, f32) {
		(self.x_min, self.y_min, self.x_max, self.y_max)
	}

	#[must_use]
	pub fn width(&self) -> f32 {
		self.x_max - self.x_min
	}

	#[must_use]
	pub fn height(&self) -> f32 {
		self.y_max - self.y_min
	}

	/// Returns `true` if the rectangle has zero width or zero height.
	#[must_use]
	pub fn is_degenerate(&self) -> bool {
		self.x_min == self.x_max || self.y_min == self.y_max
	}

	fn checked(self) -> Result<Self> {
		ensure!(
			self.x_min <= self.x_max,
			"x_min ({}) must be <= x_max ({})",
			self.x_min,
			self.x_max
		);
		ensure!(
			self.y_min <= self.y_max,
			"y_min ({}) must be <= y_max ({})",
			self.y_min,
			self.y_max
		);
		Ok(self)
	}
}

impl Debug for Rectangle {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		// Renders e.g. "Rectangle(0, 0, 10, 5)"
		write!(
			f,
			"Rectangle({}, {}, {}, {})",
			self.x_min, self.y_min, self.x_max, self.y_max
		)
	}
}

impl TryFrom<[f32; 4]> for Rectangle {
	type Error = anyhow::Error;

	/// Converts `[x_min, y_min, x_max, y_max]` into a `Rectangle`.
	fn try_from(input: [f32; 4]) -> Result<Self> {
		Rectangle::new(input[0], input[1], input[2], input[3])
	}
}

impl TryFrom<&[f32]> for Rectangle {
	type Error = anyhow::Error;

	/// Converts a slice of exactly four values `[x_min, y_min, x_max, y_max]`
	/// into a `Rectangle`.
	///
	/// # Examples
	/// ```
	/// use bbox_bridge::Rectangle;
	///
	/// let values: Vec<f32> = vec![1.0, 2.0, 3.0, 4.0];
	/// let rectangle = Rectangle::try_from(values.as_slice()).unwrap();
	/// assert_eq!(rectangle.as_array(), [1.0, 2.0, 3.0, 4.0]);
	///
	/// assert!(Rectangle::try_from(&values[..3]).is_err());
	/// ```
	fn try_from(input: &[f32]) -> Result<Self> {
		ensure!(
			input.len() == 4,
			"Rectangle must have 4 elements (x_min, y_min, x_max, y_max), got {}",
			input.len()
		);
		Rectangle::new(input[0], input[1], input[2], input[3])
			.with_context(|| format!("Failed to convert {input:?} to Rectangle"))
	}
}

impl TryFrom<Vec<f32>> for Rectangle {
	type Error = anyhow::Error;

	fn try_from(input: Vec<f32>) -> Result<Self> {
		Rectangle::try_from(input.as_slice())
	}
}

impl From<AABB<[f32; 2]>> for Rectangle {
	/// `AABB` keeps its corners ordered, so no reordering takes place.
	/// NaN corners are copied unchanged.
	fn from(aabb: AABB<[f32; 2]>) -> Self {
		let [x_min, y_min] = aabb.lower();
		let [x_max, y_max] = aabb.upper();
		Rectangle::new_unchecked(x_min, y_min, x_max, y_max)
	}
}

impl From<Rectangle> for AABB<[f32; 2]> {
	fn from(rectangle: Rectangle) -> Self {
		AABB::from_corners(
			[rectangle.x_min, rectangle.y_min],
			[rectangle.x_max, rectangle.y_max],
		)
	}
}

impl From<Rect<f64>> for Rectangle {
	/// Narrows to single precision, see [`crate::convert::rect_to_rectangle`].
	fn from(rect: Rect<f64>) -> Self {
		crate::convert::rect_to_rectangle(&rect)
	}
}

impl From<Rectangle> for Rect<f64> {
	fn from(rectangle: Rectangle) -> Self {
		crate::convert::rectangle_to_rect(&rectangle)
	}
}

impl From<Rectangle> for Polygon<f64> {
	fn from(rectangle: Rectangle) -> Self {
		crate::convert::rectangle_to_polygon(&rectangle)
	}
}

impl RTreeObject for Rectangle {
	type Envelope = AABB<[f32; 2]>;

	fn envelope(&self) -> Self::Envelope {
		AABB::from(*self)
	}
}

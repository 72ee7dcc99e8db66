//! Converts bounding boxes between the single-precision [`Rectangle`] used as an
//! [`rstar`] index key and the double-precision envelopes and polygons of [`geo`].
//!
//! ```
//! use bbox_bridge::{Rectangle, convert};
//! use geo::{Area, point};
//!
//! let rectangle = convert::geometry_to_rectangle(&point!(x: 1.0, y: 2.0));
//! assert!(rectangle.is_degenerate());
//!
//! let polygon = convert::rectangle_to_polygon(&Rectangle::new(0.0, 0.0, 4.0, 2.0).unwrap());
//! assert_eq!(polygon.signed_area(), 8.0);
//! ```

pub mod convert;
mod extent;
mod rectangle;

pub use extent::*;
pub use rectangle::*;

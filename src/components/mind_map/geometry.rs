//! Path construction for the renderer, kept free of any canvas types so it
//! can be exercised without a drawing surface.

use super::types::Point;

/// A rectangle with a top-left origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
	pub x: f64,
	pub y: f64,
	pub width: f64,
	pub height: f64,
}

/// Per-corner radii, clockwise from the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CornerRadii {
	pub top_left: f64,
	pub top_right: f64,
	pub bottom_right: f64,
	pub bottom_left: f64,
}

impl CornerRadii {
	/// The same radius on all four corners.
	pub fn uniform(radius: f64) -> Self {
		Self {
			top_left: radius,
			top_right: radius,
			bottom_right: radius,
			bottom_left: radius,
		}
	}
}

/// One segment of an outline path.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
	MoveTo(Point),
	LineTo(Point),
	/// Quadratic curve towards `to`, bent by `ctrl`.
	QuadTo { ctrl: Point, to: Point },
	Close,
}

/// Closed clockwise outline of a rounded rectangle, starting on the top edge.
/// Each corner is a quadratic curve whose control point is the corner of the
/// enclosing rectangle.
pub fn rounded_rect_path(rect: Rect, radii: CornerRadii) -> Vec<PathCommand> {
	let Rect { x, y, width, height } = rect;
	vec![
		PathCommand::MoveTo(Point::new(x + radii.top_left, y)),
		PathCommand::LineTo(Point::new(x + width - radii.top_right, y)),
		PathCommand::QuadTo {
			ctrl: Point::new(x + width, y),
			to: Point::new(x + width, y + radii.top_right),
		},
		PathCommand::LineTo(Point::new(x + width, y + height - radii.bottom_right)),
		PathCommand::QuadTo {
			ctrl: Point::new(x + width, y + height),
			to: Point::new(x + width - radii.bottom_right, y + height),
		},
		PathCommand::LineTo(Point::new(x + radii.bottom_left, y + height)),
		PathCommand::QuadTo {
			ctrl: Point::new(x, y + height),
			to: Point::new(x, y + height - radii.bottom_left),
		},
		PathCommand::LineTo(Point::new(x, y + radii.top_left)),
		PathCommand::QuadTo {
			ctrl: Point::new(x, y),
			to: Point::new(x + radii.top_left, y),
		},
		PathCommand::Close,
	]
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn uniform_outline_starts_and_ends_on_the_top_edge() {
		let path = rounded_rect_path(
			Rect {
				x: 10.0,
				y: 20.0,
				width: 100.0,
				height: 50.0,
			},
			CornerRadii::uniform(10.0),
		);

		assert_eq!(path.len(), 10);
		assert_eq!(path[0], PathCommand::MoveTo(Point::new(20.0, 20.0)));
		assert_eq!(
			path[8],
			PathCommand::QuadTo {
				ctrl: Point::new(10.0, 20.0),
				to: Point::new(20.0, 20.0),
			}
		);
		assert_eq!(path[9], PathCommand::Close);
	}

	#[test]
	fn asymmetric_radii_shape_each_corner_independently() {
		let path = rounded_rect_path(
			Rect {
				x: 0.0,
				y: 0.0,
				width: 100.0,
				height: 50.0,
			},
			CornerRadii {
				top_left: 0.0,
				top_right: 5.0,
				bottom_right: 10.0,
				bottom_left: 20.0,
			},
		);

		// A zero top-left radius degenerates into the actual corner point.
		assert_eq!(path[0], PathCommand::MoveTo(Point::new(0.0, 0.0)));
		// Top-right corner curve lands 5 units down the right edge.
		assert_eq!(
			path[2],
			PathCommand::QuadTo {
				ctrl: Point::new(100.0, 0.0),
				to: Point::new(100.0, 5.0),
			}
		);
		// Bottom-left curve starts 20 units in from the left.
		assert_eq!(path[5], PathCommand::LineTo(Point::new(20.0, 50.0)));
	}
}

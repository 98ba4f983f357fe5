//! Plain data types shared by the store, controller and renderer.

/// Fixed logical width of the drawing surface.
pub const CANVAS_WIDTH: f64 = 800.0;
/// Fixed logical height of the drawing surface.
pub const CANVAS_HEIGHT: f64 = 600.0;

/// Every node renders as a fixed-size box.
pub const NODE_WIDTH: f64 = 100.0;
/// See [`NODE_WIDTH`].
pub const NODE_HEIGHT: f64 = 50.0;

/// Store-assigned node identifier. Monotonic, never reused after deletion.
pub type NodeId = u64;

/// A position (or offset) in canvas coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
	pub x: f64,
	pub y: f64,
}

impl Point {
	pub fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}
}

/// A labeled, positioned, colored graph vertex. `(x, y)` is the top-left
/// corner of its box.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
	pub id: NodeId,
	pub label: String,
	pub x: f64,
	pub y: f64,
	/// CSS color string, e.g. `hsl(210, 100%, 75%)`.
	pub color: String,
}

impl Node {
	/// Whether `point` falls inside this node's bounding box.
	pub fn contains(&self, point: Point) -> bool {
		point.x >= self.x
			&& point.x <= self.x + NODE_WIDTH
			&& point.y >= self.y
			&& point.y <= self.y + NODE_HEIGHT
	}

	/// Center of the bounding box, where links attach and the label sits.
	pub fn center(&self) -> Point {
		Point::new(self.x + NODE_WIDTH / 2.0, self.y + NODE_HEIGHT / 2.0)
	}
}

/// An undirected edge between two node ids.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Link {
	pub source: NodeId,
	pub target: NodeId,
}

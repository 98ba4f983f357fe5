//! The graph store owns every node and link and applies all mutations.
//!
//! Invariants it maintains:
//! - node ids are assigned from a monotonic counter and never reused, so a
//!   deleted node's id can never be confused with a live one;
//! - a link never outlives either endpoint: deleting a node removes its links
//!   in the same call.

use thiserror::Error;

use super::types::{CANVAS_HEIGHT, CANVAS_WIDTH, Link, Node, NODE_HEIGHT, NODE_WIDTH, NodeId, Point};

/// Validation outcomes for store mutations. Always a no-op on the store.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum StoreError {
	#[error("label must not be empty")]
	EmptyLabel,
	#[error("no node with id {0}")]
	NotFound(NodeId),
}

/// Deterministic generator for spawn positions and hues, seedable so tests
/// get reproducible layouts.
#[derive(Clone, Debug)]
struct Lcg(u64);

impl Lcg {
	fn next(&mut self) -> f64 {
		self.0 = (self.0.wrapping_mul(9301).wrapping_add(49297)) % 233_280;
		self.0 as f64 / 233_280.0
	}
}

/// Owns the nodes and links of one diagram.
#[derive(Clone, Debug)]
pub struct GraphStore {
	nodes: Vec<Node>,
	links: Vec<Link>,
	next_id: NodeId,
	rng: Lcg,
}

impl GraphStore {
	pub fn new() -> Self {
		Self::with_seed(0)
	}

	/// A store whose spawn positions and colors derive from `seed`.
	pub fn with_seed(seed: u64) -> Self {
		Self {
			nodes: Vec::new(),
			links: Vec::new(),
			next_id: 0,
			rng: Lcg(seed),
		}
	}

	/// Nodes in creation order; later nodes render on top.
	pub fn nodes(&self) -> &[Node] {
		&self.nodes
	}

	pub fn links(&self) -> &[Link] {
		&self.links
	}

	pub fn node(&self, id: NodeId) -> Option<&Node> {
		self.nodes.iter().find(|node| node.id == id)
	}

	/// Creates a node with the next unused id at a random position chosen so
	/// the whole box stays on-canvas, with a random fully-saturated color.
	pub fn create_node(&mut self, label: &str) -> Result<&Node, StoreError> {
		let label = label.trim();
		if label.is_empty() {
			return Err(StoreError::EmptyLabel);
		}

		let id = self.next_id;
		self.next_id += 1;

		let x = self.rng.next() * (CANVAS_WIDTH - NODE_WIDTH);
		let y = self.rng.next() * (CANVAS_HEIGHT - NODE_HEIGHT);
		let hue = self.rng.next() * 360.0;

		self.nodes.push(Node {
			id,
			label: label.to_owned(),
			x,
			y,
			color: format!("hsl({}, 100%, 75%)", hue as u32),
		});
		Ok(self.nodes.last().unwrap())
	}

	/// Replaces a node's label in place, keeping id and position.
	pub fn rename_node(&mut self, id: NodeId, label: &str) -> Result<(), StoreError> {
		let label = label.trim();
		if label.is_empty() {
			return Err(StoreError::EmptyLabel);
		}
		let node = self
			.nodes
			.iter_mut()
			.find(|node| node.id == id)
			.ok_or(StoreError::NotFound(id))?;
		node.label = label.to_owned();
		Ok(())
	}

	/// Unconditionally overwrites a node's position. No clamping: a drag may
	/// leave a node partly or fully off-canvas. No-op for a dead id.
	pub fn move_node(&mut self, id: NodeId, to: Point) {
		if let Some(node) = self.nodes.iter_mut().find(|node| node.id == id) {
			node.x = to.x;
			node.y = to.y;
		}
	}

	/// Removes a node and every link referencing it in one step.
	pub fn delete_node(&mut self, id: NodeId) {
		self.nodes.retain(|node| node.id != id);
		self.links
			.retain(|link| link.source != id && link.target != id);
	}

	/// Appends a link between two live, distinct nodes. Self-links and dead
	/// endpoints are silently skipped. Duplicate pairs are not rejected.
	pub fn create_link(&mut self, source: NodeId, target: NodeId) {
		if source == target {
			return;
		}
		if self.node(source).is_none() || self.node(target).is_none() {
			return;
		}
		self.links.push(Link { source, target });
	}

	/// The topmost node under `point`, if any. Nodes created later sit on top,
	/// so the scan runs from the back of the list.
	pub fn find_node_at(&self, point: Point) -> Option<&Node> {
		self.nodes.iter().rev().find(|node| node.contains(point))
	}
}

impl Default for GraphStore {
	fn default() -> Self {
		Self::new()
	}
}

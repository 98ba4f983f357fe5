//! Pointer-driven interaction state machine.
//!
//! Raw canvas input arrives as four events: pointer down, move, up, and click
//! (the browser fires click after the up of a simple tap). Down/move/up drive
//! dragging; the click stream independently drives selection and the two-click
//! connect gesture. Keeping the two streams apart is what stops a drag from
//! being read as a link attempt.

use thiserror::Error;

use super::store::{GraphStore, StoreError};
use super::types::{NodeId, Point};

/// A raw input event in canvas coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
	Down(Point),
	Move(Point),
	Up,
	Click(Point),
}

/// Non-fatal, user-facing outcomes of toolbar operations.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum Notice {
	#[error("select a node first")]
	NothingSelected,
	#[error("label must not be empty")]
	EmptyLabel,
}

/// Live only between a pointer-down hit on a node and the matching up.
#[derive(Clone, Copy, Debug, PartialEq)]
struct DragSession {
	node: NodeId,
	/// Pointer position relative to the node origin at grab time, so the node
	/// does not jump under the cursor on the first move.
	grab: Point,
}

/// Interprets pointer input against the store's current geometry and applies
/// the resulting mutations.
#[derive(Debug, Default)]
pub struct InteractionController {
	drag: Option<DragSession>,
	selected: Option<NodeId>,
	pending_link_source: Option<NodeId>,
}

impl InteractionController {
	pub fn new() -> Self {
		Self::default()
	}

	/// The node currently highlighted, target of delete/rename.
	pub fn selected(&self) -> Option<NodeId> {
		self.selected
	}

	/// First node of an in-progress connect gesture, if any.
	pub fn pending_link_source(&self) -> Option<NodeId> {
		self.pending_link_source
	}

	/// Feeds one event through the state machine. Returns whether anything
	/// changed that warrants a redraw.
	pub fn handle_pointer(&mut self, event: PointerEvent, store: &mut GraphStore) -> bool {
		match event {
			PointerEvent::Down(point) => {
				if let Some(node) = store.find_node_at(point) {
					self.drag = Some(DragSession {
						node: node.id,
						grab: Point::new(point.x - node.x, point.y - node.y),
					});
				}
				false
			}
			PointerEvent::Move(point) => {
				let Some(drag) = self.drag else {
					return false;
				};
				store.move_node(
					drag.node,
					Point::new(point.x - drag.grab.x, point.y - drag.grab.y),
				);
				true
			}
			PointerEvent::Up => {
				// Positions were applied move by move; nothing left to commit.
				self.drag = None;
				false
			}
			PointerEvent::Click(point) => {
				self.handle_click(point, store);
				true
			}
		}
	}

	/// The two-click connect gesture, evaluated independently of drag state.
	fn handle_click(&mut self, point: Point, store: &mut GraphStore) {
		let Some(clicked) = store.find_node_at(point).map(|node| node.id) else {
			// Empty canvas: drop selection and any half-finished gesture.
			self.selected = None;
			self.pending_link_source = None;
			return;
		};

		match self.pending_link_source {
			None => {
				self.pending_link_source = Some(clicked);
				self.selected = Some(clicked);
			}
			Some(source) if source != clicked => {
				store.create_link(source, clicked);
				self.pending_link_source = None;
				self.selected = Some(clicked);
			}
			Some(_) => {
				// Same node twice cancels the gesture but keeps it selected.
				self.pending_link_source = None;
			}
		}
	}

	/// Clicks that never reach the canvas clear selection and gesture state.
	pub fn clear_selection(&mut self) {
		self.selected = None;
		self.pending_link_source = None;
	}

	/// Deletes the selected node and its links.
	pub fn delete_selected(&mut self, store: &mut GraphStore) -> Result<(), Notice> {
		let id = self.selected.ok_or(Notice::NothingSelected)?;
		store.delete_node(id);
		self.selected = None;
		if self.pending_link_source == Some(id) {
			self.pending_link_source = None;
		}
		Ok(())
	}

	/// Renames the selected node.
	pub fn rename_selected(&mut self, store: &mut GraphStore, label: &str) -> Result<(), Notice> {
		let id = self.selected.ok_or(Notice::NothingSelected)?;
		store.rename_node(id, label).map_err(|err| match err {
			StoreError::EmptyLabel => Notice::EmptyLabel,
			StoreError::NotFound(_) => Notice::NothingSelected,
		})
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::super::types::Link;
	use super::*;

	fn setup(labels: &[&str]) -> (GraphStore, InteractionController) {
		let mut store = GraphStore::new();
		for label in labels {
			store.create_node(label).unwrap();
		}
		(store, InteractionController::new())
	}

	fn click_node(
		controller: &mut InteractionController,
		store: &mut GraphStore,
		id: NodeId,
	) -> bool {
		let center = store.node(id).unwrap().center();
		controller.handle_pointer(PointerEvent::Click(center), store)
	}

	#[test]
	fn first_click_selects_and_arms_the_connect_gesture() {
		let (mut store, mut controller) = setup(&["a"]);
		let redraw = click_node(&mut controller, &mut store, 0);

		assert!(redraw);
		assert_eq!(controller.selected(), Some(0));
		assert_eq!(controller.pending_link_source(), Some(0));
		assert!(store.links().is_empty());
	}

	#[test]
	fn second_click_on_another_node_creates_the_link() {
		let (mut store, mut controller) = setup(&["a", "b"]);
		store.move_node(0, Point::new(0.0, 0.0));
		store.move_node(1, Point::new(300.0, 300.0));

		click_node(&mut controller, &mut store, 0);
		click_node(&mut controller, &mut store, 1);

		assert_eq!(store.links(), &[Link { source: 0, target: 1 }]);
		assert_eq!(controller.pending_link_source(), None);
		assert_eq!(controller.selected(), Some(1));
	}

	#[test]
	fn clicking_the_same_node_twice_cancels_without_linking() {
		let (mut store, mut controller) = setup(&["a"]);
		click_node(&mut controller, &mut store, 0);
		click_node(&mut controller, &mut store, 0);

		assert!(store.links().is_empty());
		assert_eq!(controller.pending_link_source(), None);
		// The node stays selected, only the gesture is abandoned.
		assert_eq!(controller.selected(), Some(0));
	}

	#[test]
	fn empty_canvas_click_clears_selection_and_gesture_in_one_step() {
		let (mut store, mut controller) = setup(&["a"]);
		store.move_node(0, Point::new(0.0, 0.0));
		click_node(&mut controller, &mut store, 0);

		controller.handle_pointer(PointerEvent::Click(Point::new(790.0, 590.0)), &mut store);

		assert_eq!(controller.selected(), None);
		assert_eq!(controller.pending_link_source(), None);
	}

	#[test]
	fn outside_click_clears_selection_and_gesture_mid_flight() {
		let (mut store, mut controller) = setup(&["a", "b"]);
		store.move_node(0, Point::new(0.0, 0.0));
		store.move_node(1, Point::new(300.0, 300.0));
		click_node(&mut controller, &mut store, 0);
		assert_eq!(controller.pending_link_source(), Some(0));

		// A click that never reaches the canvas lands here.
		controller.clear_selection();

		assert_eq!(controller.selected(), None);
		assert_eq!(controller.pending_link_source(), None);

		// The abandoned gesture leaves no trace: the next click starts over.
		click_node(&mut controller, &mut store, 1);
		assert!(store.links().is_empty());
		assert_eq!(controller.pending_link_source(), Some(1));
	}

	#[test]
	fn connect_then_delete_scenario_leaves_no_dangling_links() {
		let (mut store, mut controller) = setup(&["a", "b", "c"]);
		store.move_node(0, Point::new(0.0, 0.0));
		store.move_node(1, Point::new(200.0, 0.0));
		store.move_node(2, Point::new(400.0, 0.0));

		click_node(&mut controller, &mut store, 0);
		click_node(&mut controller, &mut store, 1);
		click_node(&mut controller, &mut store, 2);
		click_node(&mut controller, &mut store, 0);

		assert_eq!(
			store.links(),
			&[
				Link { source: 0, target: 1 },
				Link { source: 2, target: 0 },
			]
		);

		controller.handle_pointer(
			PointerEvent::Click(store.node(0).unwrap().center()),
			&mut store,
		);
		controller.delete_selected(&mut store).unwrap();

		assert!(store.node(0).is_none());
		assert!(store.links().is_empty());
		assert_eq!(store.nodes().len(), 2);
		assert_eq!(controller.selected(), None);
		assert_eq!(controller.pending_link_source(), None);
	}

	#[test]
	fn drag_preserves_the_grab_offset_throughout() {
		let (mut store, mut controller) = setup(&["a"]);
		store.move_node(0, Point::new(100.0, 100.0));

		// Grab 10 right and 5 down of the node origin.
		let down = controller.handle_pointer(PointerEvent::Down(Point::new(110.0, 105.0)), &mut store);
		assert!(!down, "pointer-down alone must not mutate or redraw");

		for (x, y) in [(150.0, 140.0), (260.0, 280.0), (300.0, 200.0)] {
			let moved = controller.handle_pointer(PointerEvent::Move(Point::new(x, y)), &mut store);
			assert!(moved, "every move during a drag redraws");
			let node = store.node(0).unwrap();
			assert_eq!((node.x, node.y), (x - 10.0, y - 5.0));
		}

		controller.handle_pointer(PointerEvent::Up, &mut store);
		let node = store.node(0).unwrap();
		assert_eq!((node.x, node.y), (290.0, 195.0));

		// The session is gone: further moves do nothing.
		let moved = controller.handle_pointer(PointerEvent::Move(Point::new(0.0, 0.0)), &mut store);
		assert!(!moved);
		assert_eq!(store.node(0).unwrap().x, 290.0);
	}

	#[test]
	fn moves_without_a_drag_session_are_ignored() {
		let (mut store, mut controller) = setup(&["a"]);
		store.move_node(0, Point::new(100.0, 100.0));

		// Down on empty space starts nothing.
		controller.handle_pointer(PointerEvent::Down(Point::new(700.0, 500.0)), &mut store);
		let moved = controller.handle_pointer(PointerEvent::Move(Point::new(50.0, 50.0)), &mut store);

		assert!(!moved);
		assert_eq!(store.node(0).unwrap().x, 100.0);
	}

	#[test]
	fn toolbar_operations_require_a_selection() {
		let (mut store, mut controller) = setup(&["a"]);

		assert_eq!(
			controller.delete_selected(&mut store),
			Err(Notice::NothingSelected)
		);
		assert_eq!(
			controller.rename_selected(&mut store, "x"),
			Err(Notice::NothingSelected)
		);
		assert_eq!(store.nodes().len(), 1);
	}

	#[test]
	fn rename_selected_maps_blank_labels_to_a_notice() {
		let (mut store, mut controller) = setup(&["a"]);
		click_node(&mut controller, &mut store, 0);

		assert_eq!(
			controller.rename_selected(&mut store, "  "),
			Err(Notice::EmptyLabel)
		);
		assert_eq!(store.node(0).unwrap().label, "a");

		controller.rename_selected(&mut store, "b").unwrap();
		assert_eq!(store.node(0).unwrap().label, "b");
	}
}

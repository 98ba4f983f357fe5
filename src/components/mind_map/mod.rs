mod component;
mod controller;
mod geometry;
mod render;
mod store;
mod types;

pub use component::MindMapCanvas;
pub use controller::{InteractionController, Notice, PointerEvent};
pub use geometry::{CornerRadii, PathCommand, Rect, rounded_rect_path};
pub use store::{GraphStore, StoreError};
pub use types::{Link, Node, NodeId, Point};

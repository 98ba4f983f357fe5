//! Canvas drawing. A full clear-and-redraw runs after every mutating event;
//! at hand-built diagram sizes that is cheap enough to keep the renderer
//! stateless.

use web_sys::CanvasRenderingContext2d;

use super::geometry::{CornerRadii, PathCommand, Rect, rounded_rect_path};
use super::store::GraphStore;
use super::types::{CANVAS_HEIGHT, CANVAS_WIDTH, NODE_HEIGHT, NODE_WIDTH, NodeId};

const LINK_STROKE: &str = "#999";
const LINK_WIDTH: f64 = 2.0;
const NODE_CORNER_RADIUS: f64 = 10.0;
const NODE_STROKE: &str = "#000";
const NODE_STROKE_WIDTH: f64 = 1.0;
const SELECTED_STROKE: &str = "red";
const SELECTED_STROKE_WIDTH: f64 = 3.0;
const LABEL_FILL: &str = "#000";

/// Clears the surface and redraws the whole diagram: links first, then nodes
/// on top in creation order.
pub fn render(store: &GraphStore, selected: Option<NodeId>, ctx: &CanvasRenderingContext2d) {
	ctx.clear_rect(0.0, 0.0, CANVAS_WIDTH, CANVAS_HEIGHT);
	draw_links(store, ctx);
	draw_nodes(store, selected, ctx);
}

fn draw_links(store: &GraphStore, ctx: &CanvasRenderingContext2d) {
	ctx.set_stroke_style_str(LINK_STROKE);
	ctx.set_line_width(LINK_WIDTH);

	for link in store.links() {
		let (Some(source), Some(target)) = (store.node(link.source), store.node(link.target))
		else {
			continue;
		};
		let (from, to) = (source.center(), target.center());
		ctx.begin_path();
		ctx.move_to(from.x, from.y);
		ctx.line_to(to.x, to.y);
		ctx.stroke();
	}
}

fn draw_nodes(store: &GraphStore, selected: Option<NodeId>, ctx: &CanvasRenderingContext2d) {
	for node in store.nodes() {
		let outline = rounded_rect_path(
			Rect {
				x: node.x,
				y: node.y,
				width: NODE_WIDTH,
				height: NODE_HEIGHT,
			},
			CornerRadii::uniform(NODE_CORNER_RADIUS),
		);
		trace_path(ctx, &outline);

		ctx.set_fill_style_str(&node.color);
		ctx.fill();

		if selected == Some(node.id) {
			ctx.set_stroke_style_str(SELECTED_STROKE);
			ctx.set_line_width(SELECTED_STROKE_WIDTH);
		} else {
			ctx.set_stroke_style_str(NODE_STROKE);
			ctx.set_line_width(NODE_STROKE_WIDTH);
		}
		ctx.stroke();

		let center = node.center();
		ctx.set_fill_style_str(LABEL_FILL);
		ctx.set_text_align("center");
		ctx.set_text_baseline("middle");
		let _ = ctx.fill_text(&node.label, center.x, center.y);
	}
}

/// Replays an outline onto the 2D context as one path.
fn trace_path(ctx: &CanvasRenderingContext2d, commands: &[PathCommand]) {
	ctx.begin_path();
	for command in commands {
		match *command {
			PathCommand::MoveTo(p) => ctx.move_to(p.x, p.y),
			PathCommand::LineTo(p) => ctx.line_to(p.x, p.y),
			PathCommand::QuadTo { ctrl, to } => ctx.quadratic_curve_to(ctrl.x, ctrl.y, to.x, to.y),
			PathCommand::Close => ctx.close_path(),
		}
	}
}

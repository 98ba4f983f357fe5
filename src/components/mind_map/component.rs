//! Leptos component wiring DOM events into the controller and store.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::info;
use wasm_bindgen::prelude::*;
use web_sys::{
	CanvasRenderingContext2d, HtmlAnchorElement, HtmlCanvasElement, HtmlDivElement,
	HtmlInputElement, MouseEvent, Window,
};

use super::controller::{InteractionController, Notice, PointerEvent};
use super::render;
use super::store::GraphStore;
use super::types::{CANVAS_HEIGHT, CANVAS_WIDTH, Point};

struct EditorState {
	store: GraphStore,
	controller: InteractionController,
}

impl EditorState {
	fn new() -> Self {
		Self {
			store: GraphStore::with_seed(js_sys::Date::now() as u64),
			controller: InteractionController::new(),
		}
	}
}

fn canvas_point(canvas: &HtmlCanvasElement, ev: &MouseEvent) -> Point {
	let rect = canvas.get_bounding_client_rect();
	Point::new(
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	)
}

fn redraw(state: &EditorState, canvas: &HtmlCanvasElement) {
	let ctx: CanvasRenderingContext2d = canvas
		.get_context("2d")
		.unwrap()
		.unwrap()
		.dyn_into()
		.unwrap();
	render::render(&state.store, state.controller.selected(), &ctx);
}

fn notify(notice: Notice) {
	let window: Window = web_sys::window().unwrap();
	let _ = window.alert_with_message(&notice.to_string());
}

/// Whether a click landed on an element inside `container`. Document-level
/// listeners use this instead of relying on other components stopping
/// propagation.
fn click_was_inside(container: &HtmlDivElement, ev: &MouseEvent) -> bool {
	ev.target()
		.and_then(|target| target.dyn_into::<web_sys::Node>().ok())
		.is_some_and(|node| container.contains(Some(&node)))
}

/// The diagram editor: a fixed 800x600 canvas plus its toolbar.
#[component]
pub fn MindMapCanvas() -> impl IntoView {
	let container_ref = NodeRef::<leptos::html::Div>::new();
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let input_ref = NodeRef::<leptos::html::Input>::new();
	let state: Rc<RefCell<EditorState>> = Rc::new(RefCell::new(EditorState::new()));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let outside_cb: Rc<RefCell<Option<Closure<dyn FnMut(MouseEvent)>>>> =
		Rc::new(RefCell::new(None));
	let (state_init, resize_cb_init, outside_cb_init) =
		(state.clone(), resize_cb.clone(), outside_cb.clone());

	Effect::new(move |_| {
		if resize_cb_init.borrow().is_some() {
			return;
		}
		let (Some(canvas), Some(container)) = (canvas_ref.get(), container_ref.get()) else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let container: HtmlDivElement = container.into();
		let window: Window = web_sys::window().unwrap();

		canvas.set_width(CANVAS_WIDTH as u32);
		canvas.set_height(CANVAS_HEIGHT as u32);
		redraw(&state_init.borrow(), &canvas);

		// The surface keeps its fixed logical size; a window resize just
		// reasserts it and redraws.
		let (state_resize, canvas_resize) = (state_init.clone(), canvas.clone());
		*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
			canvas_resize.set_width(CANVAS_WIDTH as u32);
			canvas_resize.set_height(CANVAS_HEIGHT as u32);
			redraw(&state_resize.borrow(), &canvas_resize);
		}));
		if let Some(ref cb) = *resize_cb_init.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		// Clicks landing anywhere outside the editor (canvas and toolbar)
		// clear the selection and any pending connect gesture. Clicks inside
		// are already handled by the component's own handlers.
		let (state_outside, canvas_outside) = (state_init.clone(), canvas.clone());
		*outside_cb_init.borrow_mut() = Some(Closure::new(move |ev: MouseEvent| {
			if click_was_inside(&container, &ev) {
				return;
			}
			state_outside.borrow_mut().controller.clear_selection();
			redraw(&state_outside.borrow(), &canvas_outside);
		}));
		if let Some(ref cb) = *outside_cb_init.borrow() {
			let _ = window
				.document()
				.unwrap()
				.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref());
		}
	});

	let state_md = state.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let canvas: HtmlCanvasElement = canvas_ref.get().unwrap().into();
		let point = canvas_point(&canvas, &ev);
		let mut s = state_md.borrow_mut();
		let EditorState { store, controller } = &mut *s;
		if controller.handle_pointer(PointerEvent::Down(point), store) {
			redraw(&s, &canvas);
		}
	};

	let state_mm = state.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let canvas: HtmlCanvasElement = canvas_ref.get().unwrap().into();
		let point = canvas_point(&canvas, &ev);
		let mut s = state_mm.borrow_mut();
		let EditorState { store, controller } = &mut *s;
		if controller.handle_pointer(PointerEvent::Move(point), store) {
			redraw(&s, &canvas);
		}
	};

	let state_mu = state.clone();
	let on_mouseup = move |_: MouseEvent| {
		let canvas: HtmlCanvasElement = canvas_ref.get().unwrap().into();
		let mut s = state_mu.borrow_mut();
		let EditorState { store, controller } = &mut *s;
		if controller.handle_pointer(PointerEvent::Up, store) {
			redraw(&s, &canvas);
		}
	};

	let state_click = state.clone();
	let on_click = move |ev: MouseEvent| {
		let canvas: HtmlCanvasElement = canvas_ref.get().unwrap().into();
		let point = canvas_point(&canvas, &ev);
		let mut s = state_click.borrow_mut();
		let EditorState { store, controller } = &mut *s;
		if controller.handle_pointer(PointerEvent::Click(point), store) {
			redraw(&s, &canvas);
		}
	};

	let state_add = state.clone();
	let on_add = move |_: MouseEvent| {
		let input: HtmlInputElement = input_ref.get().unwrap().into();
		let mut s = state_add.borrow_mut();
		// An empty label is silently ignored.
		if s.store.create_node(&input.value()).is_ok() {
			input.set_value("");
			let canvas: HtmlCanvasElement = canvas_ref.get().unwrap().into();
			redraw(&s, &canvas);
		}
	};

	let state_rename = state.clone();
	let on_rename = move |_: MouseEvent| {
		let input: HtmlInputElement = input_ref.get().unwrap().into();
		let mut s = state_rename.borrow_mut();
		let EditorState { store, controller } = &mut *s;
		match controller.rename_selected(store, &input.value()) {
			Ok(()) => {
				input.set_value("");
				let canvas: HtmlCanvasElement = canvas_ref.get().unwrap().into();
				redraw(&s, &canvas);
			}
			Err(notice) => notify(notice),
		}
	};

	let state_delete = state.clone();
	let on_delete = move |_: MouseEvent| {
		let mut s = state_delete.borrow_mut();
		let EditorState { store, controller } = &mut *s;
		match controller.delete_selected(store) {
			Ok(()) => {
				let canvas: HtmlCanvasElement = canvas_ref.get().unwrap().into();
				redraw(&s, &canvas);
			}
			Err(notice) => notify(notice),
		}
	};

	let on_export = move |_: MouseEvent| {
		let canvas: HtmlCanvasElement = canvas_ref.get().unwrap().into();
		let url = canvas.to_data_url().unwrap();
		let document = web_sys::window().unwrap().document().unwrap();
		let anchor: HtmlAnchorElement = document
			.create_element("a")
			.unwrap()
			.dyn_into()
			.unwrap();
		anchor.set_href(&url);
		anchor.set_download("mind-map.png");
		anchor.click();
		info!("Exported diagram image");
	};

	view! {
		<div class="mind-map" node_ref=container_ref>
			<div class="toolbar">
				<input node_ref=input_ref type="text" placeholder="Node label" />
				<button on:click=on_add>"Add Node"</button>
				<button on:click=on_rename>"Rename"</button>
				<button on:click=on_delete>"Delete"</button>
				<button on:click=on_export>"Export"</button>
			</div>
			<canvas
				node_ref=canvas_ref
				class="mind-map-canvas"
				on:mousedown=on_mousedown
				on:mousemove=on_mousemove
				on:mouseup=on_mouseup
				on:click=on_click
				style="display: block; cursor: grab;"
			/>
		</div>
	}
}

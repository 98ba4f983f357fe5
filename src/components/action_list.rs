//! Free-text action-point list. Independent of the graph: it shares no data
//! with the store, only the page layout.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlDivElement, HtmlInputElement, MouseEvent, Window};

fn notify(message: &str) {
	let window: Window = web_sys::window().unwrap();
	let _ = window.alert_with_message(message);
}

/// Whether a click landed on an element inside `container`. The deselect
/// listener checks this itself rather than depending on other components
/// stopping propagation.
fn click_was_inside(container: &HtmlDivElement, ev: &MouseEvent) -> bool {
	ev.target()
		.and_then(|target| target.dyn_into::<web_sys::Node>().ok())
		.is_some_and(|node| container.contains(Some(&node)))
}

/// A flat list of action points: add, single-select by click, delete.
#[component]
pub fn ActionPointList() -> impl IntoView {
	let items: RwSignal<Vec<String>> = RwSignal::new(Vec::new());
	let selected: RwSignal<Option<usize>> = RwSignal::new(None);
	let container_ref = NodeRef::<leptos::html::Div>::new();
	let input_ref = NodeRef::<leptos::html::Input>::new();
	let outside_cb: Rc<RefCell<Option<Closure<dyn FnMut(MouseEvent)>>>> =
		Rc::new(RefCell::new(None));
	let outside_cb_init = outside_cb.clone();

	// Any click outside the list widget deselects; clicks on items and the
	// list's own toolbar keep the selection for their own handlers.
	Effect::new(move |_| {
		if outside_cb_init.borrow().is_some() {
			return;
		}
		let Some(container) = container_ref.get() else {
			return;
		};
		let container: HtmlDivElement = container.into();
		*outside_cb_init.borrow_mut() = Some(Closure::new(move |ev: MouseEvent| {
			if click_was_inside(&container, &ev) {
				return;
			}
			selected.set(None);
		}));
		if let Some(ref cb) = *outside_cb_init.borrow() {
			let _ = web_sys::window()
				.unwrap()
				.document()
				.unwrap()
				.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref());
		}
	});

	let on_add = move |_: MouseEvent| {
		let input: HtmlInputElement = input_ref.get().unwrap().into();
		let text = input.value();
		let text = text.trim();
		if text.is_empty() {
			notify("enter an action point first");
			return;
		}
		items.update(|items| items.push(text.to_owned()));
		input.set_value("");
	};

	let on_delete = move |_: MouseEvent| match selected.get() {
		Some(index) => {
			items.update(|items| {
				items.remove(index);
			});
			selected.set(None);
		}
		None => notify("select an action point first"),
	};

	view! {
		<div class="action-points" node_ref=container_ref>
			<h2>"Action Points"</h2>
			<div class="toolbar">
				<input node_ref=input_ref type="text" placeholder="Action point" />
				<button on:click=on_add>"Add"</button>
				<button on:click=on_delete>"Delete Selected"</button>
			</div>
			<ul>
				{move || {
					items
						.get()
						.into_iter()
						.enumerate()
						.map(|(index, text)| {
							view! {
								<li
									class:selected=move || selected.get() == Some(index)
									on:click=move |_: MouseEvent| selected.set(Some(index))
								>
									{text}
								</li>
							}
						})
						.collect_view()
				}}
			</ul>
		</div>
	}
}

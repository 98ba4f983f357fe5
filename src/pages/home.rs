use leptos::prelude::*;

use crate::components::action_list::ActionPointList;
use crate::components::mind_map::MindMapCanvas;

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<div class="workspace">
				<h1>"Mind Map"</h1>
				<MindMapCanvas />
				<ActionPointList />
			</div>
		</ErrorBoundary>
	}
}

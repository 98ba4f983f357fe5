use leptos::prelude::*;
use mind_map_canvas::{App, init_logging};

fn main() {
	init_logging();
	leptos::mount::mount_to_body(|| view! { <App /> });
}

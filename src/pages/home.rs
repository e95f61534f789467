use leptos::prelude::*;

use crate::components::sandbox::SandboxCanvas;

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

			<div class="sandbox">
				<SandboxCanvas />
				<div class="sandbox-help">
					<p>"F: vertex tool. G: edge tool. Ctrl+Z: undo. Esc: close."</p>
					<p class="subtitle">
						"Click inside the left panel to place vertices, then click two vertices to join them."
					</p>
				</div>
			</div>
		</ErrorBoundary>
	}
}

use crate::prelude::*;

/// The login page. Rendered without the layout chrome; the session itself is
/// established by the server setting the auth cookie.
#[component]
pub fn LoginPage() -> impl IntoView {
	view! {
		<div class="h-full flex items-center justify-center">
			<h1 class="text-2xl">"Welcome to Photoview"</h1>
		</div>
	}
}

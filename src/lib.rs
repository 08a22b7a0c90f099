//! Web UI shell for Photoview

/// Prelude module. Used to re-export commonly used items.
pub mod prelude {
	pub use leptos::*;
	pub use leptos_router::*;
	pub use leptos_use::use_cookie;

	pub use crate::{api::*, components::*, i18n::*, queries::*, utils::*};
}

/// The API module. Contains the GraphQL client and the typed documents and
/// responses this frontend consumes.
pub mod api;
/// The application logic code. Contains the router and all the routing logic.
pub mod app;
/// The components module. Contains the page chrome: layout, header, side
/// menu and the building blocks they compose.
pub mod components;
/// The i18n module. Locale-aware lookup of display strings.
pub mod i18n;
/// The pages module. Pages are the main views that are rendered when a route
/// is matched.
pub mod pages;
/// The queries module. Query scopes for the read-only GraphQL queries, backed
/// by the query cache.
pub mod queries;
/// The utils module. Auth state, routes, constants and extension traits.
pub mod utils;

use leptos_meta::{provide_meta_context, Link as MetaLink, Meta, Stylesheet, Title};
use prelude::*;

/// The main hydrate function. Called when the application starts on the
/// client side.
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
	wasm_logger::init(wasm_logger::Config::default());

	if cfg!(debug_assertions) {
		console_error_panic_hook::set_once();
	}

	mount_to_body(render);
}

/// The main render function. Sets up the meta context, the query client and
/// the locale, then mounts the router.
pub fn render() -> impl IntoView {
	use app::App;

	provide_meta_context();
	leptos_query::provide_query_client();
	provide_locale();

	view! {
		<>
			<Meta charset="utf-8"/>
			<MetaLink rel="shortcut icon" href="/favicon.svg" type_="image/svg+xml"/>
			<Meta name="viewport" content="width=device-width, initial-scale=1"/>
			<Meta name="theme-color" content="#ffffff"/>
			<Meta
				name="description"
				content="Photoview: a simple and user-friendly photo gallery for personal servers"
			/>
			<Stylesheet id="leptos" href="/pkg/photoview.css"/>

			<Title formatter={|title: String| page_title(&title)}/>

			<App/>
		</>
	}
}

use crate::prelude::*;

/// The map-based browsing page. Only linked to from the side menu while the
/// map feature flag is on, but the route itself is always mounted.
#[component]
pub fn PlacesPage() -> impl IntoView {
	let t = use_translation();

	view! {
		<Layout title={t("sidemenu.places", "Places")}>
			<h1 class="text-2xl mb-4">{t("sidemenu.places", "Places")}</h1>
		</Layout>
	}
}
